use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Hard ceiling on places results, regardless of configuration.
pub const PLACES_MAX_RESULTS_CEILING: u32 = 40;
/// Hard ceiling on events results, regardless of configuration.
pub const EVENTS_MAX_RESULTS_CEILING: u32 = 50;
/// At most this many place-type filters are attached to a places query.
pub const PLACES_TYPES_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesQuery {
    pub radius_meters: u32,
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// Inclusive window for event start times. Serialized as ISO-8601 with offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsQuery {
    pub radius_miles: u32,
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

/// Which providers to call and how.
///
/// `places_query` is present iff `call_places`; `events_query` iff
/// `call_events`. At least one provider is always called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPlan {
    pub call_places: bool,
    pub call_events: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places_query: Option<PlacesQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_query: Option<EventsQuery>,
    /// Append-only explanation of the branches that fired.
    pub reasoning: Vec<String>,
}

impl ProviderPlan {
    /// Places-only plan with conservative limits, used when planning fails.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            call_places: true,
            call_events: false,
            places_query: Some(PlacesQuery { radius_meters: 4000, max_results: 20, types: None }),
            events_query: None,
            reasoning: vec![reason.into()],
        }
    }

    pub fn date_range(&self) -> Option<&DateRange> {
        self.events_query.as_ref().and_then(|q| q.date_range.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_calls_places_only() {
        let plan = ProviderPlan::fallback("planner fallback: boom");
        assert!(plan.call_places);
        assert!(!plan.call_events);
        assert!(plan.events_query.is_none());
        assert_eq!(plan.places_query.as_ref().map(|q| q.max_results), Some(20));
        assert_eq!(plan.reasoning, vec!["planner fallback: boom".to_string()]);
    }

    #[test]
    fn omits_absent_queries_from_json() {
        let plan = ProviderPlan::fallback("x");
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["callPlaces"], true);
        assert_eq!(json["placesQuery"]["radiusMeters"], 4000);
        assert!(json.get("eventsQuery").is_none());
        assert!(json["placesQuery"].get("types").is_none());
    }
}
