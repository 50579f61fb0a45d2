use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which provider family a query is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    Place,
    Event,
    #[default]
    Both,
}

/// Normalized category tags.
///
/// Declaration order is the taxonomy order; `categories` serializes in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Nightlife,
    Music,
    Art,
    History,
    Fitness,
    Outdoor,
    Social,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Nightlife => "nightlife",
            Category::Music => "music",
            Category::Art => "art",
            Category::History => "history",
            Category::Fitness => "fitness",
            Category::Outdoor => "outdoor",
            Category::Social => "social",
            Category::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLabel {
    Now,
    Today,
    Tonight,
    Weekend,
    Specific,
}

impl TimeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeLabel::Now => "now",
            TimeLabel::Today => "today",
            TimeLabel::Tonight => "tonight",
            TimeLabel::Weekend => "weekend",
            TimeLabel::Specific => "specific",
        }
    }
}

/// An explicit time signal. `day` is only set for [`TimeLabel::Specific`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    pub label: TimeLabel,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "weekday_serde")]
    pub day: Option<Weekday>,
}

impl TimeContext {
    pub fn label(label: TimeLabel) -> Self {
        Self { label, day: None }
    }

    pub fn specific(day: Weekday) -> Self {
        Self { label: TimeLabel::Specific, day: Some(day) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    NearMe,
    City,
    Zip,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationHint {
    #[serde(rename = "type")]
    pub kind: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl LocationHint {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_resolved(&self) -> bool {
        self.kind != LocationType::Unknown
    }
}

/// Structured interpretation of one free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIntent {
    /// The input exactly as received.
    pub raw_query: String,
    pub intent_type: IntentType,
    /// Canonical terms in first-seen order.
    pub keywords: Vec<String>,
    pub vibe: Vec<String>,
    /// Never empty: holds at least [`Category::Other`].
    pub categories: BTreeSet<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_context: Option<TimeContext>,
    pub location_hint: LocationHint,
    /// Always finite and within `[0, 1]`.
    pub confidence: f64,
}

impl SearchIntent {
    /// The maximally conservative intent: no evidence of anything.
    pub fn conservative(raw_query: impl Into<String>) -> Self {
        Self {
            raw_query: raw_query.into(),
            intent_type: IntentType::Both,
            keywords: Vec::new(),
            vibe: Vec::new(),
            categories: BTreeSet::from([Category::Other]),
            time_context: None,
            location_hint: LocationHint::unknown(),
            confidence: 0.0,
        }
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

mod weekday_serde {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Option<Weekday>, serializer: S) -> Result<S::Ok, S::Error> {
        match day {
            Some(day) => serializer.serialize_str(name(*day)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Weekday>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => {
                s.parse::<Weekday>().map(Some).map_err(|_| serde::de::Error::custom(format!("invalid weekday '{s}'")))
            }
        }
    }

    pub fn name(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conservative_intent_has_other_category_and_zero_confidence() {
        let intent = SearchIntent::conservative("");
        assert_eq!(intent.intent_type, IntentType::Both);
        assert_eq!(intent.categories.iter().copied().collect::<Vec<_>>(), vec![Category::Other]);
        assert_eq!(intent.confidence, 0.0);
        assert!(intent.time_context.is_none());
        assert!(!intent.location_hint.is_resolved());
    }

    #[test]
    fn serializes_with_camel_case_and_snake_case_tags() {
        let mut intent = SearchIntent::conservative("fri");
        intent.time_context = Some(TimeContext::specific(Weekday::Fri));
        intent.location_hint = LocationHint { kind: LocationType::NearMe, value: None };

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["rawQuery"], "fri");
        assert_eq!(json["intentType"], "both");
        assert_eq!(json["categories"], serde_json::json!(["other"]));
        assert_eq!(json["timeContext"]["label"], "specific");
        assert_eq!(json["timeContext"]["day"], "friday");
        assert_eq!(json["locationHint"]["type"], "near_me");
        assert!(json["locationHint"].get("value").is_none());
    }

    #[test]
    fn deserializes_what_it_serializes() {
        let mut intent = SearchIntent::conservative("live jazz saturday");
        intent.time_context = Some(TimeContext::specific(Weekday::Sat));
        intent.categories = BTreeSet::from([Category::Music, Category::Nightlife]);

        let text = serde_json::to_string(&intent).unwrap();
        let back: SearchIntent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, intent);
        assert_eq!(
            back.categories.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            vec!["nightlife", "music"]
        );
    }
}
