use crate::config::PlannerLimits;
use crate::engine::{IntentParser, ParseMetrics, ParseRun};
use crate::error::{Result, RouteError, panic_message};
use crate::plan::ProviderPlan;
use crate::planner::{self, Route, Signals, Tier};
use crate::SearchIntent;
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Routing context.
///
/// Holds the reference instant that relative time labels ("tonight",
/// "this weekend") are resolved against.
#[derive(Debug, Clone)]
pub struct Context {
    /// "Now", in the caller's local offset.
    pub reference_time: DateTime<FixedOffset>,
}

impl Context {
    pub fn at(reference_time: DateTime<FixedOffset>) -> Self {
        Self { reference_time }
    }
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let fixed = DateTime::parse_from_rfc3339("2013-02-12T04:30:00+00:00");
            Self { reference_time: fixed.unwrap_or_else(|_| Local::now().fixed_offset()) }
        } else {
            Self { reference_time: Local::now().fixed_offset() }
        }
    }
}

/// Options that affect parsing and planning.
///
/// Deserializable from JSON; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Characters of input the parser scans. Longer queries are cut, but
    /// `rawQuery` still echoes them in full.
    pub max_query_chars: usize,
    pub planner: PlannerLimits,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_query_chars: 512, planner: PlannerLimits::default() }
    }
}

impl Options {
    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut options: Self = serde_json::from_str(text)?;
        options.planner = options.planner.sanitized();
        Ok(options)
    }
}

/// Result from [`route`] and [`route_with`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub intent: SearchIntent,
    pub plan: ProviderPlan,
}

/// Result from [`route_verbose_with`]: the route plus the decisions and
/// timings behind it.
#[derive(Debug, Clone)]
pub struct RouteDetails {
    pub intent: SearchIntent,
    pub plan: ProviderPlan,
    /// The text the parser stages ran on.
    pub normalized: String,
    pub signals: Signals,
    /// `None` when planning failed and the fallback plan was used.
    pub tier: Option<Tier>,
    pub route: Option<Route>,
    pub parse: ParseMetrics,
    pub plan_elapsed: Duration,
    pub total: Duration,
}

/// Parse `text` into a [`SearchIntent`] with default [`Options`].
///
/// # Example
/// ```
/// use wayfind::{IntentType, parse_intent};
///
/// let intent = parse_intent("pizza near me");
/// assert_eq!(intent.intent_type, IntentType::Place);
/// assert_eq!(intent.keywords, vec!["restaurant"]);
/// ```
pub fn parse_intent(text: &str) -> SearchIntent {
    parse_intent_with(text, &Options::default())
}

/// Parse `text` with explicit `options`. Never panics: internal faults yield
/// [`SearchIntent::conservative`].
pub fn parse_intent_with(text: &str, options: &Options) -> SearchIntent {
    guarded(|| IntentParser::new(text).max_chars(options.max_query_chars).run()).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "intent parsing failed, using conservative intent");
        SearchIntent::conservative(text)
    })
}

/// Parse a JSON value. Anything but a string yields the conservative intent.
pub fn parse_intent_value(value: &serde_json::Value) -> SearchIntent {
    match value.as_str() {
        Some(text) => parse_intent(text),
        None => {
            let err = RouteError::NotAString(json_kind(value));
            tracing::warn!(error = %err, "intent parsing skipped, using conservative intent");
            SearchIntent::conservative("")
        }
    }
}

/// Build a provider plan for `intent` with a default [`Context`] and [`Options`].
pub fn build_plan(intent: &SearchIntent) -> ProviderPlan {
    build_plan_with(intent, &Context::default(), &Options::default())
}

/// Build a provider plan relative to `context.reference_time`. Never panics:
/// internal faults yield [`ProviderPlan::fallback`].
pub fn build_plan_with(intent: &SearchIntent, context: &Context, options: &Options) -> ProviderPlan {
    match guarded(|| planner::plan(intent, context.reference_time, options)) {
        Ok(planned) => planned.plan,
        Err(err) => fallback_plan(&err),
    }
}

/// Build a plan from a JSON intent document. Malformed documents yield the
/// fallback plan.
pub fn build_plan_value(value: &serde_json::Value) -> ProviderPlan {
    match SearchIntent::deserialize(value) {
        Ok(intent) => build_plan(&intent),
        Err(err) => fallback_plan(&RouteError::from(err)),
    }
}

/// Parse and plan in one step with defaults.
///
/// # Example
/// ```
/// use wayfind::route;
///
/// let out = route("live concerts this weekend in Austin");
/// assert!(out.plan.call_events);
/// assert!(out.plan.date_range().is_some());
/// ```
pub fn route(text: &str) -> RouteResult {
    route_with(text, &Context::default(), &Options::default())
}

pub fn route_with(text: &str, context: &Context, options: &Options) -> RouteResult {
    let intent = parse_intent_with(text, options);
    let plan = build_plan_with(&intent, context, options);
    RouteResult { intent, plan }
}

/// Parse and plan, returning the decisions and stage timings as well.
///
/// The plain [`route_with`] path does not read the clock.
pub fn route_verbose_with(text: &str, context: &Context, options: &Options) -> RouteDetails {
    let start = Instant::now();

    let run = guarded(|| IntentParser::new(text).max_chars(options.max_query_chars).run_with_metrics())
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "intent parsing failed, using conservative intent");
            ParseRun { intent: SearchIntent::conservative(text), normalized: String::new(), metrics: ParseMetrics::default() }
        });

    let plan_start = Instant::now();
    let planned = guarded(|| planner::plan(&run.intent, context.reference_time, options));
    let plan_elapsed = plan_start.elapsed();

    let signals = Signals::from_intent(&run.intent, options.max_query_chars);
    let (plan, tier, route) = match planned {
        Ok(planned) => (planned.plan, Some(planned.tier), Some(planned.route)),
        Err(err) => (fallback_plan(&err), None, None),
    };

    RouteDetails {
        intent: run.intent,
        plan,
        normalized: run.normalized,
        signals,
        tier,
        route,
        parse: run.metrics,
        plan_elapsed,
        total: start.elapsed(),
    }
}

/// Run `f`, turning a panic into [`RouteError::Panicked`].
fn guarded<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| Err(RouteError::Panicked(panic_message(&*payload))))
}

fn fallback_plan(err: &RouteError) -> ProviderPlan {
    tracing::warn!(error = %err, "planning failed, using fallback plan");
    ProviderPlan::fallback(format!("fallback: {err}; calling places with conservative limits"))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, IntentType, LocationType, TimeLabel};
    use serde_json::json;

    fn reference_context() -> Context {
        // Friday evening in Chicago.
        Context::at(DateTime::parse_from_rfc3339("2024-03-08T18:45:00-06:00").unwrap())
    }

    #[test]
    fn default_context_is_fixed_under_test() {
        assert_eq!(Context::default().reference_time.to_rfc3339(), "2013-02-12T04:30:00+00:00");
    }

    #[test]
    fn non_string_values_yield_conservative_intent() {
        for value in [json!(null), json!(42), json!(["pizza"]), json!({"q": "pizza"}), json!(true)] {
            let intent = parse_intent_value(&value);
            assert_eq!(intent, SearchIntent::conservative(""));
        }
        assert_eq!(parse_intent_value(&json!("pizza")).keywords, vec!["restaurant"]);
    }

    #[test]
    fn malformed_intent_document_yields_fallback() {
        let plan = build_plan_value(&json!({"rawQuery": 3}));
        assert_eq!(plan, ProviderPlan::fallback(plan.reasoning[0].clone()));
        assert!(plan.reasoning[0].starts_with("fallback: malformed intent document"));
    }

    #[test]
    fn non_finite_confidence_yields_fallback() {
        let mut intent = SearchIntent::conservative("x");
        intent.confidence = f64::NAN;
        let plan = build_plan_with(&intent, &reference_context(), &Options::default());
        assert!(plan.call_places && !plan.call_events);
        assert_eq!(plan.places_query.map(|q| (q.radius_meters, q.max_results)), Some((4000, 20)));
    }

    #[test]
    fn well_formed_intent_document_is_planned() {
        let intent = parse_intent("museums");
        let value = serde_json::to_value(&intent).unwrap();
        let plan = build_plan_value(&value);
        assert!(plan.call_places);
        assert!(!plan.reasoning[0].starts_with("fallback"));
    }

    #[test]
    fn route_with_uses_the_reference_time() {
        let out = route_with("jazz tonight", &reference_context(), &Options::default());
        assert_eq!(out.intent.time_context.map(|t| t.label), Some(TimeLabel::Tonight));
        let range = out.plan.date_range().unwrap();
        assert_eq!(range.start.to_rfc3339(), "2024-03-08T18:45:00-06:00");
        assert_eq!(range.end.to_rfc3339(), "2024-03-08T23:59:59.999-06:00");
    }

    #[test]
    fn verbose_route_reports_decisions() {
        let details = route_verbose_with("pizza near me", &reference_context(), &Options::default());
        assert_eq!(details.tier, Some(Tier::High));
        assert_eq!(details.route, Some(Route::HighPlacesOnly));
        assert!(details.signals.contains(Signals::PLACE));
        assert_eq!(details.normalized, "pizza near me");
        assert!(details.total >= details.plan_elapsed);
        assert_eq!(details.intent.location_hint.kind, LocationType::NearMe);
    }

    #[test]
    fn options_document_overrides_planner_limits() {
        let options = Options::from_json(r#"{"planner": {"places_radius_m": 1200}, "max_query_chars": 64}"#).unwrap();
        assert_eq!(options.max_query_chars, 64);
        let out = route_with("museums and galleries", &reference_context(), &options);
        assert!(out.intent.has_category(Category::Art));
        assert_eq!(out.plan.places_query.map(|q| q.radius_meters), Some(1200));
    }

    #[test]
    fn panics_are_contained() {
        let caught = guarded::<()>(|| panic!("boom"));
        assert!(matches!(caught, Err(RouteError::Panicked(msg)) if msg == "boom"));
    }

    #[test]
    fn route_result_serializes_both_halves() {
        let out = route_with("90210", &reference_context(), &Options::default());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["intent"]["locationHint"]["type"], "zip");
        assert_eq!(json["intent"]["intentType"], "both");
        assert_eq!(json["plan"]["callPlaces"], true);
        assert_eq!(out.intent.intent_type, IntentType::Both);
    }
}
