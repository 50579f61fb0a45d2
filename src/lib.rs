#[macro_use]
mod macros;
mod api;
mod config;
mod engine;
mod error;
mod intent;
mod lexicon;
mod plan;
pub mod planner;

pub use api::{
    Context, Options, RouteDetails, RouteResult, build_plan, build_plan_value, build_plan_with, parse_intent,
    parse_intent_value, parse_intent_with, route, route_verbose_with, route_with,
};
pub use config::{PlannerLimits, TierCaps, TierThresholds};
pub use engine::{ParseMetrics, normalize};
pub use error::RouteError;
pub use intent::{Category, IntentType, LocationHint, LocationType, SearchIntent, TimeContext, TimeLabel};
pub use plan::{
    DateRange, EVENTS_MAX_RESULTS_CEILING, EventsQuery, PLACES_MAX_RESULTS_CEILING, PLACES_TYPES_LIMIT, PlacesQuery,
    ProviderPlan,
};
pub use planner::{Route, Signals, Tier};

// --- Internal types ---------------------------------------------------------

/// Byte span into the normalized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Range {
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}
