//! Provider plan builder.
//!
//! Turns a [`SearchIntent`] into a [`ProviderPlan`]: which providers to call,
//! with what radius, result cap, type filter and date window, plus a reasoning
//! trail naming every branch that fired.
//!
//! ```text
//! SearchIntent ── Signals::from_intent (signals.rs) ── Tier::from_confidence
//!                   │
//!                   v
//!             Route::decide (routing.rs)      decision table
//!                   │
//!                   v
//!             time-context override, fail-safe
//!                   │
//!                   v
//!             places_query / events_query (params.rs)
//!             date_window (window.rs)
//!                   │
//!                   v
//!             ProviderPlan
//! ```
//!
//! The planner only reads the intent contract and the lexicon; it has no
//! access to parser internals.

#[path = "planner/params.rs"]
mod params;
#[path = "planner/routing.rs"]
mod routing;
#[path = "planner/signals.rs"]
mod signals;
#[path = "planner/window.rs"]
mod window;


pub use routing::{Route, Selection};
pub use signals::{Signals, Tier};
pub use window::date_window;

use crate::error::{Result, RouteError};
use crate::plan::ProviderPlan;
use crate::{Options, SearchIntent};
use chrono::{DateTime, FixedOffset};

/// Append-only reasoning trail.
#[derive(Debug, Default, Clone)]
pub struct Reasoning(Vec<String>);

impl Reasoning {
    pub fn note(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// A plan together with the decisions that produced it.
#[derive(Debug, Clone)]
pub struct Planned {
    pub plan: ProviderPlan,
    pub tier: Tier,
    pub signals: Signals,
    pub route: Route,
}

/// Build a provider plan relative to `now`, using `options.planner` limits.
///
/// Errors only on inputs the parser never produces (non-finite confidence, a
/// specific-day label without a day) or on date overflow. Callers are
/// expected to fall back to [`ProviderPlan::fallback`].
pub fn plan(intent: &SearchIntent, now: DateTime<FixedOffset>, options: &Options) -> Result<Planned> {
    if !intent.confidence.is_finite() {
        return Err(RouteError::NonFiniteConfidence(intent.confidence));
    }
    let confidence = intent.confidence.clamp(0.0, 1.0);

    let limits = &options.planner;
    let mut trail = Reasoning::default();
    let signals = Signals::from_intent(intent, options.max_query_chars);
    let tier = Tier::from_confidence(confidence, &limits.tiers);
    trail.note(format!("confidence {confidence:.2} is {tier} tier"));

    let route = Route::decide(tier, signals, intent.intent_type);
    trail.note(route.reason());
    let mut selection = route.selection();

    let mut incidental = false;
    match &intent.time_context {
        Some(time) if !selection.events => {
            selection.events = true;
            incidental = !signals.contains(Signals::EVENT);
            trail.note(format!("time context '{}' makes events eligible", time.label.as_str()));
        }
        _ => {}
    }

    if selection.is_empty() {
        selection.places = true;
        trail.note("fail-safe: no provider selected, calling places");
    }

    let places_query = selection.places.then(|| params::places_query(intent, tier, signals, limits, &mut trail));

    let events_query = if selection.events {
        let date_range = intent.time_context.as_ref().map(|time| date_window(time, now)).transpose()?;
        let query = params::events_query(intent, tier, incidental, date_range, limits, &mut trail);
        if let (Some(range), Some(time)) = (&query.date_range, &intent.time_context) {
            trail.note(format!(
                "date window for '{}': {} to {}",
                time.label.as_str(),
                range.start.to_rfc3339(),
                range.end.to_rfc3339()
            ));
        }
        Some(query)
    } else {
        None
    };

    let plan = ProviderPlan {
        call_places: selection.places,
        call_events: selection.events,
        places_query,
        events_query,
        reasoning: trail.into_inner(),
    };

    tracing::debug!(
        tier = %tier,
        route = route.name(),
        call_places = plan.call_places,
        call_events = plan.call_events,
        "built provider plan"
    );

    Ok(Planned { plan, tier, signals, route })
}
