//! The provider-selection decision table.
//!
//! Each named branch of the table is a [`Route`] variant. `Route::decide`
//! checks the branches of a tier in a fixed order and returns the first that
//! matches; the variant then knows which providers it selects and how to
//! explain itself in the reasoning trail.
//!
//! ```text
//! tier    branch            guard                                   providers
//! ------  ----------------  --------------------------------------  ---------
//! low     LowEventsOnly     EVENT && !PLACE                         events
//!         LowPlacesOnly     otherwise                               places
//! medium  MediumMixed       ABSTRACT_MIXED || (PLACE && EVENT)      both
//!         MediumEventsOnly  EVENT && !PLACE                         events
//!         MediumPlacesOnly  PLACE && !EVENT                         places
//!         MediumDefault     otherwise                               places
//! high    HighPlacesOnly    intent == place && !EVENT               places
//!         HighEventsOnly    intent == event && EVENT                events
//!         HighMixed         ABSTRACT_MIXED || (PLACE && EVENT)      both
//!         HighDefault       otherwise                               places
//! ```
//!
//! The time-context override and the fail-safe are applied by the planner
//! after the table, not here.

use super::signals::{Signals, Tier};
use crate::IntentType;
use serde::Serialize;

/// Providers selected for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub places: bool,
    pub events: bool,
}

impl Selection {
    pub const PLACES: Selection = Selection { places: true, events: false };
    pub const EVENTS: Selection = Selection { places: false, events: true };
    pub const BOTH: Selection = Selection { places: true, events: true };

    pub fn is_empty(self) -> bool {
        !self.places && !self.events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    LowEventsOnly,
    LowPlacesOnly,
    MediumMixed,
    MediumEventsOnly,
    MediumPlacesOnly,
    MediumDefault,
    HighPlacesOnly,
    HighEventsOnly,
    HighMixed,
    HighDefault,
}

impl Route {
    pub fn decide(tier: Tier, signals: Signals, intent_type: IntentType) -> Route {
        let place = signals.contains(Signals::PLACE);
        let event = signals.contains(Signals::EVENT);
        let mixed = signals.contains(Signals::ABSTRACT_MIXED) || signals.both_kinds();

        match tier {
            Tier::Low if event && !place => Route::LowEventsOnly,
            Tier::Low => Route::LowPlacesOnly,

            Tier::Medium if mixed => Route::MediumMixed,
            Tier::Medium if event && !place => Route::MediumEventsOnly,
            Tier::Medium if place && !event => Route::MediumPlacesOnly,
            Tier::Medium => Route::MediumDefault,

            Tier::High if intent_type == IntentType::Place && !event => Route::HighPlacesOnly,
            Tier::High if intent_type == IntentType::Event && event => Route::HighEventsOnly,
            Tier::High if mixed => Route::HighMixed,
            Tier::High => Route::HighDefault,
        }
    }

    pub fn selection(self) -> Selection {
        match self {
            Route::LowEventsOnly | Route::MediumEventsOnly | Route::HighEventsOnly => Selection::EVENTS,
            Route::MediumMixed | Route::HighMixed => Selection::BOTH,
            Route::LowPlacesOnly
            | Route::MediumPlacesOnly
            | Route::MediumDefault
            | Route::HighPlacesOnly
            | Route::HighDefault => Selection::PLACES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::LowEventsOnly => "low/events-only",
            Route::LowPlacesOnly => "low/places-only",
            Route::MediumMixed => "medium/mixed",
            Route::MediumEventsOnly => "medium/events-only",
            Route::MediumPlacesOnly => "medium/places-only",
            Route::MediumDefault => "medium/default",
            Route::HighPlacesOnly => "high/places-only",
            Route::HighEventsOnly => "high/events-only",
            Route::HighMixed => "high/mixed",
            Route::HighDefault => "high/default",
        }
    }

    /// One-line explanation for the reasoning trail.
    pub fn reason(self) -> &'static str {
        match self {
            Route::LowEventsOnly => "low confidence: explicit event signal and no place signal, calling events only",
            Route::LowPlacesOnly => "low confidence: one provider to limit cost, calling places only",
            Route::MediumMixed => "medium confidence: mixed or abstract query, calling both providers",
            Route::MediumEventsOnly => "medium confidence: event signal dominates, calling events only",
            Route::MediumPlacesOnly => "medium confidence: place signal dominates, calling places only",
            Route::MediumDefault => "medium confidence: no dominant signal, defaulting to places",
            Route::HighPlacesOnly => "high confidence: unambiguous place intent, calling places only",
            Route::HighEventsOnly => "high confidence: unambiguous event intent, calling events only",
            Route::HighMixed => "high confidence: mixed or abstract query, calling both providers",
            Route::HighDefault => "high confidence: no decisive signal, defaulting to places",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Signals = Signals::empty();
    const PLACE: Signals = Signals::PLACE;
    const EVENT: Signals = Signals::EVENT;
    const ABSTRACT: Signals = Signals::ABSTRACT_MIXED;

    #[test]
    fn decision_table() {
        use IntentType::{Both, Event, Place};
        let both_kinds = PLACE.union(EVENT);

        let cases: Vec<(Tier, Signals, IntentType, Route)> = vec![
            // Low: a single provider, events only with an unopposed event signal.
            (Tier::Low, NONE, Both, Route::LowPlacesOnly),
            (Tier::Low, EVENT, Event, Route::LowEventsOnly),
            (Tier::Low, both_kinds, Both, Route::LowPlacesOnly),
            (Tier::Low, ABSTRACT, Both, Route::LowPlacesOnly),
            (Tier::Low, EVENT.union(ABSTRACT), Both, Route::LowEventsOnly),
            // Medium: both only when genuinely mixed.
            (Tier::Medium, ABSTRACT, Both, Route::MediumMixed),
            (Tier::Medium, both_kinds, Both, Route::MediumMixed),
            (Tier::Medium, EVENT, Event, Route::MediumEventsOnly),
            (Tier::Medium, PLACE, Place, Route::MediumPlacesOnly),
            (Tier::Medium, NONE, Both, Route::MediumDefault),
            // High: unambiguous types first, then mixed, then places.
            (Tier::High, PLACE, Place, Route::HighPlacesOnly),
            (Tier::High, PLACE.union(ABSTRACT), Place, Route::HighPlacesOnly),
            (Tier::High, EVENT, Event, Route::HighEventsOnly),
            (Tier::High, EVENT.union(ABSTRACT), Event, Route::HighEventsOnly),
            (Tier::High, both_kinds, Both, Route::HighMixed),
            (Tier::High, ABSTRACT, Both, Route::HighMixed),
            (Tier::High, NONE, Both, Route::HighDefault),
            (Tier::High, EVENT, Both, Route::HighDefault),
        ];

        for (tier, signals, intent_type, expected) in cases {
            let route = Route::decide(tier, signals, intent_type);
            assert_eq!(route, expected, "tier={tier} signals={signals:?} intent={intent_type:?}");
        }
    }

    #[test]
    fn low_tier_never_selects_both() {
        for bits in 0..=Signals::all().bits() {
            let signals = Signals::from_bits_truncate(bits);
            for intent_type in [IntentType::Place, IntentType::Event, IntentType::Both] {
                let route = Route::decide(Tier::Low, signals, intent_type);
                assert_ne!(route.selection(), Selection::BOTH);
            }
        }
    }

    #[test]
    fn every_route_selects_a_provider() {
        for bits in 0..=Signals::all().bits() {
            let signals = Signals::from_bits_truncate(bits);
            for tier in [Tier::Low, Tier::Medium, Tier::High] {
                for intent_type in [IntentType::Place, IntentType::Event, IntentType::Both] {
                    assert!(!Route::decide(tier, signals, intent_type).selection().is_empty());
                }
            }
        }
    }
}
