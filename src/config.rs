//! Planner tunables.
//!
//! Defaults reproduce the stock routing behavior. A JSON document can override
//! any subset of fields; missing fields keep their defaults. Whatever the
//! document says, result caps never exceed the hard ceilings in `plan.rs`.

use crate::plan::{EVENTS_MAX_RESULTS_CEILING, PLACES_MAX_RESULTS_CEILING};
use serde::{Deserialize, Serialize};

/// Confidence boundaries between tiers: `low < low_below <= medium < high_from <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub low_below: f64,
    pub high_from: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { low_below: 0.4, high_from: 0.7 }
    }
}

/// A per-tier value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCaps {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl TierCaps {
    fn clamped(self, ceiling: u32) -> Self {
        Self { low: self.low.min(ceiling), medium: self.medium.min(ceiling), high: self.high.min(ceiling) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerLimits {
    pub tiers: TierThresholds,

    pub places_radius_m: u32,
    pub nightlife_radius_m: u32,
    pub social_radius_m: u32,
    pub low_confidence_radius_m: u32,
    pub places_max_results: TierCaps,

    pub events_radius_mi: u32,
    pub major_city_radius_mi: u32,
    pub low_confidence_radius_mi: u32,
    pub events_max_results: TierCaps,
    /// Ceiling for events queries enabled only by an incidental time mention.
    pub incidental_radius_mi: u32,
    pub incidental_max_results: u32,

    /// Canonical city names that get the wider events radius.
    pub major_cities: Vec<String>,
}

impl Default for PlannerLimits {
    fn default() -> Self {
        Self {
            tiers: TierThresholds::default(),
            places_radius_m: 5000,
            nightlife_radius_m: 2500,
            social_radius_m: 3000,
            low_confidence_radius_m: 4000,
            places_max_results: TierCaps { low: 20, medium: 30, high: 40 },
            events_radius_mi: 25,
            major_city_radius_mi: 35,
            low_confidence_radius_mi: 15,
            events_max_results: TierCaps { low: 25, medium: 40, high: 50 },
            incidental_radius_mi: 15,
            incidental_max_results: 25,
            major_cities: ["new york", "los angeles", "chicago", "san francisco"].map(String::from).to_vec(),
        }
    }
}

impl PlannerLimits {
    /// Load overrides from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(text).map(Self::sanitized)
    }

    /// Clamp caps to the hard ceilings and keep tier boundaries ordered.
    pub fn sanitized(mut self) -> Self {
        self.places_max_results = self.places_max_results.clamped(PLACES_MAX_RESULTS_CEILING);
        self.events_max_results = self.events_max_results.clamped(EVENTS_MAX_RESULTS_CEILING);
        self.incidental_max_results = self.incidental_max_results.min(EVENTS_MAX_RESULTS_CEILING);

        let TierThresholds { low_below, high_from } = self.tiers;
        let ordered = low_below.is_finite() && high_from.is_finite() && (0.0..=high_from).contains(&low_below);
        if !ordered || high_from > 1.0 {
            tracing::warn!(low_below, high_from, "ignoring unordered tier thresholds");
            self.tiers = TierThresholds::default();
        }
        self
    }

    pub fn is_major_city(&self, city: &str) -> bool {
        self.major_cities.iter().any(|c| c.eq_ignore_ascii_case(city))
    }
}
