//! Routing signals derived from a [`SearchIntent`].
//!
//! The planner never looks at parser internals. Everything it decides on is
//! recomputed here from the intent contract plus the read-only lexicon.

use crate::config::TierThresholds;
use crate::engine::{normalize, truncate_chars};
use crate::lexicon;
use crate::{Category, IntentType, SearchIntent};
use bitflags::bitflags;
use serde::Serialize;
use std::fmt;

bitflags! {
    /// Explicit booleans the decision table is keyed on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Signals: u8 {
        /// Place intent or any place keyword.
        const PLACE          = 1 << 0;
        /// Event intent, music category or any event keyword.
        const EVENT          = 1 << 1;
        /// Social/nightlife category or generic "things to do" phrasing.
        const ABSTRACT_MIXED = 1 << 2;
        /// An explicit time label is present.
        const TIME           = 1 << 3;
        const NIGHTLIFE      = 1 << 4;
        const SOCIAL         = 1 << 5;
    }
}

impl Signals {
    /// Signals for `intent`. Abstract phrasing is looked up in the same first
    /// `scan_chars` characters of `rawQuery` that the parser scanned.
    pub fn from_intent(intent: &SearchIntent, scan_chars: usize) -> Self {
        let mut signals = Signals::empty();

        let place_keyword = intent.keywords.iter().any(|k| lexicon::is_place_keyword(k));
        let event_keyword = intent.keywords.iter().any(|k| lexicon::is_event_keyword(k));
        let nightlife = intent.has_category(Category::Nightlife);
        let social = intent.has_category(Category::Social);

        if intent.intent_type == IntentType::Place || place_keyword {
            signals |= Signals::PLACE;
        }
        if intent.intent_type == IntentType::Event || intent.has_category(Category::Music) || event_keyword {
            signals |= Signals::EVENT;
        }
        let scanned = normalize(truncate_chars(&intent.raw_query, scan_chars));
        if nightlife || social || lexicon::has_abstract_phrasing(&scanned) {
            signals |= Signals::ABSTRACT_MIXED;
        }
        if intent.time_context.is_some() {
            signals |= Signals::TIME;
        }
        if nightlife {
            signals |= Signals::NIGHTLIFE;
        }
        if social {
            signals |= Signals::SOCIAL;
        }
        signals
    }

    pub fn both_kinds(self) -> bool {
        self.contains(Signals::PLACE | Signals::EVENT)
    }
}

/// Confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn from_confidence(confidence: f64, thresholds: &TierThresholds) -> Self {
        if confidence < thresholds.low_below {
            Tier::Low
        } else if confidence >= thresholds.high_from {
            Tier::High
        } else {
            Tier::Medium
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn intent(raw: &str) -> SearchIntent {
        SearchIntent::conservative(raw)
    }

    fn signals(intent: &SearchIntent) -> Signals {
        Signals::from_intent(intent, usize::MAX)
    }

    #[test]
    fn tier_boundaries() {
        let t = TierThresholds::default();
        assert_eq!(Tier::from_confidence(0.0, &t), Tier::Low);
        assert_eq!(Tier::from_confidence(0.399, &t), Tier::Low);
        assert_eq!(Tier::from_confidence(0.4, &t), Tier::Medium);
        assert_eq!(Tier::from_confidence(0.699, &t), Tier::Medium);
        assert_eq!(Tier::from_confidence(0.7, &t), Tier::High);
        assert_eq!(Tier::from_confidence(1.0, &t), Tier::High);
    }

    #[test]
    fn keywords_set_place_and_event_signals() {
        let mut i = intent("bars and concerts");
        i.keywords = vec!["bar".into(), "concert".into()];
        let s = signals(&i);
        assert!(s.both_kinds());
    }

    #[test]
    fn music_category_is_an_event_signal() {
        let mut i = intent("x");
        i.categories = BTreeSet::from([Category::Music]);
        assert!(signals(&i).contains(Signals::EVENT));
    }

    #[test]
    fn abstract_phrasing_comes_from_raw_query() {
        assert!(signals(&intent("Things to do?")).contains(Signals::ABSTRACT_MIXED));
        assert!(!signals(&intent("tacos")).contains(Signals::ABSTRACT_MIXED));
    }

    #[test]
    fn abstract_phrasing_past_the_scan_limit_is_ignored() {
        let raw = format!("tacos{}things to do", " ".repeat(40));
        assert!(Signals::from_intent(&intent(&raw), 64).contains(Signals::ABSTRACT_MIXED));
        assert!(!Signals::from_intent(&intent(&raw), 16).contains(Signals::ABSTRACT_MIXED));
    }

    #[test]
    fn social_and_nightlife_are_abstract_mixed() {
        let mut i = intent("x");
        i.categories = BTreeSet::from([Category::Nightlife]);
        let s = signals(&i);
        assert!(s.contains(Signals::ABSTRACT_MIXED | Signals::NIGHTLIFE));
        assert!(!s.contains(Signals::SOCIAL));
    }

    #[test]
    fn conservative_intent_has_no_signals() {
        assert_eq!(signals(&intent("")), Signals::empty());
    }
}
