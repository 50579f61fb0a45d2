//! Dictionary scan (input pre-classification).
//!
//! This module inspects the normalized query once and records every signal
//! later stages need:
//!
//! - **Dictionary hits**: place nouns, event nouns and vibe adjectives
//!   (`lexicon::PLACES`, `lexicon::EVENTS`, `lexicon::VIBES`), each with the
//!   span that matched and the categories the entry implies.
//! - **Free-text mentions**: words that imply a category without being a
//!   keyword ("history", "nightlife").
//! - **Abstract phrasing**: "things to do" style wording with no subject.
//!
//! ## Design notes
//!
//! - Matching is whole-word only. "bar" never fires inside "barbershop".
//! - Hits are reported in order of first appearance in the text; a canonical
//!   term is reported once even if several of its variants occur.

use crate::lexicon::{self, Dictionary, Hit};
use crate::{Category, Range};
use bitflags::bitflags;

bitflags! {
    /// Category-bearing words that are not dictionary keywords.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mentions: u8 {
        const HISTORY   = 1 << 0;
        const NIGHTLIFE = 1 << 1;
        const ABSTRACT  = 1 << 2;
    }
}

/// Everything the dictionary scan found in one normalized query.
#[derive(Debug, Clone, Default)]
pub struct TriggerInfo {
    pub places: Vec<Hit>,
    pub events: Vec<Hit>,
    pub vibes: Vec<Hit>,
    pub mentions: Mentions,
}

impl TriggerInfo {
    /// Scan normalized text against every dictionary.
    pub fn scan(normalized: &str) -> Self {
        let mut mentions = Mentions::empty();
        if regex!(r"\bhistor(?:y|ic|ical|ically)\b").is_match(normalized) {
            mentions |= Mentions::HISTORY;
        }
        if regex!(r"\bnight-?life\b").is_match(normalized) {
            mentions |= Mentions::NIGHTLIFE;
        }
        if lexicon::has_abstract_phrasing(normalized) {
            mentions |= Mentions::ABSTRACT;
        }

        let info = TriggerInfo {
            places: scan_dictionary(&lexicon::PLACES, normalized),
            events: scan_dictionary(&lexicon::EVENTS, normalized),
            vibes: scan_dictionary(&lexicon::VIBES, normalized),
            mentions,
        };

        tracing::trace!(
            places = ?info.place_keywords(),
            events = ?info.event_keywords(),
            vibes = ?info.vibe_terms(),
            mentions = ?info.mentions,
            "trigger scan"
        );
        info
    }

    pub fn has_place_hits(&self) -> bool {
        !self.places.is_empty()
    }

    pub fn has_event_hits(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn place_keywords(&self) -> Vec<&'static str> {
        self.places.iter().map(|h| h.canonical).collect()
    }

    pub fn event_keywords(&self) -> Vec<&'static str> {
        self.events.iter().map(|h| h.canonical).collect()
    }

    pub fn vibe_terms(&self) -> Vec<&'static str> {
        self.vibes.iter().map(|h| h.canonical).collect()
    }

    /// Place and event keywords merged by first appearance, deduplicated.
    pub fn keywords(&self) -> Vec<String> {
        let mut hits: Vec<&Hit> = self.places.iter().chain(&self.events).collect();
        hits.sort_by_key(|h| h.range.start);

        let mut out: Vec<String> = Vec::with_capacity(hits.len());
        for hit in hits {
            if !out.iter().any(|k| k == hit.canonical) {
                out.push(hit.canonical.to_string());
            }
        }
        out
    }

    /// Categories implied by every hit, in hit order (may repeat).
    pub fn hit_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.places.iter().chain(&self.events).chain(&self.vibes).flat_map(|h| h.categories.iter().copied())
    }

    /// Spans covered by vibe variants.
    pub fn vibe_ranges(&self) -> impl Iterator<Item = Range> + '_ {
        self.vibes.iter().map(|h| h.range)
    }
}

fn scan_dictionary(dictionary: &Dictionary, normalized: &str) -> Vec<Hit> {
    let hits = dictionary.scan(normalized);
    if !hits.is_empty() {
        tracing::trace!(dictionary = dictionary.name(), count = hits.len(), "dictionary hits");
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_collects_hits_from_every_dictionary() {
        let info = TriggerInfo::scan("chill bars with live music");
        assert_eq!(info.place_keywords(), vec!["bar"]);
        assert_eq!(info.event_keywords(), vec!["concert"]);
        assert_eq!(info.vibe_terms(), vec!["relaxing"]);
        assert!(info.mentions.is_empty());
    }

    #[test]
    fn keywords_merge_in_text_order() {
        let info = TriggerInfo::scan("jazz and then tacos");
        assert_eq!(info.keywords(), vec!["concert".to_string(), "restaurant".to_string()]);
    }

    #[test]
    fn repeated_variants_yield_one_keyword() {
        let info = TriggerInfo::scan("pizza or sushi or burgers");
        assert_eq!(info.keywords(), vec!["restaurant".to_string()]);
    }

    #[test]
    fn free_text_mentions_are_flagged() {
        let info = TriggerInfo::scan("historic nightlife things to do");
        assert!(info.mentions.contains(Mentions::HISTORY));
        assert!(info.mentions.contains(Mentions::NIGHTLIFE));
        assert!(info.mentions.contains(Mentions::ABSTRACT));
    }

    #[test]
    fn hit_categories_follow_entries() {
        let info = TriggerInfo::scan("art exhibit with friends");
        let cats: Vec<_> = info.hit_categories().collect();
        assert!(cats.contains(&Category::Art));
        assert!(cats.contains(&Category::History));
        assert!(cats.contains(&Category::Social));
    }
}
