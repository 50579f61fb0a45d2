//! Controlled vocabularies.
//!
//! Everything here is read-only data compiled once on first use. The parser
//! and the planner both borrow from these tables; nothing mutates them.
//!
//! All tables expect *normalized* text (see `engine/text.rs`): lowercase
//! ASCII apostrophes, single spaces, no punctuation besides `-` and `'`.

mod dictionaries;
mod phrases;

pub(crate) use dictionaries::{EVENT_ENTRIES, PLACE_ENTRIES, VIBE_ENTRIES};
pub(crate) use phrases::{
    ABSTRACT_PHRASES, CITY_ALIASES, GUARDED_CITY_ALIASES, NEAR_ME_PHRASES, PART_OF_DAY_WORDS, STOPWORDS,
    WEEKDAY_ABBREVIATIONS, WEEKDAY_ALIASES, WEEKDAY_LEADERS,
};

use crate::{Category, Range};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// One canonical term and the literal spellings that map to it.
#[derive(Debug)]
pub struct Entry {
    pub canonical: &'static str,
    pub variants: &'static [&'static str],
    pub categories: &'static [Category],
}

/// A dictionary entry found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub canonical: &'static str,
    pub categories: &'static [Category],
    /// Byte span of the matched variant in the normalized text.
    pub range: Range,
}

#[derive(Debug)]
struct CompiledEntry {
    entry: &'static Entry,
    pattern: Regex,
}

/// A dictionary with one boundary-anchored alternation per entry.
#[derive(Debug)]
pub struct Dictionary {
    name: &'static str,
    entries: Vec<CompiledEntry>,
    canonicals: HashSet<&'static str>,
}

impl Dictionary {
    fn compile(name: &'static str, entries: &'static [Entry]) -> Self {
        let compiled = entries
            .iter()
            .filter_map(|entry| match phrase_pattern(entry.variants.iter().copied()) {
                Ok(pattern) => Some(CompiledEntry { entry, pattern }),
                Err(err) => {
                    tracing::error!(dictionary = name, canonical = entry.canonical, %err, "dropping dictionary entry");
                    None
                }
            })
            .collect();

        Dictionary { name, entries: compiled, canonicals: entries.iter().map(|e| e.canonical).collect() }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every entry with at least one variant in `text`, ordered by where the
    /// entry first appears. Each canonical term is reported once.
    pub fn scan(&self, text: &str) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .entries
            .iter()
            .filter_map(|c| {
                let m = c.pattern.find(text)?;
                Some(Hit {
                    canonical: c.entry.canonical,
                    categories: c.entry.categories,
                    range: Range { start: m.start(), end: m.end() },
                })
            })
            .collect();
        // Stable: ties keep dictionary order.
        hits.sort_by_key(|h| h.range.start);
        hits
    }

    /// True when any variant of any entry occurs in `text`.
    pub fn matches_any(&self, text: &str) -> bool {
        self.entries.iter().any(|c| c.pattern.is_match(text))
    }

    pub fn contains_canonical(&self, canonical: &str) -> bool {
        self.canonicals.contains(canonical)
    }
}

pub static PLACES: Lazy<Dictionary> = Lazy::new(|| Dictionary::compile("places", PLACE_ENTRIES));
pub static EVENTS: Lazy<Dictionary> = Lazy::new(|| Dictionary::compile("events", EVENT_ENTRIES));
pub static VIBES: Lazy<Dictionary> = Lazy::new(|| Dictionary::compile("vibes", VIBE_ENTRIES));

/// Whole-word alternation over literal phrases, longest first so that
/// "coffee shop" wins over "coffee" at the same position.
pub(crate) fn phrase_pattern<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Result<Regex, regex::Error> {
    let mut phrases: Vec<&str> = phrases.into_iter().collect();
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
    let alternation = phrases.iter().map(|p| regex::escape(p)).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b"))
}

/// Canonical term is a place noun.
pub fn is_place_keyword(canonical: &str) -> bool {
    PLACES.contains_canonical(canonical)
}

/// Canonical term is an event noun.
pub fn is_event_keyword(canonical: &str) -> bool {
    EVENTS.contains_canonical(canonical)
}

static ABSTRACT_RE: Lazy<Option<Regex>> = Lazy::new(|| phrase_pattern(ABSTRACT_PHRASES.iter().copied()).ok());
static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Generic "things to do" style phrasing with no concrete subject.
pub fn has_abstract_phrasing(normalized: &str) -> bool {
    ABSTRACT_RE.as_ref().is_some_and(|re| re.is_match(normalized))
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_token_variant_beats_its_prefix() {
        let hits = PLACES.scan("a quiet coffee shop downtown");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].canonical, "cafe");
        assert_eq!(&"a quiet coffee shop downtown"[hits[0].range.start..hits[0].range.end], "coffee shop");
    }

    #[test]
    fn single_token_variants_need_word_boundaries() {
        assert!(PLACES.scan("barbershop").is_empty());
        assert!(EVENTS.scan("gamestop").is_empty());
        assert_eq!(PLACES.scan("best bars").first().map(|h| h.canonical), Some("bar"));
    }

    #[test]
    fn hits_are_ordered_by_first_appearance() {
        let hits = PLACES.scan("park then dinner then a bar");
        let names: Vec<_> = hits.iter().map(|h| h.canonical).collect();
        assert_eq!(names, vec!["park", "restaurant", "bar"]);
    }

    #[test]
    fn canonical_lookup_is_per_dictionary() {
        assert!(is_place_keyword("restaurant"));
        assert!(!is_place_keyword("concert"));
        assert!(is_event_keyword("concert"));
        assert!(!is_event_keyword("lively"));
    }

    #[test]
    fn canonical_terms_are_unique_across_dictionaries() {
        let mut seen = HashSet::new();
        for entry in PLACE_ENTRIES.iter().chain(EVENT_ENTRIES).chain(VIBE_ENTRIES) {
            assert!(seen.insert(entry.canonical), "duplicate canonical term {}", entry.canonical);
        }
    }

    #[test]
    fn abstract_phrasing_is_detected() {
        assert!(has_abstract_phrasing("something fun to do tonight"));
        assert!(has_abstract_phrasing("what's happening downtown"));
        assert!(!has_abstract_phrasing("pizza near me"));
    }
}
