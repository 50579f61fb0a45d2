//! Category inference, intent classification and fallback keywords.

use super::resolve::{ResolvedLocation, ResolvedTime};
use super::text::token_spans;
use super::trigger::{Mentions, TriggerInfo};
use crate::lexicon;
use crate::{Category, IntentType, Range};
use std::collections::BTreeSet;

/// Most tokens the fallback extractor will return.
pub const MAX_FALLBACK_KEYWORDS: usize = 4;

/// Map hits and free-text mentions to taxonomy categories.
///
/// Dictionary entries carry their own categories (bar -> nightlife,
/// exhibit -> art + history, ...). On top of those:
///
/// - "history"/"historic" anywhere adds `history`;
/// - "nightlife" anywhere adds `nightlife` and `social`.
///
/// Returns `{other}` when nothing fired.
pub fn infer_categories(info: &TriggerInfo) -> BTreeSet<Category> {
    let mut categories: BTreeSet<Category> = info.hit_categories().collect();

    if info.mentions.contains(Mentions::HISTORY) {
        categories.insert(Category::History);
    }
    if info.mentions.contains(Mentions::NIGHTLIFE) {
        categories.insert(Category::Nightlife);
        categories.insert(Category::Social);
    }

    if categories.is_empty() {
        categories.insert(Category::Other);
    }
    categories
}

/// Place hits and event hits decide the type. No evidence means `both`.
pub fn classify_intent(info: &TriggerInfo) -> IntentType {
    match (info.has_place_hits(), info.has_event_hits()) {
        (true, false) => IntentType::Place,
        (false, true) => IntentType::Event,
        (true, true) | (false, false) => IntentType::Both,
    }
}

/// Best-effort keywords when no dictionary entry matched.
///
/// Keeps up to [`MAX_FALLBACK_KEYWORDS`] tokens that are not stopwords and
/// were not already claimed by a vibe, the time label or the location.
pub fn fallback_keywords(
    normalized: &str,
    info: &TriggerInfo,
    time: Option<&ResolvedTime>,
    location: &ResolvedLocation,
) -> Vec<String> {
    let claimed: Vec<Range> = info
        .vibe_ranges()
        .chain(time.map(|t| t.range))
        .chain(location.ranges.iter().copied())
        .collect();

    let mut out: Vec<String> = Vec::new();
    for (range, token) in token_spans(normalized) {
        if out.len() >= MAX_FALLBACK_KEYWORDS {
            break;
        }
        if lexicon::is_stopword(token) || claimed.iter().any(|c| c.overlaps(&range)) {
            continue;
        }
        let token = token.trim_matches(|c| c == '-' || c == '\'');
        if token.is_empty() || lexicon::is_stopword(token) || out.iter().any(|k| k == token) {
            continue;
        }
        out.push(token.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::resolve::{resolve_location, resolve_time};

    fn fallback(text: &str) -> Vec<String> {
        let info = TriggerInfo::scan(text);
        let time = resolve_time(text);
        let location = resolve_location(text);
        fallback_keywords(text, &info, time.as_ref(), &location)
    }

    #[test]
    fn categories_come_from_hits() {
        let cats = infer_categories(&TriggerInfo::scan("pizza then a bar"));
        assert_eq!(cats, BTreeSet::from([Category::Food, Category::Nightlife]));
    }

    #[test]
    fn exhibit_adds_art_and_history() {
        let cats = infer_categories(&TriggerInfo::scan("exhibit"));
        assert_eq!(cats, BTreeSet::from([Category::Art, Category::History]));
    }

    #[test]
    fn history_and_nightlife_mentions_add_categories() {
        let cats = infer_categories(&TriggerInfo::scan("local history tour"));
        assert!(cats.contains(&Category::History));
        assert!(!cats.contains(&Category::Other));

        let cats = infer_categories(&TriggerInfo::scan("best nightlife"));
        assert_eq!(cats, BTreeSet::from([Category::Nightlife, Category::Social]));
    }

    #[test]
    fn sports_events_are_fitness() {
        let cats = infer_categories(&TriggerInfo::scan("basketball game"));
        assert_eq!(cats, BTreeSet::from([Category::Fitness]));
    }

    #[test]
    fn nothing_matched_is_other() {
        assert_eq!(infer_categories(&TriggerInfo::scan("zzz")), BTreeSet::from([Category::Other]));
        assert_eq!(infer_categories(&TriggerInfo::scan("lively")), BTreeSet::from([Category::Other]));
    }

    #[test]
    fn intent_type_needs_evidence() {
        assert_eq!(classify_intent(&TriggerInfo::scan("tacos")), IntentType::Place);
        assert_eq!(classify_intent(&TriggerInfo::scan("concerts")), IntentType::Event);
        assert_eq!(classify_intent(&TriggerInfo::scan("bars with live music")), IntentType::Both);
        assert_eq!(classify_intent(&TriggerInfo::scan("something chill")), IntentType::Both);
    }

    #[test]
    fn fallback_skips_stopwords_vibes_time_and_location() {
        assert_eq!(fallback("something fun to do tonight"), Vec::<String>::new());
        assert_eq!(fallback("axe throwing in soho"), vec!["axe".to_string(), "throwing".to_string()]);
        assert_eq!(fallback("escape rooms near me this weekend"), vec!["escape".to_string(), "rooms".to_string()]);
        assert_eq!(fallback("90210"), Vec::<String>::new());
    }

    #[test]
    fn fallback_caps_and_dedups() {
        assert_eq!(fallback("alpha beta alpha gamma delta epsilon"), vec!["alpha", "beta", "gamma", "delta"]);
    }
}
