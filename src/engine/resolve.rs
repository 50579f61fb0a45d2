//! Time and location resolution.
//!
//! Both resolvers follow a strict precedence list and stop at the first rule
//! that fires. Each returns the span(s) it consumed so that the fallback
//! keyword extractor can skip those tokens.
//!
//! ```text
//! time:     weekday ─▶ now ─▶ tonight ─▶ today ─▶ weekend ─▶ (none)
//! location: zip ─▶ near me ─▶ city alias ─▶ "in/at <phrase>" ─▶ unknown
//! ```

use crate::engine::text::{token_spans, tokens};
use crate::lexicon::{
    self, CITY_ALIASES, GUARDED_CITY_ALIASES, NEAR_ME_PHRASES, PART_OF_DAY_WORDS, WEEKDAY_ABBREVIATIONS,
    WEEKDAY_ALIASES, WEEKDAY_LEADERS,
};
use crate::{LocationHint, LocationType, Range, TimeContext, TimeLabel};
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;

/// A resolved time signal and the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTime {
    pub context: TimeContext,
    pub range: Range,
}

/// A resolved location signal and the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub hint: LocationHint,
    /// Spans consumed by the location, including any "in"/"at" preposition.
    pub ranges: Vec<Range>,
}

impl ResolvedLocation {
    fn unknown() -> Self {
        Self { hint: LocationHint::unknown(), ranges: Vec::new() }
    }
}

static WEEKDAY_RE: Lazy<Option<Regex>> =
    Lazy::new(|| lexicon::phrase_pattern(WEEKDAY_ALIASES.iter().map(|(alias, _)| *alias)).ok());
static NEAR_ME_RE: Lazy<Option<Regex>> = Lazy::new(|| lexicon::phrase_pattern(NEAR_ME_PHRASES.iter().copied()).ok());
static CITY_RE: Lazy<Option<Regex>> =
    Lazy::new(|| lexicon::phrase_pattern(CITY_ALIASES.iter().map(|(alias, _)| *alias)).ok());
static PART_OF_DAY_RE: Lazy<Option<Regex>> =
    Lazy::new(|| lexicon::phrase_pattern(PART_OF_DAY_WORDS.iter().copied()).ok());

fn find(re: &Lazy<Option<Regex>>, text: &str) -> Option<Range> {
    let m = re.as_ref()?.find(text)?;
    Some(Range { start: m.start(), end: m.end() })
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Words that may sit between a place name and a trailing time ("soho on friday").
const TIME_LEADERS: &[&str] = &["on", "this", "next", "right"];

// --- Time ---------------------------------------------------------------------

/// Resolve the explicit time label, if any. Never invents one.
pub fn resolve_time(normalized: &str) -> Option<ResolvedTime> {
    let full = find(&WEEKDAY_RE, normalized)
        .and_then(|range| Some((range, lookup(WEEKDAY_ALIASES, range.slice(normalized))?)));
    let weekday = match (full, abbreviated_weekday(normalized)) {
        (Some(full), Some(short)) if short.0.start < full.0.start => Some(short),
        (full, short) => full.or(short),
    };
    if let Some((range, day)) = weekday {
        return Some(ResolvedTime { context: TimeContext::specific(day), range });
    }

    let ordered: [(&Regex, TimeLabel); 4] = [
        (regex!(r"\b(?:right now|now)\b"), TimeLabel::Now),
        (regex!(r"\btonight\b"), TimeLabel::Tonight),
        (regex!(r"\btoday\b"), TimeLabel::Today),
        (regex!(r"\b(?:this )?week-?ends?\b"), TimeLabel::Weekend),
    ];

    ordered.into_iter().find_map(|(re, label)| {
        let m = re.find(normalized)?;
        Some(ResolvedTime { context: TimeContext::label(label), range: Range { start: m.start(), end: m.end() } })
    })
}

/// "sat", "on wed", "next fri": an abbreviation must be a whole token that
/// follows a leader word or ends the query. "c'mon" is one token, so it never
/// reads as "mon".
fn abbreviated_weekday(normalized: &str) -> Option<(Range, Weekday)> {
    let spans: Vec<(Range, &str)> = token_spans(normalized).collect();
    spans.iter().enumerate().find_map(|(idx, (range, token))| {
        let day = lookup(WEEKDAY_ABBREVIATIONS, token)?;
        let led = idx > 0 && WEEKDAY_LEADERS.contains(&spans[idx - 1].1);
        let last = idx + 1 == spans.len();
        (led || last).then_some((*range, day))
    })
}

fn is_time_word(word: &str) -> bool {
    find(&PART_OF_DAY_RE, word).is_some() || resolve_time(word).is_some()
}

// --- Location -----------------------------------------------------------------

/// Resolve where the user wants to search.
pub fn resolve_location(normalized: &str) -> ResolvedLocation {
    if let Some(m) = regex!(r"\b(\d{5})\b").captures(normalized).and_then(|c| c.get(1)) {
        return ResolvedLocation {
            hint: LocationHint { kind: LocationType::Zip, value: Some(m.as_str().to_string()) },
            ranges: vec![Range { start: m.start(), end: m.end() }],
        };
    }

    if let Some(range) = find(&NEAR_ME_RE, normalized) {
        return ResolvedLocation { hint: LocationHint { kind: LocationType::NearMe, value: None }, ranges: vec![range] };
    }

    if let Some(range) = find(&CITY_RE, normalized) {
        let alias = range.slice(normalized);
        if let Some((_, canonical)) = CITY_ALIASES.iter().find(|(a, _)| *a == alias) {
            return ResolvedLocation {
                hint: LocationHint { kind: LocationType::City, value: Some((*canonical).to_string()) },
                ranges: vec![range],
            };
        }
    }

    trailing_place_phrase(normalized).unwrap_or_else(ResolvedLocation::unknown)
}

/// "... in <phrase>" / "... at <phrase>" at the very end of the query.
///
/// Trailing time words are cut off first ("soho tonight" -> "soho"). The rest
/// is rejected when it reads like something to do rather than somewhere to
/// be: a place/event keyword ("things to do in bars"), a time word ("at
/// night"), or nothing but filler. Guarded aliases such as "la" are only
/// accepted here, after "in".
fn trailing_place_phrase(normalized: &str) -> Option<ResolvedLocation> {
    let caps = regex!(r"^(?:.*\s)?(in|at)\s+([a-z][a-z' -]*?)$").captures(normalized)?;
    let preposition = caps.get(1)?;
    let phrase = caps.get(2)?;

    let mut value = phrase.as_str();
    for article in ["the ", "a ", "an "] {
        if let Some(rest) = value.strip_prefix(article) {
            value = rest;
        }
    }
    let value_start = phrase.end() - value.len();
    let value = strip_trailing_time(value);

    let words = tokens(value);
    if words.is_empty() || words.len() > 4 {
        return None;
    }

    let ranges = vec![
        Range { start: preposition.start(), end: preposition.end() },
        Range { start: phrase.start(), end: value_start + value.len() },
    ];
    if preposition.as_str() == "in" {
        if let Some(canonical) = lookup(GUARDED_CITY_ALIASES, value) {
            return Some(ResolvedLocation {
                hint: LocationHint { kind: LocationType::City, value: Some(canonical.to_string()) },
                ranges,
            });
        }
    }

    if lexicon::PLACES.matches_any(value) || lexicon::EVENTS.matches_any(value) {
        tracing::trace!(phrase = value, "location phrase looks like a keyword");
        return None;
    }
    let is_time = find(&PART_OF_DAY_RE, value).is_some() || resolve_time(value).is_some();
    if is_time || lexicon::has_abstract_phrasing(value) {
        return None;
    }
    if words.iter().all(|w| lexicon::is_stopword(w)) {
        return None;
    }

    Some(ResolvedLocation { hint: LocationHint { kind: LocationType::City, value: Some(value.to_string()) }, ranges })
}

/// Drop time words (and the "on"/"this" before them) from the end of `value`.
fn strip_trailing_time(value: &str) -> &str {
    let spans: Vec<(Range, &str)> = token_spans(value).collect();
    let mut keep = spans.len();
    while keep > 0 && is_time_word(spans[keep - 1].1) {
        keep -= 1;
    }
    if keep < spans.len() {
        while keep > 0 && TIME_LEADERS.contains(&spans[keep - 1].1) {
            keep -= 1;
        }
    }
    match keep {
        0 => "",
        n => &value[..spans[n - 1].0.end],
    }
}
