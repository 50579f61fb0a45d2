//! Intent parser.
//!
//! Runs the stages in order over one query:
//!
//! ```text
//! (0) normalize            -> lowercase, cleaned, single-spaced text
//! (1) trigger scan         -> place / event / vibe hits + free-text mentions
//! (2) resolve              -> time label, location hint
//! (3) classify             -> categories, intent type, fallback keywords
//! (4) score                -> confidence in [0, 1]
//! ```
//!
//! The parser holds no state between calls and the output is deterministic
//! for a given input.

use super::classify::{classify_intent, fallback_keywords, infer_categories};
use super::confidence::{ScoreInputs, score};
use super::metrics::{ParseMetrics, ParseRun};
use super::resolve::{resolve_location, resolve_time};
use super::text::{normalize, tokens, truncate_chars};
use super::trigger::{Mentions, TriggerInfo};
use crate::error::Result;
use crate::{Category, SearchIntent};
use std::time::{Duration, Instant};

/// Parser for one raw query.
///
/// Usage: `IntentParser::new(text).run()`.
#[derive(Debug)]
pub struct IntentParser<'a> {
    raw: &'a str,
    max_chars: Option<usize>,
}

impl<'a> IntentParser<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw, max_chars: None }
    }

    /// Only scan the first `max` characters. `raw_query` still holds the
    /// whole input.
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    pub fn run(self) -> Result<SearchIntent> {
        self.run_inner(false).map(|run| run.intent)
    }

    pub fn run_with_metrics(self) -> Result<ParseRun> {
        self.run_inner(true)
    }

    fn run_inner(self, timed: bool) -> Result<ParseRun> {
        let mut metrics = ParseMetrics::default();
        let mut clock = Stopwatch::new(timed);

        let scanned = match self.max_chars {
            Some(max) => truncate_chars(self.raw, max),
            None => self.raw,
        };
        if scanned.len() < self.raw.len() {
            tracing::debug!(kept = scanned.len(), len = self.raw.len(), "query truncated before parsing");
        }
        let normalized = normalize(scanned);
        metrics.normalize = clock.lap();

        if normalized.is_empty() {
            tracing::debug!(raw = self.raw, "empty query after normalization");
            metrics.total = clock.total();
            return Ok(ParseRun { intent: SearchIntent::conservative(self.raw), normalized, metrics });
        }

        let info = TriggerInfo::scan(&normalized);
        metrics.scan = clock.lap();

        let time = resolve_time(&normalized);
        let location = resolve_location(&normalized);
        metrics.resolve = clock.lap();

        let categories = infer_categories(&info);
        let intent_type = classify_intent(&info);
        let mut keywords = info.keywords();
        if keywords.is_empty() {
            keywords = fallback_keywords(&normalized, &info, time.as_ref(), &location);
        }
        let vibe: Vec<String> = info.vibe_terms().into_iter().map(str::to_string).collect();

        let confidence = score(&ScoreInputs {
            token_count: tokens(&normalized).len(),
            has_keywords: !keywords.is_empty(),
            intent_type,
            has_time: time.is_some(),
            has_location: location.hint.is_resolved(),
            has_vibe: !vibe.is_empty(),
            has_specific_category: categories.iter().any(|c| *c != Category::Other),
            abstract_phrasing: info.mentions.contains(Mentions::ABSTRACT),
        });
        metrics.classify = clock.lap();
        metrics.total = clock.total();

        let intent = SearchIntent {
            raw_query: self.raw.to_string(),
            intent_type,
            keywords,
            vibe,
            categories,
            time_context: time.map(|t| t.context),
            location_hint: location.hint,
            confidence,
        };

        tracing::debug!(
            query = %normalized,
            intent_type = ?intent.intent_type,
            keywords = ?intent.keywords,
            time = ?intent.time_context.map(|t| t.label),
            location = ?intent.location_hint.kind,
            confidence = intent.confidence,
            "parsed intent"
        );

        Ok(ParseRun { intent, normalized, metrics })
    }
}

/// Lap timer that does nothing unless enabled.
struct Stopwatch {
    start: Option<Instant>,
    last: Option<Instant>,
}

impl Stopwatch {
    fn new(enabled: bool) -> Self {
        let now = enabled.then(Instant::now);
        Self { start: now, last: now }
    }

    fn lap(&mut self) -> Duration {
        let Some(last) = self.last else {
            return Duration::ZERO;
        };
        let now = Instant::now();
        self.last = Some(now);
        now - last
    }

    fn total(&self) -> Duration {
        self.start.map(|s| s.elapsed()).unwrap_or_default()
    }
}
