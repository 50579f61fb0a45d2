//! Intent parsing engine.
//!
//! This module turns one free-text query into a [`SearchIntent`]. It is split
//! into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! raw text ── normalize (text.rs)
//!               │
//!               v
//!         TriggerInfo::scan (trigger.rs)
//!           - place / event / vibe dictionary hits
//!           - free-text mentions, abstract phrasing
//!               │
//!               v
//!         resolve_time / resolve_location (resolve.rs)
//!               │
//!               v
//!         infer_categories / classify_intent / fallback_keywords (classify.rs)
//!               │
//!               v
//!         score (confidence.rs)
//!               │
//!               v
//!         SearchIntent
//! ```
//!
//! `IntentParser` (parser.rs) drives the stages and optionally records
//! per-stage timings (metrics.rs).
//!
//! ## Adding vocabulary
//!
//! - New keywords or vibes go in `src/lexicon/dictionaries.rs`; an entry's
//!   categories flow into `infer_categories` automatically.
//! - New time or location phrasings go in `src/lexicon/phrases.rs`.
//!
//! ## Debugging
//!
//! The parser emits `tracing` events at `debug` (final intent) and `trace`
//! (dictionary hits). The CLI enables them with `WAYFIND_LOG=wayfind=trace`.
//!
//! [`SearchIntent`]: crate::SearchIntent

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/confidence.rs"]
mod confidence;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/text.rs"]
mod text;
#[path = "engine/trigger.rs"]
mod trigger;

pub use metrics::{ParseMetrics, ParseRun};
pub use parser::IntentParser;
pub use text::{normalize, truncate_chars};
