//! Internal failure modes.
//!
//! None of these reach callers of the public API: `api.rs` turns every error
//! into the conservative default for the stage that failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("query is not a string (got {0})")]
    NotAString(&'static str),

    #[error("malformed intent document: {0}")]
    MalformedIntent(#[from] serde_json::Error),

    #[error("confidence {0} is not a finite number")]
    NonFiniteConfidence(f64),

    #[error("date window for '{label}' is out of range")]
    DateOutOfRange { label: &'static str },

    #[error("time context 'specific' carries no weekday")]
    MissingWeekday,

    #[error("internal panic: {0}")]
    Panicked(String),
}

pub type Result<T, E = RouteError> = std::result::Result<T, E>;

/// Best-effort message from a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
