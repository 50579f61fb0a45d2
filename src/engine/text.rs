//! Text normalization.
//!
//! Every later stage (dictionary scans, time/location resolution, scoring)
//! works on the output of [`normalize`], so byte offsets produced by those
//! stages index into the normalized string, never the raw input.

use crate::Range;

/// Lowercase, straighten apostrophes, drop everything but letters, digits,
/// spaces, `-` and `'`, then collapse runs of whitespace.
///
/// ```
/// assert_eq!(wayfind::normalize("  Pizza   near ME!! "), "pizza near me");
/// assert_eq!(wayfind::normalize("What\u{2019}s on?"), "what's on");
/// ```
pub fn normalize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        let ch = match ch {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{02BC}' => '\'',
            c => c,
        };
        if ch.is_alphanumeric() || ch == '-' || ch == '\'' {
            cleaned.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            cleaned.push(' ');
        }
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace tokens of already-normalized text.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Tokens with their byte spans in `normalized`.
pub fn token_spans(normalized: &str) -> impl Iterator<Item = (Range, &str)> {
    let mut offset = 0;
    tokens(normalized).into_iter().map(move |token| {
        // Tokens are separated by exactly one space after normalization.
        let start = normalized[offset..].find(token).map_or(offset, |i| offset + i);
        let end = start + token.len();
        offset = end;
        (Range { start, end }, token)
    })
}

/// Prefix of `text` holding at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_but_keeps_hyphens_and_apostrophes() {
        assert_eq!(normalize("Kid-friendly, fun! (today?)"), "kid-friendly fun today");
        assert_eq!(normalize("what's on"), "what's on");
    }

    #[test]
    fn maps_curly_apostrophes() {
        assert_eq!(normalize("WHAT\u{2018}S happening"), "what's happening");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("\t live \n\n music   "), "live music");
    }

    #[test]
    fn punctuation_only_input_normalizes_to_empty() {
        assert_eq!(normalize("?!.,;:"), "");
        assert!(tokens("").is_empty());
    }

    #[test]
    fn removed_punctuation_does_not_join_words() {
        // The comma is dropped, not replaced, so "bars,clubs" stays one token.
        assert_eq!(tokens(&normalize("bars, clubs")), vec!["bars", "clubs"]);
        assert_eq!(tokens(&normalize("bars,clubs")), vec!["barsclubs"]);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("café bar", 4), "café");
        assert_eq!(truncate_chars("bar", 10), "bar");
        assert_eq!(truncate_chars("bar", 0), "");
    }
}
