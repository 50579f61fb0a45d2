//! Confidence scoring.
//!
//! A fixed base plus fixed increments per resolved signal, minus penalties
//! for very short or purely abstract queries, clamped to `[0, 1]`.

use crate::IntentType;

pub const BASE: f64 = 0.2;
pub const KEYWORD_BONUS: f64 = 0.25;
pub const INTENT_TYPE_BONUS: f64 = 0.15;
pub const TIME_BONUS: f64 = 0.15;
pub const LOCATION_BONUS: f64 = 0.15;
pub const VIBE_BONUS: f64 = 0.08;
pub const CATEGORY_BONUS: f64 = 0.07;

pub const SINGLE_TOKEN_PENALTY: f64 = 0.25;
pub const TWO_TOKEN_PENALTY: f64 = 0.10;
pub const ABSTRACT_ONLY_PENALTY: f64 = 0.08;

/// The signals the score is computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub token_count: usize,
    pub has_keywords: bool,
    pub intent_type: IntentType,
    pub has_time: bool,
    pub has_location: bool,
    pub has_vibe: bool,
    pub has_specific_category: bool,
    pub abstract_phrasing: bool,
}

pub fn score(inputs: &ScoreInputs) -> f64 {
    let mut score = BASE;

    if inputs.has_keywords {
        score += KEYWORD_BONUS;
    }
    if inputs.intent_type != IntentType::Both {
        score += INTENT_TYPE_BONUS;
    }
    if inputs.has_time {
        score += TIME_BONUS;
    }
    if inputs.has_location {
        score += LOCATION_BONUS;
    }
    if inputs.has_vibe {
        score += VIBE_BONUS;
    }
    if inputs.has_specific_category {
        score += CATEGORY_BONUS;
    }

    if inputs.token_count <= 1 {
        score -= SINGLE_TOKEN_PENALTY;
    } else if inputs.token_count <= 2 {
        score -= TWO_TOKEN_PENALTY;
    }

    // Vague wording or vibes with nothing concrete to search for.
    if !inputs.has_keywords && (inputs.abstract_phrasing || inputs.has_vibe) {
        score -= ABSTRACT_ONLY_PENALTY;
    }

    clamp_unit(score)
}

/// Clamp into `[0, 1]`; anything non-finite becomes 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn strong_place_query_scores_high() {
        let s = score(&ScoreInputs {
            token_count: 3,
            has_keywords: true,
            intent_type: IntentType::Place,
            has_location: true,
            has_specific_category: true,
            ..Default::default()
        });
        assert!(approx(s, 0.82), "got {s}");
    }

    #[test]
    fn everything_at_once_is_clamped() {
        let s = score(&ScoreInputs {
            token_count: 8,
            has_keywords: true,
            intent_type: IntentType::Event,
            has_time: true,
            has_location: true,
            has_vibe: true,
            has_specific_category: true,
            abstract_phrasing: false,
        });
        assert_eq!(s, 1.0);
    }

    #[test]
    fn short_queries_are_penalized() {
        let one = score(&ScoreInputs { token_count: 1, has_location: true, ..Default::default() });
        let two = score(&ScoreInputs { token_count: 2, has_location: true, ..Default::default() });
        let three = score(&ScoreInputs { token_count: 3, has_location: true, ..Default::default() });
        assert!(approx(one, 0.10), "got {one}");
        assert!(approx(two, 0.25), "got {two}");
        assert!(approx(three, 0.35), "got {three}");
    }

    #[test]
    fn abstract_only_penalty_needs_missing_keywords() {
        let vague = ScoreInputs { token_count: 5, has_vibe: true, has_time: true, abstract_phrasing: true, ..Default::default() };
        assert!(approx(score(&vague), 0.35), "got {}", score(&vague));

        let concrete = ScoreInputs { has_keywords: true, ..vague };
        assert!(approx(score(&concrete), 0.68), "got {}", score(&concrete));
    }

    #[test]
    fn never_negative() {
        assert_eq!(score(&ScoreInputs { token_count: 1, abstract_phrasing: true, ..Default::default() }), 0.0);
    }

    #[test]
    fn clamp_handles_non_finite() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 0.0);
        assert_eq!(clamp_unit(1.7), 1.0);
    }
}
