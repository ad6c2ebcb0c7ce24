// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic confidence scoring for sanitized captions.

use genie_core::GenieError;

use crate::vocabulary::{BANNED_RE, NOUN_RE};

/// Captions at least this many characters long earn the length bonus.
const MIN_DETAILED_CHARS: usize = 60;

const LENGTH_BONUS: f64 = 0.2;
const NOUN_BONUS: f64 = 0.3;
const CLEAN_BONUS: f64 = 0.2;
/// Weight applied linearly to the self-rating.
const SELF_RATING_WEIGHT: f64 = 0.2;

/// A model's own rating of its caption, validated to lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SelfRating(f64);

impl SelfRating {
    /// Rejects NaN, infinities and values outside [0, 1].
    pub fn new(value: f64) -> Result<Self, GenieError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GenieError::InvalidArgument(format!(
                "self rating must be between 0 and 1, got {value}"
            )))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Score a caption in [0, 1].
///
/// Additive: +0.2 for 60+ characters, +0.3 for any noun hint as a whole word,
/// +0.2 when no banned token appears as a whole word, and `rating * 0.2` for a
/// self-rating. An empty caption scores 0.2 (the clean bonus only).
pub fn score_confidence(caption: &str, self_rating: Option<SelfRating>) -> f64 {
    let mut score = 0.0;

    if caption.chars().count() >= MIN_DETAILED_CHARS {
        score += LENGTH_BONUS;
    }
    if NOUN_RE.is_match(caption) {
        score += NOUN_BONUS;
    }
    if !BANNED_RE.is_match(caption) {
        score += CLEAN_BONUS;
    }
    if let Some(rating) = self_rating {
        score += rating.value() * SELF_RATING_WEIGHT;
    }

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_caption_gets_clean_bonus_only() {
        assert!(approx(score_confidence("", None), 0.2));
    }

    #[test]
    fn noun_and_length_bonuses() {
        let caption = "A brown dog lies beside a wooden chair in a sunny kitchen corner.";
        assert!(caption.len() >= 60);
        assert!(approx(score_confidence(caption, None), 0.7));
    }

    #[test]
    fn banned_token_loses_clean_bonus() {
        assert!(approx(score_confidence("a cinematic dog", None), 0.3));
    }

    #[test]
    fn self_rating_is_linear() {
        let rating = SelfRating::new(0.5).unwrap();
        assert!(approx(score_confidence("", Some(rating)), 0.3));
        let full = SelfRating::new(1.0).unwrap();
        assert!(approx(score_confidence("", Some(full)), 0.4));
    }

    #[test]
    fn maximum_score_is_nine_tenths() {
        let caption = "A person stands next to a red car on a quiet street near a house.";
        let score = score_confidence(caption, Some(SelfRating::new(1.0).unwrap()));
        assert!(approx(score, 0.9));
    }

    #[test]
    fn self_rating_rejects_out_of_range() {
        for bad in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(SelfRating::new(bad), Err(GenieError::InvalidArgument(_))));
        }
        assert!(SelfRating::new(0.0).is_ok());
        assert!(SelfRating::new(1.0).is_ok());
    }

    proptest! {
        #[test]
        fn score_in_unit_interval(caption in ".*", rating in prop::option::of(0.0f64..=1.0)) {
            let rating = rating.map(|r| SelfRating::new(r).unwrap());
            let score = score_confidence(&caption, rating);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
