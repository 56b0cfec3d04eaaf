//! Rule-based credibility scoring.
//!
//! Fully local and deterministic — no engine calls. Each review starts at
//! 100 and loses points for linguistic signals of low trustworthiness;
//! the rules stack and the result floors at 0.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use revlens_core::RawReview;

use crate::types::CredibilityResult;

/// Marketing/exaggeration vocabulary, matched as whole words,
/// case-insensitive.
static BANNED_VOCAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(BUY|SCAM|FAKE|BEST|AMAZING|PERFECT|MUST-HAVE|LIFE-CHANGING|WASTE OF MONEY|DO NOT BUY|GARBAGE)\b",
    )
    .expect("valid regex")
});

/// Excessive punctuation (3+ consecutive `!` or `?`) or an all-caps word
/// of length >= 5. Case matters here, so no `(?i)`.
static SHOUTING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{3,}|\?{3,}|\b[A-Z]{5,}\b").expect("valid regex"));

const SHORT_REVIEW_WORDS: usize = 20;
const SHORT_REVIEW_PENALTY: i32 = 30;
const BANNED_VOCAB_PENALTY: i32 = 25;
const SHOUTING_PENALTY: i32 = 20;
const REPETITION_PENALTY: i32 = 20;
const REPETITION_THRESHOLD: usize = 3;
const DUPLICATE_PENALTY: i32 = 40;

/// Scores each review's credibility in [0, 100], index-preserving.
///
/// Deduction rules, applied independently (they stack):
/// - fewer than 20 words: −30
/// - banned marketing vocabulary (whole word, any case): −25
/// - 3+ consecutive `!`/`?` or an all-caps word of length ≥ 5: −20
/// - most frequent lower-cased word occurs more than 3 times: −20
/// - exact duplicate text (trimmed, lower-cased) within the batch: −40,
///   applied to every occurrence including the first
///
/// Empty texts yield `None` at their position. Total over any well-formed
/// batch — this scorer cannot fail.
#[must_use]
pub fn assess_credibility(reviews: &[RawReview]) -> Vec<Option<CredibilityResult>> {
    // Duplicate detection operates within this batch only.
    let mut normalized_counts: HashMap<String, usize> = HashMap::new();
    for review in reviews {
        *normalized_counts
            .entry(review.text.trim().to_lowercase())
            .or_insert(0) += 1;
    }

    reviews
        .iter()
        .map(|review| {
            let text = review.text.trim();
            if text.is_empty() {
                return None;
            }

            let mut score: i32 = 100;

            if text.split_whitespace().count() < SHORT_REVIEW_WORDS {
                score -= SHORT_REVIEW_PENALTY;
            }

            if BANNED_VOCAB_RE.is_match(text) {
                score -= BANNED_VOCAB_PENALTY;
            }

            if SHOUTING_RE.is_match(text) {
                score -= SHOUTING_PENALTY;
            }

            if max_word_frequency(text) > REPETITION_THRESHOLD {
                score -= REPETITION_PENALTY;
            }

            if normalized_counts
                .get(&text.to_lowercase())
                .copied()
                .unwrap_or(0)
                > 1
            {
                score -= DUPLICATE_PENALTY;
            }

            // Floor at 0; the base of 100 and subtractive deltas mean no
            // upper clamp is needed.
            let credibility_score = u8::try_from(score.max(0)).unwrap_or(0);

            Some(CredibilityResult {
                review_text: review.text.clone(),
                credibility_score,
            })
        })
        .collect()
}

/// Occurrence count of the most frequent lower-cased whitespace token.
fn max_word_frequency(text: &str) -> usize {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in lowered.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts.values().copied().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(text: &str) -> RawReview {
        RawReview {
            text: text.to_string(),
            rating: 4,
        }
    }

    fn score_of(results: &[Option<CredibilityResult>], i: usize) -> u8 {
        results[i]
            .as_ref()
            .expect("expected a credibility result")
            .credibility_score
    }

    // 28 words, no banned vocabulary, no shouting, no word repeated more
    // than 3 times, unique within its batch.
    const CLEAN_REVIEW: &str = "The delivery was quick and the packaging kept everything intact \
        so the whole family has been using it daily for several weeks now without any trouble at all";

    #[test]
    fn clean_review_scores_exactly_100() {
        let results = assess_credibility(&[review(CLEAN_REVIEW)]);
        assert_eq!(score_of(&results, 0), 100);
    }

    #[test]
    fn short_review_loses_30() {
        let results = assess_credibility(&[review("Works fine and arrived on time for me")]);
        assert_eq!(score_of(&results, 0), 70);
    }

    #[test]
    fn banned_vocabulary_loses_25() {
        let text = "This is the best purchase I have made in years and I would happily \
            order the same thing again for anyone in my family";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 75, "only the vocabulary rule should fire");
    }

    #[test]
    fn banned_vocabulary_matches_whole_words_only() {
        // "bestseller" contains "best" but is not a whole-word match.
        let text = "This bestseller arrived quickly and the packaging kept everything intact \
            so the family has been using it daily for weeks without any trouble at all";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 100);
    }

    #[test]
    fn multi_word_banned_phrase_matches() {
        let text = "Honestly a waste of money because the handle snapped off within days \
            and the seller never answered any of my messages about a replacement unit";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 75);
    }

    #[test]
    fn excessive_punctuation_loses_20() {
        let text = "Why does the battery drain overnight even when the device is powered \
            down completely??? I have tried every setting the manual mentions with no change";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 80);
    }

    #[test]
    fn all_caps_word_loses_20() {
        let text = "The TERRIBLE seam on the left side came apart after one wash even \
            though I followed the care label instructions exactly as they were written";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 80);
    }

    #[test]
    fn short_all_caps_word_is_not_shouting() {
        // "USB" is under the 5-letter threshold.
        let text = "The USB cable included in the box is long enough to reach across \
            my desk and it charges this device quickly without getting warm at all";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 100);
    }

    #[test]
    fn repeated_word_more_than_three_times_loses_20() {
        let text = "good good good good value overall and the seller shipped it quickly \
            with careful packaging so everything arrived intact and ready to use right away";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 80);
    }

    #[test]
    fn word_repeated_exactly_three_times_is_fine() {
        let text = "The case fits the case pocket well and a spare case insert ships \
            with it so the whole bundle covers everything I needed for daily travel use";
        let results = assess_credibility(&[review(text)]);
        assert_eq!(score_of(&results, 0), 100);
    }

    #[test]
    fn duplicates_penalize_every_occurrence() {
        let results = assess_credibility(&[review(CLEAN_REVIEW), review(CLEAN_REVIEW)]);
        assert_eq!(score_of(&results, 0), 60, "first occurrence is penalized too");
        assert_eq!(score_of(&results, 1), 60);
    }

    #[test]
    fn duplicate_detection_is_case_insensitive() {
        let upper = CLEAN_REVIEW.to_uppercase();
        let results = assess_credibility(&[review(CLEAN_REVIEW), review(&upper)]);
        // Both get the duplicate −40; the upper-cased copy also trips the
        // all-caps shouting rule.
        assert_eq!(score_of(&results, 0), 60);
        assert_eq!(score_of(&results, 1), 40);
    }

    #[test]
    fn penalties_stack_as_specified() {
        // "BEST!!! BEST!!! BEST!!!": short (−30), banned vocab (−25),
        // punctuation (−20). "BEST" is only 4 letters so the caps rule
        // alone would not fire, and no token exceeds 3 occurrences.
        let results = assess_credibility(&[review("BEST!!! BEST!!! BEST!!!")]);
        assert_eq!(score_of(&results, 0), 25);
    }

    #[test]
    fn score_floors_at_zero() {
        // Short + banned + punctuation + repetition + duplicate:
        // 100 − 30 − 25 − 20 − 20 − 40 < 0.
        let spam = "SCAM!!! SCAM!!! SCAM!!! SCAM!!!";
        let results = assess_credibility(&[review(spam), review(spam)]);
        assert_eq!(score_of(&results, 0), 0);
        assert_eq!(score_of(&results, 1), 0);
    }

    #[test]
    fn empty_text_yields_none_at_its_position() {
        let results = assess_credibility(&[review(CLEAN_REVIEW), review("   ")]);
        assert_eq!(results.len(), 2, "output must stay index-aligned");
        assert!(results[0].is_some());
        assert!(results[1].is_none());
    }

    #[test]
    fn output_length_always_equals_input_length() {
        let batch = vec![review(CLEAN_REVIEW), review("short one"), review("")];
        let results = assess_credibility(&batch);
        assert_eq!(results.len(), batch.len());
    }

    #[test]
    fn scores_stay_within_bounds() {
        let batch = vec![
            review(CLEAN_REVIEW),
            review("BEST!!! BEST!!! BEST!!!"),
            review("GARBAGE GARBAGE GARBAGE GARBAGE???"),
        ];
        for result in assess_credibility(&batch).into_iter().flatten() {
            assert!(result.credibility_score <= 100);
        }
    }
}
