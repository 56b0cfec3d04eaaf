//! Deterministic per-review merge of the three scorer outputs.

use revlens_core::RawReview;

use crate::types::{BiasResult, CredibilityResult, MergedReview, SentimentResult};

/// Merges scorer outputs into one record per raw review.
///
/// Pure function of its four inputs. Iterates raw reviews by original
/// index; a scorer value is taken only when the index is in range *and*
/// the scorer produced `Some` there — otherwise the safe default applies
/// (`None` sentiment, empty bias map, credibility 0). Output length
/// always equals `raw_reviews.len()`, regardless of any scorer's
/// shortfall. This is the contract client code relies on.
#[must_use]
pub fn merge(
    raw_reviews: &[RawReview],
    sentiments: &[Option<SentimentResult>],
    biases: &[Option<BiasResult>],
    credibilities: &[Option<CredibilityResult>],
) -> Vec<MergedReview> {
    raw_reviews
        .iter()
        .enumerate()
        .map(|(i, raw)| MergedReview {
            product_review: raw.text.clone(),
            rating: raw.rating,
            sentiment: sentiments.get(i).cloned().flatten(),
            bias_scores: biases
                .get(i)
                .and_then(|b| b.as_ref())
                .map(|b| b.bias_scores.clone())
                .unwrap_or_default(),
            credibility_score: credibilities
                .get(i)
                .and_then(|c| c.as_ref())
                .map_or(0, |c| c.credibility_score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BiasScores, SentimentLabel};

    fn raw(text: &str, rating: u8) -> RawReview {
        RawReview {
            text: text.to_string(),
            rating,
        }
    }

    fn sentiment(text: &str, label: SentimentLabel) -> SentimentResult {
        SentimentResult {
            review_text: text.to_string(),
            label,
            confidence: 0.9,
        }
    }

    fn bias(text: &str) -> BiasResult {
        BiasResult {
            review_text: text.to_string(),
            bias_scores: BiasScores(vec![("neutral".to_string(), 0.8)]),
        }
    }

    fn credibility(text: &str, score: u8) -> CredibilityResult {
        CredibilityResult {
            review_text: text.to_string(),
            credibility_score: score,
        }
    }

    #[test]
    fn merges_aligned_outputs_by_index() {
        let raws = vec![raw("first review", 5), raw("second review", 2)];
        let sentiments = vec![
            Some(sentiment("first review", SentimentLabel::Positive)),
            Some(sentiment("second review", SentimentLabel::Negative)),
        ];
        let biases = vec![Some(bias("first review")), Some(bias("second review"))];
        let credibilities = vec![
            Some(credibility("first review", 100)),
            Some(credibility("second review", 70)),
        ];

        let merged = merge(&raws, &sentiments, &biases, &credibilities);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].product_review, "first review");
        assert_eq!(merged[0].rating, 5);
        assert_eq!(
            merged[0].sentiment.as_ref().map(|s| s.label),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(merged[1].credibility_score, 70);
    }

    #[test]
    fn output_length_equals_input_length_when_scorers_fall_short() {
        let raws = vec![raw("one", 1), raw("two", 2), raw("three", 3)];
        // Every scorer list is shorter than the input.
        let sentiments = vec![Some(sentiment("one", SentimentLabel::Positive))];
        let biases: Vec<Option<BiasResult>> = vec![];
        let credibilities = vec![Some(credibility("one", 90)), Some(credibility("two", 80))];

        let merged = merge(&raws, &sentiments, &biases, &credibilities);

        assert_eq!(merged.len(), 3, "merge must cover every raw review");
        assert!(merged[1].sentiment.is_none());
        assert!(merged[2].sentiment.is_none());
        assert!(merged[0].bias_scores.0.is_empty());
        assert_eq!(merged[2].credibility_score, 0);
    }

    #[test]
    fn skipped_positions_take_safe_defaults() {
        let raws = vec![raw("kept", 4), raw("skipped", 0)];
        let sentiments = vec![Some(sentiment("kept", SentimentLabel::Positive)), None];
        let biases = vec![Some(bias("kept")), None];
        let credibilities = vec![Some(credibility("kept", 100)), None];

        let merged = merge(&raws, &sentiments, &biases, &credibilities);

        assert!(merged[0].sentiment.is_some());
        assert!(merged[1].sentiment.is_none());
        assert!(merged[1].bias_scores.0.is_empty());
        assert_eq!(merged[1].credibility_score, 0);
        // The raw review fields survive even when every scorer skipped it.
        assert_eq!(merged[1].product_review, "skipped");
    }

    #[test]
    fn empty_batch_merges_to_empty() {
        let merged = merge(&[], &[], &[], &[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_does_not_consume_inputs() {
        let raws = vec![raw("only", 3)];
        let sentiments = vec![Some(sentiment("only", SentimentLabel::Neutral))];
        let biases = vec![Some(bias("only"))];
        let credibilities = vec![Some(credibility("only", 100))];

        let first = merge(&raws, &sentiments, &biases, &credibilities);
        let second = merge(&raws, &sentiments, &biases, &credibilities);

        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].credibility_score, second[0].credibility_score);
    }
}
