use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Sentiment polarity assigned by the inference engine.
///
/// Engine labels are mapped case-insensitively; anything outside the
/// known vocabulary maps to `Neutral` — the engine contract fixes the
/// result shape, not the label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub(crate) fn from_engine(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

/// Sentiment classification for one review.
///
/// `review_text` is the original, untruncated text even though the
/// engine input is truncated to the model's input limit.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentResult {
    pub review_text: String,
    pub label: SentimentLabel,
    /// Engine confidence in [0, 1].
    pub confidence: f64,
}

/// Label→score pairs in the order the zero-shot engine returned them.
///
/// Serialized as a JSON object; insertion order is preserved so the wire
/// format reflects engine order, not alphabetical order. Scores need not
/// sum to 1.
#[derive(Debug, Clone, Default)]
pub struct BiasScores(pub Vec<(String, f64)>);

impl Serialize for BiasScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, score) in &self.0 {
            map.serialize_entry(label, score)?;
        }
        map.end()
    }
}

/// Zero-shot bias/aspect classification for one review.
#[derive(Debug, Clone, Serialize)]
pub struct BiasResult {
    pub review_text: String,
    pub bias_scores: BiasScores,
}

/// Rule-based credibility assessment for one review.
#[derive(Debug, Clone, Serialize)]
pub struct CredibilityResult {
    pub review_text: String,
    /// Trust score in [0, 100].
    pub credibility_score: u8,
}

/// One output record per extracted review, merged from the three scorers.
///
/// Fields fall back to safe defaults when a scorer skipped the position:
/// `sentiment` null, `bias_scores` empty, `credibility_score` 0.
#[derive(Debug, Clone, Serialize)]
pub struct MergedReview {
    pub product_review: String,
    pub rating: u8,
    pub sentiment: Option<SentimentResult>,
    pub bias_scores: BiasScores,
    pub credibility_score: u8,
}

/// Full analysis output for one request.
///
/// The three scorer lists are index-aligned with `product_reviews`;
/// positions a scorer skipped serialize as `null`.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub product_reviews: Vec<MergedReview>,
    pub sentiment_analysis: Vec<Option<SentimentResult>>,
    pub aspect_analysis: Vec<Option<BiasResult>>,
    pub credibility_scores: Vec<Option<CredibilityResult>>,
}
