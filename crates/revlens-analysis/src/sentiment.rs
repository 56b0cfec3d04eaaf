//! HTTP adapter for the sentiment inference engine.

use serde::{Deserialize, Serialize};

use revlens_core::RawReview;

use crate::error::AnalysisError;
use crate::types::{SentimentLabel, SentimentResult};

/// Engine input limit in characters; longer reviews are truncated before
/// classification. The returned `review_text` keeps the original text.
const MAX_INPUT_CHARS: usize = 450;

/// Sentiment engine HTTP client.
pub struct SentimentClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct Prediction {
    label: String,
    score: f64,
}

impl SentimentClient {
    /// Create a new `SentimentClient` for the engine at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Classifies each review's sentiment, index-preserving.
    ///
    /// Output has exactly one entry per input review; empty texts yield
    /// `None` at their position. Inference calls are serialized — no
    /// fan-out across reviews.
    ///
    /// # Errors
    ///
    /// Fail-hard: any engine error (network, non-2xx, unparsable or empty
    /// response) returns [`AnalysisError::Inference`] for the whole batch.
    pub async fn score(
        &self,
        reviews: &[RawReview],
        model: &str,
    ) -> Result<Vec<Option<SentimentResult>>, AnalysisError> {
        let url = format!("{}/models/{model}/predict", self.base_url);
        let mut results = Vec::with_capacity(reviews.len());

        for review in reviews {
            if review.text.trim().is_empty() {
                results.push(None);
                continue;
            }

            let truncated: String = review.text.chars().take(MAX_INPUT_CHARS).collect();
            let prediction = self.predict(&url, &truncated).await?;

            results.push(Some(SentimentResult {
                review_text: review.text.clone(),
                label: SentimentLabel::from_engine(&prediction.label),
                confidence: prediction.score.clamp(0.0, 1.0),
            }));
        }

        Ok(results)
    }

    async fn predict(&self, url: &str, text: &str) -> Result<Prediction, AnalysisError> {
        let response = self
            .client
            .post(url)
            .json(&PredictRequest { inputs: text })
            .send()
            .await
            .map_err(|e| AnalysisError::Inference(format!("sentiment request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AnalysisError::Inference(format!(
                "sentiment engine returned status {}",
                response.status()
            )));
        }

        let predictions: Vec<Prediction> = response.json().await.map_err(|e| {
            AnalysisError::Inference(format!("sentiment response parse error: {e}"))
        })?;

        predictions
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::Inference("sentiment engine returned no predictions".into()))
    }
}
