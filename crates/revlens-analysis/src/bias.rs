//! HTTP adapter for the zero-shot bias/aspect classification engine.

use serde::{Deserialize, Serialize};

use revlens_core::RawReview;

use crate::error::AnalysisError;
use crate::types::{BiasResult, BiasScores};

/// Fixed candidate label set for bias detection.
pub const BIAS_LABELS: [&str; 4] = [
    "exaggeration",
    "subjectivity",
    "overly emotional",
    "neutral",
];

/// Zero-shot classification engine HTTP client.
pub struct ZeroShotClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters<'a>,
}

#[derive(Serialize)]
struct ClassifyParameters<'a> {
    candidate_labels: &'a [&'a str],
}

#[derive(Deserialize)]
struct Classification {
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl ZeroShotClient {
    /// Create a new `ZeroShotClient` for the engine at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        }
    }

    /// Classifies each review against [`BIAS_LABELS`], index-preserving.
    ///
    /// The engine's label→score pairs are recorded verbatim, in the order
    /// the engine returned them. Empty texts yield `None` at their
    /// position. One synchronous engine call per review — no batching.
    ///
    /// # Errors
    ///
    /// Fail-hard: any single classification failure (network, non-2xx,
    /// unparsable response, label/score count mismatch) aborts the batch
    /// with [`AnalysisError::Inference`].
    pub async fn score(
        &self,
        reviews: &[RawReview],
    ) -> Result<Vec<Option<BiasResult>>, AnalysisError> {
        let mut results = Vec::with_capacity(reviews.len());

        for review in reviews {
            if review.text.trim().is_empty() {
                results.push(None);
                continue;
            }

            let classification = self.classify(&review.text).await?;

            if classification.labels.len() != classification.scores.len() {
                return Err(AnalysisError::Inference(format!(
                    "zero-shot engine returned {} labels for {} scores",
                    classification.labels.len(),
                    classification.scores.len()
                )));
            }

            let pairs = classification
                .labels
                .into_iter()
                .zip(classification.scores)
                .collect();

            results.push(Some(BiasResult {
                review_text: review.text.clone(),
                bias_scores: BiasScores(pairs),
            }));
        }

        Ok(results)
    }

    async fn classify(&self, text: &str) -> Result<Classification, AnalysisError> {
        let request = ClassifyRequest {
            inputs: text,
            parameters: ClassifyParameters {
                candidate_labels: &BIAS_LABELS,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Inference(format!("zero-shot request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AnalysisError::Inference(format!(
                "zero-shot engine returned status {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            AnalysisError::Inference(format!("zero-shot response parse error: {e}"))
        })
    }
}
