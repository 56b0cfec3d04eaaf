use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A sentiment or zero-shot engine call failed. Fail-hard: aborts the
    /// whole batch, no partial results.
    #[error("inference engine error: {0}")]
    Inference(String),

    /// Extraction produced an empty batch. Mapped to "no reviews found"
    /// at the endpoint, not a server error.
    #[error("no reviews found")]
    NoReviews,
}
