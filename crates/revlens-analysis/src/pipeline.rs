//! Request-scoped analysis pipeline.
//!
//! Extraction → {sentiment, bias, credibility over the same batch} →
//! merge. The three scorers are independent of each other; only the merge
//! needs all of them. Each stage runs under a declared [`StagePolicy`]
//! instead of ad-hoc per-stage exception handling.

use revlens_core::{AppConfig, RawReview};
use revlens_extractor::{extract_reviews, ExtractError, PageEngine};

use crate::bias::ZeroShotClient;
use crate::credibility::assess_credibility;
use crate::error::AnalysisError;
use crate::merge::merge;
use crate::sentiment::SentimentClient;
use crate::types::AnalysisReport;

/// Declared failure policy for a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePolicy {
    /// Log the failure and continue with the stage's fallback output.
    SkipOnError,
    /// Abort the whole request with the stage's error.
    AbortOnError,
}

/// Extraction degrades to whatever was collected (possibly nothing);
/// realized inside the extractor, which returns partial results rather
/// than an error.
pub const EXTRACTION_POLICY: StagePolicy = StagePolicy::SkipOnError;
pub const SENTIMENT_POLICY: StagePolicy = StagePolicy::AbortOnError;
pub const BIAS_POLICY: StagePolicy = StagePolicy::AbortOnError;

impl StagePolicy {
    /// Resolves a stage result under this policy.
    ///
    /// `fallback` is only invoked under [`StagePolicy::SkipOnError`].
    ///
    /// # Errors
    ///
    /// Propagates the stage error under [`StagePolicy::AbortOnError`].
    pub fn resolve<T>(
        self,
        stage: &'static str,
        result: Result<T, AnalysisError>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T, AnalysisError> {
        match (self, result) {
            (_, Ok(value)) => Ok(value),
            (StagePolicy::SkipOnError, Err(e)) => {
                tracing::warn!(stage, error = %e, "stage failed, continuing with fallback");
                Ok(fallback())
            }
            (StagePolicy::AbortOnError, Err(e)) => {
                tracing::error!(stage, error = %e, "stage failed, aborting analysis");
                Err(e)
            }
        }
    }
}

/// The analysis service.
///
/// Constructed once at startup from [`AppConfig`] and shared by reference
/// across requests; holds the long-lived page engine and inference engine
/// clients. Each `analyze` call owns its review batch exclusively — no
/// cross-request state.
pub struct Analyzer {
    engine: PageEngine,
    sentiment: SentimentClient,
    zero_shot: ZeroShotClient,
    default_model: String,
    max_pages: u32,
}

impl Analyzer {
    /// Builds an `Analyzer` from its parts.
    #[must_use]
    pub fn new(
        engine: PageEngine,
        sentiment: SentimentClient,
        zero_shot: ZeroShotClient,
        default_model: String,
        max_pages: u32,
    ) -> Self {
        Self {
            engine,
            sentiment,
            zero_shot,
            default_model,
            max_pages,
        }
    }

    /// Builds an `Analyzer` from application config.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the page engine's HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ExtractError> {
        let engine = PageEngine::new(
            config.extractor_nav_timeout_secs,
            &config.extractor_user_agent,
            config.extractor_settle_delay_ms,
            config.min_review_chars,
        )?;
        Ok(Self::new(
            engine,
            SentimentClient::new(&config.sentiment_url),
            ZeroShotClient::new(&config.zero_shot_url),
            config.sentiment_model.clone(),
            config.extractor_max_pages,
        ))
    }

    /// Runs the full pipeline for one product URL.
    ///
    /// `pages` is clamped to `[1, max_pages]`. `model` overrides the
    /// configured sentiment model for this request only. Scoring calls
    /// are serialized per request — no internal fan-out across reviews.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::NoReviews`] — extraction yielded an empty batch
    ///   (extraction failures themselves are absorbed, per
    ///   [`EXTRACTION_POLICY`]).
    /// - [`AnalysisError::Inference`] — a sentiment or zero-shot engine
    ///   call failed; per [`SENTIMENT_POLICY`]/[`BIAS_POLICY`] this aborts
    ///   the request.
    pub async fn analyze(
        &self,
        url: &str,
        pages: u32,
        model: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let pages = pages.clamp(1, self.max_pages);
        let model = model.unwrap_or(&self.default_model);

        let raw_reviews: Vec<RawReview> = extract_reviews(&self.engine, url, pages).await;
        if raw_reviews.is_empty() {
            return Err(AnalysisError::NoReviews);
        }

        tracing::info!(url, count = raw_reviews.len(), model, "scoring review batch");

        let sentiments = SENTIMENT_POLICY.resolve(
            "sentiment",
            self.sentiment.score(&raw_reviews, model).await,
            || vec![None; raw_reviews.len()],
        )?;

        let biases = BIAS_POLICY.resolve(
            "bias",
            self.zero_shot.score(&raw_reviews).await,
            || vec![None; raw_reviews.len()],
        )?;

        let credibilities = assess_credibility(&raw_reviews);

        let product_reviews = merge(&raw_reviews, &sentiments, &biases, &credibilities);

        Ok(AnalysisReport {
            product_reviews,
            sentiment_analysis: sentiments,
            aspect_analysis: biases,
            credibility_scores: credibilities,
        })
    }
}
