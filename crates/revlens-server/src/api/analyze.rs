use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use revlens_analysis::{AnalysisError, AnalysisReport};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    url: String,
    /// Review pages to extract; defaults to 1, clamped server-side.
    pages: Option<u32>,
    /// Sentiment model override for this request only.
    model: Option<String>,
}

pub(super) async fn analyze_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, ApiError> {
    let url = request.url.trim();
    if reqwest::Url::parse(url).is_err() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "url must be a valid absolute URL",
        ));
    }

    let pages = request.pages.unwrap_or(1);

    let report = state
        .analyzer
        .analyze(url, pages, request.model.as_deref())
        .await
        .map_err(|e| map_analysis_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_analysis_error(request_id: String, error: &AnalysisError) -> ApiError {
    match error {
        AnalysisError::NoReviews => ApiError::new(
            request_id,
            "no_reviews_found",
            "no reviews found at the given URL",
        ),
        AnalysisError::Inference(_) => {
            // Full detail stays in the server log; the caller gets a
            // generic failure body.
            tracing::error!(error = %error, "analysis pipeline failed");
            ApiError::new(request_id, "analysis_failed", "analysis failed")
        }
    }
}
