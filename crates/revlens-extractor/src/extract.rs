//! Fail-soft paginated review extraction.

use revlens_core::RawReview;

use crate::engine::PageEngine;

/// Extracts reviews from a product URL, paginating up to `max_pages`.
///
/// Fail-soft by contract: any error during navigation or scraping is
/// logged and whatever was collected so far is returned — possibly an
/// empty list, never an `Err`. Pagination stops early when no next-page
/// control is present. Reviews are returned in page-then-DOM order; that
/// ordinal position is the alignment key for every downstream scorer.
pub async fn extract_reviews(engine: &PageEngine, url: &str, max_pages: u32) -> Vec<RawReview> {
    let mut collected: Vec<RawReview> = Vec::new();

    let mut session = match engine.open(url).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(url, error = %e, "failed to open product page");
            return collected;
        }
    };

    for page in 1..=max_pages {
        let page_reviews = session.extract_reviews();
        tracing::debug!(url, page, count = page_reviews.len(), "extracted page");
        collected.extend(page_reviews);

        if page == max_pages {
            break;
        }

        match session.goto_next_page().await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(url, page, "no next-page control, stopping pagination");
                break;
            }
            Err(e) => {
                tracing::warn!(
                    url,
                    page,
                    error = %e,
                    "pagination failed, returning reviews collected so far"
                );
                break;
            }
        }
    }

    session.close();

    tracing::info!(url, count = collected.len(), "review extraction finished");
    collected
}
