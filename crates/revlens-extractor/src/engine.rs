//! Page session driver for review extraction.
//!
//! `PageEngine` holds the long-lived HTTP client; `PageSession` is the
//! request-scoped navigation state (current URL + document). The session
//! honors the collaborator contract expected by the extractor: open a
//! product URL, extract review records from the current page, advance to
//! the next page when a next control exists, and release on every exit
//! path.

use std::time::Duration;

use revlens_core::RawReview;

use crate::error::ExtractError;
use crate::selectors::{find_next_href, parse_reviews};

/// Long-lived driver for page retrieval.
///
/// Construct once from `AppConfig` and share by reference; each analysis
/// call opens its own [`PageSession`].
pub struct PageEngine {
    client: reqwest::Client,
    settle_delay_ms: u64,
    min_review_chars: usize,
}

impl PageEngine {
    /// Creates a `PageEngine` with a bounded navigation timeout and the
    /// configured `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        nav_timeout_secs: u64,
        user_agent: &str,
        settle_delay_ms: u64,
        min_review_chars: usize,
    ) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(nav_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            settle_delay_ms,
            min_review_chars,
        })
    }

    /// Opens a session at the given product URL.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidUrl`] — `url` is not a valid absolute URL.
    /// - [`ExtractError::Http`] — navigation failed (network error, timeout).
    /// - [`ExtractError::UnexpectedStatus`] — non-2xx response.
    pub async fn open(&self, url: &str) -> Result<PageSession<'_>, ExtractError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ExtractError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let html = self.fetch(parsed.clone()).await?;

        Ok(PageSession {
            engine: self,
            url: parsed,
            html,
        })
    }

    async fn fetch(&self, url: reqwest::Url) -> Result<String, ExtractError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// One open page, scoped to a single extraction call.
pub struct PageSession<'a> {
    engine: &'a PageEngine,
    url: reqwest::Url,
    html: String,
}

impl PageSession<'_> {
    /// Extracts review records from the current page, in DOM order.
    #[must_use]
    pub fn extract_reviews(&self) -> Vec<RawReview> {
        parse_reviews(&self.html, self.engine.min_review_chars)
    }

    /// Advances to the next review page.
    ///
    /// Returns `Ok(false)` when no next-page control is present (last
    /// page). On success the configured settle delay is applied so the
    /// next extraction sees fully delivered content.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidUrl`] — next `href` does not resolve
    ///   against the current URL.
    /// - [`ExtractError::Http`] / [`ExtractError::UnexpectedStatus`] —
    ///   the next page could not be retrieved.
    pub async fn goto_next_page(&mut self) -> Result<bool, ExtractError> {
        let Some(href) = find_next_href(&self.html) else {
            return Ok(false);
        };

        let next_url = self.url.join(&href).map_err(|e| ExtractError::InvalidUrl {
            url: href.clone(),
            reason: e.to_string(),
        })?;

        self.html = self.engine.fetch(next_url.clone()).await?;
        self.url = next_url;

        if self.engine.settle_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.engine.settle_delay_ms)).await;
        }

        Ok(true)
    }

    /// Releases the session.
    ///
    /// Page state is dropped here; there is no underlying OS resource,
    /// but callers treat the session as acquire-then-release so a
    /// process-backed engine can slot in without changing them.
    pub fn close(self) {}
}
