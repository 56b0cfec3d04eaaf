//! Review extraction for revlens.
//!
//! Drives a page session against a product URL, paginates through review
//! listings, and yields raw `(text, rating)` pairs in page-then-DOM order.
//! Extraction is fail-soft: any navigation or scraping error is logged and
//! whatever was collected so far is returned.

pub mod engine;
pub mod error;
pub mod extract;
mod selectors;

pub use engine::{PageEngine, PageSession};
pub use error::ExtractError;
pub use extract::extract_reviews;
