use serde::{Deserialize, Serialize};

/// A single review as extracted from a product page.
///
/// `text` is trimmed and non-empty by construction; `rating` is the star
/// rating in 0–5, defaulting to 0 when the rating text could not be
/// parsed. The position of a review within its batch (page-then-DOM
/// order) is the alignment key used by every downstream scorer.
///
/// Raw reviews are scoped to one analysis request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReview {
    pub text: String,
    pub rating: u8,
}
