//! Review-block selectors and DOM parsing.
//!
//! Selector strings target the review markup of large storefront review
//! listings: a `.review` container per review, review body text under
//! `.review-text` (or the storefront's sized variant), a star rating under
//! `.review-rating` ("4.0 out of 5 stars" — only the leading digit is
//! used), and a `li.a-last a` next-page control.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use revlens_core::RawReview;

static REVIEW_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".review").expect("valid selector"));
static REVIEW_TEXT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".review-text, .a-size-base.review-text-content").expect("valid selector")
});
static REVIEW_RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".review-rating").expect("valid selector"));
static NEXT_PAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li.a-last a").expect("valid selector"));

/// Extracts review blocks from a page document.
///
/// Reviews whose trimmed text is at or below `min_review_chars` are
/// discarded as UI noise. Unparsable ratings default to 0. Order follows
/// DOM order within the page.
pub(crate) fn parse_reviews(html: &str, min_review_chars: usize) -> Vec<RawReview> {
    let document = Html::parse_document(html);
    let mut reviews = Vec::new();

    for block in document.select(&REVIEW_BLOCK) {
        let text = block
            .select(&REVIEW_TEXT)
            .next()
            .map(|el| collect_text(&el))
            .unwrap_or_default();

        if text.len() <= min_review_chars {
            continue;
        }

        let rating = block
            .select(&REVIEW_RATING)
            .next()
            .map(|el| parse_rating(&collect_text(&el)))
            .unwrap_or(0);

        reviews.push(RawReview { text, rating });
    }

    reviews
}

/// Extracts the `href` of the next-page control, if one is present.
pub(crate) fn find_next_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&NEXT_PAGE)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_owned)
}

/// Joins an element's text nodes into one trimmed, whitespace-normalized
/// string.
fn collect_text(el: &scraper::ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a star rating from its display text.
///
/// Only the first character is examined ("4.0 out of 5 stars" → 4);
/// anything unparsable defaults to 0, and values are clamped to 5.
fn parse_rating(text: &str) -> u8 {
    let digit = text
        .trim()
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0);
    #[allow(clippy::cast_possible_truncation)]
    let rating = digit.min(5) as u8;
    rating
}
