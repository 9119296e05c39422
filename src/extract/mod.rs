//! Card extraction from trending-page documents
//!
//! Both pipelines share the same shape: select the card nodes with a
//! structural query, then resolve each field of each card through its own
//! sub-query. Absence of a node, text or attribute is an expected outcome
//! here, so every lookup returns an `Option` and the caller falls back to
//! the field's default.

pub mod developers;
pub mod repositories;

use scraper::{ElementRef, Html, Selector};

use crate::error::TrendingError;

/// Decode response bytes and parse them into a document.
///
/// This is the only place the extraction engine itself raises an error:
/// a body that is not valid UTF-8 cannot become a document. The HTML
/// parser is lenient, so any text yields a (possibly empty) tree.
pub fn parse_document(bytes: &[u8]) -> Result<Html, TrendingError> {
    let html = std::str::from_utf8(bytes).map_err(|_| TrendingError::ParsingFailed)?;
    Ok(Html::parse_document(html))
}

/// First element under `scope` matching the selector, if any.
/// An unparsable selector behaves like no match.
pub(crate) fn select_first<'a>(scope: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    scope.select(&sel).next()
}

/// Trimmed text of the first matching element, if any.
pub(crate) fn first_text(scope: ElementRef<'_>, selector: &str) -> Option<String> {
    select_first(scope, selector).map(|el| el.text().collect::<String>().trim().to_string())
}

/// Attribute value of the first matching element, if both exist.
pub(crate) fn first_attr(scope: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    select_first(scope, selector).and_then(|el| el.value().attr(attr).map(String::from))
}
