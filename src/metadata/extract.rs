//! HTML metadata extraction
//!
//! Pulls the page title and description out of a response body. Extraction
//! is best-effort: malformed markup yields unset fields, never an error.

use crate::metadata::PageMetadata;
use scraper::{Html, Selector};

/// Extracts title and description metadata from an HTML body
///
/// The description is taken from `<meta name="description">`, falling back
/// to `<meta property="og:description">`. Status, timing, and error fields
/// are left unset for the caller to fill in.
///
/// # Example
///
/// ```
/// use fetchmark::extract_metadata;
///
/// let html = r#"<html><head><title>Example</title></head><body></body></html>"#;
/// let meta = extract_metadata(html, "https://example.com");
/// assert_eq!(meta.title, Some("Example".to_string()));
/// ```
pub fn extract_metadata(html: &str, url: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = extract_title(&document);

    let description = meta_content(&document, "meta[name='description']")
        .or_else(|| meta_content(&document, "meta[property='og:description']"));

    PageMetadata {
        title,
        description,
        ..PageMetadata::new(url)
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Returns the `content` attribute of the first element matching the
/// selector, if present and non-empty
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
