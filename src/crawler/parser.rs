//! HTML parser for extracting the page title and raw links
//!
//! The parser returns href attribute values exactly as they appear in the
//! document, in document order. Resolution against the page URL and the
//! same-origin scope check belong to the coordinator, so foreign schemes
//! like `mailto:` or `javascript:` pass through here untouched.

use scraper::{Html, Selector};
use thiserror::Error;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the <title> tag)
    pub title: Option<String>,

    /// Raw href attribute values in document order, not yet resolved
    pub hrefs: Vec<String>,
}

/// Per-page parse failures; treated exactly like fetch failures
///
/// html5ever recovers from malformed markup, so in practice this only fires
/// if a selector fails to build.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid selector '{0}'")]
    Selector(String),
}

/// Parses an HTML body and extracts the title and raw links
///
/// # Example
///
/// ```
/// use shiori::crawler::parse_page;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_page(html).unwrap();
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.hrefs, vec!["/page".to_string()]);
/// ```
pub fn parse_page(html: &str) -> Result<ParsedPage, ParseError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let hrefs = extract_hrefs(&document)?;

    Ok(ParsedPage { title, hrefs })
}

/// Extracts the page title from the document
fn extract_title(document: &Html) -> Result<Option<String>, ParseError> {
    let selector =
        Selector::parse("title").map_err(|_| ParseError::Selector("title".to_string()))?;

    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Extracts raw href values from all anchor tags, in document order
fn extract_hrefs(document: &Html) -> Result<Vec<String>, ParseError> {
    let selector =
        Selector::parse("a[href]").map_err(|_| ParseError::Selector("a[href]".to_string()))?;

    Ok(document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect())
}
