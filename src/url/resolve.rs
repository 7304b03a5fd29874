use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves a raw hyperlink reference against the page it was found on
///
/// Handles already-absolute references, scheme-relative references
/// (`//host/path`), path-relative references, and fragment-only references
/// using standard base-URL resolution rules. No network access.
///
/// # Arguments
///
/// * `base` - The URL of the page the reference was found on
/// * `href` - The raw href attribute value
///
/// # Returns
///
/// * `Ok(Url)` - The absolute URL the reference points at
/// * `Err(UrlError)` - The reference cannot be parsed as any valid URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use shiori::url::resolve;
///
/// let base = Url::parse("https://example.com/docs/intro").unwrap();
/// let resolved = resolve(&base, "../api").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/api");
/// ```
pub fn resolve(base: &Url, href: &str) -> UrlResult<Url> {
    base.join(href)
        .map_err(|e| UrlError::Malformed(format!("'{}': {}", href, e)))
}
