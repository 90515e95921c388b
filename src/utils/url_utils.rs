//! URL manipulation utilities.
//!
//! Resolution of link and image references found in page markup.

use url::Url;

/// Check whether a reference is already absolute and must be left alone.
///
/// Absolute means `http://`, `https://`, protocol-relative `//`, or an
/// inline `data:` URI.
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("data:")
}

/// Resolve a relative reference against `base` using RFC 3986 rules.
///
/// Returns `None` for empty values and for values that are already absolute
/// or cannot be joined, so the caller leaves them untouched.
///
/// ```rust
/// # use kodegen_tools_markdown_mirror::utils::resolve_url;
/// let base = url::Url::parse("https://example.com/docs/guide.html").unwrap();
/// assert_eq!(
///     resolve_url(&base, "../api").as_deref(),
///     Some("https://example.com/api")
/// );
/// assert_eq!(resolve_url(&base, "https://other.com/x"), None);
/// ```
#[must_use]
pub fn resolve_url(base: &Url, reference: &str) -> Option<String> {
    if reference.is_empty() || is_absolute_url(reference) {
        return None;
    }
    match base.join(reference) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            tracing::debug!(reference, error = %e, "Skipping unresolvable URL");
            None
        }
    }
}
