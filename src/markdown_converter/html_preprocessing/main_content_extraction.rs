//! Main content location.
//!
//! Tries each selector in priority order against the whole document and
//! returns the first element matched. Structural containers (`<main>`,
//! `<article>`) come before generic class names in the default list. When
//! nothing matches, the `<body>` element is the content root.

use crate::markdown_converter::document::Document;
use crate::utils::constants::DEFAULT_CONTENT_SELECTORS;
use ego_tree::NodeId;
use scraper::Selector;
use std::sync::LazyLock;

static DEFAULT_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    DEFAULT_CONTENT_SELECTORS
        .iter()
        .map(|s| {
            Selector::parse(s)
                .unwrap_or_else(|e| panic!("BUG: hardcoded content selector '{s}' is invalid: {e}"))
        })
        .collect()
});

/// The built-in content selector priority list, compiled once.
#[must_use]
pub fn default_content_selectors() -> &'static [Selector] {
    &DEFAULT_SELECTORS
}

/// Locate the main content element of `document`.
///
/// The first selector in `selectors` that matches any element wins; within a
/// selector the first match in document order is used. Falls back to
/// `<body>`. Returns `None` only when the document has no body at all.
#[must_use]
pub fn locate_main_content(document: &Document, selectors: &[Selector]) -> Option<NodeId> {
    for (priority, selector) in selectors.iter().enumerate() {
        if let Some(element) = document.select_first(selector) {
            tracing::debug!(
                priority,
                element = element.value().name(),
                "Located main content"
            );
            return Some(element.id());
        }
    }

    let body = document.body();
    if body.is_some() {
        tracing::debug!("No content selector matched, falling back to <body>");
    }
    body.map(|b| b.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located_name(html: &str, selectors: &[Selector]) -> Option<String> {
        let doc = Document::parse(html);
        let id = locate_main_content(&doc, selectors)?;
        let tree = doc.content_tree(id)?;
        tree.root().map(|el| el.value().name().to_string())
    }

    #[test]
    fn test_prefers_main() {
        let html = r#"<html><body><div class="post-content">x</div><main>m</main></body></html>"#;
        assert_eq!(
            located_name(html, default_content_selectors()).as_deref(),
            Some("main")
        );
    }

    #[test]
    fn test_article_before_class_selectors() {
        let html = r#"<html><body><div id="content">c</div><article>a</article></body></html>"#;
        assert_eq!(
            located_name(html, default_content_selectors()).as_deref(),
            Some("article")
        );
    }

    #[test]
    fn test_role_main() {
        let html = r#"<html><body><div role="main">r</div></body></html>"#;
        assert_eq!(
            located_name(html, default_content_selectors()).as_deref(),
            Some("div")
        );
    }

    #[test]
    fn test_custom_selectors_override_defaults() {
        let html = r#"<html><body><main>m</main><section class="docs">d</section></body></html>"#;
        let custom = vec![Selector::parse(".docs").expect("valid selector")];
        assert_eq!(located_name(html, &custom).as_deref(), Some("section"));
    }

    #[test]
    fn test_body_fallback() {
        let html = "<html><body><div><p>plain</p></div></body></html>";
        assert_eq!(
            located_name(html, default_content_selectors()).as_deref(),
            Some("body")
        );
    }

    #[test]
    fn test_empty_selector_list_uses_body() {
        let html = "<html><body><main>m</main></body></html>";
        assert_eq!(located_name(html, &[]).as_deref(), Some("body"));
    }
}
