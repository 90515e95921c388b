//! HTML to agent-friendly Markdown conversion pipeline
//!
//! The pipeline runs strictly in order over one input document:
//! 1. Reject oversized input before parsing
//! 2. Read JSON-LD metadata and the `<title>` from the untouched parse
//! 3. Locate the main content element
//! 4. Clone it, then filter chrome and resolve relative links on the clone
//! 5. Render Markdown with htmd and the configured rule set
//! 6. Normalize whitespace, prepend frontmatter, estimate tokens
//!
//! # Usage
//!
//! ## Synchronous
//! ```rust
//! # use kodegen_tools_markdown_mirror::markdown_converter::HtmlToMarkdown;
//! let html = "<html><body><main><h1>Title</h1><p>Content</p></main></body></html>";
//! let converter = HtmlToMarkdown::default();
//! let result = converter.convert(html)?;
//! assert!(result.markdown.starts_with("# Title"));
//! # Ok::<(), kodegen_tools_markdown_mirror::markdown_converter::ConvertError>(())
//! ```
//!
//! ## Asynchronous
//! ```rust
//! # use kodegen_tools_markdown_mirror::markdown_converter::HtmlToMarkdown;
//! # use std::sync::Arc;
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let converter = Arc::new(HtmlToMarkdown::default());
//! let html = "<html><body><h1>Title</h1></body></html>".to_string();
//! let result = converter.convert_async(html).await?;
//! assert!(result.token_count > 0);
//! # Ok::<(), anyhow::Error>(())
//! # }).unwrap();
//! ```
//!
//! ## Custom Configuration
//! ```rust
//! # use kodegen_tools_markdown_mirror::config::ConverterConfig;
//! # use kodegen_tools_markdown_mirror::markdown_converter::HtmlToMarkdown;
//! let config = ConverterConfig::builder()
//!     .content_selectors(["#docs"])
//!     .exclude_selectors([".ad"])
//!     .base_url("https://example.com/guide/")
//!     .build()?;
//! let converter = HtmlToMarkdown::new(config);
//! let result = converter.convert(
//!     r#"<main>Ignored</main><div id="docs"><a href="intro">Intro</a><p class="ad">Buy</p></div>"#,
//! )?;
//! assert!(result.markdown.contains("[Intro](https://example.com/guide/intro)"));
//! assert!(!result.markdown.contains("Buy"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use serde::Serialize;
use std::sync::Arc;

// Declare sub-modules
pub mod custom_handlers;
pub mod document;
pub mod errors;
pub mod html_preprocessing;
pub mod html_to_markdown;
pub mod markdown_postprocessing;
pub mod metadata;
pub mod token_counter;

// Re-export sub-modules for advanced usage
pub use custom_handlers::{RenderRule, RuleSet};
pub use document::{ContentTree, Document};
pub use errors::{ConfigError, ConvertError, ConvertResult};
pub use html_preprocessing::{
    FilterSelectors, default_content_selectors, filter_content, locate_main_content, resolve_urls,
};
pub use html_to_markdown::MarkdownConverter;
pub use markdown_postprocessing::normalize_whitespace;
pub use metadata::{JsonLdExtraction, JsonLdRecord, extract_json_ld};
pub use token_counter::{HeuristicTokenCounter, TokenCounter, count_tokens};

use crate::config::ConverterConfig;

/// Outcome of one conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Frontmatter (if any) followed by the normalized Markdown body
    pub markdown: String,
    /// Estimated token count of `markdown`
    pub token_count: usize,
    /// Every JSON-LD record found, `None` when the page had none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<Vec<JsonLdRecord>>,
    /// Trimmed `<title>` text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Reusable converter bound to one configuration.
///
/// Holds no per-call state, so a single instance can serve concurrent
/// conversions behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct HtmlToMarkdown {
    config: ConverterConfig,
    renderer: MarkdownConverter,
}

impl HtmlToMarkdown {
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        let renderer =
            MarkdownConverter::new(config.render_options().clone(), config.render_rules());
        Self { config, renderer }
    }

    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert an HTML document to Markdown synchronously (blocking).
    ///
    /// A page without any locatable content is not an error: the result
    /// then carries only the frontmatter (possibly empty) and a token count
    /// of zero.
    ///
    /// # Errors
    ///
    /// * [`ConvertError::SizeExceeded`] if `html` is larger than the
    ///   configured maximum. Nothing is parsed in that case.
    /// * [`ConvertError::Render`] if the Markdown engine fails.
    ///
    /// # Limitations
    ///
    /// The size guard only bounds the input in bytes. htmd renders the
    /// content tree recursively, so a small document with thousands of
    /// nested elements can exhaust the calling thread's stack and abort the
    /// process. Callers accepting untrusted markup should bound nesting depth
    /// before converting or run on a thread with a larger stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use kodegen_tools_markdown_mirror::markdown_converter::HtmlToMarkdown;
    /// let html = r#"
    ///     <html>
    ///         <head>
    ///             <title>My Article</title>
    ///             <script type="application/ld+json">{"@type":"Article","headline":"My Article"}</script>
    ///         </head>
    ///         <body>
    ///             <nav>Menu</nav>
    ///             <article>
    ///                 <h1>My Article</h1>
    ///                 <p>This is <strong>important</strong> content.</p>
    ///             </article>
    ///         </body>
    ///     </html>
    /// "#;
    ///
    /// let result = HtmlToMarkdown::default().convert(html)?;
    /// assert!(result.markdown.starts_with("---\n"));
    /// assert!(result.markdown.contains("**important**"));
    /// assert!(!result.markdown.contains("Menu"));
    /// assert_eq!(result.title.as_deref(), Some("My Article"));
    /// # Ok::<(), kodegen_tools_markdown_mirror::markdown_converter::ConvertError>(())
    /// ```
    pub fn convert(&self, html: &str) -> ConvertResult<ConversionResult> {
        let config = &self.config;

        // Stage 0: Size guard
        let max = config.max_content_size();
        if html.len() > max {
            return Err(ConvertError::SizeExceeded {
                actual: html.len(),
                max,
            });
        }

        // Stage 1: Parse. Metadata and title are read before anything is cloned.
        let document = Document::parse(html);

        let extraction = if config.extract_json_ld() {
            extract_json_ld(&document)
        } else {
            JsonLdExtraction::default()
        };
        let frontmatter = extraction.frontmatter;
        let json_ld = (!extraction.records.is_empty()).then_some(extraction.records);
        let title = document.title();

        // Stage 2: Locate the content root
        let tree = locate_main_content(&document, config.locator_selectors())
            .and_then(|root| document.content_tree(root));
        let Some(mut tree) = tree else {
            tracing::debug!("No content root found, returning frontmatter only");
            return Ok(ConversionResult {
                markdown: frontmatter,
                token_count: 0,
                json_ld,
                title,
            });
        };

        // Stage 3: Filter and resolve on the clone
        filter_content(&mut tree, config.filter_selectors());
        if let Some(base_url) = config.base_url() {
            resolve_urls(&mut tree, base_url);
        }

        // Stage 4: Render
        let rendered = self.renderer.convert(&tree)?;

        // Stage 5: Normalize and assemble
        let body = normalize_whitespace(&rendered);
        let markdown = frontmatter + &body;

        let token_count = match config.token_counter() {
            Some(counter) => counter.count(&markdown),
            None => count_tokens(&markdown),
        };

        tracing::debug!(
            html_bytes = html.len(),
            markdown_bytes = markdown.len(),
            token_count,
            json_ld_records = json_ld.as_ref().map_or(0, Vec::len),
            "Converted HTML to markdown"
        );

        Ok(ConversionResult {
            markdown,
            token_count,
            json_ld,
            title,
        })
    }

    /// Convert an HTML document to Markdown asynchronously.
    ///
    /// Parsing and rendering are CPU-bound, so the synchronous pipeline runs
    /// on tokio's blocking pool.
    ///
    /// # Errors
    ///
    /// Returns the conversion error, or an error if the blocking task panicked.
    ///
    /// # Limitations
    ///
    /// Blocking-pool threads use tokio's default 2 MiB stack. Deeply nested
    /// input overflows it (see [`HtmlToMarkdown::convert`]), and a stack
    /// overflow aborts the process rather than surfacing as a panic here.
    pub async fn convert_async(self: &Arc<Self>, html: String) -> anyhow::Result<ConversionResult> {
        let converter = Arc::clone(self);

        let result = tokio::task::spawn_blocking(move || converter.convert(&html))
            .await
            .map_err(|e| anyhow::anyhow!("HTML-to-Markdown conversion task panicked: {}", e))??;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(html: &str) -> ConversionResult {
        HtmlToMarkdown::default()
            .convert(html)
            .expect("Test operation should succeed")
    }

    #[test]
    fn test_convert_basic() {
        let html = r"
            <html>
                <body>
                    <h1>Test Title</h1>
                    <p>This is a <strong>test</strong> paragraph.</p>
                </body>
            </html>
        ";

        let result = convert(html);
        assert!(result.markdown.contains("# Test Title"));
        assert!(result.markdown.contains("**test**"));
        assert!(result.markdown.ends_with('\n'));
        assert!(!result.markdown.ends_with("\n\n"));
        assert!(result.token_count > 0);
        assert_eq!(result.json_ld, None);
        assert_eq!(result.title, None);
    }

    #[test]
    fn test_conversion_pipeline_stages() {
        let html = r"
            <html>
                <head><script>alert('test');</script></head>
                <body>
                    <nav>Navigation</nav>
                    <article>
                        <h1>Main Content</h1>
                        <p>Article text</p>
                    </article>
                    <footer>Footer</footer>
                </body>
            </html>
        ";

        let markdown = convert(html).markdown;
        assert!(markdown.contains("# Main Content"));
        assert!(markdown.contains("Article text"));
        assert!(!markdown.contains("alert"));
        assert!(!markdown.contains("Navigation"));
        assert!(!markdown.contains("Footer"));
    }

    #[test]
    fn test_frontmatter_prefixes_body() {
        let html = r#"<html><head>
            <title> Page </title>
            <script type="application/ld+json">{"@type":"Article","headline":"Test"}</script>
            </head><body><main><p>Body text</p></main></body></html>"#;

        let result = convert(html);
        assert!(result.markdown.starts_with("---\n"));
        assert!(result.markdown.contains("title: Test"));
        let (_, body) = result
            .markdown
            .split_once("\n---\n\n")
            .expect("frontmatter delimiter");
        assert!(body.starts_with("Body text"));
        assert_eq!(result.json_ld.map(|r| r.len()), Some(1));
        assert_eq!(result.title.as_deref(), Some("Page"));
    }

    #[test]
    fn test_json_ld_disabled() {
        let html = r#"<html><head>
            <script type="application/ld+json">{"@type":"Article","headline":"Test"}</script>
            </head><body><p>Body</p></body></html>"#;
        let config = ConverterConfig::builder()
            .extract_json_ld(false)
            .build()
            .expect("valid config");

        let result = HtmlToMarkdown::new(config)
            .convert(html)
            .expect("Test operation should succeed");
        assert!(!result.markdown.contains("---"));
        assert_eq!(result.json_ld, None);
    }

    #[test]
    fn test_empty_html() {
        let result = convert("");
        assert!(result.markdown.len() <= 1);
    }

    #[test]
    fn test_empty_body() {
        let result = convert("<html><body></body></html>");
        assert!(result.markdown.trim().is_empty());
    }

    #[test]
    fn test_malformed_html_resilience() {
        let result = convert("<html><body><h1>Unclosed heading<p>Paragraph</body>");
        assert!(result.markdown.contains("Unclosed heading"));
        assert!(result.markdown.contains("Paragraph"));
    }

    #[test]
    fn test_size_guard() {
        let config = ConverterConfig::builder()
            .max_content_size(10)
            .build()
            .expect("valid config");
        let html = "<html><body>too long</body></html>";

        let err = HtmlToMarkdown::new(config)
            .convert(html)
            .expect_err("input over the limit");
        assert!(err.is_size_exceeded());
        let message = err.to_string();
        assert!(message.contains(&html.len().to_string()));
        assert!(message.contains("10"));
    }

    #[test]
    fn test_input_at_limit_is_accepted() {
        let html = "<p>ok</p>";
        let config = ConverterConfig::builder()
            .max_content_size(html.len())
            .build()
            .expect("valid config");
        assert!(HtmlToMarkdown::new(config).convert(html).is_ok());
    }

    #[test]
    fn test_custom_token_counter() {
        let config = ConverterConfig::builder()
            .token_counter(Arc::new(|_: &str| 999_usize))
            .build()
            .expect("valid config");
        let result = HtmlToMarkdown::new(config)
            .convert("<p>Hello</p>")
            .expect("Test operation should succeed");
        assert_eq!(result.token_count, 999);
    }

    #[test]
    fn test_token_count_matches_output() {
        let result = convert("<main><p>One two three four</p></main>");
        assert_eq!(result.token_count, count_tokens(&result.markdown));
    }

    #[tokio::test]
    async fn test_convert_async_matches_sync() {
        let html = "<html><body><main><h1>Async</h1><p>Body</p></main></body></html>";
        let converter = Arc::new(HtmlToMarkdown::default());

        let sync_result = converter.convert(html).expect("sync conversion");
        let async_result = converter
            .convert_async(html.to_string())
            .await
            .expect("async conversion");
        assert_eq!(sync_result, async_result);
    }

    #[test]
    fn test_converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HtmlToMarkdown>();
    }
}
