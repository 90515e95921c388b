//! HTML to agent-friendly Markdown conversion.
//!
//! Locates a page's main content, strips navigation and other chrome,
//! resolves relative links, renders GFM-flavoured Markdown with htmd and
//! prefixes a YAML frontmatter block synthesized from the page's JSON-LD.
//! Every result carries a token estimate for LLM context budgeting.
//!
//! ```rust
//! use kodegen_tools_markdown_mirror::{ConverterConfig, HtmlToMarkdown};
//!
//! let config = ConverterConfig::builder()
//!     .base_url("https://example.com")
//!     .build()?;
//! let result = HtmlToMarkdown::new(config)
//!     .convert(r#"<main><h1>Hi</h1><a href="/docs">Docs</a></main>"#)?;
//! assert!(result.markdown.contains("[Docs](https://example.com/docs)"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod markdown_converter;
pub mod utils;

pub use config::{ConfigFile, ContentSignal, ConverterConfig, ConverterConfigBuilder, RenderOptions};
pub use markdown_converter::{
    ConfigError, ConversionResult, ConvertError, ConvertResult, HtmlToMarkdown, RenderRule,
    RuleSet, TokenCounter, count_tokens,
};
pub use utils::MARKDOWN_CONTENT_TYPE;
