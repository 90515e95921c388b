//! HTML to Markdown rendering with htmd.
//!
//! Rule precedence, lowest first:
//!
//! 1. htmd's built-in handlers for base elements
//! 2. GFM extension rules (tables, strikethrough, task lists)
//! 3. Custom element rules (definition lists, details, figures, ...)
//! 4. Caller rules from the configuration
//!
//! htmd consults the most recently added handler for a tag first, so
//! registering in this order makes later layers win.

use htmd::Element;
use htmd::element_handler::Handlers;
use htmd::options::{
    BulletListMarker, CodeBlockFence, CodeBlockStyle as HtmdCodeBlockStyle,
    HeadingStyle as HtmdHeadingStyle, Options,
};

use super::custom_handlers::RuleSet;
use super::document::ContentTree;
use super::errors::ConvertResult;
use crate::config::{BulletMarker, CodeBlockStyle, CodeFence, HeadingStyle, RenderOptions};

/// Markdown renderer holding the resolved rule set.
///
/// Cheap to share: an htmd converter is assembled per call from the stored
/// rules, so nothing here is tied to a thread.
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    options: RenderOptions,
    rules: RuleSet,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new(RenderOptions::default(), &RuleSet::new())
    }
}

impl MarkdownConverter {
    /// Built-in rules for `options`, followed by `caller_rules`.
    #[must_use]
    pub fn new(options: RenderOptions, caller_rules: &RuleSet) -> Self {
        let mut rules = RuleSet::with_defaults(&options);
        rules.extend(caller_rules.iter().cloned());
        Self { options, rules }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Render the content tree (root element included) to raw Markdown.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Render`](super::errors::ConvertError::Render)
    /// if htmd fails.
    pub fn convert(&self, tree: &ContentTree) -> ConvertResult<String> {
        self.convert_html(&tree.outer_html())
    }

    /// Render an HTML string to raw, un-normalized Markdown.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Render`](super::errors::ConvertError::Render)
    /// if htmd fails.
    pub fn convert_html(&self, html: &str) -> ConvertResult<String> {
        let mut builder = htmd::HtmlToMarkdown::builder().options(htmd_options(&self.options));
        for rule in self.rules.iter() {
            let handler = rule.handler();
            builder = builder.add_handler(
                rule.tags().to_vec(),
                move |handlers: &dyn Handlers, element: Element| handler(handlers, element),
            );
        }
        let markdown = builder.build().convert(html)?;
        tracing::debug!(
            html_bytes = html.len(),
            markdown_bytes = markdown.len(),
            rules = self.rules.len(),
            "Rendered markdown"
        );
        Ok(markdown)
    }
}

fn htmd_options(options: &RenderOptions) -> Options {
    Options {
        heading_style: match options.heading_style {
            HeadingStyle::Atx => HtmdHeadingStyle::Atx,
            HeadingStyle::Setext => HtmdHeadingStyle::Setex,
        },
        code_block_style: match options.code_block_style {
            CodeBlockStyle::Fenced => HtmdCodeBlockStyle::Fenced,
            CodeBlockStyle::Indented => HtmdCodeBlockStyle::Indented,
        },
        code_block_fence: match options.code_fence {
            CodeFence::Backticks => CodeBlockFence::Backticks,
            CodeFence::Tildes => CodeBlockFence::Tildes,
        },
        bullet_list_marker: match options.bullet_marker {
            BulletMarker::Dash => BulletListMarker::Dash,
            BulletMarker::Asterisk => BulletListMarker::Asterisk,
        },
        ..Default::default()
    }
}
