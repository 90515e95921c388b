//! Fluent setters for `ConverterConfigBuilder`

use super::builder::ConverterConfigBuilder;
use super::types::{ContentSignal, RenderOptions};
use crate::markdown_converter::custom_handlers::RenderRule;
use crate::markdown_converter::token_counter::TokenCounter;
use std::sync::Arc;

impl ConverterConfigBuilder {
    /// Replace the content locator's priority list.
    ///
    /// The first selector matching anything in the document wins. An empty
    /// list skips straight to the `<body>` fallback.
    #[must_use]
    pub fn content_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_selectors = Some(selectors.into_iter().map(Into::into).collect());
        self
    }

    /// Additional selectors to remove from the content, on top of the defaults
    #[must_use]
    pub fn exclude_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Selectors whose matches are always kept, overriding every exclusion
    /// (default ones included).
    #[must_use]
    pub fn include_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn extract_json_ld(mut self, extract: bool) -> Self {
        self.extract_json_ld = extract;
        self
    }

    #[must_use]
    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Register a custom render rule.
    ///
    /// Rules are applied after every built-in rule, so a rule for `mark`
    /// replaces the built-in highlight rendering. Adding a rule under a name
    /// already used replaces that rule.
    #[must_use]
    pub fn render_rule(mut self, rule: RenderRule) -> Self {
        self.render_rules.add(rule);
        self
    }

    /// Base URL for resolving relative `href` and `src` values
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Reject inputs larger than `bytes` before parsing
    #[must_use]
    pub fn max_content_size(mut self, bytes: usize) -> Self {
        self.max_content_size = bytes;
        self
    }

    #[must_use]
    pub fn content_signal(mut self, signal: ContentSignal) -> Self {
        self.content_signal = Some(signal);
        self
    }

    /// Replace the heuristic token estimate.
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_markdown_mirror::config::ConverterConfig;
    /// # use std::sync::Arc;
    /// let config = ConverterConfig::builder()
    ///     .token_counter(Arc::new(|text: &str| text.len() / 4))
    ///     .build();
    /// assert!(config.is_ok());
    /// ```
    #[must_use]
    pub fn token_counter(mut self, counter: Arc<dyn TokenCounter>) -> Self {
        self.token_counter = Some(counter);
        self
    }
}
