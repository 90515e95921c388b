//! Getter methods for `ConverterConfig`

use super::types::{ContentSignal, ConverterConfig, RenderOptions};
use crate::markdown_converter::custom_handlers::RuleSet;
use crate::markdown_converter::html_preprocessing::FilterSelectors;
use crate::markdown_converter::token_counter::TokenCounter;
use scraper::Selector;
use url::Url;

impl ConverterConfig {
    /// Caller-supplied content selectors, `None` when the defaults are used
    #[must_use]
    pub fn content_selectors(&self) -> Option<&[String]> {
        self.content_selectors.as_deref()
    }

    #[must_use]
    pub fn exclude_selectors(&self) -> &[String] {
        &self.exclude_selectors
    }

    #[must_use]
    pub fn include_selectors(&self) -> &[String] {
        &self.include_selectors
    }

    #[must_use]
    pub fn extract_json_ld(&self) -> bool {
        self.extract_json_ld
    }

    #[must_use]
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    #[must_use]
    pub fn render_rules(&self) -> &RuleSet {
        &self.render_rules
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    #[must_use]
    pub fn max_content_size(&self) -> usize {
        self.max_content_size
    }

    #[must_use]
    pub fn content_signal(&self) -> Option<ContentSignal> {
        self.content_signal
    }

    #[must_use]
    pub fn token_counter(&self) -> Option<&dyn TokenCounter> {
        self.token_counter.as_deref()
    }

    pub(crate) fn locator_selectors(&self) -> &[Selector] {
        &self.content_selectors_compiled
    }

    pub(crate) fn filter_selectors(&self) -> &FilterSelectors {
        &self.filter_selectors
    }
}
