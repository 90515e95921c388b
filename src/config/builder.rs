//! Fluent builder for `ConverterConfig`
//!
//! Selectors and the base URL are kept as strings until [`build`], which
//! compiles them once so conversions never re-parse configuration.
//!
//! [`build`]: ConverterConfigBuilder::build

use crate::markdown_converter::custom_handlers::RuleSet;
use crate::markdown_converter::errors::ConfigError;
use crate::markdown_converter::html_preprocessing::{FilterSelectors, default_content_selectors};
use crate::markdown_converter::token_counter::TokenCounter;
use crate::utils::DEFAULT_MAX_CONTENT_SIZE;
use scraper::Selector;
use std::sync::Arc;
use url::Url;

use super::types::{ContentSignal, ConverterConfig, RenderOptions};

/// Compile a caller-supplied CSS selector
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSelector`] if the selector does not parse.
fn compile_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn compile_selectors(selectors: &[String]) -> Result<Vec<Selector>, ConfigError> {
    selectors.iter().map(|s| compile_selector(s)).collect()
}

pub struct ConverterConfigBuilder {
    pub(crate) content_selectors: Option<Vec<String>>,
    pub(crate) exclude_selectors: Vec<String>,
    pub(crate) include_selectors: Vec<String>,
    pub(crate) extract_json_ld: bool,
    pub(crate) render_options: RenderOptions,
    pub(crate) render_rules: RuleSet,
    pub(crate) base_url: Option<String>,
    pub(crate) max_content_size: usize,
    pub(crate) content_signal: Option<ContentSignal>,
    pub(crate) token_counter: Option<Arc<dyn TokenCounter>>,
}

impl Default for ConverterConfigBuilder {
    fn default() -> Self {
        Self {
            content_selectors: None,
            exclude_selectors: Vec::new(),
            include_selectors: Vec::new(),
            extract_json_ld: true,
            render_options: RenderOptions::default(),
            render_rules: RuleSet::new(),
            base_url: None,
            max_content_size: DEFAULT_MAX_CONTENT_SIZE,
            content_signal: None,
            token_counter: None,
        }
    }
}

impl ConverterConfig {
    /// Create a builder for configuring a `ConverterConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder::default()
    }
}

impl ConverterConfigBuilder {
    /// Validate and compile the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidSelector`] for any selector that does not parse
    /// - [`ConfigError::InvalidBaseUrl`] if the base URL is not an absolute URL
    /// - [`ConfigError::InvalidMaxContentSize`] for a zero size limit
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_markdown_mirror::config::ConverterConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ConverterConfig::builder()
    ///     .content_selectors(["#docs"])
    ///     .exclude_selectors([".ad"])
    ///     .base_url("https://example.com")
    ///     .build()?;
    /// assert_eq!(config.base_url().map(|u| u.as_str()), Some("https://example.com/"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<ConverterConfig, ConfigError> {
        if self.max_content_size == 0 {
            return Err(ConfigError::InvalidMaxContentSize);
        }

        let content_selectors_compiled = match &self.content_selectors {
            Some(selectors) => compile_selectors(selectors)?,
            None => default_content_selectors().to_vec(),
        };

        let filter_selectors = FilterSelectors {
            exclude: compile_selectors(&self.exclude_selectors)?,
            include: compile_selectors(&self.include_selectors)?,
        };

        let base_url = self
            .base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
                    url: raw.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;

        Ok(ConverterConfig {
            content_selectors: self.content_selectors,
            content_selectors_compiled,
            exclude_selectors: self.exclude_selectors,
            include_selectors: self.include_selectors,
            filter_selectors,
            extract_json_ld: self.extract_json_ld,
            render_options: self.render_options,
            render_rules: self.render_rules,
            base_url,
            max_content_size: self.max_content_size,
            content_signal: self.content_signal,
            token_counter: self.token_counter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::builder().build().expect("default config");
        assert!(config.extract_json_ld());
        assert_eq!(config.max_content_size(), DEFAULT_MAX_CONTENT_SIZE);
        assert!(config.base_url().is_none());
        assert_eq!(config.content_selectors_compiled.len(), 9);
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let err = ConverterConfig::builder()
            .exclude_selectors([">>>"])
            .build()
            .expect_err("selector should fail");
        assert!(matches!(err, ConfigError::InvalidSelector { ref selector, .. } if selector == ">>>"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ConverterConfig::builder()
            .base_url("/relative/only")
            .build()
            .expect_err("relative base should fail");
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_zero_max_size_rejected() {
        let err = ConverterConfig::builder()
            .max_content_size(0)
            .build()
            .expect_err("zero size should fail");
        assert!(matches!(err, ConfigError::InvalidMaxContentSize));
    }

    #[test]
    fn test_empty_content_selectors_kept_empty() {
        let config = ConverterConfig::builder()
            .content_selectors(Vec::<String>::new())
            .build()
            .expect("config");
        assert!(config.content_selectors_compiled.is_empty());
    }
}
