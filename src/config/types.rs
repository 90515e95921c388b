//! Core configuration types for markdown conversion
//!
//! This module contains the `ConverterConfig` struct and the renderer and
//! content-signal option types it carries.

use crate::markdown_converter::custom_handlers::RuleSet;
use crate::markdown_converter::errors::ConfigError;
use crate::markdown_converter::html_preprocessing::{FilterSelectors, default_content_selectors};
use crate::markdown_converter::token_counter::TokenCounter;
use crate::utils::DEFAULT_MAX_CONTENT_SIZE;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use url::Url;

/// Immutable conversion settings.
///
/// Built once through [`ConverterConfig::builder`], then shared freely:
/// nothing in a conversion mutates it.
#[derive(Clone)]
pub struct ConverterConfig {
    /// Caller-supplied content selectors, `None` for the built-in list
    pub(crate) content_selectors: Option<Vec<String>>,
    /// Compiled locator priority list (defaults when none were supplied)
    pub(crate) content_selectors_compiled: Vec<Selector>,
    pub(crate) exclude_selectors: Vec<String>,
    pub(crate) include_selectors: Vec<String>,
    /// Compiled exclude/include selectors for the content filter
    pub(crate) filter_selectors: FilterSelectors,
    pub(crate) extract_json_ld: bool,
    pub(crate) render_options: RenderOptions,
    /// Caller rules, registered after every built-in rule
    pub(crate) render_rules: RuleSet,
    pub(crate) base_url: Option<Url>,
    pub(crate) max_content_size: usize,
    /// Passed through for the response layer; conversion ignores it
    pub(crate) content_signal: Option<ContentSignal>,
    pub(crate) token_counter: Option<Arc<dyn TokenCounter>>,
}

impl fmt::Debug for ConverterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterConfig")
            .field("content_selectors", &self.content_selectors)
            .field("exclude_selectors", &self.exclude_selectors)
            .field("include_selectors", &self.include_selectors)
            .field("extract_json_ld", &self.extract_json_ld)
            .field("render_options", &self.render_options)
            .field("render_rules", &self.render_rules)
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("max_content_size", &self.max_content_size)
            .field("content_signal", &self.content_signal)
            .field("custom_token_counter", &self.token_counter.is_some())
            .finish()
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            content_selectors: None,
            content_selectors_compiled: default_content_selectors().to_vec(),
            exclude_selectors: Vec::new(),
            include_selectors: Vec::new(),
            filter_selectors: FilterSelectors::default(),
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

/// Heading syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `# Heading`
    #[default]
    Atx,
    /// Underlined with `===` / `---` (levels 1 and 2 only)
    Setext,
}

/// Code block syntax
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockStyle {
    #[default]
    Fenced,
    Indented,
}

/// Fence characters for fenced code blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeFence {
    #[default]
    Backticks,
    Tildes,
}

/// Marker for unordered list items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletMarker {
    /// `- item`
    #[default]
    Dash,
    /// `* item`
    Asterisk,
}

/// Base renderer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub heading_style: HeadingStyle,
    pub code_block_style: CodeBlockStyle,
    pub code_fence: CodeFence,
    pub bullet_marker: BulletMarker,
    pub em_delimiter: String,
    pub strong_delimiter: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Atx,
            code_block_style: CodeBlockStyle::Fenced,
            code_fence: CodeFence::Backticks,
            bullet_marker: BulletMarker::Dash,
            em_delimiter: "*".to_string(),
            strong_delimiter: "**".to_string(),
        }
    }
}

/// Content usage signal advertised alongside the markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentSignal {
    AiTrain,
    Search,
    AiInput,
}

impl ContentSignal {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentSignal::AiTrain => "ai-train",
            ContentSignal::Search => "search",
            ContentSignal::AiInput => "ai-input",
        }
    }
}

impl fmt::Display for ContentSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentSignal {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ai-train" => Ok(ContentSignal::AiTrain),
            "search" => Ok(ContentSignal::Search),
            "ai-input" => Ok(ContentSignal::AiInput),
            other => Err(ConfigError::UnknownContentSignal(other.to_string())),
        }
    }
}
