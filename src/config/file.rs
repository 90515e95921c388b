//! File form of the converter configuration.
//!
//! Mirrors the data options of [`ConverterConfig`] (render rules and token
//! counters are code, not data) with camelCase keys:
//!
//! ```json
//! {
//!   "contentSelectors": ["#docs"],
//!   "excludeSelectors": [".ad"],
//!   "baseUrl": "https://example.com",
//!   "maxContentSize": 2097152,
//!   "renderOptions": { "bulletMarker": "asterisk" },
//!   "contentSignal": "ai-input"
//! }
//! ```
//!
//! [`ConverterConfig`]: super::ConverterConfig

use super::builder::ConverterConfigBuilder;
use super::types::{ContentSignal, ConverterConfig, RenderOptions};
use crate::markdown_converter::errors::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigFile {
    pub content_selectors: Option<Vec<String>>,
    pub exclude_selectors: Vec<String>,
    pub include_selectors: Vec<String>,
    pub extract_json_ld: Option<bool>,
    pub render_options: Option<RenderOptions>,
    pub base_url: Option<String>,
    pub max_content_size: Option<usize>,
    pub content_signal: Option<ContentSignal>,
}

impl ConfigFile {
    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfigFile`] for malformed JSON or
    /// values of the wrong type (an unknown content signal, for example).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Seed a builder with these settings. Unset values keep the defaults.
    #[must_use]
    pub fn into_builder(self) -> ConverterConfigBuilder {
        let mut builder = ConverterConfig::builder()
            .exclude_selectors(self.exclude_selectors)
            .include_selectors(self.include_selectors);

        if let Some(selectors) = self.content_selectors {
            builder = builder.content_selectors(selectors);
        }
        if let Some(extract) = self.extract_json_ld {
            builder = builder.extract_json_ld(extract);
        }
        if let Some(options) = self.render_options {
            builder = builder.render_options(options);
        }
        if let Some(url) = self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(size) = self.max_content_size {
            builder = builder.max_content_size(size);
        }
        if let Some(signal) = self.content_signal {
            builder = builder.content_signal(signal);
        }
        builder
    }
}
