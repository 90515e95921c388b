//! Error types for conversion and configuration
//!
//! Only whole-conversion failures live here. Per-item problems (a malformed
//! JSON-LD block, an unresolvable `href`) are skipped where they occur and
//! never become errors.

use thiserror::Error;

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that abort a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input is larger than the configured maximum. Nothing was parsed.
    #[error("Content size {actual} exceeds maximum {max} bytes")]
    SizeExceeded { actual: usize, max: usize },

    /// The Markdown engine failed while serializing the content tree
    #[error("Markdown rendering failed: {0}")]
    Render(#[from] std::io::Error),
}

impl ConvertError {
    /// Whether the input was rejected by the size guard
    #[must_use]
    pub fn is_size_exceeded(&self) -> bool {
        matches!(self, ConvertError::SizeExceeded { .. })
    }
}

/// Errors raised while building a [`crate::config::ConverterConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A caller-supplied CSS selector does not parse
    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// The base URL used for link resolution is not an absolute URL
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// A zero maximum would reject every document
    #[error("max_content_size must be greater than zero")]
    InvalidMaxContentSize,

    /// Unknown content signal value
    #[error("Unknown content signal '{0}' (expected ai-train, search or ai-input)")]
    UnknownContentSignal(String),

    /// A configuration file could not be parsed
    #[error("Invalid config file: {0}")]
    InvalidConfigFile(#[from] serde_json::Error),
}
