//! Configuration module for markdown conversion
//!
//! This module provides the `ConverterConfig` struct, its fluent builder and
//! a serde-loadable file form for the command-line tool.

// Sub-modules
pub mod builder;
pub mod file;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::ConverterConfigBuilder;
pub use file::ConfigFile;
pub use types::{
    BulletMarker, CodeBlockStyle, CodeFence, ContentSignal, ConverterConfig, HeadingStyle,
    RenderOptions,
};
