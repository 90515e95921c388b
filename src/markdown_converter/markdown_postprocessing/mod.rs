//! Markdown post-processing applied to raw renderer output.
//!
//! The renderer is free to emit ragged whitespace; everything here turns it
//! into the canonical shape callers see.

mod whitespace_normalization;

pub use whitespace_normalization::normalize_whitespace;
