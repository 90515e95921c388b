//! HTML preprocessing stages that run before markdown rendering.
//!
//! - Main content location via prioritized CSS selectors (read-only)
//! - Noise filtering on the cloned content tree
//! - Relative link and image reference resolution on the cloned tree

pub mod html_cleaning;
pub mod link_resolution;
pub mod main_content_extraction;

pub use html_cleaning::{FilterSelectors, filter_content};
pub use link_resolution::resolve_urls;
pub use main_content_extraction::{default_content_selectors, locate_main_content};
