//! Structured metadata extraction.
//!
//! JSON-LD blocks are read from the original, unfiltered document (they are
//! `<script>` elements and would not survive filtering) and the most
//! page-like record is condensed into a YAML frontmatter block.

pub mod frontmatter;
pub mod json_ld;

pub use frontmatter::{build_frontmatter, render_frontmatter};
pub use json_ld::{JsonLdExtraction, JsonLdRecord, extract_json_ld, select_primary_record};
