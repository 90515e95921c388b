//! Whitespace normalization for rendered markdown.
//!
//! Trailing horizontal whitespace is stripped from every line, runs of three
//! or more newlines collapse to a single blank line, and the whole text is
//! trimmed and terminated by exactly one newline.

use regex::Regex;
use std::sync::LazyLock;

static TRAILING_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)[ \t]+$").expect("BUG: hardcoded trailing whitespace regex is invalid")
});

static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("BUG: hardcoded blank line regex is invalid")
});

/// Normalize whitespace in rendered markdown.
///
/// Stripping runs before collapsing: a line holding only spaces would
/// otherwise survive the collapse and turn into an extra blank line on the
/// next pass. With this order the function is idempotent.
///
/// ```rust
/// # use kodegen_tools_markdown_mirror::markdown_converter::normalize_whitespace;
/// assert_eq!(normalize_whitespace("\n\n# Title  \n\n\n\ntext\t\n"), "# Title\n\ntext\n");
/// ```
#[must_use]
pub fn normalize_whitespace(markdown: &str) -> String {
    let stripped = TRAILING_WHITESPACE.replace_all(markdown, "");
    let collapsed = BLANK_LINE_RUNS.replace_all(&stripped, "\n\n");
    let mut result = collapsed.trim().to_string();
    result.push('\n');
    result
}
