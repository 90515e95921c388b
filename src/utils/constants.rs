//! Shared configuration constants for the markdown mirror
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default maximum HTML input size: 1 MiB
///
/// Inputs larger than this are rejected before parsing. Callers converting
/// very large documents can raise it via `max_content_size`.
pub const DEFAULT_MAX_CONTENT_SIZE: usize = 1_048_576;

/// Priority-ordered selectors for locating the main content element.
///
/// Structural-semantic containers come first, generic class names last.
/// The first selector that matches anything wins.
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role=\"main\"]",
    "#content",
    "#main-content",
    ".main-content",
    ".post-content",
    ".entry-content",
    ".article-content",
];

/// Tags that never carry page content and are always removed
/// (unless explicitly included).
pub const DEFAULT_EXCLUDE_TAGS: &[&str] = &[
    "nav", "footer", "header", "form", "script", "style", "noscript", "iframe", "svg", "canvas",
    "template",
];

/// Selectors for hidden, skipped or interactive elements that are removed by default.
pub const DEFAULT_EXCLUDE_SELECTORS: &[&str] = &[
    "[data-md-skip]",
    "[aria-hidden=\"true\"]",
    ".sr-only",
    ".visually-hidden",
    "button",
    "input",
    "select",
    "textarea",
];

/// Images whose declared width AND height are both below this are icons.
pub const ICON_MAX_DIMENSION: u32 = 50;

/// JSON-LD `@type` values that describe the page itself.
///
/// The first record carrying one of these types feeds the frontmatter.
pub const PAGE_TYPES: &[&str] = &[
    "WebPage",
    "Article",
    "BlogPosting",
    "NewsArticle",
    "Product",
    "FAQPage",
    "HowTo",
];

/// MIME type marker of embedded structured-data blocks.
pub const JSON_LD_SCRIPT_SELECTOR: &str = "script[type=\"application/ld+json\"]";

/// Media type of the produced Markdown, for the response layer.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Words-to-tokens multiplier used by the heuristic estimator.
pub const TOKENS_PER_WORD: f64 = 1.33;

/// Extra tokens per word inside fenced code blocks.
pub const CODE_BLOCK_OVERHEAD: f64 = 0.3;
