//! Shared helpers for the markdown mirror integration tests

use kodegen_tools_markdown_mirror::{ConversionResult, ConverterConfig, HtmlToMarkdown};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Output is captured by the test harness; set `RUST_LOG=debug` to see the
/// pipeline stages of a failing test.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Creates a test HTML document with the given title and body markup
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Convert with the default configuration, panicking on error
#[allow(dead_code)]
pub fn convert_default(html: &str) -> ConversionResult {
    init_tracing();
    HtmlToMarkdown::default()
        .convert(html)
        .expect("conversion should succeed")
}

/// Convert with a custom configuration, panicking on error
#[allow(dead_code)]
pub fn convert_with(config: ConverterConfig, html: &str) -> ConversionResult {
    init_tracing();
    HtmlToMarkdown::new(config)
        .convert(html)
        .expect("conversion should succeed")
}
