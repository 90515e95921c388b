//! Content locator priority and fallbacks

use kodegen_tools_markdown_mirror::ConverterConfig;
use kodegen_tools_markdown_mirror::markdown_converter::{
    Document, default_content_selectors, locate_main_content,
};

mod common;
use common::{convert_default, convert_with};

const PAGE: &str = r#"<html><body>
    <div class="post-content">Post body</div>
    <main>Main body</main>
    <div id="custom">Custom body</div>
</body></html>"#;

#[test]
fn test_main_wins_without_custom_selectors() {
    let doc = Document::parse(PAGE);
    let root = locate_main_content(&doc, default_content_selectors()).expect("content root");
    let md = convert_default(PAGE).markdown;

    assert!(md.contains("Main body"), "got: {md}");
    assert!(!md.contains("Post body"), "got: {md}");
    assert!(!md.contains("Custom body"), "got: {md}");
    assert_ne!(Some(root), doc.body().map(|b| b.id()));
}

#[test]
fn test_custom_selector_beats_main() {
    let config = ConverterConfig::builder()
        .content_selectors(["#custom"])
        .build()
        .expect("valid config");
    let md = convert_with(config, PAGE).markdown;
    assert!(md.contains("Custom body"), "got: {md}");
    assert!(!md.contains("Main body"), "got: {md}");
}

#[test]
fn test_selector_order_not_document_order() {
    let html = r#"<html><body><article>Article body</article><main>Main body</main></body></html>"#;
    let md = convert_default(html).markdown;
    assert!(md.contains("Main body"), "got: {md}");
    assert!(!md.contains("Article body"), "got: {md}");
}

#[test]
fn test_role_main() {
    let html = r#"<html><body><div>Chrome</div><div role="main">Role body</div></body></html>"#;
    let md = convert_default(html).markdown;
    assert!(md.contains("Role body"), "got: {md}");
    assert!(!md.contains("Chrome"), "got: {md}");
}

#[test]
fn test_body_fallback() {
    let html = "<html><body><div>Only div</div><p>Para</p></body></html>";
    let md = convert_default(html).markdown;
    assert!(md.contains("Only div"), "got: {md}");
    assert!(md.contains("Para"), "got: {md}");
}

#[test]
fn test_unmatched_custom_selectors_fall_back_to_body() {
    let config = ConverterConfig::builder()
        .content_selectors(["#missing"])
        .build()
        .expect("valid config");
    let md = convert_with(config, PAGE).markdown;
    assert!(md.contains("Post body"), "got: {md}");
    assert!(md.contains("Main body"), "got: {md}");
}
