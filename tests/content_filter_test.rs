//! Content filter behaviour through the public pipeline

use kodegen_tools_markdown_mirror::ConverterConfig;

mod common;
use common::{convert_default, convert_with, create_test_html};

fn page(body: &str) -> String {
    create_test_html("Filter", &format!("<main>{body}</main>"))
}

#[test]
fn test_include_overrides_default_exclude() {
    let html = page(r#"<p>Body</p><nav class="toc">Table of contents</nav><nav>Menu</nav>"#);
    let config = ConverterConfig::builder()
        .include_selectors([".toc"])
        .build()
        .expect("valid config");

    let md = convert_with(config, &html).markdown;
    assert!(md.contains("Table of contents"), "got: {md}");
    assert!(!md.contains("Menu"), "got: {md}");
}

#[test]
fn test_include_overrides_caller_exclude() {
    let html = page(r#"<p class="note keep">Kept</p><p class="note">Dropped</p>"#);
    let config = ConverterConfig::builder()
        .exclude_selectors([".note"])
        .include_selectors([".keep"])
        .build()
        .expect("valid config");

    let md = convert_with(config, &html).markdown;
    assert!(md.contains("Kept"), "got: {md}");
    assert!(!md.contains("Dropped"), "got: {md}");
}

#[test]
fn test_icon_images() {
    let html = page(
        r#"<img src="icon.png" width="16" height="16" alt="i">
           <img src="hero.png" width="800" height="600" alt="Hero">
           <img src="unknown.png" alt="Unknown">
           <img src="wide.png" width="16" height="600" alt="Wide">
           <img src="px.png" width="24px" height="24px" alt="Px">"#,
    );

    let md = convert_default(&html).markdown;
    assert!(!md.contains("icon.png"), "got: {md}");
    assert!(md.contains("![Hero](hero.png)"), "got: {md}");
    assert!(md.contains("![Unknown](unknown.png)"), "size unknown is not an icon: {md}");
    assert!(md.contains("![Wide](wide.png)"), "got: {md}");
    assert!(!md.contains("px.png"), "got: {md}");
}

#[test]
fn test_hidden_and_interactive_elements() {
    let html = page(
        r#"<p>Visible</p>
           <p class="sr-only">Screen reader</p>
           <p class="visually-hidden">Also hidden</p>
           <select><option>Choice</option></select>
           <textarea>Typed</textarea>
           <svg><text>Vector</text></svg>"#,
    );

    let md = convert_default(&html).markdown;
    assert!(md.contains("Visible"), "got: {md}");
    for leaked in ["Screen reader", "Also hidden", "Choice", "Typed", "Vector"] {
        assert!(!md.contains(leaked), "{leaked} leaked: {md}");
    }
}

#[test]
fn test_content_root_survives_its_own_exclusion() {
    let html = create_test_html("Root", r#"<div id="docs" class="ad"><p>Docs body</p></div>"#);
    let config = ConverterConfig::builder()
        .content_selectors(["#docs"])
        .exclude_selectors([".ad"])
        .build()
        .expect("valid config");

    let md = convert_with(config, &html).markdown;
    assert!(md.contains("Docs body"), "got: {md}");
}

#[test]
fn test_nested_exclusions() {
    let html = page("<footer><nav><a href=\"/x\">Deep</a></nav></footer><p>After</p>");
    let md = convert_default(&html).markdown;
    assert!(!md.contains("Deep"), "got: {md}");
    assert!(md.contains("After"), "got: {md}");
}
