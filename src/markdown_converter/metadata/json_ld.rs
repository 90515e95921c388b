//! JSON-LD extraction from `<script type="application/ld+json">` blocks.

use super::frontmatter::{build_frontmatter, render_frontmatter};
use crate::markdown_converter::document::Document;
use crate::utils::constants::{JSON_LD_SCRIPT_SELECTOR, PAGE_TYPES};
use scraper::Selector;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(JSON_LD_SCRIPT_SELECTOR)
        .expect("BUG: hardcoded JSON-LD script selector is invalid")
});

/// One structured-data record: an arbitrary JSON object.
pub type JsonLdRecord = Map<String, Value>;

/// Everything recovered from a document's JSON-LD blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonLdExtraction {
    /// All records in document order, with arrays and `@graph` containers flattened
    pub records: Vec<JsonLdRecord>,
    /// Rendered frontmatter block, or empty when nothing useful was found
    pub frontmatter: String,
}

/// Extract every JSON-LD record from `document` and build frontmatter from
/// the primary one.
///
/// A block that fails to parse is skipped; it never fails the extraction.
#[must_use]
pub fn extract_json_ld(document: &Document) -> JsonLdExtraction {
    let mut records = Vec::new();

    for script in document.select(&JSON_LD_SELECTOR) {
        let text: String = script.text().collect();
        if text.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => flatten_into(value, &mut records),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed JSON-LD block");
            }
        }
    }

    if records.is_empty() {
        return JsonLdExtraction::default();
    }

    let frontmatter = select_primary_record(&records)
        .map(build_frontmatter)
        .filter(|fields| !fields.is_empty())
        .and_then(|fields| render_frontmatter(&fields))
        .unwrap_or_default();

    tracing::debug!(
        records = records.len(),
        has_frontmatter = !frontmatter.is_empty(),
        "Extracted JSON-LD"
    );

    JsonLdExtraction {
        records,
        frontmatter,
    }
}

/// Splice one parsed block into `records`.
///
/// Arrays contribute every entry, an object with an `@graph` array
/// contributes that array, any other object is a single record. Only
/// objects become records.
fn flatten_into(value: Value, records: &mut Vec<JsonLdRecord>) {
    let entries = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("@graph") {
            Some(Value::Array(graph)) => graph,
            Some(other) => {
                object.insert("@graph".to_string(), other);
                vec![Value::Object(object)]
            }
            None => vec![Value::Object(object)],
        },
        other => {
            tracing::debug!(kind = json_kind(&other), "Skipping non-object JSON-LD block");
            return;
        }
    };

    records.extend(entries.into_iter().filter_map(|entry| match entry {
        Value::Object(object) => Some(object),
        _ => None,
    }));
}

/// The record that best describes the page itself.
///
/// The first record whose `@type` (a string, or an array holding strings)
/// names a page type wins; otherwise the first record.
#[must_use]
pub fn select_primary_record(records: &[JsonLdRecord]) -> Option<&JsonLdRecord> {
    records
        .iter()
        .find(|record| is_page_type(record.get("@type")))
        .or_else(|| records.first())
}

fn is_page_type(type_value: Option<&Value>) -> bool {
    match type_value {
        Some(Value::String(t)) => PAGE_TYPES.contains(&t.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| PAGE_TYPES.contains(&t)),
        _ => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(html: &str) -> JsonLdExtraction {
        extract_json_ld(&Document::parse(html))
    }

    fn script(json: &str) -> String {
        page(&[json])
    }

    fn page(blocks: &[&str]) -> String {
        let scripts: String = blocks
            .iter()
            .map(|json| format!(r#"<script type="application/ld+json">{json}</script>"#))
            .collect();
        format!("<html><head>{scripts}</head><body></body></html>")
    }

    #[test]
    fn test_single_article() {
        let result = extract(&script(r#"{"@type":"Article","headline":"Test"}"#));
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0]["@type"], json!("Article"));
        assert!(result.frontmatter.contains("title: Test"));
        assert!(result.frontmatter.contains("type: Article"));
    }

    #[test]
    fn test_graph_flattened() {
        let result = extract(&script(
            r#"{"@context":"https://schema.org","@graph":[{"@type":"WebSite","name":"Site"},{"@type":"WebPage","name":"Page"}]}"#,
        ));
        assert_eq!(result.records.len(), 2);
        assert!(result.frontmatter.contains("title: Page"));
    }

    #[test]
    fn test_array_spliced() {
        let result = extract(&script(r#"[{"@type":"Person"},{"@type":"Product","name":"Widget"}]"#));
        assert_eq!(result.records.len(), 2);
        assert!(result.frontmatter.contains("type: Product"));
    }

    #[test]
    fn test_multiple_blocks_in_order() {
        let html = page(&[
            r#"{"@type":"Organization","name":"Org"}"#,
            r#"{"@type":"BlogPosting","headline":"Post"}"#,
        ]);
        let result = extract(&html);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0]["@type"], json!("Organization"));
    }

    #[test]
    fn test_malformed_block_skipped() {
        let html = page(&["{ not json", r#"{"@type":"Article","headline":"Ok"}"#]);
        let result = extract(&html);
        assert_eq!(result.records.len(), 1);
        assert!(result.frontmatter.contains("title: Ok"));
    }

    #[test]
    fn test_no_blocks_means_no_frontmatter() {
        let result = extract("<html><body><p>x</p></body></html>");
        assert!(result.records.is_empty());
        assert!(result.frontmatter.is_empty());
    }

    #[test]
    fn test_primary_falls_back_to_first_record() {
        let records: Vec<JsonLdRecord> = vec![
            json!({"@type": "Person", "name": "A"}),
            json!({"@type": "Organization", "name": "B"}),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .collect();
        let primary = select_primary_record(&records).expect("primary");
        assert_eq!(primary["name"], json!("A"));
    }

    #[test]
    fn test_type_array_matches_page_type() {
        let records: Vec<JsonLdRecord> = vec![
            json!({"@type": "Person"}),
            json!({"@type": ["Thing", "NewsArticle"], "headline": "News"}),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .collect();
        let primary = select_primary_record(&records).expect("primary");
        assert_eq!(primary["headline"], json!("News"));
    }
}
