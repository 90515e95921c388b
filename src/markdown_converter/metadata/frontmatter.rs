//! Frontmatter synthesis from a primary JSON-LD record.
//!
//! Only a fixed set of page-describing fields is copied. Rendering follows
//! the usual `---` delimited YAML block followed by a blank line.

use super::json_ld::JsonLdRecord;
use serde_json::Value;

/// (source key, destination key) pairs, in priority order.
/// The first source present for a destination wins.
const FIELD_MAP: &[(&str, &str)] = &[
    ("@type", "type"),
    ("name", "title"),
    ("headline", "title"),
    ("description", "description"),
    ("datePublished", "datePublished"),
    ("dateModified", "dateModified"),
    ("url", "url"),
    ("image", "image"),
];

/// Ordered frontmatter fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: Vec<(&'static str, Value)>,
}

impl Frontmatter {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }

    fn insert_if_absent(&mut self, key: &'static str, value: Value) {
        if self.get(key).is_none() {
            self.fields.push((key, value));
        }
    }
}

/// Build frontmatter fields from `record`.
///
/// Image objects collapse to their `url`. An `author` object collapses to
/// its `name`, then its `url`, then stays whole.
#[must_use]
pub fn build_frontmatter(record: &JsonLdRecord) -> Frontmatter {
    let mut frontmatter = Frontmatter::default();

    for &(source, destination) in FIELD_MAP {
        let Some(value) = record.get(source) else {
            continue;
        };
        let value = if destination == "image" {
            collapse_image(value)
        } else {
            value.clone()
        };
        frontmatter.insert_if_absent(destination, value);
    }

    if let Some(author) = record.get("author").filter(|a| is_truthy(a)) {
        frontmatter.insert_if_absent("author", collapse_author(author));
    }

    frontmatter
}

/// Serialize frontmatter as a `---` delimited YAML block plus a blank line.
///
/// Returns `None` for empty frontmatter or if YAML serialization fails.
#[must_use]
pub fn render_frontmatter(frontmatter: &Frontmatter) -> Option<String> {
    if frontmatter.is_empty() {
        return None;
    }

    let mut mapping = serde_yaml::Mapping::new();
    for (key, value) in &frontmatter.fields {
        match serde_yaml::to_value(value) {
            Ok(yaml) => {
                mapping.insert(serde_yaml::Value::String((*key).to_string()), yaml);
            }
            Err(e) => {
                tracing::debug!(key, error = %e, "Skipping frontmatter field");
            }
        }
    }

    match serde_yaml::to_string(&serde_yaml::Value::Mapping(mapping)) {
        Ok(yaml) => Some(format!("---\n{}\n---\n\n", yaml.trim())),
        Err(e) => {
            tracing::warn!(error = %e, "Frontmatter serialization failed");
            None
        }
    }
}

fn collapse_image(value: &Value) -> Value {
    match value {
        Value::Object(image) => match image.get("url") {
            Some(url) if is_truthy(url) => url.clone(),
            _ => value.clone(),
        },
        _ => value.clone(),
    }
}

fn collapse_author(value: &Value) -> Value {
    match value {
        Value::Object(author) => author
            .get("name")
            .filter(|v| !v.is_null())
            .or_else(|| author.get("url").filter(|v| !v.is_null()))
            .unwrap_or(value)
            .clone(),
        _ => value.clone(),
    }
}

/// JSON-LD authors routinely write `""`, `0` or `false` for "unknown".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
