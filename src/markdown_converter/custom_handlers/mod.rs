//! Render rules for htmd HTML-to-Markdown conversion
//!
//! htmd's built-in handlers cover the base elements (headings, paragraphs,
//! lists, code, blockquotes, images, links). This module layers named rules
//! on top of them:
//!
//! - GFM extensions: tables, strikethrough, task-list checkboxes
//! - Elements htmd renders poorly: definition lists, `details`, `mark`,
//!   `abbr`, `figure`, `q`, `sub`/`sup`
//! - Emphasis with configurable delimiters
//!
//! Rules are kept in a [`RuleSet`] in registration order. When two rules
//! claim the same tag the later one wins, and re-adding a rule under an
//! existing name replaces it, so caller rules registered last override
//! every built-in.

mod definition_list;
mod details;
mod emphasis;
mod figure;
mod gfm;
mod inline;

use crate::config::RenderOptions;
use htmd::Element;
use htmd::element_handler::{HandlerResult, Handlers};
use markup5ever_rcdom::{Node, NodeData};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Signature shared by every render rule
pub type RuleFn = dyn Fn(&dyn Handlers, Element) -> Option<HandlerResult> + Send + Sync;

/// A named rendering rule for one or more tags.
#[derive(Clone)]
pub struct RenderRule {
    name: String,
    tags: Vec<&'static str>,
    handler: Arc<RuleFn>,
}

impl RenderRule {
    /// Create a rule. `handler` receives htmd's handler context and the
    /// matched element; returning `None` drops the element.
    ///
    /// ```rust
    /// # use kodegen_tools_markdown_mirror::markdown_converter::RenderRule;
    /// # use htmd::element_handler::HandlerResult;
    /// let rule = RenderRule::new("keyboard", vec!["kbd"], |handlers, element| {
    ///     let content = handlers.walk_children(element.node).content;
    ///     Some(HandlerResult::from(format!("<kbd>{}</kbd>", content.trim())))
    /// });
    /// assert_eq!(rule.name(), "keyboard");
    /// ```
    pub fn new<F>(name: impl Into<String>, tags: Vec<&'static str>, handler: F) -> Self
    where
        F: Fn(&dyn Handlers, Element) -> Option<HandlerResult> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            tags,
            handler: Arc::new(handler),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    pub(crate) fn handler(&self) -> Arc<RuleFn> {
        Arc::clone(&self.handler)
    }
}

impl fmt::Debug for RenderRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderRule")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of render rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<RenderRule>,
}

impl RuleSet {
    /// An empty rule set: only htmd's own handlers apply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// GFM extensions followed by the custom element rules.
    #[must_use]
    pub fn with_defaults(options: &RenderOptions) -> Self {
        let mut set = Self::new();
        set.extend(gfm::rules());
        set.extend(emphasis::rules(options));
        set.extend(definition_list::rules());
        set.extend(details::rules());
        set.extend(inline::rules());
        set.extend(figure::rules());
        set
    }

    /// Add a rule after all existing ones.
    ///
    /// A rule with the same name is removed first, so the new one both
    /// replaces it and takes precedence over everything already registered.
    pub fn add(&mut self, rule: RenderRule) {
        self.rules.retain(|existing| existing.name != rule.name);
        self.rules.push(rule);
    }

    pub fn extend(&mut self, rules: impl IntoIterator<Item = RenderRule>) {
        for rule in rules {
            self.add(rule);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RenderRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderRule> {
        self.rules.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(RenderRule::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// === Helper Functions ===

/// Tag name of an element node
pub(crate) fn tag_name(node: &Rc<Node>) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Attribute value of an element node, empty values included
pub(crate) fn node_attr(node: &Rc<Node>, attr: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Attribute value from an htmd element, ignoring blank values
pub(crate) fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.trim().is_empty())
}

/// Element children of a node, in order
pub(crate) fn child_elements(node: &Rc<Node>) -> Vec<Rc<Node>> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// First descendant element (document order) with the given tag
pub(crate) fn find_descendant(node: &Rc<Node>, tag: &str) -> Option<Rc<Node>> {
    for child in node.children.borrow().iter() {
        if tag_name(child) == Some(tag) {
            return Some(Rc::clone(child));
        }
        if let Some(found) = find_descendant(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Concatenated text of a node and all its descendants, comments excluded
pub(crate) fn text_content(node: &Rc<Node>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Rc<Node>, text: &mut String) {
    match &node.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document => {
            for child in node.children.borrow().iter() {
                collect_text(child, text);
            }
        }
        _ => {}
    }
}

/// Tag name of the parent element, if any
pub(crate) fn parent_tag(node: &Rc<Node>) -> Option<String> {
    let parent = node.parent.take();
    node.parent.set(parent.clone());
    let parent = parent?.upgrade()?;
    tag_name(&parent).map(str::to_string)
}

/// Wrap inline content in delimiters, keeping surrounding whitespace
/// outside them. Blank content is returned unchanged.
pub(crate) fn wrap_inline(content: &str, open: &str, close: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return content.to_string();
    }
    let leading = &content[..content.len() - content.trim_start().len()];
    let trailing = &content[content.trim_end().len()..];
    format!("{leading}{open}{trimmed}{close}{trailing}")
}
