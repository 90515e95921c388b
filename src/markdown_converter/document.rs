//! Parsed documents and the owned content tree the pipeline mutates.
//!
//! [`Document`] is the read-only parse of the input. Metadata extraction,
//! title lookup and content location query it through `&self` only.
//!
//! [`ContentTree`] is a deep clone of the document scoped to the located
//! content root. Filtering, link resolution and rendering accept nothing
//! else, so the original parse can never be mutated before metadata has
//! been read from it.

use ego_tree::NodeId;
use ego_tree::iter::Edge;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("BUG: hardcoded CSS selector 'title' is invalid")
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "xmp", "iframe"];

/// A parsed HTML document. Never mutated after parsing.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document. html5ever recovers from malformed markup,
    /// so parsing never fails.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// First element matching `selector`, in document order.
    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a, 'b>(
        &'a self,
        selector: &'b Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> {
        self.html.select(selector)
    }

    /// The `<body>` element.
    ///
    /// Looks at the children of the root `<html>` element first and only
    /// falls back to a selector query when no direct body child exists.
    #[must_use]
    pub fn body(&self) -> Option<ElementRef<'_>> {
        self.html
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "body")
            .or_else(|| self.select_first(&BODY_SELECTOR))
    }

    /// Text of the first `<title>`, trimmed. `None` when absent or blank.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let title = self.select_first(&TITLE_SELECTOR)?;
        let text = title.text().collect::<String>();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Deep-clone the document and scope the clone to the element `root`.
    ///
    /// Returns `None` if `root` is not an element of this document.
    #[must_use]
    pub fn content_tree(&self, root: NodeId) -> Option<ContentTree> {
        let node = self.html.tree.get(root)?;
        ElementRef::wrap(node)?;
        Some(ContentTree {
            html: self.html.clone(),
            root,
            attr_overrides: HashMap::new(),
        })
    }
}

/// Owned, mutable copy of the content subtree.
///
/// Removal detaches nodes from the cloned tree. Attribute rewrites are kept
/// as overrides and applied when the tree is serialized.
#[derive(Debug, Clone)]
pub struct ContentTree {
    html: Html,
    root: NodeId,
    attr_overrides: HashMap<NodeId, Vec<(&'static str, String)>>,
}

impl ContentTree {
    /// Id of the content root inside the cloned tree
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// The content root element
    #[must_use]
    pub fn root(&self) -> Option<ElementRef<'_>> {
        self.html.tree.get(self.root).and_then(ElementRef::wrap)
    }

    /// Ids of all descendants of the root (root excluded) matching `selector`,
    /// in document order.
    #[must_use]
    pub fn select_ids(&self, selector: &Selector) -> Vec<NodeId> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        root.select(selector)
            .map(|el| el.id())
            .filter(|id| *id != self.root)
            .collect()
    }

    /// Element with the given id, if it is still part of the tree
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    /// Current value of an attribute, honoring rewrites.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<String> {
        if let Some(value) = self
            .attr_overrides
            .get(&id)
            .and_then(|attrs| attrs.iter().find(|(n, _)| *n == name))
        {
            return Some(value.1.clone());
        }
        self.element(id)
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    /// Rewrite an attribute value. The element keeps its attribute order.
    pub fn set_attr(&mut self, id: NodeId, name: &'static str, value: String) {
        let attrs = self.attr_overrides.entry(id).or_default();
        match attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => attrs.push((name, value)),
        }
    }

    /// Detach a node (and its subtree) from its parent.
    ///
    /// Detaching the root or an already-detached node is a no-op. Detaching
    /// a node whose ancestor was detached is harmless: it simply leaves an
    /// already-unreachable subtree.
    pub fn detach(&mut self, id: NodeId) -> bool {
        if id == self.root {
            return false;
        }
        match self.html.tree.get_mut(id) {
            Some(mut node) => {
                node.detach();
                true
            }
            None => false,
        }
    }

    /// Serialize the content root including its own tag.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let Some(root) = self.root() else {
            return String::new();
        };
        let mut output = String::new();
        let mut raw_text_depth = 0usize;

        // Iterative traversal keeps deeply nested input off the call stack
        for edge in root.traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Element(element) => {
                        let name = element.name();
                        output.push('<');
                        output.push_str(name);
                        let overrides = self.attr_overrides.get(&node.id());
                        for (attr_name, value) in element.attrs() {
                            let value = overrides
                                .and_then(|o| o.iter().find(|(n, _)| *n == attr_name))
                                .map_or(value, |(_, v)| v.as_str());
                            push_attr(&mut output, attr_name, value);
                        }
                        output.push('>');
                        if RAW_TEXT_ELEMENTS.contains(&name) {
                            raw_text_depth += 1;
                        }
                    }
                    Node::Text(text) => {
                        if raw_text_depth > 0 {
                            output.push_str(text);
                        } else {
                            push_escaped_text(&mut output, text);
                        }
                    }
                    Node::Comment(comment) => {
                        output.push_str("<!--");
                        output.push_str(comment);
                        output.push_str("-->");
                    }
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(element) = node.value() {
                        let name = element.name();
                        if VOID_ELEMENTS.contains(&name) {
                            continue;
                        }
                        if RAW_TEXT_ELEMENTS.contains(&name) {
                            raw_text_depth = raw_text_depth.saturating_sub(1);
                        }
                        output.push_str("</");
                        output.push_str(name);
                        output.push('>');
                    }
                }
            }
        }
        output
    }
}

fn push_attr(output: &mut String, name: &str, value: &str) {
    output.push(' ');
    output.push_str(name);
    output.push_str("=\"");
    for ch in value.chars() {
        match ch {
            '"' => output.push_str("&quot;"),
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            c => output.push(c),
        }
    }
    output.push('"');
}

fn push_escaped_text(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' => output.push_str("&amp;"),
            c => output.push(c),
        }
    }
}
