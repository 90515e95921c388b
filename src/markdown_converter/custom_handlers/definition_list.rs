//! Definition lists: `<dl>`, `<dt>`, `<dd>`.
//!
//! ```text
//! **Term**
//! : Definition
//!
//! ```

use super::{RenderRule, child_elements, parent_tag, tag_name, text_content};
use htmd::Element;
use htmd::element_handler::{HandlerResult, Handlers};
use markup5ever_rcdom::Node;
use std::rc::Rc;

pub(super) fn rules() -> Vec<RenderRule> {
    vec![
        RenderRule::new("definitionList", vec!["dl"], definition_list_handler),
        RenderRule::new("definitionTerm", vec!["dt", "dd"], definition_term_handler),
    ]
}

fn definition_list_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let mut items: Vec<String> = Vec::new();
    collect_items(handlers, element.node, &mut items);
    if items.is_empty() {
        return Some(HandlerResult::from(String::new()));
    }
    Some(HandlerResult::from(format!("\n\n{}\n\n", items.join("\n"))))
}

/// `div` wrappers around `dt`/`dd` groups are valid HTML and are descended into.
fn collect_items(handlers: &dyn Handlers, node: &Rc<Node>, items: &mut Vec<String>) {
    for child in child_elements(node) {
        match tag_name(&child) {
            Some("dt") => items.push(format!("**{}**", text_content(&child).trim())),
            Some("dd") => {
                let definition = handlers.walk_children(&child).content;
                items.push(format!(": {}", definition.trim()));
                items.push(String::new());
            }
            Some("div") => collect_items(handlers, &child, items),
            _ => {}
        }
    }
}

/// Stray `dt`/`dd` outside a definition list.
///
/// The list handler emits its own terms without walking them through htmd,
/// so a `dl` parent here means nothing is left to render.
fn definition_term_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    if matches!(parent_tag(element.node).as_deref(), Some("dl")) {
        return Some(HandlerResult::from(String::new()));
    }
    let content = handlers.walk_children(element.node).content;
    let content = content.trim();
    let rendered = if tag_name(element.node) == Some("dt") {
        format!("**{content}**\n")
    } else {
        format!(": {content}\n")
    };
    Some(HandlerResult::from(rendered))
}
