//! Inline semantic elements: `mark`, `abbr`, `q`, `sub`, `sup`.

use super::{RenderRule, get_attr, wrap_inline};
use htmd::Element;
use htmd::element_handler::{HandlerResult, Handlers};

pub(super) fn rules() -> Vec<RenderRule> {
    vec![
        RenderRule::new("mark", vec!["mark"], |handlers, element| {
            wrapped(handlers, &element, "==", "==")
        }),
        RenderRule::new("abbr", vec!["abbr"], abbr_handler),
        RenderRule::new("inlineQuote", vec!["q"], |handlers, element| {
            wrapped(handlers, &element, "\"", "\"")
        }),
        RenderRule::new("subscript", vec!["sub"], |handlers, element| {
            wrapped(handlers, &element, "~", "~")
        }),
        RenderRule::new("superscript", vec!["sup"], |handlers, element| {
            wrapped(handlers, &element, "^", "^")
        }),
    ]
}

fn wrapped(
    handlers: &dyn Handlers,
    element: &Element,
    open: &str,
    close: &str,
) -> Option<HandlerResult> {
    let content = handlers.walk_children(element.node).content;
    Some(HandlerResult::from(wrap_inline(&content, open, close)))
}

/// `HTML (HyperText Markup Language)`
fn abbr_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let content = handlers.walk_children(element.node).content;
    let rendered = match get_attr(element.attrs, "title") {
        Some(title) => format!("{content} ({title})"),
        None => content,
    };
    Some(HandlerResult::from(rendered))
}
