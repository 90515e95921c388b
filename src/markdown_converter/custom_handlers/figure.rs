//! Figures with captions.
//!
//! An image figure becomes `![alt](src)` plus an italic caption line. The
//! image's own `alt` wins when the attribute is present (even empty);
//! otherwise the caption doubles as alt text. Figures without an image
//! (code listings, quotes) render their content followed by the caption.

use super::{RenderRule, find_descendant, node_attr, text_content};
use htmd::Element;
use htmd::element_handler::{HandlerResult, Handlers};

pub(super) fn rules() -> Vec<RenderRule> {
    vec![
        RenderRule::new("figure", vec!["figure"], figure_handler),
        // The caption is emitted by the figure handler
        RenderRule::new("figcaption", vec!["figcaption"], |_, _| {
            Some(HandlerResult::from(String::new()))
        }),
    ]
}

fn figure_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let caption = find_descendant(element.node, "figcaption")
        .map(|caption| text_content(&caption).trim().to_string())
        .unwrap_or_default();
    let caption_line = if caption.is_empty() {
        String::new()
    } else {
        format!("*{caption}*\n")
    };

    let rendered = match find_descendant(element.node, "img") {
        Some(img) => {
            let src = node_attr(&img, "src").unwrap_or_default();
            let alt = node_attr(&img, "alt").unwrap_or_else(|| caption.clone());
            format!("\n\n![{alt}]({src})\n{caption_line}\n")
        }
        None => {
            let content = handlers.walk_children(element.node).content;
            format!("\n\n{}\n{caption_line}\n", content.trim())
        }
    };
    Some(HandlerResult::from(rendered))
}
