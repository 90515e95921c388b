//! Disclosure blocks: `<details>` and `<summary>`.
//!
//! Rendered as literal HTML so Markdown viewers keep them collapsible, with
//! the body converted to Markdown inside.

use super::{RenderRule, find_descendant, text_content};
use htmd::Element;
use htmd::element_handler::{HandlerResult, Handlers};

const DEFAULT_SUMMARY: &str = "Details";

pub(super) fn rules() -> Vec<RenderRule> {
    vec![
        RenderRule::new("details", vec!["details"], details_handler),
        // The summary is emitted by the details handler
        RenderRule::new("summary", vec!["summary"], |_, _| {
            Some(HandlerResult::from(String::new()))
        }),
    ]
}

fn details_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let summary = find_descendant(element.node, "summary")
        .map(|summary| text_content(&summary).trim().to_string())
        .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

    let body = handlers.walk_children(element.node).content;

    Some(HandlerResult::from(format!(
        "\n\n<details>\n<summary>{summary}</summary>\n\n{}\n\n</details>\n\n",
        body.trim()
    )))
}
