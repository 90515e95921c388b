//! Emphasis (`em`, `i`) and strong emphasis (`strong`, `b`) with the
//! configured delimiters.

use super::{RenderRule, wrap_inline};
use crate::config::RenderOptions;
use htmd::element_handler::HandlerResult;

pub(super) fn rules(options: &RenderOptions) -> Vec<RenderRule> {
    let em = options.em_delimiter.clone();
    let strong = options.strong_delimiter.clone();
    vec![
        RenderRule::new("emphasis", vec!["em", "i"], move |handlers, element| {
            let content = handlers.walk_children(element.node).content;
            Some(HandlerResult::from(wrap_inline(&content, &em, &em)))
        }),
        RenderRule::new("strong", vec!["strong", "b"], move |handlers, element| {
            let content = handlers.walk_children(element.node).content;
            Some(HandlerResult::from(wrap_inline(&content, &strong, &strong)))
        }),
    ]
}
