//! GitHub-flavored Markdown extensions: tables, strikethrough and task-list
//! checkboxes.

use super::{RenderRule, child_elements, get_attr, tag_name, wrap_inline};
use htmd::Element;
use htmd::element_handler::{HandlerResult, Handlers};
use markup5ever_rcdom::Node;
use std::rc::Rc;

pub(super) fn rules() -> Vec<RenderRule> {
    vec![
        RenderRule::new("table", vec!["table"], table_handler),
        RenderRule::new(
            "strikethrough",
            vec!["del", "s", "strike"],
            |handlers, element| {
                let content = handlers.walk_children(element.node).content;
                Some(HandlerResult::from(wrap_inline(&content, "~~", "~~")))
            },
        ),
        RenderRule::new("taskListItems", vec!["input"], task_list_handler),
    ]
}

/// Render a table as a pipe table. The first row is the header row.
fn table_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let mut caption: Option<String> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();

    for child in child_elements(element.node) {
        match tag_name(&child) {
            Some("caption") if caption.is_none() => {
                caption = Some(cell_text(&handlers.walk_children(&child).content));
            }
            Some("thead" | "tbody" | "tfoot") => {
                for row in child_elements(&child) {
                    if tag_name(&row) == Some("tr") {
                        rows.push(render_row(handlers, &row));
                    }
                }
            }
            Some("tr") => rows.push(render_row(handlers, &child)),
            _ => {}
        }
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return Some(HandlerResult::from(String::new()));
    }

    let mut output = String::from("\n\n");
    if let Some(caption) = caption.filter(|c| !c.is_empty()) {
        output.push_str(&caption);
        output.push_str("\n\n");
    }

    let mut rows = rows.into_iter();
    if let Some(header) = rows.next() {
        push_row(&mut output, header, columns);
    }
    push_row(&mut output, vec!["---".to_string(); columns], columns);
    for row in rows {
        push_row(&mut output, row, columns);
    }
    output.push('\n');

    Some(HandlerResult::from(output))
}

fn render_row(handlers: &dyn Handlers, row: &Rc<Node>) -> Vec<String> {
    child_elements(row)
        .iter()
        .filter(|cell| matches!(tag_name(cell), Some("th" | "td")))
        .map(|cell| cell_text(&handlers.walk_children(cell).content).replace('|', "\\|"))
        .collect()
}

/// Pipe tables hold one line per row
fn cell_text(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_row(output: &mut String, mut cells: Vec<String>, columns: usize) {
    cells.resize(columns, String::new());
    output.push_str("| ");
    output.push_str(&cells.join(" | "));
    output.push_str(" |\n");
}

fn task_list_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let is_checkbox = get_attr(element.attrs, "type")
        .is_some_and(|input_type| input_type.eq_ignore_ascii_case("checkbox"));
    if !is_checkbox {
        return Some(HandlerResult::from(String::new()));
    }
    let checked = element.attrs.iter().any(|a| &*a.name.local == "checked");
    let marker = if checked { "[x] " } else { "[ ] " };
    Some(HandlerResult::from(marker.to_string()))
}
