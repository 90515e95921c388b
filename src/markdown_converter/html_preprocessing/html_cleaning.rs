//! Noise filtering for the cloned content tree.
//!
//! Removes elements that never carry page content: chrome tags (`nav`,
//! `footer`, ...), hidden or interactive elements, caller-excluded
//! selectors and icon-sized images. Anything matched by an include selector
//! survives, even when a default exclusion also matches it.

use crate::markdown_converter::document::ContentTree;
use crate::utils::constants::{DEFAULT_EXCLUDE_SELECTORS, DEFAULT_EXCLUDE_TAGS, ICON_MAX_DIMENSION};
use ego_tree::NodeId;
use scraper::Selector;
use std::collections::HashSet;
use std::sync::LazyLock;

// Default exclusions are parsed once; a parse failure is a bug in the constants.
static DEFAULT_EXCLUDES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    DEFAULT_EXCLUDE_TAGS
        .iter()
        .chain(DEFAULT_EXCLUDE_SELECTORS)
        .map(|s| {
            Selector::parse(s)
                .unwrap_or_else(|e| panic!("BUG: hardcoded exclude selector '{s}' is invalid: {e}"))
        })
        .collect()
});

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("img").expect("BUG: hardcoded CSS selector 'img' is invalid")
});

/// Caller-supplied selectors for the filter, compiled ahead of time.
#[derive(Debug, Clone, Default)]
pub struct FilterSelectors {
    /// Removed in addition to the defaults
    pub exclude: Vec<Selector>,
    /// Always preserved, overriding every exclusion
    pub include: Vec<Selector>,
}

/// Remove non-content elements from `tree` in place.
///
/// Candidates are gathered from the default tags, the default selectors, the
/// caller's exclude selectors and icon-sized images, in that order. Included
/// elements are skipped and every remaining candidate is detached once.
/// Detaching an element whose ancestor already went is harmless.
pub fn filter_content(tree: &mut ContentTree, selectors: &FilterSelectors) {
    let included: HashSet<NodeId> = selectors
        .include
        .iter()
        .flat_map(|sel| tree.select_ids(sel))
        .collect();

    let mut candidates: Vec<NodeId> = DEFAULT_EXCLUDES
        .iter()
        .chain(&selectors.exclude)
        .flat_map(|sel| tree.select_ids(sel))
        .collect();

    candidates.extend(
        tree.select_ids(&IMG_SELECTOR)
            .into_iter()
            .filter(|id| is_icon(tree, *id)),
    );

    let mut removed: HashSet<NodeId> = HashSet::new();
    for id in candidates {
        if included.contains(&id) || !removed.insert(id) {
            continue;
        }
        tree.detach(id);
    }

    tracing::debug!(
        removed = removed.len(),
        preserved = included.len(),
        "Filtered content tree"
    );
}

/// An image is an icon when both declared dimensions are in `1..50`.
/// Missing or zero dimensions mean "unknown", never "icon".
fn is_icon(tree: &ContentTree, id: NodeId) -> bool {
    let Some(img) = tree.element(id) else {
        return false;
    };
    let width = img.value().attr("width").and_then(parse_dimension);
    let height = img.value().attr("height").and_then(parse_dimension);
    matches!(
        (width, height),
        (Some(w), Some(h)) if w > 0 && h > 0 && w < ICON_MAX_DIMENSION && h < ICON_MAX_DIMENSION
    )
}

/// Parse the leading integer of a dimension attribute, so `"16px"` and
/// `"+16"` are both 16.
fn parse_dimension(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let value = value.strip_prefix('+').unwrap_or(value);
    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..digits_end].parse().ok()
}
