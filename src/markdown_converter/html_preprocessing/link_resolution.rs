//! Rewrite relative link and image references to absolute URLs.

use crate::markdown_converter::document::ContentTree;
use crate::utils::url_utils::resolve_url;
use scraper::Selector;
use std::sync::LazyLock;
use url::Url;

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("BUG: hardcoded CSS selector 'a[href]' is invalid")
});

static IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("img[src]").expect("BUG: hardcoded CSS selector 'img[src]' is invalid")
});

/// Resolve every relative `a[href]` and `img[src]` in `tree` against `base`.
///
/// Empty and absolute references (`http://`, `https://`, `//`, `data:`) are
/// left as they are, and so is anything the URL parser rejects.
pub fn resolve_urls(tree: &mut ContentTree, base: &Url) {
    let mut rewritten = 0usize;
    for (selector, attr) in [(&*LINK_SELECTOR, "href"), (&*IMAGE_SELECTOR, "src")] {
        for id in tree.select_ids(selector) {
            let Some(value) = tree.attr(id, attr) else {
                continue;
            };
            if let Some(resolved) = resolve_url(base, &value) {
                tree.set_attr(id, attr, resolved);
                rewritten += 1;
            }
        }
    }
    tracing::debug!(rewritten, base = %base, "Resolved relative URLs");
}
