use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::SiteConfig;

static HREF_LINKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Collect detail-page URLs from the index page's content region, in
/// first-seen order without duplicates.
pub fn discover_links(content: ElementRef<'_>, cfg: &SiteConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in content.select(&HREF_LINKS) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !is_detail_href(href, cfg) || !names_its_target(anchor, cfg) {
            continue;
        }
        let url = cfg.absolute(href);
        if seen.insert(url.clone()) {
            links.push(url);
        }
    }

    links
}

/// Detail pages live under the prefix, outside any `Namespace:` and are
/// not files.
fn is_detail_href(href: &str, cfg: &SiteConfig) -> bool {
    href.starts_with(cfg.detail_prefix.as_str())
        && !href.contains(':')
        && !cfg
            .file_extensions
            .iter()
            .any(|ext| href.ends_with(ext.as_str()))
}

/// An item link carries a title equal to its own text, and that title
/// isn't site chrome.
fn names_its_target(anchor: ElementRef<'_>, cfg: &SiteConfig) -> bool {
    let Some(title) = anchor.value().attr("title") else {
        return false;
    };
    let text: String = anchor.text().collect();
    title == text.trim()
        && !cfg
            .generic_titles
            .iter()
            .any(|generic| title.contains(generic.as_str()))
}
