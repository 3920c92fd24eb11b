use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;
use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::parser;
use crate::record::Record;

/// Fetch the index, then every detail page in discovery order. Pages that
/// fail are logged and skipped. Returns records sorted by name.
///
/// One progress line per detail page goes above the bar, or to `out` when
/// the bar is hidden (disabled, or stderr is not a terminal).
pub fn scrape_all<F: Fetch, W: Write>(
    fetcher: &F,
    index_url: &str,
    cfg: &SiteConfig,
    show_progress: bool,
    out: &mut W,
) -> Vec<Record> {
    let links = match discover(fetcher, index_url, cfg) {
        Ok(links) => links,
        Err(e) => {
            warn!("Index page unusable: {}", e);
            return Vec::new();
        }
    };
    info!(
        "Found {} projectile links. Extracting details...",
        links.len()
    );

    let pb = progress_bar(links.len(), show_progress);
    let mut records = Vec::with_capacity(links.len());

    for (i, url) in links.iter().enumerate() {
        announce(&pb, out, &format!("[{}/{}] {}", i + 1, links.len(), url));
        match scrape_one(fetcher, url, cfg) {
            Ok(record) => records.push(record),
            Err(e) => pb.suspend(|| warn!("Skipping {}: {}", url, e)),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    sort_by_name(&mut records);
    records
}

fn discover<F: Fetch>(fetcher: &F, index_url: &str, cfg: &SiteConfig) -> Result<Vec<String>> {
    info!("Fetching index page: {}", index_url);
    let body = fetcher.fetch(index_url)?;
    let doc = Html::parse_document(&body);
    parser::extract_links(index_url, &doc, cfg)
}

fn scrape_one<F: Fetch>(fetcher: &F, url: &str, cfg: &SiteConfig) -> Result<Record> {
    let body = fetcher.fetch(url)?;
    let doc = Html::parse_document(&body);
    parser::extract_record(url, &doc, cfg)
}

fn announce<W: Write>(pb: &ProgressBar, out: &mut W, line: &str) {
    if pb.is_hidden() {
        // informational only
        let _ = writeln!(out, "{}", line);
    } else {
        pb.println(line);
    }
}

/// Stable, so equal names keep discovery order.
pub fn sort_by_name(records: &mut [Record]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
    {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}
