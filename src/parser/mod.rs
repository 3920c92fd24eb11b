pub mod block;
pub mod fields;
pub mod links;

use scraper::{ElementRef, Html, Selector};

use crate::config::SiteConfig;
use crate::error::{Result, ScrapeError};
use crate::record::Record;

/// Detail page → record: locate block, split lines, parse fields, apply defaults.
pub fn extract_record(url: &str, doc: &Html, cfg: &SiteConfig) -> Result<Record> {
    let content = main_content(doc, cfg)?.ok_or_else(|| ScrapeError::MissingContent {
        url: url.to_string(),
    })?;
    let data = block::locate_data_block(content, &cfg.block_markers).ok_or_else(|| {
        ScrapeError::MissingDataBlock {
            url: url.to_string(),
        }
    })?;

    let name = page_name(doc, url, cfg)?;
    let image = block::block_image(data, cfg);
    let fields = fields::parse_fields(block::block_lines(data));

    Ok(Record::from_fields(name, image, fields))
}

/// Index page → detail URLs.
pub fn extract_links(url: &str, doc: &Html, cfg: &SiteConfig) -> Result<Vec<String>> {
    let content = main_content(doc, cfg)?.ok_or_else(|| ScrapeError::MissingContent {
        url: url.to_string(),
    })?;
    Ok(links::discover_links(content, cfg))
}

pub fn main_content<'a>(doc: &'a Html, cfg: &SiteConfig) -> Result<Option<ElementRef<'a>>> {
    let selector = compile(&cfg.content_selector)?;
    Ok(doc.select(&selector).next())
}

/// Heading text, else the URL's last segment with underscores as spaces.
pub fn page_name(doc: &Html, url: &str, cfg: &SiteConfig) -> Result<String> {
    let selector = compile(&cfg.heading_selector)?;
    let heading = doc
        .select(&selector)
        .next()
        .map(|h| h.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    Ok(heading.unwrap_or_else(|| name_from_url(url)))
}

pub fn name_from_url(url: &str) -> String {
    url.rsplit('/').next().unwrap_or_default().replace('_', " ")
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        css: css.to_string(),
        message: e.to_string(),
    })
}
