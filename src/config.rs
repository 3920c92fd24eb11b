use std::time::Duration;

pub const BASE_URL: &str = "https://shipoffools.wiki.gg";
pub const INDEX_URL: &str = "https://shipoffools.wiki.gg/wiki/Projectiles";
pub const OUTPUT_PATH: &str = "projectiles_data_from_p_tag.json";
pub const USER_AGENT: &str = concat!("sof_scraper/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Site-specific knobs for link discovery and record extraction.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Origin used to absolutize site-relative hrefs and image sources
    pub base_url: String,
    /// Path prefix every detail page lives under
    pub detail_prefix: String,
    /// Selector for the main content region (index and detail pages)
    pub content_selector: String,
    /// Selector for the page heading that names the item
    pub heading_selector: String,
    /// Substrings that must all appear in the data block's text
    pub block_markers: Vec<String>,
    /// Link titles containing any of these are site chrome, not items
    pub generic_titles: Vec<String>,
    /// Hrefs ending in one of these point at files, not pages
    pub file_extensions: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            detail_prefix: "/wiki/".to_string(),
            content_selector: "div.mw-parser-output".to_string(),
            heading_selector: "h1.page-header__title, h1#firstHeading".to_string(),
            block_markers: vec!["Damage".into(), "Magazine Size".into()],
            generic_titles: vec!["Ship of Fools".into(), "Wiki".into(), "Category".into()],
            file_extensions: [".png", ".jpg", ".webp", ".gif", ".svg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SiteConfig {
    /// Join a site-relative path onto the origin.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
