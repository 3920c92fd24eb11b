use std::sync::LazyLock;

use scraper::{ElementRef, Node, Selector};

use crate::config::SiteConfig;

static IMAGE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.image").unwrap());
static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Break,
}

/// Find the data block: the first `<p>` directly under the content region
/// whose text mentions every marker. Nested paragraphs (infoboxes,
/// sidebars) are not considered.
pub fn locate_data_block<'a>(content: ElementRef<'a>, markers: &[String]) -> Option<ElementRef<'a>> {
    content
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p")
        .find(|p| {
            let text: String = p.text().collect();
            markers.iter().all(|m| text.contains(m.as_str()))
        })
}

/// Split a block into logical lines. Only the block's own text nodes
/// count; `<br>` separates them and child elements are skipped.
pub fn block_lines(block: ElementRef<'_>) -> Vec<String> {
    tokenize(block)
        .into_iter()
        .filter_map(|t| match t {
            Token::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect()
}

fn tokenize(block: ElementRef<'_>) -> Vec<Token> {
    block
        .children()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(Token::Text(text.trim().to_string())),
            Node::Element(el) if el.name() == "br" => Some(Token::Break),
            _ => None,
        })
        .collect()
}

/// Absolute URL of the image wrapped in an `a.image` link inside the block.
pub fn block_image(block: ElementRef<'_>, cfg: &SiteConfig) -> Option<String> {
    let wrapper = block.select(&IMAGE_LINK).next()?;
    let src = wrapper.select(&IMG).next()?.value().attr("src")?;
    Some(absolute_src(src, cfg))
}

fn absolute_src(src: &str, cfg: &SiteConfig) -> String {
    if src.starts_with("http") {
        src.to_string()
    } else if src.starts_with("//") {
        format!("https:{}", src)
    } else {
        cfg.absolute(src)
    }
}
