//! Title and body extraction from article pages.
//!
//! The portal has served several generations of article markup, on desktop
//! and mobile, so extraction walks ordered candidate lists and the first
//! candidate with non-empty text wins.

use crate::models::ExtractedArticle;
use crate::scrapers::fetch::{Fetcher, Profile};
use crate::text::clean_text;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

/// Headline selectors, most specific first; `title` is the last resort.
const TITLE_SELECTORS: [&str; 5] = [
    "h2#title_area",
    ".media_end_head_headline",
    "h1#title_area",
    "h1.end_tit",
    "title",
];

/// Article body containers, current layout first.
const BODY_SELECTORS: [&str; 4] = [
    "div#dic_area",
    "article#newsct_article",
    "div#articleBodyContents",
    "div#articeBody",
];

static TITLE_CANDIDATES: Lazy<Vec<Selector>> = Lazy::new(|| parse_all(&TITLE_SELECTORS));
static BODY_CANDIDATES: Lazy<Vec<Selector>> = Lazy::new(|| parse_all(&BODY_SELECTORS));

fn parse_all(selectors: &[&str]) -> Vec<Selector> {
    selectors
        .iter()
        .map(|s| Selector::parse(s).expect("static article selector"))
        .collect()
}

/// Text of an element with each text node trimmed and joined by a single space.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matched by the first candidate that yields any.
fn first_text(document: &Html, candidates: &[Selector]) -> Option<String> {
    candidates.iter().find_map(|selector| {
        document
            .select(selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    })
}

/// Pull title and cleaned body out of an already-parsed article page.
pub fn extract_from_document(document: &Html) -> Option<ExtractedArticle> {
    let title = first_text(document, &TITLE_CANDIDATES)?;
    let content = clean_text(&first_text(document, &BODY_CANDIDATES)?);
    if content.is_empty() {
        return None;
    }
    Some(ExtractedArticle { title, content })
}

/// Fetch a single article, desktop rendering first, then mobile.
///
/// A failed request or a page without usable title and body moves on to the
/// next rendering. Returns `None` when neither rendering yields both.
#[instrument(level = "info", skip(fetcher))]
pub async fn fetch_article(fetcher: &Fetcher, url: &str) -> Option<ExtractedArticle> {
    for profile in Profile::FALLBACK_ORDER {
        let document = match fetcher.fetch_document(url, profile).await {
            Ok(document) => document,
            Err(e) => {
                debug!(?profile, error = %e, "Article fetch failed");
                continue;
            }
        };
        match extract_from_document(&document) {
            Some(article) => {
                debug!(?profile, chars = article.content.chars().count(), "Parsed article");
                return Some(article);
            }
            None => debug!(?profile, "No title/body found"),
        }
    }
    None
}
