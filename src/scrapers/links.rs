//! Article link discovery on section listing pages.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, instrument};
use url::Url;

/// Path fragments that identify an article page: desktop then mobile.
const ARTICLE_PATH_PATTERNS: [&str; 2] = ["/read.naver", "/mnews/article/"];

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static anchor selector"));

fn is_article_href(href: &str) -> bool {
    ARTICLE_PATH_PATTERNS.iter().any(|p| href.contains(p))
}

/// Turn an href into an absolute URL, resolving relative ones against `base`.
fn absolutize(href: &str, base: &Url) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    base.join(href).ok().map(String::from)
}

/// Extract article URLs from a listing page.
///
/// Anchors are visited in document order; only hrefs matching a known article
/// path are kept, each URL at most once. Scanning stops as soon as `limit`
/// URLs have been collected.
#[instrument(level = "debug", skip(document))]
pub fn index_articles(document: &Html, base: &Url, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        if links.len() >= limit {
            break;
        }
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() || !is_article_href(href) {
            continue;
        }
        let Some(url) = absolutize(href, base) else {
            debug!(%href, "Skipping unresolvable href");
            continue;
        };
        if seen.insert(url.clone()) {
            links.push(url);
        }
    }

    debug!(count = links.len(), "Indexed article links");
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://news.naver.com").unwrap()
    }

    fn listing(hrefs: &[&str]) -> Html {
        let anchors: String = hrefs
            .iter()
            .map(|h| format!("<li><a href=\"{h}\">기사</a></li>"))
            .collect();
        Html::parse_document(&format!("<html><body><ul>{anchors}</ul></body></html>"))
    }

    #[test]
    fn test_filters_dedups_and_keeps_order() {
        let mut hrefs: Vec<String> = Vec::new();
        // 40 non-article anchors interleaved with 10 article anchors, one URL repeated.
        let articles = [
            "/mnews/article/001/0000000001",
            "https://n.news.naver.com/mnews/article/002/0000000002",
            "/read.naver?oid=003&aid=0000000003",
            "/mnews/article/001/0000000001",
            "/mnews/article/004/0000000004",
            "/mnews/article/005/0000000005",
            "/mnews/article/009/0000000009",
            "/mnews/article/006/0000000006",
            "/mnews/article/007/0000000007",
            "/mnews/article/008/0000000008",
        ];
        for (i, article) in articles.iter().enumerate() {
            for j in 0..4 {
                hrefs.push(format!("/section/{}?page={}", 100 + i, j));
            }
            hrefs.push(article.to_string());
        }
        assert_eq!(hrefs.len(), 50);

        let refs: Vec<&str> = hrefs.iter().map(String::as_str).collect();
        let links = index_articles(&listing(&refs), &base(), 3 * 6);

        assert_eq!(
            links,
            vec![
                "https://news.naver.com/mnews/article/001/0000000001",
                "https://n.news.naver.com/mnews/article/002/0000000002",
                "https://news.naver.com/read.naver?oid=003&aid=0000000003",
                "https://news.naver.com/mnews/article/004/0000000004",
                "https://news.naver.com/mnews/article/005/0000000005",
                "https://news.naver.com/mnews/article/009/0000000009",
                "https://news.naver.com/mnews/article/006/0000000006",
                "https://news.naver.com/mnews/article/007/0000000007",
                "https://news.naver.com/mnews/article/008/0000000008",
            ]
        );
    }

    #[test]
    fn test_nine_unique_of_ten_matches() {
        let hrefs: Vec<String> = (0..9)
            .map(|i| format!("/mnews/article/001/{i:010}"))
            .chain(std::iter::once("/mnews/article/001/0000000000".to_string()))
            .collect();
        let refs: Vec<&str> = hrefs.iter().map(String::as_str).collect();

        let links = index_articles(&listing(&refs), &base(), 18);
        assert_eq!(links.len(), 9);
        assert!(links[0].ends_with("/0000000000"));
        assert!(links[8].ends_with("/0000000008"));
    }

    #[test]
    fn test_stops_at_limit() {
        let hrefs: Vec<String> = (0..30)
            .map(|i| format!("/mnews/article/001/{i:010}"))
            .collect();
        let refs: Vec<&str> = hrefs.iter().map(String::as_str).collect();

        let links = index_articles(&listing(&refs), &base(), 6);
        assert_eq!(links.len(), 6);
        assert!(links[5].ends_with("/0000000005"));
    }

    #[test]
    fn test_ignores_non_article_links() {
        let links = index_articles(
            &listing(&["/main/ranking", "https://example.com/news", "", "#top"]),
            &base(),
            18,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_resolves_against_given_base() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let links = index_articles(&listing(&["/mnews/article/009/0000000009"]), &base, 6);
        assert_eq!(links, vec!["http://127.0.0.1:8080/mnews/article/009/0000000009"]);
    }
}
