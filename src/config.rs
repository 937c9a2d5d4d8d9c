//! Runtime configuration for the scraping pipeline.
//!
//! [`Portal`] holds the hosts that listing and article requests go to, and
//! [`ScrapeOptions`] holds the knobs of a single run. Production code uses
//! [`Portal::naver`]; tests point both hosts at a local mock server.

use crate::cli::Cli;
use std::time::Duration;

/// Default number of articles kept per section.
pub const DEFAULT_TOP_K: usize = 3;

/// Default pause before each article request.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1200);

/// How many candidate links to collect per requested article.
///
/// Not every link yields a usable article, so the link scan stops at
/// `top_k * DEFAULT_LINK_MARGIN` candidates rather than at `top_k`.
pub const DEFAULT_LINK_MARGIN: usize = 6;

/// Default summary length in characters, before the ellipsis.
pub const DEFAULT_SUMMARY_MAX_LEN: usize = 420;

/// The desktop and mobile origins of the news portal, without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portal {
    pub desktop_base: String,
    pub mobile_base: String,
}

impl Portal {
    pub fn naver() -> Self {
        Self::new("https://news.naver.com", "https://n.news.naver.com")
    }

    pub fn new(desktop_base: impl Into<String>, mobile_base: impl Into<String>) -> Self {
        Self {
            desktop_base: desktop_base.into().trim_end_matches('/').to_string(),
            mobile_base: mobile_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Listing page URLs for a section: desktop first, then mobile.
    pub fn section_urls(&self, section_id: u32) -> [String; 2] {
        [
            format!("{}/section/{}", self.desktop_base, section_id),
            format!("{}/section/{}", self.mobile_base, section_id),
        ]
    }
}

/// Per-run options shared by every section.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOptions {
    pub top_k: usize,
    pub delay: Duration,
    pub link_margin: usize,
    pub summary_max_len: usize,
}

impl ScrapeOptions {
    /// Upper bound on candidate links gathered from one listing page.
    pub fn link_limit(&self) -> usize {
        self.top_k.saturating_mul(self.link_margin)
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            delay: DEFAULT_DELAY,
            link_margin: DEFAULT_LINK_MARGIN,
            summary_max_len: DEFAULT_SUMMARY_MAX_LEN,
        }
    }
}

impl From<&Cli> for ScrapeOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            top_k: cli.top_k,
            delay: cli.delay,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_section_urls_desktop_then_mobile() {
        let portal = Portal::naver();
        let [desktop, mobile] = portal.section_urls(101);
        assert_eq!(desktop, "https://news.naver.com/section/101");
        assert_eq!(mobile, "https://n.news.naver.com/section/101");
    }

    #[test]
    fn test_portal_trims_trailing_slash() {
        let portal = Portal::new("http://127.0.0.1:1234/", "http://127.0.0.1:1234");
        assert_eq!(portal.desktop_base, "http://127.0.0.1:1234");
        assert_eq!(portal.section_urls(7)[0], "http://127.0.0.1:1234/section/7");
    }

    #[test]
    fn test_options_from_cli() {
        let cli = Cli::parse_from(["section_news", "--top-k", "4", "--delay", "0"]);
        let options = ScrapeOptions::from(&cli);

        assert_eq!(options.top_k, 4);
        assert_eq!(options.delay, Duration::ZERO);
        assert_eq!(options.link_limit(), 24);
        assert_eq!(options.summary_max_len, DEFAULT_SUMMARY_MAX_LEN);
    }
}
