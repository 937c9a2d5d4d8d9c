//! HTTP fetching with desktop and mobile browser header profiles.
//!
//! The portal serves different markup (and is less suspicious of requests)
//! depending on how closely the headers resemble a real browser, so every
//! request carries a full profile rather than reqwest's defaults.

use crate::config::Portal;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, REFERER, UPGRADE_INSECURE_REQUESTS,
    USER_AGENT,
};
use reqwest::{Client, StatusCode, redirect};
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Per-request timeout, covering connect through body download.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const MAX_REDIRECTS: usize = 10;

const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";

const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,\
     image/avif,image/webp,image/apng,*/*;q=0.8";

const BROWSER_ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7";

/// Errors from a single GET request.
///
/// All of these are recoverable from the pipeline's point of view: the caller
/// logs them and moves on to the next rendering, listing, or link.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned {status}")]
    Status { url: String, status: StatusCode },
}

/// Which browser the request pretends to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Desktop,
    Mobile,
}

impl Profile {
    /// Renderings in the order they are attempted.
    pub const FALLBACK_ORDER: [Profile; 2] = [Profile::Desktop, Profile::Mobile];

    fn user_agent(self) -> &'static str {
        match self {
            Profile::Desktop => DESKTOP_USER_AGENT,
            Profile::Mobile => MOBILE_USER_AGENT,
        }
    }

    fn referer(self, portal: &Portal) -> String {
        match self {
            Profile::Desktop => format!("{}/", portal.desktop_base),
            Profile::Mobile => format!("{}/", portal.mobile_base),
        }
    }
}

/// Shared HTTP client plus the portal it talks to.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    portal: Portal,
}

impl Fetcher {
    pub fn new(portal: Portal) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(RequestError::Client)?;
        Ok(Self { client, portal })
    }

    pub fn portal(&self) -> &Portal {
        &self.portal
    }

    fn headers(&self, profile: Profile) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(profile.user_agent()));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        // Origins come from config; an unrepresentable one just drops the header.
        if let Ok(referer) = HeaderValue::from_str(&profile.referer(&self.portal)) {
            headers.insert(REFERER, referer);
        }
        headers
    }

    /// GET `url` with the given profile and parse the body as HTML.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_document(&self, url: &str, profile: Profile) -> Result<Html, RequestError> {
        let transport = |source| RequestError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .headers(self.headers(profile))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(transport)?;
        debug!(bytes = body.len(), %status, "Fetched page");
        Ok(Html::parse_document(&body))
    }
}
