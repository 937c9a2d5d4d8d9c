//! Portal scraping: HTTP fetching, link discovery, and article extraction.
//!
//! Scraping follows a two-phase pattern per section:
//!
//! 1. **Indexing**: Collect article URLs from the section's listing pages
//!    ([`links::index_articles`])
//! 2. **Fetching**: Download each article and pull out its title and body
//!    ([`article::fetch_article`])
//!
//! Both phases try the desktop rendering first and fall back to the mobile
//! one. Failed requests are logged and skipped; nothing here is fatal.
//!
//! | Module | Role |
//! |--------|------|
//! | [`fetch`] | `reqwest` client with desktop/mobile header profiles |
//! | [`links`] | Article link filter over listing pages |
//! | [`article`] | Ordered title/body selector candidates |

pub mod article;
pub mod fetch;
pub mod links;
