//! Data models for sections and scraped articles.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Section`]: A named news category and its numeric portal code
//! - [`ExtractedArticle`]: Title and cleaned body pulled from one article page
//! - [`ArticleRecord`]: The serialized output row for one article

use serde::{Deserialize, Serialize};

/// A news category on the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Name used in records and as the output file stem.
    pub name: &'static str,
    /// Numeric section code in the portal's listing URLs.
    pub id: u32,
}

/// Sections scraped on every run, in output order.
pub const SECTIONS: [Section; 6] = [
    Section { name: "politics", id: 100 },
    Section { name: "economy", id: 101 },
    Section { name: "society", id: 102 },
    Section { name: "culture", id: 103 },
    Section { name: "world", id: 104 },
    Section { name: "it_science", id: 105 },
];

/// Title and body found on an article page.
///
/// Only produced when both fields are non-empty; a page that yields nothing
/// usable is represented by `None` at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    /// Body text after cleaning.
    pub content: String,
}

/// One article as written to the JSON output.
///
/// Field order here is the field order in the output files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Scrape date in `YYYYMMDD` format.
    pub date: String,
    pub section: String,
    pub url: String,
    pub title: String,
    pub content: String,
    pub summary: String,
}
