//! Command-line interface definitions for Section News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Both options can be provided via command-line flags or environment variables.

use clap::Parser;
use std::time::Duration;

/// Command-line arguments for the Section News scraper.
///
/// # Examples
///
/// ```sh
/// # Three articles per section, 1.2 seconds between article requests
/// section_news
///
/// # Five articles per section, slower crawl
/// section_news --top-k 5 --delay 2.5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of articles to keep per section
    #[arg(short = 'k', long, env = "NEWS_TOP_K", default_value_t = 3)]
    pub top_k: usize,

    /// Seconds to wait before each article request
    #[arg(short, long, env = "NEWS_DELAY", default_value = "1.2", value_parser = parse_delay)]
    pub delay: Duration,
}

/// Parse fractional seconds into a [`Duration`], rejecting negative,
/// non-finite and out-of-range values.
fn parse_delay(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .parse()
        .map_err(|e| format!("`{raw}` is not a number: {e}"))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|e| format!("delay must be a non-negative number of seconds, got {raw}: {e}"))
}
