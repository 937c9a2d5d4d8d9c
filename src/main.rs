//! # Section News
//!
//! Scrapes the top articles of each news section of the Naver news portal and
//! writes them as JSON, one file per section plus a combined file.
//!
//! ## Usage
//!
//! ```sh
//! section_news --top-k 3 --delay 1.2
//! ```
//!
//! ## Architecture
//!
//! For each section, in order:
//! 1. **Indexing**: Collect article links from the desktop and mobile listing pages
//! 2. **Fetching**: Download each article (desktop, then mobile) and extract title and body
//! 3. **Processing**: Clean the body, summarize it, and drop near-duplicates
//! 4. **Output**: Write `outputs/{section}.json`, then `outputs/all_sections.json`

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dedup;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod text;
mod utils;

use cli::Cli;
use config::{Portal, ScrapeOptions};
use models::SECTIONS;
use scrapers::fetch::Fetcher;
use utils::ensure_writable_dir;

/// Directory all JSON files are written to, relative to the working directory.
const OUTPUT_DIR: &str = "outputs";

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("section_news starting up");

    let args = Cli::parse();
    let options = ScrapeOptions::from(&args);
    debug!(?options, "Parsed CLI arguments");

    let output_dir = Path::new(OUTPUT_DIR);
    if let Err(e) = ensure_writable_dir(output_dir).await {
        error!(
            path = OUTPUT_DIR,
            error = %e,
            "Output directory is not writable (fix perms or run from a different directory)"
        );
        return Err(e);
    }

    let fetcher = Fetcher::new(Portal::naver())?;
    let records = pipeline::run(&fetcher, &SECTIONS, &options, output_dir).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        sections = SECTIONS.len(),
        articles = records.len(),
        path = OUTPUT_DIR,
        "Execution complete"
    );

    Ok(())
}
