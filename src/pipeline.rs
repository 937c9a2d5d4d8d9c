//! Per-section orchestration: links → articles → dedup → JSON.
//!
//! Everything runs sequentially. Sections are processed one after another,
//! and within a section every article request is preceded by the configured
//! delay so the portal is not hammered.

use crate::config::ScrapeOptions;
use crate::dedup::dedup;
use crate::models::{ArticleRecord, Section};
use crate::outputs::json::{COMBINED_STEM, output_path, write_articles};
use crate::scrapers::article::fetch_article;
use crate::scrapers::fetch::{Fetcher, Profile};
use crate::scrapers::links::index_articles;
use crate::text::summarize;
use crate::utils::{today_stamp, truncate_for_log};
use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Gather candidate article URLs from the desktop and mobile listing pages.
///
/// A listing that fails to load is logged and skipped. URLs are unique and
/// keep discovery order, desktop listing first.
#[instrument(level = "info", skip_all, fields(section = section.name))]
pub async fn collect_links(
    fetcher: &Fetcher,
    base: &Url,
    section: &Section,
    options: &ScrapeOptions,
) -> Vec<String> {
    let listing_urls = fetcher.portal().section_urls(section.id);
    let mut links = Vec::new();

    for (listing_url, profile) in listing_urls.iter().zip(Profile::FALLBACK_ORDER) {
        match fetcher.fetch_document(listing_url, profile).await {
            Ok(document) => {
                let found = index_articles(&document, base, options.link_limit());
                debug!(%listing_url, ?profile, count = found.len(), "Indexed listing page");
                links.extend(found);
            }
            Err(e) => {
                warn!(
                    section_id = section.id,
                    %listing_url,
                    error = %e,
                    "Section listing fetch failed"
                );
            }
        }
    }

    links.into_iter().unique().collect()
}

/// Scrape up to `options.top_k` distinct articles for one section.
///
/// Links are visited in order until enough articles with both a title and a
/// body were collected or the links run out. The result is deduplicated by
/// fingerprint and capped at `top_k`.
#[instrument(level = "info", skip_all, fields(section = section.name))]
pub async fn scrape_section(
    fetcher: &Fetcher,
    base: &Url,
    section: &Section,
    options: &ScrapeOptions,
    date: &str,
) -> Vec<ArticleRecord> {
    let links = collect_links(fetcher, base, section, options).await;
    info!(section = section.name, count = links.len(), "Found candidate links");

    let mut records = Vec::new();
    for url in links {
        if records.len() >= options.top_k {
            break;
        }
        sleep(options.delay).await;

        let Some(article) = fetch_article(fetcher, &url).await else {
            debug!(%url, "No article content; skipping");
            continue;
        };
        debug!(%url, title = %truncate_for_log(&article.title, 40), "Collected article");
        records.push(ArticleRecord {
            date: date.to_string(),
            section: section.name.to_string(),
            summary: summarize(&article.content, options.summary_max_len),
            url,
            title: article.title,
            content: article.content,
        });
    }
    info!(section = section.name, count = records.len(), "Saved items");

    let mut records = dedup(records);
    records.truncate(options.top_k);
    records
}

/// Scrape every section, writing `{section}.json` after each one and the
/// combined file at the end.
///
/// Returns the combined records in section order. Network problems only
/// shrink the output; a failed write aborts the run.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn run(
    fetcher: &Fetcher,
    sections: &[Section],
    options: &ScrapeOptions,
    output_dir: &Path,
) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
    let base = Url::parse(&fetcher.portal().desktop_base)?;
    let mut all_records = Vec::new();

    for section in sections {
        let records = scrape_section(fetcher, &base, section, options, &today_stamp()).await;
        write_articles(&output_path(output_dir, section.name), &records).await?;
        all_records.extend(records);
    }

    write_articles(&output_path(output_dir, COMBINED_STEM), &all_records).await?;
    info!(count = all_records.len(), "Wrote combined output");
    Ok(all_records)
}
