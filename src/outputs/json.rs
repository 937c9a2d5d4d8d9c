//! JSON output for scraped sections.
//!
//! Files are flat arrays of [`ArticleRecord`], one per section plus a
//! combined file:
//! ```text
//! outputs/
//! ├── politics.json
//! ├── economy.json
//! ├── ...
//! └── all_sections.json
//! ```

use crate::models::ArticleRecord;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// File stem of the cross-section output.
pub const COMBINED_STEM: &str = "all_sections";

/// Path of the JSON file for `stem` inside `output_dir`.
pub fn output_path(output_dir: &Path, stem: &str) -> PathBuf {
    output_dir.join(format!("{stem}.json"))
}

/// Serialize `records` as an indented JSON array and write it to `path`.
///
/// Non-ASCII text is written as-is. An existing file is overwritten.
#[instrument(level = "info", skip(records), fields(path = %path.display(), count = records.len()))]
pub async fn write_articles(path: &Path, records: &[ArticleRecord]) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).await?;
    info!("Wrote JSON file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ArticleRecord {
        ArticleRecord {
            date: "20250506".into(),
            section: "culture".into(),
            url: "https://n.news.naver.com/mnews/article/001/0000000001".into(),
            title: title.into(),
            content: "전시회가 열렸다".into(),
            summary: "전시회가 열렸다".into(),
        }
    }

    #[tokio::test]
    async fn test_write_articles_pretty_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = output_path(tmp.path(), "culture");

        write_articles(&path, &[record("문화 소식"), record("두 번째")])
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {\n    \"date\": \"20250506\""));
        assert!(written.contains("문화 소식"));
        assert!(!written.contains("\\u"));

        let parsed: Vec<ArticleRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].title, "두 번째");
    }

    #[tokio::test]
    async fn test_write_empty_section() {
        let tmp = tempfile::tempdir().unwrap();
        let path = output_path(tmp.path(), "world");

        write_articles(&path, &[]).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_write_into_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = output_path(&tmp.path().join("missing"), COMBINED_STEM);

        assert!(write_articles(&path, &[record("x")]).await.is_err());
    }
}
