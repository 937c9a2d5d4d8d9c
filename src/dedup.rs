//! Near-duplicate article removal.
//!
//! Wire services push the same story under several URLs, so two records are
//! treated as duplicates when their title and the start of their body match.

use crate::models::ArticleRecord;
use itertools::Itertools;
use md5::{Digest, Md5};

/// Characters of content included in the fingerprint.
pub const FINGERPRINT_CONTENT_CHARS: usize = 160;

/// Lowercase hex MD5 over the title followed by the content prefix.
pub fn fingerprint(record: &ArticleRecord) -> String {
    let mut key = record.title.clone();
    key.extend(record.content.chars().take(FINGERPRINT_CONTENT_CHARS));
    format!("{:x}", Md5::digest(key.as_bytes()))
}

/// Drop records whose fingerprint was already seen, keeping first occurrences in order.
pub fn dedup(records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    records.into_iter().unique_by(fingerprint).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, title: &str, content: &str) -> ArticleRecord {
        ArticleRecord {
            date: "20250506".into(),
            section: "society".into(),
            url: url.into(),
            title: title.into(),
            content: content.into(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_fingerprint_is_md5_hex() {
        let r = record("u", "abc", "");
        assert_eq!(fingerprint(&r), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let records = vec![
            record("a", "제목1", "본문1"),
            record("b", "제목2", "본문2"),
            record("c", "제목1", "본문1"),
            record("d", "제목3", "본문3"),
        ];
        let urls: Vec<_> = dedup(records).into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_dedup_ignores_content_past_prefix() {
        let prefix = "가".repeat(FINGERPRINT_CONTENT_CHARS);
        let records = vec![
            record("a", "같은 제목", &format!("{prefix} 원본 꼬리")),
            record("b", "같은 제목", &format!("{prefix} 수정된 꼬리")),
        ];
        assert_eq!(dedup(records).len(), 1);
    }

    #[test]
    fn test_dedup_distinguishes_titles() {
        let records = vec![record("a", "제목A", "본문"), record("b", "제목B", "본문")];
        assert_eq!(dedup(records).len(), 2);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup(Vec::new()).is_empty());
    }
}
