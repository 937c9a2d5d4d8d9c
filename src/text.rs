//! Article body cleanup and extractive summaries.
//!
//! - [`clean_text`] strips contact details and the agency copyright line and
//!   normalizes whitespace.
//! - [`summarize`] keeps the first three sentences, capped at a character budget.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("static email pattern"));

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2,3}-\d{3,4}-\d{4}").expect("static phone pattern"));

/// "Unauthorized reproduction and redistribution prohibited."
static COPYRIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"무단\s*전재\s*및\s*재배포\s*금지").expect("static copyright pattern")
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static whitespace"));

/// Sentence ends: the declarative endings `다.` / `요.`, or any `.`, `!`, `?`,
/// followed by whitespace.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:다\.|요\.|[.!?])\s+").expect("static sentence pattern"));

const SUMMARY_SENTENCES: usize = 3;

const ELLIPSIS: char = '…';

/// Remove emails, phone numbers and the copyright notice, then collapse whitespace.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = EMAIL.replace_all(text, " ");
    let text = PHONE.replace_all(&text, " ");
    let text = COPYRIGHT.replace_all(&text, " ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Join the first three sentences of `text`, truncated to `max_len` characters.
///
/// The sentence terminator is consumed by the split, so `다.` endings lose
/// their last syllable in the summary. An ellipsis is appended only when the
/// joined sentences had to be cut.
pub fn summarize(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let summary = SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");

    if summary.chars().count() > max_len {
        let mut cut: String = summary.chars().take(max_len).collect();
        cut.push(ELLIPSIS);
        cut
    } else {
        summary
    }
}
