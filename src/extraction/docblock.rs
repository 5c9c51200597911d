//! Reduces a raw doc comment to the one-line summary used in reports.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*/\*\*?|\*/\s*$").expect("valid delimiter regex"));

static LATIN_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]").expect("valid regex"));

/// Word cap for Latin text without any sentence end.
const MAX_SUMMARY_WORDS: usize = 10;

/// Joins the prose lines of a doc comment and cuts it to a summary.
///
/// Annotation lines (`@param`, `@return`, ...) are dropped. Text with Latin
/// letters is cut after its first `.`, or to ten words plus `...` when there
/// is no period. Other scripts are kept whole.
pub fn summarize(raw: &str) -> String {
    let body = COMMENT_DELIMITERS.replace_all(raw, "");

    let text = body
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty() && !line.starts_with('@'))
        .collect::<Vec<_>>()
        .join(" ");

    if !LATIN_LETTER.is_match(&text) {
        return text.trim().to_string();
    }

    if let Some(dot) = text.find('.') {
        return text[..=dot].trim().to_string();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > MAX_SUMMARY_WORDS {
        format!("{}...", words[..MAX_SUMMARY_WORDS].join(" "))
    } else {
        text.trim().to_string()
    }
}
