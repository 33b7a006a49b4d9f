//! Post text cleaning and hashtag extraction.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?|ftp)://\S*|\bwww\.\S+").expect("valid url regex")
});

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));

/// Clean raw post text.
///
/// Drops URLs and `@mentions`, lowercases, then removes every character that
/// is not a word character, whitespace, or `#`. Applying it twice yields the
/// same text as applying it once.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let without_urls = URL_RE.replace_all(raw, "");
    let without_mentions = MENTION_RE.replace_all(&without_urls, "");
    without_mentions
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == '#' || c.is_whitespace())
        .collect()
}

/// Whitespace-delimited tokens of `text` that start with `#`, in order of
/// appearance. Duplicates are kept.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|token| token.starts_with('#'))
        .map(ToOwned::to_owned)
        .collect()
}
