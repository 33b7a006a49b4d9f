//! Aggregation of stored posts into a trend report.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use stylepulse_core::{is_fashion_keyword, TOP_N};

/// The fields of a stored post that trend analysis reads.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedPost {
    pub clean_text: String,
    pub hashtags: Vec<String>,
    pub sentiment: f64,
}

/// Sign of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Positive,
    Negative,
    Neutral,
}

impl SentimentBucket {
    /// `> 0` is positive, `< 0` negative, exactly zero neutral.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate view over a window of posts.
///
/// `top_words` and `top_hashtags` serialize as `[term, count]` pairs, most
/// frequent first. `sentiment_distribution` only holds buckets that occur.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendReport {
    pub top_words: Vec<(String, usize)>,
    pub top_hashtags: Vec<(String, usize)>,
    pub sentiment_distribution: BTreeMap<SentimentBucket, f64>,
}

impl TrendReport {
    /// `true` when the report was built from zero posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentiment_distribution.is_empty()
    }
}

/// Build a [`TrendReport`] from a window of posts.
///
/// Terms are whitespace/`#`-separated tokens of `clean_text` that exactly
/// match the fashion vocabulary, so `#streetwear` counts toward
/// `streetwear`. Every stored hashtag is counted as-is. Both lists are capped
/// at [`TOP_N`] and ordered by count descending, then alphabetically.
///
/// An empty input yields an empty report rather than a division by zero.
#[must_use]
pub fn analyze_posts(posts: &[AnalyzedPost]) -> TrendReport {
    let mut word_freq: HashMap<&str, usize> = HashMap::new();
    let mut hashtag_freq: HashMap<&str, usize> = HashMap::new();
    let mut bucket_counts: BTreeMap<SentimentBucket, usize> = BTreeMap::new();

    for post in posts {
        for token in post
            .clean_text
            .split(|c: char| c.is_whitespace() || c == '#')
            .filter(|t| is_fashion_keyword(t))
        {
            *word_freq.entry(token).or_default() += 1;
        }
        for tag in &post.hashtags {
            *hashtag_freq.entry(tag.as_str()).or_default() += 1;
        }
        *bucket_counts
            .entry(SentimentBucket::from_score(post.sentiment))
            .or_default() += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let total = posts.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let sentiment_distribution = bucket_counts
        .into_iter()
        .map(|(bucket, count)| (bucket, count as f64 / total))
        .collect();

    TrendReport {
        top_words: most_common(word_freq),
        top_hashtags: most_common(hashtag_freq),
        sentiment_distribution,
    }
}

fn most_common(freq: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(&str, usize)> = freq.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(TOP_N);
    entries
        .into_iter()
        .map(|(term, count)| (term.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(clean_text: &str, hashtags: &[&str], sentiment: f64) -> AnalyzedPost {
        AnalyzedPost {
            clean_text: clean_text.to_string(),
            hashtags: hashtags.iter().map(|h| (*h).to_string()).collect(),
            sentiment,
        }
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = analyze_posts(&[]);
        assert!(report.top_words.is_empty());
        assert!(report.top_hashtags.is_empty());
        assert!(report.sentiment_distribution.is_empty());
        assert!(report.is_empty());
    }

    #[test]
    fn three_way_split_distribution() {
        let posts = [post("a", &[], 0.5), post("b", &[], -0.2), post("c", &[], 0.0)];
        let report = analyze_posts(&posts);
        for bucket in [
            SentimentBucket::Positive,
            SentimentBucket::Negative,
            SentimentBucket::Neutral,
        ] {
            let share = report.sentiment_distribution[&bucket];
            assert!((share - 1.0 / 3.0).abs() < 1e-3, "{bucket}: {share}");
        }
    }

    #[test]
    fn distribution_sums_to_one_and_omits_absent_buckets() {
        let posts = [
            post("x", &[], 0.9),
            post("y", &[], 0.1),
            post("z", &[], -0.4),
            post("w", &[], 0.3),
        ];
        let report = analyze_posts(&posts);
        let sum: f64 = report.sentiment_distribution.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(!report
            .sentiment_distribution
            .contains_key(&SentimentBucket::Neutral));
        assert!((report.sentiment_distribution[&SentimentBucket::Positive] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn top_words_only_contain_vocabulary() {
        let posts = [
            post("love this new #streetwear collection", &["#streetwear"], 0.6),
            post("the runway was chic and elegant but the shoes", &[], 0.4),
            post("random words nobody tracks", &[], 0.0),
        ];
        let report = analyze_posts(&posts);
        assert!(!report.top_words.is_empty());
        for (term, _) in &report.top_words {
            assert!(
                stylepulse_core::FASHION_KEYWORDS.contains(&term.as_str()),
                "{term} is not a vocabulary term"
            );
        }
        assert!(report.top_words.contains(&("streetwear".to_string(), 1)));
        assert!(report.top_words.contains(&("collection".to_string(), 1)));
    }

    #[test]
    fn partial_matches_are_not_counted() {
        let posts = [post("fashionable styles trending dresses", &[], 0.0)];
        assert!(analyze_posts(&posts).top_words.is_empty());
    }

    #[test]
    fn counts_are_ordered_with_alphabetical_ties() {
        let posts = [
            post("vogue chic vogue", &["#b", "#a"], 0.1),
            post("chic vogue brand", &["#a", "#c", "#b"], 0.2),
        ];
        let report = analyze_posts(&posts);
        assert_eq!(
            report.top_words,
            vec![
                ("vogue".to_string(), 3),
                ("chic".to_string(), 2),
                ("brand".to_string(), 1),
            ]
        );
        assert_eq!(
            report.top_hashtags,
            vec![
                ("#a".to_string(), 2),
                ("#b".to_string(), 2),
                ("#c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn lists_are_capped_at_ten() {
        let text = stylepulse_core::FASHION_KEYWORDS.join(" ");
        let tags: Vec<String> = (0..15).map(|i| format!("#tag{i}")).collect();
        let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let report = analyze_posts(&[post(&text, &tag_refs, 0.0)]);
        assert_eq!(report.top_words.len(), TOP_N);
        assert_eq!(report.top_hashtags.len(), TOP_N);
    }

    #[test]
    fn posts_without_hashtags_add_no_empty_token() {
        let posts = [post("dress", &[], 0.2), post("dress", &[], 0.3)];
        let report = analyze_posts(&posts);
        assert!(report.top_hashtags.is_empty());
    }

    #[test]
    fn report_serializes_to_expected_shape() {
        let posts = [post("chic dress", &["#ootd"], 0.5)];
        let json = serde_json::to_value(analyze_posts(&posts)).expect("serialize");
        assert_eq!(json["top_words"][0], serde_json::json!(["chic", 1]));
        assert_eq!(json["top_hashtags"][0], serde_json::json!(["#ootd", 1]));
        assert_eq!(json["sentiment_distribution"]["positive"], 1.0);
    }
}
