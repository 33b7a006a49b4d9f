//! Text cleaning, sentiment scoring, and trend aggregation for stylepulse.
//!
//! Everything in this crate is pure: the normalizer, hashtag extractor and
//! lexicon scorer feed the collector, and [`analyze_posts`] turns a window of
//! stored posts into a [`TrendReport`].

mod lexicon;
pub mod normalize;
pub mod scorer;
pub mod trends;

pub use normalize::{extract_hashtags, normalize_text};
pub use scorer::{compound_score, LexiconModel, SentimentModel};
pub use trends::{analyze_posts, AnalyzedPost, SentimentBucket, TrendReport};
