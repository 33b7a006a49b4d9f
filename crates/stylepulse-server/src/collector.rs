//! One collection run: search, clean, score, persist.

use sqlx::PgPool;
use stylepulse_db::NewPost;
use stylepulse_sentiment::{extract_hashtags, normalize_text, SentimentModel};
use stylepulse_twitter::{SearchParams, Tweet, TwitterClient};

/// Result of a collection run. Failures are logged where they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    Stored(u64),
    Failed,
}

/// Turn fetched tweets into scored rows.
///
/// Hashtags are extracted from the normalized text and the score is taken
/// over the normalized text as well.
#[must_use]
pub fn prepare_posts(tweets: Vec<Tweet>, model: &dyn SentimentModel) -> Vec<NewPost> {
    tweets
        .into_iter()
        .map(|tweet| {
            let clean_text = normalize_text(&tweet.text);
            let hashtags = extract_hashtags(&clean_text);
            let sentiment = model.score(&clean_text);
            NewPost {
                text: tweet.text,
                clean_text,
                author: tweet.author,
                created_at: tweet.created_at,
                hashtags,
                sentiment,
            }
        })
        .collect()
}

/// Fetch one batch of fashion tweets and store it in a single transaction.
///
/// A search failure aborts before anything is written. A store failure rolls
/// the whole batch back. Neither is propagated; both yield
/// [`CollectOutcome::Failed`].
pub async fn collect_posts(
    pool: &PgPool,
    twitter: &TwitterClient,
    model: &dyn SentimentModel,
) -> CollectOutcome {
    let tweets = match twitter.search(&SearchParams::fashion()).await {
        Ok(tweets) => tweets,
        Err(e) => {
            tracing::error!(error = %e, "collector: search failed; run aborted");
            return CollectOutcome::Failed;
        }
    };

    let fetched = tweets.len();
    let posts = prepare_posts(tweets, model);

    match stylepulse_db::insert_posts(pool, &posts).await {
        Ok(stored) => {
            tracing::info!(fetched, stored, "collector: posts stored");
            CollectOutcome::Stored(stored)
        }
        Err(e) => {
            tracing::error!(error = %e, fetched, "collector: insert failed; batch rolled back");
            CollectOutcome::Failed
        }
    }
}
