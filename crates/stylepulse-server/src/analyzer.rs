//! Store-backed trend analysis.

use sqlx::PgPool;
use stylepulse_core::ANALYSIS_WINDOW;
use stylepulse_db::PostRow;
use stylepulse_sentiment::{analyze_posts, AnalyzedPost, TrendReport};

/// Build a trend report over the most recent [`ANALYSIS_WINDOW`] posts.
///
/// Returns `None` if the store cannot be read; the error is logged here.
/// An empty store yields an empty report.
pub async fn analyze_trends(pool: &PgPool) -> Option<TrendReport> {
    let rows = match stylepulse_db::list_recent_posts(pool, ANALYSIS_WINDOW).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "analyzer: failed to load recent posts");
            return None;
        }
    };

    let posts: Vec<AnalyzedPost> = rows.into_iter().map(into_analyzed).collect();
    let report = analyze_posts(&posts);
    tracing::debug!(posts = posts.len(), "analyzer: report built");
    Some(report)
}

fn into_analyzed(row: PostRow) -> AnalyzedPost {
    AnalyzedPost {
        clean_text: row.clean_text,
        hashtags: row.hashtags,
        sentiment: row.sentiment,
    }
}
