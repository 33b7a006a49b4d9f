//! Database operations for the `fashion_posts` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A scored post ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub text: String,
    pub clean_text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub hashtags: Vec<String>,
    pub sentiment: f64,
}

/// A row from the `fashion_posts` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub text: String,
    pub clean_text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub hashtags: Vec<String>,
    pub sentiment: f64,
    pub collected_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Inserts a batch of posts in a single transaction and returns how many rows
/// were written.
///
/// Either every post is stored or none is. An empty batch is a no-op.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert or the commit fails; the
/// transaction is rolled back when dropped.
pub async fn insert_posts(pool: &PgPool, posts: &[NewPost]) -> Result<u64, DbError> {
    if posts.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0_u64;

    for post in posts {
        let result = sqlx::query(
            "INSERT INTO fashion_posts \
                 (text, clean_text, author, created_at, hashtags, sentiment) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&post.text)
        .bind(&post.clean_text)
        .bind(&post.author)
        .bind(post.created_at)
        .bind(&post.hashtags)
        .bind(post.sentiment)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Returns up to `limit` posts, most recently created first.
///
/// Posts sharing a `created_at` are ordered by insertion (`id`) descending so
/// the window is stable between calls.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recent_posts(pool: &PgPool, limit: i64) -> Result<Vec<PostRow>, DbError> {
    let rows = sqlx::query_as::<_, PostRow>(
        "SELECT id, text, clean_text, author, created_at, hashtags, sentiment, collected_at \
         FROM fashion_posts \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns the total number of stored posts.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_posts(pool: &PgPool) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fashion_posts")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
