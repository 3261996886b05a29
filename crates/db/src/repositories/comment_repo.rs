//! Repository for the `comments` table.

use sqlx::PgPool;

use pinchat_core::types::Millis;

use crate::models::comment::Comment;

/// Column list for comments queries.
const COLUMNS: &str =
    "comment_id, season_id, episode_id, author_id, content, pin_time_ms, posted_time_ms";

/// Result of an ownership-checked delete.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The comment existed, belonged to the caller, and was deleted.
    Deleted,
    /// No comment with the given id exists.
    NotFound,
    /// The comment exists but belongs to a different account.
    NotAuthor,
}

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a fully-populated comment row.
    pub async fn insert(pool: &PgPool, comment: &Comment) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO comments
                (comment_id, season_id, episode_id, author_id, content, pin_time_ms, posted_time_ms)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&comment.comment_id)
        .bind(&comment.season_id)
        .bind(&comment.episode_id)
        .bind(&comment.author_id)
        .bind(&comment.content)
        .bind(comment.pin_time_ms)
        .bind(comment.posted_time_ms)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, comment_id: &str) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE comment_id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(comment_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment on behalf of its author.
    ///
    /// Runs the existence and ownership checks and the delete inside one
    /// transaction, locking the row so a concurrent delete cannot race the
    /// check. Rows owned by other accounts are left untouched.
    pub async fn delete_as_author(
        pool: &PgPool,
        comment_id: &str,
        account_id: &str,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let author: Option<(String,)> =
            sqlx::query_as("SELECT author_id FROM comments WHERE comment_id = $1 FOR UPDATE")
                .bind(comment_id)
                .fetch_optional(&mut *tx)
                .await?;

        let outcome = match author {
            None => DeleteOutcome::NotFound,
            Some((author_id,)) if author_id != account_id => DeleteOutcome::NotAuthor,
            Some(_) => {
                sqlx::query("DELETE FROM comments WHERE comment_id = $1")
                    .bind(comment_id)
                    .execute(&mut *tx)
                    .await?;
                DeleteOutcome::Deleted
            }
        };

        tx.commit().await?;
        Ok(outcome)
    }

    /// List comments in an episode with pin time strictly after the cursor,
    /// ascending.
    ///
    /// `comment_id` is a secondary sort key so pages are deterministic when
    /// two comments share a pin time.
    pub async fn list_in_episode(
        pool: &PgPool,
        season_id: &str,
        episode_id: &str,
        pin_time_after: Millis,
        limit: i64,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE season_id = $1 AND episode_id = $2 AND pin_time_ms > $3
             ORDER BY pin_time_ms ASC, comment_id ASC
             LIMIT $4"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(season_id)
            .bind(episode_id)
            .bind(pin_time_after)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List an author's comments posted strictly before the cursor, newest
    /// first.
    pub async fn list_posted_by_author(
        pool: &PgPool,
        author_id: &str,
        posted_time_before: Millis,
        limit: i64,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE author_id = $1 AND posted_time_ms < $2
             ORDER BY posted_time_ms DESC, comment_id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(author_id)
            .bind(posted_time_before)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
