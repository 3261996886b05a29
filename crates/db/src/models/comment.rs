//! Comment model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pinchat_core::types::Millis;

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: String,
    pub season_id: String,
    pub episode_id: String,
    pub author_id: String,
    pub content: String,
    /// Position within the episode's runtime the comment is anchored to.
    pub pin_time_ms: Millis,
    /// Wall-clock time the comment was created.
    pub posted_time_ms: Millis,
}

/// DTO for posting a new comment.
///
/// Fields are `Option` so presence checks run in declaration order and
/// produce the service's own validation errors instead of axum's generic
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct PostCommentRequest {
    pub season_id: Option<String>,
    pub episode_id: Option<String>,
    pub content: Option<String>,
    pub pin_time_ms: Option<Millis>,
}
