//! Handlers for the comment service's four operations: post a comment,
//! delete a comment, list comments in an episode (reader-facing), and
//! list an account's posted comments (author-facing).
//!
//! Each handler validates request fields in declaration order, exchanges
//! the session token for an account id and capability check, runs one
//! database call, and shapes the response. The first failing step
//! short-circuits.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use pinchat_core::comments::{validate_content, validate_limit, validate_pin_time};
use pinchat_core::error::CoreError;
use pinchat_core::types::{now_ms, Millis};
use pinchat_db::models::comment::{Comment, PostCommentRequest};
use pinchat_db::repositories::{CommentRepo, DeleteOutcome};

use crate::auth::{require_consumer, SessionToken};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter and response structs
// ---------------------------------------------------------------------------

/// Query parameters for the reader-facing episode listing.
///
/// Required fields are `Option` so presence is checked in declaration
/// order with the service's own error messages.
#[derive(Debug, serde::Deserialize)]
pub struct ListCommentsParams {
    pub season_id: Option<String>,
    pub episode_id: Option<String>,
    /// Exclusive lower bound on pin time; defaults to 0.
    pub pin_time_cursor: Option<Millis>,
    pub limit: Option<i64>,
}

/// Query parameters for the author-facing posted listing.
#[derive(Debug, serde::Deserialize)]
pub struct ListPostedCommentsParams {
    /// Exclusive upper bound on posted time; defaults to now.
    pub posted_time_cursor: Option<Millis>,
    pub limit: Option<i64>,
}

/// Comment as exposed on the reader-facing paths. `posted_time_ms` is not
/// echoed.
#[derive(Debug, serde::Serialize)]
pub struct CommentView {
    pub comment_id: String,
    pub author_id: String,
    pub content: String,
    pub pin_time_ms: Millis,
}

impl From<Comment> for CommentView {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            author_id: c.author_id,
            content: c.content,
            pin_time_ms: c.pin_time_ms,
        }
    }
}

/// Comment as exposed on the author-facing posted listing.
#[derive(Debug, serde::Serialize)]
pub struct PostedCommentView {
    pub comment_id: String,
    pub season_id: String,
    pub episode_id: String,
    pub content: String,
    pub pin_time_ms: Millis,
    pub posted_time_ms: Millis,
}

impl From<Comment> for PostedCommentView {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            season_id: c.season_id,
            episode_id: c.episode_id,
            content: c.content,
            pin_time_ms: c.pin_time_ms,
            posted_time_ms: c.posted_time_ms,
        }
    }
}

/// One page of the episode listing. The cursor is present iff the page is
/// full, signalling more rows may exist.
#[derive(Debug, serde::Serialize)]
pub struct ListCommentsResponse {
    pub comments: Vec<CommentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_time_cursor: Option<Millis>,
}

/// One page of the posted listing.
#[derive(Debug, serde::Serialize)]
pub struct ListPostedCommentsResponse {
    pub comments: Vec<PostedCommentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_time_cursor: Option<Millis>,
}

fn required(field: &'static str) -> AppError {
    AppError::BadRequest(format!("\"{field}\" is required."))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /comments
///
/// Create a comment pinned to a position in an episode. The server
/// assigns the comment id and capture time.
pub async fn post_comment(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<PostCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let season_id = input
        .season_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| required("season_id"))?;
    let episode_id = input
        .episode_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| required("episode_id"))?;
    let content = input.content.ok_or_else(|| required("content"))?;
    validate_content(&content).map_err(AppError::BadRequest)?;
    let pin_time_ms = input.pin_time_ms.ok_or_else(|| required("pin_time_ms"))?;
    validate_pin_time(pin_time_ms).map_err(AppError::BadRequest)?;

    let account_id = require_consumer(&state, &token, "post comment").await?;

    let comment = Comment {
        comment_id: Uuid::new_v4().to_string(),
        season_id,
        episode_id,
        author_id: account_id,
        content,
        pin_time_ms,
        posted_time_ms: now_ms(),
    };
    CommentRepo::insert(&state.pool, &comment).await?;

    tracing::info!(
        account_id = %comment.author_id,
        comment_id = %comment.comment_id,
        season_id = %comment.season_id,
        episode_id = %comment.episode_id,
        "Comment posted"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CommentView::from(comment),
        }),
    ))
}

/// DELETE /comments/{comment_id}
///
/// Delete a comment. Only the comment's author may delete it; the
/// existence and ownership checks run in the same transaction as the
/// delete.
pub async fn delete_comment(
    State(state): State<AppState>,
    token: SessionToken,
    Path(comment_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if comment_id.is_empty() {
        return Err(required("comment_id"));
    }

    let account_id = require_consumer(&state, &token, "delete comment").await?;

    match CommentRepo::delete_as_author(&state.pool, &comment_id, &account_id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(
                account_id = %account_id,
                comment_id = %comment_id,
                "Comment deleted"
            );
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id: comment_id,
        })),
        DeleteOutcome::NotAuthor => Err(AppError::Core(CoreError::Forbidden(format!(
            "Account {account_id} is not allowed to delete comment {comment_id}."
        )))),
    }
}

/// GET /comments?season_id=&episode_id=&pin_time_cursor=&limit=
///
/// List comments in an episode ordered by pin time ascending, keyset
/// paginated on the pin time.
pub async fn list_comments(
    State(state): State<AppState>,
    token: SessionToken,
    Query(params): Query<ListCommentsParams>,
) -> AppResult<impl IntoResponse> {
    let season_id = params
        .season_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| required("season_id"))?;
    let episode_id = params
        .episode_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| required("episode_id"))?;
    let limit = params.limit.ok_or_else(|| required("limit"))?;
    validate_limit(limit).map_err(AppError::BadRequest)?;
    let pin_time_cursor = params.pin_time_cursor.unwrap_or(0.0);

    require_consumer(&state, &token, "list comments").await?;

    let rows =
        CommentRepo::list_in_episode(&state.pool, &season_id, &episode_id, pin_time_cursor, limit)
            .await?;

    let pin_time_cursor = if rows.len() as i64 == limit {
        rows.last().map(|c| c.pin_time_ms)
    } else {
        None
    };

    Ok(Json(DataResponse {
        data: ListCommentsResponse {
            comments: rows.into_iter().map(CommentView::from).collect(),
            pin_time_cursor,
        },
    }))
}

/// GET /comments/posted?posted_time_cursor=&limit=
///
/// List the caller's own comments, newest first, keyset paginated on the
/// posted time.
pub async fn list_posted_comments(
    State(state): State<AppState>,
    token: SessionToken,
    Query(params): Query<ListPostedCommentsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.ok_or_else(|| required("limit"))?;
    validate_limit(limit).map_err(AppError::BadRequest)?;
    let posted_time_cursor = params.posted_time_cursor.unwrap_or_else(now_ms);

    let account_id = require_consumer(&state, &token, "list posted comments").await?;

    let rows =
        CommentRepo::list_posted_by_author(&state.pool, &account_id, posted_time_cursor, limit)
            .await?;

    let posted_time_cursor = if rows.len() as i64 == limit {
        rows.last().map(|c| c.posted_time_ms)
    } else {
        None
    };

    Ok(Json(DataResponse {
        data: ListPostedCommentsResponse {
            comments: rows.into_iter().map(PostedCommentView::from).collect(),
            posted_time_cursor,
        },
    }))
}
