//! Route definitions for comments.
//!
//! Mounted at `/comments` by `api_routes()`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Comment routes.
///
/// ```text
/// POST   /               -> post_comment
/// GET    /               -> list_comments (?season_id, episode_id, pin_time_cursor, limit)
/// GET    /posted         -> list_posted_comments (?posted_time_cursor, limit)
/// DELETE /{comment_id}   -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(comments::list_comments).post(comments::post_comment),
        )
        .route("/posted", get(comments::list_posted_comments))
        .route("/{comment_id}", delete(comments::delete_comment))
}
