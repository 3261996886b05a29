//! Route tree construction.

pub mod comments;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /comments            POST list, GET list-in-episode
/// /comments/posted     GET caller's posted comments
/// /comments/{id}       DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/comments", comments::router())
}
