//! Session-token extraction and the capability check shared by all handlers.
//!
//! The token is extracted without touching the network so handlers can run
//! field validation first; the exchange with the session service happens
//! only after validation passes, via [`require_consumer`].

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use pinchat_core::error::CoreError;
use pinchat_session::CapabilitiesMask;

use crate::error::AppError;
use crate::state::AppState;

/// Raw bearer token from the `Authorization` header, if present.
///
/// Extraction never fails; a missing token is reported by
/// [`require_consumer`] after request validation has run.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.strip_prefix("Bearer ").unwrap_or(v).to_string());
        Ok(SessionToken(token))
    }
}

/// Exchange the session token and require the "can consume shows"
/// capability.
///
/// Returns the caller's account id. `action` names the operation for the
/// forbidden message (e.g. `"post comment"`).
pub async fn require_consumer(
    state: &AppState,
    token: &SessionToken,
    action: &str,
) -> Result<String, AppError> {
    let signed_session = token.0.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Missing Authorization header".into(),
        ))
    })?;

    let info = state
        .session
        .exchange_session(signed_session, CapabilitiesMask::can_consume_shows())
        .await?;

    if !info.capabilities.can_consume_shows {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Account {} is not allowed to {action}.",
            info.account_id
        ))));
    }

    Ok(info.account_id)
}
