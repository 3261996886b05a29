//! Wire types for the session exchange contract.

use serde::{Deserialize, Serialize};

/// Capability flags the caller asks the session service to check.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesMask {
    pub check_can_consume_shows: bool,
}

impl CapabilitiesMask {
    /// Mask requesting the "can consume shows" capability, required by all
    /// four comment operations.
    pub fn can_consume_shows() -> Self {
        Self {
            check_can_consume_shows: true,
        }
    }
}

/// Capability flags as granted by the session service.
///
/// Flags not named in the request mask come back absent; `default` keeps
/// absent meaning denied.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(default)]
    pub can_consume_shows: bool,
}

/// Authenticated identity returned by a successful exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub account_id: String,
    pub capabilities: Capabilities,
}

/// Failure modes of the session exchange.
///
/// All variants are surfaced to the caller as an authentication failure;
/// a broken session service must never default anyone to authenticated.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Session service rejected the session (status {0})")]
    Rejected(u16),

    #[error("Session service returned a malformed response: {0}")]
    Malformed(String),
}
