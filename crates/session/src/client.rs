//! Session exchange client trait and its HTTP implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::types::{CapabilitiesMask, SessionError, SessionInfo};

/// Exchanges a signed session token for an account identity and the
/// requested capability flags.
///
/// Handlers depend on this trait so integration tests can inject
/// [`crate::mock::MockSessionClient`] instead of a live service.
#[async_trait]
pub trait SessionClient: Send + Sync {
    async fn exchange_session(
        &self,
        signed_session: &str,
        mask: CapabilitiesMask,
    ) -> Result<SessionInfo, SessionError>;
}

/// Request body for the exchange endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeRequest<'a> {
    signed_session: &'a str,
    capabilities_mask: CapabilitiesMask,
}

/// `reqwest`-backed client talking to the real session service.
pub struct HttpSessionClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpSessionClient {
    /// Create a client against the given service base URL
    /// (e.g. `http://user-session:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    async fn exchange_session(
        &self,
        signed_session: &str,
        mask: CapabilitiesMask,
    ) -> Result<SessionInfo, SessionError> {
        let url = format!("{}/exchangeSessionAndCheckCapability", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ExchangeRequest {
                signed_session,
                capabilities_mask: mask,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Session exchange rejected");
            return Err(SessionError::Rejected(status.as_u16()));
        }

        response
            .json::<SessionInfo>()
            .await
            .map_err(|e| SessionError::Malformed(e.to_string()))
    }
}
