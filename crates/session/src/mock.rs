//! In-memory session client for tests.

use async_trait::async_trait;

use crate::client::SessionClient;
use crate::types::{Capabilities, CapabilitiesMask, SessionError, SessionInfo};

/// Canned-response session client.
///
/// Returns the configured account and capabilities for any token, or a
/// rejection when `fail` is set.
pub struct MockSessionClient {
    pub account_id: String,
    pub can_consume_shows: bool,
    pub fail: bool,
}

impl MockSessionClient {
    /// A client that authenticates every request as `account_id` with the
    /// consume-shows capability granted.
    pub fn allowing(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            can_consume_shows: true,
            fail: false,
        }
    }

    /// A client that authenticates but denies the capability.
    pub fn without_capability(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            can_consume_shows: false,
            fail: false,
        }
    }

    /// A client whose exchange always fails.
    pub fn failing() -> Self {
        Self {
            account_id: String::new(),
            can_consume_shows: false,
            fail: true,
        }
    }
}

#[async_trait]
impl SessionClient for MockSessionClient {
    async fn exchange_session(
        &self,
        _signed_session: &str,
        mask: CapabilitiesMask,
    ) -> Result<SessionInfo, SessionError> {
        if self.fail {
            return Err(SessionError::Rejected(401));
        }
        Ok(SessionInfo {
            account_id: self.account_id.clone(),
            capabilities: Capabilities {
                can_consume_shows: mask.check_can_consume_shows && self.can_consume_shows,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allowing_grants_requested_capability() {
        let client = MockSessionClient::allowing("account1");
        let info = client
            .exchange_session("token", CapabilitiesMask::can_consume_shows())
            .await
            .unwrap();
        assert_eq!(info.account_id, "account1");
        assert!(info.capabilities.can_consume_shows);
    }

    #[tokio::test]
    async fn unrequested_capability_stays_denied() {
        let client = MockSessionClient::allowing("account1");
        let info = client
            .exchange_session("token", CapabilitiesMask::default())
            .await
            .unwrap();
        assert!(!info.capabilities.can_consume_shows);
    }

    #[tokio::test]
    async fn failing_client_rejects() {
        let client = MockSessionClient::failing();
        let result = client
            .exchange_session("token", CapabilitiesMask::can_consume_shows())
            .await;
        assert!(result.is_err());
    }
}
