//! Client for the external session/capability exchange service.
//!
//! Every request handler trades the caller's signed session token for an
//! account id plus capability flags before touching the database. The
//! wire contract is fixed by the session service and uses camelCase field
//! names; everything else in this workspace speaks snake_case.

pub mod client;
pub mod mock;
pub mod types;

pub use client::{HttpSessionClient, SessionClient};
pub use types::{Capabilities, CapabilitiesMask, SessionError, SessionInfo};
