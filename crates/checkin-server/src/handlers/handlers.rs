//! Handlers struct definition and constructors.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use checkin_core::traits::CheckinStore;

use crate::protocol::{error_codes, JsonRpcId, JsonRpcResponse};
use crate::session::SessionRegistry;

/// Request handlers for the check-in JSON-RPC API.
pub struct Handlers {
    /// Check-in record store.
    pub(in crate::handlers) store: Arc<dyn CheckinStore>,

    /// Open sessions, resolved on every check-in method.
    pub(in crate::handlers) sessions: Arc<SessionRegistry>,
}

impl Handlers {
    /// Create handlers over a store and session registry.
    pub fn new(store: Arc<dyn CheckinStore>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }

    /// Deserialize method params, answering INVALID_PARAMS on failure.
    pub(in crate::handlers) fn parse_params<T: DeserializeOwned>(
        id: &Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> Result<T, JsonRpcResponse> {
        let params = params.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(params).map_err(|e| {
            JsonRpcResponse::error(
                id.clone(),
                error_codes::INVALID_PARAMS,
                format!("Invalid params: {}", e),
            )
        })
    }

    /// Resolve the session token to the acting user id.
    ///
    /// Every check-in method goes through here; an unknown token gets an
    /// UNAUTHORIZED response and never reaches the store.
    pub(in crate::handlers) fn authorize(
        &self,
        id: &Option<JsonRpcId>,
        session_token: &str,
    ) -> Result<String, JsonRpcResponse> {
        self.sessions.resolve(session_token).ok_or_else(|| {
            JsonRpcResponse::error(
                id.clone(),
                error_codes::UNAUTHORIZED,
                "Unknown or expired session token",
            )
        })
    }
}
