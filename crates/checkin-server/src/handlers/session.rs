//! Session method handlers.

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::protocol::{error_codes, JsonRpcId, JsonRpcResponse};

use super::handlers::Handlers;

#[derive(Debug, Deserialize)]
struct OpenSessionParams {
    user_id: String,
}

#[derive(Debug, Deserialize)]
struct SessionParams {
    session_token: String,
}

impl Handlers {
    /// session/open - issue a session token for a user id.
    pub(super) fn handle_session_open(
        &self,
        id: Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: OpenSessionParams = match Self::parse_params(&id, params) {
            Ok(p) => p,
            Err(response) => return response,
        };

        if params.user_id.trim().is_empty() {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "user_id must not be empty",
            );
        }

        let token = self.sessions.open(&params.user_id);
        info!("Session opened for user {}", params.user_id);
        JsonRpcResponse::success(
            id,
            json!({
                "session_token": token,
                "user_id": params.user_id,
            }),
        )
    }

    /// session/user - resolve the current session to its user id.
    pub(super) fn handle_session_user(
        &self,
        id: Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: SessionParams = match Self::parse_params(&id, params) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let user_id = match self.authorize(&id, &params.session_token) {
            Ok(user_id) => user_id,
            Err(response) => return response,
        };

        JsonRpcResponse::success(id, json!({ "user_id": user_id }))
    }
}
