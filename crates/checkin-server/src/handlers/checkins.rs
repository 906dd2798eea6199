//! Check-in method handlers.

use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use checkin_core::types::{Checkin, DimensionScores, Reflection};

use crate::protocol::{error_codes, JsonRpcId, JsonRpcResponse};

use super::handlers::Handlers;

#[derive(Debug, Deserialize)]
struct CreateCheckinParams {
    session_token: String,
    grounded: u8,
    calm: u8,
    present: u8,
    energized: u8,
}

#[derive(Debug, Deserialize)]
struct CompleteCheckinParams {
    session_token: String,
    id: Uuid,
    #[serde(default)]
    post_feeling: Option<String>,
    #[serde(default)]
    intention: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserScopedParams {
    session_token: String,
}

impl Handlers {
    /// checkins/create - validate slider values, run the selector once,
    /// and persist the new record.
    pub(super) async fn handle_checkins_create(
        &self,
        id: Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: CreateCheckinParams = match Self::parse_params(&id, params) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let user_id = match self.authorize(&id, &params.session_token) {
            Ok(user_id) => user_id,
            Err(response) => return response,
        };

        // Range validation happens here, before the selector ever sees
        // the values.
        let scores = match DimensionScores::new(
            params.grounded,
            params.calm,
            params.present,
            params.energized,
        ) {
            Ok(scores) => scores,
            Err(e) => {
                warn!("Rejected check-in from {}: {}", user_id, e);
                return JsonRpcResponse::error(id, error_codes::VALIDATION_ERROR, e.to_string());
            }
        };

        let checkin = Checkin::new(user_id, scores);
        info!(
            "Check-in {} created, recommending {}",
            checkin.id, checkin.recommended_practice
        );

        match self.store.create(checkin.clone()).await {
            Ok(_) => JsonRpcResponse::success(id, json!(checkin)),
            Err(e) => JsonRpcResponse::error(id, error_codes::STORAGE_ERROR, e.to_string()),
        }
    }

    /// checkins/complete - attach the post-practice reflection.
    ///
    /// Only the owning user may complete a record; the recommendation is
    /// never recomputed.
    pub(super) async fn handle_checkins_complete(
        &self,
        id: Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: CompleteCheckinParams = match Self::parse_params(&id, params) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let user_id = match self.authorize(&id, &params.session_token) {
            Ok(user_id) => user_id,
            Err(response) => return response,
        };

        let existing = match self.store.get(params.id).await {
            Ok(Some(checkin)) => checkin,
            Ok(None) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::CHECKIN_NOT_FOUND,
                    format!("Check-in not found: {}", params.id),
                );
            }
            Err(e) => {
                return JsonRpcResponse::error(id, error_codes::STORAGE_ERROR, e.to_string())
            }
        };

        if existing.user_id != user_id {
            warn!(
                "User {} attempted to complete check-in {} owned by {}",
                user_id, params.id, existing.user_id
            );
            return JsonRpcResponse::error(
                id,
                error_codes::UNAUTHORIZED,
                "Check-in belongs to another user",
            );
        }

        let reflection = Reflection {
            post_feeling: params.post_feeling,
            intention: params.intention,
        };

        match self.store.complete(params.id, reflection).await {
            Ok(Some(updated)) => JsonRpcResponse::success(id, json!(updated)),
            Ok(None) => JsonRpcResponse::error(
                id,
                error_codes::CHECKIN_NOT_FOUND,
                format!("Check-in not found: {}", params.id),
            ),
            Err(e) => JsonRpcResponse::error(id, error_codes::STORAGE_ERROR, e.to_string()),
        }
    }

    /// checkins/list - the caller's check-ins, newest first.
    pub(super) async fn handle_checkins_list(
        &self,
        id: Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: UserScopedParams = match Self::parse_params(&id, params) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let user_id = match self.authorize(&id, &params.session_token) {
            Ok(user_id) => user_id,
            Err(response) => return response,
        };

        match self.store.list_for_user(&user_id).await {
            Ok(checkins) => JsonRpcResponse::success(id, json!(checkins)),
            Err(e) => JsonRpcResponse::error(id, error_codes::STORAGE_ERROR, e.to_string()),
        }
    }

    /// checkins/last - the caller's most recent check-in, or null.
    pub(super) async fn handle_checkins_last(
        &self,
        id: Option<JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: UserScopedParams = match Self::parse_params(&id, params) {
            Ok(p) => p,
            Err(response) => return response,
        };

        let user_id = match self.authorize(&id, &params.session_token) {
            Ok(user_id) => user_id,
            Err(response) => return response,
        };

        match self.store.last_for_user(&user_id).await {
            Ok(last) => JsonRpcResponse::success(id, json!(last)),
            Err(e) => JsonRpcResponse::error(id, error_codes::STORAGE_ERROR, e.to_string()),
        }
    }
}
