//! Request dispatch logic for the check-in API.

use tracing::debug;

use crate::protocol::{error_codes, methods, JsonRpcRequest, JsonRpcResponse};

use super::handlers::Handlers;

impl Handlers {
    /// Dispatch a request to the appropriate handler.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Dispatching method: {}", request.method);

        match request.method.as_str() {
            methods::SESSION_OPEN => self.handle_session_open(request.id, request.params),
            methods::SESSION_USER => self.handle_session_user(request.id, request.params),

            methods::CHECKINS_CREATE => {
                self.handle_checkins_create(request.id, request.params).await
            }
            methods::CHECKINS_COMPLETE => {
                self.handle_checkins_complete(request.id, request.params).await
            }
            methods::CHECKINS_LIST => self.handle_checkins_list(request.id, request.params).await,
            methods::CHECKINS_LAST => self.handle_checkins_last(request.id, request.params).await,

            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }
}
