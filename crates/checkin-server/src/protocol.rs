//! JSON-RPC 2.0 protocol types for the check-in API.

use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<JsonRpcId>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonRpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC ID (can be string, number, or null per JSON-RPC 2.0 spec).
///
/// The `Null` variant handles `"id": null` in requests, which is a valid
/// (if unusual) request ID per the spec, distinct from absent `"id"`
/// (notification).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum JsonRpcId {
    String(String),
    Number(i64),
    Null,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<JsonRpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<JsonRpcId>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

/// Method names exposed by the server.
pub mod methods {
    pub const SESSION_OPEN: &str = "session/open";
    pub const SESSION_USER: &str = "session/user";
    pub const CHECKINS_CREATE: &str = "checkins/create";
    pub const CHECKINS_COMPLETE: &str = "checkins/complete";
    pub const CHECKINS_LIST: &str = "checkins/list";
    pub const CHECKINS_LAST: &str = "checkins/last";
}

/// Standard JSON-RPC error codes plus check-in specific codes.
#[allow(dead_code)]
pub mod error_codes {
    // Standard JSON-RPC 2.0 error codes
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Check-in specific error codes (-32001 to -32099)
    /// Missing or expired session token, or acting on another user's record
    pub const UNAUTHORIZED: i32 = -32001;
    /// Check-in ID not found
    pub const CHECKIN_NOT_FOUND: i32 = -32002;
    /// Slider value outside [0, 100]
    pub const VALIDATION_ERROR: i32 = -32003;
    /// Store operation failed
    pub const STORAGE_ERROR: i32 = -32004;
}
