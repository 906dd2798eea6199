//! Session handling at the service boundary.
//!
//! Real identity lives outside this service; the registry hands out
//! opaque tokens for caller-asserted user ids and resolves them on every
//! check-in method. Swapping in a real auth provider replaces only
//! `open`; the rest of the server sees user ids.

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

/// Token-to-user registry for open sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    tokens: DashMap<String, String>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a user, returning a fresh opaque token.
    pub fn open(&self, user_id: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(token.clone(), user_id.to_string());
        debug!("Opened session for user {}", user_id);
        token
    }

    /// Resolve a token to its user id, or None if unknown.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.get(token).map(|r| r.clone())
    }
}
