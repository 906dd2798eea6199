//! Check-in store trait for persistent storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CheckinResult;
use crate::types::{Checkin, Reflection};

/// Persistent check-in storage abstraction.
///
/// The store never touches the recommendation: the category is computed
/// by the selector at record construction and is immutable afterwards.
/// `complete` may only fill the reflection fields and the completion
/// timestamp.
///
/// # Example
///
/// ```rust,ignore
/// use checkin_core::traits::CheckinStore;
///
/// let store = InMemoryCheckinStore::new();
/// let id = store.create(checkin).await?;
/// let stored = store.get(id).await?;
/// ```
#[async_trait]
pub trait CheckinStore: Send + Sync {
    /// Store a new check-in, returning its ID.
    async fn create(&self, checkin: Checkin) -> CheckinResult<Uuid>;

    /// Retrieve a check-in by ID, returns None if not found.
    async fn get(&self, id: Uuid) -> CheckinResult<Option<Checkin>>;

    /// Attach a post-practice reflection to an existing check-in.
    ///
    /// Returns the updated record, or None if the ID is unknown.
    async fn complete(&self, id: Uuid, reflection: Reflection) -> CheckinResult<Option<Checkin>>;

    /// All check-ins for a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> CheckinResult<Vec<Checkin>>;

    /// The user's most recent check-in, if any.
    async fn last_for_user(&self, user_id: &str) -> CheckinResult<Option<Checkin>>;

    /// Total stored check-in count.
    async fn count(&self) -> CheckinResult<usize>;
}
