//! In-memory check-in store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use checkin_core::error::CheckinResult;
use checkin_core::traits::CheckinStore;
use checkin_core::types::{Checkin, Reflection};

/// Process-local [`CheckinStore`] backed by concurrent hash maps.
///
/// Suitable for development, tests, and single-node deployments where
/// records do not need to outlive the process. Safe to share across
/// tasks behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryCheckinStore {
    /// All records by ID
    data: DashMap<Uuid, Checkin>,
    /// Per-user index, IDs in creation order
    by_user: DashMap<String, Vec<Uuid>>,
}

impl InMemoryCheckinStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckinStore for InMemoryCheckinStore {
    async fn create(&self, checkin: Checkin) -> CheckinResult<Uuid> {
        let id = checkin.id;
        debug!("Storing check-in {} for user {}", id, checkin.user_id);
        self.by_user
            .entry(checkin.user_id.clone())
            .or_default()
            .push(id);
        self.data.insert(id, checkin);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> CheckinResult<Option<Checkin>> {
        Ok(self.data.get(&id).map(|r| r.clone()))
    }

    async fn complete(&self, id: Uuid, reflection: Reflection) -> CheckinResult<Option<Checkin>> {
        match self.data.get_mut(&id) {
            Some(mut entry) => {
                entry.complete(reflection);
                debug!("Completed check-in {}", id);
                Ok(Some(entry.clone()))
            }
            None => {
                debug!("Complete failed: check-in {} not found", id);
                Ok(None)
            }
        }
    }

    async fn list_for_user(&self, user_id: &str) -> CheckinResult<Vec<Checkin>> {
        let ids = match self.by_user.get(user_id) {
            Some(ids) => ids.clone(),
            None => return Ok(Vec::new()),
        };
        // Creation order, reversed: newest first.
        let checkins = ids
            .iter()
            .rev()
            .filter_map(|id| self.data.get(id).map(|r| r.clone()))
            .collect();
        Ok(checkins)
    }

    async fn last_for_user(&self, user_id: &str) -> CheckinResult<Option<Checkin>> {
        let last_id = self
            .by_user
            .get(user_id)
            .and_then(|ids| ids.last().copied());
        Ok(last_id.and_then(|id| self.data.get(&id).map(|r| r.clone())))
    }

    async fn count(&self) -> CheckinResult<usize> {
        Ok(self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::types::{DimensionScores, PracticeCategory};

    fn checkin(user: &str, grounded: u8, calm: u8, present: u8, energized: u8) -> Checkin {
        Checkin::new(
            user,
            DimensionScores::new(grounded, calm, present, energized).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let store = InMemoryCheckinStore::new();
        let record = checkin("user-1", 10, 90, 10, 10);
        let id = store.create(record.clone()).await.unwrap();

        let stored = store.get(id).await.unwrap().expect("record should exist");
        assert_eq!(stored, record);
        assert_eq!(stored.recommended_practice, PracticeCategory::Calm);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let store = InMemoryCheckinStore::new();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_complete_fills_reflection() {
        let store = InMemoryCheckinStore::new();
        let id = store.create(checkin("user-1", 0, 0, 0, 0)).await.unwrap();

        let updated = store
            .complete(
                id,
                Reflection {
                    post_feeling: Some("Clear".to_string()),
                    intention: Some("make tea".to_string()),
                },
            )
            .await
            .unwrap()
            .expect("record should exist");

        assert_eq!(updated.post_feeling.as_deref(), Some("Clear"));
        assert_eq!(updated.intention.as_deref(), Some("make tea"));
        assert!(updated.completed_at.is_some());
        // Recommendation is untouched by completion.
        assert_eq!(updated.recommended_practice, PracticeCategory::DeepRest);

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_complete_unknown_id_returns_none() {
        let store = InMemoryCheckinStore::new();
        let result = store.complete(Uuid::new_v4(), Reflection::default()).await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_per_user() {
        let store = InMemoryCheckinStore::new();
        let first = store.create(checkin("user-1", 0, 0, 0, 0)).await.unwrap();
        let second = store.create(checkin("user-1", 10, 90, 10, 10)).await.unwrap();
        store.create(checkin("user-2", 0, 0, 0, 0)).await.unwrap();

        let listed = store.list_for_user("user-1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second);
        assert_eq!(listed[1].id, first);

        assert!(store.list_for_user("user-3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_last_for_user() {
        let store = InMemoryCheckinStore::new();
        assert!(store.last_for_user("user-1").await.unwrap().is_none());

        store.create(checkin("user-1", 0, 0, 0, 0)).await.unwrap();
        let latest = store.create(checkin("user-1", 50, 50, 50, 50)).await.unwrap();

        let last = store.last_for_user("user-1").await.unwrap().unwrap();
        assert_eq!(last.id, latest);
    }
}
