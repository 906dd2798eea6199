//! Check-in record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::selector;
use crate::types::{DimensionScores, PracticeCategory};

/// Post-practice reflection captured after the audio practice finishes.
///
/// Both fields are free text. The client offers canned choices for
/// `post_feeling` ("Grounded", "Clear", "About the same", "Still tense")
/// but the server stores whatever it is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reflection {
    /// How the user feels after the practice
    pub post_feeling: Option<String>,
    /// The small thing to move into next
    pub intention: Option<String>,
}

/// A single guided check-in: slider input, the recommended practice, and
/// the optional post-practice reflection.
///
/// The recommendation is computed exactly once, at construction, and is
/// never recomputed for the life of the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checkin {
    pub id: Uuid,
    pub user_id: String,
    pub scores: DimensionScores,
    pub recommended_practice: PracticeCategory,
    pub post_feeling: Option<String>,
    pub intention: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Checkin {
    /// Create a new check-in for validated dimension scores.
    ///
    /// Runs the practice selector and stamps `created_at`.
    pub fn new(user_id: impl Into<String>, scores: DimensionScores) -> Self {
        let recommended_practice = selector::select(&scores);
        debug!(
            "Selected {} for scores {:?} ({:?})",
            recommended_practice,
            scores,
            selector::score_breakdown(&scores)
        );
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            recommended_practice,
            scores,
            post_feeling: None,
            intention: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Attach the post-practice reflection and stamp `completed_at`.
    ///
    /// The recommendation is left untouched; only the reflection fields
    /// and the completion timestamp change.
    pub fn complete(&mut self, reflection: Reflection) {
        self.post_feeling = reflection.post_feeling;
        self.intention = reflection.intention;
        self.completed_at = Some(Utc::now());
    }

    /// Whether the post-practice flow has been finished.
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_recommendation_once() {
        let scores = DimensionScores::new(0, 0, 0, 0).unwrap();
        let checkin = Checkin::new("user-1", scores);
        assert_eq!(checkin.recommended_practice, PracticeCategory::DeepRest);
        assert!(checkin.completed_at.is_none());
        assert!(!checkin.is_completed());
    }

    #[test]
    fn test_complete_preserves_recommendation() {
        let scores = DimensionScores::new(10, 90, 10, 10).unwrap();
        let mut checkin = Checkin::new("user-1", scores);
        let before = checkin.recommended_practice;

        checkin.complete(Reflection {
            post_feeling: Some("Grounded".to_string()),
            intention: Some("short walk".to_string()),
        });

        assert_eq!(checkin.recommended_practice, before);
        assert_eq!(checkin.post_feeling.as_deref(), Some("Grounded"));
        assert_eq!(checkin.intention.as_deref(), Some("short walk"));
        assert!(checkin.is_completed());
    }

    #[test]
    fn test_serde_round_trip() {
        let checkin = Checkin::new("user-1", DimensionScores::new(40, 20, 0, 0).unwrap());
        let json = serde_json::to_string(&checkin).unwrap();
        let back: Checkin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, checkin);
        assert!(json.contains("\"recommended_practice\":\"CALM\""));
    }
}
