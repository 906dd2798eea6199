//! Practice category type.

use serde::{Deserialize, Serialize};

/// Recommended breathing/relaxation practice.
///
/// Closed set of four practices. The wire representation uses the
/// upper-case labels stored alongside historical check-in records
/// (`"CALM"`, `"GROUND"`, `"ACTIVATE"`, `"DEEP_REST"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PracticeCategory {
    /// Down-regulating breath work for acute anxiety
    Calm,
    /// Somatic grounding for rumination and scatter
    Ground,
    /// Energizing activation practice
    Activate,
    /// Extended rest practice for exhaustion
    DeepRest,
}

impl PracticeCategory {
    /// Wire label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeCategory::Calm => "CALM",
            PracticeCategory::Ground => "GROUND",
            PracticeCategory::Activate => "ACTIVATE",
            PracticeCategory::DeepRest => "DEEP_REST",
        }
    }

    /// Human-readable practice name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PracticeCategory::Calm => "Calming Breath",
            PracticeCategory::Ground => "Grounding Practice",
            PracticeCategory::Activate => "Gentle Activation",
            PracticeCategory::DeepRest => "Deep Rest",
        }
    }

    /// All categories in selection order.
    ///
    /// This order is the tie-break order used by the selector: when two
    /// weighted scores are exactly equal, the earlier category wins.
    pub fn all() -> &'static [PracticeCategory] {
        &[
            PracticeCategory::Calm,
            PracticeCategory::Ground,
            PracticeCategory::Activate,
            PracticeCategory::DeepRest,
        ]
    }
}

impl std::fmt::Display for PracticeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
