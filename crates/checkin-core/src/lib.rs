//! Check-in Core Library
//!
//! Domain types and decision logic for the guided wellness check-in
//! service: a user rates four nervous-system dimensions on 0-100 sliders,
//! the practice selector recommends one of four breathing/relaxation
//! practices, and a post-practice reflection is attached to the record.
//!
//! This crate defines:
//! - Domain types (`DimensionScores`, `PracticeCategory`, `Checkin`, `Reflection`)
//! - The practice selector (`selector::select`), the only non-trivial
//!   decision logic in the system
//! - The storage trait (`CheckinStore`)
//! - Error types and result aliases
//! - Configuration structures
//!
//! # Example
//!
//! ```
//! use checkin_core::selector;
//! use checkin_core::types::{DimensionScores, PracticeCategory};
//!
//! let scores = DimensionScores::new(10, 80, 10, 10).unwrap();
//! assert_eq!(selector::select(&scores), PracticeCategory::Calm);
//! ```

pub mod config;
pub mod error;
pub mod selector;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{CheckinError, CheckinResult};
pub use types::{Checkin, DimensionScores, PracticeCategory, Reflection};
