//! Core domain types.

mod checkin;
mod dimensions;
mod practice;

pub use checkin::{Checkin, Reflection};
pub use dimensions::{DimensionScores, ValidationError, SCALE_MAX};
pub use practice::PracticeCategory;
