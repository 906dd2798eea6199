//! Core traits.

mod checkin_store;

pub use checkin_store::CheckinStore;
