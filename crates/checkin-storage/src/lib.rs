//! Storage backends for the check-in service.
//!
//! Provides the in-memory implementation of
//! [`checkin_core::traits::CheckinStore`]. Durable persistence lives
//! behind the same trait and is supplied by the deployment environment.

mod memory;

pub use memory::InMemoryCheckinStore;
