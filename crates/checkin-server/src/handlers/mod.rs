//! Request handlers for check-in API methods.
//!
//! Supported methods:
//! - Session: session/open, session/user
//! - Check-ins: checkins/create, checkins/complete, checkins/list, checkins/last

mod checkins;
mod dispatch;
#[allow(clippy::module_inception)]
mod handlers;
mod session;


pub use self::handlers::Handlers;
