//! Domain models shared across Roster crates.
//!
//! Records mirror the two database tables; request types carry the
//! validation rules applied at the API edge.

pub mod login;
pub mod user;

/// Re-export all model types for convenience.
pub use login::*;
pub use user::*;
