//! # ember-shared
//!
//! Types shared by every Ember crate: peer identifiers, presence, the
//! message vocabulary spoken with the networking core, and the roster
//! error kinds.

pub mod constants;
pub mod error;
pub mod protocol;
pub mod types;

pub use error::RosterError;
pub use protocol::{CoreCommand, CoreNotification};
pub use types::{FriendStatus, PeerId, PresenceStatus};
