//! # ember-roster
//!
//! In-memory friends roster for the Ember client.
//!
//! The crate is synchronous and single-owner: a [`RosterModel`] holds the
//! entries (backed by a [`PeerRecordStore`]) and queues a [`RosterEvent`]
//! for every mutation; a [`RosterView`] borrows the model to present a
//! filtered, sorted projection of it.

pub mod events;
pub mod model;
pub mod store;
pub mod view;

pub use events::RosterEvent;
pub use model::{PeerEntry, RosterModel};
pub use store::{PeerRecord, PeerRecordStore};
pub use view::{RosterFilter, RosterView};
