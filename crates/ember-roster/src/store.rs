//! Per-peer record storage.
//!
//! A plain map from [`PeerId`] to the peer's display name and presence.
//! Lookups never fail: an unknown id yields an empty record so callers can
//! query unconditionally.

use std::collections::HashMap;

use ember_shared::types::{PeerId, PresenceStatus};

/// Display state kept for a single peer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerRecord {
    pub display_name: String,
    pub status: PresenceStatus,
}

#[derive(Debug, Clone, Default)]
pub struct PeerRecordStore {
    records: HashMap<PeerId, PeerRecord>,
}

impl PeerRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record for `id`, or an empty Offline record if unknown.
    pub fn get(&self, id: &PeerId) -> PeerRecord {
        self.records.get(id).cloned().unwrap_or_default()
    }

    /// Insert or replace the record for `id`.
    pub fn set(&mut self, id: PeerId, record: PeerRecord) {
        self.records.insert(id, record);
    }

    /// Remove the record for `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: &PeerId) {
        self.records.remove(id);
    }

    pub fn contains(&self, id: &PeerId) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
