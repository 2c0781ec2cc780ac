//! Ordered friends roster.
//!
//! Entries keep insertion order and are indexed by [`PeerId`] for O(1)
//! lookup. Every successful mutation updates the [`PeerRecordStore`] and the
//! entry together, then queues a [`RosterEvent`] that the owner drains with
//! [`RosterModel::take_events`].

use std::collections::HashMap;

use tracing::debug;

use ember_shared::error::RosterError;
use ember_shared::types::{PeerId, PresenceStatus};

use crate::events::RosterEvent;
use crate::store::{PeerRecord, PeerRecordStore};

/// A single friend in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerEntry {
    id: PeerId,
    display_name: String,
    status: PresenceStatus,
}

impl PeerEntry {
    pub fn id(&self) -> &PeerId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn status(&self) -> PresenceStatus {
        self.status
    }

    /// Tooltip text shown for the entry.
    pub fn tooltip(&self) -> String {
        format!("User ID: {}", self.id)
    }
}

#[derive(Debug, Default)]
pub struct RosterModel {
    entries: Vec<PeerEntry>,
    positions: HashMap<PeerId, usize>,
    store: PeerRecordStore,
    pending: Vec<RosterEvent>,
}

impl RosterModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new Offline entry for `id`.
    pub fn add_peer(&mut self, id: PeerId, display_name: impl Into<String>) -> Result<(), RosterError> {
        if self.positions.contains_key(&id) {
            return Err(RosterError::AlreadyExists(id));
        }

        let display_name = display_name.into();
        self.store.set(
            id.clone(),
            PeerRecord {
                display_name: display_name.clone(),
                status: PresenceStatus::Offline,
            },
        );
        self.positions.insert(id.clone(), self.entries.len());
        self.entries.push(PeerEntry {
            id: id.clone(),
            display_name: display_name.clone(),
            status: PresenceStatus::Offline,
        });

        debug!(peer = %id, name = %display_name, "Added peer to roster");
        self.pending.push(RosterEvent::PeerAdded { id, display_name });
        Ok(())
    }

    pub fn remove_peer(&mut self, id: &PeerId) -> Result<(), RosterError> {
        let position = self
            .positions
            .remove(id)
            .ok_or_else(|| RosterError::NotFound(id.clone()))?;

        self.entries.remove(position);
        for entry in &self.entries[position..] {
            if let Some(pos) = self.positions.get_mut(&entry.id) {
                *pos -= 1;
            }
        }
        self.store.remove(id);

        debug!(peer = %id, "Removed peer from roster");
        self.pending.push(RosterEvent::PeerRemoved { id: id.clone() });
        Ok(())
    }

    /// Change the display name of `id`. Renaming to the current name is a
    /// no-op and queues nothing.
    pub fn rename_peer(&mut self, id: &PeerId, display_name: impl Into<String>) -> Result<(), RosterError> {
        let display_name = display_name.into();
        let entry = self.entry_mut(id)?;
        if entry.display_name == display_name {
            return Ok(());
        }
        entry.display_name = display_name.clone();
        let status = entry.status;

        self.store.set(
            id.clone(),
            PeerRecord {
                display_name: display_name.clone(),
                status,
            },
        );

        debug!(peer = %id, name = %display_name, "Renamed peer");
        self.pending.push(RosterEvent::PeerRenamed {
            id: id.clone(),
            display_name,
        });
        Ok(())
    }

    /// Set the presence of `id`. Always queues an event, even when the
    /// status is unchanged.
    pub fn set_status(&mut self, id: &PeerId, status: PresenceStatus) -> Result<(), RosterError> {
        let entry = self.entry_mut(id)?;
        entry.status = status;
        let display_name = entry.display_name.clone();

        self.store.set(id.clone(), PeerRecord { display_name, status });

        debug!(peer = %id, status = ?status, "Updated peer status");
        self.pending.push(RosterEvent::PeerStatusChanged {
            id: id.clone(),
            status,
        });
        Ok(())
    }

    pub fn find(&self, id: &PeerId) -> Option<&PeerEntry> {
        self.positions.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &PeerId) -> bool {
        self.positions.contains_key(id)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[PeerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &PeerRecordStore {
        &self.store
    }

    /// Drain the change notifications queued since the last call.
    pub fn take_events(&mut self) -> Vec<RosterEvent> {
        std::mem::take(&mut self.pending)
    }

    fn entry_mut(&mut self, id: &PeerId) -> Result<&mut PeerEntry, RosterError> {
        match self.positions.get(id) {
            Some(&pos) => Ok(&mut self.entries[pos]),
            None => Err(RosterError::NotFound(id.clone())),
        }
    }
}
