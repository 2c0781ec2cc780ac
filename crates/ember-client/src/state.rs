//! Window-owned state that sits next to the roster.
//!
//! Both structs are owned by [`MainWindow`](crate::window::MainWindow) and
//! handed to whoever needs them; nothing here is global.

use std::collections::HashMap;

use ember_shared::types::PeerId;

/// The local user's own entry shown above the friends list.
#[derive(Debug, Clone, Default)]
pub struct OurUserItem {
    user_id: Option<PeerId>,
}

impl OurUserItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the core reports the generated id.
    pub fn user_id(&self) -> Option<&PeerId> {
        self.user_id.as_ref()
    }

    pub fn set_user_id(&mut self, id: PeerId) {
        self.user_id = Some(id);
    }
}

/// Incoming friend requests awaiting a user decision.
#[derive(Debug, Clone, Default)]
pub struct FriendRequests {
    pending: HashMap<PeerId, String>,
}

impl FriendRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request. A repeated request from the same peer replaces the
    /// earlier message.
    pub fn insert(&mut self, id: PeerId, message: String) {
        self.pending.insert(id, message);
    }

    /// Remove and return the message of a pending request.
    pub fn take(&mut self, id: &PeerId) -> Option<String> {
        self.pending.remove(id)
    }

    pub fn contains(&self, id: &PeerId) -> bool {
        self.pending.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
