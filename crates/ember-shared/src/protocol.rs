//! Messages exchanged with the networking core.
//!
//! The core runs on its own task; the client talks to it only through
//! these two enums, carried over channels.

use serde::{Deserialize, Serialize};

use crate::types::{FriendStatus, PeerId};

/// Commands sent *into* the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreCommand {
    /// Ask `id` to become a friend, with an invitation message.
    FriendshipRequested { id: PeerId, message: String },
    /// Accept a friend request previously received from `id`.
    FriendshipAccepted { id: PeerId },
    /// Drop `id` from the friend list.
    FriendRemoved { id: PeerId },
    /// Deliver a chat message to `id`.
    MessageSent { id: PeerId, message: String },
    /// Stop the core task.
    Shutdown,
}

/// Notifications sent *from* the core to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreNotification {
    /// A remote peer asked to become a friend.
    FriendRequestReceived { id: PeerId, message: String },
    /// The friendship/presence state of `id` changed.
    FriendPresenceChanged { id: PeerId, status: FriendStatus },
    /// A chat message arrived from `id`.
    FriendMessageReceived { id: PeerId, message: String },
    /// The core generated (or loaded) the local user's id.
    LocalUserIdGenerated { id: PeerId },
}
