use ember_shared::types::{PeerId, PresenceStatus};

/// Change notifications queued by the [`RosterModel`](crate::RosterModel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    PeerAdded {
        id: PeerId,
        display_name: String,
    },
    PeerRemoved {
        id: PeerId,
    },
    PeerRenamed {
        id: PeerId,
        display_name: String,
    },
    PeerStatusChanged {
        id: PeerId,
        status: PresenceStatus,
    },
}
