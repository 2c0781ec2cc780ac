use serde::Serialize;
use tokio::sync::mpsc;

use ember_shared::protocol::CoreCommand;
use ember_shared::types::{PeerId, PresenceStatus};

use crate::add_friend::AddFriendForm;

/// Events produced for the presentation layer (friends list, conversation
/// pages, local user item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiEvent {
    FriendAdded { id: PeerId, display_name: String },
    FriendRemoved { id: PeerId },
    SelectionChanged { id: PeerId },
    FriendRenamed { id: PeerId, display_name: String },
    PresenceChanged { id: PeerId, status: PresenceStatus },
    FriendRequestReceived { id: PeerId, message: String },
    MessageReceived {
        id: PeerId,
        message: String,
        timestamp: String,
    },
    LocalUserIdGenerated { id: PeerId },
    /// The add-friend form was refused; `form` carries the values as entered.
    AddFriendRejected { form: AddFriendForm, reason: String },
    UserIdCopied { id: PeerId },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FriendAdded { .. } => "friend-added",
            Self::FriendRemoved { .. } => "friend-removed",
            Self::SelectionChanged { .. } => "selection-changed",
            Self::FriendRenamed { .. } => "friend-renamed",
            Self::PresenceChanged { .. } => "presence-changed",
            Self::FriendRequestReceived { .. } => "friend-request-received",
            Self::MessageReceived { .. } => "message-received",
            Self::LocalUserIdGenerated { .. } => "local-user-id-generated",
            Self::AddFriendRejected { .. } => "add-friend-rejected",
            Self::UserIdCopied { .. } => "user-id-copied",
        }
    }

    /// JSON form consumed by a webview frontend.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn emit_event(tx: &mpsc::UnboundedSender<UiEvent>, event: UiEvent) {
    let name = event.name();
    if let Err(e) = tx.send(event) {
        tracing::error!(event = name, error = %e, "Failed to emit event");
    }
}

pub fn send_command(tx: &mpsc::UnboundedSender<CoreCommand>, command: CoreCommand) {
    if let Err(e) = tx.send(command) {
        tracing::warn!(command = ?e.0, "Core is gone, dropping command");
    }
}
