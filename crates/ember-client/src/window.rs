//! Main window: wires the friends list to the networking core.
//!
//! [`MainWindow::run`] is the presentation loop. Core notifications and
//! user actions are both received here and applied one at a time, so the
//! roster is only ever touched from this task.

use std::ops::ControlFlow;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use ember_shared::protocol::{CoreCommand, CoreNotification};
use ember_shared::types::{PeerId, PresenceStatus};

use crate::add_friend::AddFriendForm;
use crate::config::ClientConfig;
use crate::controller::RosterController;
use crate::events::{emit_event, send_command, UiEvent};
use crate::state::{FriendRequests, OurUserItem};

/// Actions coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    AddFriend(AddFriendForm),
    AcceptFriendRequest(PeerId),
    DeclineFriendRequest(PeerId),
    SetFilterText(String),
    SetCurrentRow(usize),
    SelectRows(Vec<usize>),
    ClearSelection,
    CopySelectedUserId,
    RenameSelected(String),
    RemoveSelected,
    SendMessage { id: PeerId, message: String },
    Quit,
}

pub struct MainWindow {
    friends: RosterController,
    our_user: OurUserItem,
    requests: FriendRequests,
    accepted_name_len: usize,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    core_tx: mpsc::UnboundedSender<CoreCommand>,
}

impl MainWindow {
    pub fn new(
        config: &ClientConfig,
        our_user: OurUserItem,
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        core_tx: mpsc::UnboundedSender<CoreCommand>,
    ) -> Self {
        let mut friends = RosterController::new(ui_tx.clone(), core_tx.clone());
        friends.set_invitation_message(config.invitation_message.clone());

        Self {
            friends,
            our_user,
            requests: FriendRequests::new(),
            accepted_name_len: config.accepted_name_len,
            ui_tx,
            core_tx,
        }
    }

    pub fn friends(&self) -> &RosterController {
        &self.friends
    }

    pub fn our_user(&self) -> &OurUserItem {
        &self.our_user
    }

    pub fn pending_requests(&self) -> &FriendRequests {
        &self.requests
    }

    /// Drive the window until the user quits or the action channel closes.
    pub async fn run(
        mut self,
        mut notifications: mpsc::Receiver<CoreNotification>,
        mut actions: mpsc::UnboundedReceiver<UiAction>,
    ) -> Self {
        info!("Main window loop started");

        loop {
            tokio::select! {
                Some(notification) = notifications.recv() => {
                    self.handle_notification(notification);
                }
                action = actions.recv() => {
                    let Some(action) = action else { break };
                    if self.handle_action(action).is_break() {
                        break;
                    }
                }
            }
        }

        info!("Main window loop ended");
        self
    }

    pub fn handle_notification(&mut self, notification: CoreNotification) {
        match notification {
            CoreNotification::FriendRequestReceived { id, message } => {
                info!(peer = %id, "Friend request received");
                self.requests.insert(id.clone(), message.clone());
                emit_event(&self.ui_tx, UiEvent::FriendRequestReceived { id, message });
            }

            CoreNotification::FriendPresenceChanged { id, status } => {
                debug!(peer = %id, "status: {}", status.describe());
                self.friends.set_status(&id, PresenceStatus::from(status));
            }

            CoreNotification::FriendMessageReceived { id, message } => {
                debug!(peer = %id, len = message.len(), "Message received");
                emit_event(
                    &self.ui_tx,
                    UiEvent::MessageReceived {
                        id,
                        message,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                );
            }

            CoreNotification::LocalUserIdGenerated { id } => {
                info!(peer = %id, "Local user id generated");
                self.our_user.set_user_id(id.clone());
                emit_event(&self.ui_tx, UiEvent::LocalUserIdGenerated { id });
            }
        }
    }

    pub fn handle_action(&mut self, action: UiAction) -> ControlFlow<()> {
        match action {
            UiAction::AddFriend(form) => {
                if let Err(e) = self.friends.submit_add_friend(&form) {
                    warn!(error = %e, "Add friend rejected");
                    emit_event(
                        &self.ui_tx,
                        UiEvent::AddFriendRejected {
                            form,
                            reason: e.to_string(),
                        },
                    );
                }
            }

            UiAction::AcceptFriendRequest(id) => self.accept_friend_request(id),

            UiAction::DeclineFriendRequest(id) => {
                if self.requests.take(&id).is_some() {
                    debug!(peer = %id, "Friend request declined");
                }
            }

            UiAction::SetFilterText(text) => self.friends.set_filter_text(text),

            UiAction::SetCurrentRow(row) => {
                self.friends.set_current_row(row);
            }

            UiAction::SelectRows(rows) => self.friends.select_rows(&rows),

            UiAction::ClearSelection => self.friends.clear_selection(),

            UiAction::CopySelectedUserId => {
                self.friends.copy_selected_user_id();
            }

            UiAction::RenameSelected(name) => {
                if let Err(e) = self.friends.rename_selected(name) {
                    warn!(error = %e, "Rename failed");
                }
            }

            UiAction::RemoveSelected => {
                if let Err(e) = self.friends.remove_selected() {
                    warn!(error = %e, "Remove failed");
                }
            }

            UiAction::SendMessage { id, message } => {
                send_command(&self.core_tx, CoreCommand::MessageSent { id, message });
            }

            UiAction::Quit => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    fn accept_friend_request(&mut self, id: PeerId) {
        if self.requests.take(&id).is_none() {
            warn!(peer = %id, "No pending friend request to accept");
            return;
        }

        let display_name = id.short(self.accepted_name_len);
        match self.friends.add_friend(id.clone(), display_name) {
            Ok(()) => {
                info!(peer = %id, "Friend request accepted");
                send_command(&self.core_tx, CoreCommand::FriendshipAccepted { id });
            }
            Err(e) => warn!(peer = %id, error = %e, "Could not accept friend request"),
        }
    }
}
