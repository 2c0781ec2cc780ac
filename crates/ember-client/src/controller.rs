//! Friends list controller.
//!
//! [`RosterController`] is the only thing allowed to mutate the roster. It
//! owns the [`RosterModel`] and the current filter, tracks the selection,
//! and turns roster changes into [`UiEvent`]s and [`CoreCommand`]s.
//!
//! Context-menu actions (copy id, rename, remove) only run when exactly
//! one entry is selected. Any other selection silently suppresses them.

use tokio::sync::mpsc;
use tracing::{debug, info};

use ember_roster::{PeerRecord, RosterEvent, RosterFilter, RosterModel, RosterView};
use ember_shared::constants::DEFAULT_INVITATION_MESSAGE;
use ember_shared::error::RosterError;
use ember_shared::protocol::CoreCommand;
use ember_shared::types::{PeerId, PresenceStatus};

use crate::add_friend::{run_add_friend_dialog, AddFriendForm, AddFriendPrompt, AddFriendRequest};
use crate::events::{emit_event, send_command, UiEvent};

pub struct RosterController {
    model: RosterModel,
    filter: RosterFilter,
    /// Selected entries, in selection order.
    selection: Vec<PeerId>,
    current: Option<PeerId>,
    invitation_message: String,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    core_tx: mpsc::UnboundedSender<CoreCommand>,
}

impl RosterController {
    pub fn new(
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        core_tx: mpsc::UnboundedSender<CoreCommand>,
    ) -> Self {
        Self {
            model: RosterModel::new(),
            filter: RosterFilter::default(),
            selection: Vec::new(),
            current: None,
            invitation_message: DEFAULT_INVITATION_MESSAGE.to_string(),
            ui_tx,
            core_tx,
        }
    }

    /// Text prefilled into new add-friend forms.
    pub fn set_invitation_message(&mut self, message: impl Into<String>) {
        self.invitation_message = message.into();
    }

    pub fn model(&self) -> &RosterModel {
        &self.model
    }

    /// The list as currently presented: filtered and sorted.
    pub fn view(&self) -> RosterView<'_> {
        RosterView::new(&self.model, &self.filter)
    }

    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter.set_text(text);
        self.prune_selection();
    }

    /// Display state of `id`; an empty Offline record if unknown.
    pub fn user_info(&self, id: &PeerId) -> PeerRecord {
        self.model.store().get(id)
    }

    // -- Roster mutations -------------------------------------------------

    /// Add a friend. New friends start Offline.
    pub fn add_friend(&mut self, id: PeerId, display_name: impl Into<String>) -> Result<(), RosterError> {
        self.model.add_peer(id.clone(), display_name)?;
        self.model.set_status(&id, PresenceStatus::Offline)?;
        self.flush();
        Ok(())
    }

    /// Validate a filled-in form, add the friend and ask the core to send
    /// the invitation. Nothing changes if validation fails.
    pub fn submit_add_friend(&mut self, form: &AddFriendForm) -> Result<AddFriendRequest, RosterError> {
        let request = form.validate()?;
        self.add_friend(request.id.clone(), request.display_name.clone())?;

        info!(peer = %request.id, "Requesting friendship");
        send_command(
            &self.core_tx,
            CoreCommand::FriendshipRequested {
                id: request.id.clone(),
                message: request.message.clone(),
            },
        );
        Ok(request)
    }

    /// Show the add-friend form through `prompt` until it is submitted with
    /// every field filled in, then add the friend. `Ok(None)` on cancel.
    pub fn request_add_friend_interactive<P>(
        &mut self,
        prompt: &mut P,
    ) -> Result<Option<AddFriendRequest>, RosterError>
    where
        P: AddFriendPrompt + ?Sized,
    {
        let form = AddFriendForm::new(self.invitation_message.clone());
        let Some(request) = run_add_friend_dialog(prompt, form) else {
            debug!("Add friend cancelled");
            return Ok(None);
        };

        let form = AddFriendForm {
            user_id: request.id.as_str().to_owned(),
            username: request.display_name,
            message: request.message,
        };
        self.submit_add_friend(&form).map(Some)
    }

    /// Apply a presence update. Unknown peers are ignored.
    pub fn set_status(&mut self, id: &PeerId, status: PresenceStatus) {
        match self.model.set_status(id, status) {
            Ok(()) => self.flush(),
            Err(e) => debug!(peer = %id, error = %e, "Ignoring status for unknown peer"),
        }
    }

    pub fn rename(&mut self, id: &PeerId, display_name: impl Into<String>) -> Result<(), RosterError> {
        self.model.rename_peer(id, display_name)?;
        self.prune_selection();
        self.flush();
        Ok(())
    }

    pub fn remove(&mut self, id: &PeerId) -> Result<(), RosterError> {
        self.model.remove_peer(id)?;
        self.prune_selection();
        self.flush();
        Ok(())
    }

    // -- Selection --------------------------------------------------------

    pub fn current_selection(&self) -> Option<&PeerId> {
        self.current.as_ref()
    }

    pub fn selected(&self) -> &[PeerId] {
        &self.selection
    }

    /// Make the entry at view `row` current and the only selected entry.
    /// Out-of-range rows are ignored.
    pub fn set_current_row(&mut self, row: usize) -> Option<PeerId> {
        let id = self.view().entry(row)?.id().clone();
        self.selection = vec![id.clone()];
        self.set_current(id.clone());
        Some(id)
    }

    /// Replace the selection with the entries at the given view rows. The
    /// last valid row becomes current.
    pub fn select_rows(&mut self, rows: &[usize]) {
        let mut ids: Vec<PeerId> = Vec::new();
        {
            let view = self.view();
            for &row in rows {
                if let Some(entry) = view.entry(row) {
                    if !ids.contains(entry.id()) {
                        ids.push(entry.id().clone());
                    }
                }
            }
        }

        if let Some(last) = ids.last().cloned() {
            self.set_current(last);
        }
        self.selection = ids;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn set_current(&mut self, id: PeerId) {
        if self.current.as_ref() == Some(&id) {
            return;
        }
        self.current = Some(id.clone());
        emit_event(&self.ui_tx, UiEvent::SelectionChanged { id });
    }

    fn single_selection(&self) -> Result<&PeerId, RosterError> {
        match self.selection.as_slice() {
            [id] => Ok(id),
            other => Err(RosterError::AmbiguousSelection {
                selected: other.len(),
            }),
        }
    }

    /// Drop selected entries that are no longer visible.
    fn prune_selection(&mut self) {
        let visible: Vec<PeerId> = self.view().rows().map(|entry| entry.id().clone()).collect();
        self.selection.retain(|id| visible.contains(id));
        if self.current.as_ref().is_some_and(|id| !visible.contains(id)) {
            self.current = None;
        }
    }

    // -- Context actions --------------------------------------------------

    /// "Copy User ID": the id of the single selected entry.
    pub fn copy_selected_user_id(&self) -> Option<PeerId> {
        let id = match self.single_selection() {
            Ok(id) => id.clone(),
            Err(e) => {
                debug!(error = %e, "Copy user id suppressed");
                return None;
            }
        };
        emit_event(&self.ui_tx, UiEvent::UserIdCopied { id: id.clone() });
        Some(id)
    }

    pub fn rename_selected(&mut self, display_name: impl Into<String>) -> Result<(), RosterError> {
        let id = match self.single_selection() {
            Ok(id) => id.clone(),
            Err(e) => {
                debug!(error = %e, "Rename suppressed");
                return Ok(());
            }
        };
        self.rename(&id, display_name)
    }

    pub fn remove_selected(&mut self) -> Result<(), RosterError> {
        let id = match self.single_selection() {
            Ok(id) => id.clone(),
            Err(e) => {
                debug!(error = %e, "Remove suppressed");
                return Ok(());
            }
        };
        self.remove(&id)
    }

    /// Forward queued roster changes to the UI and the core.
    fn flush(&mut self) {
        for event in self.model.take_events() {
            match event {
                RosterEvent::PeerAdded { id, display_name } => {
                    emit_event(&self.ui_tx, UiEvent::FriendAdded { id, display_name });
                }
                RosterEvent::PeerRemoved { id } => {
                    emit_event(&self.ui_tx, UiEvent::FriendRemoved { id: id.clone() });
                    send_command(&self.core_tx, CoreCommand::FriendRemoved { id });
                }
                RosterEvent::PeerRenamed { id, display_name } => {
                    emit_event(&self.ui_tx, UiEvent::FriendRenamed { id, display_name });
                }
                RosterEvent::PeerStatusChanged { id, status } => {
                    emit_event(&self.ui_tx, UiEvent::PresenceChanged { id, status });
                }
            }
        }
    }
}
