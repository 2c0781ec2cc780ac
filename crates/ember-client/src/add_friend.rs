//! The "Add Friend" form.
//!
//! The form collects a user id, a display name and an invitation message.
//! All three must be non-empty before anything is submitted; a rejected
//! form keeps its values so it can be shown again as entered.

use serde::{Deserialize, Serialize};

use ember_shared::constants::DEFAULT_INVITATION_MESSAGE;
use ember_shared::error::RosterError;
use ember_shared::types::PeerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFriendForm {
    pub user_id: String,
    pub username: String,
    pub message: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self::new(DEFAULT_INVITATION_MESSAGE)
    }
}

impl AddFriendForm {
    /// Empty form with the invitation message prefilled.
    pub fn new(invitation_message: impl Into<String>) -> Self {
        Self {
            user_id: String::new(),
            username: String::new(),
            message: invitation_message.into(),
        }
    }

    /// Check that every field is filled in.
    pub fn validate(&self) -> Result<AddFriendRequest, RosterError> {
        let missing: Vec<&'static str> = [
            ("user id", &self.user_id),
            ("username", &self.username),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(RosterError::ValidationFailed { missing });
        }

        Ok(AddFriendRequest {
            id: PeerId::new(self.user_id.clone()),
            display_name: self.username.clone(),
            message: self.message.clone(),
        })
    }
}

/// A validated add-friend submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendRequest {
    pub id: PeerId,
    pub display_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Submit,
    Cancel,
}

/// Something that can show the form to the user and let them edit it.
///
/// `error` is set when the previous submission was rejected.
pub trait AddFriendPrompt {
    fn prompt(&mut self, form: &mut AddFriendForm, error: Option<&RosterError>) -> PromptOutcome;
}

/// Show `form` until it is submitted with every field filled in, or
/// cancelled. Returns `None` on cancel.
pub fn run_add_friend_dialog<P>(prompt: &mut P, mut form: AddFriendForm) -> Option<AddFriendRequest>
where
    P: AddFriendPrompt + ?Sized,
{
    let mut error = None;
    loop {
        match prompt.prompt(&mut form, error.as_ref()) {
            PromptOutcome::Cancel => return None,
            PromptOutcome::Submit => match form.validate() {
                Ok(request) => return Some(request),
                Err(e) => {
                    tracing::debug!(error = %e, "Add-friend form rejected");
                    error = Some(e);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays back a fixed sequence of edits, then cancels.
    struct Scripted {
        steps: Vec<(Option<AddFriendForm>, PromptOutcome)>,
        errors_seen: Vec<Option<RosterError>>,
        forms_seen: Vec<AddFriendForm>,
    }

    impl AddFriendPrompt for Scripted {
        fn prompt(&mut self, form: &mut AddFriendForm, error: Option<&RosterError>) -> PromptOutcome {
            self.errors_seen.push(error.cloned());
            self.forms_seen.push(form.clone());
            if self.steps.is_empty() {
                return PromptOutcome::Cancel;
            }
            let (edit, outcome) = self.steps.remove(0);
            if let Some(edit) = edit {
                *form = edit;
            }
            outcome
        }
    }

    fn form(id: &str, name: &str, message: &str) -> AddFriendForm {
        AddFriendForm {
            user_id: id.into(),
            username: name.into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_default_message_prefilled() {
        let form = AddFriendForm::default();
        assert_eq!(form.message, "Hello, please add me in your friend list.");
        assert!(form.user_id.is_empty());
    }

    #[test]
    fn test_empty_username_fails() {
        let err = form("abc", "", "hi").validate().unwrap_err();
        assert_eq!(
            err,
            RosterError::ValidationFailed {
                missing: vec!["username"]
            }
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert!(form(" ", " ", " ").validate().is_ok());
    }

    #[test]
    fn test_dialog_reprompts_with_values_kept() {
        let mut prompt = Scripted {
            steps: vec![
                (Some(form("abc", "", "hi")), PromptOutcome::Submit),
                (Some(form("abc", "Anna", "hi")), PromptOutcome::Submit),
            ],
            errors_seen: Vec::new(),
            forms_seen: Vec::new(),
        };

        let request = run_add_friend_dialog(&mut prompt, AddFriendForm::default()).unwrap();
        assert_eq!(request.id, PeerId::new("abc"));
        assert_eq!(request.display_name, "Anna");

        assert!(prompt.errors_seen[0].is_none());
        assert!(matches!(
            prompt.errors_seen[1],
            Some(RosterError::ValidationFailed { .. })
        ));
        // Second showing still has what the user typed the first time.
        assert_eq!(prompt.forms_seen[1], form("abc", "", "hi"));
    }

    #[test]
    fn test_dialog_cancel() {
        let mut prompt = Scripted {
            steps: vec![(None, PromptOutcome::Cancel)],
            errors_seen: Vec::new(),
            forms_seen: Vec::new(),
        };
        assert!(run_add_friend_dialog(&mut prompt, AddFriendForm::default()).is_none());
    }
}
