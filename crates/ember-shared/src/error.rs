use thiserror::Error;

use crate::constants::FILL_ALL_FIELDS_MESSAGE;
use crate::types::PeerId;

/// Errors produced by roster operations.
///
/// None of these is fatal: callers get the error back and the roster is
/// left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A peer with this id is already in the roster.
    #[error("Peer already exists: {0}")]
    AlreadyExists(PeerId),

    /// No peer with this id is in the roster.
    #[error("Peer not found: {0}")]
    NotFound(PeerId),

    /// The add-friend form was submitted with empty fields.
    #[error("{} (missing: {})", FILL_ALL_FIELDS_MESSAGE, .missing.join(", "))]
    ValidationFailed { missing: Vec<&'static str> },

    /// A single-entry action was requested while `selected` entries were selected.
    #[error("Expected exactly one selected entry, found {selected}")]
    AmbiguousSelection { selected: usize },
}
