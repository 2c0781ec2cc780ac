/// Prefilled invitation text of the add-friend form
pub const DEFAULT_INVITATION_MESSAGE: &str = "Hello, please add me in your friend list.";

/// Number of leading id characters used as the display name of a peer
/// accepted from an incoming friend request
pub const DEFAULT_ACCEPTED_NAME_LEN: usize = 5;

/// Capacity of the Core -> window notification channel
pub const CORE_NOTIFICATION_CAPACITY: usize = 256;

/// Message shown when the add-friend form is submitted with empty fields
pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill all the fields in";
