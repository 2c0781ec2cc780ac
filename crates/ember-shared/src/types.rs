use serde::{Deserialize, Serialize};

/// Stable identifier of a peer (the public-key derived address handed out
/// by the networking core). Opaque to the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `len` characters of the id, used as a placeholder display name.
    pub fn short(&self, len: usize) -> String {
        self.0.chars().take(len).collect()
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presence of a peer as shown in the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    #[default]
    Offline,
    Online,
}

impl PresenceStatus {
    /// Position in the roster ordering. Online peers are listed first.
    pub fn sort_rank(self) -> u8 {
        match self {
            Self::Online => 0,
            Self::Offline => 1,
        }
    }
}

/// Friendship state as reported by the networking core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FriendStatus {
    NotFound,
    Added,
    RequestSent,
    Confirmed,
    Online,
}

impl FriendStatus {
    pub fn describe(self) -> &'static str {
        match self {
            Self::NotFound => "no such friend found",
            Self::Added => "friend was added",
            Self::RequestSent => "friend request was sent",
            Self::Confirmed => "friend is confirmed",
            Self::Online => "friend is online",
        }
    }
}

impl From<FriendStatus> for PresenceStatus {
    fn from(status: FriendStatus) -> Self {
        match status {
            FriendStatus::Online => PresenceStatus::Online,
            FriendStatus::NotFound
            | FriendStatus::Added
            | FriendStatus::RequestSent
            | FriendStatus::Confirmed => PresenceStatus::Offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        let id = PeerId::new("ABCDEF0123");
        assert_eq!(id.short(5), "ABCDE");
        assert_eq!(PeerId::new("AB").short(5), "AB");
    }

    #[test]
    fn test_only_online_maps_to_online() {
        assert_eq!(PresenceStatus::from(FriendStatus::Online), PresenceStatus::Online);
        for status in [
            FriendStatus::NotFound,
            FriendStatus::Added,
            FriendStatus::RequestSent,
            FriendStatus::Confirmed,
        ] {
            assert_eq!(PresenceStatus::from(status), PresenceStatus::Offline);
        }
    }

    #[test]
    fn test_online_ranks_first() {
        assert!(PresenceStatus::Online.sort_rank() < PresenceStatus::Offline.sort_rank());
        assert_eq!(PresenceStatus::default(), PresenceStatus::Offline);
    }

    #[test]
    fn test_peer_id_serializes_as_string() {
        let json = serde_json::to_string(&PeerId::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
