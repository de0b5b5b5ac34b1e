//! Users and their table roles.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A user's role at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The game master who created the table.
    Gm,
    /// A player who joined with an invite code.
    Player,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gm => write!(f, "GM"),
            Self::Player => write!(f, "player"),
        }
    }
}

/// A participant at the table. Created at session start and immutable
/// for the session lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name shown in chat and on owned characters.
    pub name: String,
    /// Role at the table.
    pub role: Role,
}

impl User {
    /// Create a user with a fresh id.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn display_is_short() {
        let id = UserId::new();
        assert_eq!(id.to_string().len(), 8);
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::Gm.to_string(), "GM");
        assert_eq!(Role::Player.to_string(), "player");
    }

    #[test]
    fn round_trip_serde() {
        let user = User::new("Mara", Role::Gm);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
