//! Chat messages: the append-only record of everything said and rolled.

use std::fmt;

use chrono::{DateTime, Utc};
use fate_dice::DiceRoll;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The sender name used for system notices.
pub const SYSTEM_SENDER: &str = "System";
/// The sender name used for oracle replies.
pub const ORACLE_SENDER: &str = "Oracle";

/// Unique identifier for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Generate a new random message ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What kind of message this is, which controls how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// An ordinary chat line from a user.
    Text,
    /// A dice roll with an embedded [`DiceRoll`] record.
    Roll,
    /// A notice from the application itself.
    System,
    /// A reply from the oracle.
    Oracle,
}

/// One entry in the chat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier.
    pub id: MessageId,
    /// Display name of whoever sent it.
    pub sender: String,
    /// The message body.
    pub body: String,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// The message kind.
    pub kind: MessageKind,
    /// The roll record, present only for [`MessageKind::Roll`].
    pub roll: Option<DiceRoll>,
}

impl ChatMessage {
    /// An ordinary chat line.
    pub fn text(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            body: body.into(),
            timestamp: Utc::now(),
            kind: MessageKind::Text,
            roll: None,
        }
    }

    /// A notice from the application.
    pub fn system(body: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: SYSTEM_SENDER.to_string(),
            body: body.into(),
            timestamp: Utc::now(),
            kind: MessageKind::System,
            roll: None,
        }
    }

    /// A reply from the oracle.
    pub fn oracle(body: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender: ORACLE_SENDER.to_string(),
            body: body.into(),
            timestamp: Utc::now(),
            kind: MessageKind::Oracle,
            roll: None,
        }
    }

    /// A dice-roll entry. The body is a human-readable caption; the
    /// structured record rides along for rendering.
    pub fn roll(sender: impl Into<String>, roll: DiceRoll) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            body: format!("Roll: {}", roll.label),
            timestamp: Utc::now(),
            kind: MessageKind::Roll,
            roll: Some(roll),
        }
    }
}

#[cfg(test)]
mod tests {
    use fate_dice::die::FateDie;

    use super::*;

    #[test]
    fn text_message() {
        let msg = ChatMessage::text("Kira", "hello");
        assert_eq!(msg.kind, MessageKind::Text);
        assert_eq!(msg.body, "hello");
        assert!(msg.roll.is_none());
    }

    #[test]
    fn system_message_sender() {
        let msg = ChatMessage::system("Table created.");
        assert_eq!(msg.sender, SYSTEM_SENDER);
        assert_eq!(msg.kind, MessageKind::System);
    }

    #[test]
    fn roll_message_carries_record() {
        let roll = DiceRoll::new("Kira", "Fight", [FateDie::Plus; 4], 1);
        let msg = ChatMessage::roll("Kira", roll.clone());
        assert_eq!(msg.kind, MessageKind::Roll);
        assert_eq!(msg.body, "Roll: Fight");
        assert_eq!(msg.roll, Some(roll));
    }

    #[test]
    fn round_trip_serde() {
        let msg = ChatMessage::oracle("Try creating an advantage first.");
        let json = serde_json::to_string(&msg).unwrap();
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
