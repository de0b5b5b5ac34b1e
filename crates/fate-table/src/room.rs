//! The room: participants, characters, and the chat log.

use fate_core::{Character, CharacterId, UserId};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;

/// Length of a generated join code.
pub const JOIN_CODE_LEN: usize = 6;

/// Characters a join code is drawn from. Ambiguous glyphs (O/0, I/1)
/// are left out so codes survive being read aloud.
const JOIN_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a shareable join code. Purely a label: nothing validates it
/// against a registry.
pub fn generate_join_code(rng: &mut StdRng) -> String {
    (0..JOIN_CODE_LEN)
        .map(|_| {
            let index = rng.random_range(0..JOIN_CODE_CHARSET.len());
            JOIN_CODE_CHARSET[index] as char
        })
        .collect()
}

/// One table's shared state: who is here, whose characters exist, and
/// everything said so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// The shareable join code.
    pub code: String,
    /// Display name of the table.
    pub name: String,
    /// The game master's user id.
    pub gm_id: UserId,
    /// Everyone at the table, GM included.
    pub players: Vec<UserId>,
    /// All characters. The room owns them; `Character::owner` is only a
    /// back-reference.
    pub characters: Vec<Character>,
    /// The chat log, append-only and in arrival order.
    pub messages: Vec<ChatMessage>,
}

impl Room {
    /// Find a character by id.
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Find a character by name (case-insensitive, first match).
    pub fn character_by_name(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn join_code_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let code = generate_join_code(&mut rng);
        assert_eq!(code.len(), JOIN_CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert!(!code.contains('O') && !code.contains('0'));
    }

    #[test]
    fn join_codes_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = generate_join_code(&mut rng);
        let b = generate_join_code(&mut rng);
        assert_ne!(a, b);
    }
}
