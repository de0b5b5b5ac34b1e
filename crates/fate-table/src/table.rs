//! The table session: the local user plus the room they are at.

use fate_core::{Character, CharacterId, Role, User, UserId};
use fate_dice::DiceRoll;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::error::{TableError, TableResult};
use crate::room::{Room, generate_join_code};

/// The local user and the room, together the whole mutable state of a
/// session. Mutations go through the methods here; each one leaves the
/// table ready to be mirrored to disk by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// The local user. Immutable for the session lifetime.
    pub user: User,
    /// The room and everything in it.
    pub room: Room,
}

impl Table {
    /// Create a table as game master. An empty name falls back to "GM".
    /// The room gets a generated join code and a welcome notice.
    pub fn create(user_name: &str, rng: &mut StdRng) -> Self {
        let name = non_empty_or(user_name, "GM");
        let user = User::new(name.clone(), Role::Gm);
        let code = generate_join_code(rng);
        let room = Room {
            code: code.clone(),
            name: format!("{name}'s table"),
            gm_id: user.id,
            players: vec![user.id],
            characters: Vec::new(),
            messages: vec![ChatMessage::system(format!(
                "Table {code} created. Welcome to Fate Nexus!"
            ))],
        };
        Self { user, room }
    }

    /// Join a table by code as a player. Purely local: the code is not
    /// looked up anywhere, so this builds a fresh room that merely
    /// carries it. An empty name falls back to "Player"; the code is
    /// uppercased.
    pub fn join(user_name: &str, code: &str) -> Self {
        let name = non_empty_or(user_name, "Player");
        let user = User::new(name.clone(), Role::Player);
        // The real GM is in another process we cannot see; a placeholder
        // id stands in for them.
        let gm_id = UserId::new();
        let room = Room {
            code: code.trim().to_uppercase(),
            name: "Private table".to_string(),
            gm_id,
            players: vec![gm_id, user.id],
            characters: Vec::new(),
            messages: vec![ChatMessage::system(format!("{name} joined the game."))],
        };
        Self { user, room }
    }

    /// Append a default character owned by the local user and return its
    /// id. Without an explicit name, GMs get "NPC" and players get their
    /// own name.
    pub fn add_character(&mut self, name: Option<&str>) -> CharacterId {
        let default_name = match self.user.role {
            Role::Gm => "NPC",
            Role::Player => self.user.name.as_str(),
        };
        let name = name.filter(|n| !n.trim().is_empty()).unwrap_or(default_name);
        let character = Character::new(self.user.id, name);
        let id = character.id;
        self.room.characters.push(character);
        id
    }

    /// Replace the character with the same id. The character value is a
    /// modified copy; nothing in the room is edited in place.
    pub fn update_character(&mut self, character: Character) -> TableResult<()> {
        let slot = self
            .room
            .characters
            .iter_mut()
            .find(|c| c.id == character.id)
            .ok_or(TableError::CharacterNotFound(character.id))?;
        *slot = character;
        Ok(())
    }

    /// Remove a character by id.
    pub fn remove_character(&mut self, id: CharacterId) -> TableResult<Character> {
        let index = self
            .room
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or(TableError::CharacterNotFound(id))?;
        Ok(self.room.characters.remove(index))
    }

    /// Clone a character by name for copy-modify-replace editing.
    pub fn character_named(&self, name: &str) -> TableResult<Character> {
        self.room
            .character_by_name(name)
            .cloned()
            .ok_or_else(|| TableError::NoCharacterNamed(name.to_string()))
    }

    /// Take in a character from an imported document: the local user
    /// becomes its owner and it joins the roster. Returns its id.
    pub fn adopt_character(&mut self, mut character: Character) -> CharacterId {
        character.owner = self.user.id;
        let id = character.id;
        self.room.characters.push(character);
        id
    }

    /// Append a message to the chat log.
    pub fn append_message(&mut self, message: ChatMessage) {
        self.room.messages.push(message);
    }

    /// Record a dice roll as a chat entry.
    pub fn record_roll(&mut self, roll: DiceRoll) {
        let sender = roll.sender.clone();
        self.append_message(ChatMessage::roll(sender, roll));
    }

    /// The context line handed to the oracle: the character names
    /// currently in the room.
    pub fn oracle_context(&self) -> String {
        let names: Vec<&str> = self
            .room
            .characters
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        format!("Characters: {}.", names.join(", "))
    }
}

/// Trimmed input, or the fallback when it is empty.
fn non_empty_or(input: &str, fallback: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use fate_dice::die::FateDie;
    use rand::SeedableRng;

    use super::*;
    use crate::chat::MessageKind;

    fn gm_table() -> Table {
        let mut rng = StdRng::seed_from_u64(42);
        Table::create("Mara", &mut rng)
    }

    #[test]
    fn create_sets_up_gm_room() {
        let table = gm_table();
        assert_eq!(table.user.role, Role::Gm);
        assert_eq!(table.room.gm_id, table.user.id);
        assert_eq!(table.room.name, "Mara's table");
        assert_eq!(table.room.players, vec![table.user.id]);
        assert_eq!(table.room.messages.len(), 1);
        assert_eq!(table.room.messages[0].kind, MessageKind::System);
        assert!(table.room.messages[0].body.contains(&table.room.code));
    }

    #[test]
    fn create_with_empty_name_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let table = Table::create("  ", &mut rng);
        assert_eq!(table.user.name, "GM");
        assert_eq!(table.room.name, "GM's table");
    }

    #[test]
    fn join_keeps_the_code_verbatim_but_upper() {
        let table = Table::join("Rook", "ab12cd");
        assert_eq!(table.user.role, Role::Player);
        assert_eq!(table.room.code, "AB12CD");
        assert_eq!(table.room.players.len(), 2);
        assert!(table.room.messages[0].body.contains("Rook joined"));
    }

    #[test]
    fn join_with_empty_name_defaults() {
        let table = Table::join("", "CODE99");
        assert_eq!(table.user.name, "Player");
    }

    #[test]
    fn add_character_defaults_by_role() {
        let mut table = gm_table();
        let id = table.add_character(None);
        assert_eq!(table.room.character(id).unwrap().name, "NPC");

        let mut table = Table::join("Rook", "CODE99");
        let id = table.add_character(None);
        assert_eq!(table.room.character(id).unwrap().name, "Rook");
        assert_eq!(table.room.character(id).unwrap().owner, table.user.id);
    }

    #[test]
    fn add_character_with_explicit_name() {
        let mut table = gm_table();
        let id = table.add_character(Some("Kira Voss"));
        assert_eq!(table.room.character(id).unwrap().name, "Kira Voss");
    }

    #[test]
    fn update_character_replaces_by_id() {
        let mut table = gm_table();
        let id = table.add_character(Some("Kira"));

        let mut edited = table.room.character(id).unwrap().clone();
        edited.set_concept("Disgraced fleet navigator");
        edited.adjust_fate_points(2);
        table.update_character(edited).unwrap();

        let stored = table.room.character(id).unwrap();
        assert_eq!(stored.concept, "Disgraced fleet navigator");
        assert_eq!(stored.fate_points, 5);
    }

    #[test]
    fn update_unknown_character_errors() {
        let mut table = gm_table();
        let stray = Character::new(table.user.id, "Nobody");
        assert!(matches!(
            table.update_character(stray),
            Err(TableError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn character_named_is_case_insensitive() {
        let mut table = gm_table();
        table.add_character(Some("Kira Voss"));
        assert!(table.character_named("kira voss").is_ok());
        assert!(matches!(
            table.character_named("Old Tom"),
            Err(TableError::NoCharacterNamed(_))
        ));
    }

    #[test]
    fn adopt_reassigns_ownership() {
        let mut table = gm_table();
        let stranger = Character::new(UserId::new(), "Imported Hero");
        let id = table.adopt_character(stranger);
        assert_eq!(table.room.character(id).unwrap().owner, table.user.id);
    }

    #[test]
    fn messages_append_in_order() {
        let mut table = gm_table();
        table.append_message(ChatMessage::text("Mara", "first"));
        table.append_message(ChatMessage::text("Mara", "second"));
        let bodies: Vec<&str> = table
            .room
            .messages
            .iter()
            .map(|m| m.body.as_str())
            .collect();
        assert_eq!(bodies.last(), Some(&"second"));
        assert_eq!(bodies[bodies.len() - 2], "first");
    }

    #[test]
    fn record_roll_appends_roll_message() {
        let mut table = gm_table();
        let roll = DiceRoll::new("Kira", "Fight", [FateDie::Plus; 4], 2);
        table.record_roll(roll);
        let last = table.room.messages.last().unwrap();
        assert_eq!(last.kind, MessageKind::Roll);
        assert_eq!(last.sender, "Kira");
        assert_eq!(last.roll.as_ref().unwrap().total, 6);
    }

    #[test]
    fn oracle_context_lists_characters() {
        let mut table = gm_table();
        table.add_character(Some("Kira"));
        table.add_character(Some("Old Tom"));
        assert_eq!(table.oracle_context(), "Characters: Kira, Old Tom.");
    }

    #[test]
    fn round_trip_serde() {
        let mut table = gm_table();
        table.add_character(Some("Kira"));
        table.append_message(ChatMessage::text("Mara", "hello"));
        let roll = DiceRoll::new("Kira", "Notice", [FateDie::Blank; 4], 3);
        table.record_roll(roll);

        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
