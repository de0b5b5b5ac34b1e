//! Character export and import.
//!
//! A character can be written out as a standalone JSON document and read
//! back verbatim on another table. Parsing is the only validation; the
//! document format is exactly the serde form of [`Character`].

use std::fs;
use std::path::Path;

use fate_core::Character;

use crate::error::TableResult;

/// Write one character as a pretty-printed JSON document.
pub fn export_character(character: &Character, path: &Path) -> TableResult<()> {
    let json = serde_json::to_string_pretty(character)?;
    fs::write(path, json)?;
    Ok(())
}

/// Parse a character document. The caller decides what to do with the
/// result (usually adopt it into the current room).
pub fn import_character(path: &Path) -> TableResult<Character> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use fate_core::{Severity, UserId};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn export_then_import_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kira.json");

        let mut character = Character::new(UserId::new(), "Kira Voss");
        character.set_concept("Disgraced fleet navigator");
        character.add_consequence(Severity::Extreme);

        export_character(&character, &path).unwrap();
        let imported = import_character(&path).unwrap();
        assert_eq!(imported, character);
    }

    #[test]
    fn import_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(import_character(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn import_malformed_document_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"name\": 42}").unwrap();
        assert!(import_character(&path).is_err());
    }
}
