pub mod aspect;
pub mod character;
pub mod consequence;
pub mod export;
pub mod fate;
pub mod import;
pub mod log;
pub mod portrait;
pub mod roll;
pub mod say;
pub mod skill;
pub mod stress;
pub mod table;

use std::path::{Path, PathBuf};

use fate_core::{Character, Rating};
use fate_table::{SnapshotStore, Table};

/// Build the snapshot store for the chosen (or default) data directory.
pub fn store(data_dir: Option<&Path>) -> SnapshotStore {
    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => SnapshotStore::default_dir().unwrap_or_else(|| PathBuf::from(".")),
    };
    SnapshotStore::in_dir(&dir)
}

/// Load the active table, or explain how to start one.
pub fn load_table(store: &SnapshotStore) -> Result<Table, String> {
    store
        .load()
        .ok_or_else(|| "no active table. Start one with: nexus new <name>".to_string())
}

/// Mirror the table back to disk.
pub fn save_table(store: &SnapshotStore, table: &Table) -> Result<(), String> {
    store
        .save(table)
        .map_err(|e| format!("cannot save snapshot: {e}"))
}

/// Copy-modify-replace: clone the named character, apply the edit, then
/// replace it by id and save.
pub fn with_character<F>(store: &SnapshotStore, name: &str, edit: F) -> Result<(), String>
where
    F: FnOnce(&mut Character) -> Result<(), String>,
{
    let mut table = load_table(store)?;
    let mut character = table.character_named(name).map_err(|e| e.to_string())?;
    edit(&mut character)?;
    table
        .update_character(character)
        .map_err(|e| e.to_string())?;
    save_table(store, &table)
}

/// Parse a rating argument like `+3`, `0`, `-1`.
pub fn parse_rating(s: &str) -> Result<Rating, String> {
    Rating::parse(s).ok_or_else(|| format!("invalid rating: \"{s}\" (use +3, 0, -1, ...)"))
}
