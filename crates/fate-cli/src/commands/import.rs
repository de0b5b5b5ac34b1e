use std::path::Path;

use colored::Colorize;
use fate_table::{SnapshotStore, transfer};

/// Parse a character document and adopt it into the roster.
pub fn run(store: &SnapshotStore, file: &Path) -> Result<(), String> {
    let mut table = super::load_table(store)?;
    let character = transfer::import_character(file)
        .map_err(|e| format!("cannot import {}: {e}", file.display()))?;

    let name = character.name.clone();
    table.adopt_character(character);
    super::save_table(store, &table)?;
    println!("  Imported {}.", name.bold());
    Ok(())
}
