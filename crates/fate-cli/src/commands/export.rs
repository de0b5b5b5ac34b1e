use std::path::{Path, PathBuf};

use fate_table::{SnapshotStore, transfer};

/// Write one character to a standalone JSON document.
pub fn run(store: &SnapshotStore, character: &str, output: Option<&Path>) -> Result<(), String> {
    let table = super::load_table(store)?;
    let character = table.character_named(character).map_err(|e| e.to_string())?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let stem = character.name.replace(char::is_whitespace, "_");
            PathBuf::from(format!("{stem}.json"))
        }
    };

    transfer::export_character(&character, &path)
        .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    println!("  Exported to {}", path.display());
    Ok(())
}
