use std::fs;
use std::path::Path;

use fate_table::{SnapshotStore, encode_portrait};

/// Read an image file, downscale it, and set it as the portrait.
pub fn run(store: &SnapshotStore, character: &str, file: &Path) -> Result<(), String> {
    let bytes =
        fs::read(file).map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let data_url = encode_portrait(&bytes).map_err(|e| e.to_string())?;

    super::with_character(store, character, |c| {
        c.set_portrait(data_url.clone());
        Ok(())
    })?;
    println!("  Portrait set ({} bytes embedded).", data_url.len());
    Ok(())
}
