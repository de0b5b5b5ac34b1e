use fate_core::Severity;
use fate_table::SnapshotStore;

/// Add a consequence slot of the given severity.
pub fn add(store: &SnapshotStore, character: &str, severity: &str) -> Result<(), String> {
    let severity = Severity::parse(severity)
        .ok_or_else(|| format!("unknown severity: \"{severity}\" (mild, moderate, severe, extreme)"))?;
    super::with_character(store, character, |c| {
        c.add_consequence(severity);
        Ok(())
    })?;
    println!("  Added {severity} consequence slot.");
    Ok(())
}

/// Remove a consequence by 1-based position.
pub fn remove(store: &SnapshotStore, character: &str, index: usize) -> Result<(), String> {
    super::with_character(store, character, |c| {
        let id = c
            .consequences
            .get(index.wrapping_sub(1))
            .map(|q| q.id)
            .ok_or_else(|| format!("no consequence #{index}"))?;
        c.remove_consequence(id).map_err(|e| e.to_string())?;
        Ok(())
    })?;
    println!("  Removed consequence #{index}.");
    Ok(())
}

/// Describe a consequence by 1-based position.
pub fn text(store: &SnapshotStore, character: &str, index: usize, text: &str) -> Result<(), String> {
    super::with_character(store, character, |c| {
        let id = c
            .consequences
            .get(index.wrapping_sub(1))
            .map(|q| q.id)
            .ok_or_else(|| format!("no consequence #{index}"))?;
        c.set_consequence_text(id, text).map_err(|e| e.to_string())?;
        Ok(())
    })?;
    println!("  Consequence #{index} described.");
    Ok(())
}
