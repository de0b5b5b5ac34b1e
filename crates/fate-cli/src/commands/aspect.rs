use colored::Colorize;
use fate_table::SnapshotStore;

/// Add a permanent or temporary aspect.
pub fn add(store: &SnapshotStore, character: &str, text: &str, temp: bool) -> Result<(), String> {
    super::with_character(store, character, |c| {
        if temp {
            c.add_temp_aspect(text);
        } else {
            c.add_aspect(text);
        }
        Ok(())
    })?;
    println!("  Added aspect {}.", text.bold());
    Ok(())
}

/// Remove an aspect by 1-based position.
pub fn remove(
    store: &SnapshotStore,
    character: &str,
    index: usize,
    temp: bool,
) -> Result<(), String> {
    super::with_character(store, character, |c| {
        if temp {
            let id = c
                .temp_aspects
                .get(index.wrapping_sub(1))
                .map(|a| a.id)
                .ok_or_else(|| format!("no temporary aspect #{index}"))?;
            c.remove_temp_aspect(id).map_err(|e| e.to_string())?;
        } else {
            let id = c
                .aspects
                .get(index.wrapping_sub(1))
                .map(|a| a.id)
                .ok_or_else(|| format!("no aspect #{index}"))?;
            c.remove_aspect(id).map_err(|e| e.to_string())?;
        }
        Ok(())
    })?;
    println!("  Removed aspect #{index}.");
    Ok(())
}

/// Adjust a temporary aspect's invoke counter.
pub fn invokes(
    store: &SnapshotStore,
    character: &str,
    index: usize,
    delta: i32,
) -> Result<(), String> {
    let mut remaining = 0;
    super::with_character(store, character, |c| {
        let id = c
            .temp_aspects
            .get(index.wrapping_sub(1))
            .map(|a| a.id)
            .ok_or_else(|| format!("no temporary aspect #{index}"))?;
        remaining = c.adjust_invokes(id, delta).map_err(|e| e.to_string())?;
        Ok(())
    })?;
    println!("  Invokes remaining: {remaining}");
    Ok(())
}
