use fate_table::SnapshotStore;

/// Adjust a character's fate point pool, clamped at zero.
pub fn adjust(store: &SnapshotStore, character: &str, delta: i32) -> Result<(), String> {
    let mut points = 0;
    super::with_character(store, character, |c| {
        points = c.adjust_fate_points(delta);
        Ok(())
    })?;
    println!("  Fate points: {points}");
    Ok(())
}
