use fate_core::Character;
use fate_core::stress::TrackId;
use fate_table::SnapshotStore;

/// Resolve a track by name on a character.
fn track_id(character: &Character, track: &str) -> Result<TrackId, String> {
    character
        .stress_track_by_name(track)
        .map(|t| t.id)
        .ok_or_else(|| format!("no stress track named \"{track}\""))
}

/// Toggle a stress box (1-based): marks every box up to it, or undoes
/// the tip.
pub fn toggle(store: &SnapshotStore, character: &str, track: &str, cell: usize) -> Result<(), String> {
    let mut rendered = String::new();
    super::with_character(store, character, |c| {
        let id = track_id(c, track)?;
        let track = c.stress_track_mut(id).map_err(|e| e.to_string())?;
        if cell == 0 || cell > track.len() {
            return Err(format!("box {cell} is out of range (1-{})", track.len()));
        }
        track.toggle(cell - 1);
        rendered = track.to_string();
        Ok(())
    })?;
    println!("  {rendered}");
    Ok(())
}

/// Add a deletable stress track.
pub fn add(store: &SnapshotStore, character: &str, name: &str) -> Result<(), String> {
    super::with_character(store, character, |c| {
        c.add_stress_track(name);
        Ok(())
    })?;
    println!("  Added stress track {name}.");
    Ok(())
}

/// Remove a stress track; the built-in pair refuses.
pub fn remove(store: &SnapshotStore, character: &str, track: &str) -> Result<(), String> {
    super::with_character(store, character, |c| {
        let id = track_id(c, track)?;
        c.remove_stress_track(id).map_err(|e| e.to_string())?;
        Ok(())
    })?;
    println!("  Removed stress track {track}.");
    Ok(())
}

/// Append a box to a track.
pub fn grow(store: &SnapshotStore, character: &str, track: &str) -> Result<(), String> {
    resize(store, character, track, true)
}

/// Drop the last box from a track.
pub fn shrink(store: &SnapshotStore, character: &str, track: &str) -> Result<(), String> {
    resize(store, character, track, false)
}

fn resize(store: &SnapshotStore, character: &str, track: &str, grow: bool) -> Result<(), String> {
    let mut rendered = String::new();
    super::with_character(store, character, |c| {
        let id = track_id(c, track)?;
        let track = c.stress_track_mut(id).map_err(|e| e.to_string())?;
        if grow {
            track.grow();
        } else {
            track.shrink();
        }
        rendered = track.to_string();
        Ok(())
    })?;
    println!("  {rendered}");
    Ok(())
}

/// Clear every box on a track.
pub fn reset(store: &SnapshotStore, character: &str, track: &str) -> Result<(), String> {
    let mut rendered = String::new();
    super::with_character(store, character, |c| {
        let id = track_id(c, track)?;
        let track = c.stress_track_mut(id).map_err(|e| e.to_string())?;
        track.reset();
        rendered = track.to_string();
        Ok(())
    })?;
    println!("  {rendered}");
    Ok(())
}
