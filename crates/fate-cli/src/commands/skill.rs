use fate_table::SnapshotStore;

/// Add a slot at a rating in the ladder or custom section.
pub fn add(store: &SnapshotStore, character: &str, rating: &str, custom: bool) -> Result<(), String> {
    let rating = super::parse_rating(rating)?;
    let mut count = 0;
    super::with_character(store, character, |c| {
        let section = if custom { &mut c.custom_skills } else { &mut c.skills };
        count = section.add_slot(rating);
        Ok(())
    })?;
    println!("  {rating}: {count} slots");
    Ok(())
}

/// Remove a slot at a rating; the last slot removes the rating row.
pub fn remove(
    store: &SnapshotStore,
    character: &str,
    rating: &str,
    custom: bool,
) -> Result<(), String> {
    let rating = super::parse_rating(rating)?;
    let mut count = 0;
    super::with_character(store, character, |c| {
        let section = if custom { &mut c.custom_skills } else { &mut c.skills };
        count = section.remove_slot(rating);
        Ok(())
    })?;
    if count == 0 {
        println!("  {rating}: row removed");
    } else {
        println!("  {rating}: {count} slots");
    }
    Ok(())
}

/// Set the text of a slot (1-based index within its rating).
pub fn label(
    store: &SnapshotStore,
    character: &str,
    rating: &str,
    index: u32,
    text: &str,
    custom: bool,
) -> Result<(), String> {
    let rating = super::parse_rating(rating)?;
    if index == 0 {
        return Err("slot positions start at 1".to_string());
    }
    super::with_character(store, character, |c| {
        let section = if custom { &mut c.custom_skills } else { &mut c.skills };
        section.set_slot_label(rating, index - 1, text);
        Ok(())
    })?;
    println!("  {rating} slot {index}: {text}");
    Ok(())
}

/// Clear the custom section entirely.
pub fn clear(store: &SnapshotStore, character: &str) -> Result<(), String> {
    super::with_character(store, character, |c| {
        c.custom_skills.clear();
        Ok(())
    })?;
    println!("  Custom skills cleared.");
    Ok(())
}
