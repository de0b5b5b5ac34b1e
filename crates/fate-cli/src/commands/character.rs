use colored::Colorize;
use comfy_table::{ContentArrangement, Table as OutputTable};
use fate_core::Character;
use fate_table::SnapshotStore;

/// Add a character to the roster.
pub fn add(store: &SnapshotStore, name: Option<&str>) -> Result<(), String> {
    let mut table = super::load_table(store)?;
    let id = table.add_character(name);
    let name = table.room.character(id).map(|c| c.name.clone());
    super::save_table(store, &table)?;
    println!("  Added {}.", name.unwrap_or_default().bold());
    Ok(())
}

/// List the roster.
pub fn list(store: &SnapshotStore) -> Result<(), String> {
    let table = super::load_table(store)?;

    if table.room.characters.is_empty() {
        println!("  No characters yet. Add one with: nexus character add \"Name\"");
        return Ok(());
    }

    let mut output = OutputTable::new();
    output.set_content_arrangement(ContentArrangement::Dynamic);
    output.set_header(vec!["Name", "Concept", "Fate", "Stress", "Owner"]);

    for character in &table.room.characters {
        let concept = if character.concept.is_empty() {
            "—".to_string()
        } else {
            character.concept.clone()
        };
        let stress: Vec<String> = character
            .stress
            .iter()
            .map(|t| format!("{}/{}", t.marked(), t.len()))
            .collect();
        let owner = if character.owner == table.user.id {
            "you".to_string()
        } else {
            character.owner.to_string()
        };
        output.add_row(vec![
            character.name.clone(),
            concept,
            character.fate_points.to_string(),
            stress.join(" "),
            owner,
        ]);
    }

    println!("{output}");
    println!();
    println!("  {} characters", table.room.characters.len());
    Ok(())
}

/// Render one character sheet.
pub fn show(store: &SnapshotStore, name: &str) -> Result<(), String> {
    let table = super::load_table(store)?;
    let character = table.character_named(name).map_err(|e| e.to_string())?;
    print_sheet(&character);
    Ok(())
}

fn print_sheet(character: &Character) {
    println!("  {}", character.name.bold());
    if !character.concept.is_empty() {
        println!("  Concept: {}", character.concept);
    }
    if !character.trouble.is_empty() {
        println!("  Trouble: {}", character.trouble);
    }
    println!(
        "  Fate points: {}",
        character.fate_points.to_string().bold().cyan()
    );
    if character.portrait.is_some() {
        println!("  Portrait: {}", "set".dimmed());
    }
    println!();

    println!("  {}", "Aspects".underline());
    for aspect in &character.aspects {
        let text = if aspect.text.is_empty() {
            "—".dimmed().to_string()
        } else {
            aspect.text.clone()
        };
        println!("    {text}");
    }
    for aspect in &character.temp_aspects {
        println!("    {} (invokes: {})", aspect.text, aspect.invokes);
    }
    println!();

    println!("  {}", "Skills".underline());
    print_section(character, false);
    if !character.custom_skills.is_empty() {
        println!();
        println!("  {}", "Custom skills".underline());
        print_section(character, true);
    }
    println!();

    println!("  {}", "Stress".underline());
    for track in &character.stress {
        println!("    {track}");
    }
    println!();

    println!("  {}", "Consequences".underline());
    for consequence in &character.consequences {
        let text = if consequence.text.is_empty() {
            "—".dimmed().to_string()
        } else {
            consequence.text.clone()
        };
        let severity = consequence.severity.to_string();
        println!("    {severity:<14} {text}");
    }

    let stunts: Vec<&str> = character
        .stunts
        .iter()
        .map(|s| s.text.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    if !stunts.is_empty() {
        println!();
        println!("  {}", "Stunts".underline());
        for stunt in stunts {
            println!("    {stunt}");
        }
    }

    if !character.extras.is_empty() {
        println!();
        println!("  {}", "Extras".underline());
        for line in character.extras.lines() {
            println!("    {line}");
        }
    }
}

/// Print one pyramid section, highest rating first.
fn print_section(character: &Character, custom: bool) {
    let section = if custom {
        &character.custom_skills
    } else {
        &character.skills
    };

    if section.is_empty() {
        println!("    {}", "(empty)".dimmed());
        return;
    }

    for rating in section.ratings_descending() {
        let slots: Vec<String> = (0..section.count(rating))
            .map(|i| {
                section
                    .slot_label(rating, i)
                    .filter(|label| !label.is_empty())
                    .unwrap_or("—")
                    .to_string()
            })
            .collect();
        let rating = rating.to_string();
        let rating = format!("{rating:>3}");
        println!("    {}  {}", rating.bold(), slots.join(", "));
    }
}

/// Update basic fields on a character.
pub fn set(
    store: &SnapshotStore,
    name: &str,
    rename: Option<&str>,
    concept: Option<&str>,
    trouble: Option<&str>,
    extras: Option<&str>,
) -> Result<(), String> {
    super::with_character(store, name, |character| {
        if let Some(rename) = rename {
            character.set_name(rename);
        }
        if let Some(concept) = concept {
            character.set_concept(concept);
        }
        if let Some(trouble) = trouble {
            character.set_trouble(trouble);
        }
        if let Some(extras) = extras {
            character.set_extras(extras);
        }
        Ok(())
    })?;
    println!("  Updated.");
    Ok(())
}

/// Remove a character from the roster.
pub fn remove(store: &SnapshotStore, name: &str) -> Result<(), String> {
    let mut table = super::load_table(store)?;
    let id = table
        .character_named(name)
        .map_err(|e| e.to_string())?
        .id;
    let removed = table.remove_character(id).map_err(|e| e.to_string())?;
    super::save_table(store, &table)?;
    println!("  Removed {}.", removed.name.bold());
    Ok(())
}
