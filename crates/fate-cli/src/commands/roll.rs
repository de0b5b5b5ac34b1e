use colored::Colorize;
use fate_dice::{DiceRoll, ladder_label, roll_dice};
use fate_table::SnapshotStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Roll 4dF, print the outcome, and record it in the chat log.
pub fn run(
    store: &SnapshotStore,
    modifier: i32,
    label: &str,
    character: Option<&str>,
) -> Result<(), String> {
    let mut table = super::load_table(store)?;

    let sender = match character {
        Some(name) => table.character_named(name).map_err(|e| e.to_string())?.name,
        None => table
            .room
            .characters
            .iter()
            .find(|c| c.owner == table.user.id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| table.user.name.clone()),
    };

    let mut rng = StdRng::from_os_rng();
    let faces = roll_dice(&mut rng);
    let roll = DiceRoll::new(sender.clone(), label, faces, modifier);

    let rung = ladder_label(roll.total).unwrap_or("off the ladder");
    println!(
        "  {} rolls {}: {} ({})",
        sender.bold(),
        label,
        roll.to_string().bold().cyan(),
        rung
    );

    table.record_roll(roll);
    super::save_table(store, &table)
}
