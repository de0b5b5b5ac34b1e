use std::io::{self, BufRead, Write};

use colored::Colorize;
use fate_table::{SnapshotStore, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Start a new table as GM.
pub fn new(store: &SnapshotStore, name: &str) -> Result<(), String> {
    if store.load().is_some() {
        return Err(
            "a table already exists. Run `nexus reset` first to start over".to_string(),
        );
    }

    let mut rng = StdRng::from_os_rng();
    let table = Table::create(name, &mut rng);
    super::save_table(store, &table)?;

    println!("  Table {} created.", table.room.name.bold());
    println!("  Invite code: {}", table.room.code.bold().cyan());
    println!();
    println!("  Next:");
    println!("    nexus character add \"Name\"   # add a character");
    println!("    nexus play                    # open the table");
    Ok(())
}

/// Join a table by invite code as a player.
pub fn join(store: &SnapshotStore, code: &str, name: &str) -> Result<(), String> {
    if store.load().is_some() {
        return Err(
            "a table already exists. Run `nexus reset` first to start over".to_string(),
        );
    }

    let table = Table::join(name, code);
    super::save_table(store, &table)?;

    println!(
        "  Joined table {} as {}.",
        table.room.code.bold().cyan(),
        table.user.name.bold()
    );
    Ok(())
}

/// Print the table summary.
pub fn status(store: &SnapshotStore) -> Result<(), String> {
    let table = super::load_table(store)?;

    println!("  {} [{}]", table.room.name.bold(), table.room.code.cyan());
    println!("  You: {} ({})", table.user.name, table.user.role);
    println!("  Participants: {}", table.room.players.len());
    println!("  Characters:   {}", table.room.characters.len());
    println!("  Messages:     {}", table.room.messages.len());
    println!();
    println!("  Snapshot: {}", store.path().display().to_string().dimmed());
    Ok(())
}

/// Delete the snapshot, prompting unless forced.
pub fn reset(store: &SnapshotStore, force: bool) -> Result<(), String> {
    if store.load().is_none() {
        println!("  Nothing to reset.");
        return Ok(());
    }

    if !force {
        print!("Delete the table and its chat log? [y/N] ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if !line.trim().eq_ignore_ascii_case("y") {
            println!("  Aborted.");
            return Ok(());
        }
    }

    store.clear().map_err(|e| e.to_string())?;
    println!("  Table reset.");
    Ok(())
}
