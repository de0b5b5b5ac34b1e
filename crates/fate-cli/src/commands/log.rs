use colored::Colorize;
use fate_dice::ladder_label;
use fate_table::{MessageKind, SnapshotStore};

/// Print the chat log, optionally only the last N entries.
pub fn run(store: &SnapshotStore, limit: Option<usize>) -> Result<(), String> {
    let table = super::load_table(store)?;

    let messages = &table.room.messages;
    let skip = limit.map_or(0, |n| messages.len().saturating_sub(n));

    for message in &messages[skip..] {
        let time = message.timestamp.format("%H:%M").to_string();
        let line = match message.kind {
            MessageKind::System => message.body.dimmed().italic().to_string(),
            MessageKind::Oracle => {
                format!("{}: {}", message.sender.bold().magenta(), message.body)
            }
            MessageKind::Roll => match &message.roll {
                Some(roll) => {
                    let rung = ladder_label(roll.total).unwrap_or("off the ladder");
                    format!(
                        "{} {} {} ({rung})",
                        message.sender.bold(),
                        message.body.dimmed(),
                        roll.to_string().cyan()
                    )
                }
                None => format!("{} {}", message.sender.bold(), message.body),
            },
            MessageKind::Text => format!("{}: {}", message.sender.bold(), message.body),
        };
        println!("  {} {}", time.dimmed(), line);
    }

    if messages.is_empty() {
        println!("  The log is empty.");
    }
    Ok(())
}
