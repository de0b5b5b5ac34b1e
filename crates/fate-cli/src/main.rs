//! CLI frontend for the Fate Nexus virtual tabletop.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nexus",
    about = "Fate Nexus — a terminal tabletop for Fate-style play",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the session snapshot (default: the per-user
    /// data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new table as game master
    New {
        /// Your display name
        name: String,
    },

    /// Join a table by invite code as a player
    Join {
        /// The invite code
        code: String,

        /// Your display name
        name: String,
    },

    /// Show the table: name, code, participants, characters
    Status,

    /// Manage the character roster
    Character {
        #[command(subcommand)]
        action: CharacterCmd,
    },

    /// Manage a character's aspects
    Aspect {
        #[command(subcommand)]
        action: AspectCmd,
    },

    /// Adjust a character's fate points (clamped at zero)
    Fate {
        /// Character name
        character: String,

        /// Points to add (negative to spend)
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },

    /// Manage a character's stress tracks
    Stress {
        #[command(subcommand)]
        action: StressCmd,
    },

    /// Manage a character's skill pyramid
    Skill {
        #[command(subcommand)]
        action: SkillCmd,
    },

    /// Manage a character's consequences
    Consequence {
        #[command(subcommand)]
        action: ConsequenceCmd,
    },

    /// Roll 4dF and record the result in the chat log
    Roll {
        /// Modifier added to the dice
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        modifier: i32,

        /// What the roll is for
        #[arg(short, long, default_value = "Manual roll")]
        label: String,

        /// Roll as this character (default: the first one you own)
        #[arg(short, long)]
        character: Option<String>,
    },

    /// Send a chat message; `/ai <prompt>` consults the oracle
    Say {
        /// The message (or /ai command)
        text: String,
    },

    /// Print the chat log
    Log {
        /// Only the last N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Set a character's portrait from an image file
    Portrait {
        /// Character name
        character: String,

        /// Path to the image
        file: PathBuf,
    },

    /// Export a character to a JSON document
    Export {
        /// Character name
        character: String,

        /// Output file (default: `<name>.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a character document into the roster
    Import {
        /// Path to the document
        file: PathBuf,
    },

    /// Delete the table snapshot and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Launch the interactive TUI
    Play,
}

#[derive(Subcommand)]
enum CharacterCmd {
    /// Add a character (GM default name: NPC; player default: your name)
    Add {
        /// Character name
        name: Option<String>,
    },

    /// List all characters
    List,

    /// Render a character sheet
    Show {
        /// Character name
        name: String,
    },

    /// Update name, concept, trouble, or extras
    Set {
        /// Character name
        name: String,

        /// New character name
        #[arg(long)]
        rename: Option<String>,

        /// New high concept
        #[arg(long)]
        concept: Option<String>,

        /// New trouble
        #[arg(long)]
        trouble: Option<String>,

        /// New extras text
        #[arg(long)]
        extras: Option<String>,
    },

    /// Remove a character from the roster
    Remove {
        /// Character name
        name: String,
    },
}

#[derive(Subcommand)]
enum AspectCmd {
    /// Add an aspect (permanent, or temporary with --temp)
    Add {
        /// Character name
        character: String,

        /// The aspect phrase
        text: String,

        /// Add as a temporary aspect with one free invoke
        #[arg(long)]
        temp: bool,
    },

    /// Remove an aspect by its position in the list (1-based)
    Remove {
        /// Character name
        character: String,

        /// Aspect position
        index: usize,

        /// Remove from the temporary aspects
        #[arg(long)]
        temp: bool,
    },

    /// Adjust a temporary aspect's invokes (clamped at zero)
    Invokes {
        /// Character name
        character: String,

        /// Temporary aspect position (1-based)
        index: usize,

        /// Invokes to add (negative to spend)
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
}

#[derive(Subcommand)]
enum StressCmd {
    /// Toggle a stress box (1-based): marks up to it, or undoes the tip
    Toggle {
        /// Character name
        character: String,

        /// Track name, e.g. physical
        track: String,

        /// Box number
        cell: usize,
    },

    /// Add a deletable stress track
    Add {
        /// Character name
        character: String,

        /// Track name
        name: String,
    },

    /// Remove a stress track (the built-in pair refuses)
    Remove {
        /// Character name
        character: String,

        /// Track name
        track: String,
    },

    /// Append a stress box (up to 10)
    Grow {
        /// Character name
        character: String,

        /// Track name
        track: String,
    },

    /// Drop the last stress box (down to 1)
    Shrink {
        /// Character name
        character: String,

        /// Track name
        track: String,
    },

    /// Clear every box on a track
    Reset {
        /// Character name
        character: String,

        /// Track name
        track: String,
    },
}

#[derive(Subcommand)]
enum SkillCmd {
    /// Add a slot at a rating, e.g. +3
    Add {
        /// Character name
        character: String,

        /// Rating, e.g. +3, 0, -1
        #[arg(allow_hyphen_values = true)]
        rating: String,

        /// Use the custom section instead of the ladder
        #[arg(long)]
        custom: bool,
    },

    /// Remove a slot at a rating
    Remove {
        /// Character name
        character: String,

        /// Rating, e.g. +3, 0, -1
        #[arg(allow_hyphen_values = true)]
        rating: String,

        /// Use the custom section instead of the ladder
        #[arg(long)]
        custom: bool,
    },

    /// Set the text of a slot (1-based index within the rating)
    Label {
        /// Character name
        character: String,

        /// Rating, e.g. +3, 0, -1
        #[arg(allow_hyphen_values = true)]
        rating: String,

        /// Slot position within the rating
        index: u32,

        /// The skill or approach name
        text: String,

        /// Use the custom section instead of the ladder
        #[arg(long)]
        custom: bool,
    },

    /// Remove every rating and label from the custom section
    Clear {
        /// Character name
        character: String,
    },
}

#[derive(Subcommand)]
enum ConsequenceCmd {
    /// Add a consequence slot: mild, moderate, severe, or extreme
    Add {
        /// Character name
        character: String,

        /// Severity tier
        severity: String,
    },

    /// Remove a consequence by its position (1-based)
    Remove {
        /// Character name
        character: String,

        /// Consequence position
        index: usize,
    },

    /// Describe a consequence
    Text {
        /// Character name
        character: String,

        /// Consequence position (1-based)
        index: usize,

        /// The description
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let store = commands::store(cli.data_dir.as_deref());

    let result = match cli.command {
        Commands::New { name } => commands::table::new(&store, &name),
        Commands::Join { code, name } => commands::table::join(&store, &code, &name),
        Commands::Status => commands::table::status(&store),
        Commands::Character { action } => match action {
            CharacterCmd::Add { name } => {
                commands::character::add(&store, name.as_deref())
            }
            CharacterCmd::List => commands::character::list(&store),
            CharacterCmd::Show { name } => commands::character::show(&store, &name),
            CharacterCmd::Set {
                name,
                rename,
                concept,
                trouble,
                extras,
            } => commands::character::set(
                &store,
                &name,
                rename.as_deref(),
                concept.as_deref(),
                trouble.as_deref(),
                extras.as_deref(),
            ),
            CharacterCmd::Remove { name } => commands::character::remove(&store, &name),
        },
        Commands::Aspect { action } => match action {
            AspectCmd::Add {
                character,
                text,
                temp,
            } => commands::aspect::add(&store, &character, &text, temp),
            AspectCmd::Remove {
                character,
                index,
                temp,
            } => commands::aspect::remove(&store, &character, index, temp),
            AspectCmd::Invokes {
                character,
                index,
                delta,
            } => commands::aspect::invokes(&store, &character, index, delta),
        },
        Commands::Fate { character, delta } => commands::fate::adjust(&store, &character, delta),
        Commands::Stress { action } => match action {
            StressCmd::Toggle {
                character,
                track,
                cell,
            } => commands::stress::toggle(&store, &character, &track, cell),
            StressCmd::Add { character, name } => commands::stress::add(&store, &character, &name),
            StressCmd::Remove { character, track } => {
                commands::stress::remove(&store, &character, &track)
            }
            StressCmd::Grow { character, track } => {
                commands::stress::grow(&store, &character, &track)
            }
            StressCmd::Shrink { character, track } => {
                commands::stress::shrink(&store, &character, &track)
            }
            StressCmd::Reset { character, track } => {
                commands::stress::reset(&store, &character, &track)
            }
        },
        Commands::Skill { action } => match action {
            SkillCmd::Add {
                character,
                rating,
                custom,
            } => commands::skill::add(&store, &character, &rating, custom),
            SkillCmd::Remove {
                character,
                rating,
                custom,
            } => commands::skill::remove(&store, &character, &rating, custom),
            SkillCmd::Label {
                character,
                rating,
                index,
                text,
                custom,
            } => commands::skill::label(&store, &character, &rating, index, &text, custom),
            SkillCmd::Clear { character } => commands::skill::clear(&store, &character),
        },
        Commands::Consequence { action } => match action {
            ConsequenceCmd::Add {
                character,
                severity,
            } => commands::consequence::add(&store, &character, &severity),
            ConsequenceCmd::Remove { character, index } => {
                commands::consequence::remove(&store, &character, index)
            }
            ConsequenceCmd::Text {
                character,
                index,
                text,
            } => commands::consequence::text(&store, &character, index, &text),
        },
        Commands::Roll {
            modifier,
            label,
            character,
        } => commands::roll::run(&store, modifier, &label, character.as_deref()),
        Commands::Say { text } => commands::say::run(&store, &text),
        Commands::Log { limit } => commands::log::run(&store, limit),
        Commands::Portrait { character, file } => {
            commands::portrait::run(&store, &character, &file)
        }
        Commands::Export { character, output } => {
            commands::export::run(&store, &character, output.as_deref())
        }
        Commands::Import { file } => commands::import::run(&store, &file),
        Commands::Reset { force } => commands::table::reset(&store, force),
        Commands::Play => tui::run(&store),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
