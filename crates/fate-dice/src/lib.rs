//! Fate dice for Fate Nexus.
//!
//! A check rolls four Fate dice (faces −, blank, +), sums them, and adds
//! a skill modifier. Rolling always succeeds and has no side effects;
//! recording the result in the chat log is the caller's concern. All
//! rolling functions take `&mut StdRng` so tests can seed them.

/// The three-faced Fate die and pool rolling.
pub mod die;
/// The adjective ladder mapping totals to descriptive labels.
pub mod ladder;
/// Roll records: four faces, a modifier, and a total.
pub mod roll;

/// Re-export die types.
pub use die::{FateDie, roll_dice};
/// Re-export the ladder lookup.
pub use ladder::ladder_label;
/// Re-export roll records.
pub use roll::{DiceRoll, RollId};
