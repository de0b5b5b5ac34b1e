//! Roll records: the durable result of a 4dF check.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::die::{DICE_PER_ROLL, FateDie};

/// Unique identifier for a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollId(pub Uuid);

impl RollId {
    /// Generate a new random roll ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RollId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The recorded result of rolling 4dF plus a modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Unique identifier.
    pub id: RollId,
    /// Who rolled (a character or user name).
    pub sender: String,
    /// When the roll happened.
    pub timestamp: DateTime<Utc>,
    /// What the roll was for, e.g. a skill name.
    pub label: String,
    /// The four faces, in the order rolled.
    pub faces: [FateDie; DICE_PER_ROLL],
    /// The skill modifier added to the dice.
    pub modifier: i32,
    /// Sum of the faces plus the modifier.
    pub total: i32,
}

impl DiceRoll {
    /// Record a roll, computing the total from faces and modifier.
    pub fn new(
        sender: impl Into<String>,
        label: impl Into<String>,
        faces: [FateDie; DICE_PER_ROLL],
        modifier: i32,
    ) -> Self {
        let dice_total: i32 = faces.iter().map(|f| f.value()).sum();
        Self {
            id: RollId::new(),
            sender: sender.into(),
            timestamp: Utc::now(),
            label: label.into(),
            faces,
            modifier,
            total: dice_total + modifier,
        }
    }

    /// Sum of the four faces without the modifier.
    pub fn dice_total(&self) -> i32 {
        self.faces.iter().map(|f| f.value()).sum()
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{face}")?;
        }
        write!(f, "] {:+} = {:+}", self.modifier, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        let roll = DiceRoll::new(
            "Kira",
            "Fight",
            [FateDie::Plus, FateDie::Minus, FateDie::Blank, FateDie::Plus],
            2,
        );
        assert_eq!(roll.dice_total(), 1);
        assert_eq!(roll.total, 3);
    }

    #[test]
    fn all_minuses() {
        let roll = DiceRoll::new("Kira", "Flee", [FateDie::Minus; 4], 0);
        assert_eq!(roll.total, -4);
    }

    #[test]
    fn all_blanks_keep_modifier() {
        let roll = DiceRoll::new("Kira", "Lore", [FateDie::Blank; 4], 5);
        assert_eq!(roll.total, 5);
    }

    #[test]
    fn display() {
        let roll = DiceRoll::new(
            "Kira",
            "Fight",
            [FateDie::Plus, FateDie::Minus, FateDie::Blank, FateDie::Plus],
            2,
        );
        assert_eq!(roll.to_string(), "[+ - 0 +] +2 = +3");
    }

    #[test]
    fn round_trip_serde() {
        let roll = DiceRoll::new("Kira", "Shoot", [FateDie::Plus; 4], -1);
        let json = serde_json::to_string(&roll).unwrap();
        let back: DiceRoll = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roll);
    }
}
