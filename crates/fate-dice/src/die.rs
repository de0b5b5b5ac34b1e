//! The three-faced Fate die.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// How many dice a check rolls.
pub const DICE_PER_ROLL: usize = 4;

/// One face of a Fate die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FateDie {
    /// The − face, worth −1.
    Minus,
    /// The blank face, worth 0.
    Blank,
    /// The + face, worth +1.
    Plus,
}

impl FateDie {
    /// The numeric value of this face.
    pub fn value(self) -> i32 {
        match self {
            Self::Minus => -1,
            Self::Blank => 0,
            Self::Plus => 1,
        }
    }

    /// The glyph drawn on this face.
    pub fn glyph(self) -> char {
        match self {
            Self::Minus => '-',
            Self::Blank => '0',
            Self::Plus => '+',
        }
    }

    /// Build a face from a numeric value. Values above +1 or below −1
    /// clamp to the nearest face.
    pub fn from_value(value: i32) -> Self {
        match value {
            v if v < 0 => Self::Minus,
            0 => Self::Blank,
            _ => Self::Plus,
        }
    }

    /// Roll one die with the given RNG.
    pub fn roll(rng: &mut StdRng) -> Self {
        Self::from_value(rng.random_range(-1..=1))
    }
}

impl fmt::Display for FateDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Roll four Fate dice, each an independent uniform draw.
pub fn roll_dice(rng: &mut StdRng) -> [FateDie; DICE_PER_ROLL] {
    std::array::from_fn(|_| FateDie::roll(rng))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn face_values() {
        assert_eq!(FateDie::Minus.value(), -1);
        assert_eq!(FateDie::Blank.value(), 0);
        assert_eq!(FateDie::Plus.value(), 1);
    }

    #[test]
    fn from_value_clamps() {
        assert_eq!(FateDie::from_value(-3), FateDie::Minus);
        assert_eq!(FateDie::from_value(0), FateDie::Blank);
        assert_eq!(FateDie::from_value(7), FateDie::Plus);
    }

    #[test]
    fn roll_produces_four_valid_faces() {
        let mut rng = StdRng::seed_from_u64(42);
        let faces = roll_dice(&mut rng);
        assert_eq!(faces.len(), DICE_PER_ROLL);
        for face in faces {
            assert!((-1..=1).contains(&face.value()));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(roll_dice(&mut rng1), roll_dice(&mut rng2));
    }

    #[test]
    fn all_faces_show_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            for face in roll_dice(&mut rng) {
                seen[(face.value() + 1) as usize] = true;
            }
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn display() {
        assert_eq!(FateDie::Plus.to_string(), "+");
        assert_eq!(FateDie::Blank.to_string(), "0");
        assert_eq!(FateDie::Minus.to_string(), "-");
    }
}
