//! Aspects: permanent phrases and temporary situational advantages.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an aspect (permanent or temporary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectId(pub Uuid);

impl AspectId {
    /// Generate a new random aspect ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AspectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A permanent aspect: a free-text phrase that is always true of the
/// character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Unique identifier.
    pub id: AspectId,
    /// The aspect phrase.
    pub text: String,
}

impl Aspect {
    /// Create an aspect with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: AspectId::new(),
            text: text.into(),
        }
    }
}

/// A temporary aspect (boost or situational advantage) that can be
/// invoked a limited number of times before it expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempAspect {
    /// Unique identifier.
    pub id: AspectId,
    /// The aspect phrase.
    pub text: String,
    /// Remaining free invokes. Never negative; adjusted with clamping.
    pub invokes: u32,
}

impl TempAspect {
    /// Create a temporary aspect with a fresh id and one free invoke.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: AspectId::new(),
            text: text.into(),
            invokes: 1,
        }
    }

    /// Adjust the invoke counter by a delta, clamping at zero.
    /// Returns the new value.
    pub fn adjust_invokes(&mut self, delta: i32) -> u32 {
        self.invokes = self.invokes.saturating_add_signed(delta);
        self.invokes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_temp_aspect_has_one_invoke() {
        let a = TempAspect::new("In the shadows");
        assert_eq!(a.invokes, 1);
    }

    #[test]
    fn invokes_clamp_at_zero() {
        let mut a = TempAspect::new("Off balance");
        assert_eq!(a.adjust_invokes(-5), 0);
        assert_eq!(a.adjust_invokes(3), 3);
        assert_eq!(a.adjust_invokes(-1), 2);
    }

    #[test]
    fn round_trip_serde() {
        let a = Aspect::new("Sworn to the Iron Court");
        let json = serde_json::to_string(&a).unwrap();
        let back: Aspect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
