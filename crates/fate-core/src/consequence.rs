//! Consequences: lasting harm slots with a severity tier and a penalty.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a consequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsequenceId(pub Uuid);

impl ConsequenceId {
    /// Generate a new random consequence ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConsequenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConsequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// How bad a consequence is. Each tier carries the stress value it
/// absorbs, expressed as a negative penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Shrugged off by the end of the scene (−2).
    Mild,
    /// Lingers for a session or two (−4).
    Moderate,
    /// A campaign-arc injury (−6).
    Severe,
    /// Permanently rewrites the character (−8).
    Extreme,
}

impl Severity {
    /// The label shown on the sheet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::Extreme => "Extreme",
        }
    }

    /// The stress value this tier absorbs, as a negative penalty.
    pub fn penalty(self) -> i32 {
        match self {
            Self::Mild => -2,
            Self::Moderate => -4,
            Self::Severe => -6,
            Self::Extreme => -8,
        }
    }

    /// Parse a severity from its label (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.penalty())
    }
}

/// A consequence slot on a character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consequence {
    /// Unique identifier.
    pub id: ConsequenceId,
    /// Severity tier.
    pub severity: Severity,
    /// Free-text description of the harm; empty while the slot is open.
    pub text: String,
}

impl Consequence {
    /// Create an open (empty-text) consequence slot.
    pub fn new(severity: Severity) -> Self {
        Self {
            id: ConsequenceId::new(),
            severity,
            text: String::new(),
        }
    }
}
