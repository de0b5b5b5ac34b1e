//! The skill pyramid: sparse sections mapping ratings to labeled slots.
//!
//! A section stores how many slots exist at each rating plus the free
//! text typed into each slot. Slot text is keyed by `"{rating}_{index}"`
//! and deliberately survives the removal of its slot: shrinking a rating
//! and growing it again brings the old labels back.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A skill rating on the adjective ladder, e.g. `+3`, `0`, `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(pub i8);

impl Rating {
    /// Parse a rating from a string like `+3`, `0`, or `-1`.
    ///
    /// A leading `+` is optional for positive values.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('+').unwrap_or(s);
        digits.parse::<i8>().ok().map(Self)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid rating: \"{s}\"")))
    }
}

/// One section of the skill pyramid (the fixed ladder or the custom
/// section), stored and rendered independently of the other.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkillSection {
    /// Slot count per rating. A rating present here always has count ≥ 1.
    pub counts: BTreeMap<Rating, u32>,
    /// Free text per slot, keyed by `"{rating}_{index}"`. Entries for
    /// removed slots are kept, not garbage-collected.
    pub labels: HashMap<String, String>,
}

/// Build the label-map key for a slot.
fn slot_key(rating: Rating, index: u32) -> String {
    format!("{rating}_{index}")
}

impl SkillSection {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default ladder section: one empty slot at each rating from
    /// `+5` down to `0`.
    pub fn default_ladder() -> Self {
        let counts = (0..=5).map(|v| (Rating(v), 1)).collect();
        Self {
            counts,
            labels: HashMap::new(),
        }
    }

    /// Number of slots at a rating (0 when the rating is absent).
    pub fn count(&self, rating: Rating) -> u32 {
        self.counts.get(&rating).copied().unwrap_or(0)
    }

    /// Returns true if the section has no ratings at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add one slot at a rating, creating the rating with count 1 if it
    /// was absent. Returns the new count.
    pub fn add_slot(&mut self, rating: Rating) -> u32 {
        let count = self.counts.entry(rating).or_insert(0);
        *count += 1;
        *count
    }

    /// Remove one slot at a rating. Dropping the last slot removes the
    /// rating key entirely; its labels stay behind. Removing from an
    /// absent rating is a no-op. Returns the new count.
    pub fn remove_slot(&mut self, rating: Rating) -> u32 {
        match self.counts.get_mut(&rating) {
            Some(count) if *count > 1 => {
                *count -= 1;
                *count
            }
            Some(_) => {
                self.counts.remove(&rating);
                0
            }
            None => 0,
        }
    }

    /// Set the free text of a slot. The index is not checked against the
    /// current count, so text can be staged for slots that do not exist
    /// yet (or no longer exist).
    pub fn set_slot_label(&mut self, rating: Rating, index: u32, text: impl Into<String>) {
        self.labels.insert(slot_key(rating, index), text.into());
    }

    /// The free text of a slot, if any was ever set.
    pub fn slot_label(&self, rating: Rating, index: u32) -> Option<&str> {
        self.labels.get(&slot_key(rating, index)).map(String::as_str)
    }

    /// All ratings present in the section, highest first.
    pub fn ratings_descending(&self) -> Vec<Rating> {
        self.counts.keys().rev().copied().collect()
    }

    /// Remove every rating and every label.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.labels.clear();
    }
}
