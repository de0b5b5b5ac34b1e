//! Stress tracks: ordered damage boxes with a fill-forward rule.
//!
//! Cells are ordered left to right by severity. Marking a box means all
//! lower boxes are consumed too, and any higher marks from a previous
//! state are cleared; only the tip (the highest marked box) can be
//! unmarked on its own.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The largest number of cells a track can grow to.
pub const MAX_CELLS: usize = 10;
/// The smallest number of cells a track can shrink to.
pub const MIN_CELLS: usize = 1;

/// Unique identifier for a stress track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub Uuid);

impl TrackId {
    /// Generate a new random track ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A named row of stress boxes on a character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTrack {
    /// Unique identifier.
    pub id: TrackId,
    /// Display name, e.g. "Physical".
    pub name: String,
    /// Marked state per cell, ordered by increasing severity.
    pub cells: Vec<bool>,
    /// Protected tracks (the built-in pair) cannot be removed.
    pub protected: bool,
}

impl StressTrack {
    /// Create a track with two unmarked cells.
    pub fn new(name: impl Into<String>, protected: bool) -> Self {
        Self {
            id: TrackId::new(),
            name: name.into(),
            cells: vec![false; 2],
            protected,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the track has no cells. Never true in practice;
    /// tracks are kept at [`MIN_CELLS`] or more.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The index of the highest marked cell, if any cell is marked.
    pub fn tip(&self) -> Option<usize> {
        self.cells.iter().rposition(|&marked| marked)
    }

    /// Number of marked cells.
    pub fn marked(&self) -> usize {
        self.cells.iter().filter(|&&marked| marked).count()
    }

    /// Toggle the cell at `index`.
    ///
    /// If the cell is the current tip it is unmarked on its own (undo).
    /// Otherwise every cell up to and including `index` is marked and
    /// every cell past it is cleared. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.cells.len() {
            return;
        }
        if self.tip() == Some(index) {
            self.cells[index] = false;
            return;
        }
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = i <= index;
        }
    }

    /// Append one unmarked cell, up to [`MAX_CELLS`].
    pub fn grow(&mut self) {
        if self.cells.len() < MAX_CELLS {
            self.cells.push(false);
        }
    }

    /// Remove the last cell, down to [`MIN_CELLS`].
    pub fn shrink(&mut self) {
        if self.cells.len() > MIN_CELLS {
            self.cells.pop();
        }
    }

    /// Unmark every cell.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }
}

impl fmt::Display for StressTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for &marked in &self.cells {
            write!(f, "{}", if marked { "[x]" } else { "[ ]" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_track_is_clear() {
        let t = StressTrack::new("Physical", true);
        assert_eq!(t.len(), 2);
        assert_eq!(t.tip(), None);
        assert_eq!(t.marked(), 0);
    }

    #[test]
    fn toggle_fills_forward() {
        let mut t = StressTrack::new("Physical", true);
        t.grow();
        t.toggle(2);
        assert_eq!(t.cells, vec![true, true, true]);
    }

    #[test]
    fn toggle_clears_past_index() {
        let mut t = StressTrack::new("Physical", true);
        t.grow();
        t.grow();
        t.toggle(3);
        t.toggle(1);
        assert_eq!(t.cells, vec![true, true, false, false]);
    }

    #[test]
    fn toggle_tip_unmarks_only_tip() {
        let mut t = StressTrack::new("Physical", true);
        t.grow();
        t.toggle(2);
        t.toggle(2);
        assert_eq!(t.cells, vec![true, true, false]);
    }

    #[test]
    fn toggle_marked_non_tip_refills() {
        let mut t = StressTrack::new("Physical", true);
        t.grow();
        t.toggle(2);
        // Cell 0 is marked but not the tip, so this re-fills up to 0.
        t.toggle(0);
        assert_eq!(t.cells, vec![true, false, false]);
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut t = StressTrack::new("Physical", true);
        t.toggle(9);
        assert_eq!(t.marked(), 0);
    }

    #[test]
    fn grow_caps_at_max() {
        let mut t = StressTrack::new("Magic", false);
        for _ in 0..20 {
            t.grow();
        }
        assert_eq!(t.len(), MAX_CELLS);
    }

    #[test]
    fn shrink_floors_at_min() {
        let mut t = StressTrack::new("Magic", false);
        for _ in 0..20 {
            t.shrink();
        }
        assert_eq!(t.len(), MIN_CELLS);
    }

    #[test]
    fn shrink_drops_marks_with_cells() {
        let mut t = StressTrack::new("Magic", false);
        t.toggle(1);
        t.shrink();
        assert_eq!(t.cells, vec![true]);
    }

    #[test]
    fn reset_clears_all() {
        let mut t = StressTrack::new("Physical", true);
        t.toggle(1);
        t.reset();
        assert_eq!(t.cells, vec![false, false]);
    }

    #[test]
    fn display() {
        let mut t = StressTrack::new("Physical", true);
        t.toggle(0);
        assert_eq!(t.to_string(), "Physical: [x][ ]");
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            // Marks always form a contiguous prefix: toggling fills a
            // prefix, undoing the tip shortens it, grow/shrink keep it.
            #[test]
            fn marks_form_a_prefix(indexes in prop::collection::vec(0usize..12, 0..50)) {
                let mut t = StressTrack::new("Physical", true);
                for (step, index) in indexes.into_iter().enumerate() {
                    match step % 4 {
                        0 | 1 => t.toggle(index),
                        2 => t.grow(),
                        _ => t.shrink(),
                    }
                    let tip = t.tip();
                    for (i, &marked) in t.cells.iter().enumerate() {
                        prop_assert_eq!(marked, tip.is_some_and(|tip| i <= tip));
                    }
                    prop_assert!(t.len() >= MIN_CELLS && t.len() <= MAX_CELLS);
                }
            }
        }
    }
}
