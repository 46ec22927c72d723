//! History snapshots and move previews.

use std::collections::BTreeSet;

use crate::core::grid::Grid;

/// Immutable capture of the engine's mutable state at one point in time.
///
/// Stored by value in the undo history; `Clone` is the deep copy, so no
/// history entry ever aliases the live grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub grid: Grid,
    pub score: u32,
    pub achieved: BTreeSet<u32>,
}

impl GameState {
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Result of simulating a move without touching the live game.
///
/// No tile is spawned: this is the slide alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePreview {
    /// Grid after the slide
    pub grid: Grid,
    /// Score the game would hold after the slide
    pub score: u32,
    /// Whether the slide changed any cell
    pub changed: bool,
    /// Points the slide earned
    pub score_delta: u32,
    /// Distinct merge values produced, in first-merge order
    pub new_achievements: Vec<u32>,
    /// Every merge result value, in scan order
    pub merged: Vec<u32>,
}
