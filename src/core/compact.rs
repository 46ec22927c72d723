//! Directional compaction - the merge rule applied to rows and columns
//!
//! One procedure handles all four directions. A line is always read starting
//! at the wall being pushed toward, so merge tie-breaking is identical in
//! every direction: the collision nearest that wall wins, and a tile made by
//! a merge never merges again within the same move.

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::types::{Direction, MAX_BOARD_SIZE};

/// Scratch buffer for one row or column
type Line = ArrayVec<u32, MAX_BOARD_SIZE>;

/// What a slide did to the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Points earned, the sum of all merge result values
    pub score_delta: u32,
    /// Every merge result value, in scan order (line by line, wall outward)
    pub merged: Vec<u32>,
}

/// Slide all tiles toward one wall, merging equal adjacent pairs.
///
/// Mutates `grid` in place; callers wanting a preview pass a clone.
pub fn slide(grid: &mut Grid, direction: Direction) -> SlideOutcome {
    let size = grid.size();
    let mut outcome = SlideOutcome::default();

    for lane in 0..size {
        // Compaction: non-zero values ordered from the target wall outward.
        let mut line = Line::new();
        for step in 0..size {
            let (row, col) = cell_at(direction, size, lane, step);
            let value = grid.get(row, col);
            if value != 0 {
                line.push(value);
            }
        }

        merge_line(&mut line, &mut outcome);

        // Write back, zero-padded on the side away from the wall.
        for step in 0..size {
            let (row, col) = cell_at(direction, size, lane, step);
            grid.set(row, col, line.get(step).copied().unwrap_or(0));
        }
    }

    outcome
}

/// Map (lane, step) to grid coordinates, with step 0 at the target wall
#[inline]
fn cell_at(direction: Direction, size: usize, lane: usize, step: usize) -> (usize, usize) {
    match direction {
        Direction::Left => (lane, step),
        Direction::Right => (lane, size - 1 - step),
        Direction::Up => (step, lane),
        Direction::Down => (size - 1 - step, lane),
    }
}

/// Merge equal adjacent pairs in an already-compacted line, front first.
///
/// After a merge the scan moves past the result tile, so [2,2,2,2] becomes
/// [4,4] and never [8].
fn merge_line(line: &mut Line, outcome: &mut SlideOutcome) {
    let mut i = 0;
    while i + 1 < line.len() {
        if line[i] == line[i + 1] {
            let merged = line[i] * 2;
            line[i] = merged;
            line.remove(i + 1);
            outcome.score_delta += merged;
            outcome.merged.push(merged);
        }
        i += 1;
    }
}
