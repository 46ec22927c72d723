//! Game engine - the 2048 rule state machine
//!
//! Owns the grid, score, achievement set, undo history and RNG. All mutation
//! goes through `apply_move`, `undo` and `init_game`; collaborators observe
//! side effects through the `GameListener` callbacks and re-pull state via
//! the getters. Everything is synchronous and single-threaded.

use std::collections::BTreeSet;

use crate::core::compact::slide;
use crate::core::grid::Grid;
use crate::core::history::History;
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{GameState, MovePreview};
use crate::types::{
    Direction, FOUR_TILE_ODDS, MAX_BOARD_SIZE, MIN_BOARD_SIZE, PREVIEW_TILE_VALUES,
    SMALL_BOARD_SIZE, SMALL_BOARD_WIN_TILE, WIN_TILE,
};

/// Synchronous observer for engine side effects.
///
/// Callbacks run in-line with the call that triggers them, in the order
/// documented on `apply_move`. Handlers must not call back into the engine.
/// All methods default to no-ops so consumers implement only what they need.
pub trait GameListener {
    fn on_score_changed(&mut self, _score: u32) {}
    fn on_grid_changed(&mut self) {}
    fn on_game_won(&mut self) {}
    fn on_game_over(&mut self) {}
    fn on_first_time_achievement(&mut self, _value: u32) {}
    fn on_number_merged(&mut self, _value: u32) {}
}

/// The rule engine for one game, fixed to its board size for life
pub struct GameEngine {
    grid: Grid,
    score: u32,
    achieved: BTreeSet<u32>,
    history: History,
    rng: SimpleRng,
    listener: Option<Box<dyn GameListener>>,
}

impl GameEngine {
    /// Create an engine and start its first game.
    ///
    /// `size` is a caller-validated contract (3..=8); `seed` drives every
    /// spawn this engine will ever make.
    pub fn new(size: usize, seed: u32) -> Self {
        debug_assert!((MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size));
        let mut engine = Self {
            grid: Grid::new(size),
            score: 0,
            achieved: BTreeSet::new(),
            history: History::new(),
            rng: SimpleRng::new(seed),
            listener: None,
        };
        engine.init_game();
        engine
    }

    /// Register the single listener, replacing any previous one
    pub fn set_listener(&mut self, listener: Box<dyn GameListener>) {
        self.listener = Some(listener);
    }

    /// Reset to a fresh game on the same board size.
    ///
    /// Clears grid, score, achievements and history, spawns the two opening
    /// tiles, and records the result as the sole history entry.
    pub fn init_game(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.achieved.clear();
        self.history.clear();

        self.spawn_tile();
        self.spawn_tile();

        self.history.push(self.snapshot());
        let score = self.score;
        self.notify(|l| l.on_score_changed(score));
        self.notify(|l| l.on_grid_changed());
    }

    /// Simulate a move on a copy of the grid.
    ///
    /// Touches nothing: no score, no history, no spawn, no notifications.
    /// Safe to call repeatedly for any direction.
    pub fn preview_move(&self, direction: Direction) -> MovePreview {
        let mut grid = self.grid.clone();
        let outcome = slide(&mut grid, direction);
        let changed = grid != self.grid;
        MovePreview {
            score: self.score + outcome.score_delta,
            changed,
            score_delta: outcome.score_delta,
            new_achievements: first_merges(&outcome.merged),
            merged: outcome.merged,
            grid,
        }
    }

    /// Apply a move to the live game.
    ///
    /// If the slide leaves the grid identical, returns `false` with zero
    /// side effects. Otherwise: accrues score, then notifies in order -
    /// every merge value, each first-time achievement, (tile spawns, history
    /// is pushed), score changed, grid changed, and finally either game-won
    /// or game-over when the respective condition holds. Returns `true`.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let before = self.grid.clone();
        let outcome = slide(&mut self.grid, direction);
        if self.grid == before {
            return false;
        }
        self.score += outcome.score_delta;

        for &value in &outcome.merged {
            self.notify(|l| l.on_number_merged(value));
        }
        for value in first_merges(&outcome.merged) {
            if self.achieved.insert(value) {
                self.notify(|l| l.on_first_time_achievement(value));
            }
        }

        self.spawn_tile();
        self.history.push(self.snapshot());

        let score = self.score;
        self.notify(|l| l.on_score_changed(score));
        self.notify(|l| l.on_grid_changed());

        if self.has_won() {
            self.notify(|l| l.on_game_won());
        } else if self.is_game_over() {
            self.notify(|l| l.on_game_over());
        }

        true
    }

    /// Restore the state before the last applied move.
    ///
    /// Returns `false` with zero side effects when no prior state exists.
    /// Grid, score and achievement set all rewind; achievements unlocked
    /// after the restored point are forgotten.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo() else {
            return false;
        };
        self.grid = previous.grid;
        self.score = previous.score;
        self.achieved = previous.achieved;

        let score = self.score;
        self.notify(|l| l.on_score_changed(score));
        self.notify(|l| l.on_grid_changed());
        true
    }

    /// Whether the board holds a winning tile.
    ///
    /// 2048 wins everywhere; on the 3x3 board 256 wins as well.
    pub fn has_won(&self) -> bool {
        if self.grid.contains(WIN_TILE) {
            return true;
        }
        self.grid.size() == SMALL_BOARD_SIZE && self.grid.contains(SMALL_BOARD_WIN_TILE)
    }

    /// Whether no move can change the board: full grid, no equal neighbors.
    /// A grid with any empty cell is never game over.
    pub fn is_game_over(&self) -> bool {
        self.grid.is_full() && !self.grid.has_equal_neighbors()
    }

    /// Read-only view of the live grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Tile values reached at least once this session
    pub fn achieved_numbers(&self) -> &BTreeSet<u32> {
        &self.achieved
    }

    /// Cosmetic board for the menu screen: a few representative tiles
    /// scattered at random. No relationship to the live game.
    pub fn generate_preview_grid(&mut self) -> Grid {
        let size = self.grid.size();
        let mut preview = Grid::new(size);

        let mut positions: Vec<(usize, usize)> = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                positions.push((row, col));
            }
        }
        self.rng.shuffle(&mut positions);

        let count = ((size * size * 3) / 10).max(2);
        let pool = PREVIEW_TILE_VALUES.len().min(size) as u32;
        for &(row, col) in positions.iter().take(count) {
            let value = PREVIEW_TILE_VALUES[self.rng.next_range(pool) as usize];
            preview.set(row, col, value);
        }
        preview
    }

    /// Place a 2 (or, one time in ten, a 4) on a uniformly random empty
    /// cell. No-op on a full grid.
    fn spawn_tile(&mut self) {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return;
        }
        let (row, col) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_range(FOUR_TILE_ODDS) == 0 {
            4
        } else {
            2
        };
        self.grid.set(row, col, value);
    }

    fn snapshot(&self) -> GameState {
        GameState {
            grid: self.grid.clone(),
            score: self.score,
            achieved: self.achieved.clone(),
        }
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn GameListener)) {
        if let Some(listener) = self.listener.as_deref_mut() {
            f(listener);
        }
    }
}

/// Distinct values in first-occurrence order
fn first_merges(merged: &[u32]) -> Vec<u32> {
    let mut distinct = Vec::new();
    for &value in merged {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }
    distinct
}
