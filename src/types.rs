//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board size limits (cells per side)
pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 8;
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// On the smallest board the win threshold drops to 256; 2048 is not
/// practically reachable on a 3x3 grid. Applies to that size only.
pub const SMALL_BOARD_WIN_TILE: u32 = 256;
pub const SMALL_BOARD_SIZE: usize = 3;

/// Undo history depth, counting the current state
pub const HISTORY_LIMIT: usize = 20;

/// A spawned tile is a 4 once in this many spawns, a 2 otherwise
pub const FOUR_TILE_ODDS: u32 = 10;

/// Tile values scattered on the cosmetic menu preview board
pub const PREVIEW_TILE_VALUES: [u32; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub fn all() -> [Direction; 4] {
        [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ]
    }

}
