//! Core module - pure game rules with no I/O
//!
//! Everything here is deterministic: the only randomness is the seedable
//! per-engine RNG used for tile spawning and the cosmetic preview board.

pub mod compact;
pub mod engine;
pub mod grid;
pub mod history;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use compact::{slide, SlideOutcome};
pub use engine::{GameEngine, GameListener};
pub use grid::Grid;
pub use snapshot::{GameState, MovePreview};
