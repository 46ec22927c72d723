//! Terminal 2048.
//!
//! The `core` module is the pure rule engine (grid, moves, scoring, undo,
//! achievements); `term` and `input` are the terminal collaborators used by
//! the default binary. `core` never touches I/O, so games replay exactly
//! from a seed.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
