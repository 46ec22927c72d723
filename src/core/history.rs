//! Bounded undo history.
//!
//! An append-only stack of game states, oldest first, capped at
//! `HISTORY_LIMIT` entries with FIFO eviction. The newest entry is always
//! the current state, so an undo target exists only with two or more
//! entries.

use std::collections::VecDeque;

use crate::core::snapshot::GameState;
use crate::types::HISTORY_LIMIT;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<GameState>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append a state, evicting the oldest entry past the cap
    pub fn push(&mut self, state: GameState) {
        self.entries.push_back(state);
        if self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    /// The current (most recent) state, if any
    pub fn current(&self) -> Option<&GameState> {
        self.entries.back()
    }

    /// Drop the current state and hand back a copy of the one before it.
    ///
    /// Returns `None` (and drops nothing) when there is no prior state.
    pub fn undo(&mut self) -> Option<GameState> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop_back();
        self.entries.back().cloned()
    }
}
