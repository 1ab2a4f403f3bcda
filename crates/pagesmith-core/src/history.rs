//! Linear undo/redo history.

use std::collections::VecDeque;

/// Linear undo/redo history over immutable states.
///
/// `past` is ordered oldest first and `future` nearest redo first. Pushing a
/// new state after an undo discards the redo branch for good.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    past: VecDeque<T>,
    present: T,
    future: VecDeque<T>,
    /// Maximum number of past states to keep (`None` = unbounded).
    limit: Option<usize>,
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> History<T> {
    /// Create an unbounded history starting at `present`.
    pub fn new(present: T) -> Self {
        Self::with_limit(present, None)
    }

    /// Create a history that keeps at most `limit` past states.
    pub fn with_limit(present: T, limit: Option<usize>) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
            limit,
        }
    }

    /// The current state.
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Record a new state. Clears the redo stack.
    pub fn push(&mut self, state: T) {
        let previous = std::mem::replace(&mut self.present, state);
        self.past.push_back(previous);
        self.future.clear();
        self.enforce_limit();
    }

    /// Step back one state.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one state.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        true
    }

    /// Drop all history and start over at `state`.
    pub fn reset(&mut self, state: T) {
        self.past.clear();
        self.future.clear();
        self.present = state;
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Past states, oldest first.
    pub fn past(&self) -> impl Iterator<Item = &T> {
        self.past.iter()
    }

    /// Future states, nearest redo first.
    pub fn future(&self) -> impl Iterator<Item = &T> {
        self.future.iter()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the past-state cap, trimming immediately if needed.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.pop_front();
            }
        }
    }
}
