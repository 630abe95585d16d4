// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail of variable assignments.
//!
//! Every assignment made during enumeration is recorded here. Backtracking
//! rewinds the trail to a checkpoint and hands back the variables assigned
//! since, most recent first, so the caller can clear them.

/// The trail of assigned variables.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Trail::default()
    }

    /// Trail with room for `capacity` entries without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record that `var` was assigned.
    pub fn record(&mut self, var: usize) {
        self.entries.push(var);
    }

    /// Current position, usable as a checkpoint.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Drop every entry after `checkpoint`, yielding the dropped variables
    /// most recent first. A checkpoint at or past the end yields nothing.
    pub fn rewind_to(&mut self, checkpoint: usize) -> impl Iterator<Item = usize> + '_ {
        let start = checkpoint.min(self.entries.len());
        self.entries.drain(start..).rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
