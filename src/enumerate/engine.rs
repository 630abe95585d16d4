// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! The engine runs a sequence of predicates with chronological backtracking.
//! It keeps a stack of predicate execution states; each entry tracks:
//! - which predicate is executing
//! - its round (advanced by `SuccessSamePredicate`)
//! - whether it is exploring alternatives, and which one is next
//! - the trail checkpoint to rewind to before each attempt
//!
//! Execution follows a WAM-like model:
//! 1. Call `try_pred(round)` on the current predicate
//! 2. `Success`: advance to the next predicate
//! 3. `SuccessSamePredicate`: stay at the same predicate with the next round
//! 4. `Choices(n)`: call `retry_pred(round, choice)` for each choice in `0..n`
//! 5. `Failure`: backtrack to the previous entry
//! 6. `Suspend`: return control to the caller
//!
//! A deterministic step (`Success` or `SuccessSamePredicate` from
//! `try_pred`) leaves no alternatives behind, so backtracking into it goes
//! straight through to the entry below.
//!
//! Programs must end with a [`TerminalPredicate`]; [`EngineBuilder`] only
//! builds programs that do.

use super::context::EnumerationContext;
use super::predicate::{Predicate, PredicateResult, TerminalPredicate};
use tracing::trace;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the program.
    predicate_index: usize,

    /// Current round number.
    round: usize,

    /// Whether `try_pred` has already run for this entry.
    in_choice_mode: bool,

    /// Next choice to try.
    current_choice: usize,

    /// Number of choices announced by `try_pred`; 0 once the entry is
    /// deterministic.
    num_choices: usize,

    /// Trail checkpoint for this entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    predicates: Vec<Box<dyn Predicate>>,
    stack: Vec<StackEntry>,
    try_count: u64,
    retry_count: u64,
    started: bool,
}

impl SearchEngine {
    fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
            started: false,
        }
    }

    /// Run until the program suspends or is exhausted.
    ///
    /// Returns `Some(engine)` when suspended; calling `search` again resumes by
    /// backtracking into the most recent choice. Returns `None` once every
    /// alternative has been explored.
    ///
    /// # Panics
    ///
    /// Panics if a predicate's `retry_pred` returns `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut EnumerationContext<'_>) -> Option<Self> {
        // On resume the suspending entry is on top with no alternatives left,
        // so the loop backtracks out of it.
        if !self.started {
            self.started = true;
            if self.predicates.is_empty() {
                return None;
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.checkpoint()));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None;
            };

            ctx.rewind_to(entry.trail_checkpoint);
            let predicate_index = entry.predicate_index;
            let round = entry.round;

            if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[predicate_index].try_pred(ctx, round);
                trace!(
                    predicate = self.predicates[predicate_index].name(),
                    round,
                    ?result,
                    "try"
                );

                // From here on the entry only has the alternatives announced
                // by Choices, if any.
                entry.in_choice_mode = true;
                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        entry.current_choice = 0;
                        entry.num_choices = n;
                        entry.trail_checkpoint = ctx.trail.checkpoint();
                    }
                    PredicateResult::Suspend => return Some(self),
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[predicate_index].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {}
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[predicate_index].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    /// Push an entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &EnumerationContext<'_>) {
        let next_index = self.stack.last().map_or(0, |entry| entry.predicate_index + 1);
        // EngineBuilder guarantees a terminal predicate, which never succeeds.
        debug_assert!(next_index < self.predicates.len());
        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Push an entry for the same predicate with the next round.
    fn push_same_predicate(&mut self, ctx: &EnumerationContext<'_>) {
        let (index, round) = self
            .stack
            .last()
            .map_or((0, 0), |entry| (entry.predicate_index, entry.round + 1));
        self.stack
            .push(StackEntry::new(index, round, ctx.trail.checkpoint()));
    }

    /// `(try_count, retry_count)` accumulated over all calls to `search`.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a program that ends with a terminal predicate.
///
/// # Example
///
/// ```
/// use np_reduce::cnf::CnfInstance;
/// use np_reduce::constraint::ConstraintSystem;
/// use np_reduce::enumerate::{EngineBuilder, EnumerationContext, FailPredicate};
///
/// let system = ConstraintSystem::Cnf(CnfInstance::new(0));
/// let mut ctx = EnumerationContext::new(&system);
/// let engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();
/// assert!(engine.search(&mut ctx).is_none());
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// A program with its terminal predicate in place.
#[derive(Debug)]
pub struct TerminatedProgram {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        EngineBuilder::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate that ends the program.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedProgram {
        self.predicates.push(predicate);
        TerminatedProgram {
            predicates: self.predicates,
        }
    }
}

impl TerminatedProgram {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
