// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the enumeration engine.
//!
//! A program is a sequence of predicates. The engine calls `try_pred` when it
//! first reaches a predicate and `retry_pred` for each alternative the
//! predicate announced with [`PredicateResult::Choices`].
//!
//! # Example
//!
//! ```
//! use np_reduce::enumerate::{EnumerationContext, Predicate, PredicateResult};
//!
//! #[derive(Debug)]
//! struct Coin;
//!
//! impl Predicate for Coin {
//!     fn try_pred(&mut self, _ctx: &mut EnumerationContext<'_>, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(
//!         &mut self,
//!         _ctx: &mut EnumerationContext<'_>,
//!         _round: usize,
//!         _choice: usize,
//!     ) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Coin"
//!     }
//! }
//! ```

use super::context::EnumerationContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Move to the next predicate in sequence.
    Success,

    /// Stay at this predicate with the next round.
    SuccessSamePredicate,

    /// Backtrack.
    Failure,

    /// The engine will call `retry_pred(round, choice)` for each choice in `0..n`.
    Choices(usize),

    /// Return control to the caller with the search state intact.
    Suspend,
}

/// A predicate that ends a program: it never returns `Success`.
pub trait TerminalPredicate: Predicate {}

/// One step of an enumeration program.
///
/// Changes a predicate makes to the context through
/// [`EnumerationContext::assign`] are recorded on the trail and undone when
/// the engine backtracks past the point where they were made.
pub trait Predicate: Debug {
    /// Attempt this predicate for round `round`. Rounds start at 0 and
    /// advance each time the predicate returns `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut EnumerationContext<'_>, round: usize) -> PredicateResult;

    /// Try alternative `choice` after `try_pred` returned `Choices(n)`.
    ///
    /// The context has already been rewound to its state before the previous
    /// alternative. Must not return `Choices` or `Suspend`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut EnumerationContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{}::retry_pred should never be called", self.name());
    }

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
