// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration predicates.
//!
//! - [`AssignVariablesPredicate`]: one round per decision variable, two
//!   choices per round (false, then true)
//! - [`VerifyPredicate`]: runs the verifier on the complete vector
//! - Built-in terminals: [`FailPredicate`], [`SuspendPredicate`]

use super::context::EnumerationContext;
use super::predicate::{Predicate, PredicateResult, TerminalPredicate};
use crate::verify::verify;
use tracing::trace;

/// Assigns decision variable `round` in each round, trying `false` then
/// `true`. Succeeds once every variable has a value.
#[derive(Debug)]
pub struct AssignVariablesPredicate;

impl Predicate for AssignVariablesPredicate {
    fn try_pred(&mut self, ctx: &mut EnumerationContext<'_>, round: usize) -> PredicateResult {
        if round >= ctx.num_variables() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(2)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut EnumerationContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        match ctx.assign(round, choice == 1) {
            Ok(()) => PredicateResult::SuccessSamePredicate,
            Err(error) => {
                ctx.error = Some(error);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "AssignVariables"
    }
}

/// Accepts the current vector iff it satisfies the system. The first
/// accepted vector is kept as the witness.
///
/// A verifier error is stored in the context and suspends the program.
#[derive(Debug)]
pub struct VerifyPredicate;

impl Predicate for VerifyPredicate {
    fn try_pred(&mut self, ctx: &mut EnumerationContext<'_>, _round: usize) -> PredicateResult {
        match verify(ctx.system, &ctx.values) {
            Ok(true) => {
                if ctx.witness.is_none() {
                    ctx.witness = Some(ctx.values.clone());
                }
                trace!(values = %ctx.values, "solution");
                PredicateResult::Success
            }
            Ok(false) => PredicateResult::Failure,
            Err(error) => {
                ctx.error = Some(error);
                PredicateResult::Suspend
            }
        }
    }

    fn name(&self) -> &str {
        "Verify"
    }
}

/// Built-in fail predicate (Prolog's `fail.`): forces the engine to explore
/// every alternative.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut EnumerationContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Returns control to the caller; the engine can be resumed.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut EnumerationContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
