// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive enumeration of decision vectors.
//!
//! A small backtracking engine assigns every decision variable of a
//! constraint system in turn and runs the verifier on each complete vector.
//! There is no propagation and no learning: the engine visits all `2^N`
//! vectors (or stops at the first solution), so it is only for cross-checking
//! encodings on small instances.
//!
//! The program is:
//!
//! ```text
//! AssignVariables  CountLeaves  Verify  CountSolutions  Fail | Suspend
//! ```
//!
//! `Fail` explores every vector; `Suspend` stops at the first solution.
//!
//! # Example
//!
//! ```
//! use np_reduce::cnf::CnfInstance;
//! use np_reduce::constraint::ConstraintSystem;
//! use np_reduce::enumerate::{count_solutions, EnumerationConfig};
//!
//! // (x1 | x2) has three models.
//! let cnf = CnfInstance::from_signed_clauses(2, &[vec![1, 2]]).unwrap();
//! let system = ConstraintSystem::Cnf(cnf);
//! assert_eq!(count_solutions(&system, &EnumerationConfig::default()).unwrap(), 3);
//! ```

mod context;
mod engine;
mod predicate;
mod predicates;
mod statistics;
mod trail;

pub use context::EnumerationContext;
pub use engine::{EngineBuilder, SearchEngine, TerminatedProgram};
pub use predicate::{Predicate, PredicateResult, TerminalPredicate};
pub use predicates::{AssignVariablesPredicate, FailPredicate, SuspendPredicate, VerifyPredicate};
pub use statistics::{Counters, Statistics};
pub use trail::Trail;

use crate::assignment::Assignment;
use crate::constraint::SystemRef;
use crate::error::{ReductionError, Result};
use tracing::debug;

/// Bounds for [`enumerate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Largest number of decision variables accepted.
    pub max_variables: usize,
    /// Stop at the first satisfying vector.
    pub stop_at_first: bool,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_variables: 24,
            stop_at_first: false,
        }
    }
}

impl EnumerationConfig {
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    pub fn with_stop_at_first(mut self, stop_at_first: bool) -> Self {
        self.stop_at_first = stop_at_first;
        self
    }
}

/// What one enumeration run saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationReport {
    /// Complete vectors visited.
    pub leaves: u64,
    /// Satisfying vectors found.
    pub solutions: u64,
    /// First satisfying vector, in order of visit (`false` before `true`,
    /// variable 0 decided first).
    pub witness: Option<Assignment>,
}

/// Enumerate the decision vectors of `system`.
///
/// Fails with `MalformedInstance` when the system has more than
/// `config.max_variables` decision variables.
pub fn enumerate<'a>(
    system: impl Into<SystemRef<'a>>,
    config: &EnumerationConfig,
) -> Result<EnumerationReport> {
    let system = system.into();
    let num_variables = system.num_variables();
    if num_variables > config.max_variables {
        return Err(ReductionError::malformed(format!(
            "{} decision variables exceed the enumeration limit of {}",
            num_variables, config.max_variables
        )));
    }
    debug!(num_variables, stop_at_first = config.stop_at_first, "enumeration started");

    let mut ctx = EnumerationContext::new(system);
    let program = EngineBuilder::new()
        .add(Box::new(AssignVariablesPredicate))
        .add(Statistics::counting_predicate(Counters::Leaves))
        .add(Box::new(VerifyPredicate))
        .add(Statistics::counting_predicate(Counters::Solutions));
    let engine = if config.stop_at_first {
        program.terminal(Box::new(SuspendPredicate)).build()
    } else {
        program.terminal(Box::new(FailPredicate)).build()
    };
    // A suspended engine is simply dropped: the run is over either way.
    let _ = engine.search(&mut ctx);

    if let Some(error) = ctx.error.take() {
        return Err(error);
    }
    let report = EnumerationReport {
        leaves: ctx.statistics.get(Counters::Leaves),
        solutions: ctx.statistics.get(Counters::Solutions),
        witness: ctx.witness.take(),
    };
    debug!(
        leaves = report.leaves,
        solutions = report.solutions,
        "enumeration finished"
    );
    Ok(report)
}

/// Number of decision vectors satisfying `system`.
pub fn count_solutions<'a>(
    system: impl Into<SystemRef<'a>>,
    config: &EnumerationConfig,
) -> Result<u64> {
    let config = config.clone().with_stop_at_first(false);
    Ok(enumerate(system, &config)?.solutions)
}

/// The first satisfying decision vector, if any.
pub fn find_solution<'a>(
    system: impl Into<SystemRef<'a>>,
    config: &EnumerationConfig,
) -> Result<Option<Assignment>> {
    let config = config.clone().with_stop_at_first(true);
    Ok(enumerate(system, &config)?.witness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::{CnfInstance, Literal};
    use crate::constraint::{Comparator, ConstraintSystem, PairRule, PredicateForm};
    use crate::graph::Graph;

    fn cnf_system(num_vars: usize, clauses: &[Vec<i64>]) -> ConstraintSystem {
        ConstraintSystem::Cnf(CnfInstance::from_signed_clauses(num_vars, clauses).unwrap())
    }

    #[test]
    fn test_visits_every_leaf() {
        let system = cnf_system(3, &[]);
        let report = enumerate(&system, &EnumerationConfig::default()).unwrap();
        assert_eq!(report.leaves, 8);
        assert_eq!(report.solutions, 8);
        assert_eq!(report.witness, Some(Assignment::from_bools(&[false; 3])));
    }

    #[test]
    fn test_counts_models() {
        // x1 xor x2, written as (x1 | x2) & (¬x1 | ¬x2).
        let system = cnf_system(2, &[vec![1, 2], vec![-1, -2]]);
        assert_eq!(count_solutions(&system, &EnumerationConfig::default()), Ok(2));
        assert_eq!(
            find_solution(&system, &EnumerationConfig::default()),
            Ok(Some(Assignment::from_bools(&[false, true])))
        );
    }

    #[test]
    fn test_stop_at_first() {
        let system = cnf_system(3, &[vec![1]]);
        let config = EnumerationConfig::default().with_stop_at_first(true);
        let report = enumerate(&system, &config).unwrap();
        assert_eq!(report.solutions, 1);
        // x0 = false is tried first: four leaves rejected, then the fifth accepted.
        assert_eq!(report.leaves, 5);
        assert_eq!(
            report.witness,
            Some(Assignment::from_bools(&[true, false, false]))
        );
    }

    #[test]
    fn test_unsatisfiable() {
        let mut cnf = CnfInstance::new(2);
        cnf.push_clause([]).unwrap();
        let system = ConstraintSystem::Cnf(cnf);
        assert_eq!(count_solutions(&system, &EnumerationConfig::default()), Ok(0));
        assert_eq!(find_solution(&system, &EnumerationConfig::default()), Ok(None));

        let contradiction = cnf_system(1, &[vec![1], vec![-1]]);
        assert_eq!(find_solution(&contradiction, &EnumerationConfig::default()), Ok(None));
    }

    #[test]
    fn test_zero_variables() {
        let system = ConstraintSystem::Cnf(CnfInstance::new(0));
        let report = enumerate(&system, &EnumerationConfig::default()).unwrap();
        assert_eq!(report.leaves, 1);
        assert_eq!(report.solutions, 1);
    }

    #[test]
    fn test_predicate_mode() {
        // Triangle plus an isolated vertex: three edges and the triangle.
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let system = ConstraintSystem::Predicate(PredicateForm {
            graph,
            target: 2,
            comparator: Comparator::AtLeast,
            rule: PairRule::SelectedPairsAdjacent,
        });
        assert_eq!(count_solutions(&system, &EnumerationConfig::default()), Ok(4));
    }

    #[test]
    fn test_variable_limit() {
        let mut cnf = CnfInstance::new(30);
        cnf.push_clause([Literal::positive(0)]).unwrap();
        let system = ConstraintSystem::Cnf(cnf);
        assert!(matches!(
            enumerate(&system, &EnumerationConfig::default()),
            Err(ReductionError::MalformedInstance { .. })
        ));
        let small = EnumerationConfig::default().with_max_variables(2);
        assert!(count_solutions(&cnf_system(3, &[]), &small).is_err());
    }
}
