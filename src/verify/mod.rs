// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Assignment verification.
//!
//! The same predicate that describes what a solver must satisfy is evaluated
//! here against a concrete decision vector, so an accepted vector is a
//! solution by construction.
//!
//! - Predicate mode: AND-fold of the pair rule over unordered vertex pairs,
//!   and the selected count compared with the target.
//! - CNF mode: AND-fold over clauses of the OR-fold over present literals.
//!
//! # Example
//!
//! ```
//! use np_reduce::assignment::Assignment;
//! use np_reduce::cnf::CnfInstance;
//! use np_reduce::constraint::ConstraintSystem;
//! use np_reduce::verify::verify;
//!
//! let cnf = CnfInstance::from_signed_clauses(2, &[vec![1, 2], vec![-1]]).unwrap();
//! let system = ConstraintSystem::Cnf(cnf);
//! assert!(verify(&system, &Assignment::from_bools(&[false, true])).unwrap());
//! assert!(!verify(&system, &Assignment::from_bools(&[true, true])).unwrap());
//! assert!(verify(&system, &Assignment::unassigned(2)).is_err());
//! ```

use crate::aggregate::{and_fold, or_fold, sum_fold, unordered_pairs, IndexRange};
use crate::assignment::Assignment;
use crate::cnf::{ClauseRow, CnfInstance};
use crate::constraint::{PredicateForm, SystemRef};
use crate::error::Result;
use crate::select::select;
use tracing::trace;

/// True iff `assignment` satisfies `system`.
///
/// `system` is a [`ConstraintSystem`](crate::constraint::ConstraintSystem)
/// reference, a [`SystemRef`], or a bare predicate form or CNF.
///
/// Fails with `MissingAssignment` if any decision variable of the system has
/// no value, and with `SizeMismatch` if the vector is longer than the system's
/// variable count.
pub fn verify<'a>(system: impl Into<SystemRef<'a>>, assignment: &Assignment) -> Result<bool> {
    let system = system.into();
    let values = assignment.complete(system.num_variables())?;
    Ok(match system {
        SystemRef::Predicate(form) => predicate_holds(form, &values),
        SystemRef::Cnf(cnf) => cnf_holds(cnf, &values),
    })
}

/// Number of selected entries in a complete decision vector.
pub fn selected_count(values: &[bool]) -> usize {
    sum_fold(IndexRange::upto(values.len()), |i| select(values[i], 1, 0))
}

/// Predicate mode over a complete decision vector of length
/// `form.graph.vertex_count()`.
fn predicate_holds(form: &PredicateForm, values: &[bool]) -> bool {
    let graph = &form.graph;
    let pairs_hold = and_fold(unordered_pairs(graph.vertex_count()), |(i, j)| {
        let holds = form.rule.holds(graph.has_edge(i, j), values[i], values[j]);
        if !holds {
            trace!(i, j, rule = ?form.rule, "pair rule violated");
        }
        holds
    });
    if !pairs_hold {
        return false;
    }
    let count = selected_count(values);
    let bound_holds = form.comparator.holds(count, form.target);
    if !bound_holds {
        trace!(count, target = form.target, comparator = %form.comparator, "count bound violated");
    }
    bound_holds
}

/// CNF mode over a complete assignment of length `cnf.num_vars()`.
fn cnf_holds(cnf: &CnfInstance, values: &[bool]) -> bool {
    and_fold(cnf.clauses().iter().enumerate(), |(index, row)| {
        let satisfied = clause_holds(row, values);
        if !satisfied {
            trace!(clause = index, "clause falsified");
        }
        satisfied
    })
}

/// OR-fold over the present literals of one clause. An empty clause is false.
fn clause_holds(row: &ClauseRow, values: &[bool]) -> bool {
    or_fold(row.literals(), |literal| literal.holds(values[literal.var()]))
}
