// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CNF instances as rows of literal-present flags.
//!
//! A [`CnfInstance`] over `N` variables is an append-only list of clause rows.
//! Each row is logically a width-`2N` array of Boolean flags: flag `2 * v` set
//! means the positive literal of `v` is present, flag `2 * v + 1` the negative
//! one. A row is the disjunction of its present literals; a row with no flags
//! set is an always-false clause.
//!
//! The row width is fixed when the instance is created. Clause indices are
//! handed out in push order and never reused.
//!
//! # Example
//!
//! ```
//! use np_reduce::cnf::{CnfInstance, Literal};
//!
//! let mut cnf = CnfInstance::new(2);
//! let c0 = cnf.push_clause([Literal::positive(0), Literal::negative(1)]).unwrap();
//! assert_eq!(c0, 0);
//! assert_eq!(cnf.flag(0, 0), Ok(true));
//! assert_eq!(cnf.flag(0, 3), Ok(true));
//! assert_eq!(cnf.flag(0, 1), Ok(false));
//! assert_eq!(cnf.to_dimacs(), "p cnf 2 1\n1 -2 0\n");
//! ```

mod dimacs;
mod literal;

pub use literal::Literal;

use crate::error::{ReductionError, Result};
use tracing::warn;

/// One clause: the set of present literals, kept sorted by flag position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClauseRow {
    literals: Vec<Literal>,
}

impl ClauseRow {
    /// Present literals in ascending flag order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Set flag positions in ascending order.
    pub fn flags(&self) -> impl Iterator<Item = usize> + '_ {
        self.literals.iter().map(|lit| lit.flag())
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.position(literal).is_ok()
    }

    /// Number of set flags.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True for the always-false empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    fn insert(&mut self, literal: Literal) {
        if let Err(at) = self.position(literal) {
            self.literals.insert(at, literal);
        }
    }

    fn position(&self, literal: Literal) -> std::result::Result<usize, usize> {
        self.literals.binary_search_by_key(&literal.flag(), |lit| lit.flag())
    }
}

/// A CNF formula over a fixed number of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CnfInstance {
    num_vars: usize,
    clauses: Vec<ClauseRow>,
}

impl CnfInstance {
    /// Empty formula over `num_vars` variables.
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    /// Empty formula with room for `clauses` rows.
    pub fn with_capacity(num_vars: usize, clauses: usize) -> Self {
        Self {
            num_vars,
            clauses: Vec::with_capacity(clauses),
        }
    }

    /// Build from signed literal lists (DIMACS numbering, no terminating 0).
    pub fn from_signed_clauses(num_vars: usize, clauses: &[Vec<i64>]) -> Result<Self> {
        let mut cnf = Self::with_capacity(num_vars, clauses.len());
        for clause in clauses {
            let literals = clause
                .iter()
                .map(|&value| Literal::from_dimacs(value))
                .collect::<Result<Vec<_>>>()?;
            cnf.push_clause(literals)?;
        }
        Ok(cnf)
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Row width, `2 * num_vars`.
    pub fn width(&self) -> usize {
        2 * self.num_vars
    }

    /// Append a clause and return its index. Duplicate literals collapse.
    pub fn push_clause(&mut self, literals: impl IntoIterator<Item = Literal>) -> Result<usize> {
        let mut row = ClauseRow::default();
        for literal in literals {
            self.check_flag(self.clauses.len(), literal.flag())?;
            row.insert(literal);
        }
        Ok(self.push_row(row))
    }

    /// Append a clause given as a full flag row of width `2 * num_vars`.
    pub fn push_flags(&mut self, flags: &[bool]) -> Result<usize> {
        if flags.len() != self.width() {
            return Err(ReductionError::SizeMismatch {
                what: "clause row width",
                expected: self.width(),
                found: flags.len(),
            });
        }
        let literals = flags
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(|(flag, _)| Literal::from_flag(flag));
        self.push_clause(literals)
    }

    /// Set one flag of an existing clause.
    pub fn set_flag(&mut self, clause: usize, flag: usize) -> Result<()> {
        self.check_flag(clause, flag)?;
        let bounds = [self.num_clauses(), self.width()];
        let row = self
            .clauses
            .get_mut(clause)
            .ok_or_else(|| ReductionError::out_of_range(&[clause, flag], &bounds))?;
        row.insert(Literal::from_flag(flag));
        Ok(())
    }

    /// Read one flag.
    pub fn flag(&self, clause: usize, flag: usize) -> Result<bool> {
        let row = self.clauses.get(clause).ok_or_else(|| {
            ReductionError::out_of_range(&[clause, flag], &[self.num_clauses(), self.width()])
        })?;
        if flag >= self.width() {
            return Err(ReductionError::out_of_range(
                &[clause, flag],
                &[self.num_clauses(), self.width()],
            ));
        }
        Ok(row.contains(Literal::from_flag(flag)))
    }

    pub fn clause(&self, clause: usize) -> Option<&ClauseRow> {
        self.clauses.get(clause)
    }

    pub fn clauses(&self) -> &[ClauseRow] {
        &self.clauses
    }

    /// Total number of set flags across all rows.
    pub fn flag_count(&self) -> usize {
        self.clauses.iter().map(ClauseRow::len).sum()
    }

    fn push_row(&mut self, row: ClauseRow) -> usize {
        if row.is_empty() {
            warn!(clause = self.clauses.len(), "empty clause makes the formula unsatisfiable");
        }
        self.clauses.push(row);
        self.clauses.len() - 1
    }

    fn check_flag(&self, clause: usize, flag: usize) -> Result<()> {
        if flag < self.width() {
            Ok(())
        } else {
            Err(ReductionError::out_of_range(
                &[clause, flag],
                &[self.num_clauses(), self.width()],
            ))
        }
    }
}
