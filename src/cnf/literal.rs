// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Literals and their flag positions in a clause row.

use crate::error::{ReductionError, Result};
use std::fmt;

/// A propositional variable (0-indexed) or its negation.
///
/// In a clause row of width `2N` the positive literal of `var` occupies flag
/// `2 * var` and the negative literal occupies flag `2 * var + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    var: usize,
    negated: bool,
}

impl Literal {
    pub fn positive(var: usize) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    pub fn negative(var: usize) -> Self {
        Self { var, negated: true }
    }

    /// The literal stored at flag position `flag`.
    pub fn from_flag(flag: usize) -> Self {
        Self {
            var: flag / 2,
            negated: flag % 2 == 1,
        }
    }

    /// Convert a signed DIMACS literal (1-indexed, non-zero).
    pub fn from_dimacs(value: i64) -> Result<Self> {
        if value == 0 {
            return Err(ReductionError::malformed("literal 0 is a clause terminator"));
        }
        let var = usize::try_from(value.unsigned_abs() - 1)
            .map_err(|_| ReductionError::malformed(format!("literal {} too large", value)))?;
        Ok(if value > 0 {
            Self::positive(var)
        } else {
            Self::negative(var)
        })
    }

    pub fn var(self) -> usize {
        self.var
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }

    /// The opposite literal of the same variable.
    pub fn negate(self) -> Self {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }

    /// Flag position in a clause row.
    pub fn flag(self) -> usize {
        2 * self.var + usize::from(self.negated)
    }

    /// Signed DIMACS form: `v + 1` or `-(v + 1)`.
    pub fn to_dimacs(self) -> i64 {
        let value = self.var as i64 + 1;
        if self.negated {
            -value
        } else {
            value
        }
    }

    /// True iff the two literals are the same variable with opposite polarity.
    pub fn conflicts_with(self, other: Literal) -> bool {
        self.var == other.var && self.negated != other.negated
    }

    /// Value of the literal under the given variable value.
    pub fn holds(self, value: bool) -> bool {
        value != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬x{}", self.var)
        } else {
            write!(f, "x{}", self.var)
        }
    }
}
