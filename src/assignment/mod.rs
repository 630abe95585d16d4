// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decision vectors.
//!
//! An [`Assignment`] maps each decision variable (a vertex id or a
//! propositional variable id) to a Boolean, or leaves it without a value.
//! The verifier only reads its extensional values and refuses vectors with
//! gaps.

use crate::cnf::Literal;
use crate::error::{ReductionError, Result};
use std::fmt;

/// Values for decision variables `0..len()`, possibly with gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    /// `len` variables, none assigned.
    pub fn unassigned(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    /// Complete assignment from plain values.
    pub fn from_bools(values: &[bool]) -> Self {
        Self {
            values: values.iter().copied().map(Some).collect(),
        }
    }

    /// Complete assignment of `len` variables where exactly `selected` are
    /// true.
    pub fn from_selection(len: usize, selected: &[usize]) -> Result<Self> {
        let mut values = vec![Some(false); len];
        for &index in selected {
            let slot = values
                .get_mut(index)
                .ok_or_else(|| ReductionError::out_of_range(&[index], &[len]))?;
            *slot = Some(true);
        }
        Ok(Self { values })
    }

    /// Assignment of `num_vars` variables from a model of signed DIMACS
    /// literals. Variables that do not appear stay unassigned.
    pub fn from_dimacs_model(num_vars: usize, model: &[i64]) -> Result<Self> {
        let mut assignment = Self::unassigned(num_vars);
        for &value in model.iter().filter(|&&v| v != 0) {
            let literal = Literal::from_dimacs(value)?;
            assignment.set(literal.var(), !literal.is_negated())?;
        }
        Ok(assignment)
    }

    /// Assign one variable.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| ReductionError::out_of_range(&[index], &[len]))?;
        *slot = Some(value);
        Ok(())
    }

    /// Remove the value of one variable. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = None;
        }
    }

    /// Value of one variable.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.values
            .get(index)
            .copied()
            .flatten()
            .ok_or(ReductionError::MissingAssignment { index })
    }

    /// Number of variable slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if every slot has a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Indices assigned `true`, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == Some(true))
            .map(|(index, _)| index)
            .collect()
    }

    /// The values of variables `0..expected` with no gaps.
    ///
    /// Fails with `SizeMismatch` if the vector has more slots than the
    /// consumer expects, and with `MissingAssignment` for the first index in
    /// `0..expected` that has no value.
    pub fn complete(&self, expected: usize) -> Result<Vec<bool>> {
        if self.values.len() > expected {
            return Err(ReductionError::SizeMismatch {
                what: "decision vector length",
                expected,
                found: self.values.len(),
            });
        }
        (0..expected).map(|index| self.get(index)).collect()
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(values: Vec<bool>) -> Self {
        Self::from_bools(&values)
    }
}

impl fmt::Display for Assignment {
    /// Format as a bit string, `-` for unassigned slots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            let c = match value {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection() {
        let a = Assignment::from_selection(5, &[1, 3]).unwrap();
        assert_eq!(a.selected(), vec![1, 3]);
        assert!(a.is_complete());
        assert_eq!(a.to_string(), "01010");
        assert!(Assignment::from_selection(2, &[2]).is_err());
    }

    #[test]
    fn test_missing_values() {
        let mut a = Assignment::unassigned(3);
        a.set(0, true).unwrap();
        a.set(2, false).unwrap();
        assert_eq!(a.get(1), Err(ReductionError::MissingAssignment { index: 1 }));
        assert_eq!(a.get(7), Err(ReductionError::MissingAssignment { index: 7 }));
        assert_eq!(
            a.complete(3),
            Err(ReductionError::MissingAssignment { index: 1 })
        );
        assert_eq!(a.to_string(), "1-0");
    }

    #[test]
    fn test_complete() {
        let a = Assignment::from_bools(&[true, false]);
        assert_eq!(a.complete(2), Ok(vec![true, false]));
        // Shorter than expected: the first absent index is missing.
        assert_eq!(
            a.complete(3),
            Err(ReductionError::MissingAssignment { index: 2 })
        );
        assert!(matches!(
            a.complete(1),
            Err(ReductionError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_clear() {
        let mut a = Assignment::from_bools(&[true, true]);
        a.clear(0);
        a.clear(9);
        assert!(!a.is_complete());
        assert_eq!(a.selected(), vec![1]);
    }

    #[test]
    fn test_from_dimacs_model() {
        let a = Assignment::from_dimacs_model(3, &[1, -2, 0]).unwrap();
        assert_eq!(a.get(0), Ok(true));
        assert_eq!(a.get(1), Ok(false));
        assert!(a.get(2).is_err());
        assert!(Assignment::from_dimacs_model(2, &[3]).is_err());
    }
}
