// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boolean and integer array store.
//!
//! An [`ArrayStore`] is declared once with a fixed dimensionality and a bound
//! per dimension. Cells start uninitialized; reading one before it has been
//! written (individually or by [`ArrayStore::fill`]) is an error, as is any
//! index tuple outside the declared bounds. Arrays never grow.
//!
//! # Example
//!
//! ```
//! use np_reduce::store::{BoolArray, IntArray};
//!
//! let mut edges = BoolArray::filled(&[3, 3], false).unwrap();
//! edges.set(&[0, 2], true).unwrap();
//! assert!(edges.get(&[0, 2]).unwrap());
//! assert!(edges.get(&[3, 0]).is_err());
//!
//! let mut counts = IntArray::declare(&[4]).unwrap();
//! assert!(counts.get(&[1]).is_err()); // never initialized
//! counts.fill(0);
//! assert_eq!(counts.get(&[1]).unwrap(), 0);
//! ```

use crate::error::{ReductionError, Result};

/// A fixed-size, multi-dimensional array of `Copy` values.
///
/// Storage is row-major; the last index varies fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStore<T: Copy> {
    bounds: Vec<usize>,
    cells: Vec<Option<T>>,
}

/// Array of Boolean flags (edges, literal-present flags, selections).
pub type BoolArray = ArrayStore<bool>;

/// Array of non-negative integers (counters, node tables).
pub type IntArray = ArrayStore<usize>;

impl<T: Copy> ArrayStore<T> {
    /// Declare an array with the given per-dimension bounds. All cells start
    /// uninitialized.
    pub fn declare(bounds: &[usize]) -> Result<Self> {
        if bounds.is_empty() {
            return Err(ReductionError::malformed(
                "array must have at least one dimension",
            ));
        }
        let size = bounds
            .iter()
            .try_fold(1usize, |acc, &b| acc.checked_mul(b))
            .ok_or_else(|| {
                ReductionError::malformed(format!("array bounds {:?} overflow", bounds))
            })?;
        let bytes = size
            .checked_mul(std::mem::size_of::<Option<T>>())
            .filter(|&bytes| bytes <= isize::MAX as usize);
        if bytes.is_none() {
            return Err(ReductionError::malformed(format!(
                "array bounds {:?} exceed the addressable size",
                bounds
            )));
        }
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|err| {
            ReductionError::malformed(format!("array bounds {:?}: {}", bounds, err))
        })?;
        cells.resize(size, None);
        Ok(Self {
            bounds: bounds.to_vec(),
            cells,
        })
    }

    /// Declare an array and initialize every cell to `value`.
    pub fn filled(bounds: &[usize], value: T) -> Result<Self> {
        let mut array = Self::declare(bounds)?;
        array.fill(value);
        Ok(array)
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|cell| *cell = Some(value));
    }

    /// Write one cell.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let offset = self.offset(index)?;
        self.cells[offset] = Some(value);
        Ok(())
    }

    /// Read one cell.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        let offset = self.offset(index)?;
        self.cells[offset].ok_or_else(|| ReductionError::out_of_range(index, &self.bounds))
    }

    /// The declared per-dimension bounds.
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if some dimension has bound zero.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn offset(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.bounds.len() {
            return Err(ReductionError::out_of_range(index, &self.bounds));
        }
        let mut offset = 0;
        for (&i, &bound) in index.iter().zip(&self.bounds) {
            if i >= bound {
                return Err(ReductionError::out_of_range(index, &self.bounds));
            }
            offset = offset * bound + i;
        }
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_fill() {
        let mut array = BoolArray::declare(&[2, 3]).unwrap();
        assert_eq!(array.len(), 6);
        assert_eq!(array.dimensions(), 2);
        assert_eq!(array.bounds(), &[2, 3]);
        assert!(array.get(&[1, 2]).is_err());

        array.fill(false);
        assert_eq!(array.get(&[1, 2]), Ok(false));
    }

    #[test]
    fn test_point_update() {
        let mut array = IntArray::filled(&[2, 2, 2], 0).unwrap();
        array.set(&[1, 0, 1], 7).unwrap();
        assert_eq!(array.get(&[1, 0, 1]), Ok(7));
        assert_eq!(array.get(&[0, 1, 1]), Ok(0));
    }

    #[test]
    fn test_out_of_range() {
        let mut array = BoolArray::filled(&[2, 2], true).unwrap();
        assert_eq!(
            array.get(&[2, 0]),
            Err(ReductionError::OutOfRange {
                index: vec![2, 0],
                bounds: vec![2, 2]
            })
        );
        assert!(array.set(&[0, 5], false).is_err());
        // Wrong arity is also out of range.
        assert!(array.get(&[0]).is_err());
        assert!(array.get(&[0, 0, 0]).is_err());
    }

    #[test]
    fn test_zero_bound_is_empty() {
        let array = BoolArray::filled(&[0, 4], false).unwrap();
        assert!(array.is_empty());
        assert!(array.get(&[0, 0]).is_err());
    }

    #[test]
    fn test_declare_rejects_no_dimensions() {
        assert!(matches!(
            BoolArray::declare(&[]),
            Err(ReductionError::MalformedInstance { .. })
        ));
    }

    #[test]
    fn test_declare_rejects_overflow() {
        assert!(BoolArray::declare(&[usize::MAX, 2]).is_err());
        // The cell count fits in usize but the allocation would not.
        assert!(matches!(
            BoolArray::declare(&[4_000_000_000, 4_000_000_000]),
            Err(ReductionError::MalformedInstance { .. })
        ));
        assert!(matches!(
            IntArray::declare(&[usize::MAX / 8, 2]),
            Err(ReductionError::MalformedInstance { .. })
        ));
    }
}
