// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Range aggregation.
//!
//! Quantified constraints ("for all pairs", "for some literal", "number of
//! selected vertices") are expressed as folds over an explicit index range.
//! The accumulator lives inside the fold, so callers only ever see the final
//! value.
//!
//! | Fold         | Meaning                  | Empty range |
//! |--------------|--------------------------|-------------|
//! | [`and_fold`] | expression holds for all | `true`      |
//! | [`or_fold`]  | expression holds for one | `false`     |
//! | [`sum_fold`] | sum of the expression    | `0`         |
//!
//! Nested ranges are first-class: [`unordered_pairs`] yields `(i, j)` with
//! `j` starting at `i + 1`, and [`ordered_pairs`] yields every `(i, j)` with
//! `j` starting at `0`.
//!
//! # Example
//!
//! ```
//! use np_reduce::aggregate::{and_fold, sum_fold, unordered_pairs, IndexRange};
//!
//! let selected = [true, false, true];
//! let count = sum_fold(IndexRange::upto(3), |i| usize::from(selected[i]));
//! assert_eq!(count, 2);
//!
//! let distinct = and_fold(unordered_pairs(3), |(i, j)| i < j);
//! assert!(distinct);
//! ```

mod pairs;

pub use pairs::{ordered_pairs, unordered_pairs, OrderedPairs, UnorderedPairs};

/// Half-open index range `[start, end)`.
///
/// A range with `end <= start` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// Range `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Range `[0, end)`.
    pub fn upto(end: usize) -> Self {
        Self::new(0, end)
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    /// Number of indices in the range.
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = std::ops::Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..self.end.max(self.start)
    }
}

/// True iff `expr` holds for every item. Empty input folds to `true`.
pub fn and_fold<I, F>(range: I, mut expr: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    range.into_iter().all(|item| expr(item))
}

/// True iff `expr` holds for some item. Empty input folds to `false`.
pub fn or_fold<I, F>(range: I, mut expr: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    range.into_iter().any(|item| expr(item))
}

/// Sum of `expr` over all items. Empty input folds to `0`.
pub fn sum_fold<I, F>(range: I, expr: F) -> usize
where
    I: IntoIterator,
    F: FnMut(I::Item) -> usize,
{
    range.into_iter().map(expr).sum()
}
