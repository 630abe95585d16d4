// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pair ranges over `0..n`.

use std::iter::FusedIterator;

/// Yields `(i, j)` for `0 <= i < j < n`, in lexicographic order.
#[derive(Debug, Clone)]
pub struct UnorderedPairs {
    n: usize,
    i: usize,
    j: usize,
}

/// All unordered pairs of `0..n`. Each pair is visited once and self-pairs
/// are excluded.
pub fn unordered_pairs(n: usize) -> UnorderedPairs {
    UnorderedPairs { n, i: 0, j: 1 }
}

impl Iterator for UnorderedPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            if self.j < self.n {
                let pair = (self.i, self.j);
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.i >= self.n {
            0
        } else {
            let rest_of_row = self.n.saturating_sub(self.j);
            let later = self.n - self.i - 1;
            rest_of_row + later * later.saturating_sub(1) / 2
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UnorderedPairs {}
impl FusedIterator for UnorderedPairs {}

/// Yields `(i, j)` for all `i, j` in `0..n`, including `i == j`.
#[derive(Debug, Clone)]
pub struct OrderedPairs {
    n: usize,
    i: usize,
    j: usize,
}

/// All ordered pairs of `0..n`. Callers that need distinct endpoints filter
/// `i != j` themselves.
pub fn ordered_pairs(n: usize) -> OrderedPairs {
    OrderedPairs { n, i: 0, j: 0 }
}

impl Iterator for OrderedPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.n {
            return None;
        }
        let pair = (self.i, self.j);
        self.j += 1;
        if self.j == self.n {
            self.i += 1;
            self.j = 0;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.i >= self.n {
            0
        } else {
            (self.n - self.i) * self.n - self.j
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrderedPairs {}
impl FusedIterator for OrderedPairs {}
