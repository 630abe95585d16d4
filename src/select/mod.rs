// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conditional selection.
//!
//! Encoders build values as straight-line data flow: a value is refined by
//! selecting between candidates rather than by branching. The usual pattern is
//! an OR-accumulation, where a flag once set stays set:
//!
//! ```
//! use np_reduce::select::select;
//!
//! let mut edge = false;
//! for conflict in [true, false, true] {
//!     edge = select(!conflict, true, edge);
//! }
//! assert!(edge);
//! ```

/// Return `if_true` when `cond` holds, `if_false` otherwise.
#[inline]
pub fn select<T>(cond: bool, if_true: T, if_false: T) -> T {
    if cond {
        if_true
    } else {
        if_false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_bool() {
        assert!(select(true, true, false));
        assert!(!select(false, true, false));
    }

    #[test]
    fn test_select_integer() {
        assert_eq!(select(true, 1i64, 0), 1);
        assert_eq!(select(false, 1i64, 0), 0);
    }

    #[test]
    fn test_or_accumulation_is_monotone() {
        let mut flag = false;
        flag = select(true, true, flag);
        flag = select(false, true, flag);
        assert!(flag);
    }
}
