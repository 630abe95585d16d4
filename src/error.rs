// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types shared by the array store, encoders and verifier.
//!
//! Every failure is local and recoverable by the caller. An encoder either
//! returns a complete constraint system or one of these errors; there is no
//! partial result.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReductionError>;

/// Errors reported by encoding, verification and instance construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReductionError {
    /// Index tuple outside the declared bounds of an array, or a cell that was
    /// never initialized.
    #[error("index {index:?} is outside declared bounds {bounds:?}")]
    OutOfRange { index: Vec<usize>, bounds: Vec<usize> },

    /// A consumer expected a different row width or variable count than the
    /// producer emitted.
    #[error("{what}: expected {expected}, found {found}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// The decision vector has no value for a referenced index.
    #[error("decision vector has no value for index {index}")]
    MissingAssignment { index: usize },

    /// The instance itself is inconsistent (e.g. `K > nV`).
    #[error("malformed instance: {reason}")]
    MalformedInstance { reason: String },
}

impl ReductionError {
    /// Shorthand for [`ReductionError::MalformedInstance`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        ReductionError::MalformedInstance {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(index: &[usize], bounds: &[usize]) -> Self {
        ReductionError::OutOfRange {
            index: index.to_vec(),
            bounds: bounds.to_vec(),
        }
    }
}
