// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Encodings and reductions between clique, vertex cover and SAT, with an
//! assignment verifier.
//!
//! Problem instances are encoded as constraint systems over Boolean decision
//! vectors. A system is either a counted pair predicate over a graph (clique,
//! vertex cover) or a CNF formula. The same [`verify`](verify::verify)
//! function checks any candidate vector against any system, so an encoding
//! and its checker never drift apart.
//!
//! # Architecture
//!
//! Building blocks, leaf to root:
//!
//! - [`store`]: fixed-size Boolean and integer arrays
//! - [`select`]: the conditional selector used to build values as data flow
//! - [`aggregate`]: AND/OR/SUM folds over index ranges and vertex pairs
//! - [`graph`], [`cnf`], [`assignment`]: the instance data
//! - [`constraint`]: the [`ConstraintSystem`] tagged union and its borrowed
//!   [`SystemRef`] view
//! - [`encode`]: one encoder per reduction, each with a decoder back to the
//!   source problem
//! - [`verify`]: the assignment verifier
//!
//! Around them:
//!
//! - [`solver`]: interpretation of external SAT engine output
//! - [`enumerate`]: a backtracking enumerator that cross-checks encodings on
//!   small instances
//!
//! All operations are pure and single-threaded; independent instances can be
//! processed in parallel without coordination.
//!
//! # Logging
//!
//! The crate logs through `tracing` and never installs a subscriber.
//!
//! # References
//!
//! - Karp, R. M. (1972). "Reducibility among combinatorial problems."
//! - Garey, M. R., Johnson, D. S. (1979). "Computers and Intractability."

pub mod aggregate;
pub mod assignment;
pub mod cnf;
pub mod constraint;
pub mod encode;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod select;
pub mod solver;
pub mod store;
pub mod verify;

// Re-export commonly used types
pub use assignment::Assignment;
pub use cnf::{CnfInstance, Literal};
pub use constraint::{ConstraintSystem, SystemRef};
pub use encode::{CliqueInstance, Encoding};
pub use error::{ReductionError, Result};
pub use graph::Graph;
pub use verify::verify;
