// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Instance encoders.
//!
//! Each encoder maps a problem instance to a constraint system ([`SystemRef`]) that the
//! verifier can check without knowing which encoder produced it, and maps a
//! solution of that system back to a solution of the original instance.
//!
//! | Encoder                      | Source            | Target system        |
//! |------------------------------|-------------------|----------------------|
//! | [`clique::encode`]           | graph, K          | clique predicate     |
//! | [`vertex_cover::encode`]     | graph, K          | cover predicate      |
//! | [`clique_sat::CliqueSatReduction`] | graph, K    | CNF, `K * V` vars    |
//! | [`sat_clique::encode`]       | CNF               | clique predicate     |
//!
//! Encoders are pure: the same input always produces a structurally identical
//! system, with clauses and edges in the same order.
//!
//! # Example
//!
//! ```
//! use np_reduce::encode::{clique, CliqueInstance, Encoding};
//! use np_reduce::assignment::Assignment;
//! use np_reduce::graph::Graph;
//! use np_reduce::verify::verify;
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
//! let instance = CliqueInstance::new(graph, 3).unwrap();
//! let encoding = clique::encode(&instance).unwrap();
//!
//! let all = Assignment::from_selection(3, &[0, 1, 2]).unwrap();
//! assert!(verify(encoding.system(), &all).unwrap());
//! assert_eq!(encoding.decode(&all).unwrap(), vec![0, 1, 2]);
//! ```

pub mod clique;
pub mod clique_sat;
pub mod sat_clique;
pub mod vertex_cover;

pub use clique_sat::{CliqueSatConfig, CliqueSatReduction};

use crate::assignment::Assignment;
use crate::constraint::SystemRef;
use crate::error::{ReductionError, Result};
use crate::graph::Graph;

/// An encoded instance: the constraint system handed to a solver, plus the
/// fixed mapping from its solutions back to the source problem.
pub trait Encoding {
    /// Solution of the source problem.
    type Witness;

    /// The constraint system to solve or verify against.
    fn system(&self) -> SystemRef<'_>;

    /// Map a solution of [`Encoding::system`] to a solution of the source
    /// instance. The assignment is verified first; a vector that does not
    /// satisfy the system is rejected as `MalformedInstance`.
    fn decode(&self, solution: &Assignment) -> Result<Self::Witness>;
}

/// A graph together with a target clique size `K`, `0 <= K <= nV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueInstance {
    graph: Graph,
    k: usize,
}

impl CliqueInstance {
    pub fn new(graph: Graph, k: usize) -> Result<Self> {
        if k > graph.vertex_count() {
            return Err(ReductionError::malformed(format!(
                "K = {} exceeds {} vertices",
                k,
                graph.vertex_count()
            )));
        }
        Ok(Self { graph, k })
    }

    /// Accepts a signed `K` as supplied by a driver; negative values are
    /// malformed.
    pub fn from_signed(graph: Graph, k: i64) -> Result<Self> {
        let k = usize::try_from(k)
            .map_err(|_| ReductionError::malformed(format!("K = {} is negative", k)))?;
        Self::new(graph, k)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

/// Verify `solution` against `system`, turning a rejection into an error.
pub(crate) fn require_solution(system: SystemRef<'_>, solution: &Assignment) -> Result<()> {
    if crate::verify::verify(system, solution)? {
        Ok(())
    } else {
        Err(ReductionError::malformed(
            "assignment does not satisfy the constraint system",
        ))
    }
}
