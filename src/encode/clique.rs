// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Clique membership.
//!
//! The constraint system is the pair (graph, K) itself. A decision vector
//! `bBelongs` is accepted iff every unordered pair of selected vertices has an
//! edge in either direction and at least K vertices are selected.

use super::{require_solution, CliqueInstance, Encoding};
use crate::assignment::Assignment;
use crate::constraint::{Comparator, PairRule, PredicateForm, SystemRef};
use crate::error::Result;
use tracing::debug;

/// Clique predicate over the instance's graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueEncoding {
    form: PredicateForm,
}

/// Encode "the graph has a clique of size at least K".
pub fn encode(instance: &CliqueInstance) -> Result<CliqueEncoding> {
    debug!(
        vertices = instance.graph().vertex_count(),
        k = instance.k(),
        "encoded clique predicate"
    );
    Ok(CliqueEncoding {
        form: PredicateForm {
            graph: instance.graph().clone(),
            target: instance.k(),
            comparator: Comparator::AtLeast,
            rule: PairRule::SelectedPairsAdjacent,
        },
    })
}

impl Encoding for CliqueEncoding {
    /// Selected vertices, ascending.
    type Witness = Vec<usize>;

    fn system(&self) -> SystemRef<'_> {
        SystemRef::Predicate(&self.form)
    }

    fn decode(&self, solution: &Assignment) -> Result<Vec<usize>> {
        require_solution(self.system(), solution)?;
        Ok(solution.selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReductionError;
    use crate::graph::Graph;
    use crate::verify::verify;

    fn square_with_diagonal() -> CliqueInstance {
        // 0-1-2-3-0 plus 0-2: triangles {0,1,2} and {0,2,3}.
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        CliqueInstance::new(graph, 3).unwrap()
    }

    #[test]
    fn test_accepts_triangles() {
        let encoding = encode(&square_with_diagonal()).unwrap();
        for triangle in [[0, 1, 2], [0, 2, 3]] {
            let a = Assignment::from_selection(4, &triangle).unwrap();
            assert_eq!(verify(encoding.system(), &a), Ok(true));
            assert_eq!(encoding.decode(&a).unwrap(), triangle.to_vec());
        }
    }

    #[test]
    fn test_rejects_non_clique() {
        let encoding = encode(&square_with_diagonal()).unwrap();
        let a = Assignment::from_selection(4, &[0, 1, 3]).unwrap();
        assert_eq!(verify(encoding.system(), &a), Ok(false));
        assert!(matches!(
            encoding.decode(&a),
            Err(ReductionError::MalformedInstance { .. })
        ));
    }

    #[test]
    fn test_k_zero_accepts_empty_selection() {
        let graph = Graph::new(5).unwrap();
        let encoding = encode(&CliqueInstance::new(graph, 0).unwrap()).unwrap();
        let empty = Assignment::from_selection(5, &[]).unwrap();
        assert_eq!(verify(encoding.system(), &empty), Ok(true));
    }

    #[test]
    fn test_k_equals_n_needs_complete_graph() {
        let full = Assignment::from_selection(4, &[0, 1, 2, 3]).unwrap();
        let complete = encode(&CliqueInstance::new(Graph::complete(4).unwrap(), 4).unwrap()).unwrap();
        assert_eq!(verify(complete.system(), &full), Ok(true));

        let almost = encode(&square_with_diagonal_k(4)).unwrap();
        assert_eq!(verify(almost.system(), &full), Ok(false));
    }

    fn square_with_diagonal_k(k: usize) -> CliqueInstance {
        CliqueInstance::new(square_with_diagonal().graph().clone(), k).unwrap()
    }
}
