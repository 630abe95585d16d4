// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Clique to vertex cover.
//!
//! A set `S` is a clique of size `K` in `G` iff `V \ S` is a vertex cover of
//! size `|V| - K` in the complement of `G`. The encoder builds the complement
//! graph and a cover predicate bounded by `K' = |V| - K`; decoding takes the
//! vertices left out of the cover.
//!
//! The complement is taken over edge existence (`E[i][j] || E[j][i]`), so it is
//! symmetric even when the input adjacency is not, and it has no self-loops.

use super::{require_solution, CliqueInstance, Encoding};
use crate::assignment::Assignment;
use crate::constraint::{Comparator, PairRule, PredicateForm, SystemRef};
use crate::error::Result;
use crate::graph::Graph;
use tracing::debug;

/// Cover predicate over the complement graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexCoverEncoding {
    form: PredicateForm,
}

impl VertexCoverEncoding {
    /// `K' = |V| - K`.
    pub fn cover_bound(&self) -> usize {
        self.form.target
    }

    /// The complement graph the cover is taken in.
    pub fn complement(&self) -> &Graph {
        &self.form.graph
    }
}

/// Encode "the graph has a clique of size K" as a vertex cover question.
pub fn encode(instance: &CliqueInstance) -> Result<VertexCoverEncoding> {
    let graph = instance.graph();
    let complement = graph.complement()?;
    let cover_bound = graph.vertex_count() - instance.k();
    debug!(
        vertices = graph.vertex_count(),
        complement_edges = complement.edge_count(),
        cover_bound,
        "encoded vertex cover of complement"
    );
    Ok(VertexCoverEncoding {
        form: PredicateForm {
            graph: complement,
            target: cover_bound,
            comparator: Comparator::AtMost,
            rule: PairRule::EdgesCovered,
        },
    })
}

impl Encoding for VertexCoverEncoding {
    /// Clique vertices (those outside the cover), ascending.
    type Witness = Vec<usize>;

    fn system(&self) -> SystemRef<'_> {
        SystemRef::Predicate(&self.form)
    }

    fn decode(&self, solution: &Assignment) -> Result<Vec<usize>> {
        require_solution(self.system(), solution)?;
        let values = solution.complete(self.form.graph.vertex_count())?;
        Ok(values
            .iter()
            .enumerate()
            .filter(|&(_, &in_cover)| !in_cover)
            .map(|(vertex, _)| vertex)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::verify;

    fn path() -> Graph {
        // 0-1-2
        Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn test_complement_and_bound() {
        let encoding = encode(&CliqueInstance::new(path(), 2).unwrap()).unwrap();
        assert_eq!(encoding.cover_bound(), 1);
        assert_eq!(encoding.complement().edges().collect::<Vec<_>>(), vec![(0, 2)]);
        match encoding.system() {
            SystemRef::Predicate(form) => {
                assert_eq!(&form.graph, encoding.complement());
                assert_eq!(form.target, encoding.cover_bound());
                assert_eq!(form.comparator, Comparator::AtMost);
            }
            SystemRef::Cnf(_) => panic!("cover encoding should be a predicate"),
        }
    }

    #[test]
    fn test_cover_of_complement_gives_clique() {
        let encoding = encode(&CliqueInstance::new(path(), 2).unwrap()).unwrap();
        // Cover {2} of complement edge 0-2 leaves clique {0, 1}.
        let cover = Assignment::from_selection(3, &[2]).unwrap();
        assert_eq!(verify(encoding.system(), &cover), Ok(true));
        assert_eq!(encoding.decode(&cover).unwrap(), vec![0, 1]);

        // Cover {1} misses complement edge 0-2.
        let miss = Assignment::from_selection(3, &[1]).unwrap();
        assert_eq!(verify(encoding.system(), &miss), Ok(false));
        assert!(encoding.decode(&miss).is_err());
    }

    #[test]
    fn test_asymmetric_storage() {
        // Only E[1][0] is stored; the pair is still adjacent.
        let graph = Graph::from_edges(2, &[(1, 0)]).unwrap();
        let encoding = encode(&CliqueInstance::new(graph, 2).unwrap()).unwrap();
        assert_eq!(encoding.complement().edge_count(), 0);
        let empty_cover = Assignment::from_selection(2, &[]).unwrap();
        assert_eq!(encoding.decode(&empty_cover).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_isolated_vertices_follow_general_rule() {
        // No edges at all: only cliques of size <= 1 exist.
        let graph = Graph::new(3).unwrap();
        let k2 = encode(&CliqueInstance::new(graph.clone(), 2).unwrap()).unwrap();
        for subset in [vec![0], vec![1], vec![2]] {
            let a = Assignment::from_selection(3, &subset).unwrap();
            assert_eq!(verify(k2.system(), &a), Ok(false));
        }
        let k1 = encode(&CliqueInstance::new(graph, 1).unwrap()).unwrap();
        let a = Assignment::from_selection(3, &[0, 1]).unwrap();
        assert_eq!(k1.decode(&a).unwrap(), vec![2]);
    }
}
