// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graphs stored as a directed Boolean adjacency matrix.
//!
//! Storage is not required to be symmetric. Every predicate in this crate
//! treats an edge between `i` and `j` as existing when either directed entry
//! is set, see [`Graph::has_edge`]. Entries on the diagonal are stored but
//! never consulted by the encodings.
//!
//! # Example
//!
//! ```
//! use np_reduce::graph::Graph;
//!
//! let mut g = Graph::new(3).unwrap();
//! g.add_edge(0, 1).unwrap(); // only the (0, 1) entry is stored
//! assert!(g.has_edge(1, 0));
//! assert!(!g.has_edge(1, 2));
//! assert_eq!(g.edge_count(), 1);
//! ```

mod dimacs;

use crate::aggregate::{sum_fold, unordered_pairs};
use crate::error::{ReductionError, Result};
use crate::select::select;
use crate::store::BoolArray;

/// A graph on vertices `0..vertex_count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    adjacency: BoolArray,
}

impl Graph {
    /// Edgeless graph with `vertices` vertices.
    pub fn new(vertices: usize) -> Result<Self> {
        Ok(Self {
            vertices,
            adjacency: BoolArray::filled(&[vertices, vertices], false)?,
        })
    }

    /// Graph with the given directed entries set. Pass both `(u, v)` and
    /// `(v, u)` for symmetric storage; one of them is enough for the
    /// predicates.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(vertices)?;
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Graph with every unordered pair connected.
    pub fn complete(vertices: usize) -> Result<Self> {
        let mut graph = Self::new(vertices)?;
        for (u, v) in unordered_pairs(vertices) {
            graph.add_edge(u, v)?;
            graph.add_edge(v, u)?;
        }
        Ok(graph)
    }

    /// Set the directed entry `E[u][v]`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.adjacency.set(&[u, v], true)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// The stored directed entry `E[u][v]`.
    pub fn entry(&self, u: usize, v: usize) -> Result<bool> {
        self.adjacency.get(&[u, v])
    }

    /// Whether an edge exists between `u` and `v`: `E[u][v] || E[v][u]`.
    ///
    /// Out-of-range vertices have no edges.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.entry(u, v).unwrap_or(false) || self.entry(v, u).unwrap_or(false)
    }

    /// Number of unordered pairs `{u, v}`, `u != v`, with an edge.
    pub fn edge_count(&self) -> usize {
        sum_fold(unordered_pairs(self.vertices), |(u, v)| {
            select(self.has_edge(u, v), 1, 0)
        })
    }

    /// Number of unordered pairs `{u, v}`, `u != v`, without an edge.
    pub fn non_edge_count(&self) -> usize {
        unordered_pairs(self.vertices).len() - self.edge_count()
    }

    /// Edges as unordered pairs `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        unordered_pairs(self.vertices).filter(move |&(u, v)| self.has_edge(u, v))
    }

    /// Complement with respect to edge existence: `u` and `v` are adjacent in
    /// the result iff `u != v` and they are not adjacent here. The result is
    /// stored symmetrically with an empty diagonal.
    pub fn complement(&self) -> Result<Graph> {
        let mut complement = Graph::new(self.vertices)?;
        for (u, v) in unordered_pairs(self.vertices) {
            if !self.has_edge(u, v) {
                complement.add_edge(u, v)?;
                complement.add_edge(v, u)?;
            }
        }
        Ok(complement)
    }

    /// Check that `vertex` is in range.
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertices {
            Ok(())
        } else {
            Err(ReductionError::out_of_range(&[vertex], &[self.vertices]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_edgeless() {
        let g = Graph::new(4).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.non_edge_count(), 6);
    }

    #[test]
    fn test_edge_exists_in_either_direction() {
        let g = Graph::from_edges(3, &[(2, 0)]).unwrap();
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert_eq!(g.entry(0, 2), Ok(false));
        assert_eq!(g.entry(2, 0), Ok(true));
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 2)]);
    }

    #[test]
    fn test_out_of_range_edge() {
        let mut g = Graph::new(2).unwrap();
        assert!(matches!(
            g.add_edge(0, 2),
            Err(ReductionError::OutOfRange { .. })
        ));
        assert!(!g.has_edge(0, 7));
    }

    #[test]
    fn test_complete() {
        let g = Graph::complete(5).unwrap();
        assert_eq!(g.edge_count(), 10);
        assert_eq!(g.non_edge_count(), 0);
        assert!(!g.has_edge(3, 3));
    }

    #[test]
    fn test_complement() {
        let g = Graph::from_edges(4, &[(0, 1), (2, 1), (3, 3)]).unwrap();
        let c = g.complement().unwrap();
        assert_eq!(
            c.edges().collect::<Vec<_>>(),
            vec![(0, 2), (0, 3), (1, 3), (2, 3)]
        );
        // Diagonal stays empty even where the original had a self-loop.
        assert_eq!(c.entry(3, 3), Ok(false));
        assert_eq!(c.complement().unwrap().edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(0).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edges().count(), 0);
        assert!(g.check_vertex(0).is_err());
    }
}
