// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use np_reduce::aggregate::unordered_pairs;
use np_reduce::Graph;

/// Graph with every listed pair stored in both directions.
pub fn symmetric(vertices: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(vertices).unwrap();
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
        graph.add_edge(v, u).unwrap();
    }
    graph
}

/// The sparse six-vertex graph used for the clique-verifier scenario.
pub fn sparse_six() -> Graph {
    symmetric(
        6,
        &[
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (1, 5),
            (2, 3),
            (3, 4),
            (5, 2),
        ],
    )
}

/// The six-vertex graph used for the clique-to-SAT scenario. Vertex 5 is
/// adjacent to every other vertex.
pub fn hub_six() -> Graph {
    symmetric(
        6,
        &[
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 5),
            (3, 4),
            (3, 5),
            (4, 0),
            (4, 1),
            (4, 3),
            (5, 0),
            (5, 1),
            (5, 2),
            (5, 3),
            (5, 4),
        ],
    )
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    symmetric(n, &edges)
}

/// All subsets of `0..n` as membership vectors, in binary counting order.
pub fn subsets(n: usize) -> impl Iterator<Item = Vec<bool>> {
    (0u64..1 << n).map(move |bits| (0..n).map(|i| bits & (1 << i) != 0).collect())
}

/// Members of a subset.
pub fn members(subset: &[bool]) -> Vec<usize> {
    subset
        .iter()
        .enumerate()
        .filter(|&(_, &x)| x)
        .map(|(i, _)| i)
        .collect()
}

pub fn is_clique(graph: &Graph, vertices: &[usize]) -> bool {
    unordered_pairs(vertices.len()).all(|(a, b)| graph.has_edge(vertices[a], vertices[b]))
}

pub fn is_vertex_cover(graph: &Graph, vertices: &[usize]) -> bool {
    graph
        .edges()
        .all(|(u, v)| vertices.contains(&u) || vertices.contains(&v))
}

/// Number of cliques of exactly `k` vertices.
pub fn count_cliques(graph: &Graph, k: usize) -> usize {
    subsets(graph.vertex_count())
        .map(|s| members(&s))
        .filter(|m| m.len() == k && is_clique(graph, m))
        .count()
}

pub fn has_clique(graph: &Graph, k: usize) -> bool {
    count_cliques(graph, k) > 0
}
