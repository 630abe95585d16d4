// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Clique to SAT.
//!
//! A clique of size `K` in a graph on `V` vertices is described by a `K x V`
//! placement matrix of propositional variables: variable `j * V + i` means
//! "position `j` of the clique is vertex `i`". Clauses are emitted in a fixed
//! order, which determines clause indices:
//!
//! 1. **Coverage**: for each position `j`, `(j,0) | (j,1) | ... | (j,V-1)`.
//! 2. **One position per vertex**: for each vertex `i` and positions `j < k`,
//!    `¬(j,i) | ¬(k,i)`.
//! 3. **One vertex per position**: for each position `j` and vertices
//!    `i < k`, `¬(j,i) | ¬(j,k)`.
//! 4. **Edge consistency**: for positions `j < l` and every ordered pair of
//!    distinct, non-adjacent vertices `(i, k)`, `¬(j,i) | ¬(l,k)`.
//! 5. **Symmetry breaking** (optional): for consecutive positions `j, j+1`
//!    and vertices `i > k`, `¬(j,i) | ¬(j+1,k)`, so positions hold vertices
//!    in increasing order.
//!
//! Families 1-4 alone are sound and complete. Family 5 keeps exactly one
//! placement per clique (the sorted one), so it removes redundant models but
//! never removes a clique.
//!
//! Without family 5 the clause count is
//! `K + V*K*(K-1)/2 + K*V*(V-1)/2 + N*K*(K-1)/2`, where `N` counts ordered
//! pairs of distinct non-adjacent vertices. Family 5 adds
//! `(K-1)*V*(V-1)/2`.

use super::{require_solution, CliqueInstance, Encoding};
use crate::aggregate::{ordered_pairs, unordered_pairs, IndexRange};
use crate::assignment::Assignment;
use crate::cnf::{CnfInstance, Literal};
use crate::constraint::SystemRef;
use crate::error::{ReductionError, Result};
use tracing::debug;

/// Options for [`CliqueSatReduction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliqueSatConfig {
    /// Emit the lexicographic symmetry-breaking family.
    pub symmetry_breaking: bool,
}

impl CliqueSatConfig {
    pub fn with_symmetry_breaking(mut self, enabled: bool) -> Self {
        self.symmetry_breaking = enabled;
        self
    }
}

/// Clique-to-SAT encoder.
///
/// # Example
///
/// ```
/// use np_reduce::encode::{CliqueInstance, CliqueSatConfig, CliqueSatReduction};
/// use np_reduce::graph::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let instance = CliqueInstance::new(graph, 2).unwrap();
/// let encoding = CliqueSatReduction::new(CliqueSatConfig::default())
///     .encode(&instance)
///     .unwrap();
/// assert_eq!(encoding.cnf().num_vars(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CliqueSatReduction {
    config: CliqueSatConfig,
}

/// The CNF produced by [`CliqueSatReduction`], with its placement layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueSatEncoding {
    cnf: CnfInstance,
    k: usize,
    vertices: usize,
    family_starts: [usize; 5],
}

/// Clause families in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseFamily {
    Coverage,
    OnePositionPerVertex,
    OneVertexPerPosition,
    EdgeConsistency,
    SymmetryBreaking,
}

impl CliqueSatReduction {
    pub fn new(config: CliqueSatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CliqueSatConfig {
        &self.config
    }

    /// Number of clauses the encoding of `instance` will contain.
    ///
    /// Fails with `MalformedInstance` if the count does not fit in `usize`.
    pub fn clause_count(&self, instance: &CliqueInstance) -> Result<usize> {
        let k = instance.k();
        let v = instance.graph().vertex_count();
        clause_total(
            k,
            v,
            instance.graph().non_edge_count(),
            self.config.symmetry_breaking,
        )
        .ok_or_else(|| {
            ReductionError::malformed(format!(
                "clause count overflows for K = {}, V = {}",
                k, v
            ))
        })
    }

    /// Encode "the graph has a clique of size K" as CNF.
    pub fn encode(&self, instance: &CliqueInstance) -> Result<CliqueSatEncoding> {
        let graph = instance.graph();
        let k = instance.k();
        let v = graph.vertex_count();
        let num_vars = k.checked_mul(v).ok_or_else(|| {
            ReductionError::malformed(format!("K * V overflows for K = {}, V = {}", k, v))
        })?;
        let var = |position: usize, vertex: usize| position * v + vertex;

        let expected = self.clause_count(instance)?;
        let mut cnf = CnfInstance::with_capacity(num_vars, expected);
        let mut family_starts = [0; 5];

        family_starts[ClauseFamily::Coverage as usize] = cnf.num_clauses();
        for j in IndexRange::upto(k) {
            cnf.push_clause(IndexRange::upto(v).into_iter().map(|i| Literal::positive(var(j, i))))?;
        }

        family_starts[ClauseFamily::OnePositionPerVertex as usize] = cnf.num_clauses();
        for i in IndexRange::upto(v) {
            for (j, l) in unordered_pairs(k) {
                cnf.push_clause([Literal::negative(var(j, i)), Literal::negative(var(l, i))])?;
            }
        }

        family_starts[ClauseFamily::OneVertexPerPosition as usize] = cnf.num_clauses();
        for j in IndexRange::upto(k) {
            for (i, m) in unordered_pairs(v) {
                cnf.push_clause([Literal::negative(var(j, i)), Literal::negative(var(j, m))])?;
            }
        }

        family_starts[ClauseFamily::EdgeConsistency as usize] = cnf.num_clauses();
        for (j, l) in unordered_pairs(k) {
            for (i, m) in ordered_pairs(v) {
                if i != m && !graph.has_edge(i, m) {
                    cnf.push_clause([Literal::negative(var(j, i)), Literal::negative(var(l, m))])?;
                }
            }
        }

        family_starts[ClauseFamily::SymmetryBreaking as usize] = cnf.num_clauses();
        if self.config.symmetry_breaking {
            for j in IndexRange::upto(k.saturating_sub(1)) {
                for (m, i) in unordered_pairs(v) {
                    // i > m: position j must not hold a larger vertex than j + 1.
                    cnf.push_clause([
                        Literal::negative(var(j, i)),
                        Literal::negative(var(j + 1, m)),
                    ])?;
                }
            }
        }

        debug_assert_eq!(cnf.num_clauses(), expected);
        debug!(
            vertices = v,
            k,
            variables = num_vars,
            clauses = cnf.num_clauses(),
            symmetry_breaking = self.config.symmetry_breaking,
            "encoded clique as CNF"
        );

        Ok(CliqueSatEncoding {
            cnf,
            k,
            vertices: v,
            family_starts,
        })
    }
}

impl CliqueSatEncoding {
    /// The generated formula.
    pub fn cnf(&self) -> &CnfInstance {
        &self.cnf
    }

    /// Variable index meaning "position `position` is vertex `vertex`".
    pub fn variable(&self, position: usize, vertex: usize) -> Result<usize> {
        if position >= self.k || vertex >= self.vertices {
            return Err(ReductionError::out_of_range(
                &[position, vertex],
                &[self.k, self.vertices],
            ));
        }
        Ok(position * self.vertices + vertex)
    }

    /// Clause index range of one family. Empty when the family was not
    /// emitted.
    pub fn family(&self, family: ClauseFamily) -> IndexRange {
        let start = self.family_starts[family as usize];
        let end = self
            .family_starts
            .get(family as usize + 1)
            .copied()
            .unwrap_or_else(|| self.cnf.num_clauses());
        IndexRange::new(start, end)
    }

    /// Assignment placing `clique[j]` at position `j`. The clique must have
    /// exactly K vertices.
    pub fn placement(&self, clique: &[usize]) -> Result<Assignment> {
        if clique.len() != self.k {
            return Err(ReductionError::SizeMismatch {
                what: "clique size",
                expected: self.k,
                found: clique.len(),
            });
        }
        let selected = clique
            .iter()
            .enumerate()
            .map(|(position, &vertex)| self.variable(position, vertex))
            .collect::<Result<Vec<_>>>()?;
        Assignment::from_selection(self.k * self.vertices, &selected)
    }
}

/// `K + V*C(K,2) + K*C(V,2) + 2*non_edges*C(K,2)`, plus `(K-1)*C(V,2)` with
/// symmetry breaking. `None` on overflow.
fn clause_total(k: usize, v: usize, non_edges: usize, symmetry_breaking: bool) -> Option<usize> {
    let position_pairs = k.checked_mul(k.saturating_sub(1))? / 2;
    let vertex_pairs = v.checked_mul(v.saturating_sub(1))? / 2;
    let ordered_non_edges = non_edges.checked_mul(2)?;
    let symmetry = if symmetry_breaking {
        k.saturating_sub(1).checked_mul(vertex_pairs)?
    } else {
        0
    };
    [
        v.checked_mul(position_pairs)?,
        k.checked_mul(vertex_pairs)?,
        ordered_non_edges.checked_mul(position_pairs)?,
        symmetry,
    ]
    .into_iter()
    .try_fold(k, usize::checked_add)
}

impl Encoding for CliqueSatEncoding {
    /// Clique vertices, ascending.
    type Witness = Vec<usize>;

    fn system(&self) -> SystemRef<'_> {
        SystemRef::Cnf(&self.cnf)
    }

    fn decode(&self, solution: &Assignment) -> Result<Vec<usize>> {
        require_solution(self.system(), solution)?;
        let values = solution.complete(self.k * self.vertices)?;
        let mut clique: Vec<usize> = IndexRange::upto(self.vertices)
            .into_iter()
            .filter(|&i| IndexRange::upto(self.k).into_iter().any(|j| values[j * self.vertices + i]))
            .collect();
        clique.sort_unstable();
        Ok(clique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::verify::verify;

    fn triangle_and_isolated() -> CliqueInstance {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        CliqueInstance::new(graph, 2).unwrap()
    }

    #[test]
    fn test_clause_count_formula() {
        let instance = triangle_and_isolated();
        let plain = CliqueSatReduction::default();
        // K=2, V=4: 2 + 4*1 + 2*6 + (2*3 non-edges ordered)*1 = 24
        assert_eq!(plain.clause_count(&instance), Ok(24));
        let encoding = plain.encode(&instance).unwrap();
        assert_eq!(encoding.cnf().num_clauses(), 24);
        assert_eq!(encoding.cnf().num_vars(), 8);

        let symmetric = CliqueSatReduction::new(CliqueSatConfig::default().with_symmetry_breaking(true));
        let encoding = symmetric.encode(&instance).unwrap();
        assert_eq!(encoding.cnf().num_clauses(), 24 + 6);
    }

    #[test]
    fn test_clause_total_overflow() {
        assert_eq!(clause_total(2, 4, 3, false), Some(24));
        assert_eq!(clause_total(2, 4, 3, true), Some(30));
        assert_eq!(clause_total(0, 0, 0, true), Some(0));
        // Each product fits in usize on its own; the sums or products do not.
        let big = 1usize << (usize::BITS / 2);
        assert_eq!(clause_total(big, big, 0, false), None);
        assert_eq!(clause_total(3, 4, usize::MAX / 2 + 1, false), None);
        assert_eq!(clause_total(2, 2, usize::MAX / 2, false), None);
    }

    #[test]
    fn test_family_order() {
        let encoding = CliqueSatReduction::default().encode(&triangle_and_isolated()).unwrap();
        assert_eq!(encoding.family(ClauseFamily::Coverage), IndexRange::new(0, 2));
        assert_eq!(encoding.family(ClauseFamily::OnePositionPerVertex), IndexRange::new(2, 6));
        assert_eq!(encoding.family(ClauseFamily::OneVertexPerPosition), IndexRange::new(6, 18));
        assert_eq!(encoding.family(ClauseFamily::EdgeConsistency), IndexRange::new(18, 24));
        assert!(encoding.family(ClauseFamily::SymmetryBreaking).is_empty());

        let cnf = encoding.cnf();
        // First coverage clause: (0,0) | (0,1) | (0,2) | (0,3).
        let first: Vec<_> = cnf.clause(0).unwrap().literals().to_vec();
        assert_eq!(first, (0..4).map(Literal::positive).collect::<Vec<_>>());
        // First edge-consistency clause: vertices 0 and 3 are not adjacent.
        assert_eq!(
            cnf.clause(18).unwrap().literals(),
            &[Literal::negative(0), Literal::negative(4 + 3)]
        );
    }

    #[test]
    fn test_placement_verifies_and_decodes() {
        let encoding = CliqueSatReduction::default().encode(&triangle_and_isolated()).unwrap();
        let a = encoding.placement(&[2, 0]).unwrap();
        assert_eq!(verify(encoding.system(), &a), Ok(true));
        assert_eq!(encoding.decode(&a).unwrap(), vec![0, 2]);

        let bad = encoding.placement(&[0, 3]).unwrap();
        assert_eq!(verify(encoding.system(), &bad), Ok(false));
        assert!(encoding.decode(&bad).is_err());

        assert!(encoding.placement(&[0]).is_err());
        assert!(encoding.placement(&[0, 4]).is_err());
    }

    #[test]
    fn test_symmetry_breaking_keeps_sorted_placement() {
        let reduction = CliqueSatReduction::new(CliqueSatConfig::default().with_symmetry_breaking(true));
        let encoding = reduction.encode(&triangle_and_isolated()).unwrap();
        let sorted = encoding.placement(&[0, 2]).unwrap();
        let unsorted = encoding.placement(&[2, 0]).unwrap();
        assert_eq!(verify(encoding.system(), &sorted), Ok(true));
        assert_eq!(verify(encoding.system(), &unsorted), Ok(false));
    }

    #[test]
    fn test_k_zero_is_empty_formula() {
        let graph = Graph::new(3).unwrap();
        let encoding = CliqueSatReduction::default()
            .encode(&CliqueInstance::new(graph, 0).unwrap())
            .unwrap();
        assert_eq!(encoding.cnf().num_vars(), 0);
        assert_eq!(encoding.cnf().num_clauses(), 0);
        assert_eq!(verify(encoding.system(), &Assignment::default()), Ok(true));
        assert_eq!(encoding.decode(&Assignment::default()).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_variable_layout() {
        let encoding = CliqueSatReduction::default().encode(&triangle_and_isolated()).unwrap();
        assert_eq!(encoding.variable(0, 3), Ok(3));
        assert_eq!(encoding.variable(1, 0), Ok(4));
        assert!(encoding.variable(2, 0).is_err());
        assert_eq!(encoding.system(), SystemRef::Cnf(encoding.cnf()));
        assert_eq!(encoding.system().num_variables(), 8);
    }
}
