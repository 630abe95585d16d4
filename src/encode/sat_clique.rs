// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SAT to clique.
//!
//! Every literal occurrence in the formula becomes one graph node. Nodes are
//! numbered densely: clause by clause, and within a clause by ascending flag
//! position, so node ids `0..total` have no gaps and the total equals the
//! number of set flags in the formula.
//!
//! Two nodes are adjacent iff they come from different clauses and their
//! literals do not conflict (same variable, opposite polarity). The formula
//! is satisfiable iff the graph has a clique of size `nClauses`: such a clique
//! picks one literal per clause, and those literals can be made true together.

use super::{require_solution, Encoding};
use crate::aggregate::{unordered_pairs, IndexRange};
use crate::assignment::Assignment;
use crate::cnf::{CnfInstance, Literal};
use crate::constraint::{Comparator, PairRule, PredicateForm, SystemRef};
use crate::error::{ReductionError, Result};
use crate::graph::Graph;
use crate::select::select;
use crate::store::IntArray;
use tracing::debug;

/// Literal occurrences of a formula, numbered as graph nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMap {
    /// `nLen[clause]`: nodes allocated to each clause.
    clause_lengths: IntArray,
    /// `[clause, slot]` to node id, for `slot < nLen[clause]`.
    clause_nodes: IntArray,
    /// Node to literal flag position.
    node_flags: IntArray,
    /// Node to clause index.
    node_clauses: IntArray,
    node_count: usize,
}

impl NodeMap {
    /// Allocate node ids for every present literal of `cnf`.
    pub fn build(cnf: &CnfInstance) -> Result<Self> {
        let clauses = cnf.num_clauses();
        let total = cnf.flag_count();
        let mut clause_lengths = IntArray::filled(&[clauses], 0)?;
        let mut clause_nodes = IntArray::declare(&[clauses, cnf.width()])?;
        let mut node_flags = IntArray::declare(&[total])?;
        let mut node_clauses = IntArray::declare(&[total])?;

        let mut node_count = 0;
        for (clause, row) in cnf.clauses().iter().enumerate() {
            for flag in row.flags() {
                let slot = clause_lengths.get(&[clause])?;
                clause_nodes.set(&[clause, slot], node_count)?;
                clause_lengths.set(&[clause], slot + 1)?;
                node_flags.set(&[node_count], flag)?;
                node_clauses.set(&[node_count], clause)?;
                node_count += 1;
            }
        }
        debug_assert_eq!(node_count, total);

        Ok(Self {
            clause_lengths,
            clause_nodes,
            node_flags,
            node_clauses,
            node_count,
        })
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of clauses the map was built from.
    pub fn clause_count(&self) -> usize {
        self.clause_lengths.bounds()[0]
    }

    /// Node ids of one clause, ascending.
    pub fn clause_nodes(&self, clause: usize) -> Result<Vec<usize>> {
        let len = self.clause_lengths.get(&[clause])?;
        IndexRange::upto(len)
            .into_iter()
            .map(|slot| self.clause_nodes.get(&[clause, slot]))
            .collect()
    }

    /// The literal a node stands for.
    pub fn literal(&self, node: usize) -> Result<Literal> {
        Ok(Literal::from_flag(self.node_flags.get(&[node])?))
    }

    /// The clause a node belongs to.
    pub fn clause(&self, node: usize) -> Result<usize> {
        self.node_clauses.get(&[node])
    }
}

/// Clique predicate over the literal-occurrence graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatCliqueEncoding {
    form: PredicateForm,
    nodes: NodeMap,
    num_vars: usize,
}

impl SatCliqueEncoding {
    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    /// The derived graph.
    pub fn graph(&self) -> &Graph {
        &self.form.graph
    }

    /// Target clique size, `nClauses`.
    pub fn target(&self) -> usize {
        self.form.target
    }

    /// Node selection for a satisfying assignment of the source formula: the
    /// first true literal of each clause. Fails with `MalformedInstance` if
    /// some clause has no true literal.
    pub fn selection(&self, model: &Assignment) -> Result<Assignment> {
        let values = model.complete(self.num_vars)?;
        let mut selected = Vec::with_capacity(self.target());
        for clause in IndexRange::upto(self.target()) {
            let mut chosen = None;
            for node in self.nodes.clause_nodes(clause)? {
                let literal = self.nodes.literal(node)?;
                if chosen.is_none() && literal.holds(values[literal.var()]) {
                    chosen = Some(node);
                }
            }
            let node = chosen.ok_or_else(|| {
                ReductionError::malformed(format!("clause {} has no true literal", clause))
            })?;
            selected.push(node);
        }
        Assignment::from_selection(self.nodes.node_count(), &selected)
    }
}

/// Encode "the formula is satisfiable" as a clique question.
pub fn encode(cnf: &CnfInstance) -> Result<SatCliqueEncoding> {
    let nodes = NodeMap::build(cnf)?;
    let mut graph = Graph::new(nodes.node_count())?;
    for (u, v) in unordered_pairs(nodes.node_count()) {
        let different = nodes.clause(u)? != nodes.clause(v)?;
        let conflict = nodes.literal(u)?.conflicts_with(nodes.literal(v)?);
        // Edges only accumulate; a pair once linked stays linked.
        let linked = select(different && !conflict, true, graph.entry(u, v)?);
        if linked {
            graph.add_edge(u, v)?;
            graph.add_edge(v, u)?;
        }
    }

    let target = cnf.num_clauses();
    debug!(
        clauses = target,
        variables = cnf.num_vars(),
        nodes = nodes.node_count(),
        edges = graph.edge_count(),
        "encoded CNF as clique"
    );
    Ok(SatCliqueEncoding {
        form: PredicateForm {
            graph,
            target,
            comparator: Comparator::AtLeast,
            rule: PairRule::SelectedPairsAdjacent,
        },
        nodes,
        num_vars: cnf.num_vars(),
    })
}

impl Encoding for SatCliqueEncoding {
    /// A complete assignment of the source formula's variables.
    type Witness = Assignment;

    /// Each selected node fixes its variable so that its literal is true.
    /// Variables no selected node mentions are set false.
    fn decode(&self, solution: &Assignment) -> Result<Assignment> {
        require_solution(self.system(), solution)?;
        let mut model = Assignment::unassigned(self.num_vars);
        for node in solution.selected() {
            let literal = self.nodes.literal(node)?;
            let value = !literal.is_negated();
            match model.get(literal.var()) {
                Ok(existing) if existing != value => {
                    return Err(ReductionError::malformed(format!(
                        "selected nodes disagree on variable {}",
                        literal.var()
                    )));
                }
                _ => model.set(literal.var(), value)?,
            }
        }
        for var in IndexRange::upto(self.num_vars) {
            if model.get(var).is_err() {
                model.set(var, false)?;
            }
        }
        Ok(model)
    }

    fn system(&self) -> SystemRef<'_> {
        SystemRef::Predicate(&self.form)
    }
}
