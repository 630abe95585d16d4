// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint systems produced by the encoders.
//!
//! A [`ConstraintSystem`] is one of two shapes, and the verifier dispatches on
//! the variant:
//!
//! - [`PredicateForm`]: a graph, a pair rule folded over all unordered vertex
//!   pairs, and a bound on the number of selected vertices.
//! - [`CnfInstance`]: clause rows over propositional variables.
//!
//! [`SystemRef`] is the borrowed form. Encoders keep their payload typed and
//! hand out a `SystemRef`; the verifier and the enumerator accept either.

use crate::cnf::CnfInstance;
use crate::graph::Graph;
use std::fmt;

/// How the selected-vertex count is compared with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `count >= target`
    AtLeast,
    /// `count <= target`
    AtMost,
}

impl Comparator {
    pub fn holds(self, count: usize, target: usize) -> bool {
        match self {
            Comparator::AtLeast => count >= target,
            Comparator::AtMost => count <= target,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::AtLeast => write!(f, ">="),
            Comparator::AtMost => write!(f, "<="),
        }
    }
}

/// Constraint applied to every unordered pair `{i, j}` of distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRule {
    /// If both endpoints are selected, an edge must exist (clique).
    SelectedPairsAdjacent,
    /// If an edge exists, at least one endpoint is selected (vertex cover).
    EdgesCovered,
}

impl PairRule {
    /// Whether the pair satisfies the rule given edge existence and the two
    /// selections.
    pub fn holds(self, edge: bool, selected_i: bool, selected_j: bool) -> bool {
        match self {
            PairRule::SelectedPairsAdjacent => !(selected_i && selected_j) || edge,
            PairRule::EdgesCovered => !edge || selected_i || selected_j,
        }
    }
}

/// "Pair rule over all pairs, plus a count bound" over a graph's vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateForm {
    pub graph: Graph,
    pub target: usize,
    pub comparator: Comparator,
    pub rule: PairRule,
}

/// Either shape of constraint system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintSystem {
    Predicate(PredicateForm),
    Cnf(CnfInstance),
}

impl ConstraintSystem {
    /// Number of decision variables a complete assignment must cover.
    pub fn num_variables(&self) -> usize {
        self.view().num_variables()
    }

    pub fn view(&self) -> SystemRef<'_> {
        SystemRef::from(self)
    }

    pub fn as_predicate(&self) -> Option<&PredicateForm> {
        match self {
            ConstraintSystem::Predicate(form) => Some(form),
            ConstraintSystem::Cnf(_) => None,
        }
    }

    pub fn as_cnf(&self) -> Option<&CnfInstance> {
        match self {
            ConstraintSystem::Cnf(cnf) => Some(cnf),
            ConstraintSystem::Predicate(_) => None,
        }
    }
}

/// Borrowed constraint system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemRef<'a> {
    Predicate(&'a PredicateForm),
    Cnf(&'a CnfInstance),
}

impl SystemRef<'_> {
    pub fn num_variables(self) -> usize {
        match self {
            SystemRef::Predicate(form) => form.graph.vertex_count(),
            SystemRef::Cnf(cnf) => cnf.num_vars(),
        }
    }

    /// Owned copy of the system.
    pub fn into_owned(self) -> ConstraintSystem {
        match self {
            SystemRef::Predicate(form) => ConstraintSystem::Predicate(form.clone()),
            SystemRef::Cnf(cnf) => ConstraintSystem::Cnf(cnf.clone()),
        }
    }
}

impl<'a> From<&'a ConstraintSystem> for SystemRef<'a> {
    fn from(system: &'a ConstraintSystem) -> Self {
        match system {
            ConstraintSystem::Predicate(form) => SystemRef::Predicate(form),
            ConstraintSystem::Cnf(cnf) => SystemRef::Cnf(cnf),
        }
    }
}

impl<'a> From<&'a PredicateForm> for SystemRef<'a> {
    fn from(form: &'a PredicateForm) -> Self {
        SystemRef::Predicate(form)
    }
}

impl<'a> From<&'a CnfInstance> for SystemRef<'a> {
    fn from(cnf: &'a CnfInstance) -> Self {
        SystemRef::Cnf(cnf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator() {
        assert!(Comparator::AtLeast.holds(3, 3));
        assert!(!Comparator::AtLeast.holds(2, 3));
        assert!(Comparator::AtMost.holds(0, 0));
        assert!(!Comparator::AtMost.holds(4, 3));
    }

    #[test]
    fn test_clique_pair_rule() {
        let rule = PairRule::SelectedPairsAdjacent;
        assert!(rule.holds(false, true, false));
        assert!(rule.holds(true, true, true));
        assert!(!rule.holds(false, true, true));
    }

    #[test]
    fn test_cover_pair_rule() {
        let rule = PairRule::EdgesCovered;
        assert!(rule.holds(false, false, false));
        assert!(rule.holds(true, false, true));
        assert!(!rule.holds(true, false, false));
    }

    #[test]
    fn test_num_variables() {
        let system = ConstraintSystem::Cnf(CnfInstance::new(7));
        assert_eq!(system.num_variables(), 7);
        assert!(system.as_predicate().is_none());

        let system = ConstraintSystem::Predicate(PredicateForm {
            graph: Graph::new(4).unwrap(),
            target: 2,
            comparator: Comparator::AtLeast,
            rule: PairRule::SelectedPairsAdjacent,
        });
        assert_eq!(system.num_variables(), 4);
        assert!(system.as_cnf().is_none());
    }

    #[test]
    fn test_view_round_trip() {
        let system = ConstraintSystem::Cnf(CnfInstance::new(2));
        let view = system.view();
        assert!(matches!(view, SystemRef::Cnf(_)));
        assert_eq!(view.num_variables(), 2);
        assert_eq!(view.into_owned(), system);

        let form = PredicateForm {
            graph: Graph::new(3).unwrap(),
            target: 1,
            comparator: Comparator::AtMost,
            rule: PairRule::EdgesCovered,
        };
        assert_eq!(SystemRef::from(&form).num_variables(), 3);
        assert_eq!(
            SystemRef::from(&form).into_owned(),
            ConstraintSystem::Predicate(form)
        );
    }
}
