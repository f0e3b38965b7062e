use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

use serde::{Deserialize, Serialize};
use srg_core::{NodeLabel, SimpleGraph, SrgError};

/// Common-neighbour count observed for one vertex pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    /// First vertex of the pair.
    pub a: NodeLabel,
    /// Second vertex of the pair.
    pub b: NodeLabel,
    /// `|N(a) ∩ N(b)|`.
    pub common: usize,
}

/// Outcome of a μ or λ consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterCheck {
    /// First value computed; every other value must equal it.
    pub value: Option<usize>,
    /// Whether all computed values are equal (vacuously true with no samples).
    pub consistent: bool,
    /// Number of values computed.
    pub samples: usize,
    /// First pair whose count differed from `value`.
    pub mismatch: Option<PairCount>,
}

impl ParameterCheck {
    fn vacuous() -> Self {
        Self {
            value: None,
            consistent: true,
            samples: 0,
            mismatch: None,
        }
    }

    fn record(&mut self, parameter: &'static str, a: &NodeLabel, b: &NodeLabel, common: usize) {
        self.samples += 1;
        match self.value {
            None => self.value = Some(common),
            Some(expected) if expected != common => {
                self.consistent = false;
                if self.mismatch.is_none() {
                    tracing::debug!(
                        parameter,
                        a = %a,
                        b = %b,
                        expected,
                        found = common,
                        "parameter mismatch"
                    );
                    self.mismatch = Some(PairCount {
                        a: a.clone(),
                        b: b.clone(),
                        common,
                    });
                }
            }
            Some(_) => {}
        }
    }
}

/// Borrowed neighbour sets of every node, taken once per check.
pub(crate) struct Neighbourhoods<'a> {
    sets: BTreeMap<&'a NodeLabel, &'a BTreeSet<NodeLabel>>,
}

impl<'a> Neighbourhoods<'a> {
    pub(crate) fn of(graph: &'a dyn SimpleGraph) -> Self {
        Self {
            sets: graph.adjacency().collect(),
        }
    }

    pub(crate) fn iter(
        &self,
    ) -> impl Iterator<Item = (&'a NodeLabel, &'a BTreeSet<NodeLabel>)> + '_ {
        self.sets.iter().map(|(node, set)| (*node, *set))
    }

    fn common(&self, a: &BTreeSet<NodeLabel>, b: &NodeLabel) -> usize {
        self.sets
            .get(b)
            .map_or(0, |other| a.intersection(other).count())
    }
}

/// Returns `|N(a) ∩ N(b)|`.
pub fn common_neighbors(
    graph: &dyn SimpleGraph,
    a: &NodeLabel,
    b: &NodeLabel,
) -> Result<usize, SrgError> {
    let left = graph.neighbors(a)?;
    let right = graph.neighbors(b)?;
    Ok(left.intersection(right).count())
}

/// Checks that every ordered pair of distinct non-adjacent vertices has the
/// same number of common neighbours.
///
/// Only vertices with at least one neighbour enumerate their non-adjacent set;
/// an isolated vertex still shows up as the partner of the others.
pub fn mu_check(graph: &dyn SimpleGraph) -> ParameterCheck {
    mu_check_in(&Neighbourhoods::of(graph))
}

/// Checks that every edge has the same number of common neighbours.
pub fn lambda_check(graph: &dyn SimpleGraph) -> ParameterCheck {
    lambda_check_in(&Neighbourhoods::of(graph))
}

pub(crate) fn mu_check_in(hoods: &Neighbourhoods<'_>) -> ParameterCheck {
    let mut check = ParameterCheck::vacuous();
    for (v, adjacent) in hoods.iter() {
        if adjacent.is_empty() {
            continue;
        }
        let non_adjacent = hoods
            .iter()
            .map(|(u, _)| u)
            .filter(|u| *u != v && !adjacent.contains(*u));
        for u in non_adjacent {
            check.record("mu", v, u, hoods.common(adjacent, u));
        }
    }
    check
}

pub(crate) fn lambda_check_in(hoods: &Neighbourhoods<'_>) -> ParameterCheck {
    let mut check = ParameterCheck::vacuous();
    for (u, adjacent) in hoods.iter() {
        for v in adjacent.range::<NodeLabel, _>((Bound::Excluded(u), Bound::Unbounded)) {
            check.record("lambda", u, v, hoods.common(adjacent, v));
        }
    }
    check
}
