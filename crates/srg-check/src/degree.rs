use serde::{Deserialize, Serialize};
use srg_core::SimpleGraph;

use crate::params::Neighbourhoods;

/// Smallest and largest vertex degree of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DegreeProfile {
    /// Minimum degree; `None` for the empty graph.
    pub min: Option<usize>,
    /// Maximum degree; `None` for the empty graph.
    pub max: Option<usize>,
}

impl DegreeProfile {
    /// Computes the profile of `graph`.
    pub fn of(graph: &dyn SimpleGraph) -> Self {
        Self::from_hoods(&Neighbourhoods::of(graph))
    }

    pub(crate) fn from_hoods(hoods: &Neighbourhoods<'_>) -> Self {
        let mut profile = Self::default();
        for (_, adjacent) in hoods.iter() {
            let degree = adjacent.len();
            profile.min = Some(profile.min.map_or(degree, |v| v.min(degree)));
            profile.max = Some(profile.max.map_or(degree, |v| v.max(degree)));
        }
        profile
    }

    /// Whether every vertex has the same degree. True for the empty graph.
    pub fn is_regular(&self) -> bool {
        self.min == self.max
    }
}

/// Returns whether every vertex of `graph` has the same degree.
pub fn is_degree_regular(graph: &dyn SimpleGraph) -> bool {
    DegreeProfile::of(graph).is_regular()
}
