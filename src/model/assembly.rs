//! Assembly candidates and the final report.

use std::fmt;

use super::interface::Call;
use super::stoichiometry::Stoichiometry;

/// Point-group symmetry of an assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointGroup {
    /// Cn: one rotation axis of order n.
    Cyclic(u32),
    /// Dn: n two-fold axes perpendicular to one n-fold axis.
    Dihedral(u32),
    Tetrahedral,
    Octahedral,
    Icosahedral,
    /// The classifier could not resolve a definite group.
    Unknown,
}

impl PointGroup {
    pub fn is_known(&self) -> bool {
        !matches!(self, PointGroup::Unknown)
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointGroup::Cyclic(n) => write!(f, "C{}", n),
            PointGroup::Dihedral(n) => write!(f, "D{}", n),
            PointGroup::Tetrahedral => f.write_str("T"),
            PointGroup::Octahedral => f.write_str("O"),
            PointGroup::Icosahedral => f.write_str("I"),
            PointGroup::Unknown => f.write_str("unknown"),
        }
    }
}

/// Assembly-level verdict of one external scoring method.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyScore {
    pub method: String,
    pub call: Call,
    pub confidence: f64,
}

/// One engaged interface of an assembly, with the algebraic notation of the
/// operator relating its two partners (reporting payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagedInterface {
    pub interface_id: usize,
    pub operator: String,
}

/// A candidate oligomeric assembly: one connected subgraph of the contact
/// graph, with its stoichiometry, inferred point group and attached scores.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub id: usize,
    pub stoichiometry: Stoichiometry,
    pub point_group: PointGroup,
    /// Total chain count, i.e. the total size of the stoichiometry.
    pub mm_size: u32,
    /// Compact per-entity notation, e.g. "A2B".
    pub stoichiometry_string: String,
    /// Compact per-chain notation.
    pub composition_string: String,
    /// Chain copies of the representative connected component, e.g. "A_0,B_2".
    pub chain_ids: String,
    pub engaged_clusters: Vec<usize>,
    pub engaged_interfaces: Vec<EngagedInterface>,
    pub scores: Vec<AssemblyScore>,
}

impl Assembly {
    pub fn score_for(&self, method: &str) -> Option<&AssemblyScore> {
        self.scores.iter().find(|s| s.method == method)
    }

    /// Highest confidence among methods that called this assembly bio.
    pub fn best_bio_confidence(&self) -> Option<f64> {
        self.scores
            .iter()
            .filter(|s| s.call == Call::Bio)
            .map(|s| s.confidence)
            .fold(None, |acc, c| Some(acc.map_or(c, |a: f64| a.max(c))))
    }

    /// Highest confidence over all methods regardless of call.
    pub fn max_confidence(&self) -> f64 {
        self.scores.iter().map(|s| s.confidence).fold(0.0, f64::max)
    }
}

/// All valid assemblies found for one structure, plus the index of the
/// preferred biological assembly if any method called one bio.
#[derive(Debug, Clone, Default)]
pub struct AssemblyReport {
    pub assemblies: Vec<Assembly>,
    pub preferred: Option<usize>,
}

impl AssemblyReport {
    pub fn preferred_assembly(&self) -> Option<&Assembly> {
        self.preferred.map(|i| &self.assemblies[i])
    }
}
