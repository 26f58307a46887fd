//! Pairwise crystal contacts and their externally supplied classifications.

use std::fmt;

/// One placed chain copy referenced by an interface endpoint: a chain of the
/// asymmetric unit under a symmetry operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub chain_id: String,
    pub op_id: usize,
}

impl Placement {
    pub fn new(chain_id: impl Into<String>, op_id: usize) -> Self {
        Self {
            chain_id: chain_id.into(),
            op_id,
        }
    }
}

/// A pairwise contact between two placed chain copies.
///
/// Interfaces related by the structure's own symmetry share a cluster id;
/// the cluster is the unit of engagement during assembly enumeration. An
/// interface is `infinite` when it relates a chain to a pure-translation
/// copy of itself: engaging it propagates the assembly through the whole
/// lattice, so no finite assembly can contain it.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub id: usize,
    pub cluster_id: usize,
    /// Buried surface area in Å², reporting payload only.
    pub area: f64,
    pub infinite: bool,
    pub left: Placement,
    pub right: Placement,
}

/// Verdict of an external per-interface predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    /// Biologically engaged.
    Bio,
    /// Crystal-packing artifact.
    Crystal,
    /// The method could not decide.
    NoPrediction,
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Call::Bio => "bio",
            Call::Crystal => "xtal",
            Call::NoPrediction => "nopred",
        };
        f.write_str(s)
    }
}

/// One scoring method's verdict on one interface, consumed as an opaque
/// input; the predictors themselves (evolutionary, geometric, ...) live
/// outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceCall {
    pub interface_id: usize,
    pub method: String,
    pub call: Call,
    /// Confidence in the verdict, in [0, 1].
    pub confidence: f64,
}

impl InterfaceCall {
    pub fn new(interface_id: usize, method: impl Into<String>, call: Call, confidence: f64) -> Self {
        Self {
            interface_id,
            method: method.into(),
            call,
            confidence,
        }
    }
}
