//! Error types for assembly detection.
//!
//! Every variant here is a structural or integration failure that aborts
//! processing of the current structure. Symmetry ambiguities are not
//! errors: the classifier reports [`PointGroup::Unknown`] and warns
//! instead, so downstream consumers see the anomaly rather than losing
//! the candidate silently.
//!
//! [`PointGroup::Unknown`]: crate::model::assembly::PointGroup::Unknown

use thiserror::Error;

use crate::graph::contact::InconsistentGraphError;
use crate::model::index::InvalidStructureError;
use crate::model::stoichiometry::StoichiometryError;

/// Errors that can occur while detecting assemblies for one structure.
#[derive(Debug, Error)]
pub enum Error {
    /// The structure accessor is internally inconsistent (duplicate ids,
    /// chains pointing at unknown entities).
    #[error("invalid structure: {0}")]
    InvalidStructure(#[from] InvalidStructureError),

    /// An interface references a chain or operator outside the declared
    /// universe.
    #[error(transparent)]
    InconsistentGraph(#[from] InconsistentGraphError),

    /// Stoichiometries from different entity universes were combined;
    /// always a programming error upstream.
    #[error("stoichiometry comparison failed: {0}")]
    Stoichiometry(#[from] StoichiometryError),
}
