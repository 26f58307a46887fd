//! Core data structures representing crystal structures and assemblies.
//!
//! This module provides the foundational types that flow through
//! `quat-forge`:
//!
//! - [`structure`] – The asymmetric-unit structure accessor and symmetry operators.
//! - [`index`] – Immutable dense index mappings for entities and chains.
//! - [`interface`] – Pairwise contacts, clusters, and external classification calls.
//! - [`stoichiometry`] – Per-assembly entity/chain count vectors.
//! - [`assembly`] – Assembly candidates, point groups, and the final report.
//!
//! The data model intentionally separates the raw crystal description
//! ([`Structure`]) from the derived assemblies ([`Assembly`]), allowing the
//! [`crate::detect`] pipeline to transform one into the other.
//!
//! [`Structure`]: structure::Structure
//! [`Assembly`]: assembly::Assembly

pub mod assembly;
pub mod index;
pub mod interface;
pub mod stoichiometry;
pub mod structure;
