//! Reading lattice descriptions.
//!
//! The engine consumes structures, operators, interfaces and calls as
//! in-memory values; this module provides the one file surface around
//! that, a TOML description of the whole engine input. Structure-file
//! parsing (mmCIF/PDB) and interface calculation live upstream and are
//! deliberately not re-implemented here.

pub mod error;
mod lattice;

pub use error::Error;
pub use lattice::{read_lattice, read_lattice_file, LatticeDescription};
