//! A pure Rust engine deciding which symmetry-related molecular copies in a
//! protein crystal form biologically real oligomeric assemblies, and
//! classifying the point-group symmetry of each.
//!
//! # Features
//!
//! - **Contact graph** — Chain copies placed by symmetry operators, with
//!   parallel edges for distinct interfaces between the same pair
//! - **Assembly enumeration** — Power-set search over engaged interface
//!   clusters, keeping stoichiometrically consistent candidates only
//! - **Point-group classification** — Cn, Dn and the tetrahedral,
//!   octahedral and icosahedral groups, inferred from interface-type
//!   counts and per-cluster ring closure
//! - **Scoring** — External per-interface bio/crystal calls folded into
//!   assembly-level verdicts, with redundancy elimination and a preferred
//!   biological assembly pick
//!
//! Structure-file parsing and the interface predictors themselves live
//! upstream; this crate consumes their results as plain values.
//!
//! # Quick Start
//!
//! The main entry point is the [`detect`] function, which takes the
//! structure accessor, its operators, interfaces and calls, and produces
//! an [`AssemblyReport`]:
//!
//! ```
//! use quat_forge::{
//!     detect, Call, ChainInfo, Entity, EngineConfig, Interface, InterfaceCall, Placement,
//!     SpaceOp, Structure,
//! };
//!
//! // A heterodimer: two entities, one chain each, one interface
//! let mut structure = Structure::new("1xyz");
//! structure.entities.push(Entity::new(1, "alpha"));
//! structure.entities.push(Entity::new(2, "beta"));
//! structure.chains.push(ChainInfo::new("A", 1));
//! structure.chains.push(ChainInfo::new("B", 2));
//!
//! let operators = vec![SpaceOp::new(0, "x,y,z")];
//! let interfaces = vec![Interface {
//!     id: 1,
//!     cluster_id: 1,
//!     area: 850.0,
//!     infinite: false,
//!     left: Placement::new("A", 0),
//!     right: Placement::new("B", 0),
//! }];
//! let calls = vec![InterfaceCall::new(1, "evolutionary", Call::Bio, 0.85)];
//!
//! let report = detect(&structure, &operators, &interfaces, &calls, &EngineConfig::default())?;
//!
//! let preferred = report.preferred_assembly().unwrap();
//! assert_eq!(preferred.mm_size, 2);
//! assert_eq!(preferred.stoichiometry_string, "AB");
//! assert_eq!(preferred.point_group.to_string(), "C1");
//! # Ok::<(), quat_forge::Error>(())
//! ```
//!
//! # Key Types
//!
//! ## Input
//!
//! - [`Structure`] — Entities and chains of the asymmetric unit
//! - [`SpaceOp`] — Symmetry operator with stable id and algebraic notation
//! - [`Interface`] — Pairwise contact between two placed chain copies
//! - [`InterfaceCall`] — One method's bio/crystal verdict on one interface
//!
//! ## Output
//!
//! - [`AssemblyReport`] — All valid assemblies plus the preferred one
//! - [`Assembly`] — Stoichiometry, point group, engaged interfaces, scores
//! - [`PointGroup`] — Cn, Dn, T, O, I or unknown
//! - [`Stoichiometry`] — Per-entity and per-chain count vectors
//!
//! ## Configuration
//!
//! - [`EngineConfig`] — Area cutoff, cluster cap, infinite-cluster policy

mod engine;
mod model;

pub mod graph;
pub mod io;

pub use model::assembly::{
    Assembly, AssemblyReport, AssemblyScore, EngagedInterface, PointGroup,
};
pub use model::index::{InvalidStructureError, StructureIndex};
pub use model::interface::{Call, Interface, InterfaceCall, Placement};
pub use model::stoichiometry::{gcd, Stoichiometry, StoichiometryError};
pub use model::structure::{ChainInfo, Entity, SpaceOp, Structure};

pub use engine::{classify, detect, EngineConfig, Error};
