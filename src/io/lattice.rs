//! TOML lattice-description reader.
//!
//! The format mirrors the engine input one to one:
//!
//! ```toml
//! [structure]
//! name = "1stp"
//!
//! [[structure.entities]]
//! id = 1
//! name = "streptavidin"
//!
//! [[structure.chains]]
//! id = "A"
//! entity = 1
//!
//! [[operators]]
//! id = 0
//! algebraic = "x,y,z"
//!
//! [[interfaces]]
//! id = 1
//! cluster = 1
//! area = 742.5
//! left = { chain = "A", op = 0 }
//! right = { chain = "A", op = 1 }
//!
//! [[calls]]
//! interface = 1
//! method = "evolutionary"
//! call = "bio"
//! confidence = 0.82
//! ```

use std::path::Path;

use serde::Deserialize;

use super::error::Error;
use crate::model::interface::{Call, Interface, InterfaceCall, Placement};
use crate::model::structure::{ChainInfo, Entity, SpaceOp, Structure};

/// The complete input of one [`detect`](crate::detect) run.
#[derive(Debug, Clone)]
pub struct LatticeDescription {
    pub structure: Structure,
    pub operators: Vec<SpaceOp>,
    pub interfaces: Vec<Interface>,
    pub calls: Vec<InterfaceCall>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LatticeFile {
    structure: StructureSection,
    #[serde(default)]
    operators: Vec<OperatorSection>,
    #[serde(default)]
    interfaces: Vec<InterfaceSection>,
    #[serde(default)]
    calls: Vec<CallSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StructureSection {
    #[serde(default)]
    name: String,
    entities: Vec<EntitySection>,
    chains: Vec<ChainSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntitySection {
    id: i32,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChainSection {
    id: String,
    entity: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OperatorSection {
    id: usize,
    algebraic: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InterfaceSection {
    id: usize,
    cluster: usize,
    area: f64,
    #[serde(default)]
    infinite: bool,
    left: PlacementSection,
    right: PlacementSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlacementSection {
    chain: String,
    op: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CallSection {
    interface: usize,
    method: String,
    call: CallKind,
    #[serde(default = "default_confidence")]
    confidence: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CallKind {
    Bio,
    Xtal,
    Nopred,
}

fn default_confidence() -> f64 {
    1.0
}

impl From<CallKind> for Call {
    fn from(kind: CallKind) -> Self {
        match kind {
            CallKind::Bio => Call::Bio,
            CallKind::Xtal => Call::Crystal,
            CallKind::Nopred => Call::NoPrediction,
        }
    }
}

/// Parse a lattice description from TOML text.
pub fn read_lattice(input: &str) -> Result<LatticeDescription, Error> {
    let file: LatticeFile = toml::from_str(input)?;

    let mut structure = Structure::new(file.structure.name);
    for entity in file.structure.entities {
        structure.entities.push(Entity::new(entity.id, entity.name));
    }
    for chain in file.structure.chains {
        structure.chains.push(ChainInfo::new(chain.id, chain.entity));
    }

    let operators: Vec<SpaceOp> = file
        .operators
        .iter()
        .map(|op| SpaceOp::new(op.id, op.algebraic.clone()))
        .collect();

    let mut interfaces = Vec::with_capacity(file.interfaces.len());
    for section in &file.interfaces {
        if interfaces.iter().any(|i: &Interface| i.id == section.id) {
            return Err(Error::validation(format!(
                "duplicate interface id {}",
                section.id
            )));
        }
        if section.area < 0.0 {
            return Err(Error::validation(format!(
                "interface {} has negative area",
                section.id
            )));
        }
        interfaces.push(Interface {
            id: section.id,
            cluster_id: section.cluster,
            area: section.area,
            infinite: section.infinite,
            left: Placement::new(section.left.chain.clone(), section.left.op),
            right: Placement::new(section.right.chain.clone(), section.right.op),
        });
    }

    let mut calls = Vec::with_capacity(file.calls.len());
    for section in file.calls {
        if !interfaces.iter().any(|i| i.id == section.interface) {
            return Err(Error::validation(format!(
                "call references unknown interface {}",
                section.interface
            )));
        }
        if !(0.0..=1.0).contains(&section.confidence) {
            return Err(Error::validation(format!(
                "confidence {} for interface {} is outside [0, 1]",
                section.confidence, section.interface
            )));
        }
        calls.push(InterfaceCall::new(
            section.interface,
            section.method,
            section.call.into(),
            section.confidence,
        ));
    }

    Ok(LatticeDescription {
        structure,
        operators,
        interfaces,
        calls,
    })
}

/// Read and parse a lattice description file.
pub fn read_lattice_file(path: impl AsRef<Path>) -> Result<LatticeDescription, Error> {
    let text = std::fs::read_to_string(path)?;
    read_lattice(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMER: &str = r#"
[structure]
name = "1het"

[[structure.entities]]
id = 1
name = "alpha"

[[structure.entities]]
id = 2
name = "beta"

[[structure.chains]]
id = "A"
entity = 1

[[structure.chains]]
id = "B"
entity = 2

[[operators]]
id = 0
algebraic = "x,y,z"

[[interfaces]]
id = 1
cluster = 1
area = 850.0
left = { chain = "A", op = 0 }
right = { chain = "B", op = 0 }

[[calls]]
interface = 1
method = "evolutionary"
call = "bio"
confidence = 0.85
"#;

    #[test]
    fn parses_a_complete_description() {
        let lattice = read_lattice(DIMER).unwrap();
        assert_eq!(lattice.structure.name, "1het");
        assert_eq!(lattice.structure.entity_count(), 2);
        assert_eq!(lattice.operators.len(), 1);
        assert_eq!(lattice.interfaces.len(), 1);
        assert_eq!(lattice.interfaces[0].left.chain_id, "A");
        assert!(!lattice.interfaces[0].infinite);
        assert_eq!(lattice.calls.len(), 1);
        assert_eq!(lattice.calls[0].call, Call::Bio);
        assert!((lattice.calls[0].confidence - 0.85).abs() < 1e-12);
    }

    #[test]
    fn confidence_defaults_to_one() {
        let text = DIMER.replace("confidence = 0.85\n", "");
        let lattice = read_lattice(&text).unwrap();
        assert_eq!(lattice.calls[0].confidence, 1.0);
    }

    #[test]
    fn rejects_duplicate_interface_ids() {
        let text = format!(
            "{}\n[[interfaces]]\nid = 1\ncluster = 2\narea = 100.0\nleft = {{ chain = \"A\", op = 0 }}\nright = {{ chain = \"B\", op = 0 }}\n",
            DIMER
        );
        let err = read_lattice(&text).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn rejects_calls_for_unknown_interfaces() {
        let text = DIMER.replace("interface = 1", "interface = 9");
        let err = read_lattice(&text).unwrap_err();
        assert!(err.to_string().contains("unknown interface 9"));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let text = DIMER.replace("confidence = 0.85", "confidence = 1.5");
        let err = read_lattice(&text).unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = read_lattice("not [[[ valid toml").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn unknown_call_kinds_fail_to_parse() {
        let text = DIMER.replace("call = \"bio\"", "call = \"maybe\"");
        assert!(matches!(read_lattice(&text), Err(Error::Parse(_))));
    }
}
