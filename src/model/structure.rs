#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: i32,
    pub name: String,
}

impl Entity {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: String,
    pub entity_id: i32,
}

impl ChainInfo {
    pub fn new(id: impl Into<String>, entity_id: i32) -> Self {
        Self {
            id: id.into(),
            entity_id,
        }
    }
}

/// The asymmetric-unit structure as seen by the engine: ordered entities and
/// ordered chains. Parsing of structure files happens upstream; this type is
/// the boundary.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    pub name: String,
    pub entities: Vec<Entity>,
    pub chains: Vec<ChainInfo>,
}

impl Structure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
            chains: Vec::new(),
        }
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// First chain belonging to the given entity, in declared chain order.
    pub fn representative_chain(&self, entity_id: i32) -> Option<&str> {
        self.chains
            .iter()
            .find(|c| c.entity_id == entity_id)
            .map(|c| c.id.as_str())
    }
}

/// A rigid-body symmetry operator. Only the stable id takes part in vertex
/// identity; the algebraic notation is carried through for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceOp {
    pub id: usize,
    pub algebraic: String,
}

impl SpaceOp {
    pub fn new(id: usize, algebraic: impl Into<String>) -> Self {
        Self {
            id,
            algebraic: algebraic.into(),
        }
    }

    /// Operator id 0 is the identity by convention.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_structure() -> Structure {
        let mut s = Structure::new("1abc");
        s.entities.push(Entity::new(1, "alpha"));
        s.entities.push(Entity::new(2, "beta"));
        s.chains.push(ChainInfo::new("A", 1));
        s.chains.push(ChainInfo::new("B", 2));
        s.chains.push(ChainInfo::new("C", 1));
        s
    }

    #[test]
    fn counts_entities_and_chains() {
        let s = make_structure();
        assert_eq!(s.entity_count(), 2);
        assert_eq!(s.chain_count(), 3);
    }

    #[test]
    fn representative_is_first_declared_chain() {
        let s = make_structure();
        assert_eq!(s.representative_chain(1), Some("A"));
        assert_eq!(s.representative_chain(2), Some("B"));
        assert_eq!(s.representative_chain(9), None);
    }

    #[test]
    fn identity_operator_has_id_zero() {
        assert!(SpaceOp::new(0, "x,y,z").is_identity());
        assert!(!SpaceOp::new(3, "-y,x,z+1/2").is_identity());
    }
}
