//! Dense index mappings for one structure.
//!
//! Entity ids in deposited structures are not guaranteed to be 1-to-n, and
//! chain ids are strings. All per-entity and per-chain count vectors in the
//! engine are addressed by dense indices instead, established here once per
//! structure and immutable afterwards. The mapping is a bijection over
//! `[0, entity_count)` and `[0, chain_count)`.

use std::collections::HashMap;

use thiserror::Error;

use super::structure::Structure;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStructureError {
    #[error("structure declares no entities")]
    NoEntities,

    #[error("duplicate entity id {0}")]
    DuplicateEntity(i32),

    #[error("duplicate chain id '{0}'")]
    DuplicateChain(String),

    #[error("chain '{chain}' references unknown entity id {entity}")]
    UnknownEntity { chain: String, entity: i32 },

    #[error("entity {0} has no chains")]
    EmptyEntity(i32),
}

/// Bidirectional entity-id ↔ index and chain-id ↔ index mapping, plus the
/// chain → entity projection and the representative chain of each entity
/// (used for formatted stoichiometry strings).
#[derive(Debug, Clone)]
pub struct StructureIndex {
    entity_ids: Vec<i32>,
    entity_idx: HashMap<i32, usize>,
    chain_ids: Vec<String>,
    chain_idx: HashMap<String, usize>,
    chain_entities: Vec<usize>,
    representatives: Vec<usize>,
}

impl StructureIndex {
    pub fn new(structure: &Structure) -> Result<Self, InvalidStructureError> {
        if structure.entities.is_empty() {
            return Err(InvalidStructureError::NoEntities);
        }

        let mut entity_ids = Vec::with_capacity(structure.entity_count());
        let mut entity_idx = HashMap::with_capacity(structure.entity_count());
        for (i, entity) in structure.entities.iter().enumerate() {
            if entity_idx.insert(entity.id, i).is_some() {
                return Err(InvalidStructureError::DuplicateEntity(entity.id));
            }
            entity_ids.push(entity.id);
        }

        let mut chain_ids = Vec::with_capacity(structure.chain_count());
        let mut chain_idx = HashMap::with_capacity(structure.chain_count());
        let mut chain_entities = Vec::with_capacity(structure.chain_count());
        for (i, chain) in structure.chains.iter().enumerate() {
            if chain_idx.insert(chain.id.clone(), i).is_some() {
                return Err(InvalidStructureError::DuplicateChain(chain.id.clone()));
            }
            let eidx = *entity_idx.get(&chain.entity_id).ok_or_else(|| {
                InvalidStructureError::UnknownEntity {
                    chain: chain.id.clone(),
                    entity: chain.entity_id,
                }
            })?;
            chain_ids.push(chain.id.clone());
            chain_entities.push(eidx);
        }

        let mut representatives = Vec::with_capacity(entity_ids.len());
        for (eidx, &id) in entity_ids.iter().enumerate() {
            let rep = chain_entities
                .iter()
                .position(|&e| e == eidx)
                .ok_or(InvalidStructureError::EmptyEntity(id))?;
            representatives.push(rep);
        }

        Ok(Self {
            entity_ids,
            entity_idx,
            chain_ids,
            chain_idx,
            chain_entities,
            representatives,
        })
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entity_ids.len()
    }

    #[inline]
    pub fn chain_count(&self) -> usize {
        self.chain_ids.len()
    }

    pub fn entity_index(&self, entity_id: i32) -> Option<usize> {
        self.entity_idx.get(&entity_id).copied()
    }

    pub fn entity_id(&self, index: usize) -> i32 {
        self.entity_ids[index]
    }

    pub fn chain_index(&self, chain_id: &str) -> Option<usize> {
        self.chain_idx.get(chain_id).copied()
    }

    pub fn chain_id(&self, index: usize) -> &str {
        &self.chain_ids[index]
    }

    /// Entity index owning the chain at the given chain index.
    pub fn entity_of_chain(&self, chain_index: usize) -> usize {
        self.chain_entities[chain_index]
    }

    /// Representative chain id of the entity at the given entity index:
    /// its first declared chain.
    pub fn representative(&self, entity_index: usize) -> &str {
        &self.chain_ids[self.representatives[entity_index]]
    }

    /// Chain index of the representative chain of an entity.
    pub fn representative_chain_index(&self, entity_index: usize) -> usize {
        self.representatives[entity_index]
    }
}
