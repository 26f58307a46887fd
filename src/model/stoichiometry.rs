//! Per-assembly entity and chain count vectors.
//!
//! A [`Stoichiometry`] records how many copies of each entity (and of each
//! chain) an assembly candidate contains. Both vectors are fixed-length for
//! the lifetime of one structure, addressed by the dense indices of
//! [`StructureIndex`]. Equality and hashing consider the per-entity counts
//! only; the per-chain composition is a reporting refinement.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use super::index::StructureIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoichiometryError {
    /// The two vectors were built against different entity universes.
    #[error("stoichiometry vectors have different lengths: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("stoichiometry vectors have size 0")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct Stoichiometry {
    sto: Vec<u32>,
    comp: Vec<u32>,
}

impl Stoichiometry {
    /// An all-zero stoichiometry sized for the given structure.
    pub fn new(index: &StructureIndex) -> Self {
        Self {
            sto: vec![0; index.entity_count()],
            comp: vec![0; index.chain_count()],
        }
    }

    /// Record one chain copy. Indices come precomputed from the
    /// [`StructureIndex`], so no bounds failure is possible for chains of
    /// the structure this stoichiometry was built for.
    pub fn add(&mut self, chain_index: usize, entity_index: usize) {
        self.sto[entity_index] += 1;
        self.comp[chain_index] += 1;
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.sto.len()
    }

    /// Number of entities with a nonzero count.
    pub fn present_entity_count(&self) -> usize {
        self.sto.iter().filter(|&&c| c > 0).count()
    }

    /// Per-entity counts, indexed by entity index.
    pub fn counts(&self) -> &[u32] {
        &self.sto
    }

    /// Per-chain counts, indexed by chain index.
    pub fn composition(&self) -> &[u32] {
        &self.comp
    }

    pub fn count_for_index(&self, entity_index: usize) -> u32 {
        self.sto[entity_index]
    }

    /// Total number of chain copies in the assembly.
    pub fn total_size(&self) -> u32 {
        self.sto.iter().sum()
    }

    /// The first nonzero count, or `None` if every count is zero. The
    /// `None` case is load-bearing for the symmetry classifier: it means
    /// "unknown", never a valid multiplicity.
    pub fn first_non_zero(&self) -> Option<u32> {
        self.sto.iter().copied().find(|&c| c > 0)
    }

    /// A stoichiometry is even iff all present entities have identical
    /// counts. All-zero vectors are not even.
    pub fn is_even(&self) -> bool {
        match self.first_non_zero() {
            None => false,
            Some(n) => self.sto.iter().all(|&c| c == 0 || c == n),
        }
    }

    /// True iff every entity of the structure appears in this assembly.
    pub fn is_fully_covering(&self) -> bool {
        self.sto.iter().all(|&c| c > 0)
    }

    /// Two stoichiometries are orthogonal iff they share no entity, i.e.
    /// the dot product of their count vectors is zero.
    pub fn is_orthogonal(&self, other: &Stoichiometry) -> Result<bool, StoichiometryError> {
        if self.sto.len() != other.sto.len() {
            return Err(StoichiometryError::DimensionMismatch {
                left: self.sto.len(),
                right: other.sto.len(),
            });
        }
        if self.sto.is_empty() {
            return Err(StoichiometryError::Empty);
        }
        let dot: u64 = self
            .sto
            .iter()
            .zip(&other.sto)
            .map(|(&a, &b)| a as u64 * b as u64)
            .sum();
        Ok(dot == 0)
    }

    /// Exact complement of [`is_orthogonal`](Self::is_orthogonal).
    pub fn is_overlapping(&self, other: &Stoichiometry) -> Result<bool, StoichiometryError> {
        Ok(!self.is_orthogonal(other)?)
    }

    /// Counts divided by their greatest common divisor, e.g. 4:2 reduces
    /// to 2:1. All-zero stoichiometries reduce to themselves.
    pub fn reduced(&self) -> Vec<u32> {
        let nonzero: Vec<u32> = self.sto.iter().copied().filter(|&c| c > 0).collect();
        match gcd(&nonzero) {
            Some(g) if g > 1 => self.sto.iter().map(|&c| c / g).collect(),
            _ => self.sto.clone(),
        }
    }

    /// Compact notation over representative chain ids in entity-index
    /// order: two copies of entity "A" and one of "B" render as "A2B"
    /// (counts of 1 are omitted).
    pub fn to_formatted_string(&self, index: &StructureIndex) -> String {
        let mut out = String::new();
        for (i, &count) in self.sto.iter().enumerate() {
            if count > 0 {
                out.push_str(index.representative(i));
                if count > 1 {
                    out.push_str(&count.to_string());
                }
            }
        }
        out
    }

    /// Same notation over chain ids and per-chain counts.
    pub fn to_formatted_composition_string(&self, index: &StructureIndex) -> String {
        let mut out = String::new();
        for (i, &count) in self.comp.iter().enumerate() {
            if count > 0 {
                out.push_str(index.chain_id(i));
                if count > 1 {
                    out.push_str(&count.to_string());
                }
            }
        }
        out
    }
}

impl fmt::Display for Stoichiometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.sto)
    }
}

impl PartialEq for Stoichiometry {
    fn eq(&self, other: &Self) -> bool {
        self.sto == other.sto
    }
}

impl Eq for Stoichiometry {}

impl Hash for Stoichiometry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sto.hash(state);
    }
}

/// Greatest common divisor of a vector of counts via the iterative
/// Euclidean algorithm. Returns `None` for an empty slice.
pub fn gcd(values: &[u32]) -> Option<u32> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |acc, &v| gcd2(acc, v)))
}

fn gcd2(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
