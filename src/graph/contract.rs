//! Entity-level quotient of a component graph.
//!
//! Heteromeric symmetry is about the shape formed by entities, not by
//! individual chain copies. Contraction merges every vertex of the same
//! entity into one node and projects each edge onto its endpoints'
//! entities, keeping duplicates: the per-cluster edge multiplicities drive
//! the cycle-based classification. Contacts between copies of the same
//! entity become self-loops.

use std::collections::HashMap;

use log::warn;

use super::InterfaceGraph;
use crate::model::stoichiometry::Stoichiometry;

/// Contract the component graph for one stoichiometry; `entities` gives
/// the entity index of each graph vertex.
///
/// The caller is expected to have excluded uneven heteromers during
/// candidate generation. The contraction of an uneven graph is still
/// well-defined but its symmetry answer is unreliable, so that case is
/// only warned about.
pub fn contract(graph: &InterfaceGraph, entities: &[usize], sto: &Stoichiometry) -> InterfaceGraph {
    debug_assert_eq!(graph.vertex_count(), entities.len());

    if sto.present_entity_count() > 1 && !sto.is_even() {
        warn!(
            "contracting a graph with uneven stoichiometry {}; symmetry will be unreliable",
            sto
        );
    }

    let mut distinct: Vec<usize> = entities.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    let quotient: HashMap<usize, usize> = distinct
        .iter()
        .enumerate()
        .map(|(i, &e)| (e, i))
        .collect();

    let mut contracted = InterfaceGraph::new(distinct.len());
    for edge in graph.edges() {
        let a = quotient[&entities[edge.a]];
        let b = quotient[&entities[edge.b]];
        contracted.add_edge(a, b, edge.cluster_id);
    }
    contracted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::index::StructureIndex;
    use crate::model::structure::{ChainInfo, Entity, Structure};

    fn make_sto(counts: &[u32]) -> Stoichiometry {
        let mut s = Structure::new("t");
        for (i, _) in counts.iter().enumerate() {
            s.entities.push(Entity::new(i as i32 + 1, format!("e{}", i)));
            s.chains
                .push(ChainInfo::new(format!("{}", (b'A' + i as u8) as char), i as i32 + 1));
        }
        let index = StructureIndex::new(&s).unwrap();
        let mut sto = Stoichiometry::new(&index);
        for (i, &n) in counts.iter().enumerate() {
            for _ in 0..n {
                sto.add(i, i);
            }
        }
        sto
    }

    #[test]
    fn merges_vertices_of_one_entity() {
        // A-B-A-B ring of a 2:2 heteromer
        let mut g = InterfaceGraph::new(4);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 2);
        g.add_edge(2, 3, 1);
        g.add_edge(3, 0, 2);
        let entities = vec![0, 1, 0, 1];

        let c = contract(&g, &entities, &make_sto(&[2, 2]));
        assert_eq!(c.vertex_count(), 2);
        assert_eq!(c.edge_count(), 4);
    }

    #[test]
    fn intra_entity_contacts_become_self_loops() {
        let mut g = InterfaceGraph::new(4);
        g.add_edge(0, 1, 1); // A-B
        g.add_edge(2, 3, 1); // A-B
        g.add_edge(0, 2, 2); // A-A
        let entities = vec![0, 1, 0, 1];

        let c = contract(&g, &entities, &make_sto(&[2, 2]));
        assert_eq!(c.vertex_count(), 2);
        let loops = c.edges().iter().filter(|e| e.a == e.b).count();
        assert_eq!(loops, 1);
    }

    #[test]
    fn uneven_stoichiometry_still_contracts() {
        let mut g = InterfaceGraph::new(3);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        let entities = vec![0, 1, 0];

        let c = contract(&g, &entities, &make_sto(&[2, 1]));
        assert_eq!(c.vertex_count(), 2);
        assert_eq!(c.edge_count(), 2);
    }
}
