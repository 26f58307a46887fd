//! Candidate assembly enumeration.
//!
//! Assemblies are identified by the set of interface clusters they engage:
//! the search walks the power set of clusters in ascending bitmask order,
//! keeps the structurally valid sets, and emits one candidate per distinct
//! connected-component stoichiometry. Validity means no engaged
//! lattice-propagating cluster, and component stoichiometries that are
//! pairwise equal or orthogonal (orthogonal components describe
//! co-crystallized, independent assemblies).

use std::collections::BTreeSet;

use log::{debug, warn};

use super::config::EngineConfig;
use super::error::Error;
use crate::graph::ContactGraph;
use crate::model::index::StructureIndex;
use crate::model::stoichiometry::{gcd, Stoichiometry};

// beyond this the mask loop itself becomes the bottleneck, whatever the
// configured cap says
const HARD_CLUSTER_CAP: usize = 20;

/// One interface cluster of the contact graph.
#[derive(Debug, Clone)]
pub(crate) struct ClusterInfo {
    pub id: usize,
    /// Total buried area over member interfaces.
    pub area: f64,
    pub infinite: bool,
    /// Member interface ids.
    pub members: Vec<usize>,
}

pub(crate) fn collect_clusters(graph: &ContactGraph) -> Vec<ClusterInfo> {
    let mut clusters = Vec::new();
    for id in graph.cluster_ids() {
        let mut area = 0.0;
        let mut infinite = false;
        let mut members = Vec::new();
        for edge in graph.edges().iter().filter(|e| e.cluster_id == id) {
            area += edge.area;
            infinite |= edge.infinite;
            members.push(edge.interface_id);
        }
        clusters.push(ClusterInfo {
            id,
            area,
            infinite,
            members,
        });
    }
    clusters
}

/// Bound the power-set search: keep the `max` largest clusters by buried
/// area (ties by id) and warn about the dropped ones.
pub(crate) fn cap_clusters(mut clusters: Vec<ClusterInfo>, max: usize) -> Vec<ClusterInfo> {
    let max = max.min(HARD_CLUSTER_CAP);
    if clusters.len() <= max {
        return clusters;
    }
    warn!(
        "{} interface clusters exceed the enumeration cap of {}; keeping the largest by buried area",
        clusters.len(),
        max
    );
    clusters.sort_by(|a, b| {
        b.area
            .partial_cmp(&a.area)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    clusters.truncate(max);
    clusters.sort_by_key(|c| c.id);
    clusters
}

/// One valid candidate: an engaged cluster set together with the first
/// relevant connected component for one of its stoichiometries.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub engaged: BTreeSet<usize>,
    pub component: Vec<usize>,
    pub stoichiometry: Stoichiometry,
}

pub(crate) fn enumerate_candidates(
    graph: &ContactGraph,
    clusters: &[ClusterInfo],
    index: &StructureIndex,
    config: &EngineConfig,
) -> Result<Vec<Candidate>, Error> {
    let mut candidates = Vec::new();

    for mask in 0u64..(1u64 << clusters.len()) {
        let selected: Vec<&ClusterInfo> = clusters
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect();

        if config.forbid_infinite && selected.iter().any(|c| c.infinite) {
            continue;
        }

        let engaged: BTreeSet<usize> = selected.iter().map(|c| c.id).collect();
        let components = graph.connected_components(&engaged);
        let stos: Vec<Stoichiometry> = components
            .iter()
            .map(|c| graph.stoichiometry_of(c, index))
            .collect();

        if !components_consistent(&stos)? {
            continue;
        }
        if stos
            .iter()
            .any(|s| s.present_entity_count() > 1 && !s.is_even())
        {
            continue;
        }

        let mut seen: Vec<&Stoichiometry> = Vec::new();
        for (component, sto) in components.iter().zip(&stos) {
            if seen.contains(&sto) {
                continue;
            }
            seen.push(sto);

            let nonzero: Vec<u32> = sto.counts().iter().copied().filter(|&c| c > 0).collect();
            if let Some(g) = gcd(&nonzero) {
                if g > 1 && sto.present_entity_count() > 1 {
                    debug!(
                        "stoichiometry {} reduces by {}; may contain identical sub-assemblies",
                        sto, g
                    );
                }
            }

            candidates.push(Candidate {
                engaged: engaged.clone(),
                component: component.clone(),
                stoichiometry: sto.clone(),
            });
        }
    }

    Ok(candidates)
}

/// Components may only repeat a stoichiometry exactly or avoid its
/// entities entirely; anything in between means the engaged set assigns
/// contradictory counts to an entity.
fn components_consistent(stos: &[Stoichiometry]) -> Result<bool, Error> {
    for i in 0..stos.len() {
        for j in (i + 1)..stos.len() {
            if stos[i] != stos[j] && stos[i].is_overlapping(&stos[j])? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::interface::{Interface, Placement};
    use crate::model::structure::{ChainInfo, Entity, SpaceOp, Structure};

    fn make_homomer(n_ops: usize) -> (StructureIndex, Vec<SpaceOp>) {
        let mut s = Structure::new("homo");
        s.entities.push(Entity::new(1, "alpha"));
        s.chains.push(ChainInfo::new("A", 1));
        let ops = (0..n_ops)
            .map(|i| SpaceOp::new(i, format!("op{}", i)))
            .collect();
        (StructureIndex::new(&s).unwrap(), ops)
    }

    fn iface(id: usize, cluster: usize, left: (&str, usize), right: (&str, usize)) -> Interface {
        Interface {
            id,
            cluster_id: cluster,
            area: 400.0,
            infinite: false,
            left: Placement::new(left.0, left.1),
            right: Placement::new(right.0, right.1),
        }
    }

    fn ring_graph(n: usize) -> (ContactGraph, StructureIndex) {
        let (index, ops) = make_homomer(n);
        let interfaces: Vec<Interface> = (0..n)
            .map(|i| iface(i + 1, 1, ("A", i), ("A", (i + 1) % n)))
            .collect();
        let graph = ContactGraph::build(&index, &ops, &interfaces, 35.0).unwrap();
        (graph, index)
    }

    #[test]
    fn collects_clusters_with_totals() {
        let (graph, _) = ring_graph(4);
        let clusters = collect_clusters(&graph);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].id, 1);
        assert_eq!(clusters[0].members.len(), 4);
        assert!((clusters[0].area - 1600.0).abs() < 1e-9);
        assert!(!clusters[0].infinite);
    }

    #[test]
    fn cap_keeps_largest_clusters_by_area() {
        let mut clusters: Vec<ClusterInfo> = (1..=5)
            .map(|id| ClusterInfo {
                id,
                area: (id as f64) * 100.0,
                infinite: false,
                members: vec![id],
            })
            .collect();
        clusters[0].area = 900.0; // cluster 1 is biggest

        let capped = cap_clusters(clusters, 3);
        let ids: Vec<usize> = capped.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4, 5]);
    }

    #[test]
    fn ring_yields_monomer_and_full_ring() {
        let (graph, index) = ring_graph(4);
        let clusters = collect_clusters(&graph);
        let candidates =
            enumerate_candidates(&graph, &clusters, &index, &EngineConfig::default()).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].stoichiometry.total_size(), 1);
        assert!(candidates[0].engaged.is_empty());
        assert_eq!(candidates[1].stoichiometry.total_size(), 4);
        assert_eq!(candidates[1].component.len(), 4);
    }

    #[test]
    fn infinite_clusters_are_never_engaged() {
        let (index, ops) = make_homomer(2);
        let mut inf = iface(1, 1, ("A", 0), ("A", 1));
        inf.infinite = true;
        let graph = ContactGraph::build(&index, &ops, &[inf], 35.0).unwrap();
        let clusters = collect_clusters(&graph);

        let candidates =
            enumerate_candidates(&graph, &clusters, &index, &EngineConfig::default()).unwrap();
        assert!(candidates.iter().all(|c| c.engaged.is_empty()));

        let permissive = EngineConfig {
            forbid_infinite: false,
            ..Default::default()
        };
        let candidates = enumerate_candidates(&graph, &clusters, &index, &permissive).unwrap();
        assert!(candidates.iter().any(|c| !c.engaged.is_empty()));
    }

    #[test]
    fn contradictory_component_counts_invalidate_the_set() {
        // chains B and C share entity beta; engaging only the A-B contact
        // leaves components A1B1 and B1, which overlap in beta without
        // being equal
        let mut s = Structure::new("het");
        s.entities.push(Entity::new(1, "alpha"));
        s.entities.push(Entity::new(2, "beta"));
        s.chains.push(ChainInfo::new("A", 1));
        s.chains.push(ChainInfo::new("B", 2));
        s.chains.push(ChainInfo::new("C", 2));
        let index = StructureIndex::new(&s).unwrap();
        let ops = vec![SpaceOp::new(0, "x,y,z")];

        let interfaces = vec![
            iface(1, 1, ("A", 0), ("B", 0)),
            iface(2, 2, ("A", 0), ("C", 0)),
        ];
        let graph = ContactGraph::build(&index, &ops, &interfaces, 35.0).unwrap();
        let clusters = collect_clusters(&graph);
        let candidates =
            enumerate_candidates(&graph, &clusters, &index, &EngineConfig::default()).unwrap();

        // engaging cluster 1 leaves components A1B1 and B1 (chain C):
        // overlapping but unequal -> dropped
        assert!(!candidates
            .iter()
            .any(|c| c.engaged.len() == 1 && c.engaged.contains(&1)));
    }

    #[test]
    fn uneven_heteromers_are_rejected() {
        // A2B: two A copies flanking one B
        let mut s = Structure::new("het");
        s.entities.push(Entity::new(1, "alpha"));
        s.entities.push(Entity::new(2, "beta"));
        s.chains.push(ChainInfo::new("A", 1));
        s.chains.push(ChainInfo::new("B", 2));
        let index = StructureIndex::new(&s).unwrap();
        let ops = vec![SpaceOp::new(0, "x,y,z"), SpaceOp::new(1, "-x,-y,z")];

        let interfaces = vec![
            iface(1, 1, ("A", 0), ("B", 0)),
            iface(2, 1, ("A", 1), ("B", 0)),
        ];
        let graph = ContactGraph::build(&index, &ops, &interfaces, 35.0).unwrap();
        let clusters = collect_clusters(&graph);
        let candidates =
            enumerate_candidates(&graph, &clusters, &index, &EngineConfig::default()).unwrap();

        assert!(candidates.iter().all(|c| c.engaged.is_empty()));
    }

    #[test]
    fn masks_enumerate_in_deterministic_order() {
        let (graph, index) = ring_graph(3);
        let clusters = collect_clusters(&graph);
        let a = enumerate_candidates(&graph, &clusters, &index, &EngineConfig::default()).unwrap();
        let b = enumerate_candidates(&graph, &clusters, &index, &EngineConfig::default()).unwrap();
        let key = |c: &Candidate| (c.engaged.clone(), c.component.clone());
        assert_eq!(a.iter().map(key).collect::<Vec<_>>(), b.iter().map(key).collect::<Vec<_>>());
    }
}
