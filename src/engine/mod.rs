//! The assembly detection pipeline.
//!
//! [`detect`] is the single entry point: index the structure, build the
//! contact graph, enumerate engaged-cluster candidates, classify each
//! candidate's point group, attach per-method scores, and collapse
//! symmetry-equivalent duplicates into the final report.

mod config;
mod enumerate;
mod error;
mod score;
mod symmetry;

pub use config::EngineConfig;
pub use error::Error;
pub use symmetry::classify;

use std::collections::BTreeSet;

use crate::graph::ContactGraph;
use crate::model::assembly::{Assembly, AssemblyReport, AssemblyScore, EngagedInterface, PointGroup};
use crate::model::index::StructureIndex;
use crate::model::interface::{Call, Interface, InterfaceCall};
use crate::model::stoichiometry::Stoichiometry;
use crate::model::structure::{SpaceOp, Structure};

/// Detect the valid assemblies of one crystal structure and classify
/// their point-group symmetry.
///
/// The computation is CPU-bound, single-threaded and owns all of its
/// state; callers may process independent structures on independent
/// threads freely.
pub fn detect(
    structure: &Structure,
    ops: &[SpaceOp],
    interfaces: &[Interface],
    calls: &[InterfaceCall],
    config: &EngineConfig,
) -> Result<AssemblyReport, Error> {
    let index = StructureIndex::new(structure)?;
    let graph = ContactGraph::build(&index, ops, interfaces, config.min_interface_area)?;

    let clusters =
        enumerate::cap_clusters(enumerate::collect_clusters(&graph), config.max_clusters);
    let verdicts = score::cluster_verdicts(calls, &clusters);
    let candidates = enumerate::enumerate_candidates(&graph, &clusters, &index, config)?;

    let mut assemblies = Vec::new();
    for candidate in &candidates {
        let point_group = symmetry::classify(
            &graph,
            &candidate.engaged,
            &candidate.component,
            &candidate.stoichiometry,
        );
        let scores = score::score_assembly(&candidate.engaged, &clusters, &verdicts);
        assemblies.push(build_assembly(
            assemblies.len(),
            &graph,
            &index,
            candidate,
            point_group,
            scores,
        ));
    }

    // entities without a single retained contact never enter the graph,
    // but they still crystallized: report them as monomers
    let covered: BTreeSet<usize> = graph.vertices().iter().map(|v| v.entity_idx).collect();
    for entity_idx in 0..index.entity_count() {
        if !covered.contains(&entity_idx) {
            assemblies.push(isolated_monomer(
                assemblies.len(),
                entity_idx,
                &index,
                &clusters,
                &verdicts,
            ));
        }
    }

    let assemblies = score::dedup_assemblies(assemblies);
    let preferred = score::select_preferred(&assemblies);
    Ok(AssemblyReport {
        assemblies,
        preferred,
    })
}

fn build_assembly(
    id: usize,
    graph: &ContactGraph,
    index: &StructureIndex,
    candidate: &enumerate::Candidate,
    point_group: PointGroup,
    scores: Vec<AssemblyScore>,
) -> Assembly {
    let in_component: BTreeSet<usize> = candidate.component.iter().copied().collect();
    let engaged_interfaces: Vec<EngagedInterface> = graph
        .edges()
        .iter()
        .filter(|e| {
            candidate.engaged.contains(&e.cluster_id)
                && in_component.contains(&e.source)
                && in_component.contains(&e.target)
        })
        .map(|e| EngagedInterface {
            interface_id: e.interface_id,
            operator: e.operator.clone(),
        })
        .collect();

    Assembly {
        id,
        mm_size: candidate.stoichiometry.total_size(),
        stoichiometry_string: candidate.stoichiometry.to_formatted_string(index),
        composition_string: candidate
            .stoichiometry
            .to_formatted_composition_string(index),
        chain_ids: graph.chain_ids_string(&candidate.component, index),
        stoichiometry: candidate.stoichiometry.clone(),
        point_group,
        engaged_clusters: candidate.engaged.iter().copied().collect(),
        engaged_interfaces,
        scores,
    }
}

fn isolated_monomer(
    id: usize,
    entity_idx: usize,
    index: &StructureIndex,
    clusters: &[enumerate::ClusterInfo],
    verdicts: &score::VerdictTable,
) -> Assembly {
    let chain_idx = index.representative_chain_index(entity_idx);
    let mut sto = Stoichiometry::new(index);
    sto.add(chain_idx, entity_idx);

    // with no contacts in the whole crystal the monomer is trivially the
    // answer; otherwise a contact-less entity is outside every method's
    // evidence and stays unpredicted
    let scores = if clusters.is_empty() {
        score::score_assembly(&BTreeSet::new(), clusters, verdicts)
    } else {
        verdicts
            .keys()
            .map(|method| AssemblyScore {
                method: method.clone(),
                call: Call::NoPrediction,
                confidence: 0.0,
            })
            .collect()
    };

    Assembly {
        id,
        mm_size: 1,
        stoichiometry_string: sto.to_formatted_string(index),
        composition_string: sto.to_formatted_composition_string(index),
        chain_ids: format!("{}_0", index.representative(entity_idx)),
        stoichiometry: sto,
        point_group: PointGroup::Cyclic(1),
        engaged_clusters: Vec::new(),
        engaged_interfaces: Vec::new(),
        scores,
    }
}
