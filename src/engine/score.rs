//! Assembly-level scoring and redundancy elimination.
//!
//! External predictors vote per interface; engagement decisions are per
//! cluster. A cluster's verdict under one method is the agreement of its
//! member interfaces, and an assembly's verdict is the weakest link over
//! its engaged clusters. The monomer is the complement case: it is the
//! biological answer exactly when everything else is crystal packing.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, warn};

use super::enumerate::ClusterInfo;
use crate::model::assembly::{Assembly, AssemblyScore};
use crate::model::interface::{Call, InterfaceCall};

/// One method's verdict on one interface cluster.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClusterVerdict {
    pub call: Call,
    pub confidence: f64,
}

/// method → cluster id → verdict
pub(crate) type VerdictTable = BTreeMap<String, BTreeMap<usize, ClusterVerdict>>;

/// Fold interface-level calls up to cluster level for every method.
pub(crate) fn cluster_verdicts(calls: &[InterfaceCall], clusters: &[ClusterInfo]) -> VerdictTable {
    let member_cluster: HashMap<usize, usize> = clusters
        .iter()
        .flat_map(|c| c.members.iter().map(move |&m| (m, c.id)))
        .collect();

    let mut grouped: BTreeMap<String, BTreeMap<usize, Vec<(Call, f64)>>> = BTreeMap::new();
    for call in calls {
        match member_cluster.get(&call.interface_id) {
            Some(&cluster_id) => {
                grouped
                    .entry(call.method.clone())
                    .or_default()
                    .entry(cluster_id)
                    .or_default()
                    .push((call.call, call.confidence));
            }
            None => debug!(
                "{} call for interface {} matches no retained cluster",
                call.method, call.interface_id
            ),
        }
    }

    let mut table = VerdictTable::new();
    for (method, per_cluster) in grouped {
        let mut verdicts = BTreeMap::new();
        for (cluster_id, votes) in per_cluster {
            verdicts.insert(cluster_id, combine_votes(cluster_id, &method, &votes));
        }
        table.insert(method, verdicts);
    }
    table
}

fn combine_votes(cluster_id: usize, method: &str, votes: &[(Call, f64)]) -> ClusterVerdict {
    let min_conf = votes.iter().map(|&(_, c)| c).fold(f64::INFINITY, f64::min);
    let has_bio = votes.iter().any(|&(c, _)| c == Call::Bio);
    let has_xtal = votes.iter().any(|&(c, _)| c == Call::Crystal);

    if has_bio && has_xtal {
        // symmetry-equivalent interfaces should agree; trust the
        // conservative side when they do not
        warn!(
            "conflicting {} calls within interface cluster {}; treating it as crystal",
            method, cluster_id
        );
        return ClusterVerdict {
            call: Call::Crystal,
            confidence: min_conf,
        };
    }

    let call = if has_bio {
        Call::Bio
    } else if has_xtal {
        Call::Crystal
    } else {
        Call::NoPrediction
    };
    ClusterVerdict {
        call,
        confidence: if call == Call::NoPrediction { 0.0 } else { min_conf },
    }
}

/// Score one engaged set under every method of the table.
pub(crate) fn score_assembly(
    engaged: &BTreeSet<usize>,
    all_clusters: &[ClusterInfo],
    table: &VerdictTable,
) -> Vec<AssemblyScore> {
    table
        .iter()
        .map(|(method, verdicts)| {
            let (call, confidence) = if engaged.is_empty() {
                score_monomer(verdicts, all_clusters)
            } else {
                score_engaged(engaged, verdicts)
            };
            AssemblyScore {
                method: method.clone(),
                call,
                confidence,
            }
        })
        .collect()
}

fn score_engaged(
    engaged: &BTreeSet<usize>,
    verdicts: &BTreeMap<usize, ClusterVerdict>,
) -> (Call, f64) {
    let mut confidence = f64::INFINITY;
    let mut any_crystal = false;
    for cluster_id in engaged {
        let Some(v) = verdicts.get(cluster_id) else {
            return (Call::NoPrediction, 0.0);
        };
        match v.call {
            Call::NoPrediction => return (Call::NoPrediction, 0.0),
            Call::Crystal => any_crystal = true,
            Call::Bio => {}
        }
        confidence = confidence.min(v.confidence);
    }
    let call = if any_crystal { Call::Crystal } else { Call::Bio };
    (call, confidence)
}

/// The monomer requires no interfaces and is always structurally valid;
/// it is the predicted biological unit iff every cluster of the crystal is
/// called crystal packing.
fn score_monomer(
    verdicts: &BTreeMap<usize, ClusterVerdict>,
    all_clusters: &[ClusterInfo],
) -> (Call, f64) {
    if all_clusters.is_empty() {
        return (Call::Bio, 1.0);
    }
    let mut confidence = f64::INFINITY;
    let mut any_bio = false;
    for cluster in all_clusters {
        let Some(v) = verdicts.get(&cluster.id) else {
            return (Call::NoPrediction, 0.0);
        };
        match v.call {
            Call::NoPrediction => return (Call::NoPrediction, 0.0),
            Call::Bio => any_bio = true,
            Call::Crystal => {}
        }
        confidence = confidence.min(v.confidence);
    }
    let call = if any_bio { Call::Crystal } else { Call::Bio };
    (call, confidence)
}

/// Merge assemblies with equal stoichiometry and point group, keeping the
/// one with higher external confidence; ties keep the first discovered.
/// Ids are renumbered to stay dense.
pub(crate) fn dedup_assemblies(assemblies: Vec<Assembly>) -> Vec<Assembly> {
    let mut kept: Vec<Assembly> = Vec::new();
    for assembly in assemblies {
        match kept.iter_mut().find(|k| {
            k.stoichiometry == assembly.stoichiometry && k.point_group == assembly.point_group
        }) {
            Some(existing) => {
                if assembly.max_confidence() > existing.max_confidence() {
                    *existing = assembly;
                }
            }
            None => kept.push(assembly),
        }
    }
    for (i, assembly) in kept.iter_mut().enumerate() {
        assembly.id = i;
    }
    kept
}

/// Index of the preferred biological assembly: the highest bio-called
/// confidence, ties broken towards the larger assembly, then towards the
/// earlier discovered one.
pub(crate) fn select_preferred(assemblies: &[Assembly]) -> Option<usize> {
    let mut best: Option<(usize, f64, u32)> = None;
    for (i, assembly) in assemblies.iter().enumerate() {
        let Some(conf) = assembly.best_bio_confidence() else {
            continue;
        };
        let better = match best {
            None => true,
            Some((_, best_conf, best_size)) => {
                conf > best_conf || (conf == best_conf && assembly.mm_size > best_size)
            }
        };
        if better {
            best = Some((i, conf, assembly.mm_size));
        }
    }
    best.map(|(i, _, _)| i)
}
