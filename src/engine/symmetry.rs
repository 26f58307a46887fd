//! Point-group inference for one assembly candidate.
//!
//! The decision procedure is deterministic given the stoichiometry and the
//! relevant connected component: homomers are analyzed on the raw
//! chain-copy graph, heteromers on its entity-contracted quotient. The
//! caller guarantees the component is connected; connectivity is not
//! re-checked here.

use std::collections::BTreeSet;

use log::warn;

use crate::graph::{
    contract, cycle_multiplicities, distinct_interface_count, ContactGraph, InterfaceGraph,
};
use crate::model::assembly::PointGroup;
use crate::model::stoichiometry::Stoichiometry;

/// Classify the point group of the assembly formed by `component` under
/// the engaged cluster set.
pub fn classify(
    graph: &ContactGraph,
    engaged: &BTreeSet<usize>,
    component: &[usize],
    sto: &Stoichiometry,
) -> PointGroup {
    let Some(n) = sto.first_non_zero() else {
        warn!("all counts are zero in a stoichiometry reaching the classifier");
        return PointGroup::Unknown;
    };

    let heteromer = sto.present_entity_count() > 1;
    if heteromer && !sto.is_even() {
        // candidate generation disallows uneven heteromers; reaching this
        // point means an upstream invariant broke
        warn!("uneven heteromeric stoichiometry {} reaching the classifier", sto);
        return PointGroup::Unknown;
    }

    let (component_graph, entities) = graph.component_graph(component, engaged);
    let analyzed = if heteromer {
        contract(&component_graph, &entities, sto)
    } else {
        component_graph
    };

    classify_graph(&analyzed, n)
}

/// The group decision on an already-prepared graph with per-entity
/// multiplicity `n`.
fn classify_graph(graph: &InterfaceGraph, n: u32) -> PointGroup {
    if n == 1 {
        return PointGroup::Cyclic(1);
    }

    // two-fold and odd orders admit no dihedral ambiguity
    if n == 2 || n % 2 != 0 {
        return PointGroup::Cyclic(n);
    }

    // a single interface type closing the ring cannot cross-brace it
    if distinct_interface_count(graph) == 1 {
        return PointGroup::Cyclic(n);
    }

    // Multiple interface types usually mean a dihedral, but a Cn can carry
    // cross-contacts without breaking its ring (e.g. PDB 4hi5, a C4): if
    // some single cluster still closes an n-cycle the assembly is cyclic.
    let cycles = cycle_multiplicities(graph);
    if cycles.contains_key(&(n as usize)) {
        return PointGroup::Cyclic(n);
    }

    if n == 12 && cycles.contains_key(&3) {
        return PointGroup::Tetrahedral;
    }
    if n == 24 && cycles.contains_key(&4) {
        return PointGroup::Octahedral;
    }
    if n == 60 && cycles.contains_key(&5) {
        return PointGroup::Icosahedral;
    }

    PointGroup::Dihedral(n / 2)
}
