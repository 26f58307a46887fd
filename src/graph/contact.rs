//! The chain-copy contact graph of one crystal structure.
//!
//! Vertices are placed chain copies (chain + symmetry operator), edges are
//! pairwise interfaces. Two vertices may be joined by several parallel
//! edges when distinct interfaces relate the same chain-copy pair. The
//! graph is built once per structure; enumeration and classification work
//! on views of it restricted to a set of engaged interface clusters.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use super::InterfaceGraph;
use crate::model::index::StructureIndex;
use crate::model::interface::Interface;
use crate::model::stoichiometry::Stoichiometry;
use crate::model::structure::SpaceOp;

/// An edge or vertex referenced data outside the declared chain/operator
/// universe; the structure and its interface list disagree upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inconsistent contact graph: {0}")]
pub struct InconsistentGraphError(pub String);

/// One placed chain copy. Vertex ids are assigned in ascending
/// (chain index, operator id) order, which makes every downstream
/// "first component" choice reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainVertex {
    pub chain_idx: usize,
    pub entity_idx: usize,
    pub op_id: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceEdge {
    pub interface_id: usize,
    pub cluster_id: usize,
    pub area: f64,
    pub infinite: bool,
    /// Algebraic notation of the operator relating the two partners.
    pub operator: String,
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone)]
pub struct ContactGraph {
    vertices: Vec<ChainVertex>,
    edges: Vec<InterfaceEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl ContactGraph {
    /// Build the graph from the retained interfaces (buried area at least
    /// `min_area`). Every endpoint must name a chain of the structure and
    /// an operator of the given set.
    pub fn build(
        index: &StructureIndex,
        ops: &[SpaceOp],
        interfaces: &[Interface],
        min_area: f64,
    ) -> Result<Self, InconsistentGraphError> {
        let mut op_map: HashMap<usize, &SpaceOp> = HashMap::with_capacity(ops.len());
        for op in ops {
            if op_map.insert(op.id, op).is_some() {
                return Err(InconsistentGraphError(format!(
                    "duplicate operator id {}",
                    op.id
                )));
            }
        }

        let retained: Vec<&Interface> =
            interfaces.iter().filter(|i| i.area >= min_area).collect();

        let mut keys: BTreeSet<(usize, usize)> = BTreeSet::new();
        let mut endpoints = Vec::with_capacity(retained.len());
        for interface in &retained {
            let mut resolved = [(0usize, 0usize); 2];
            for (slot, placement) in [&interface.left, &interface.right].into_iter().enumerate() {
                let chain_idx = index.chain_index(&placement.chain_id).ok_or_else(|| {
                    InconsistentGraphError(format!(
                        "interface {} references unknown chain '{}'",
                        interface.id, placement.chain_id
                    ))
                })?;
                if !op_map.contains_key(&placement.op_id) {
                    return Err(InconsistentGraphError(format!(
                        "interface {} references unknown operator {}",
                        interface.id, placement.op_id
                    )));
                }
                keys.insert((chain_idx, placement.op_id));
                resolved[slot] = (chain_idx, placement.op_id);
            }
            endpoints.push(resolved);
        }

        let vertices: Vec<ChainVertex> = keys
            .iter()
            .map(|&(chain_idx, op_id)| ChainVertex {
                chain_idx,
                entity_idx: index.entity_of_chain(chain_idx),
                op_id,
            })
            .collect();
        let vertex_ids: HashMap<(usize, usize), usize> = keys
            .iter()
            .enumerate()
            .map(|(i, &key)| (key, i))
            .collect();

        let mut edges = Vec::with_capacity(retained.len());
        let mut adjacency = vec![Vec::new(); vertices.len()];
        for (interface, resolved) in retained.iter().zip(&endpoints) {
            let source = vertex_ids[&resolved[0]];
            let target = vertex_ids[&resolved[1]];
            let operator = op_map[&interface.right.op_id].algebraic.clone();

            let edge_id = edges.len();
            edges.push(InterfaceEdge {
                interface_id: interface.id,
                cluster_id: interface.cluster_id,
                area: interface.area,
                infinite: interface.infinite,
                operator,
                source,
                target,
            });
            adjacency[source].push(edge_id);
            if source != target {
                adjacency[target].push(edge_id);
            }
        }

        Ok(Self {
            vertices,
            edges,
            adjacency,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[ChainVertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: usize) -> &ChainVertex {
        &self.vertices[id]
    }

    pub fn edges(&self) -> &[InterfaceEdge] {
        &self.edges
    }

    /// All interface-cluster ids present in the graph, ascending.
    pub fn cluster_ids(&self) -> BTreeSet<usize> {
        self.edges.iter().map(|e| e.cluster_id).collect()
    }

    /// Connected components of the graph restricted to edges whose cluster
    /// is engaged. Every vertex appears; vertices without engaged contacts
    /// form singleton components. Components are ordered by their smallest
    /// vertex id and sorted internally.
    pub fn connected_components(&self, engaged: &BTreeSet<usize>) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.vertices.len()];
        let mut components = Vec::new();

        for start in 0..self.vertices.len() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut component = vec![start];
            let mut queue = vec![start];
            while let Some(v) = queue.pop() {
                for &ei in &self.adjacency[v] {
                    let edge = &self.edges[ei];
                    if !engaged.contains(&edge.cluster_id) {
                        continue;
                    }
                    let w = if edge.source == v {
                        edge.target
                    } else {
                        edge.source
                    };
                    if !visited[w] {
                        visited[w] = true;
                        component.push(w);
                        queue.push(w);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }

        components
    }

    /// Stoichiometry of the chain copies in one component.
    pub fn stoichiometry_of(&self, component: &[usize], index: &StructureIndex) -> Stoichiometry {
        let mut sto = Stoichiometry::new(index);
        for &v in component {
            let vertex = &self.vertices[v];
            sto.add(vertex.chain_idx, vertex.entity_idx);
        }
        sto
    }

    /// The first connected component (smallest vertex id) whose
    /// stoichiometry equals the given one.
    pub fn first_relevant_connected_component(
        &self,
        engaged: &BTreeSet<usize>,
        sto: &Stoichiometry,
        index: &StructureIndex,
    ) -> Option<Vec<usize>> {
        self.connected_components(engaged)
            .into_iter()
            .find(|c| &self.stoichiometry_of(c, index) == sto)
    }

    /// Extract one component as a dense local multigraph, keeping only
    /// engaged edges, together with the entity index of each local vertex.
    pub fn component_graph(
        &self,
        component: &[usize],
        engaged: &BTreeSet<usize>,
    ) -> (InterfaceGraph, Vec<usize>) {
        let local: HashMap<usize, usize> = component
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();
        let mut graph = InterfaceGraph::new(component.len());
        for edge in &self.edges {
            if !engaged.contains(&edge.cluster_id) {
                continue;
            }
            if let (Some(&a), Some(&b)) = (local.get(&edge.source), local.get(&edge.target)) {
                graph.add_edge(a, b, edge.cluster_id);
            }
        }
        let entities = component
            .iter()
            .map(|&v| self.vertices[v].entity_idx)
            .collect();
        (graph, entities)
    }

    /// Chain copies of a component in "chain_op" notation, e.g. "A_0,B_2".
    pub fn chain_ids_string(&self, component: &[usize], index: &StructureIndex) -> String {
        component
            .iter()
            .map(|&v| {
                let vertex = &self.vertices[v];
                format!("{}_{}", index.chain_id(vertex.chain_idx), vertex.op_id)
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
