//! Graph machinery for assembly enumeration and symmetry inference.
//!
//! - [`contact`] – The chain-copy contact multigraph of the whole lattice.
//! - [`contract`] – Entity-level quotient of a component graph (heteromers).
//! - [`cycles`] – Distinct-interface counting and per-cluster cycle detection.

pub mod contact;
pub mod contract;
pub mod cycles;

pub use contact::{ChainVertex, ContactGraph, InconsistentGraphError, InterfaceEdge};
pub use contract::contract;
pub use cycles::{cycle_multiplicities, distinct_interface_count};

/// A small undirected multigraph over dense vertex ids, carrying the
/// interface-cluster id on every edge. Used for the per-component subgraphs
/// handed to the symmetry classifier; parallel edges and self-loops are
/// both meaningful and preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceGraph {
    vertex_count: usize,
    edges: Vec<GraphEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub a: usize,
    pub b: usize,
    pub cluster_id: usize,
}

impl InterfaceGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, a: usize, b: usize, cluster_id: usize) {
        debug_assert!(a < self.vertex_count && b < self.vertex_count);
        self.edges.push(GraphEdge { a, b, cluster_id });
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Adjacency list: for each vertex, its (neighbor, edge index) pairs.
    /// Self-loops are omitted; they cannot take part in paths.
    pub fn adjacency(&self) -> Vec<Vec<(usize, usize)>> {
        let mut adj = vec![Vec::new(); self.vertex_count];
        for (ei, e) in self.edges.iter().enumerate() {
            if e.a != e.b {
                adj[e.a].push((e.b, ei));
                adj[e.b].push((e.a, ei));
            }
        }
        adj
    }
}
