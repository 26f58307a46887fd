//! Interface-type counting and per-cluster cycle detection.
//!
//! Point groups are told apart by which rings the individual interface
//! types close around the assembly: the principal ring of a Cn closes an
//! n-cycle out of a single cluster's edges, while the isologous contacts
//! of a Dn only ever pair subunits up. The polyhedral groups show up as
//! 3-, 4- and 5-cycles of one cluster at orders 12, 24 and 60.

use std::collections::{BTreeMap, BTreeSet};

use super::InterfaceGraph;

/// Number of distinct interface types (by cluster equivalence, not edge
/// count) present in the graph.
pub fn distinct_interface_count(graph: &InterfaceGraph) -> usize {
    graph
        .edges()
        .iter()
        .map(|e| e.cluster_id)
        .collect::<BTreeSet<_>>()
        .len()
}

/// For every interface cluster, detect the simple cycles closed by that
/// cluster's edges alone, and return cycle length → number of such cycles
/// summed over clusters, sorted by length.
///
/// Cycles are vertex-distinct closed walks; a pair of parallel edges
/// counts as a 2-cycle and a self-loop as a 1-cycle. The graphs seen here
/// are component subgraphs of bounded size, so plain DFS enumeration is
/// cheap.
pub fn cycle_multiplicities(graph: &InterfaceGraph) -> BTreeMap<usize, usize> {
    let clusters: BTreeSet<usize> = graph.edges().iter().map(|e| e.cluster_id).collect();

    let mut multiplicities = BTreeMap::new();
    for &cluster in &clusters {
        let mut sub = InterfaceGraph::new(graph.vertex_count());
        for edge in graph.edges().iter().filter(|e| e.cluster_id == cluster) {
            sub.add_edge(edge.a, edge.b, cluster);
        }
        for len in simple_cycle_lengths(&sub) {
            *multiplicities.entry(len).or_insert(0) += 1;
        }
    }
    multiplicities
}

/// Lengths of all simple cycles in the graph, one entry per cycle.
fn simple_cycle_lengths(graph: &InterfaceGraph) -> Vec<usize> {
    let mut lengths: Vec<usize> = graph
        .edges()
        .iter()
        .filter(|e| e.a == e.b)
        .map(|_| 1)
        .collect();

    let adj = graph.adjacency();
    let n = graph.vertex_count();

    // each cycle is found twice, once per traversal direction, anchored at
    // its smallest vertex
    let mut raw: BTreeMap<usize, usize> = BTreeMap::new();
    let mut visited = vec![false; n];
    for start in 0..n {
        visited[start] = true;
        walk(start, start, 0, usize::MAX, &adj, &mut visited, &mut raw);
        visited[start] = false;
    }

    for (len, count) in raw {
        debug_assert_eq!(count % 2, 0);
        lengths.extend(std::iter::repeat(len).take(count / 2));
    }
    lengths
}

fn walk(
    start: usize,
    v: usize,
    depth: usize,
    first_edge: usize,
    adj: &[Vec<(usize, usize)>],
    visited: &mut [bool],
    raw: &mut BTreeMap<usize, usize>,
) {
    for &(w, e) in &adj[v] {
        if w == start {
            // closing back on the entry edge is not a cycle
            if depth >= 1 && !(depth == 1 && e == first_edge) {
                *raw.entry(depth + 1).or_insert(0) += 1;
            }
            continue;
        }
        if w < start || visited[w] {
            continue;
        }
        visited[w] = true;
        let first = if depth == 0 { e } else { first_edge };
        walk(start, w, depth + 1, first, adj, visited, raw);
        visited[w] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize, cluster: usize) -> InterfaceGraph {
        let mut g = InterfaceGraph::new(n);
        for i in 0..n {
            g.add_edge(i, (i + 1) % n, cluster);
        }
        g
    }

    #[test]
    fn counts_distinct_interface_types() {
        let mut g = ring(4, 1);
        g.add_edge(0, 2, 2);
        g.add_edge(1, 3, 2);
        assert_eq!(distinct_interface_count(&g), 2);
        assert_eq!(distinct_interface_count(&InterfaceGraph::new(3)), 0);
    }

    #[test]
    fn single_cluster_ring_closes_one_n_cycle() {
        assert_eq!(cycle_multiplicities(&ring(6, 1)), [(6, 1)].into());
        assert_eq!(cycle_multiplicities(&ring(3, 1)), [(3, 1)].into());
    }

    #[test]
    fn cross_contacts_do_not_hide_the_main_ring() {
        // C4 ring with a second cluster bridging the diagonals
        let mut g = ring(4, 1);
        g.add_edge(0, 2, 2);
        g.add_edge(1, 3, 2);
        let m = cycle_multiplicities(&g);
        assert_eq!(m.get(&4), Some(&1));
        // the diagonals alone close nothing
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn pairwise_clusters_close_no_cycles() {
        // D2-style tetramer: three clusters, each pairing subunits up
        let mut g = InterfaceGraph::new(4);
        g.add_edge(0, 1, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(0, 2, 2);
        g.add_edge(1, 3, 2);
        g.add_edge(0, 3, 3);
        g.add_edge(1, 2, 3);
        assert!(cycle_multiplicities(&g).is_empty());
    }

    #[test]
    fn parallel_edges_close_two_cycles() {
        let mut g = InterfaceGraph::new(2);
        g.add_edge(0, 1, 1);
        g.add_edge(0, 1, 1);
        assert_eq!(cycle_multiplicities(&g), [(2, 1)].into());

        // three parallel edges pair up three ways
        g.add_edge(0, 1, 1);
        assert_eq!(cycle_multiplicities(&g), [(2, 3)].into());
    }

    #[test]
    fn self_loops_count_as_one_cycles() {
        let mut g = InterfaceGraph::new(2);
        g.add_edge(0, 0, 1);
        g.add_edge(0, 1, 2);
        assert_eq!(cycle_multiplicities(&g), [(1, 1)].into());
    }

    #[test]
    fn disjoint_triangles_of_one_cluster_all_count() {
        // the trimeric contact of a tetrahedral 12-mer: four triangles
        let mut g = InterfaceGraph::new(12);
        for t in 0..4 {
            let base = 3 * t;
            g.add_edge(base, base + 1, 1);
            g.add_edge(base + 1, base + 2, 1);
            g.add_edge(base + 2, base, 1);
        }
        assert_eq!(cycle_multiplicities(&g), [(3, 4)].into());
    }

    #[test]
    fn clusters_are_analyzed_independently() {
        // 4-ring of cluster 1 and a 3-ring of cluster 2 sharing vertex 0
        let mut g = ring(4, 1);
        // grow to 6 vertices for the second ring
        let mut big = InterfaceGraph::new(6);
        for e in g.edges() {
            big.add_edge(e.a, e.b, e.cluster_id);
        }
        big.add_edge(0, 4, 2);
        big.add_edge(4, 5, 2);
        big.add_edge(5, 0, 2);
        g = big;
        assert_eq!(cycle_multiplicities(&g), [(3, 1), (4, 1)].into());
    }
}
