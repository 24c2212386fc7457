//! Small reference graphs with well known answers.

use crate::error::Result;
use crate::graph::WeightedGraph;

pub type Rows = &'static [(&'static str, &'static [(&'static str, u64)])];

/// Five-node undirected graph used for the shortest-path walkthrough.
pub const DIJKSTRA_EXAMPLE: Rows = &[
    ("A", &[("B", 6), ("D", 1)]),
    ("B", &[("A", 6), ("D", 2), ("E", 2), ("C", 5)]),
    ("C", &[("B", 5), ("E", 5)]),
    ("D", &[("A", 1), ("B", 2), ("E", 1)]),
    ("E", &[("D", 1), ("B", 2), ("C", 5)]),
];

/// The classic nine-node textbook graph; its minimum spanning tree weighs 37.
pub const MST_EXAMPLE: Rows = &[
    ("A", &[("B", 4), ("H", 8)]),
    ("B", &[("A", 4), ("H", 11), ("C", 8)]),
    ("C", &[("B", 8), ("I", 2), ("F", 4), ("D", 7)]),
    ("D", &[("C", 7), ("F", 14), ("E", 9)]),
    ("E", &[("D", 9), ("F", 10)]),
    ("F", &[("C", 4), ("D", 14), ("E", 10), ("G", 2)]),
    ("G", &[("F", 2), ("H", 1), ("I", 6)]),
    ("H", &[("A", 8), ("B", 11), ("I", 7), ("G", 1)]),
    ("I", &[("C", 2), ("H", 7), ("G", 6)]),
];

pub fn from_rows(rows: Rows) -> Result<WeightedGraph> {
    WeightedGraph::from_adjacency(
        rows.iter()
            .map(|&(node, neighbors)| (node, neighbors.iter().copied())),
    )
}

pub fn dijkstra_example() -> Result<WeightedGraph> {
    from_rows(DIJKSTRA_EXAMPLE)
}

pub fn mst_example() -> Result<WeightedGraph> {
    from_rows(MST_EXAMPLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_undirected() {
        for graph in [dijkstra_example().unwrap(), mst_example().unwrap()] {
            graph.ensure_undirected().unwrap();
        }
        assert_eq!(mst_example().unwrap().undirected_edges().len(), 14);
    }
}
