use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::frontier::Frontier;
use crate::graph::{NodeId, WeightedGraph};

/// A neighbor whose best known distance dropped while finalizing a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Relaxation<'g> {
    pub node: &'g str,
    pub distance: u128,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DijkstraEvent<'g> {
    /// `node` left the frontier for the first time; its distance is final.
    Finalized {
        node: &'g str,
        distance: u128,
        relaxed: Vec<Relaxation<'g>>,
    },
    /// A frontier entry for an already finalized node was discarded.
    SkippedStale { node: &'g str, priority: u128 },
}

/// State after one Dijkstra step. Distances are `None` while a node is unseen.
///
/// Path lengths are `u128` so that no sum of `u64` edge weights can overflow.
#[derive(Clone, Debug, Serialize)]
pub struct DijkstraStep<'g> {
    pub step: usize,
    pub event: DijkstraEvent<'g>,
    pub distances: Vec<(&'g str, Option<u128>)>,
    pub predecessors: Vec<(&'g str, Option<&'g str>)>,
    pub visited: Vec<&'g str>,
    pub frontier: Vec<(u128, &'g str)>,
}

impl fmt::Display for DijkstraStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Step {} ---", self.step)?;
        match &self.event {
            DijkstraEvent::Finalized {
                node,
                distance,
                relaxed,
            } => {
                writeln!(f, "Current node: {node} (distance {distance})")?;
                for r in relaxed {
                    writeln!(f, "  relaxed {} -> {}", r.node, r.distance)?;
                }
            }
            DijkstraEvent::SkippedStale { node, priority } => {
                writeln!(f, "Skipped stale entry ({priority}, {node})")?;
            }
        }
        writeln!(f, "Known distances:")?;
        for (node, distance) in &self.distances {
            let distance = distance.map_or_else(|| "inf".to_owned(), |d| d.to_string());
            let mark = if self.visited.contains(node) {
                " (visited)"
            } else {
                ""
            };
            writeln!(f, "  {node}: {distance}{mark}")?;
        }
        write!(f, "Frontier: {:?}", self.frontier)
    }
}

/// Final distance and predecessor tables of a Dijkstra run.
#[derive(Clone, Debug)]
pub struct ShortestPaths<'g> {
    graph: &'g WeightedGraph,
    source: NodeId,
    dist: Vec<Option<u128>>,
    pred: Vec<Option<NodeId>>,
}

impl<'g> ShortestPaths<'g> {
    pub fn source(&self) -> &'g str {
        self.graph.name(self.source)
    }

    /// `None` for unreachable or unknown nodes.
    pub fn distance(&self, node: &str) -> Option<u128> {
        let v = self.graph.index_of(node)?;
        self.dist[v]
    }

    pub fn predecessor(&self, node: &str) -> Option<&'g str> {
        let v = self.graph.index_of(node)?;
        self.pred[v].map(|p| self.graph.name(p))
    }

    /// Node sequence from the source to `node`, or `None` if there is no path.
    pub fn path_to(&self, node: &str) -> Option<Vec<&'g str>> {
        let mut v = self.graph.index_of(node)?;
        let mut path = vec![self.graph.name(v)];
        while let Some(p) = self.pred[v] {
            path.push(self.graph.name(p));
            v = p;
        }
        if v != self.source {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Every node with its distance, in declaration order.
    pub fn distances(&self) -> Vec<(&'g str, Option<u128>)> {
        distance_table(self.graph, &self.dist)
    }

    pub fn is_reachable(&self, node: &str) -> bool {
        self.distance(node).is_some()
    }
}

/// Stepwise Dijkstra from a fixed source.
///
/// Each call to [`Iterator::next`] pops one frontier entry and yields a
/// snapshot. Stale entries stay in the frontier until popped. When the
/// iterator is exhausted, [`DijkstraRun::finish`] hands out the tables.
pub struct DijkstraRun<'g> {
    graph: &'g WeightedGraph,
    source: NodeId,
    dist: Vec<Option<u128>>,
    pred: Vec<Option<NodeId>>,
    visited: Vec<bool>,
    visited_order: Vec<NodeId>,
    frontier: Frontier<u128, NodeId>,
    steps: usize,
}

impl<'g> DijkstraRun<'g> {
    pub fn new(graph: &'g WeightedGraph, source: &str) -> Result<Self> {
        let source = graph.require_node(source)?;
        let n = graph.node_count();
        let mut dist = vec![None; n];
        dist[source] = Some(0);
        let mut frontier = Frontier::new();
        frontier.push(0, source);

        Ok(Self {
            graph,
            source,
            dist,
            pred: vec![None; n],
            visited: vec![false; n],
            visited_order: Vec::with_capacity(n),
            frontier,
            steps: 0,
        })
    }

    /// Advances by one frontier entry without building a snapshot.
    pub fn step(&mut self) -> Option<DijkstraEvent<'g>> {
        let (d, u) = self.frontier.pop()?;
        self.steps += 1;
        let name = self.graph.name(u);

        if self.visited[u] {
            trace!(node = name, priority = d, "skipped stale frontier entry");
            return Some(DijkstraEvent::SkippedStale {
                node: name,
                priority: d,
            });
        }

        self.visited[u] = true;
        self.visited_order.push(u);

        let mut relaxed = Vec::new();
        for edge in self.graph.neighbors(u) {
            let v = edge.to;
            if self.visited[v] {
                continue;
            }
            let cand = d + u128::from(edge.weight);
            if self.dist[v].is_none_or(|best| cand < best) {
                self.dist[v] = Some(cand);
                self.pred[v] = Some(u);
                self.frontier.push(cand, v);
                trace!(from = name, to = self.graph.name(v), distance = cand, "relaxed");
                relaxed.push(Relaxation {
                    node: self.graph.name(v),
                    distance: cand,
                });
            }
        }

        debug!(step = self.steps, node = name, distance = d, "finalized");
        Some(DijkstraEvent::Finalized {
            node: name,
            distance: d,
            relaxed,
        })
    }

    pub fn snapshot(&self, event: DijkstraEvent<'g>) -> DijkstraStep<'g> {
        let graph = self.graph;
        DijkstraStep {
            step: self.steps,
            event,
            distances: distance_table(graph, &self.dist),
            predecessors: (0..graph.node_count())
                .map(|v| (graph.name(v), self.pred[v].map(|p| graph.name(p))))
                .collect(),
            visited: self.visited_order.iter().map(|&v| graph.name(v)).collect(),
            frontier: self
                .frontier
                .ordered()
                .into_iter()
                .map(|(&d, &v)| (d, graph.name(v)))
                .collect(),
        }
    }

    /// Runs any remaining steps and returns the final tables.
    pub fn finish(mut self) -> ShortestPaths<'g> {
        while self.step().is_some() {}
        ShortestPaths {
            graph: self.graph,
            source: self.source,
            dist: self.dist,
            pred: self.pred,
        }
    }
}

impl<'g> Iterator for DijkstraRun<'g> {
    type Item = DijkstraStep<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.step()?;
        Some(self.snapshot(event))
    }
}

/// Shortest-path tree from `source` over non-negative weights.
pub fn dijkstra<'g>(graph: &'g WeightedGraph, source: &str) -> Result<ShortestPaths<'g>> {
    let run = DijkstraRun::new(graph, source)?;
    let paths = run.finish();
    debug!(
        source,
        reachable = paths.dist.iter().flatten().count(),
        "dijkstra finished"
    );
    Ok(paths)
}

fn distance_table<'g>(
    graph: &'g WeightedGraph,
    dist: &[Option<u128>],
) -> Vec<(&'g str, Option<u128>)> {
    dist.iter()
        .enumerate()
        .map(|(v, &d)| (graph.name(v), d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;
    use crate::fixtures;

    #[test]
    fn reference_distances_and_routes() {
        let g = fixtures::dijkstra_example().unwrap();
        let paths = dijkstra(&g, "A").unwrap();

        for (node, expected) in [("A", 0), ("D", 1), ("B", 3), ("E", 2), ("C", 7)] {
            assert_eq!(paths.distance(node), Some(expected), "node={node}");
        }
        assert_eq!(paths.path_to("A"), Some(vec!["A"]));
        assert_eq!(paths.path_to("B"), Some(vec!["A", "D", "B"]));
        assert_eq!(paths.path_to("C"), Some(vec!["A", "D", "E", "C"]));
        assert_eq!(paths.predecessor("E"), Some("D"));
        assert_eq!(paths.predecessor("A"), None);
    }

    #[test]
    fn unreachable_nodes_have_no_path() {
        let g = WeightedGraph::from_adjacency([
            ("S", vec![("T", 3)]),
            ("T", vec![]),
            ("U", vec![("S", 1)]),
        ])
        .unwrap();
        let paths = dijkstra(&g, "S").unwrap();
        assert_eq!(paths.distance("T"), Some(3));
        assert_eq!(paths.distance("U"), None);
        assert_eq!(paths.path_to("U"), None);
        assert!(!paths.is_reachable("U"));
        assert_eq!(
            paths.distances(),
            vec![("S", Some(0)), ("T", Some(3)), ("U", None)]
        );
    }

    #[test]
    fn unknown_source_fails_before_running() {
        let g = fixtures::dijkstra_example().unwrap();
        assert!(matches!(
            dijkstra(&g, "Z"),
            Err(GraphError::UnknownNode { ref node }) if node == "Z"
        ));
    }

    #[test]
    fn stream_finalizes_each_reachable_node_once() {
        let g = fixtures::dijkstra_example().unwrap();
        let steps: Vec<DijkstraStep<'_>> = DijkstraRun::new(&g, "A").unwrap().collect();

        let finalized: Vec<&str> = steps
            .iter()
            .filter_map(|s| match s.event {
                DijkstraEvent::Finalized { node, .. } => Some(node),
                DijkstraEvent::SkippedStale { .. } => None,
            })
            .collect();
        assert_eq!(finalized, ["A", "D", "E", "B", "C"]);

        for (i, s) in steps.iter().enumerate() {
            assert_eq!(s.step, i + 1);
        }
        let last = steps.last().unwrap();
        assert!(last.frontier.is_empty());
        assert_eq!(last.visited, ["A", "D", "E", "B", "C"]);
        assert!(
            steps
                .iter()
                .any(|s| matches!(s.event, DijkstraEvent::SkippedStale { .. }))
        );
    }

    #[test]
    fn heavy_edges_stay_reachable() {
        let heavy = u64::MAX / 4;
        let g = WeightedGraph::from_json(&format!(r#"{{"A": {{"B": {heavy}}}, "B": {{}}}}"#))
            .unwrap();
        let paths = dijkstra(&g, "A").unwrap();
        assert_eq!(paths.distance("B"), Some(u128::from(heavy)));
        assert_eq!(paths.path_to("B"), Some(vec!["A", "B"]));

        // Route lengths past u64::MAX are still exact and still beat longer ones.
        let g = WeightedGraph::from_adjacency([
            ("A", vec![("B", u64::MAX), ("C", u64::MAX)]),
            ("B", vec![("D", u64::MAX)]),
            ("C", vec![("D", u64::MAX - 1)]),
            ("D", vec![]),
        ])
        .unwrap();
        let paths = dijkstra(&g, "A").unwrap();
        assert_eq!(
            paths.distance("D"),
            Some(u128::from(u64::MAX) + u128::from(u64::MAX - 1))
        );
        assert_eq!(paths.path_to("D"), Some(vec!["A", "C", "D"]));
    }

    #[test]
    fn distances_only_decrease_across_snapshots() {
        let g = fixtures::dijkstra_example().unwrap();
        let mut previous: Option<Vec<(&str, Option<u128>)>> = None;
        for step in DijkstraRun::new(&g, "C").unwrap() {
            if let Some(prev) = &previous {
                for ((_, before), (_, after)) in prev.iter().zip(&step.distances) {
                    match (before, after) {
                        (Some(b), Some(a)) => assert!(a <= b),
                        (Some(_), None) => panic!("distance went back to infinity"),
                        _ => {}
                    }
                }
            }
            previous = Some(step.distances.clone());
        }
    }
}
