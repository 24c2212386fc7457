use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::frontier::Frontier;
use crate::graph::{NodeId, WeightedGraph};
use crate::tree::{SpanningTree, TreeEdge};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimEvent<'g> {
    /// The start node was marked visited and its edges entered the frontier.
    Started { node: &'g str },
    /// The cheapest frontier edge reached a new node and joined the tree.
    Accepted { edge: TreeEdge<'g> },
    /// The cheapest frontier edge led back into the visited set and was dropped.
    SkippedStale { edge: TreeEdge<'g> },
}

#[derive(Clone, Debug, Serialize)]
pub struct PrimStep<'g> {
    pub step: usize,
    pub event: PrimEvent<'g>,
    pub visited: Vec<&'g str>,
    pub tree: Vec<TreeEdge<'g>>,
    pub total_weight: u128,
    pub frontier: Vec<TreeEdge<'g>>,
}

impl fmt::Display for PrimStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Step {} ---", self.step)?;
        match self.event {
            PrimEvent::Started { node } => writeln!(f, "Start node: {node}")?,
            PrimEvent::Accepted { edge } => {
                writeln!(f, "Current node: {}", edge.b)?;
                writeln!(f, "Edge added to tree: {edge}")?;
                writeln!(f, "Total weight so far: {}", self.total_weight)?;
            }
            PrimEvent::SkippedStale { edge } => {
                writeln!(f, "Skipped edge {edge}: {} already visited", edge.b)?;
            }
        }
        writeln!(f, "Visited nodes: {:?}", self.visited)?;
        writeln!(f, "Tree edges: {}", join_edges(&self.tree))?;
        write!(f, "Frontier: {}", join_edges(&self.frontier))
    }
}

fn join_edges(edges: &[TreeEdge<'_>]) -> String {
    let parts: Vec<String> = edges.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Stepwise Prim growth from a single start node.
///
/// The frontier holds candidate edges `(from, to)` keyed by weight; edges whose
/// far end got visited after insertion are dropped when popped. On a
/// disconnected graph only the start node's component is covered.
pub struct PrimRun<'g> {
    graph: &'g WeightedGraph,
    pending_start: Option<NodeId>,
    visited: Vec<bool>,
    visited_order: Vec<NodeId>,
    tree: SpanningTree<'g>,
    frontier: Frontier<u64, (NodeId, NodeId)>,
    steps: usize,
}

impl<'g> PrimRun<'g> {
    /// Starts at `start`, or at the first declared node when `None`.
    /// An empty graph yields no steps.
    pub fn new(graph: &'g WeightedGraph, start: Option<&str>) -> Result<Self> {
        graph.ensure_undirected()?;
        let pending_start = match start {
            Some(name) => Some(graph.require_node(name)?),
            None if graph.is_empty() => None,
            None => Some(0),
        };

        let n = graph.node_count();
        Ok(Self {
            graph,
            pending_start,
            visited: vec![false; n],
            visited_order: Vec::with_capacity(n),
            tree: SpanningTree::default(),
            frontier: Frontier::new(),
            steps: 0,
        })
    }

    pub fn step(&mut self) -> Option<PrimEvent<'g>> {
        if let Some(start) = self.pending_start.take() {
            self.steps += 1;
            self.visit(start);
            debug!(node = self.graph.name(start), "prim started");
            return Some(PrimEvent::Started {
                node: self.graph.name(start),
            });
        }

        let (weight, (from, to)) = self.frontier.pop()?;
        self.steps += 1;
        let edge = self.tree_edge(from, to, weight);

        if self.visited[to] {
            trace!(%edge, "skipped stale edge");
            return Some(PrimEvent::SkippedStale { edge });
        }

        self.tree.accept(edge);
        self.visit(to);
        debug!(step = self.steps, %edge, total = self.tree.total_weight, "accepted");
        Some(PrimEvent::Accepted { edge })
    }

    fn visit(&mut self, v: NodeId) {
        self.visited[v] = true;
        self.visited_order.push(v);
        for edge in self.graph.neighbors(v) {
            if !self.visited[edge.to] {
                self.frontier.push(edge.weight, (v, edge.to));
            }
        }
    }

    fn tree_edge(&self, from: NodeId, to: NodeId, weight: u64) -> TreeEdge<'g> {
        TreeEdge {
            a: self.graph.name(from),
            b: self.graph.name(to),
            weight,
        }
    }

    pub fn snapshot(&self, event: PrimEvent<'g>) -> PrimStep<'g> {
        PrimStep {
            step: self.steps,
            event,
            visited: self
                .visited_order
                .iter()
                .map(|&v| self.graph.name(v))
                .collect(),
            tree: self.tree.edges.clone(),
            total_weight: self.tree.total_weight,
            frontier: self
                .frontier
                .ordered()
                .into_iter()
                .map(|(&w, &(from, to))| self.tree_edge(from, to, w))
                .collect(),
        }
    }

    pub fn finish(mut self) -> SpanningTree<'g> {
        while self.step().is_some() {}
        self.tree
    }
}

impl<'g> Iterator for PrimRun<'g> {
    type Item = PrimStep<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.step()?;
        Some(self.snapshot(event))
    }
}

/// Minimum spanning tree of the component containing `start`.
pub fn prim<'g>(graph: &'g WeightedGraph, start: Option<&str>) -> Result<SpanningTree<'g>> {
    let tree = PrimRun::new(graph, start)?.finish();
    debug!(
        edges = tree.len(),
        total = tree.total_weight,
        "prim finished"
    );
    Ok(tree)
}
