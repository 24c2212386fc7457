use std::cmp::Reverse;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::disjoint_set::DisjointSetForest;
use crate::error::Result;
use crate::graph::{NodeId, WeightedGraph};
use crate::tree::{SpanningTree, TreeEdge};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeKind {
    #[default]
    Minimum,
    Maximum,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KruskalEvent<'g> {
    /// Edges were sorted; every node is still its own component.
    Started { sorted: Vec<TreeEdge<'g>> },
    /// Endpoints were in different components; the edge joined the tree.
    Accepted { edge: TreeEdge<'g> },
    /// Endpoints already shared a component; the edge would close a cycle.
    Rejected { edge: TreeEdge<'g> },
}

#[derive(Clone, Debug, Serialize)]
pub struct KruskalStep<'g> {
    pub step: usize,
    pub event: KruskalEvent<'g>,
    pub tree: Vec<TreeEdge<'g>>,
    pub total_weight: u128,
    pub components: Vec<Vec<&'g str>>,
}

impl fmt::Display for KruskalStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Step {} ---", self.step)?;
        match &self.event {
            KruskalEvent::Started { sorted } => {
                let sorted: Vec<String> = sorted.iter().map(ToString::to_string).collect();
                writeln!(f, "Sorted edges: [{}]", sorted.join(", "))?;
            }
            KruskalEvent::Accepted { edge } => {
                writeln!(f, "Processing edge: {edge}")?;
                writeln!(f, "-> EDGE ADDED (no cycle)")?;
            }
            KruskalEvent::Rejected { edge } => {
                writeln!(f, "Processing edge: {edge}")?;
                writeln!(f, "-> edge skipped (would form a cycle)")?;
            }
        }
        let tree: Vec<String> = self.tree.iter().map(ToString::to_string).collect();
        writeln!(f, "Tree edges: [{}]", tree.join(", "))?;
        writeln!(f, "Total weight so far: {}", self.total_weight)?;
        write!(f, "Components: {:?}", self.components)
    }
}

/// Stepwise Kruskal over the globally sorted, deduplicated edge list.
///
/// Equal weights keep discovery order (rows in declaration order, then
/// neighbors in row order) in both modes. The first step reports the sorted
/// edge list; the run stops as soon as one component remains.
pub struct KruskalRun<'g> {
    graph: &'g WeightedGraph,
    edges: Vec<(NodeId, NodeId, u64)>,
    cursor: usize,
    forest: DisjointSetForest,
    tree: SpanningTree<'g>,
    started: bool,
    steps: usize,
}

impl<'g> KruskalRun<'g> {
    pub fn new(graph: &'g WeightedGraph, kind: TreeKind) -> Result<Self> {
        graph.ensure_undirected()?;
        let mut edges = graph.undirected_edges();
        match kind {
            TreeKind::Minimum => edges.sort_by_key(|e| e.2),
            TreeKind::Maximum => edges.sort_by_key(|e| Reverse(e.2)),
        }
        debug!(%kind, edges = edges.len(), "kruskal edge list sorted");

        Ok(Self {
            graph,
            edges,
            cursor: 0,
            forest: DisjointSetForest::new(graph.node_count()),
            tree: SpanningTree::default(),
            started: graph.is_empty(),
            steps: 0,
        })
    }

    pub fn step(&mut self) -> Option<KruskalEvent<'g>> {
        if !self.started {
            self.started = true;
            self.steps += 1;
            let sorted = self
                .edges
                .iter()
                .map(|&(a, b, weight)| self.tree_edge(a, b, weight))
                .collect();
            return Some(KruskalEvent::Started { sorted });
        }
        if self.forest.component_count() <= 1 {
            return None;
        }
        let &(a, b, weight) = self.edges.get(self.cursor)?;
        self.cursor += 1;
        self.steps += 1;

        let edge = self.tree_edge(a, b, weight);
        if self.forest.union(a, b) {
            self.tree.accept(edge);
            debug!(step = self.steps, %edge, total = self.tree.total_weight, "accepted");
            Some(KruskalEvent::Accepted { edge })
        } else {
            trace!(step = self.steps, %edge, "rejected, would close a cycle");
            Some(KruskalEvent::Rejected { edge })
        }
    }

    fn tree_edge(&self, a: NodeId, b: NodeId, weight: u64) -> TreeEdge<'g> {
        TreeEdge {
            a: self.graph.name(a),
            b: self.graph.name(b),
            weight,
        }
    }

    pub fn snapshot(&self, event: KruskalEvent<'g>) -> KruskalStep<'g> {
        KruskalStep {
            step: self.steps,
            event,
            tree: self.tree.edges.clone(),
            total_weight: self.tree.total_weight,
            components: self
                .forest
                .components()
                .into_iter()
                .map(|group| group.into_iter().map(|v| self.graph.name(v)).collect())
                .collect(),
        }
    }

    pub fn finish(mut self) -> SpanningTree<'g> {
        while self.step().is_some() {}
        self.tree
    }
}

impl<'g> Iterator for KruskalRun<'g> {
    type Item = KruskalStep<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.step()?;
        Some(self.snapshot(event))
    }
}

/// Minimum or maximum spanning forest; a spanning tree when the graph is connected.
pub fn kruskal<'g>(graph: &'g WeightedGraph, kind: TreeKind) -> Result<SpanningTree<'g>> {
    let tree = KruskalRun::new(graph, kind)?.finish();
    debug!(
        %kind,
        edges = tree.len(),
        total = tree.total_weight,
        "kruskal finished"
    );
    Ok(tree)
}
