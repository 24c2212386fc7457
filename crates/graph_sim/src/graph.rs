use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{GraphError, Result};

/// Dense node index, assigned in declaration order.
pub type NodeId = usize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: u64,
}

/// JSON shape accepted by [`WeightedGraph::from_json`]: node -> neighbor -> weight.
/// Keys keep the order they appear in the document.
pub type AdjacencyDocument = IndexMap<String, IndexMap<String, u64>>;

/// Weighted graph over named nodes, stored as compressed adjacency rows.
///
/// Every neighbor is itself a node; construction fails otherwise. The graph is
/// directed as stored. Undirected graphs list each edge in both rows, which
/// [`WeightedGraph::ensure_undirected`] checks.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "AdjacencyDocument")]
pub struct WeightedGraph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    offsets: Vec<usize>,
    to: Vec<NodeId>,
    weight: Vec<u64>,
}

impl WeightedGraph {
    /// Builds a graph from `(node, [(neighbor, weight), ...])` rows.
    ///
    /// Node order and neighbor order are kept as given; they decide tie-breaks
    /// in the engines.
    pub fn from_adjacency<I, N, J, M>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, J)>,
        N: Into<String>,
        J: IntoIterator<Item = (M, u64)>,
        M: Into<String>,
    {
        let rows: Vec<(String, Vec<(String, u64)>)> = adjacency
            .into_iter()
            .map(|(node, neighbors)| {
                let neighbors = neighbors.into_iter().map(|(m, w)| (m.into(), w)).collect();
                (node.into(), neighbors)
            })
            .collect();

        let mut index = HashMap::with_capacity(rows.len());
        for (id, (name, _)) in rows.iter().enumerate() {
            if index.insert(name.clone(), id).is_some() {
                return Err(GraphError::DuplicateNode { node: name.clone() });
            }
        }

        let mut edges = Vec::new();
        for (from, (name, neighbors)) in rows.iter().enumerate() {
            for (neighbor, weight) in neighbors {
                let Some(&to) = index.get(neighbor) else {
                    return Err(GraphError::DanglingNeighbor {
                        node: name.clone(),
                        neighbor: neighbor.clone(),
                    });
                };
                edges.push((from, to, *weight));
            }
        }

        let names = rows.into_iter().map(|(name, _)| name).collect();
        Ok(Self::from_edges(names, &edges))
    }

    /// Builds a graph from already-resolved node indices.
    ///
    /// Panics if an index is out of range or a name repeats; intended for
    /// generators that produce indices themselves.
    pub fn from_edges(names: Vec<String>, edges: &[(NodeId, NodeId, u64)]) -> Self {
        let vertex_count = names.len();
        let mut out_deg = vec![0_usize; vertex_count];
        for &(from, to, _) in edges {
            assert!(from < vertex_count, "from vertex out of range");
            assert!(to < vertex_count, "to vertex out of range");
            out_deg[from] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_deg[v];
        }

        let mut to = vec![0; edges.len()];
        let mut weight = vec![0_u64; edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();

        for &(from, dst, w) in edges {
            let idx = cursor[from];
            cursor[from] += 1;
            to[idx] = dst;
            weight[idx] = w;
        }

        let index: HashMap<String, NodeId> = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        assert_eq!(index.len(), vertex_count, "node names must be unique");

        Self {
            names,
            index,
            offsets,
            to,
            weight,
        }
    }

    /// Parses a JSON object of objects, e.g. `{"A": {"B": 4}, "B": {"A": 4}}`.
    /// Nodes and neighbors keep their document order.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of stored adjacency entries (an undirected edge counts twice).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.to.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn require_node(&self, name: &str) -> Result<NodeId> {
        self.index_of(name).ok_or_else(|| GraphError::UnknownNode {
            node: name.to_owned(),
        })
    }

    #[inline]
    pub fn name(&self, v: NodeId) -> &str {
        &self.names[v]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[inline]
    pub fn neighbors(&self, v: NodeId) -> Neighbors<'_> {
        let start = self.offsets[v];
        let end = self.offsets[v + 1];
        Neighbors {
            to: &self.to[start..end],
            weight: &self.weight[start..end],
            idx: 0,
        }
    }

    /// Weight of the first stored `from -> to` entry.
    pub fn weight_between(&self, from: NodeId, to: NodeId) -> Option<u64> {
        self.neighbors(from)
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Each unordered node pair once, in discovery order: rows in declaration
    /// order, neighbors in row order. The first entry seen for a pair wins.
    pub fn undirected_edges(&self) -> Vec<(NodeId, NodeId, u64)> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for u in 0..self.node_count() {
            for edge in self.neighbors(u) {
                let key = (u.min(edge.to), u.max(edge.to));
                if seen.insert(key) {
                    edges.push((u, edge.to, edge.weight));
                }
            }
        }
        edges
    }

    /// Fails unless every `a -> b` entry has a reverse `b -> a` entry of equal weight.
    pub fn ensure_undirected(&self) -> Result<()> {
        for u in 0..self.node_count() {
            for edge in self.neighbors(u) {
                if self.weight_between(edge.to, u) != Some(edge.weight) {
                    return Err(GraphError::AsymmetricEdge {
                        from: self.names[u].clone(),
                        to: self.names[edge.to].clone(),
                        weight: edge.weight,
                    });
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<AdjacencyDocument> for WeightedGraph {
    type Error = GraphError;

    fn try_from(doc: AdjacencyDocument) -> Result<Self> {
        Self::from_adjacency(doc)
    }
}

pub struct Neighbors<'a> {
    to: &'a [NodeId],
    weight: &'a [u64],
    idx: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.to.len() {
            return None;
        }
        let edge = Edge {
            to: self.to[self.idx],
            weight: self.weight[self.idx],
        };
        self.idx += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.to.len() - self.idx;
        (remain, Some(remain))
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
