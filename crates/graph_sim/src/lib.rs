//! Step-by-step shortest path and spanning tree engines over named, weighted graphs.
//!
//! Every engine is available two ways: a plain function that runs to completion
//! ([`dijkstra`], [`prim`], [`kruskal`]) and a `*Run` iterator that yields one
//! serializable snapshot per algorithmic step for narration or rendering.
//!
//! Edge weights are `u64`; path lengths and tree totals are `u128`, so sums
//! never overflow.

mod dijkstra;
mod disjoint_set;
mod error;
pub mod fixtures;
mod frontier;
pub mod generator;
pub mod graph;
mod kruskal;
mod prim;
mod tree;

pub use dijkstra::{DijkstraEvent, DijkstraRun, DijkstraStep, Relaxation, ShortestPaths, dijkstra};
pub use disjoint_set::DisjointSetForest;
pub use error::{GraphError, Result};
pub use frontier::Frontier;
pub use graph::{NodeId, WeightedGraph};
pub use kruskal::{KruskalEvent, KruskalRun, KruskalStep, TreeKind, kruskal};
pub use prim::{PrimEvent, PrimRun, PrimStep, prim};
pub use tree::{SpanningTree, TreeEdge};
