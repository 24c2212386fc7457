use thiserror::Error;

/// Structural problems with a graph or with the node names handed to an engine.
///
/// All of these are reported before an engine takes its first step.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node `{node}` lists neighbor `{neighbor}`, which is not a node of the graph")]
    DanglingNeighbor { node: String, neighbor: String },

    #[error("node `{node}` is declared more than once")]
    DuplicateNode { node: String },

    #[error("unknown node `{node}`")]
    UnknownNode { node: String },

    #[error("edge `{from}` -> `{to}` (weight {weight}) has no matching reverse edge")]
    AsymmetricEdge {
        from: String,
        to: String,
        weight: u64,
    },

    #[error("invalid graph document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
