use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TreeEdge<'g> {
    pub a: &'g str,
    pub b: &'g str,
    pub weight: u64,
}

impl fmt::Display for TreeEdge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (weight {})", self.a, self.b, self.weight)
    }
}

/// Accepted edges in acceptance order plus their running total.
///
/// The total is widened to `u128`: at most `n - 1` edges of at most `u64::MAX`
/// each always fit.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SpanningTree<'g> {
    pub edges: Vec<TreeEdge<'g>>,
    pub total_weight: u128,
}

impl<'g> SpanningTree<'g> {
    pub(crate) fn accept(&mut self, edge: TreeEdge<'g>) {
        self.total_weight += u128::from(edge.weight);
        self.edges.push(edge);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the edges connect `node_count` nodes, i.e. there are exactly
    /// `node_count - 1` of them. An empty graph is trivially spanned.
    pub fn spans(&self, node_count: usize) -> bool {
        self.edges.len() + 1 == node_count.max(1)
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|e| (e.a == a && e.b == b) || (e.a == b && e.b == a))
    }
}
