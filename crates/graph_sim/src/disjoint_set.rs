use crate::graph::NodeId;

/// Union-find over `0..n` with path compression and union by size.
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<NodeId>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {
    /// One singleton component per node.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn find(&mut self, x: NodeId) -> NodeId {
        let root = self.root(x);
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merges the components of `a` and `b`. Returns `false` when they were
    /// already the same component.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.components -= 1;
        true
    }

    #[inline]
    pub fn same_component(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Members of every component. Groups are ordered by their smallest member,
    /// members ascending.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut group_of_root = vec![usize::MAX; self.len()];
        let mut groups: Vec<Vec<NodeId>> = Vec::with_capacity(self.components);
        for v in 0..self.len() {
            let root = self.root(v);
            if group_of_root[root] == usize::MAX {
                group_of_root[root] = groups.len();
                groups.push(Vec::new());
            }
            groups[group_of_root[root]].push(v);
        }
        groups
    }

    fn root(&self, mut x: NodeId) -> NodeId {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }
}
