//! Arena-backed directed acyclic graph used by the poset.

use std::collections::BTreeSet;

/// Index of a node in its [`Dag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Dag<T> {
    nodes: Vec<T>,
    children: Vec<BTreeSet<NodeId>>,
    parents: Vec<BTreeSet<NodeId>>,
}

impl<T> Default for Dag<T> {
    fn default() -> Self {
        Dag {
            nodes: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
        }
    }
}

impl<T> Dag<T> {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(value);
        self.children.push(BTreeSet::new());
        self.parents.push(BTreeSet::new());
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &T {
        &self.nodes[id.0]
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Adds `from -> to`. Self-loops are ignored; returns whether the edge
    /// is new.
    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        if from == to {
            return false;
        }
        self.parents[to.0].insert(from);
        self.children[from.0].insert(to)
    }

    pub(crate) fn remove_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        self.parents[to.0].remove(&from);
        self.children[from.0].remove(&to)
    }

    /// Replaces `from -> to` by `from -> mid -> to`.
    pub(crate) fn insert_node_along_edge(&mut self, from: NodeId, mid: NodeId, to: NodeId) {
        self.remove_edge(from, to);
        self.add_edge(from, mid);
        self.add_edge(mid, to);
    }

    pub(crate) fn children(&self, id: NodeId) -> &BTreeSet<NodeId> {
        &self.children[id.0]
    }

    pub(crate) fn parents(&self, id: NodeId) -> &BTreeSet<NodeId> {
        &self.parents[id.0]
    }

    pub(crate) fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|id| self.parents[id.0].is_empty())
    }

    pub(crate) fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|id| self.children[id.0].is_empty())
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.ids()
            .flat_map(move |from| self.children[from.0].iter().map(move |&to| (from, to)))
    }

    /// Nodes reachable from `start` through child edges, excluding `start`.
    pub(crate) fn descendants(&self, start: NodeId) -> BTreeSet<NodeId> {
        self.reach(start, &self.children)
    }

    /// Nodes reachable from `start` through parent edges, excluding `start`.
    pub(crate) fn ancestors(&self, start: NodeId) -> BTreeSet<NodeId> {
        self.reach(start, &self.parents)
    }

    fn reach(&self, start: NodeId, adjacency: &[BTreeSet<NodeId>]) -> BTreeSet<NodeId> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<NodeId> = adjacency[start.0].iter().copied().collect();
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(adjacency[id.0].iter().copied());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (Dag<&'static str>, NodeId, NodeId, NodeId) {
        let mut dag = Dag::default();
        let a = dag.add_node("a");
        let b = dag.add_node("b");
        let c = dag.add_node("c");
        dag.add_edge(a, b);
        dag.add_edge(b, c);
        (dag, a, b, c)
    }

    #[test]
    fn edges_keep_both_directions() {
        let (dag, a, b, c) = chain();
        assert!(dag.children(a).contains(&b));
        assert!(dag.parents(c).contains(&b));
        assert_eq!(dag.roots().collect::<Vec<_>>(), vec![a]);
        assert_eq!(dag.leaves().collect::<Vec<_>>(), vec![c]);
        assert_eq!(dag.edges().count(), 2);
    }

    #[test]
    fn self_loops_are_ignored() {
        let (mut dag, a, _, _) = chain();
        assert!(!dag.add_edge(a, a));
        assert!(!dag.children(a).contains(&a));
    }

    #[test]
    fn splicing_replaces_the_edge() {
        let (mut dag, a, b, _) = chain();
        let m = dag.add_node("m");
        dag.insert_node_along_edge(a, m, b);
        assert!(!dag.children(a).contains(&b));
        assert!(dag.children(a).contains(&m));
        assert!(dag.children(m).contains(&b));
        assert!(!dag.parents(b).contains(&a));
    }

    #[test]
    fn reachability() {
        let (dag, a, b, c) = chain();
        assert_eq!(dag.descendants(a), [b, c].into());
        assert_eq!(dag.ancestors(c), [a, b].into());
        assert!(dag.descendants(c).is_empty());
        assert_eq!(*dag.node(b), "b");
        assert_eq!(b.index(), 1);
    }
}
