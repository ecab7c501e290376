//! Incrementally built, transitively reduced partial order.

use std::collections::BTreeSet;
use std::fmt;
use std::io;

use tracing::trace;

use crate::dag::{Dag, NodeId};
use crate::dot::{quote, DotStyle};
use crate::order::{PartialOrder, RelationshipEvaluator};

/// A set of elements kept as the Hasse diagram of a caller-supplied
/// partial order.
///
/// An edge `a -> b` means `rel(a, b) == LessThan` with no inserted element
/// strictly between them at the time the edge was created. Roots are the
/// minimal elements, leaves the maximal ones. Elements comparing `Equal`
/// to an inserted element are not stored twice.
///
/// Queries about an element that was never inserted answer as if it had
/// no node: empty neighbourhoods, everything is a non-descendant.
/// [`greatest_lower_bound_of`](Self::greatest_lower_bound_of) and
/// [`least_upper_bound_of`](Self::least_upper_bound_of) work for any
/// element.
pub struct PartiallyOrderedSet<T, R> {
    rel: R,
    dag: Dag<T>,
}

impl<T, R> PartiallyOrderedSet<T, R>
where
    R: RelationshipEvaluator<T>,
{
    pub fn new(rel: R) -> Self {
        PartiallyOrderedSet {
            rel,
            dag: Dag::default(),
        }
    }

    /// Inserts `x`, rewiring the edges around it. Returns `false` when an
    /// equal element is already present.
    pub fn insert(&mut self, x: T) -> bool {
        let glb = self.glb_ids(&x);
        let lub = self.lub_ids(&x);
        if !glb.is_empty() && glb == lub {
            trace!(size = self.dag.len(), "equal element present, insert skipped");
            return false;
        }
        let id = self.dag.add_node(x);
        match (glb.is_empty(), lub.is_empty()) {
            (true, true) => {
                trace!(node = id.index(), "inserted isolated node");
            }
            (true, false) => {
                for &c in &lub {
                    self.dag.add_edge(id, c);
                }
                trace!(node = id.index(), upper = lub.len(), "inserted below upper bounds");
            }
            (false, true) => {
                for &p in &glb {
                    self.dag.add_edge(p, id);
                }
                trace!(node = id.index(), lower = glb.len(), "inserted above lower bounds");
            }
            (false, false) => {
                for &p in &glb {
                    for &c in &lub {
                        self.dag.insert_node_along_edge(p, id, c);
                    }
                }
                trace!(
                    node = id.index(),
                    lower = glb.len(),
                    upper = lub.len(),
                    "spliced node between bounds"
                );
            }
        }
        true
    }

    pub fn contains(&self, x: &T) -> bool {
        self.find(x).is_some()
    }

    pub fn size(&self) -> usize {
        self.dag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dag.len() == 0
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.dag.ids().map(|id| self.dag.node(id))
    }

    /// Minimal elements.
    pub fn root_nodes(&self) -> Vec<&T> {
        self.values(self.dag.roots())
    }

    /// Maximal elements.
    pub fn leaf_nodes(&self) -> Vec<&T> {
        self.values(self.dag.leaves())
    }

    /// Every element with its direct successors.
    pub fn child_map(&self) -> Vec<(&T, Vec<&T>)> {
        self.dag
            .ids()
            .map(|id| (self.dag.node(id), self.values(self.dag.children(id).iter().copied())))
            .collect()
    }

    /// Every element with its direct predecessors.
    pub fn parent_map(&self) -> Vec<(&T, Vec<&T>)> {
        self.dag
            .ids()
            .map(|id| (self.dag.node(id), self.values(self.dag.parents(id).iter().copied())))
            .collect()
    }

    pub fn children_of(&self, x: &T) -> Vec<&T> {
        self.find(x)
            .map(|id| self.values(self.dag.children(id).iter().copied()))
            .unwrap_or_default()
    }

    pub fn parents_of(&self, x: &T) -> Vec<&T> {
        self.find(x)
            .map(|id| self.values(self.dag.parents(id).iter().copied()))
            .unwrap_or_default()
    }

    pub fn descendants_of(&self, x: &T, include_self: bool) -> Vec<&T> {
        self.closure(x, include_self, Dag::descendants)
    }

    pub fn ancestors_of(&self, x: &T, include_self: bool) -> Vec<&T> {
        self.closure(x, include_self, Dag::ancestors)
    }

    pub fn nondescendants_of(&self, x: &T, include_self: bool) -> Vec<&T> {
        self.complement(x, include_self, Dag::descendants)
    }

    pub fn nonancestors_of(&self, x: &T, include_self: bool) -> Vec<&T> {
        self.complement(x, include_self, Dag::ancestors)
    }

    /// The tightest inserted lower bounds of `x`; `x` itself when present.
    pub fn greatest_lower_bound_of(&self, x: &T) -> Vec<&T> {
        self.values(self.glb_ids(x).into_iter())
    }

    /// The tightest inserted upper bounds of `x`; `x` itself when present.
    pub fn least_upper_bound_of(&self, x: &T) -> Vec<&T> {
        self.values(self.lub_ids(x).into_iter())
    }

    /// Covering pairs `(lower, upper)`.
    pub fn edges(&self) -> Vec<(&T, &T)> {
        self.dag
            .edges()
            .map(|(a, b)| (self.dag.node(a), self.dag.node(b)))
            .collect()
    }

    /// Writes the diagram as a Graphviz digraph named `name`.
    pub fn print_dot_graph<W: io::Write>(&self, out: &mut W, name: &str) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.print_dot_graph_styled(out, name, &DotStyle::default())
    }

    pub fn print_dot_graph_styled<W: io::Write>(
        &self,
        out: &mut W,
        name: &str,
        style: &DotStyle,
    ) -> io::Result<()>
    where
        T: fmt::Display,
    {
        writeln!(out, "digraph {} {{", quote(name))?;
        writeln!(out, "    rankdir={};", style.rankdir.as_str())?;
        writeln!(out, "    node [shape={}];", quote(&style.node_shape))?;
        for id in self.dag.ids() {
            let label = self.dag.node(id).to_string();
            writeln!(out, "    n{} [label={}];", id.index(), quote(&label))?;
        }
        for (a, b) in self.dag.edges() {
            writeln!(out, "    n{} -> n{};", a.index(), b.index())?;
        }
        writeln!(out, "}}")
    }

    fn find(&self, x: &T) -> Option<NodeId> {
        self.dag
            .ids()
            .find(|&id| (self.rel)(self.dag.node(id), x) == PartialOrder::Equal)
    }

    fn values(&self, ids: impl Iterator<Item = NodeId>) -> Vec<&T> {
        ids.map(|id| self.dag.node(id)).collect()
    }

    fn closure(
        &self,
        x: &T,
        include_self: bool,
        reach: fn(&Dag<T>, NodeId) -> BTreeSet<NodeId>,
    ) -> Vec<&T> {
        let Some(id) = self.find(x) else {
            return Vec::new();
        };
        let mut ids = reach(&self.dag, id);
        if include_self {
            ids.insert(id);
        }
        self.values(ids.into_iter())
    }

    fn complement(
        &self,
        x: &T,
        include_self: bool,
        reach: fn(&Dag<T>, NodeId) -> BTreeSet<NodeId>,
    ) -> Vec<&T> {
        let Some(id) = self.find(x) else {
            return self.iter().collect();
        };
        let reached = reach(&self.dag, id);
        let ids = self
            .dag
            .ids()
            .filter(|n| !reached.contains(n) && (include_self || *n != id));
        self.values(ids)
    }

    /// Depth-first from the roots through nodes that are `<= x`; a node is
    /// kept when none of its children is.
    fn glb_ids(&self, x: &T) -> BTreeSet<NodeId> {
        let below = |id: NodeId| (self.rel)(self.dag.node(id), x).is_le();
        let roots = self.dag.roots().filter(|&r| below(r)).collect();
        self.tighten(roots, below, Dag::children)
    }

    /// Depth-first from the leaves through nodes that are `>= x`.
    fn lub_ids(&self, x: &T) -> BTreeSet<NodeId> {
        let above = |id: NodeId| (self.rel)(x, self.dag.node(id)).is_le();
        let leaves = self.dag.leaves().filter(|&l| above(l)).collect();
        self.tighten(leaves, above, Dag::parents)
    }

    fn tighten(
        &self,
        mut stack: Vec<NodeId>,
        bounds: impl Fn(NodeId) -> bool,
        next: fn(&Dag<T>, NodeId) -> &BTreeSet<NodeId>,
    ) -> BTreeSet<NodeId> {
        let mut seen = vec![false; self.dag.len()];
        let mut out = BTreeSet::new();
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            let before = stack.len();
            stack.extend(next(&self.dag, id).iter().copied().filter(|&n| bounds(n)));
            if stack.len() == before {
                out.insert(id);
            }
        }
        out
    }
}

impl<T, R> Extend<T> for PartiallyOrderedSet<T, R>
where
    R: RelationshipEvaluator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for PartiallyOrderedSet<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<_> = self
            .dag
            .edges()
            .map(|(a, b)| (self.dag.node(a), self.dag.node(b)))
            .collect();
        f.debug_struct("PartiallyOrderedSet")
            .field("size", &self.dag.len())
            .field("edges", &edges)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{compare_total, divides, subset};

    fn sorted<T: Ord + Copy>(v: Vec<&T>) -> Vec<T> {
        let mut v: Vec<T> = v.into_iter().copied().collect();
        v.sort();
        v
    }

    #[test]
    fn empty_set() {
        let p = PartiallyOrderedSet::new(divides);
        assert!(p.is_empty());
        assert!(p.root_nodes().is_empty());
        assert!(p.greatest_lower_bound_of(&4).is_empty());
        assert!(p.least_upper_bound_of(&4).is_empty());
    }

    #[test]
    fn chain_under_a_total_order() {
        let mut p = PartiallyOrderedSet::new(compare_total::<i32>);
        p.extend([5, 1, 3, 4, 2]);
        let mut edges: Vec<(i32, i32)> = p.edges().into_iter().map(|(a, b)| (*a, *b)).collect();
        edges.sort();
        assert_eq!(edges, vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
        assert_eq!(sorted(p.root_nodes()), vec![1]);
        assert_eq!(sorted(p.leaf_nodes()), vec![5]);
    }

    #[test]
    fn equal_insert_is_a_no_op() {
        let mut p = PartiallyOrderedSet::new(divides);
        assert!(p.insert(6));
        assert!(!p.insert(6));
        assert_eq!(p.size(), 1);
        assert!(p.contains(&6));
        assert!(!p.contains(&3));
    }

    #[test]
    fn bounds_of_absent_elements() {
        let mut p = PartiallyOrderedSet::new(divides);
        p.extend([2, 3, 12]);
        assert_eq!(sorted(p.greatest_lower_bound_of(&6)), vec![2, 3]);
        assert_eq!(sorted(p.least_upper_bound_of(&6)), vec![12]);
        assert_eq!(sorted(p.greatest_lower_bound_of(&12)), vec![12]);
        assert!(p.greatest_lower_bound_of(&5).is_empty());
    }

    #[test]
    fn closures_and_complements() {
        let mut p = PartiallyOrderedSet::new(divides);
        p.extend([2, 3, 4, 6, 12]);
        assert_eq!(sorted(p.descendants_of(&2, false)), vec![4, 6, 12]);
        assert_eq!(sorted(p.descendants_of(&2, true)), vec![2, 4, 6, 12]);
        assert_eq!(sorted(p.ancestors_of(&6, false)), vec![2, 3]);
        assert_eq!(sorted(p.nondescendants_of(&2, false)), vec![3]);
        assert_eq!(sorted(p.nondescendants_of(&2, true)), vec![2, 3]);
        assert_eq!(sorted(p.nonancestors_of(&4, false)), vec![3, 6, 12]);
        assert!(p.descendants_of(&7, true).is_empty());
        assert_eq!(p.nondescendants_of(&7, false).len(), 5);
    }

    #[test]
    fn neighbourhood_maps() {
        let mut p = PartiallyOrderedSet::new(divides);
        p.extend([2, 4, 8]);
        assert_eq!(sorted(p.children_of(&2)), vec![4]);
        assert_eq!(sorted(p.parents_of(&8)), vec![4]);
        let children: Vec<(u64, usize)> =
            p.child_map().into_iter().map(|(n, c)| (*n, c.len())).collect();
        assert_eq!(children, vec![(2, 1), (4, 1), (8, 0)]);
        let parents: Vec<(u64, usize)> =
            p.parent_map().into_iter().map(|(n, c)| (*n, c.len())).collect();
        assert_eq!(parents, vec![(2, 0), (4, 1), (8, 1)]);
    }

    #[test]
    fn subsets_form_a_diamond() {
        let mut p = PartiallyOrderedSet::new(subset::<char>);
        p.insert(BTreeSet::new());
        p.insert(BTreeSet::from(['a', 'b']));
        p.insert(BTreeSet::from(['a']));
        p.insert(BTreeSet::from(['b']));
        assert_eq!(p.edges().len(), 4);
        assert_eq!(p.root_nodes(), vec![&BTreeSet::new()]);
    }

    #[test]
    fn dot_output_lists_nodes_and_edges_once() {
        let mut p = PartiallyOrderedSet::new(divides);
        p.extend([2, 4]);
        let mut buf = Vec::new();
        p.print_dot_graph(&mut buf, "div").unwrap();
        let dot = String::from_utf8(buf).unwrap();
        assert!(dot.starts_with("digraph \"div\" {\n"));
        assert!(dot.contains("    n0 [label=\"2\"];\n"));
        assert!(dot.contains("    n1 [label=\"4\"];\n"));
        assert_eq!(dot.matches("n0 -> n1;").count(), 1);
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn debug_lists_edges() {
        let mut p = PartiallyOrderedSet::new(divides);
        p.extend([3, 9]);
        assert_eq!(
            format!("{p:?}"),
            "PartiallyOrderedSet { size: 2, edges: [(3, 9)] }"
        );
    }
}
