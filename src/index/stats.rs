use crate::compute::geometry::Region;
use crate::index::node::Node;
use serde::{Deserialize, Serialize};

/// Structural statistics of a PM quadtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of empty nodes
    pub empty_nodes: usize,
    /// Number of leaves (with or without a city)
    pub leaf_nodes: usize,
    /// Number of internal nodes
    pub internal_nodes: usize,
    /// Depth of the deepest node; the root is at depth 0
    pub max_depth: usize,
    /// Cities held by leaves
    pub cities: usize,
    /// Distinct roads mapped
    pub roads: usize,
    /// Road references across all leaves; a road crossing several leaves
    /// counts once per leaf
    pub road_entries: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the tree rooted at `root` and tally its nodes.
    ///
    /// `roads` is left at zero: distinct roads are known to the owning index,
    /// not to the tree.
    pub fn collect(root: &Node, region: &Region) -> Self {
        let mut stats = Self::new();
        root.walk(region, &mut |node, _, depth| stats.record_node(node, depth));
        stats
    }

    pub fn total_nodes(&self) -> usize {
        self.empty_nodes + self.leaf_nodes + self.internal_nodes
    }

    fn record_node(&mut self, node: &Node, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match node {
            Node::Empty => self.empty_nodes += 1,
            Node::Leaf(leaf) => {
                self.leaf_nodes += 1;
                self.cities += usize::from(leaf.city().is_some());
                self.road_entries += leaf.roads().len();
            }
            Node::Internal(_) => self.internal_nodes += 1,
        }
    }
}
