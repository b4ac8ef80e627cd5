//! PM3 quadtree nodes and the insertion/subdivision protocol.
//!
//! Nodes are plain values: inserting into a node consumes it and returns the
//! node that should take its place. A leaf that has to split is replaced by a
//! fresh internal node at the point of reference, so no node ever needs a
//! pointer to its parent.

use crate::compute::geometry::{Quadrant, Region, segment_intersects_region};
use pmquad_types::{City, Road};
use smallvec::SmallVec;
use std::sync::Arc;

/// Roads filed into a single leaf. Most leaves see only a handful.
pub type LeafRoads = SmallVec<[Road; 4]>;

/// A node of the PM3 quadtree.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Region with nothing in it.
    #[default]
    Empty,
    /// At most one city plus every road crossing the leaf's region.
    Leaf(Leaf),
    /// Region split into four equal quadrants.
    Internal(Box<Internal>),
}

/// Contents of a leaf node.
#[derive(Debug, Clone, Default)]
pub struct Leaf {
    city: Option<Arc<City>>,
    roads: LeafRoads,
}

impl Leaf {
    fn with_city(city: Arc<City>) -> Self {
        Self {
            city: Some(city),
            roads: LeafRoads::new(),
        }
    }

    fn with_road(road: Road) -> Self {
        let mut roads = LeafRoads::new();
        roads.push(road);
        Self { city: None, roads }
    }

    pub fn city(&self) -> Option<&Arc<City>> {
        self.city.as_ref()
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Number of features held: the city (if any) plus the roads.
    pub fn cardinality(&self) -> usize {
        self.roads.len() + usize::from(self.city.is_some())
    }

    fn add_road(&mut self, road: Road) {
        if !self.roads.contains(&road) {
            self.roads.push(road);
        }
    }
}

/// An internal node: its region and four children in quadrant order.
#[derive(Debug, Clone)]
pub struct Internal {
    region: Region,
    child_regions: [Region; 4],
    children: [Node; 4],
}

impl Internal {
    fn new(region: Region) -> Self {
        Self {
            region,
            child_regions: region.quadrants(),
            children: Default::default(),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn child(&self, quadrant: Quadrant) -> &Node {
        &self.children[quadrant.index()]
    }

    pub fn child_region(&self, quadrant: Quadrant) -> &Region {
        &self.child_regions[quadrant.index()]
    }

    /// Children paired with their regions, in quadrant order.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &Node, &Region)> {
        Quadrant::ALL
            .into_iter()
            .map(move |q| (q, &self.children[q.index()], &self.child_regions[q.index()]))
    }

    fn insert_city(&mut self, city: Arc<City>) {
        let quadrant = self.region.quadrant_of(city.location());
        let i = quadrant.index();
        let child = std::mem::take(&mut self.children[i]);
        self.children[i] = child.insert_city(city, &self.child_regions[i]);
    }

    fn insert_road(&mut self, road: Road) {
        let line = road.line();
        for i in 0..4 {
            if segment_intersects_region(&line, &self.child_regions[i]) {
                let child = std::mem::take(&mut self.children[i]);
                self.children[i] = child.insert_road(road.clone(), &self.child_regions[i]);
            }
        }
    }
}

impl Node {
    /// Insert `city` into this node covering `region`, returning the node
    /// that replaces it.
    ///
    /// The caller guarantees the city lies inside `region` and that no other
    /// city already occupies the same coordinates.
    pub fn insert_city(self, city: Arc<City>, region: &Region) -> Node {
        match self {
            Node::Empty => Node::Leaf(Leaf::with_city(city)),
            Node::Leaf(mut leaf) => {
                if leaf.city.as_ref().is_none_or(|held| **held == *city) {
                    leaf.city = Some(city);
                    return Node::Leaf(leaf);
                }

                log::debug!(
                    "Splitting leaf at ({}, {}) {}x{} to admit city {}",
                    region.min_x(),
                    region.min_y(),
                    region.width(),
                    region.height(),
                    city.name()
                );

                let mut internal = Internal::new(*region);
                if let Some(held) = leaf.city.take() {
                    internal.insert_city(held);
                }
                internal.insert_city(city);
                for road in leaf.roads {
                    internal.insert_road(road);
                }
                Node::Internal(Box::new(internal))
            }
            Node::Internal(mut internal) => {
                internal.insert_city(city);
                Node::Internal(internal)
            }
        }
    }

    /// File `road` into this node covering `region`, returning the node that
    /// replaces it. Internal nodes pass the road to every child whose region
    /// it crosses; the road itself is never cut.
    pub fn insert_road(self, road: Road, region: &Region) -> Node {
        match self {
            Node::Empty => Node::Leaf(Leaf::with_road(road)),
            Node::Leaf(mut leaf) => {
                leaf.add_road(road);
                Node::Leaf(leaf)
            }
            Node::Internal(mut internal) => {
                debug_assert_eq!(internal.region, *region);
                internal.insert_road(road);
                Node::Internal(internal)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_internal(&self) -> Option<&Internal> {
        match self {
            Node::Internal(internal) => Some(internal),
            _ => None,
        }
    }

    /// The leaf whose region owns `point`, if that region is not empty.
    pub fn locate(&self, point: geo::Point<f64>) -> Option<&Leaf> {
        let mut node = self;
        loop {
            match node {
                Node::Empty => return None,
                Node::Leaf(leaf) => return Some(leaf),
                Node::Internal(internal) => {
                    node = internal.child(internal.region.quadrant_of(point));
                }
            }
        }
    }

    /// Pre-order traversal. The visitor receives each node, the region it
    /// covers and its depth (the root is depth 0).
    pub fn walk<F>(&self, region: &Region, visitor: &mut F)
    where
        F: FnMut(&Node, &Region, usize),
    {
        self.walk_at(region, 0, visitor);
    }

    fn walk_at<F>(&self, region: &Region, depth: usize, visitor: &mut F)
    where
        F: FnMut(&Node, &Region, usize),
    {
        visitor(self, region, depth);
        if let Node::Internal(internal) = self {
            for (_, child, child_region) in internal.children() {
                child.walk_at(child_region, depth + 1, visitor);
            }
        }
    }
}
