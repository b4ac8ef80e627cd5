//! Best-first nearest-feature search.
//!
//! A min-heap holds internal nodes keyed by the distance from the query point
//! to their region (a lower bound on anything inside) and concrete features
//! keyed by their exact distance. The first feature popped is the answer:
//! nothing left in the heap can be closer.
//!
//! Equal keys are ordered so the result is reproducible:
//! - a region pops before a feature, so a feature is never reported while an
//!   equally distant region could still hold a better-named one;
//! - two cities pop in ascending name order, two roads in ascending
//!   endpoint-name order;
//! - two regions pop in the order they were pushed.

use crate::compute::geometry::{point_distance, point_to_region_distance, point_to_segment_distance};
use crate::index::node::{Internal, Leaf, Node};
use geo::Point;
use pmquad_types::{City, Road};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;

enum Candidate<'a> {
    Region(&'a Internal),
    City(&'a Arc<City>),
    Road(&'a Road),
}

impl Candidate<'_> {
    fn rank(&self) -> u8 {
        match self {
            Candidate::Region(_) => 0,
            Candidate::City(_) | Candidate::Road(_) => 1,
        }
    }
}

struct QueueEntry<'a> {
    distance: f64,
    sequence: usize,
    candidate: Candidate<'a>,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry<'_> {
    /// Smaller entries are expanded first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.candidate.rank().cmp(&other.candidate.rank()))
            .then_with(|| match (&self.candidate, &other.candidate) {
                (Candidate::City(a), Candidate::City(b)) => a.name().cmp(b.name()),
                (Candidate::Road(a), Candidate::Road(b)) => a.cmp(b),
                _ => self.sequence.cmp(&other.sequence),
            })
    }
}

struct BestFirst<'a> {
    point: Point<f64>,
    queue: BinaryHeap<Reverse<QueueEntry<'a>>>,
    sequence: usize,
}

impl<'a> BestFirst<'a> {
    fn new(point: Point<f64>) -> Self {
        Self {
            point,
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }

    fn push(&mut self, distance: f64, candidate: Candidate<'a>) {
        self.queue.push(Reverse(QueueEntry {
            distance,
            sequence: self.sequence,
            candidate,
        }));
        self.sequence += 1;
    }

    /// Internal nodes are queued by region distance; leaves hand their
    /// eligible features to `visit_leaf`; empty nodes are dropped.
    fn enqueue<L>(&mut self, node: &'a Node, visit_leaf: &mut L)
    where
        L: FnMut(&'a Leaf, &mut Self),
    {
        match node {
            Node::Empty => {}
            Node::Leaf(leaf) => visit_leaf(leaf, self),
            Node::Internal(internal) => {
                let distance = point_to_region_distance(self.point, internal.region());
                self.push(distance, Candidate::Region(internal));
            }
        }
    }

    fn run<L>(mut self, root: &'a Node, mut visit_leaf: L) -> Option<Candidate<'a>>
    where
        L: FnMut(&'a Leaf, &mut Self),
    {
        self.enqueue(root, &mut visit_leaf);
        while let Some(Reverse(entry)) = self.queue.pop() {
            match entry.candidate {
                Candidate::Region(internal) => {
                    for (_, child, _) in internal.children() {
                        self.enqueue(child, &mut visit_leaf);
                    }
                }
                feature => return Some(feature),
            }
        }
        None
    }
}

/// Nearest city to `point` among those accepted by `in_partition`.
///
/// Leaves whose city is rejected are never queued, so the search behaves as
/// if only the accepted cities were in the tree.
pub fn nearest_city<'a, P>(root: &'a Node, point: Point<f64>, in_partition: P) -> Option<&'a Arc<City>>
where
    P: Fn(&City) -> bool,
{
    let found = BestFirst::new(point).run(root, |leaf, search| {
        if let Some(city) = leaf.city()
            && in_partition(city.as_ref())
        {
            let distance = point_distance(search.point, city.location());
            search.push(distance, Candidate::City(city));
        }
    });

    match found {
        Some(Candidate::City(city)) => Some(city),
        _ => None,
    }
}

/// Nearest road to `point`, measured to the closest point of each segment.
///
/// Region distance only bounds roads that stay inside the universe. Roads in
/// `overhang` leave it, so their nearest point may lie outside every region;
/// they are queued up front at their exact distance.
pub fn nearest_road<'a>(root: &'a Node, point: Point<f64>, overhang: &'a [Road]) -> Option<&'a Road> {
    let mut search = BestFirst::new(point);
    for road in overhang {
        let distance = point_to_segment_distance(point, &road.line());
        search.push(distance, Candidate::Road(road));
    }

    let found = search.run(root, |leaf, search| {
        for road in leaf.roads() {
            let distance = point_to_segment_distance(search.point, &road.line());
            search.push(distance, Candidate::Road(road));
        }
    });

    match found {
        Some(Candidate::Road(road)) => Some(road),
        _ => None,
    }
}
