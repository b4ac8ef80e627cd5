//! Circular range queries over the PM quadtree.
//!
//! Both queries descend from the root and only enter children whose region
//! the query circle touches. Results come back sorted (cities by name, roads
//! by endpoint names) so the output never depends on insertion order.

use crate::compute::geometry::{circle_intersects_region, point_distance, point_to_segment_distance};
use crate::index::node::Node;
use geo::Point;
use pmquad_types::{City, Road};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Cities whose location lies within `radius` of `center` (boundary included).
///
/// A zero radius returns exactly the cities sitting on `center`.
pub fn cities_in_range(root: &Node, center: Point<f64>, radius: f64) -> Vec<Arc<City>> {
    let mut found = Vec::new();
    collect_cities(root, center, radius, &mut found);
    found.sort_by(|a, b| a.name().cmp(b.name()));
    found
}

fn collect_cities(node: &Node, center: Point<f64>, radius: f64, found: &mut Vec<Arc<City>>) {
    match node {
        Node::Empty => {}
        Node::Leaf(leaf) => {
            if let Some(city) = leaf.city()
                && point_distance(center, city.location()) <= radius
            {
                found.push(Arc::clone(city));
            }
        }
        Node::Internal(internal) => {
            for (_, child, region) in internal.children() {
                if circle_intersects_region(center, radius, region) {
                    collect_cities(child, center, radius, found);
                }
            }
        }
    }
}

/// Roads passing within `radius` of `center` (boundary included).
///
/// A road filed into several leaves is tested once per leaf but reported
/// once. Roads in `overhang` leave the universe and may touch the circle
/// only outside it, so they are tested directly.
pub fn roads_in_range(root: &Node, center: Point<f64>, radius: f64, overhang: &[Road]) -> Vec<Road> {
    let mut found = FxHashSet::default();
    for road in overhang {
        if point_to_segment_distance(center, &road.line()) <= radius {
            found.insert(road);
        }
    }
    collect_roads(root, center, radius, &mut found);
    let mut roads: Vec<Road> = found.into_iter().cloned().collect();
    roads.sort();
    roads
}

fn collect_roads<'a>(
    node: &'a Node,
    center: Point<f64>,
    radius: f64,
    found: &mut FxHashSet<&'a Road>,
) {
    match node {
        Node::Empty => {}
        Node::Leaf(leaf) => {
            for road in leaf.roads() {
                if !found.contains(road)
                    && point_to_segment_distance(center, &road.line()) <= radius
                {
                    found.insert(road);
                }
            }
        }
        Node::Internal(internal) => {
            for (_, child, region) in internal.children() {
                if circle_intersects_region(center, radius, region) {
                    collect_roads(child, center, radius, found);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::geometry::Region;

    fn universe() -> Region {
        Region::new(0.0, 0.0, 128.0, 128.0)
    }

    fn city(name: &str, x: f64, y: f64) -> Arc<City> {
        Arc::new(City::at(name, x, y))
    }

    fn names(cities: &[Arc<City>]) -> Vec<&str> {
        cities.iter().map(|c| c.name()).collect()
    }

    fn sample_tree() -> Node {
        let region = universe();
        [
            city("A", 10.0, 10.0),
            city("B", 100.0, 100.0),
            city("C", 10.0, 100.0),
        ]
        .into_iter()
        .fold(Node::Empty, |node, c| node.insert_city(c, &region))
    }

    #[test]
    fn test_cities_in_range() {
        let tree = sample_tree();
        let found = cities_in_range(&tree, Point::new(10.0, 50.0), 45.0);
        assert_eq!(names(&found), vec!["A", "C"]);
    }

    #[test]
    fn test_range_boundary_is_inclusive() {
        let tree = sample_tree();
        let found = cities_in_range(&tree, Point::new(10.0, 55.0), 45.0);
        assert_eq!(names(&found), vec!["A", "C"]);
        let found = cities_in_range(&tree, Point::new(10.0, 55.0), 44.99);
        assert!(found.is_empty());
    }

    #[test]
    fn test_zero_radius_matches_exact_location() {
        let tree = sample_tree();
        assert_eq!(
            names(&cities_in_range(&tree, Point::new(100.0, 100.0), 0.0)),
            vec!["B"]
        );
        assert!(cities_in_range(&tree, Point::new(100.0, 100.5), 0.0).is_empty());
    }

    #[test]
    fn test_empty_tree() {
        assert!(cities_in_range(&Node::Empty, Point::new(0.0, 0.0), 1000.0).is_empty());
        assert!(roads_in_range(&Node::Empty, Point::new(0.0, 0.0), 1000.0, &[]).is_empty());
    }

    #[test]
    fn test_roads_in_range_deduplicates() {
        let region = universe();
        let a = city("A", 10.0, 10.0);
        let b = city("B", 120.0, 10.0);
        let c = city("C", 10.0, 120.0);
        let ab = Road::new(a.clone(), b.clone());
        let ac = Road::new(a.clone(), c.clone());

        let tree = Node::Empty
            .insert_city(a, &region)
            .insert_city(b, &region)
            .insert_city(c, &region)
            .insert_road(ab.clone(), &region)
            .insert_road(ac.clone(), &region);

        // ab spans two leaves; it must still be reported once
        let found = roads_in_range(&tree, Point::new(64.0, 12.0), 5.0, &[]);
        assert_eq!(found, vec![ab.clone()]);

        let found = roads_in_range(&tree, Point::new(10.0, 10.0), 0.0, &[]);
        assert_eq!(found, vec![ab, ac]);
    }

    #[test]
    fn test_roads_out_of_reach() {
        let region = universe();
        let a = city("A", 10.0, 10.0);
        let b = city("B", 20.0, 10.0);
        let tree = Node::Empty
            .insert_city(a.clone(), &region)
            .insert_city(b.clone(), &region)
            .insert_road(Road::new(a, b), &region);
        assert!(roads_in_range(&tree, Point::new(100.0, 100.0), 20.0, &[]).is_empty());
    }

    #[test]
    fn test_overhanging_road_touched_outside_universe() {
        let region = universe();
        let inside = city("In", 100.0, 100.0);
        let outside = city("Out", 300.0, 12.0);
        let road = Road::new(inside.clone(), outside);
        let tree = Node::Empty
            .insert_city(city("X", 70.0, 120.0), &region)
            .insert_city(inside, &region)
            .insert_road(road.clone(), &region);

        assert!(roads_in_range(&tree, Point::new(300.0, 12.0), 0.0, &[]).is_empty());
        let overhang = [road.clone()];
        assert_eq!(roads_in_range(&tree, Point::new(300.0, 12.0), 0.0, &overhang), vec![road.clone()]);
        // found through the tree and the list, reported once
        assert_eq!(roads_in_range(&tree, Point::new(110.0, 95.0), 10.0, &overhang), vec![road]);
    }
}
