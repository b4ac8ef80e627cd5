//! The PM3 quadtree index over cities and roads.
//!
//! `PmQuadtree` owns the tree and the bookkeeping around it: the universe
//! rectangle, which city names are mapped (split into ordinary and isolated
//! partitions) and which roads are known. Every mutator checks all of its
//! preconditions before touching anything, so a failed call leaves the index
//! exactly as it was.

pub mod node;
pub mod stats;

pub use node::{Internal, Leaf, Node};
pub use stats::TreeStats;

use crate::compute::geometry::{Region, segment_intersects_region};
use crate::compute::validation::{validate_city, validate_extent, validate_point, validate_radius};
use crate::compute::{nearest, range};
use crate::config::Config;
use crate::error::{PmError, Result};
use geo::Point;
use pmquad_types::{City, Road, RoadKey};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::sync::Arc;

/// Spatial index of cities (points) and roads (segments).
#[derive(Debug, Clone)]
pub struct PmQuadtree {
    root: Node,
    universe: Region,
    /// Ordinary cities
    mapped: FxHashSet<String>,
    /// Cities with no road attached; disjoint from `mapped`
    isolated: FxHashSet<String>,
    roads: FxHashMap<RoadKey, Road>,
    /// Roads with an endpoint outside the closed universe
    overhang: Vec<Road>,
}

impl PmQuadtree {
    /// Create an empty index over the default 1024x1024 universe.
    pub fn new() -> Self {
        Self::from_region(Region::new(0.0, 0.0, 1024.0, 1024.0))
    }

    /// Create an empty index whose universe is described by `config`.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_region(Region::new(
            config.origin_x,
            config.origin_y,
            config.spatial_width,
            config.spatial_height,
        )))
    }

    fn from_region(universe: Region) -> Self {
        Self {
            root: Node::Empty,
            universe,
            mapped: FxHashSet::default(),
            isolated: FxHashSet::default(),
            roads: FxHashMap::default(),
            overhang: Vec::new(),
        }
    }

    /// Resize the universe, keeping its origin.
    ///
    /// Only allowed while the index is empty: features already filed would
    /// otherwise sit in regions that no longer match the tree.
    pub fn set_universe(&mut self, width: f64, height: f64) -> Result<()> {
        validate_extent(width, height)?;
        if !self.is_empty() {
            return Err(PmError::InvalidInput(
                "Cannot change the universe while features are mapped".to_string(),
            ));
        }
        self.universe = Region::new(self.universe.min_x(), self.universe.min_y(), width, height);
        Ok(())
    }

    pub fn universe(&self) -> &Region {
        &self.universe
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Map a city.
    ///
    /// Fails with `AlreadyMapped` when the name is taken or another city
    /// already sits at the same coordinates, and with `OutOfBounds` when the
    /// city falls outside the half-open universe.
    pub fn add_city(&mut self, city: Arc<City>) -> Result<()> {
        self.check_new_city(&city)?;
        self.insert_city(city);
        Ok(())
    }

    /// Map a city that has no road attached.
    pub fn add_isolated_city(&mut self, city: Arc<City>) -> Result<()> {
        self.check_new_city(&city)?;
        let name = city.name().to_string();
        self.root = std::mem::take(&mut self.root).insert_city(city, &self.universe);
        self.isolated.insert(name);
        Ok(())
    }

    /// Move a mapped city into the isolated partition.
    ///
    /// Returns `false` when no ordinary city has that name or the city
    /// already has a road attached.
    pub fn mark_isolated(&mut self, name: &str) -> bool {
        if !self.mapped.contains(name) || self.roads.values().any(|road| road.touches(name)) {
            return false;
        }
        self.mapped.remove(name);
        self.isolated.insert(name.to_string());
        true
    }

    /// Map a road between two cities.
    ///
    /// Endpoints lying inside the universe that are not mapped yet are mapped
    /// along with the road; isolated endpoints become ordinary. Fails with
    /// `AlreadyMapped` for a known road (in either direction) or an endpoint
    /// colliding with another city's coordinates, and with `OutOfBounds` when
    /// the segment misses the universe entirely.
    pub fn add_road(&mut self, start: Arc<City>, end: Arc<City>) -> Result<()> {
        validate_city(&start)?;
        validate_city(&end)?;
        if start.name() == end.name() {
            return Err(PmError::InvalidInput(format!(
                "Road endpoints must be distinct cities, got {} twice",
                start.name()
            )));
        }

        let road = Road::new(start, end);
        if self.roads.contains_key(&road.key()) {
            return Err(PmError::AlreadyMapped(format!("road {}", road)));
        }
        if !segment_intersects_region(&road.line(), &self.universe) {
            return Err(PmError::OutOfBounds(format!("road {}", road)));
        }

        let mut pending: SmallVec<[Arc<City>; 2]> = SmallVec::new();
        for city in road.endpoints() {
            if self.contains(city.name()) || !self.universe.contains_point(city.location()) {
                continue;
            }
            if let Some(other) = self.city_at(city.location()) {
                return Err(occupied(city, other));
            }
            if let Some(other) = pending.iter().find(|p| p.same_location(city)) {
                return Err(occupied(city, other));
            }
            pending.push(Arc::clone(city));
        }

        for city in pending {
            self.insert_city(city);
        }
        for city in road.endpoints() {
            if self.isolated.remove(city.name()) {
                self.mapped.insert(city.name().to_string());
            }
        }

        self.root = std::mem::take(&mut self.root).insert_road(road.clone(), &self.universe);
        if !self.universe.covers_segment(&road.line()) {
            self.overhang.push(road.clone());
        }
        self.roads.insert(road.key(), road);
        Ok(())
    }

    fn check_new_city(&self, city: &City) -> Result<()> {
        validate_city(city)?;
        if self.contains(city.name()) {
            return Err(PmError::AlreadyMapped(format!("city {}", city.name())));
        }
        if !self.universe.contains_point(city.location()) {
            return Err(PmError::OutOfBounds(format!(
                "city {} at ({}, {})",
                city.name(),
                city.x(),
                city.y()
            )));
        }
        if let Some(other) = self.city_at(city.location()) {
            return Err(occupied(city, other));
        }
        Ok(())
    }

    fn insert_city(&mut self, city: Arc<City>) {
        let name = city.name().to_string();
        self.root = std::mem::take(&mut self.root).insert_city(city, &self.universe);
        self.mapped.insert(name);
    }

    /// Whether a city with this name is mapped, isolated or not.
    pub fn contains(&self, name: &str) -> bool {
        self.mapped.contains(name) || self.isolated.contains(name)
    }

    pub fn is_isolated(&self, name: &str) -> bool {
        self.isolated.contains(name)
    }

    /// Whether a road between the two named cities is mapped, in either
    /// direction.
    pub fn contains_road(&self, a: &str, b: &str) -> bool {
        self.roads.contains_key(&RoadKey::new(a, b))
    }

    /// The city sitting exactly at `point`, if any.
    pub fn city_at(&self, point: Point<f64>) -> Option<&Arc<City>> {
        if !self.universe.contains_point(point) {
            return None;
        }
        self.root
            .locate(point)
            .and_then(Leaf::city)
            .filter(|city| city.location() == point)
    }

    /// Iterate over every mapped road, in no particular order.
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.values()
    }

    /// Cities within `radius` of `center`, boundary included, sorted by name.
    ///
    /// Both partitions are searched. Non-finite input or a negative radius
    /// yields an empty result.
    pub fn range_cities(&self, center: Point<f64>, radius: f64) -> Vec<Arc<City>> {
        if let Err(e) = validate_point(&center).and_then(|_| validate_radius(radius)) {
            log::warn!("Rejecting city range query: {}", e);
            return Vec::new();
        }
        range::cities_in_range(&self.root, center, radius)
    }

    /// Roads passing within `radius` of `center`, boundary included, sorted
    /// by endpoint names.
    pub fn range_roads(&self, center: Point<f64>, radius: f64) -> Vec<Road> {
        if let Err(e) = validate_point(&center).and_then(|_| validate_radius(radius)) {
            log::warn!("Rejecting road range query: {}", e);
            return Vec::new();
        }
        range::roads_in_range(&self.root, center, radius, &self.overhang)
    }

    /// Nearest ordinary city to `point`. Ties go to the smaller name.
    pub fn nearest_city(&self, point: Point<f64>) -> Option<Arc<City>> {
        if !self.has_cities() || !self.accepts_query_point(point) {
            return None;
        }
        nearest::nearest_city(&self.root, point, |city| self.mapped.contains(city.name())).cloned()
    }

    /// Nearest isolated city to `point`. Ties go to the smaller name.
    pub fn nearest_isolated_city(&self, point: Point<f64>) -> Option<Arc<City>> {
        if !self.has_isolated_cities() || !self.accepts_query_point(point) {
            return None;
        }
        nearest::nearest_city(&self.root, point, |city| self.isolated.contains(city.name()))
            .cloned()
    }

    /// Nearest road to `point`.
    pub fn nearest_road(&self, point: Point<f64>) -> Option<Road> {
        if self.roads.is_empty() || !self.accepts_query_point(point) {
            return None;
        }
        nearest::nearest_road(&self.root, point, &self.overhang).cloned()
    }

    fn accepts_query_point(&self, point: Point<f64>) -> bool {
        match validate_point(&point) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Rejecting nearest query: {}", e);
                false
            }
        }
    }

    /// Drop every feature. The universe is kept.
    pub fn clear(&mut self) {
        self.root = Node::Empty;
        self.mapped.clear();
        self.isolated.clear();
        self.roads.clear();
        self.overhang.clear();
    }

    /// Number of mapped cities, isolated ones included.
    pub fn len(&self) -> usize {
        self.mapped.len() + self.isolated.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.roads.is_empty()
    }

    /// Whether any ordinary city is mapped.
    pub fn has_cities(&self) -> bool {
        !self.mapped.is_empty()
    }

    pub fn has_isolated_cities(&self) -> bool {
        !self.isolated.is_empty()
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::collect(&self.root, &self.universe);
        stats.roads = self.roads.len();
        stats
    }
}

impl Default for PmQuadtree {
    fn default() -> Self {
        Self::new()
    }
}

fn occupied(city: &City, other: &City) -> PmError {
    PmError::AlreadyMapped(format!(
        "({}, {}) is taken by {}, cannot map {}",
        city.x(),
        city.y(),
        other.name(),
        city.name()
    ))
}
