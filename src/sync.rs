//! Thread-safe wrapper for concurrent index access.
//!
//! `SyncPmQuadtree` wraps a `PmQuadtree` in `Arc<RwLock<_>>` so it can be
//! shared between threads: queries take the read lock, mutators take the
//! write lock.
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! pmquad = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pmquad::{City, Point, SyncPmQuadtree};
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = SyncPmQuadtree::default();
//!
//! let writer = index.clone();
//! let handle = thread::spawn(move || {
//!     writer.add_city(Arc::new(City::at("Ashford", 10.0, 10.0))).unwrap();
//! });
//! handle.join().unwrap();
//!
//! let nearest = index.nearest_city(Point::new(0.0, 0.0));
//! assert_eq!(nearest.unwrap().name(), "Ashford");
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::index::{PmQuadtree, TreeStats};
use geo::Point;
use parking_lot::RwLock;
use pmquad_types::{City, Road};
use std::sync::Arc;

/// Thread-safe handle to a `PmQuadtree`.
///
/// Cloning is cheap and every clone refers to the same index. Multiple
/// threads can query at once; a mutation waits for exclusive access.
#[derive(Clone, Default)]
pub struct SyncPmQuadtree {
    inner: Arc<RwLock<PmQuadtree>>,
}

impl SyncPmQuadtree {
    pub fn new(index: PmQuadtree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    // ===== Mutators =====

    pub fn set_universe(&self, width: f64, height: f64) -> Result<()> {
        self.inner.write().set_universe(width, height)
    }

    pub fn add_city(&self, city: Arc<City>) -> Result<()> {
        self.inner.write().add_city(city)
    }

    pub fn add_isolated_city(&self, city: Arc<City>) -> Result<()> {
        self.inner.write().add_isolated_city(city)
    }

    pub fn mark_isolated(&self, name: &str) -> bool {
        self.inner.write().mark_isolated(name)
    }

    pub fn add_road(&self, start: Arc<City>, end: Arc<City>) -> Result<()> {
        self.inner.write().add_road(start, end)
    }

    pub fn clear(&self) {
        self.inner.write().clear()
    }

    // ===== Queries =====

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    pub fn is_isolated(&self, name: &str) -> bool {
        self.inner.read().is_isolated(name)
    }

    pub fn contains_road(&self, a: &str, b: &str) -> bool {
        self.inner.read().contains_road(a, b)
    }

    pub fn city_at(&self, point: Point<f64>) -> Option<Arc<City>> {
        self.inner.read().city_at(point).cloned()
    }

    pub fn range_cities(&self, center: Point<f64>, radius: f64) -> Vec<Arc<City>> {
        self.inner.read().range_cities(center, radius)
    }

    pub fn range_roads(&self, center: Point<f64>, radius: f64) -> Vec<Road> {
        self.inner.read().range_roads(center, radius)
    }

    pub fn nearest_city(&self, point: Point<f64>) -> Option<Arc<City>> {
        self.inner.read().nearest_city(point)
    }

    pub fn nearest_isolated_city(&self, point: Point<f64>) -> Option<Arc<City>> {
        self.inner.read().nearest_isolated_city(point)
    }

    pub fn nearest_road(&self, point: Point<f64>) -> Option<Road> {
        self.inner.read().nearest_road(point)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> TreeStats {
        self.inner.read().stats()
    }

    /// Run `f` with shared access to the underlying index, for traversals
    /// that need the tree itself.
    pub fn read<R>(&self, f: impl FnOnce(&PmQuadtree) -> R) -> R {
        f(&self.inner.read())
    }
}
