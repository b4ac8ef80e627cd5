//! PM3 quadtree index for road maps: cities (points) joined by roads
//! (segments) inside a fixed rectangular universe.
//!
//! ## Features
//! - **PM3 subdivision**: every leaf holds at most one city plus any number
//!   of roads crossing its region
//! - **Range search**: cities and roads within a radius, boundary included
//! - **Nearest search**: best-first nearest city (ordinary or isolated) and
//!   nearest road, with deterministic tie-breaking
//! - **Thread-safe wrapper**: `SyncPmQuadtree` (with the `sync` feature)
//!
//! ```rust
//! use pmquad::{City, PmQuadtree, Point};
//! use std::sync::Arc;
//!
//! let mut index = PmQuadtree::new();
//! index.set_universe(128.0, 128.0)?;
//!
//! index.add_city(Arc::new(City::at("A", 10.0, 10.0)))?;
//! index.add_city(Arc::new(City::at("B", 100.0, 100.0)))?;
//! index.add_road(
//!     Arc::new(City::at("C", 10.0, 100.0)),
//!     Arc::new(City::at("D", 60.0, 100.0)),
//! )?;
//!
//! let nearby = index.range_cities(Point::new(10.0, 50.0), 50.0);
//! assert_eq!(nearby.len(), 2);
//!
//! let nearest = index.nearest_city(Point::new(11.0, 11.0)).unwrap();
//! assert_eq!(nearest.name(), "A");
//! # Ok::<(), pmquad::PmError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;

#[cfg(feature = "sync")]
pub mod sync;

pub use builder::PmQuadtreeBuilder;
pub use config::Config;
pub use error::{PmError, Result};
pub use index::{Node, PmQuadtree, TreeStats};

#[cfg(feature = "sync")]
pub use sync::SyncPmQuadtree;

pub use compute::geometry::{Quadrant, Region};
pub use compute::validation;

pub use geo::{Line, Point};
pub use pmquad_types::{City, Road, RoadKey};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{PmError, PmQuadtree, PmQuadtreeBuilder, Result};

    #[cfg(feature = "sync")]
    pub use crate::SyncPmQuadtree;

    pub use crate::{City, Road};
    pub use geo::Point;

    pub use crate::{Config, TreeStats};

    pub use crate::{Node, Quadrant, Region};

    pub use std::sync::Arc;
}
