//! # pmquad-types
//!
//! Feature types shared between the pmquad index and the collaborators that
//! drive it (command layer, name dictionary, renderer):
//!
//! - **City**: a named point with display radius and color
//! - **Road**: a straight segment between two cities, identified by the
//!   unordered pair of endpoint names
//!
//! Both are serializable with Serde and built on the `geo` crate's
//! primitives.
//!
//! ## Examples
//!
//! ```rust
//! use pmquad_types::{City, Road};
//! use std::sync::Arc;
//!
//! let a = Arc::new(City::new("Annapolis", 10.0, 10.0, 3.0, "red"));
//! let b = Arc::new(City::new("Baltimore", 40.0, 50.0, 3.0, "blue"));
//! let road = Road::new(b, a);
//! assert_eq!(road.to_string(), "Annapolis-Baltimore");
//! ```

pub mod city;
pub mod road;

pub use city::City;
pub use road::{Road, RoadKey};
