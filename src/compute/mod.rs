//! Compute layer: geometry and query algorithms.
//!
//! This module holds the logic that runs over the tree without owning it:
//! - Geometry predicates the tree is partitioned and pruned with
//! - Input validation
//! - Range and nearest-feature search
//!
//! Everything here takes a `&Node` and borrows; mutation lives in
//! [`crate::index`].

pub mod geometry;
pub mod nearest;
pub mod range;
pub mod validation;
