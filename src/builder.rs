//! Index builder for flexible configuration
//!
//! This module provides a builder pattern for creating indexes from a
//! `Config`, an explicit universe, or both.

use crate::config::Config;
use crate::error::Result;
use crate::index::PmQuadtree;

#[cfg(feature = "sync")]
use crate::sync::SyncPmQuadtree;

/// Builder for index configuration.
#[derive(Debug, Default)]
pub struct PmQuadtreeBuilder {
    config: Config,
}

impl PmQuadtreeBuilder {
    /// Create a new builder with the default 1024x1024 universe.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the universe extent.
    pub fn universe(mut self, width: f64, height: f64) -> Self {
        self.config = self.config.with_universe(width, height);
        self
    }

    /// Set the universe's north-west corner.
    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.config = self.config.with_origin(x, y);
        self
    }

    /// Build the index.
    pub fn build(self) -> Result<PmQuadtree> {
        PmQuadtree::with_config(self.config)
    }

    /// Build a thread-safe index.
    #[cfg(feature = "sync")]
    pub fn build_sync(self) -> Result<SyncPmQuadtree> {
        Ok(SyncPmQuadtree::new(self.build()?))
    }
}
