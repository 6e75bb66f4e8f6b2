//! Configuration types for swarm layout.
//!
//! This module provides the configuration structures that control how a
//! swarm is laid out. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources (the CLI loads them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`SwarmConfig`] - Circle sizing, chart extents, and engine behavior.
//!
//! Defaults match the conventional beeswarm caller: 3px circles with 1.5px
//! padding inside a 640px-wide chart.
//!
//! # Example
//!
//! ```
//! # use apiary::config::SwarmConfig;
//! let config = SwarmConfig::default();
//! assert_eq!(config.separation(), 7.5); // 2 * radius + padding
//! ```

use serde::Deserialize;

use crate::{error::ApiaryError, layout::dodge::EvictionRule};

/// Top-level application configuration.
///
/// Groups the [`SwarmConfig`] under a single configuration root so the TOML
/// layout (`[swarm]` section) has room to grow.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Swarm layout configuration section.
    #[serde(default)]
    swarm: SwarmConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified swarm configuration.
    pub fn new(swarm: SwarmConfig) -> Self {
        Self { swarm }
    }

    /// Returns the swarm configuration.
    pub fn swarm(&self) -> &SwarmConfig {
        &self.swarm
    }
}

/// Circle sizing, chart extents, and engine behavior for a swarm layout.
///
/// Missing fields deserialize to their defaults, so a config file only needs
/// to name what it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Fixed radius of the circles, in pixels.
    radius: f64,

    /// Padding kept between circles, in pixels.
    padding: f64,

    /// Outer width of the chart, in pixels.
    width: f64,

    /// Outer height of the chart, in pixels. When absent the height is
    /// derived from the computed offsets.
    height: Option<f64>,

    /// Top margin, in pixels.
    margin_top: f64,

    /// Right margin, in pixels.
    margin_right: f64,

    /// Bottom margin, in pixels.
    margin_bottom: f64,

    /// Left margin, in pixels.
    margin_left: f64,

    /// Data-space domain override as `[min, max]`. When absent the domain
    /// is the extent of the finite input values.
    domain: Option<[f64; 2]>,

    /// Eviction rule used by the dodge engine's active-set window.
    eviction: EvictionRule,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            padding: 1.5,
            width: 640.0,
            height: None,
            margin_top: 10.0,
            margin_right: 20.0,
            margin_bottom: 30.0,
            margin_left: 20.0,
            domain: None,
            eviction: EvictionRule::default(),
        }
    }
}

impl SwarmConfig {
    /// Returns the circle radius in pixels
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the inter-circle padding in pixels
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the outer chart width in pixels
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the configured chart height, if any
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Returns the top margin in pixels
    pub fn margin_top(&self) -> f64 {
        self.margin_top
    }

    /// Returns the right margin in pixels
    pub fn margin_right(&self) -> f64 {
        self.margin_right
    }

    /// Returns the bottom margin in pixels
    pub fn margin_bottom(&self) -> f64 {
        self.margin_bottom
    }

    /// Returns the left margin in pixels
    pub fn margin_left(&self) -> f64 {
        self.margin_left
    }

    /// Returns the configured domain override, if any
    pub fn domain(&self) -> Option<[f64; 2]> {
        self.domain
    }

    /// Returns the active-set eviction rule
    pub fn eviction(&self) -> EvictionRule {
        self.eviction
    }

    /// Sets the circle radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the inter-circle padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the outer chart width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets an explicit chart height
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets a data-space domain override
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some([min, max]);
        self
    }

    /// Sets the active-set eviction rule
    pub fn with_eviction(mut self, eviction: EvictionRule) -> Self {
        self.eviction = eviction;
        self
    }

    /// Minimum center-to-center distance between circles: diameter plus
    /// padding.
    pub fn separation(&self) -> f64 {
        2.0 * self.radius + self.padding
    }

    /// Horizontal pixel range available for circle centers:
    /// `[margin_left, width - margin_right]`.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin_left, self.width - self.margin_right)
    }

    /// Checks the configuration is usable for layout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiaryError::Config`] when the radius is not positive and
    /// finite, or the padding is negative or non-finite.
    pub fn validate(&self) -> Result<(), ApiaryError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ApiaryError::Config(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ApiaryError::Config(format!(
                "padding must be non-negative and finite, got {}",
                self.padding
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_conventional_caller() {
        let config = SwarmConfig::default();
        assert_eq!(config.radius(), 3.0);
        assert_eq!(config.padding(), 1.5);
        assert_eq!(config.width(), 640.0);
        assert_eq!(config.height(), None);
        assert_eq!(config.separation(), 7.5);
        assert_eq!(config.x_range(), (20.0, 620.0));
        assert_eq!(config.eviction(), EvictionRule::SquaredSeparation);
    }

    #[test]
    fn test_builder_setters() {
        let config = SwarmConfig::default()
            .with_radius(5.0)
            .with_padding(2.0)
            .with_width(800.0)
            .with_height(200.0)
            .with_domain(0.0, 10.0)
            .with_eviction(EvictionRule::Separation);

        assert_eq!(config.separation(), 12.0);
        assert_eq!(config.height(), Some(200.0));
        assert_eq!(config.domain(), Some([0.0, 10.0]));
        assert_eq!(config.eviction(), EvictionRule::Separation);
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        assert!(SwarmConfig::default().with_radius(0.0).validate().is_err());
        assert!(SwarmConfig::default().with_radius(-3.0).validate().is_err());
        assert!(
            SwarmConfig::default()
                .with_radius(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(SwarmConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_padding() {
        assert!(
            SwarmConfig::default()
                .with_padding(-1.0)
                .validate()
                .is_err()
        );
        assert!(SwarmConfig::default().with_padding(0.0).validate().is_ok());
    }
}
