//! Swarm assembly: from raw values to positioned circles.
//!
//! The [`Engine`] filters out non-finite values, projects the rest onto the
//! chart's horizontal pixel range, runs the dodge packing, and assembles a
//! [`Layout`] of circle centers plus the overall chart size. It never
//! renders anything; the output is pure geometry.

use log::debug;
use serde::Serialize;

use crate::{
    config::SwarmConfig,
    error::ApiaryError,
    geometry::{Extent, LinearScale, Point, Size},
    layout::dodge,
};

/// A positioned circle in the swarm.
///
/// `index` refers back to the position of the source value in the caller's
/// sequence, so labels or titles can be joined after layout. Values filtered
/// out as non-finite leave gaps in the index sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    index: usize,
    center: Point,
    radius: f64,
}

impl Circle {
    /// Index of the source value in the caller's sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Center of the circle in chart coordinates
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the circle in pixels
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// A computed swarm layout: positioned circles and the chart size that
/// contains them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    circles: Vec<Circle>,
    size: Size,
}

impl Layout {
    /// The positioned circles, in input order of their surviving values
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Outer chart size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns true when no value survived filtering
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Swarm layout engine.
///
/// # Examples
///
/// ```
/// # use apiary::{config::SwarmConfig, layout::swarm::Engine};
/// let engine = Engine::new(SwarmConfig::default());
/// let layout = engine.calculate(&[1.0, 1.0, 4.0]).unwrap();
/// assert_eq!(layout.circles().len(), 3);
/// ```
pub struct Engine {
    config: SwarmConfig,
}

impl Engine {
    /// Creates an engine with the given configuration
    pub fn new(config: SwarmConfig) -> Self {
        Self { config }
    }

    /// Computes the swarm layout for a sequence of values.
    ///
    /// Non-finite values are skipped; their indices simply do not appear in
    /// the output. The chart height, unless configured, is derived from the
    /// largest offset so every circle fits between the vertical margins.
    ///
    /// # Errors
    ///
    /// Returns [`ApiaryError::Config`] for an invalid configuration and
    /// [`ApiaryError::Layout`] if the derived separation is unusable.
    pub fn calculate(&self, values: &[f64]) -> Result<Layout, ApiaryError> {
        self.config.validate()?;

        let kept: Vec<(usize, f64)> = values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .collect();
        debug!(
            values_len = values.len(),
            kept_len = kept.len();
            "Filtered swarm values",
        );

        if kept.is_empty() {
            let height = self
                .config
                .height()
                .unwrap_or_else(|| self.default_height(0.0));
            return Ok(Layout {
                circles: Vec::new(),
                size: Size::new(self.config.width(), height),
            });
        }

        let finite: Vec<f64> = kept.iter().map(|&(_, v)| v).collect();
        let domain = match self.config.domain() {
            Some([min, max]) => Extent::new(min, max),
            None => Extent::from_values(&finite).expect("kept values are finite and non-empty"),
        };

        let (range_start, range_end) = self.config.x_range();
        let scale = LinearScale::new(domain, range_start, range_end);
        let positions: Vec<f64> = finite.iter().map(|&v| scale.scale(v)).collect();

        let offsets = dodge::dodge_with_rule(
            &positions,
            self.config.separation(),
            self.config.eviction(),
        )?;

        let max_offset = offsets.iter().fold(0.0f64, |acc, y| acc.max(y.abs()));
        let height = self
            .config
            .height()
            .unwrap_or_else(|| self.default_height(max_offset));
        debug!(
            circles_len = offsets.len(),
            max_offset,
            height;
            "Swarm layout calculated",
        );

        // Offsets are signed distances from the centerline between the
        // vertical margins.
        let midline = (self.config.margin_top() + height - self.config.margin_bottom()) / 2.0;
        let radius = self.config.radius();
        let circles = kept
            .iter()
            .zip(positions.iter().zip(offsets.iter()))
            .map(|(&(index, _), (&cx, &offset))| Circle {
                index,
                center: Point::new(cx, midline + offset),
                radius,
            })
            .collect();

        Ok(Layout {
            circles,
            size: Size::new(self.config.width(), height),
        })
    }

    /// Default chart height: room for the widest packed column plus the
    /// vertical margins.
    fn default_height(&self, max_offset: f64) -> f64 {
        (max_offset + self.config.radius() + self.config.padding()) * 2.0
            + self.config.margin_top()
            + self.config.margin_bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_give_empty_layout() {
        let engine = Engine::new(SwarmConfig::default());
        let layout = engine.calculate(&[]).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.size().width(), 640.0);
        // Height still leaves room for one circle row plus margins.
        assert_eq!(layout.size().height(), (3.0 + 1.5) * 2.0 + 10.0 + 30.0);
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let engine = Engine::new(SwarmConfig::default());
        let layout = engine
            .calculate(&[1.0, f64::NAN, 3.0, f64::INFINITY])
            .unwrap();
        let indices: Vec<usize> = layout.circles().iter().map(Circle::index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_centers_span_the_horizontal_range() {
        let engine = Engine::new(SwarmConfig::default());
        let layout = engine.calculate(&[0.0, 5.0, 10.0]).unwrap();
        let circles = layout.circles();
        assert_eq!(circles[0].center().x(), 20.0);
        assert_eq!(circles[1].center().x(), 320.0);
        assert_eq!(circles[2].center().x(), 620.0);
    }

    #[test]
    fn test_domain_override_changes_projection() {
        let config = SwarmConfig::default().with_domain(0.0, 20.0);
        let engine = Engine::new(config);
        let layout = engine.calculate(&[0.0, 10.0]).unwrap();
        let circles = layout.circles();
        assert_eq!(circles[0].center().x(), 20.0);
        // 10 is now the middle of the domain, not its end.
        assert_eq!(circles[1].center().x(), 320.0);
    }

    #[test]
    fn test_isolated_values_sit_on_the_midline() {
        let config = SwarmConfig::default().with_height(300.0);
        let engine = Engine::new(config);
        let layout = engine.calculate(&[0.0, 10.0]).unwrap();
        let midline = (10.0 + 300.0 - 30.0) / 2.0;
        for circle in layout.circles() {
            assert_eq!(circle.center().y(), midline);
        }
    }

    #[test]
    fn test_default_height_fits_widest_column() {
        let engine = Engine::new(SwarmConfig::default());
        // Identical values force a vertical column.
        let layout = engine.calculate(&[5.0; 5]).unwrap();
        let max_offset = layout
            .circles()
            .iter()
            .map(|c| {
                let midline = (10.0 + layout.size().height() - 30.0) / 2.0;
                (c.center().y() - midline).abs()
            })
            .fold(0.0f64, f64::max);
        assert_eq!(
            layout.size().height(),
            (max_offset + 3.0 + 1.5) * 2.0 + 10.0 + 30.0
        );
    }

    #[test]
    fn test_layout_has_no_overlaps() {
        let engine = Engine::new(SwarmConfig::default());
        let values: Vec<f64> = (0..40).map(|i| f64::from(i % 7)).collect();
        let layout = engine.calculate(&values).unwrap();

        let separation = SwarmConfig::default().separation();
        let circles = layout.circles();
        for i in 0..circles.len() {
            for j in (i + 1)..circles.len() {
                let d2 = circles[i].center().distance_squared(circles[j].center());
                assert!(
                    d2 >= separation * separation - 1e-3,
                    "circles {i} and {j} overlap"
                );
            }
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let engine = Engine::new(SwarmConfig::default().with_radius(-1.0));
        assert!(matches!(
            engine.calculate(&[1.0]),
            Err(ApiaryError::Config(_))
        ));
    }

    #[test]
    fn test_circle_radius_comes_from_config() {
        let engine = Engine::new(SwarmConfig::default().with_radius(5.0));
        let layout = engine.calculate(&[1.0]).unwrap();
        assert_eq!(layout.circles()[0].radius(), 5.0);
    }
}
