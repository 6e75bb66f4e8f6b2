//! Geometric primitives for swarm layout.
//!
//! This module provides the fundamental geometric types used when placing
//! circles:
//!
//! - [`Point`] - A 2D coordinate in chart space
//! - [`Size`] - Width and height dimensions of a computed layout
//! - [`Extent`] - The 1D span of a value sequence (its domain)
//! - [`LinearScale`] - An affine mapping from a data domain to a pixel range
//!
//! # Coordinate System
//!
//! Apiary uses a coordinate system consistent with SVG: origin at the
//! top-left, X increasing rightward, Y increasing downward. Dodge offsets
//! are signed distances from a horizontal centerline, so a negative offset
//! places a circle above the line and a positive offset below it.
//!
//! All coordinates are `f64`: positions are projections of arbitrary data
//! values and the engine's overlap tolerance is specified in double
//! precision.

use serde::Serialize;

/// A 2D point representing a circle center in chart coordinate space.
///
/// # Examples
///
/// ```
/// # use apiary::geometry::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to another point.
    ///
    /// The dodge engine compares squared distances against a squared
    /// separation, so this is the primitive; [`Point::distance`] is the
    /// convenience on top of it.
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// Represents the dimensions of a computed layout with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}

/// The 1D span of a value sequence, from its minimum to its maximum.
///
/// Used as the domain of a [`LinearScale`]. Non-finite entries are ignored
/// when computing an extent, matching how callers pre-filter their data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    /// Creates an extent from explicit bounds.
    ///
    /// Bounds are reordered if given reversed, so `Extent::new(5.0, 1.0)`
    /// spans `[1.0, 5.0]`.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self {
                min: max,
                max: min,
            }
        }
    }

    /// Computes the extent of a value sequence, skipping non-finite entries.
    ///
    /// Returns `None` when no finite value remains.
    ///
    /// # Examples
    ///
    /// ```
    /// # use apiary::geometry::Extent;
    /// let extent = Extent::from_values(&[2.0, f64::NAN, -1.0, 4.0]).unwrap();
    /// assert_eq!(extent.min(), -1.0);
    /// assert_eq!(extent.max(), 4.0);
    ///
    /// assert!(Extent::from_values(&[]).is_none());
    /// ```
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut finite = values.iter().copied().filter(|v| v.is_finite());
        let first = finite.next()?;
        let (min, max) = finite.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Some(Self { min, max })
    }

    /// Returns the lower bound of the extent
    pub fn min(self) -> f64 {
        self.min
    }

    /// Returns the upper bound of the extent
    pub fn max(self) -> f64 {
        self.max
    }

    /// Returns the length of the extent (zero for a degenerate span)
    pub fn length(self) -> f64 {
        self.max - self.min
    }
}

/// An affine mapping from a data-space [`Extent`] onto a pixel range.
///
/// This is the projection step that turns raw values into positions along
/// the packing axis before they are handed to the dodge engine.
///
/// # Examples
///
/// ```
/// # use apiary::geometry::{Extent, LinearScale};
/// let scale = LinearScale::new(Extent::new(0.0, 10.0), 20.0, 620.0);
/// assert_eq!(scale.scale(0.0), 20.0);
/// assert_eq!(scale.scale(5.0), 320.0);
/// assert_eq!(scale.scale(10.0), 620.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Extent,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `[range_start, range_end]`
    pub fn new(domain: Extent, range_start: f64, range_end: f64) -> Self {
        Self {
            domain,
            range_start,
            range_end,
        }
    }

    /// Returns the data-space domain of the scale
    pub fn domain(self) -> Extent {
        self.domain
    }

    /// Projects a value from the domain onto the range.
    ///
    /// Values outside the domain extrapolate linearly. A degenerate domain
    /// (zero length) maps every value to the middle of the range, so a
    /// sequence of identical values still lands inside the chart.
    pub fn scale(self, value: f64) -> f64 {
        let span = self.domain.length();
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let t = (value - self.domain.min) / span;
        self.range_start + t * (self.range_end - self.range_start)
    }
}
