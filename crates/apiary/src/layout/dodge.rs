//! One-dimensional circle packing for beeswarm layouts.
//!
//! Given positions along a packing axis and a minimum center-to-center
//! separation, [`dodge`] computes a perpendicular offset for every circle
//! such that no two circles overlap while each stays as close as possible
//! to the centerline (offset 0).
//!
//! The algorithm is a greedy left-to-right sweep. Points are processed in
//! ascending position order; an active set holds the already-placed points
//! still close enough to collide with the next one. A new point takes
//! offset 0 when it can, and otherwise the smallest-magnitude tangent
//! offset against any active circle that collides with nothing.
//!
//! Worst case is O(n²) when every point stays within one eviction window of
//! the next; n is the number of rendered data points on a single chart, so
//! this is acceptable in practice.

use std::collections::VecDeque;

use serde::Deserialize;

use crate::error::LayoutError;

/// Tolerance subtracted from the squared separation when testing for
/// intersection, so tangential placements are not rejected by floating-point
/// error.
const EPSILON: f64 = 1e-3;

/// How far behind the current position an active-set entry may fall before
/// it is evicted.
///
/// The historical rule compares positions against the *squared* separation
/// as if it were a linear distance. That is dimensionally inconsistent, but
/// it is what existing output was produced with, so it stays the default.
/// The inconsistency is harmless for separations of at least one pixel
/// (the window is then wider than the interaction range, costing only extra
/// scans); below one pixel the window is narrower than the interaction
/// range and collisions can be missed. [`EvictionRule::Separation`] is the
/// dimensionally correct rule for callers that prefer correctness over
/// compatibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionRule {
    /// Evict entries more than `separation²` behind the current position.
    /// Matches historical output exactly.
    #[default]
    SquaredSeparation,

    /// Evict entries more than `separation` behind the current position.
    Separation,
}

impl EvictionRule {
    /// Width of the trailing window, in position units
    fn window(self, separation: f64) -> f64 {
        match self {
            EvictionRule::SquaredSeparation => separation * separation,
            EvictionRule::Separation => separation,
        }
    }
}

/// Computes perpendicular offsets that pack circles without overlap.
///
/// `x` holds the positions of the circle centers along the packing axis;
/// `separation` is the minimum center-to-center distance (circle diameter
/// plus padding). The returned offsets are index-aligned with `x`.
///
/// Uses [`EvictionRule::SquaredSeparation`] for compatibility with
/// historical output; see [`dodge_with_rule`] to choose the rule.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidSeparation`] when `separation` is not
/// positive and finite, and [`LayoutError::NonFiniteValue`] when any entry
/// of `x` is `NaN` or infinite. Filtering non-finite values is the caller's
/// responsibility.
///
/// # Examples
///
/// ```
/// # use apiary::layout::dodge::dodge;
/// // Far-apart circles stay on the centerline.
/// let y = dodge(&[0.0, 100.0], 8.0).unwrap();
/// assert_eq!(y, vec![0.0, 0.0]);
///
/// // Coincident circles pack perpendicular to the axis.
/// let y = dodge(&[0.0, 0.0], 8.0).unwrap();
/// assert!((y[0] - y[1]).abs() >= 8.0);
/// ```
pub fn dodge(x: &[f64], separation: f64) -> Result<Vec<f64>, LayoutError> {
    dodge_with_rule(x, separation, EvictionRule::default())
}

/// [`dodge`] with an explicit active-set [`EvictionRule`].
pub fn dodge_with_rule(
    x: &[f64],
    separation: f64,
    rule: EvictionRule,
) -> Result<Vec<f64>, LayoutError> {
    if !separation.is_finite() || separation <= 0.0 {
        return Err(LayoutError::InvalidSeparation { separation });
    }
    if let Some(index) = x.iter().position(|v| !v.is_finite()) {
        return Err(LayoutError::NonFiniteValue { index });
    }

    let separation2 = separation * separation;
    let window = rule.window(separation);

    // Stable sort keeps the original relative order of equal positions, so
    // tie-breaking is deterministic.
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&i, &j| x[i].total_cmp(&x[j]));

    let mut y = vec![0.0; x.len()];
    // Active set: already-placed points still close enough in x to collide
    // with the next point, in ascending x order. Front eviction and back
    // insertion preserve the ordering because processing order is sorted.
    let mut active: VecDeque<usize> = VecDeque::new();

    for &b in &order {
        while let Some(&a) = active.front() {
            if x[a] < x[b] - window {
                active.pop_front();
            } else {
                break;
            }
        }

        // y[b] is already 0: keep it when the centerline is free.
        if intersects(&active, x, &y, separation2, x[b], 0.0) {
            let mut best = f64::INFINITY;
            for &a in &active {
                let dx = x[a] - x[b];
                let radicand = separation2 - dx * dx;
                // A window wider than the separation retains entries with
                // no tangent against the new circle; skip those.
                if radicand < 0.0 {
                    continue;
                }
                let reach = radicand.sqrt();
                for candidate in [y[a] + reach, y[a] - reach] {
                    if candidate.abs() < best.abs()
                        && !intersects(&active, x, &y, separation2, x[b], candidate)
                    {
                        best = candidate;
                    }
                }
            }
            y[b] = best;
        }

        active.push_back(b);
    }

    Ok(y)
}

/// Returns true if a circle centered at `(cx, cy)` intersects any circle in
/// the active set.
fn intersects(
    active: &VecDeque<usize>,
    x: &[f64],
    y: &[f64],
    separation2: f64,
    cx: f64,
    cy: f64,
) -> bool {
    active.iter().any(|&a| {
        let dx = x[a] - cx;
        let dy = y[a] - cy;
        separation2 - EPSILON > dx * dx + dy * dy
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts every pair of circles respects the separation, up to the
    /// engine's tolerance.
    fn assert_no_overlap(x: &[f64], y: &[f64], separation: f64) {
        for i in 0..x.len() {
            for j in (i + 1)..x.len() {
                let d2 = (x[i] - x[j]).powi(2) + (y[i] - y[j]).powi(2);
                assert!(
                    d2 >= separation * separation - EPSILON,
                    "circles {i} and {j} overlap: d² = {d2}, separation² = {}",
                    separation * separation
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(dodge(&[], 8.0).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_single_point_stays_on_centerline() {
        assert_eq!(dodge(&[0.0], 8.0).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_two_coincident_points() {
        let x = [0.0, 0.0];
        let y = dodge(&x, 8.0).unwrap();
        assert_eq!(y[0], 0.0);
        assert!((y[0] - y[1]).abs() >= 8.0);
        assert_no_overlap(&x, &y, 8.0);
    }

    #[test]
    fn test_distant_points_do_not_interact() {
        assert_eq!(dodge(&[0.0, 100.0], 8.0).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_near_coincident_cluster() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let separation = 8.0;
        let y = dodge(&x, separation).unwrap();
        assert_no_overlap(&x, &y, separation);

        // Offsets stay bounded by the cluster size.
        let bound = x.len() as f64 * separation;
        for offset in &y {
            assert!(offset.abs() <= bound, "offset {offset} exceeds {bound}");
        }
    }

    #[test]
    fn test_identical_points_pack_alternately() {
        // The first point holds the centerline, later ones alternate above
        // and below because the smaller-magnitude tangent wins.
        let x = [0.0, 0.0, 0.0];
        let y = dodge(&x, 8.0).unwrap();
        assert_eq!(y, vec![0.0, 8.0, -8.0]);
        assert_no_overlap(&x, &y, 8.0);
    }

    #[test]
    fn test_unsorted_input_is_indexed_by_original_position() {
        let sorted = dodge(&[0.0, 1.0, 2.0], 8.0).unwrap();
        let shuffled = dodge(&[2.0, 0.0, 1.0], 8.0).unwrap();
        assert_eq!(shuffled[0], sorted[2]);
        assert_eq!(shuffled[1], sorted[0]);
        assert_eq!(shuffled[2], sorted[1]);
    }

    #[test]
    fn test_negative_positions() {
        let x = [-10.0, -9.0, -8.5];
        let y = dodge(&x, 8.0).unwrap();
        assert_no_overlap(&x, &y, 8.0);
    }

    #[test]
    fn test_zero_offset_when_centerline_is_free() {
        // Middle point is far enough from both neighbors.
        let y = dodge(&[0.0, 10.0, 20.0], 8.0).unwrap();
        assert_eq!(y, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_determinism() {
        let x = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let first = dodge(&x, 7.5).unwrap();
        let second = dodge(&x, 7.5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_positive_separation() {
        assert_eq!(
            dodge(&[0.0], 0.0),
            Err(LayoutError::InvalidSeparation { separation: 0.0 })
        );
        assert_eq!(
            dodge(&[0.0], -8.0),
            Err(LayoutError::InvalidSeparation { separation: -8.0 })
        );
        assert!(matches!(
            dodge(&[0.0], f64::NAN),
            Err(LayoutError::InvalidSeparation { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_positions() {
        assert_eq!(
            dodge(&[0.0, f64::NAN, 1.0], 8.0),
            Err(LayoutError::NonFiniteValue { index: 1 })
        );
        assert_eq!(
            dodge(&[f64::INFINITY], 8.0),
            Err(LayoutError::NonFiniteValue { index: 0 })
        );
    }

    #[test]
    fn test_squared_rule_misses_collisions_below_one() {
        // With separation 0.5 the squared window is 0.25, so the second
        // point evicts the first before the intersection test and both land
        // on the centerline, 0.3 apart. This pins down the historical
        // behavior the default rule exists to reproduce.
        let x = [0.0, 0.3];
        let y = dodge_with_rule(&x, 0.5, EvictionRule::SquaredSeparation).unwrap();
        assert_eq!(y, vec![0.0, 0.0]);

        // The linear window keeps the first point active and dodges.
        let y = dodge_with_rule(&x, 0.5, EvictionRule::Separation).unwrap();
        assert_no_overlap(&x, &y, 0.5);
    }

    #[test]
    fn test_both_rules_pack_validly_for_wide_separation() {
        let x = [0.0, 2.0, 4.0, 6.0, 8.0, 40.0, 41.0];
        let compat = dodge_with_rule(&x, 8.0, EvictionRule::SquaredSeparation).unwrap();
        let strict = dodge_with_rule(&x, 8.0, EvictionRule::Separation).unwrap();
        // Both rules must produce valid packings; the linear window may
        // evict earlier and so choose different (still minimal) offsets.
        assert_no_overlap(&x, &compat, 8.0);
        assert_no_overlap(&x, &strict, 8.0);
    }

    #[test]
    fn test_dense_pile_packs_outward() {
        let x = [5.0; 9];
        let separation = 8.0;
        let y = dodge(&x, separation).unwrap();
        assert_no_overlap(&x, &y, separation);

        // Coincident circles form a column with one circle per slot.
        let mut offsets = y.clone();
        offsets.sort_by(f64::total_cmp);
        for pair in offsets.windows(2) {
            assert!((pair[1] - pair[0]).abs() >= separation - EPSILON);
        }
    }
}
