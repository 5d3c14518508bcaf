//! Robustness policies.
//!
//! A robustness policy maps points into a coordinate representation in which near-ties, caused by rounding of
//! floating point coordinates, are resolved. The spike predicate asks the policy for a second opinion only when
//! evaluation with the original coordinates found nothing, see
//! [`point_is_spike_or_equal_robust`](crate::point_is_spike_or_equal_robust).

use crate::cartesian::{CartesianPoint2d, Point2, Rect};
use crate::error::RingSpikesError;
use nalgebra::Scalar;
use num_traits::{Bounded, Float, FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Size of the integer grid the largest extent of the input is scaled to by [`RescalePolicy`].
pub const RESCALE_RANGE: f64 = 10_000_000.0;

/// Largest absolute grid coordinate produced by [`RescalePolicy`].
///
/// Orientation determinants of points within `±MAX_GRID_COORDINATE` fit into `i64`.
pub const MAX_GRID_COORDINATE: i64 = 1_000_000_000;

/// Recalculates points into a robust coordinate representation.
pub trait RobustPolicy<P: CartesianPoint2d> {
    /// Type of the recalculated points.
    type RobustPoint: CartesianPoint2d;

    /// If false, recalculation is never requested.
    fn is_enabled(&self) -> bool;

    /// Converts the point into the robust representation.
    fn recalculate(&self, point: &P) -> Self::RobustPoint;
}

/// Disabled policy. Points are never rescaled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoRescale;

impl<P: CartesianPoint2d> RobustPolicy<P> for NoRescale {
    type RobustPoint = Point2<P::Num>;

    fn is_enabled(&self) -> bool {
        false
    }

    fn recalculate(&self, point: &P) -> Self::RobustPoint {
        Point2::new(point.x(), point.y())
    }
}

/// Rescales floating point coordinates onto an integer grid.
///
/// A coordinate `v` is mapped to `int_offset + round((v - fp_offset) * multiplier)`, clamped to
/// [`MAX_GRID_COORDINATE`]. On the integer grid orientation tests are exact, so points that are collinear up to the
/// grid resolution are recognized as collinear.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescalePolicy<N = f64> {
    fp_offset: Point2<N>,
    int_offset: Point2<i64>,
    multiplier: N,
}

impl<N> RescalePolicy<N>
where
    N: Float + Bounded + Scalar + FromPrimitive + ToPrimitive,
{
    /// Creates a policy with explicit parameters.
    pub fn new(fp_offset: Point2<N>, int_offset: Point2<i64>, multiplier: N) -> Self {
        Self {
            fp_offset,
            int_offset,
            multiplier,
        }
    }

    /// Computes a policy that scales the bounding rectangle of the points to [`RESCALE_RANGE`].
    pub fn from_points<'a, P>(points: impl Iterator<Item = &'a P>) -> Result<Self, RingSpikesError>
    where
        P: CartesianPoint2d<Num = N> + 'a,
    {
        let rect = Rect::from_points(points).ok_or(RingSpikesError::EmptyInput)?;
        Self::from_rect(&rect)
    }

    /// Computes a policy that scales the rectangle to [`RESCALE_RANGE`].
    ///
    /// The minimum corner of the rectangle is mapped to `-RESCALE_RANGE / 2` on both axes. Extents smaller than the
    /// range are scaled up by a whole multiplier, larger ones are scaled down. If the largest extent of the rectangle
    /// is zero or is not finite, the multiplier is `1`.
    pub fn from_rect(rect: &Rect<N>) -> Result<Self, RingSpikesError> {
        let fp_offset = rect.min_point();
        if !fp_offset.x().is_finite() || !fp_offset.y().is_finite() {
            return Err(RingSpikesError::NonFiniteBounds(format!("{rect:?}")));
        }

        let diff = rect.max_extent().to_f64().unwrap_or(f64::INFINITY);
        let multiplier = if diff == 0.0 || !diff.is_finite() {
            1.0
        } else if diff >= RESCALE_RANGE {
            RESCALE_RANGE / diff
        } else {
            (RESCALE_RANGE / diff).round()
        };

        let min_coordinate = (-RESCALE_RANGE / 2.0) as i64;
        let policy = Self {
            fp_offset,
            int_offset: Point2::new(min_coordinate, min_coordinate),
            multiplier: N::from_f64(multiplier).unwrap_or_else(N::one),
        };

        log::debug!("Computed rescale policy {policy:?} for bounds {rect:?}");

        Ok(policy)
    }

    /// Offset subtracted from input coordinates.
    pub fn fp_offset(&self) -> Point2<N> {
        self.fp_offset
    }

    /// Offset added to scaled coordinates.
    pub fn int_offset(&self) -> Point2<i64> {
        self.int_offset
    }

    /// Scale factor.
    pub fn multiplier(&self) -> N {
        self.multiplier
    }

    fn rescale(&self, value: N, fp_offset: N, int_offset: i64) -> i64 {
        let scaled = ((value - fp_offset) * self.multiplier).round();
        let limit = MAX_GRID_COORDINATE as f64;
        // NaN survives `clamp` and is then mapped to zero by `as`.
        (int_offset as f64 + scaled.to_f64().unwrap_or(0.0)).clamp(-limit, limit) as i64
    }
}

impl<P> RobustPolicy<P> for RescalePolicy<P::Num>
where
    P: CartesianPoint2d,
    P::Num: Float,
{
    type RobustPoint = Point2<i64>;

    fn is_enabled(&self) -> bool {
        true
    }

    fn recalculate(&self, point: &P) -> Self::RobustPoint {
        Point2::new(
            self.rescale(point.x(), self.fp_offset.x(), self.int_offset.x()),
            self.rescale(point.y(), self.fp_offset.y(), self.int_offset.y()),
        )
    }
}

/// Policy with an injected recalculation function.
///
/// ```ignore
/// let snap = RecalculateWith::new(|p: &Point2| Point2::new(p.x().round() as i64, p.y().round() as i64));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct RecalculateWith<F> {
    enabled: bool,
    recalculate: F,
}

impl<F> RecalculateWith<F> {
    /// Creates an enabled policy.
    pub fn new(recalculate: F) -> Self {
        Self {
            enabled: true,
            recalculate,
        }
    }

    /// Creates a policy that is turned off, but keeps the recalculation function.
    pub fn disabled(recalculate: F) -> Self {
        Self {
            enabled: false,
            recalculate,
        }
    }

    /// Returns a copy of the policy with the `enabled` flag set to the given value.
    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }
}

impl<P, R, F> RobustPolicy<P> for RecalculateWith<F>
where
    P: CartesianPoint2d,
    R: CartesianPoint2d,
    F: Fn(&P) -> R,
{
    type RobustPoint = R;

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn recalculate(&self, point: &P) -> Self::RobustPoint {
        (self.recalculate)(point)
    }
}
