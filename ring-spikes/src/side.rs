//! Side strategies: on which side of a directed segment a point lies.

use crate::cartesian::{CartesianPoint2d, Orientation};
use num_traits::ToPrimitive;

/// Classifies a point against the directed line through `segment_a -> segment_b`.
///
/// A point to the left of the line is [`Orientation::Counterclockwise`], to the right is
/// [`Orientation::Clockwise`], on the line is [`Orientation::Collinear`].
pub trait SideStrategy {
    /// Side of `point` relative to `segment_a -> segment_b`.
    fn side<N>(
        point: &impl CartesianPoint2d<Num = N>,
        segment_a: &impl CartesianPoint2d<Num = N>,
        segment_b: &impl CartesianPoint2d<Num = N>,
    ) -> Orientation
    where
        N: num_traits::Num + PartialOrd + ToPrimitive;
}

/// Side computed with plain arithmetic in the coordinate type of the points.
///
/// Exact for integer coordinates; for floating point coordinates the determinant is rounded.
#[derive(Debug, Default, Copy, Clone)]
pub struct CartesianSide;

impl SideStrategy for CartesianSide {
    fn side<N>(
        point: &impl CartesianPoint2d<Num = N>,
        segment_a: &impl CartesianPoint2d<Num = N>,
        segment_b: &impl CartesianPoint2d<Num = N>,
    ) -> Orientation
    where
        N: num_traits::Num + PartialOrd + ToPrimitive,
    {
        Orientation::triplet(segment_a, segment_b, point)
    }
}

/// Side computed with Shewchuk's adaptive precision `orient2d` predicate.
///
/// Coordinates are converted to `f64` first, so the result is exact only for coordinate types that convert without
/// loss. A coordinate that cannot be represented as `f64` gives [`Orientation::Collinear`].
#[derive(Debug, Default, Copy, Clone)]
pub struct RobustSide;

impl SideStrategy for RobustSide {
    fn side<N>(
        point: &impl CartesianPoint2d<Num = N>,
        segment_a: &impl CartesianPoint2d<Num = N>,
        segment_b: &impl CartesianPoint2d<Num = N>,
    ) -> Orientation
    where
        N: num_traits::Num + PartialOrd + ToPrimitive,
    {
        let (Some(pa), Some(pb), Some(pc)) = (
            robust_coord(segment_a),
            robust_coord(segment_b),
            robust_coord(point),
        ) else {
            return Orientation::Collinear;
        };

        let det = robust::orient2d(pa, pb, pc);
        if det > 0.0 {
            Orientation::Counterclockwise
        } else if det < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

fn robust_coord<N: ToPrimitive>(
    p: &impl CartesianPoint2d<Num = N>,
) -> Option<robust::Coord<f64>> {
    Some(robust::Coord {
        x: p.x().to_f64()?,
        y: p.y().to_f64()?,
    })
}
