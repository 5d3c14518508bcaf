//! Spike and duplicate vertex detection.
//!
//! When a ring is traversed `... -> a -> b -> last_point`, the vertex `b` is degenerate if `last_point` is equal to
//! `b`, or if `last_point` lies on the line through `a` and `b` and the boundary turns back at `b`:
//!
//! ```text
//!  x-------x------x
//!  a       lp     b
//! ```
//!
//! Above, `lp` generates a spike at `b`. Note that the last point is the first argument of the predicate functions,
//! followed by the segment.

use crate::cartesian::CartesianPoint2d;
use crate::robust_policy::RobustPolicy;
use crate::side::{CartesianSide, SideStrategy};

/// Returns true if appending `last_point` after the segment `segment_a -> segment_b` makes `segment_b` a spike or
/// a duplicate vertex.
///
/// A degenerate segment (`segment_a == segment_b`) is always reported as `true`: `segment_b` then duplicates
/// `segment_a`.
///
/// The side of the point is computed with [`CartesianSide`], i.e. in the coordinate type of the points. See
/// [`point_is_spike_or_equal_robust`] for a version that re-checks near-collinear points in a robust representation.
pub fn point_is_spike_or_equal<P1, P2, P3>(
    last_point: &P1,
    segment_a: &P2,
    segment_b: &P3,
) -> bool
where
    P1: CartesianPoint2d,
    P2: CartesianPoint2d<Num = P1::Num>,
    P3: CartesianPoint2d<Num = P1::Num>,
{
    point_is_spike_or_equal_by::<CartesianSide, _, _, _>(last_point, segment_a, segment_b)
}

/// Same as [`point_is_spike_or_equal`], but the side of `last_point` is computed with the given strategy.
pub fn point_is_spike_or_equal_by<S, P1, P2, P3>(
    last_point: &P1,
    segment_a: &P2,
    segment_b: &P3,
) -> bool
where
    S: SideStrategy,
    P1: CartesianPoint2d,
    P2: CartesianPoint2d<Num = P1::Num>,
    P3: CartesianPoint2d<Num = P1::Num>,
{
    if !S::side(last_point, segment_a, segment_b).is_collinear() {
        return false;
    }

    let diff1 = last_point.sub(segment_b);
    if diff1.is_zero() {
        return true;
    }

    let diff2 = segment_b.sub(segment_a);
    if diff2.is_zero() {
        return true;
    }

    // Collinear: continuing forward keeps the sign of every axis, turning back flips at least one of them.
    diff1.signs() != diff2.signs()
}

/// Returns true if appending `last_point` after the segment `segment_a -> segment_b` makes `segment_b` a spike or
/// a duplicate vertex, using the robust policy as a fallback.
///
/// The points are first checked as they are. Only if no spike is found and the policy is enabled, the points are
/// recalculated with the policy and checked again. The second check can only turn a `false` into a `true`.
pub fn point_is_spike_or_equal_robust<P, R>(
    last_point: &P,
    segment_a: &P,
    segment_b: &P,
    robust_policy: &R,
) -> bool
where
    P: CartesianPoint2d,
    R: RobustPolicy<P>,
{
    if point_is_spike_or_equal(last_point, segment_a, segment_b) {
        return true;
    }

    if !robust_policy.is_enabled() {
        return false;
    }

    log::trace!("No spike found with original coordinates, recalculating with the robust policy");

    let last_point_rob = robust_policy.recalculate(last_point);
    let segment_a_rob = robust_policy.recalculate(segment_a);
    let segment_b_rob = robust_policy.recalculate(segment_b);

    let result = point_is_spike_or_equal(&last_point_rob, &segment_a_rob, &segment_b_rob);
    if result {
        log::trace!("Spike found only after recalculating points with the robust policy");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{Orientation, Point2};
    use crate::robust_policy::{NoRescale, RecalculateWith, RescalePolicy};
    use crate::side::RobustSide;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn grid() -> Vec<Point2<i64>> {
        let mut points = vec![];
        for x in -2..=2 {
            for y in -2..=2 {
                points.push(Point2::new(x, y));
            }
        }
        points
    }

    #[test]
    fn off_line_is_not_spike() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 0.0);

        assert!(!point_is_spike_or_equal(&p(1.0, 1.0), &a, &b));
        assert!(!point_is_spike_or_equal(&p(1.0, -1.0), &a, &b));
        assert!(!point_is_spike_or_equal(&p(2.0, 0.001), &a, &b));
        assert!(!point_is_spike_or_equal(&p(-5.0, 3.0), &a, &b));
    }

    #[test]
    fn off_line_is_not_spike_on_grid() {
        for last in grid() {
            for a in grid() {
                for b in grid() {
                    if !Orientation::triplet(&a, &b, &last).is_collinear() {
                        assert!(!point_is_spike_or_equal(&last, &a, &b));
                    }
                }
            }
        }
    }

    #[test]
    fn duplicate_is_degenerate() {
        assert!(point_is_spike_or_equal(&p(2.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0)));
        assert!(point_is_spike_or_equal(
            &Point2::new(-3i64, 7),
            &Point2::new(1, 1),
            &Point2::new(-3, 7)
        ));
    }

    #[test]
    fn forward_continuation_is_not_spike() {
        assert!(!point_is_spike_or_equal(&p(4.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0)));
        assert!(!point_is_spike_or_equal(&p(-3.0, -3.0), &p(1.0, 1.0), &p(-1.0, -1.0)));
    }

    #[test]
    fn reversal_is_spike() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 0.0);

        // Back between a and b.
        assert!(point_is_spike_or_equal(&p(1.0, 0.0), &a, &b));
        // Back onto a.
        assert!(point_is_spike_or_equal(&p(0.0, 0.0), &a, &b));
        // Back behind a.
        assert!(point_is_spike_or_equal(&p(-3.0, 0.0), &a, &b));
        // Vertical and diagonal lines.
        assert!(point_is_spike_or_equal(&p(0.0, 5.0), &p(0.0, 0.0), &p(0.0, 10.0)));
        assert!(point_is_spike_or_equal(&p(0.5, 0.5), &p(0.0, 0.0), &p(1.0, 1.0)));
    }

    #[test]
    fn degenerate_segment() {
        let a = p(1.0, 1.0);

        assert!(point_is_spike_or_equal(&p(1.0, 1.0), &a, &a));
        assert!(point_is_spike_or_equal(&p(3.0, 4.0), &a, &a));
    }

    #[test]
    fn collinear_result_follows_axis_signs() {
        for last in grid() {
            for a in grid() {
                for b in grid() {
                    if a == b || !Orientation::triplet(&a, &b, &last).is_collinear() {
                        continue;
                    }

                    let diff1 = last - b;
                    let diff2 = b - a;
                    let expected = diff1.is_zero()
                        || diff1.signs()[0] != diff2.signs()[0]
                        || diff1.signs()[1] != diff2.signs()[1];

                    assert_eq!(
                        point_is_spike_or_equal(&last, &a, &b),
                        expected,
                        "{last:?} {a:?} {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn mixed_point_types() {
        let last = nalgebra::Point2::new(1.0, 0.0);
        let a = p(0.0, 0.0);
        let b = nalgebra::Point2::new(2.0, 0.0);

        assert!(point_is_spike_or_equal(&last, &a, &b));
    }

    #[test]
    fn robust_side_strategy() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 0.0);

        assert!(point_is_spike_or_equal_by::<RobustSide, _, _, _>(&p(1.0, 0.0), &a, &b));
        assert!(point_is_spike_or_equal_by::<RobustSide, _, _, _>(&p(2.0, 0.0), &a, &b));
        assert!(!point_is_spike_or_equal_by::<RobustSide, _, _, _>(&p(4.0, 0.0), &a, &b));
        assert!(!point_is_spike_or_equal_by::<RobustSide, _, _, _>(&p(1.0, 1e-300), &a, &b));
    }

    #[test]
    fn robust_fallback_finds_near_collinear_spike() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 1.0);
        let last = p(0.5, 0.5 + 1e-12);

        assert!(!point_is_spike_or_equal(&last, &a, &b));

        let policy = RescalePolicy::from_points([a, b, last].iter()).unwrap();
        assert!(point_is_spike_or_equal_robust(&last, &a, &b, &policy));
    }

    #[test]
    fn robust_fallback_with_large_coordinates() {
        let a = p(0.0, 0.0);
        let b = p(1e10, 0.0);
        let last = p(5e9, 1e10);
        let policy = RescalePolicy::from_points([a, b, last].iter()).unwrap();

        assert!(!point_is_spike_or_equal_robust(&last, &a, &b, &policy));

        let b = p(1e10, 1e10);
        let last = p(5e9, 5e9 + 1e-3);
        let policy = RescalePolicy::from_points([a, b, last].iter()).unwrap();

        assert!(!point_is_spike_or_equal(&last, &a, &b));
        assert!(point_is_spike_or_equal_robust(&last, &a, &b, &policy));
    }

    #[test]
    fn disabled_policy_has_no_effect() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 1.0);
        let last = p(0.5, 0.5 + 1e-12);

        assert!(!point_is_spike_or_equal_robust(&last, &a, &b, &NoRescale));

        let snap = RecalculateWith::disabled(|p: &Point2| {
            Point2::new(p.x().round() as i64, p.y().round() as i64)
        });
        assert!(!point_is_spike_or_equal_robust(&last, &a, &b, &snap));
        assert!(point_is_spike_or_equal_robust(&last, &a, &b, &snap.with_enabled(true)));
    }

    #[test]
    fn robust_fallback_never_downgrades() {
        // Moves collinear points off their line.
        let scatter =
            RecalculateWith::new(|p: &Point2<i64>| Point2::new(p.x(), p.y() * 1000 + p.x()));

        for last in grid() {
            for a in grid() {
                for b in grid() {
                    let base = point_is_spike_or_equal(&last, &a, &b);
                    if !base {
                        continue;
                    }

                    assert!(point_is_spike_or_equal_robust(&last, &a, &b, &NoRescale));
                    assert!(point_is_spike_or_equal_robust(&last, &a, &b, &scatter));
                    assert!(point_is_spike_or_equal_robust(
                        &last,
                        &a,
                        &b,
                        &scatter.with_enabled(false)
                    ));
                }
            }
        }
    }

    #[test]
    fn deterministic() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 1.0);
        let last = p(0.5, 0.5 + 1e-12);
        let policy = RescalePolicy::from_points([a, b, last].iter()).unwrap();

        let first = point_is_spike_or_equal_robust(&last, &a, &b, &policy);
        for _ in 0..10 {
            assert_eq!(point_is_spike_or_equal_robust(&last, &a, &b, &policy), first);
            assert!(!point_is_spike_or_equal(&last, &a, &b));
        }
    }
}
