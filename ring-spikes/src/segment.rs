use crate::cartesian::CartesianPoint2d;
use crate::robust_policy::RobustPolicy;
use crate::spike::{point_is_spike_or_equal, point_is_spike_or_equal_robust};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Returns true if the segment has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(self.1)
    }

    /// Returns true if continuing from the end of the segment to `next` makes the end point of the segment a spike
    /// or a duplicate. See [`point_is_spike_or_equal`].
    pub fn is_spike_or_equal<Point>(&self, next: &Point) -> bool
    where
        Point: CartesianPoint2d<Num = P::Num>,
    {
        point_is_spike_or_equal(next, self.0, self.1)
    }

    /// Same as [`Segment::is_spike_or_equal`] but uses the robust policy as a fallback. See
    /// [`point_is_spike_or_equal_robust`].
    pub fn is_spike_or_equal_robust<R>(&self, next: &P, robust_policy: &R) -> bool
    where
        R: RobustPolicy<P>,
    {
        point_is_spike_or_equal_robust(next, self.0, self.1, robust_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;
    use crate::robust_policy::NoRescale;

    #[test]
    fn is_spike_or_equal() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let segment = Segment(&a, &b);

        assert!(!segment.is_degenerate());
        assert!(segment.is_spike_or_equal(&Point2::new(1.0, 0.0)));
        assert!(segment.is_spike_or_equal(&Point2::new(2.0, 0.0)));
        assert!(!segment.is_spike_or_equal(&Point2::new(3.0, 0.0)));
        assert!(!segment.is_spike_or_equal_robust(&Point2::new(1.0, 1.0), &NoRescale));
    }

    #[test]
    fn degenerate() {
        let a = Point2::new(1, 1);
        let segment = Segment(&a, &a);

        assert!(segment.is_degenerate());
        assert!(segment.is_spike_or_equal(&Point2::new(5, 9)));
    }
}
