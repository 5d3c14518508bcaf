use crate::cartesian::impls::Vector2;
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, Num, ToPrimitive};

/// A point in 2d cartesian coordinates.
///
/// This is the only capability the spike predicate requires from a point type: access to its two axes. Coordinates
/// are generic, so integer grids and floating point coordinates are handled by the same code.
pub trait CartesianPoint2d {
    /// Coordinate type.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive + ToPrimitive;

    /// Coordinate along the first axis.
    fn x(&self) -> Self::Num;
    /// Coordinate along the second axis.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Component-wise difference `self - other`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;

    #[test]
    fn sub() {
        let p1 = Point2::new(3.0, 1.0);
        let p2 = Point2::new(1.0, 4.0);

        assert_eq!(p1.sub(&p2), Vector2::new(2.0, -3.0));
        assert_eq!(p2.sub(&p1), Vector2::new(-2.0, 3.0));
    }

    #[test]
    fn equal_across_point_types() {
        let p1 = Point2::new(1i64, 2);
        let p2 = nalgebra::Point2::new(1i64, 2);
        let p3 = nalgebra::Point2::new(1i64, 3);

        assert!(p1.equal(&p2));
        assert!(!p1.equal(&p3));
    }
}
