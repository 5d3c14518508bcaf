use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::CartesianPoint2d;
use crate::sign::Sign;

mod point;

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Signs of the vector components, `[sign(dx), sign(dy)]`.
    pub fn signs(&self) -> [Sign; 2]
    where
        Num: num_traits::Zero + PartialOrd,
    {
        [Sign::of(self.dx), Sign::of(self.dy)]
    }

    /// Returns true if both components are exactly zero.
    pub fn is_zero(&self) -> bool
    where
        Num: num_traits::Zero + PartialOrd,
    {
        self.signs() == [Sign::Zero, Sign::Zero]
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num> CartesianPoint2d for Point2<Num>
where
    Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive + ToPrimitive,
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}
