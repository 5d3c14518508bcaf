use crate::cartesian::traits::CartesianPoint2d;
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, ToPrimitive};

impl<Num> CartesianPoint2d for nalgebra::Point2<Num>
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
