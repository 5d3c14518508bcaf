use crate::cartesian::traits::CartesianPoint2d;
use crate::cartesian::Point2;
use nalgebra::Scalar;
use num_traits::{FromPrimitive, Num};
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar + FromPrimitive> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum x coordinate.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x coordinate.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y coordinate.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y coordinate.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// The larger of width and height.
    pub fn max_extent(&self) -> N {
        let width = self.width();
        let height = self.height();
        if width >= height {
            width
        } else {
            height
        }
    }

    /// Corner with the smallest coordinates.
    pub fn min_point(&self) -> Point2<N> {
        Point2::new(self.x_min, self.y_min)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Zero-sized rectangle at the given point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Bounding rectangle of the points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points() {
        let points = [
            Point2::new(1.0, -1.0),
            Point2::new(-3.0, 2.0),
            Point2::new(0.5, 7.0),
        ];
        let rect = Rect::from_points(points.iter()).unwrap();

        assert_eq!(rect, Rect::new(-3.0, -1.0, 1.0, 7.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 8.0);
        assert_eq!(rect.max_extent(), 8.0);
        assert_eq!(rect.min_point(), Point2::new(-3.0, -1.0));
    }

    #[test]
    fn from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Rect::from_points(points.iter()).is_none());
    }
}
