//! Detection and removal of spikes and duplicate vertices in polygon rings.
//!
//! The core of the crate is [`point_is_spike_or_equal`]: given a segment `a -> b` of a ring boundary and the point
//! that follows it, it decides whether `b` is a degenerate vertex, either because the next point repeats it, or
//! because the boundary turns back along the same line at `b`.
//!
//! Floating point coordinates of nearly collinear points often produce a non-zero orientation, hiding a spike.
//! [`point_is_spike_or_equal_robust`] re-checks such triples after converting the points with a
//! [`RobustPolicy`](robust_policy::RobustPolicy), e.g. [`RescalePolicy`](robust_policy::RescalePolicy), which snaps
//! coordinates to an integer grid.
//!
//! Functions in [`remove_spikes`] module use the predicate to clean whole contours and polygons.
//!
//! All functions are generic over the point type through the [`CartesianPoint2d`](cartesian::CartesianPoint2d)
//! trait. It is implemented for [`Point2`](cartesian::Point2), `nalgebra::Point2` and, with the `geo-types` feature,
//! for `geo_types::Coord` and `geo_types::Point`.

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod impls;
pub mod polygon;
pub mod remove_spikes;
pub mod robust_policy;
pub mod segment;
pub mod side;
pub mod sign;
pub mod spike;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use contour::{ClosedContour, Contour};
pub use error::RingSpikesError;
pub use polygon::Polygon;
pub use spike::{
    point_is_spike_or_equal, point_is_spike_or_equal_by, point_is_spike_or_equal_robust,
};
