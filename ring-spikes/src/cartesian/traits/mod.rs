mod cartesian_point;

pub use cartesian_point::CartesianPoint2d;
