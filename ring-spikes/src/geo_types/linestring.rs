use geo_types::{Coord, CoordNum, LineString};

use crate::contour::Contour;

/// A line string is treated as closed when its first and last points are equal. The repeated point is not returned by
/// `iter_points`.
impl<T: CoordNum> Contour for LineString<T> {
    type Point = Coord<T>;

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        if LineString::is_closed(self) {
            self.0[..(self.0.len().max(1) - 1)].iter()
        } else {
            self.0.iter()
        }
    }
}
