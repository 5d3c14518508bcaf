//! Removal of spikes and duplicate points from contours and polygons.
//!
//! Cleaning walks the points of a contour and drops every vertex that [`point_is_spike_or_equal`] reports as
//! degenerate. For closed contours the vertices around the implied closing segment are checked too. Points that
//! continue straight along a line are kept: they are redundant but not degenerate.

use crate::cartesian::CartesianPoint2d;
use crate::contour::Contour;
use crate::impls;
use crate::polygon::Polygon;
use crate::robust_policy::RobustPolicy;
use crate::spike::{point_is_spike_or_equal, point_is_spike_or_equal_robust};

/// Minimal number of points in a valid closed contour.
pub const MIN_CLOSED_CONTOUR_POINTS: usize = 3;

/// Returns a copy of the contour without spikes and duplicate points.
///
/// A closed contour that is left with less than [`MIN_CLOSED_CONTOUR_POINTS`] points is returned empty. An open
/// contour always keeps at least its first point, if it had any.
pub fn remove_spikes<C>(contour: &C) -> impls::Contour<C::Point>
where
    C: Contour,
    C::Point: CartesianPoint2d + Clone,
{
    clean_points(contour.iter_points(), contour.is_closed(), |last, a, b| {
        point_is_spike_or_equal(last, a, b)
    })
}

/// Same as [`remove_spikes`], but spikes are detected with [`point_is_spike_or_equal_robust`].
pub fn remove_spikes_robust<C, R>(contour: &C, robust_policy: &R) -> impls::Contour<C::Point>
where
    C: Contour,
    C::Point: CartesianPoint2d + Clone,
    R: RobustPolicy<C::Point>,
{
    clean_points(contour.iter_points(), contour.is_closed(), |last, a, b| {
        point_is_spike_or_equal_robust(last, a, b, robust_policy)
    })
}

/// Returns a copy of the polygon with spikes and duplicate points removed from all its contours.
///
/// Inner contours that collapse are dropped. Returns `None` if the outer contour collapses.
pub fn remove_polygon_spikes<Poly, P>(polygon: &Poly) -> Option<impls::Polygon<P>>
where
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
    P: CartesianPoint2d + Clone,
{
    clean_polygon(polygon, |last, a, b| point_is_spike_or_equal(last, a, b))
}

/// Same as [`remove_polygon_spikes`], but spikes are detected with [`point_is_spike_or_equal_robust`].
pub fn remove_polygon_spikes_robust<Poly, P, R>(
    polygon: &Poly,
    robust_policy: &R,
) -> Option<impls::Polygon<P>>
where
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
    P: CartesianPoint2d + Clone,
    R: RobustPolicy<P>,
{
    clean_polygon(polygon, |last, a, b| {
        point_is_spike_or_equal_robust(last, a, b, robust_policy)
    })
}

/// Returns true if any vertex of the contour is a spike or a duplicate of its predecessor.
pub fn has_spikes<C>(contour: &C) -> bool
where
    C: Contour,
    C::Point: CartesianPoint2d,
{
    let segments: Vec<_> = contour.iter_segments().collect();
    if segments.iter().any(|segment| segment.is_degenerate()) {
        return true;
    }

    let closing = match (segments.last(), segments.first()) {
        (Some(last), Some(first)) if contour.is_closed() && segments.len() > 1 => {
            Some((last, first))
        }
        _ => None,
    };

    segments
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .chain(closing)
        .any(|(segment, next)| segment.is_spike_or_equal(next.1))
}

fn clean_polygon<Poly, P>(
    polygon: &Poly,
    is_spike: impl Fn(&P, &P, &P) -> bool,
) -> Option<impls::Polygon<P>>
where
    Poly: Polygon,
    Poly::Contour: Contour<Point = P>,
    P: CartesianPoint2d + Clone,
{
    let outer = clean_points(polygon.outer_contour().iter_points(), true, &is_spike);
    if outer.is_empty() {
        log::debug!("Outer contour of the polygon collapsed after removing spikes");
        return None;
    }

    let inner_contours = polygon
        .inner_contours()
        .map(|contour| clean_points(contour.iter_points(), true, &is_spike))
        .filter(|contour| !contour.is_empty())
        .filter_map(impls::Contour::into_closed)
        .collect();

    Some(impls::Polygon::new(outer.into_closed()?, inner_contours))
}

fn clean_points<'a, P>(
    points: impl Iterator<Item = &'a P>,
    is_closed: bool,
    is_spike: impl Fn(&P, &P, &P) -> bool,
) -> impls::Contour<P>
where
    P: CartesianPoint2d + Clone + 'a,
{
    let mut cleaned: Vec<P> = Vec::new();
    let mut input_count = 0;

    for point in points {
        input_count += 1;
        cleaned.push(point.clone());

        while cleaned.len() >= 3 {
            let n = cleaned.len();
            if !is_spike(&cleaned[n - 1], &cleaned[n - 3], &cleaned[n - 2]) {
                break;
            }
            cleaned.remove(n - 2);
        }
    }

    if is_closed {
        remove_closing_spikes(&mut cleaned, &is_spike);
        if cleaned.len() < MIN_CLOSED_CONTOUR_POINTS {
            cleaned.clear();
        }
    } else if cleaned.len() == 2 && cleaned[0].equal(&cleaned[1]) {
        cleaned.pop();
    }

    let removed = input_count - cleaned.len();
    if removed > 0 {
        log::debug!("Removed {removed} of {input_count} contour points as spikes or duplicates");
    }

    impls::Contour::new(cleaned, is_closed)
}

/// Checks the last and the first vertices, whose neighbours are connected by the closing segment.
fn remove_closing_spikes<P>(cleaned: &mut Vec<P>, is_spike: impl Fn(&P, &P, &P) -> bool) {
    while cleaned.len() >= MIN_CLOSED_CONTOUR_POINTS {
        let n = cleaned.len();
        if is_spike(&cleaned[0], &cleaned[n - 2], &cleaned[n - 1]) {
            cleaned.pop();
        } else if is_spike(&cleaned[1], &cleaned[n - 1], &cleaned[0]) {
            cleaned.remove(0);
        } else {
            break;
        }
    }
}
