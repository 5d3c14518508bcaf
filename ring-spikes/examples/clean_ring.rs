//! Cleans a ring with a duplicate vertex, a spike and a spike hidden by floating point rounding.
//!
//! Run with `RUST_LOG=debug` to see what the cleaning does.

use ring_spikes::cartesian::Point2;
use ring_spikes::impls::ClosedContour;
use ring_spikes::remove_spikes::{has_spikes, remove_spikes, remove_spikes_robust};
use ring_spikes::robust_policy::RescalePolicy;
use ring_spikes::{Contour, RingSpikesError};

fn main() -> Result<(), RingSpikesError> {
    env_logger::init();

    let ring = ClosedContour::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        // Spike going up and back along the same line.
        Point2::new(10.0, 15.0),
        Point2::new(10.0, 12.0),
        Point2::new(5.0, 10.0),
        // Nearly goes back to (5, 10).
        Point2::new(2.0, 10.0),
        Point2::new(4.0, 10.0 + 1e-12),
        Point2::new(0.0, 10.0),
    ]);

    println!("Input: {:?}", ring.points);
    println!("Has spikes: {}", has_spikes(&ring));

    let cleaned = remove_spikes(&ring);
    print_contour("Cleaned", &cleaned);

    let policy = RescalePolicy::from_points(ring.points.iter())?;
    let cleaned = remove_spikes_robust(&ring, &policy);
    print_contour("Cleaned with rescaling", &cleaned);
    println!("Has spikes after cleaning: {}", has_spikes(&cleaned));

    Ok(())
}

fn print_contour(title: &str, contour: &impl Contour<Point = Point2>) {
    let points: Vec<_> = contour.iter_points().collect();
    println!("{title} ({} points): {points:?}", points.len());
}
