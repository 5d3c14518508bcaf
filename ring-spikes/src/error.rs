//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RingSpikesError {
    /// A robustness policy cannot be derived from an empty set of points.
    #[error("cannot compute rescale policy from an empty set of points")]
    EmptyInput,
    /// Bounds of the input points are not finite.
    #[error("bounds of the input points are not finite: {0}")]
    NonFiniteBounds(String),
}
