//! Sign of a scalar.

use serde::{Deserialize, Serialize};

/// Sign of a value: `-1`, `0` or `+1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Strictly less than zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly greater than zero.
    Positive,
}

impl Sign {
    /// Sign of the value. Only an exact zero (including `-0.0`) gives [`Sign::Zero`].
    ///
    /// Values that cannot be compared with zero (NaN) are treated as zero.
    pub fn of<N: num_traits::Zero + PartialOrd>(value: N) -> Self {
        let zero = N::zero();
        if value > zero {
            Sign::Positive
        } else if value < zero {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of() {
        assert_eq!(Sign::of(3.5), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
        assert_eq!(Sign::of(-4i64), Sign::Negative);
        assert_eq!(Sign::of(0u32), Sign::Zero);
    }
}
