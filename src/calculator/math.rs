//! Arithmetic primitives.
//!
//! Every operation returns its numeric result paired with a [`ValueError`]
//! classifying it. Nothing here panics; failure is reported only through
//! the returned classification.

use serde::{Deserialize, Serialize};

/// Classification of a computed (or parsed) value.
///
/// The declaration order is the ordinal order used to index error message
/// tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueError {
    /// The value is an ordinary finite number.
    #[default]
    None,
    /// A divisor or reciprocal base was exactly zero.
    DivideByZero,
    /// The result is not a number, e.g. the square root of a negative.
    NotANumber,
    /// The result is positive infinity.
    PositiveOverflow,
    /// The result is negative infinity.
    NegativeOverflow,
    /// The display text could not be read back as a number.
    Unknown,
}

impl ValueError {
    /// All kinds in ordinal order.
    pub const ALL: [ValueError; 6] = [
        Self::None,
        Self::DivideByZero,
        Self::NotANumber,
        Self::PositiveOverflow,
        Self::NegativeOverflow,
        Self::Unknown,
    ];

    /// Position of this kind in the error message table.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Check if this classification is an error.
    pub fn is_error(self) -> bool {
        self != Self::None
    }
}

/// Classify a result: NaN, +∞ and −∞ are errors, anything else is fine.
pub fn classify(z: f64) -> ValueError {
    if z.is_nan() {
        ValueError::NotANumber
    } else if z == f64::INFINITY {
        ValueError::PositiveOverflow
    } else if z == f64::NEG_INFINITY {
        ValueError::NegativeOverflow
    } else {
        ValueError::None
    }
}

fn classified(z: f64) -> (f64, ValueError) {
    (z, classify(z))
}

/// Compute `x + y`.
pub fn add(x: f64, y: f64) -> (f64, ValueError) {
    classified(x + y)
}

/// Compute `x - y`.
pub fn subtract(x: f64, y: f64) -> (f64, ValueError) {
    classified(x - y)
}

/// Compute `x * y`.
pub fn multiply(x: f64, y: f64) -> (f64, ValueError) {
    classified(x * y)
}

/// Divide `x` by `y`.
///
/// A zero divisor is always [`ValueError::DivideByZero`], whatever the
/// floating point quotient turns out to be (including `0 / 0`).
pub fn divide(x: f64, y: f64) -> (f64, ValueError) {
    let z = x / y;
    if y == 0.0 {
        (z, ValueError::DivideByZero)
    } else {
        (z, classify(z))
    }
}

/// Compute the square root of `x`; negative input is [`ValueError::NotANumber`].
pub fn square_root(x: f64) -> (f64, ValueError) {
    classified(x.sqrt())
}

/// Compute `x * x`.
pub fn square(x: f64) -> (f64, ValueError) {
    classified(x * x)
}

/// Compute `1 / x`, with a zero base reported as [`ValueError::DivideByZero`].
pub fn reciprocal(x: f64) -> (f64, ValueError) {
    let z = 1.0 / x;
    if x == 0.0 {
        (z, ValueError::DivideByZero)
    } else {
        (z, classify(z))
    }
}

/// Flip the sign of `x`.
pub fn negate(x: f64) -> (f64, ValueError) {
    classified(-x)
}

/// Compute `x / 100`.
pub fn percent(x: f64) -> (f64, ValueError) {
    classified(x / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(1.5), ValueError::None);
        assert_eq!(classify(f64::NAN), ValueError::NotANumber);
        assert_eq!(classify(f64::INFINITY), ValueError::PositiveOverflow);
        assert_eq!(classify(f64::NEG_INFINITY), ValueError::NegativeOverflow);
        assert_eq!(classify(f64::MAX), ValueError::None);
    }

    #[test]
    fn test_divide_finite() {
        for (x, y) in [(7.0, 2.0), (-9.0, 3.0), (1.0, 3.0), (0.0, -5.0)] {
            let (z, err) = divide(x, y);
            assert_eq!(z, x / y);
            assert_eq!(err, ValueError::None);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        for x in [7.0, -7.0, 0.0, f64::MAX] {
            assert_eq!(divide(x, 0.0).1, ValueError::DivideByZero);
            assert_eq!(divide(x, -0.0).1, ValueError::DivideByZero);
        }
    }

    #[test]
    fn test_divide_overflow() {
        assert_eq!(divide(f64::MAX, 0.5).1, ValueError::PositiveOverflow);
        assert_eq!(divide(-f64::MAX, 0.5).1, ValueError::NegativeOverflow);
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(reciprocal(0.0).1, ValueError::DivideByZero);
        assert_eq!(reciprocal(4.0), (0.25, ValueError::None));
        assert_eq!(reciprocal(-0.5), (-2.0, ValueError::None));
    }

    #[test]
    fn test_square_root_of_negative() {
        let (z, err) = square_root(-4.0);
        assert!(z.is_nan());
        assert_eq!(err, ValueError::NotANumber);
        assert_eq!(square_root(16.0), (4.0, ValueError::None));
    }

    #[test]
    fn test_binary_overflow() {
        assert_eq!(add(f64::MAX, f64::MAX).1, ValueError::PositiveOverflow);
        assert_eq!(subtract(-f64::MAX, f64::MAX).1, ValueError::NegativeOverflow);
        assert_eq!(multiply(f64::MAX, -2.0).1, ValueError::NegativeOverflow);
        assert_eq!(square(1e200).1, ValueError::PositiveOverflow);
    }

    #[test]
    fn test_ordinals() {
        for (i, kind) in ValueError::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), i);
        }
        assert!(!ValueError::None.is_error());
        assert!(ValueError::Unknown.is_error());
    }
}
