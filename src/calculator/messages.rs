//! Error message table.
//!
//! The wording is owned by whoever renders the calculator; the core only
//! maps each [`ValueError`] kind to its entry.

use super::math::ValueError;
use serde::{Deserialize, Serialize};

/// Messages shown in place of the display when a computation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    /// Shown for [`ValueError::DivideByZero`].
    pub divide_by_zero: String,
    /// Shown for [`ValueError::NotANumber`].
    pub not_a_number: String,
    /// Shown for [`ValueError::PositiveOverflow`].
    pub positive_overflow: String,
    /// Shown for [`ValueError::NegativeOverflow`].
    pub negative_overflow: String,
    /// Shown for [`ValueError::Unknown`].
    pub unknown: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            divide_by_zero: "Cannot divide by zero".to_string(),
            not_a_number: "Result is undefined".to_string(),
            positive_overflow: "Overflow".to_string(),
            negative_overflow: "Underflow".to_string(),
            unknown: "Unknown error".to_string(),
        }
    }
}

impl ErrorMessages {
    /// The whole table indexed by [`ValueError::ordinal`];
    /// [`ValueError::None`] has an empty message.
    pub fn table(&self) -> [&str; 6] {
        [
            "",
            self.divide_by_zero.as_str(),
            self.not_a_number.as_str(),
            self.positive_overflow.as_str(),
            self.negative_overflow.as_str(),
            self.unknown.as_str(),
        ]
    }

    /// Get the message for an error kind.
    pub fn message(&self, error: ValueError) -> &str {
        self.table()[error.ordinal()]
    }
}
