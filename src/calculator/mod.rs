//! Calculator core.
//!
//! This module provides:
//! - Arithmetic primitives that classify their results instead of failing
//! - The operand model with its chain of unary functions
//! - The equation trace and the history of finished calculations
//! - The state machine turning key presses into display text

mod format;
mod history;
mod machine;
mod math;
mod messages;
mod operand;
mod trace;

pub use format::{ZERO, format_value, parse_value};
pub use history::{History, HistoryEntry};
pub use machine::{Action, Calculator, Error, Mode};
pub use math::{
    ValueError, add, classify, divide, multiply, negate, percent, reciprocal, square,
    square_root, subtract,
};
pub use messages::ErrorMessages;
pub use operand::{Application, Function, NOTATION_TEMPLATES, Operand};
pub use trace::{OPERATOR_SYMBOLS, Operator, Trace, is_operator_symbol};
