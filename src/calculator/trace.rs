//! The equation trace: the tokens of the equation being built, left to
//! right, plus the binary operator keys that produce the operator tokens.

use super::math::{self, ValueError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator symbols by ordinal; slot 0 is "no operator pending".
pub const OPERATOR_SYMBOLS: [&str; 6] = ["", "+", "-", "×", "÷", "="];

/// A binary operator key, or equals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
    /// `=`, which also finishes the calculation.
    Equal,
}

impl Operator {
    /// Position in [`OPERATOR_SYMBOLS`].
    pub fn ordinal(self) -> usize {
        match self {
            Self::Add => 1,
            Self::Subtract => 2,
            Self::Multiply => 3,
            Self::Divide => 4,
            Self::Equal => 5,
        }
    }

    /// The symbol shown in the trace.
    pub fn symbol(self) -> &'static str {
        OPERATOR_SYMBOLS[self.ordinal()]
    }

    /// Combine the accumulator with the right-hand value.
    ///
    /// With no pending operator, or a pending equals, the right-hand value
    /// is taken as is.
    pub fn evaluate(pending: Option<Self>, accumulator: f64, rhs: f64) -> (f64, ValueError) {
        match pending {
            None | Some(Self::Equal) => (rhs, ValueError::None),
            Some(Self::Add) => math::add(accumulator, rhs),
            Some(Self::Subtract) => math::subtract(accumulator, rhs),
            Some(Self::Multiply) => math::multiply(accumulator, rhs),
            Some(Self::Divide) => math::divide(accumulator, rhs),
        }
    }
}

/// Check if a trace token is an operator symbol.
pub fn is_operator_symbol(token: &str) -> bool {
    OPERATOR_SYMBOLS[1..].iter().any(|symbol| *symbol == token)
}

/// Ordered display tokens of the current equation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    tokens: Vec<String>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Remove and return the last token.
    pub fn pop_last(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    /// The last token, if any.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Check if the last token is an operator symbol.
    pub fn ends_with_operator(&self) -> bool {
        self.last().is_some_and(is_operator_symbol)
    }

    /// Remove every token.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Replace the whole trace with the tokens of an equation string.
    pub fn load(&mut self, equation: &str) {
        self.tokens = equation.split_whitespace().map(str::to_string).collect();
    }

    /// All tokens in display order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Check if the trace has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
