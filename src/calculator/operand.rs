//! The operand being entered or transformed.
//!
//! An operand is the number as it was typed (its domain value) plus the
//! chain of unary functions applied to it. Rendering folds the chain over
//! the typed number, each function wrapping the previous text in its own
//! notation, so `sqrt` then `sqr` on 16 renders as `sqr(√(16))`.

use super::format::format_value;
use super::math::{self, ValueError};
use serde::{Deserialize, Serialize};

/// Notation templates by function ordinal; slot 0 is the bare value.
pub const NOTATION_TEMPLATES: [&str; 6] =
    ["{0}", "√({0})", "sqr({0})", "1/({0})", "-({0})", "({0})/100"];

const PLACEHOLDER: &str = "{0}";

/// A unary function key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Function {
    /// `√(x)`
    SquareRoot,
    /// `sqr(x)`
    Square,
    /// `1/(x)`
    Reciprocal,
    /// `-(x)`, or a sign flip of a plain typed number.
    Negate,
    /// `(x)/100`, or a plain typed number divided by 100.
    Percent,
}

impl Function {
    /// Position in [`NOTATION_TEMPLATES`]. Ordinal 0 is reserved for "no
    /// function".
    pub fn ordinal(self) -> usize {
        match self {
            Self::SquareRoot => 1,
            Self::Square => 2,
            Self::Reciprocal => 3,
            Self::Negate => 4,
            Self::Percent => 5,
        }
    }

    /// Wrap already rendered text in this function's notation.
    pub fn wrap(self, inner: &str) -> String {
        NOTATION_TEMPLATES[self.ordinal()].replace(PLACEHOLDER, inner)
    }

    /// Evaluate the function through the matching primitive.
    pub fn evaluate(self, x: f64) -> (f64, ValueError) {
        match self {
            Self::SquareRoot => math::square_root(x),
            Self::Square => math::square(x),
            Self::Reciprocal => math::reciprocal(x),
            Self::Negate => math::negate(x),
            Self::Percent => math::percent(x),
        }
    }

    /// Negate and percent edit a plain typed number in place instead of
    /// starting a function chain.
    pub fn edits_raw_entry(self) -> bool {
        matches!(self, Self::Negate | Self::Percent)
    }
}

/// How [`Operand::apply`] handled a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Application {
    /// The typed value itself was changed; the operand is still a plain
    /// number.
    Raw,
    /// The function joined the chain, with the classification of the new
    /// final value.
    Chained(ValueError),
}

/// A typed value with the unary functions applied to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Operand {
    domain_value: f64,
    final_value: f64,
    functions: Vec<Function>,
}

impl Operand {
    /// Create a plain operand with no functions applied.
    pub fn new(value: f64) -> Self {
        Self {
            domain_value: value,
            final_value: value,
            functions: Vec::new(),
        }
    }

    /// The value as typed or recalled, before any function.
    pub fn domain_value(&self) -> f64 {
        self.domain_value
    }

    /// The domain value with every chained function applied in order.
    pub fn final_value(&self) -> f64 {
        self.final_value
    }

    /// Applied functions, oldest first.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Check if no function has been chained yet.
    pub fn is_raw(&self) -> bool {
        self.functions.is_empty()
    }

    /// Append `function` to the chain and fold it into the final value.
    pub fn apply_function(&mut self, function: Function) -> ValueError {
        let (value, error) = function.evaluate(self.final_value);
        self.final_value = value;
        self.functions.push(function);
        error
    }

    /// Apply a function key.
    ///
    /// Negate and percent on an operand with an empty chain mutate the
    /// domain value directly. Every other case goes through
    /// [`Operand::apply_function`].
    pub fn apply(&mut self, function: Function) -> Application {
        if function.edits_raw_entry() && self.is_raw() {
            let (value, _) = function.evaluate(self.domain_value);
            self.domain_value = value;
            self.final_value = value;
            return Application::Raw;
        }
        Application::Chained(self.apply_function(function))
    }

    /// Render the operand in function notation.
    pub fn render(&self) -> String {
        if self.is_raw() {
            return format_value(self.final_value);
        }
        self.functions
            .iter()
            .fold(format_value(self.domain_value), |text, function| {
                function.wrap(&text)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_operand() {
        let operand = Operand::new(0.0);
        assert!(operand.is_raw());
        assert_eq!(operand.render(), "0");
        assert_eq!(operand, Operand::default());
    }

    #[test]
    fn test_chain_round_trip() {
        let mut operand = Operand::new(16.0);
        assert_eq!(operand.apply(Function::SquareRoot), Application::Chained(ValueError::None));
        assert_eq!(operand.apply(Function::Square), Application::Chained(ValueError::None));
        assert!((operand.final_value() - 16.0).abs() < 1e-12);
        assert_eq!(operand.domain_value(), 16.0);
        assert_eq!(operand.functions(), &[Function::SquareRoot, Function::Square]);
        assert_eq!(operand.render(), "sqr(√(16))");
    }

    #[test]
    fn test_negate_raw_entry() {
        let mut operand = Operand::new(5.0);
        assert_eq!(operand.apply(Function::Negate), Application::Raw);
        assert!(operand.functions().is_empty());
        assert_eq!(operand.domain_value(), -5.0);
        assert_eq!(operand.final_value(), -5.0);
        assert_eq!(operand.render(), "-5");
    }

    #[test]
    fn test_percent_raw_entry() {
        let mut operand = Operand::new(50.0);
        assert_eq!(operand.apply(Function::Percent), Application::Raw);
        assert_eq!(operand.render(), "0.5");
    }

    #[test]
    fn test_negate_after_chain() {
        let mut operand = Operand::new(9.0);
        operand.apply(Function::SquareRoot);
        assert_eq!(operand.apply(Function::Negate), Application::Chained(ValueError::None));
        assert_eq!(operand.final_value(), -3.0);
        assert_eq!(operand.render(), "-(√(9))");

        assert_eq!(operand.apply(Function::Percent), Application::Chained(ValueError::None));
        assert_eq!(operand.render(), "(-(√(9)))/100");
        assert!((operand.final_value() + 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_apply_function_always_chains() {
        let mut operand = Operand::new(5.0);
        assert_eq!(operand.apply_function(Function::Negate), ValueError::None);
        assert_eq!(operand.render(), "-(5)");
        assert_eq!(operand.domain_value(), 5.0);
    }

    #[test]
    fn test_chain_errors() {
        let mut operand = Operand::new(0.0);
        assert_eq!(
            operand.apply(Function::Reciprocal),
            Application::Chained(ValueError::DivideByZero)
        );
        assert_eq!(operand.render(), "1/(0)");

        let mut operand = Operand::new(-4.0);
        assert_eq!(
            operand.apply(Function::SquareRoot),
            Application::Chained(ValueError::NotANumber)
        );
    }

    #[test]
    fn test_templates() {
        assert_eq!(NOTATION_TEMPLATES[0], "{0}");
        assert_eq!(Function::SquareRoot.wrap("4"), "√(4)");
        assert_eq!(Function::Square.wrap("4"), "sqr(4)");
        assert_eq!(Function::Reciprocal.wrap("4"), "1/(4)");
        assert_eq!(Function::Negate.wrap("4"), "-(4)");
        assert_eq!(Function::Percent.wrap("4"), "(4)/100");
    }
}
