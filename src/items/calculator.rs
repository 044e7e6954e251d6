//! Calculator view representing everything a front end renders.

use crate::calculator::{Calculator, HistoryEntry, Mode, ValueError};
use serde::Serialize;

/// A snapshot of the calculator's observable state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorView {
    /// The main display: typed number, result, or error message.
    pub display: String,
    /// The equation trace joined by spaces.
    pub equation: String,
    pub mode: Mode,
    /// False while an error is held; number, function and operator keys
    /// should be greyed out.
    pub computation_enabled: bool,
    /// The held error kind, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValueError>,
    /// Finished calculations, oldest first.
    pub history: Vec<HistoryEntry>,
}

impl CalculatorView {
    /// Build a view from the current calculator state.
    pub fn from_calculator(calc: &Calculator) -> Self {
        let error = calc.error();
        Self {
            display: calc.display_text().to_string(),
            equation: calc.trace_text(),
            mode: calc.mode(),
            computation_enabled: calc.computation_enabled(),
            error: error.is_error().then_some(error),
            history: calc.history_entries().to_vec(),
        }
    }

    /// Check if this view shows an error message.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<&Calculator> for CalculatorView {
    fn from(calc: &Calculator) -> Self {
        Self::from_calculator(calc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Action, Operator};

    #[test]
    fn test_view_of_result() {
        let mut calc = Calculator::new();
        calc.apply_all([
            Action::Digit(5),
            Action::Operator(Operator::Add),
            Action::Digit(3),
            Action::Equals,
        ])
        .unwrap();

        let view = CalculatorView::from(&calc);
        assert_eq!(view.display, "8");
        assert_eq!(view.equation, "5 + 3 =");
        assert_eq!(view.mode, Mode::Success);
        assert!(view.computation_enabled);
        assert!(!view.is_error());
        assert_eq!(view.history, vec![HistoryEntry::new("5 + 3", "8")]);
    }

    #[test]
    fn test_view_of_error() {
        let mut calc = Calculator::new();
        calc.apply_all([Action::Digit(1), Action::Operator(Operator::Divide), Action::Digit(0), Action::Equals])
            .unwrap();

        let view = CalculatorView::from_calculator(&calc);
        assert!(view.is_error());
        assert_eq!(view.error, Some(ValueError::DivideByZero));
        assert_eq!(view.mode, Mode::Error);
        assert!(!view.computation_enabled);
    }

    #[test]
    fn test_json_shape() {
        let calc = Calculator::new();
        let json = serde_json::to_value(CalculatorView::from(&calc)).unwrap();
        assert_eq!(json["display"], "0");
        assert_eq!(json["mode"], "number");
        assert_eq!(json["computation_enabled"], true);
        assert!(json.get("error").is_none());
        assert_eq!(json["history"], serde_json::json!([]));
    }
}
