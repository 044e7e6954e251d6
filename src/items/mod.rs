mod calculator;

pub use calculator::CalculatorView;
