//! The calculator state machine.
//!
//! Key presses arrive one at a time as [`Action`]s. The current [`Mode`]
//! decides how each one is read: a digit after an operator starts a new
//! number, a second function press replaces the previous rendering in the
//! trace, an operator right after another operator replaces it, and so on.
//!
//! Once a computation fails the machine holds the error until it is
//! cleared. Every action other than all-clear and clear-history is refused
//! while the error stands.

use super::format::{ZERO, format_value, parse_value};
use super::history::{History, HistoryEntry};
use super::math::ValueError;
use super::messages::ErrorMessages;
use super::operand::{Application, Function, Operand};
use super::trace::{Operator, Trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Interpretation context for the next action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// A number is being typed.
    #[default]
    Number,
    /// A unary function was just applied.
    Function,
    /// A binary operator was just pressed.
    Operator,
    /// Equals was just pressed; the display holds a finished result.
    Success,
    /// A history entry was just recalled.
    Load,
    /// A computation failed; only all-clear recovers.
    Error,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Function => "function",
            Self::Operator => "operator",
            Self::Success => "success",
            Self::Load => "load",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Point,
    /// A unary function key.
    Function(Function),
    /// A binary operator key.
    Operator(Operator),
    /// The equals key, same as `Operator(Operator::Equal)`.
    Equals,
    /// Reset everything but the history; the only way out of an error.
    AllClear,
    /// Backspace.
    Delete,
    /// Recall the history entry at this index, oldest first.
    RecallHistory(usize),
    /// Empty the history log.
    ClearHistory,
}

impl Action {
    /// Check if the action is still accepted while an error is shown.
    pub fn allowed_in_error(self) -> bool {
        matches!(self, Self::AllClear | Self::ClearHistory)
    }
}

/// Actions the machine cannot interpret at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A digit key above 9.
    #[error("digit key out of range: {0}")]
    InvalidDigit(u8),
    /// A recall index past the end of the history.
    #[error("no history entry at index {0}")]
    UnknownHistoryEntry(usize),
}

/// The calculator session.
#[derive(Clone, Debug)]
pub struct Calculator {
    /// Last non-error mode; `error` takes precedence when set.
    mode: Mode,
    error: ValueError,
    pending: Option<Operator>,
    accumulator: f64,
    operand: Operand,
    display: String,
    trace: Trace,
    history: History,
    messages: ErrorMessages,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_settings(ErrorMessages::default(), None)
    }
}

impl Calculator {
    /// Create a calculator with default messages and unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom message table and history limit.
    pub fn with_settings(messages: ErrorMessages, history_limit: Option<usize>) -> Self {
        Self {
            mode: Mode::Number,
            error: ValueError::None,
            pending: None,
            accumulator: 0.0,
            operand: Operand::default(),
            display: ZERO.to_string(),
            trace: Trace::new(),
            history: History::with_limit(history_limit),
            messages,
        }
    }

    /// Current mode, [`Mode::Error`] while an error is held.
    pub fn mode(&self) -> Mode {
        if self.error.is_error() {
            Mode::Error
        } else {
            self.mode
        }
    }

    /// The held error, [`ValueError::None`] when there is none.
    pub fn error(&self) -> ValueError {
        self.error
    }

    /// Check if numeric keys are currently accepted.
    pub fn computation_enabled(&self) -> bool {
        !self.error.is_error()
    }

    /// The main display: typed number, result, or error message.
    pub fn display_text(&self) -> &str {
        if self.display.is_empty() {
            ZERO
        } else {
            &self.display
        }
    }

    /// The equation trace joined for display.
    pub fn trace_text(&self) -> String {
        self.trace.text()
    }

    /// The equation trace tokens.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Finished calculations, oldest first.
    pub fn history_entries(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Running left-hand value of the current chain of operators.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// The right-hand value being entered.
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// The operator to apply on the next operator or equals press.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Apply one action.
    ///
    /// Calculation failures are not errors here: they put the machine in
    /// [`Mode::Error`] and show a message. `Err` is only returned for
    /// actions that cannot be interpreted.
    pub fn apply(&mut self, action: Action) -> Result<(), Error> {
        if self.error.is_error() && !action.allowed_in_error() {
            debug!(?action, error = ?self.error, "action refused while in error");
            return Ok(());
        }

        let before = self.mode();
        match action {
            Action::Digit(digit) => self.press_digit(digit)?,
            Action::Point => self.press_point(),
            Action::Function(function) => self.press_function(function),
            Action::Operator(operator) => self.press_operator(operator),
            Action::Equals => self.press_operator(Operator::Equal),
            Action::AllClear => self.all_clear(),
            Action::Delete => self.delete(),
            Action::RecallHistory(index) => {
                let entry = self
                    .history
                    .get(index)
                    .cloned()
                    .ok_or(Error::UnknownHistoryEntry(index))?;
                self.recall(&entry);
            }
            Action::ClearHistory => self.history.clear(),
        }
        debug!(?action, from = %before, to = %self.mode(), display = %self.display_text(), "applied action");
        Ok(())
    }

    /// Apply a sequence of actions, stopping at the first one that cannot
    /// be interpreted.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Result<(), Error> {
        for action in actions {
            self.apply(action)?;
        }
        Ok(())
    }

    /// Load a finished calculation back as the current result.
    ///
    /// The equation replaces the trace and the result becomes both the
    /// accumulator and the operand. The entry is not re-evaluated.
    pub fn recall(&mut self, entry: &HistoryEntry) {
        if self.error.is_error() {
            debug!(equation = %entry.equation, "recall refused while in error");
            return;
        }
        let Some(result) = parse_value(&entry.result) else {
            self.fail(ValueError::Unknown);
            return;
        };

        self.operand = Operand::new(result);
        self.accumulator = result;
        self.trace.load(&entry.equation);
        self.pending = Some(Operator::Equal);
        self.mode = Mode::Load;
        self.display = format_value(result);
        trace!(equation = %entry.equation, result, "recalled history entry");
    }

    fn press_digit(&mut self, digit: u8) -> Result<(), Error> {
        if digit > 9 {
            return Err(Error::InvalidDigit(digit));
        }
        self.start_number();

        let mut text = if self.display_text() == ZERO {
            String::new()
        } else {
            self.display.clone()
        };
        text.push(char::from(b'0' + digit));
        self.set_entry(text);
        self.mode = Mode::Number;
        Ok(())
    }

    /// Unlike a digit, a point after any function, raw or chained, starts
    /// a new number.
    fn press_point(&mut self) {
        match self.mode {
            Mode::Operator => {
                if let Some(pending) = self.pending {
                    self.trace.push(pending.symbol());
                }
                self.reset_entry();
            }
            Mode::Function => self.reset_entry(),
            Mode::Success | Mode::Load => {
                self.reset_entry();
                self.trace.clear();
            }
            Mode::Number | Mode::Error => {}
        }

        let mut text = self.display_text().to_string();
        if !text.contains('.') {
            text.push('.');
        }
        self.display = text;
        self.mode = Mode::Number;
    }

    fn press_function(&mut self, function: Function) {
        match self.mode {
            Mode::Operator => self.operand = Operand::default(),
            // A repeated function replaces its own rendering.
            Mode::Function => {
                if self.trace.last().is_some() && !self.trace.ends_with_operator() {
                    self.trace.pop_last();
                }
            }
            Mode::Success | Mode::Load => {
                self.operand = Operand::new(self.accumulator);
                self.trace.clear();
            }
            Mode::Number | Mode::Error => {}
        }

        self.mode = Mode::Function;
        if let Application::Chained(error) = self.operand.apply(function) {
            self.trace.push(self.operand.render());
            trace!(?function, rendered = %self.operand.render(), "chained function");
            if error.is_error() {
                self.fail(error);
                return;
            }
        }
        self.display = format_value(self.operand.final_value());
    }

    fn press_operator(&mut self, operator: Operator) {
        match self.mode {
            Mode::Number | Mode::Function => {
                if self.operand.is_raw() {
                    self.trace.push(self.operand.render());
                }
                let (value, error) =
                    Operator::evaluate(self.pending, self.accumulator, self.operand.final_value());
                if error.is_error() {
                    self.fail(error);
                    return;
                }
                self.accumulator = value;
            }
            // An operator right after another one replaces it.
            Mode::Operator => {
                self.trace.pop_last();
            }
            Mode::Success => {
                self.operand = Operand::new(self.accumulator);
                self.trace.clear();
                self.trace.push(self.operand.render());
            }
            Mode::Load => {
                if self.trace.ends_with_operator() {
                    self.trace.pop_last();
                }
            }
            Mode::Error => return,
        }

        self.pending = Some(operator);
        self.display = format_value(self.accumulator);
        if operator == Operator::Equal {
            let result = format_value(self.accumulator);
            self.history.record(self.trace.text(), result.as_str());
            self.trace.push(operator.symbol());
            self.operand = Operand::new(self.accumulator);
            self.mode = Mode::Success;
            debug!(equation = %self.trace, result = %result, "recorded history entry");
        } else {
            self.trace.push(operator.symbol());
            self.mode = Mode::Operator;
        }
    }

    fn all_clear(&mut self) {
        self.mode = Mode::Number;
        self.error = ValueError::None;
        self.pending = None;
        self.operand = Operand::default();
        self.accumulator = 0.0;
        self.trace.clear();
        self.display = ZERO.to_string();
    }

    /// Finished results only lose their trace; anything else loses the
    /// last display character and is read back as the operand.
    fn delete(&mut self) {
        if self.mode == Mode::Success {
            self.trace.clear();
        } else {
            self.erase_last_char();
        }
    }

    fn erase_last_char(&mut self) {
        let mut text = self.display_text().to_string();
        text.pop();
        if text.is_empty() {
            text.push_str(ZERO);
        }
        self.set_entry(text);
    }

    /// Reset the entry if the next digit begins a new number.
    ///
    /// A plain typed number, including one edited by negate or percent,
    /// stays editable.
    fn start_number(&mut self) {
        match self.mode {
            Mode::Operator => self.reset_entry(),
            Mode::Function if !self.operand.is_raw() => self.reset_entry(),
            Mode::Success | Mode::Load => {
                self.reset_entry();
                self.trace.clear();
            }
            _ => {}
        }
    }

    fn reset_entry(&mut self) {
        self.operand = Operand::default();
        self.display = ZERO.to_string();
    }

    /// Show typed text and read it back as the operand.
    fn set_entry(&mut self, text: String) {
        match parse_value(&text) {
            Some(value) => {
                self.operand = Operand::new(value);
                self.display = text;
            }
            None => self.fail(ValueError::Unknown),
        }
    }

    fn fail(&mut self, error: ValueError) {
        warn!(?error, trace = %self.trace, "calculation failed");
        self.error = error;
        self.display = self.messages.message(error).to_string();
    }
}
