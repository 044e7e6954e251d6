//! Key scripts.
//!
//! A key script is a whitespace separated list of key names, e.g.
//! `12.5 + 3 sqrt =`. Each token names one key press, except runs of digits
//! and points which press every character in turn. Nothing is evaluated
//! here; tokens only become [`Action`]s for the calculator.

use crate::calculator::{Action, Function, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use std::num::ParseIntError;
use thiserror::Error;

lazy_static! {
    /// Matches a run of digit and point keys.
    static ref NUMBER_KEYS: Regex = Regex::new(r"^[0-9.]+$").unwrap();

    /// Matches a history recall key with its entry index.
    static ref RECALL_KEY: Regex = Regex::new(r"^recall:(\d+)$").unwrap();
}

/// Tokens that name no key.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("unknown key: {0:?}")]
    UnknownKey(String),
    #[error("invalid history index in {token:?}")]
    InvalidRecall {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse a whole key script.
pub fn parse_keys(script: &str) -> Result<Vec<Action>, KeyError> {
    let mut actions = Vec::new();
    for token in script.split_whitespace() {
        actions.extend(parse_key(token)?);
    }
    Ok(actions)
}

/// Parse a single token into the key presses it names.
pub fn parse_key(token: &str) -> Result<Vec<Action>, KeyError> {
    let lower = token.to_lowercase();

    if NUMBER_KEYS.is_match(&lower) {
        return Ok(lower.chars().map(number_key).collect());
    }

    if let Some(captures) = RECALL_KEY.captures(&lower) {
        let index = captures[1].parse().map_err(|source| KeyError::InvalidRecall {
            token: token.to_string(),
            source,
        })?;
        return Ok(vec![Action::RecallHistory(index)]);
    }

    let action = match lower.as_str() {
        "+" => Action::Operator(Operator::Add),
        "-" | "−" => Action::Operator(Operator::Subtract),
        "*" | "x" | "×" => Action::Operator(Operator::Multiply),
        "/" | "÷" => Action::Operator(Operator::Divide),
        "=" => Action::Equals,
        "sqrt" | "√" => Action::Function(Function::SquareRoot),
        "sqr" => Action::Function(Function::Square),
        "1/x" | "inv" => Action::Function(Function::Reciprocal),
        "neg" | "±" => Action::Function(Function::Negate),
        "%" | "pct" => Action::Function(Function::Percent),
        "ac" | "c" => Action::AllClear,
        "del" | "bs" | "⌫" => Action::Delete,
        "ch" => Action::ClearHistory,
        _ => return Err(KeyError::UnknownKey(token.to_string())),
    };
    Ok(vec![action])
}

fn number_key(c: char) -> Action {
    match c.to_digit(10) {
        Some(digit) => Action::Digit(digit as u8),
        None => Action::Point,
    }
}
