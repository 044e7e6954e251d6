//! Key-driven calculator engine.
//!
//! Turns discrete key presses into a running result, an equation trace and
//! a display string, holding division by zero, not-a-number and overflow
//! errors until they are cleared.

pub mod calculator;
pub mod config;
pub mod items;
pub mod keys;
