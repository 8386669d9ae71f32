//! # Register Model


/// Unit tests for the register bank: plain access, effects, and compare timers.
pub mod bank;
