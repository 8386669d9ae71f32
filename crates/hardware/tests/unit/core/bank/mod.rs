//! # Register Bank
//!
//! Tests for the per-strand register bank: plain access by identifier and by
//! index, effectful access on behalf of instructions, and the compare-timer
//! state machine.
