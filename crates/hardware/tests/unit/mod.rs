//! # Unit Components
//!
//! This module organizes the unit tests of the register bank, mirroring the
//! layout of the crate: shared definitions, configuration, the register model,
//! and the simulation helpers built on top of it.

/// Unit tests for shared constants and error types.
pub mod common;

/// Unit tests for configuration defaults and JSON deserialization.
pub mod config;

/// Unit tests for register definitions, storage, and the register bank.
pub mod core;
