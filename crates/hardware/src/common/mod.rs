//! Common types and constants used throughout the strand model.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Implementation limits, counter masks, and reset values.
//! 2. **Error Handling:** Register access and checkpoint error taxonomies.

/// Architectural constants and bit masks.
pub mod constants;

/// Error types for register access and checkpoint restore.
pub mod error;

pub use constants::{BIT63, MASK63, MAX_TL};
pub use error::{CheckpointError, MiscRegError};
