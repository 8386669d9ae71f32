//! # Common Components

/// Unit tests for architectural constants and masks.
pub mod constants;
