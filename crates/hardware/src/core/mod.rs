//! Strand register model.
//!
//! This module contains the miscellaneous register bank of one strand: the
//! architectural register definitions, the bank that owns them, the
//! compare-timer events, and the traits through which the bank reaches the
//! rest of the simulator.

/// Architectural register definitions (identifiers, storage, trap-level arrays).
pub mod arch;

/// Register bank: plain and effectful access, compare-timer state machine.
pub mod bank;

/// Compare-timer event types.
pub mod timer;

/// Collaborator traits (execution context, event scheduler).
pub mod traits;

pub use self::bank::RegisterBank;
