//! Register Bank Error Definitions.
//!
//! This module defines the failure modes of the miscellaneous register bank. It provides:
//! 1. **Access Errors:** Unknown register indices and unmodeled registers.
//! 2. **Trap-Level Errors:** Per-trap-level array accesses outside `1..=MAX_TL`.
//! 3. **Checkpoint Errors:** Field order, arity, leftover fields, and encoding failures
//!    during restore.
//!
//! Bit-masking on writes is never reported as an error; illegal bits are dropped
//! exactly as the hardware drops them.

use thiserror::Error;

/// Errors raised by register bank accessors.
///
/// Every variant is fatal to the instruction that caused it and propagates up to
/// the execution driver; nothing inside the bank retries or recovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MiscRegError {
    /// Register index outside the declared enumeration.
    ///
    /// Signals an emulator defect (the decoder produced an index the bank does
    /// not know about).
    #[error("unknown miscellaneous register index {0}")]
    UnknownRegister(usize),

    /// Register or behaviour that is recognised but not modeled.
    ///
    /// The associated value names what is missing.
    #[error("{0} not implemented")]
    NotImplemented(&'static str),

    /// A per-trap-level register was accessed while `TL` selects no slot.
    #[error("trap level {tl} does not select a trap stack slot")]
    TrapLevelOutOfRange {
        /// The trap level in effect at the time of the access.
        tl: u64,
    },
}

/// Errors raised while restoring a register bank from a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The checkpoint ended before the named field.
    #[error("checkpoint is missing field `{0}`")]
    MissingField(&'static str),

    /// The next field in the checkpoint is not the one expected in this position.
    #[error("expected checkpoint field `{expected}`, found `{found}`")]
    FieldMismatch {
        /// Field name required at this position.
        expected: &'static str,
        /// Field name actually present.
        found: String,
    },

    /// A field has the wrong shape (scalar vs. array) or the wrong element count.
    #[error("checkpoint field `{field}` holds {found} value(s), expected {expected}")]
    LengthMismatch {
        /// Field name.
        field: &'static str,
        /// Number of values required.
        expected: usize,
        /// Number of values present.
        found: usize,
    },

    /// The checkpoint holds a field after the last one the bank restores.
    #[error("checkpoint has unexpected trailing field `{0}`")]
    TrailingField(String),

    /// The serialized checkpoint could not be encoded or decoded.
    #[error("checkpoint encoding: {0}")]
    Json(#[from] serde_json::Error),

    /// The checkpoint file could not be read or written.
    #[error("checkpoint I/O: {0}")]
    Io(#[from] std::io::Error),
}
