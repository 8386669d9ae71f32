//! Global Architectural Constants.
//!
//! This module defines the implementation parameters and bit masks shared by the
//! register bank, the timer subsystem, and the checkpoint layer. It includes:
//! 1. **Implementation Limits:** Trap-level depth, window count, and global-set count.
//! 2. **Counter Masks:** Bit masks for the tick/stick counters and compare registers.
//! 3. **Register Masks:** Write masks for `PSTATE` and `TBA`.
//! 4. **Reset Values:** Architectural reset constants that are not zero.

/// Maximum supported trap level (capacity of every per-trap-level array).
pub const MAX_TL: usize = 6;

/// Number of register windows implemented by the strand.
pub const NWINDOWS: u64 = 8;

/// Maximum global register set index.
pub const MAX_GL: u64 = 3;

/// Number of hyperprivileged scratch-pad registers.
pub const SCRATCHPAD_SLOTS: usize = 8;

/// Bit 63 of a counter or compare register.
///
/// For `TICK` this is the non-privileged-trap (NPT) bit; for the compare
/// registers it is `INT_DIS`, so a set bit means the compare interrupt is disabled.
pub const BIT63: u64 = 1 << 63;

/// Low 63 bits of a counter or compare register (the count field).
pub const MASK63: u64 = BIT63 - 1;

/// Bits 62..2 of a counter read.
///
/// The counter advances with retired instructions and the bottom two bits
/// of the elapsed count are discarded on read.
pub const COUNTER_READ_MASK: u64 = MASK63 & !0x3;

/// Legal bits of `PSTATE`: two 4-bit fields at bits 1..4 and 6..9, plus bit 12.
pub const PSTATE_MASK: u64 = (0xF << 1) | (0xF << 6) | (1 << 12);

/// `TBA` is 32 KiB aligned; the low 15 bits always read as zero.
pub const TBA_ALIGN_MASK: u64 = !0x7FFF;

/// Bit of `HPSTATE` that is hardwired to 1 on the T1.
pub const HPSTATE_RESET: u64 = 1 << 11;

/// Reset value of the strand status register.
pub const STRAND_STATUS_RESET: u64 = 0x50000;

/// Width mask of each `HVER` field; wider parameters are truncated to it.
pub const HVER_FIELD_MASK: u64 = 0xFF;

/// Bit position of the maximum trap level field in `HVER`.
pub const HVER_MAXTL_SHIFT: u64 = 8;

/// Bit position of the maximum global set field in `HVER`.
pub const HVER_MAXGL_SHIFT: u64 = 16;
