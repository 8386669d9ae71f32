//! SPARC T1 (Niagara) strand register model.
//!
//! This crate implements the miscellaneous register bank of a simulated SPARC strand:
//! 1. **Registers:** Ancillary state, privileged, hyperprivileged, MMU configuration,
//!    and scratch-pad registers, with hardware write masks.
//! 2. **Effects:** Instruction-count driven `TICK`, computed `HVER`, register-window and
//!    interrupt notifications.
//! 3. **Timers:** One-shot compare timers for `TICK_CMPR`, `STICK_CMPR` and `HSTICK_CMPR`.
//! 4. **Simulation:** Ordered checkpointing and a reference event queue.
//! 5. **Configuration:** Timer scaling and implementation parameters.

/// Common constants and error types.
pub mod common;
/// Bank configuration (defaults and JSON-deserializable structures).
pub mod config;
/// Register bank, register definitions, timers, and collaborator traits.
pub mod core;
/// Checkpointing and event scheduling.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Register identifier.
pub use crate::core::arch::misc_reg::MiscReg;
/// Per-strand register bank.
pub use crate::core::RegisterBank;
