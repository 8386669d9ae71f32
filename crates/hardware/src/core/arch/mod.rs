//! SPARC architecture-specific components.
//!
//! This module contains the architectural state of the miscellaneous register bank.
//! It includes the following modules:
//! 1. **Identifiers:** The closed register enumeration and its name table.
//! 2. **Storage:** Register values and their plain, masked accessors.
//! 3. **Trap Stack:** Bounds-checked per-trap-level arrays.

/// Register identifiers and names.
pub mod misc_reg;

/// Register storage and plain access.
pub mod regs;

/// Per-trap-level register arrays.
pub mod trap_stack;
