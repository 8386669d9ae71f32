//! Trap-level indexed register storage.
//!
//! `TPC`, `TNPC`, `TSTATE`, `TT` and `HTSTATE` each hold one value per nested
//! trap level. The active slot is `TL - 1`, so `TL == 0` selects no slot; this
//! container turns that condition (and `TL > MAX_TL`) into an error instead of
//! an out-of-bounds index.

use crate::common::constants::MAX_TL;
use crate::common::error::MiscRegError;

/// Fixed-capacity array of per-trap-level values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrapStack {
    slots: [u64; MAX_TL],
}

impl TrapStack {
    /// Creates a trap stack with every slot zeroed.
    pub const fn new() -> Self {
        Self { slots: [0; MAX_TL] }
    }

    /// Maps a trap level to its slot index.
    const fn slot(tl: u64) -> Result<usize, MiscRegError> {
        if tl == 0 || tl > MAX_TL as u64 {
            return Err(MiscRegError::TrapLevelOutOfRange { tl });
        }
        Ok(tl as usize - 1)
    }

    /// Reads the value for trap level `tl`.
    ///
    /// # Arguments
    ///
    /// * `tl` - The current trap level (1-based).
    ///
    /// # Returns
    ///
    /// The stored value, or `TrapLevelOutOfRange` if `tl` is 0 or above `MAX_TL`.
    pub fn get(&self, tl: u64) -> Result<u64, MiscRegError> {
        Ok(self.slots[Self::slot(tl)?])
    }

    /// Writes the value for trap level `tl`.
    ///
    /// # Arguments
    ///
    /// * `tl` - The current trap level (1-based).
    /// * `val` - The value to store.
    pub fn set(&mut self, tl: u64, val: u64) -> Result<(), MiscRegError> {
        self.slots[Self::slot(tl)?] = val;
        Ok(())
    }

    /// Returns every slot, lowest trap level first.
    pub const fn as_slice(&self) -> &[u64; MAX_TL] {
        &self.slots
    }
}

impl AsRef<[u64]> for TrapStack {
    fn as_ref(&self) -> &[u64] {
        &self.slots
    }
}

impl AsMut<[u64]> for TrapStack {
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.slots
    }
}
