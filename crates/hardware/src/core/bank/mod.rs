//! Miscellaneous Register Bank.
//!
//! This module defines the `RegisterBank`, the per-strand owner of all
//! miscellaneous register state. It coordinates:
//! 1. **Storage:** The architectural register values (`MiscRegs`).
//! 2. **Timers:** The three lazily created compare-timer events.
//! 3. **Access Layers:** Plain accessors (here), effectful accessors (`effects`), and
//!    the compare-timer state machine (`compare`).
//! 4. **Persistence:** Ordered snapshot and restore (see [`crate::sim::checkpoint`]).

/// Compare-register state machine and timer callbacks.
pub mod compare;

/// Effectful register access (instruction counter, window context, interrupts).
pub mod effects;

use crate::common::error::MiscRegError;
use crate::config::{Config, TimerConfig};
use crate::core::arch::misc_reg::MiscReg;
use crate::core::arch::regs::{MiscRegs, StrandParams};
use crate::core::timer::{CompareEvent, CompareKind};

/// The compare-timer events owned by a bank, created on first use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareTimers {
    tick: Option<CompareEvent>,
    stick: Option<CompareEvent>,
    hstick: Option<CompareEvent>,
}

impl CompareTimers {
    /// Returns the event for `kind`, if it has been created.
    pub const fn get(&self, kind: CompareKind) -> Option<&CompareEvent> {
        match kind {
            CompareKind::Tick => self.tick.as_ref(),
            CompareKind::Stick => self.stick.as_ref(),
            CompareKind::HStick => self.hstick.as_ref(),
        }
    }

    /// Returns the slot holding the event for `kind`.
    pub const fn slot_mut(&mut self, kind: CompareKind) -> &mut Option<CompareEvent> {
        match kind {
            CompareKind::Tick => &mut self.tick,
            CompareKind::Stick => &mut self.stick,
            CompareKind::HStick => &mut self.hstick,
        }
    }
}

/// Miscellaneous register bank of one strand.
///
/// The bank is single-owner and single-threaded: every accessor runs on the
/// owning strand's execution stream, so no internal locking is needed.
#[derive(Debug, Clone)]
pub struct RegisterBank {
    /// Architectural register values.
    pub(crate) regs: MiscRegs,
    /// Compare-timer events.
    pub(crate) timers: CompareTimers,
    /// Counter-to-time scaling for the compare timers.
    pub(crate) timer_cfg: TimerConfig,
    /// Emit a trace event for each effectful access.
    pub(crate) trace_accesses: bool,
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl RegisterBank {
    /// Creates a register bank in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration supplying timer scaling and implementation parameters.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: MiscRegs::new(StrandParams::from(&config.strand)),
            timers: CompareTimers::default(),
            timer_cfg: config.timer.clone(),
            trace_accesses: config.general.trace_accesses,
        }
    }

    /// Returns the architectural register values.
    pub const fn regs(&self) -> &MiscRegs {
        &self.regs
    }

    /// Returns the compare-timer events.
    pub const fn timers(&self) -> &CompareTimers {
        &self.timers
    }

    /// Reinitialises every register to its reset value.
    ///
    /// Compare-timer events are kept; use
    /// [`cancel_timers`](Self::cancel_timers) to drop pending schedules.
    pub fn reset(&mut self) {
        self.regs.reset();
    }

    /// Reads a register without side effects.
    ///
    /// Safe to call at any time, e.g. from tracing or debugging code.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to read.
    ///
    /// # Returns
    ///
    /// The stored value, `NotImplemented` for unmodeled registers, or
    /// `TrapLevelOutOfRange` for a trap-level register while `TL` is 0.
    pub fn read_reg(&self, reg: MiscReg) -> Result<u64, MiscRegError> {
        self.regs.read(reg)
    }

    /// Writes a register without side effects, applying its write mask.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to write.
    /// * `val` - The value to write.
    pub fn write_reg(&mut self, reg: MiscReg, val: u64) -> Result<(), MiscRegError> {
        self.regs.write(reg, val)
    }

    /// Reads a register by raw index without side effects.
    ///
    /// # Returns
    ///
    /// `UnknownRegister` if `index` is outside the enumeration; otherwise as
    /// [`read_reg`](Self::read_reg).
    pub fn read_reg_at(&self, index: usize) -> Result<u64, MiscRegError> {
        self.read_reg(MiscReg::from_index(index)?)
    }

    /// Writes a register by raw index without side effects.
    ///
    /// # Returns
    ///
    /// `UnknownRegister` if `index` is outside the enumeration; otherwise as
    /// [`write_reg`](Self::write_reg).
    pub fn write_reg_at(&mut self, index: usize, val: u64) -> Result<(), MiscRegError> {
        self.write_reg(MiscReg::from_index(index)?, val)
    }

    /// Formats every register for debugging.
    ///
    /// Uses plain reads only; registers that cannot be read in the current
    /// state show the reason instead of a value.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for reg in MiscReg::ALL {
            let line = match self.read_reg(reg) {
                Ok(val) => format!("{:<20}={val:#018x}\n", reg.name()),
                Err(e) => format!("{:<20}=<{e}>\n", reg.name()),
            };
            out.push_str(&line);
        }
        out
    }
}
