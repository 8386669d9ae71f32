//! Effectful register access.
//!
//! This module implements the register accesses performed on behalf of
//! executing instructions. It performs the following:
//! 1. **Counter Emulation:** `TICK` (and its `STICK`/`PRIVTICK` aliases) advance with
//!    retired instructions and are re-based on write.
//! 2. **Computed Registers:** `HVER` is derived from implementation parameters.
//! 3. **Collaborator Notification:** `CWP`/`GL` writes switch the register-window context;
//!    `SOFTINT`/`PIL` writes notify the interrupt subsystem.
//! 4. **Timer Arming:** Compare-register writes drive the compare state machine.
//!
//! Everything else is delegated to the plain accessors.

use tracing::{trace, warn};

use super::RegisterBank;
use crate::common::constants::{BIT63, COUNTER_READ_MASK, MASK63};
use crate::common::error::MiscRegError;
use crate::core::arch::misc_reg::MiscReg;
use crate::core::timer::CompareKind;
use crate::core::traits::{EventScheduler, ExecContext, RegContext};

impl RegisterBank {
    /// Value of the tick counter as seen by software.
    ///
    /// Bits 62..2 hold the instructions retired since the counter was last
    /// written (offset by the written value); bit 63 is the stored NPT bit.
    pub(crate) const fn tick_value(&self, instruction_count: u64) -> u64 {
        let elapsed = instruction_count.wrapping_sub(self.regs.tick & MASK63);
        (elapsed & COUNTER_READ_MASK) | (self.regs.tick & BIT63)
    }

    /// Full-resolution count field of the tick counter.
    pub(crate) const fn tick_count(&self, instruction_count: u64) -> u64 {
        instruction_count.wrapping_sub(self.regs.tick & MASK63) & MASK63
    }

    /// Reads a register on behalf of an executing instruction.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to read.
    /// * `ctx` - The owning strand's execution context.
    ///
    /// # Returns
    ///
    /// The architecturally visible value. The FPU, performance counters, and
    /// `HINTP` are not modeled and fail with `NotImplemented`.
    pub fn read_reg_with_effect<C>(&self, reg: MiscReg, ctx: &C) -> Result<u64, MiscRegError>
    where
        C: ExecContext + ?Sized,
    {
        let val = match reg {
            // Niagara aliases TICK and STICK to one counter.
            MiscReg::Tick | MiscReg::Stick | MiscReg::Privtick => {
                let count = ctx.instruction_count();
                if self.trace_accesses {
                    trace!(count, reg = reg.name(), "counter read");
                }
                self.tick_value(count)
            }
            MiscReg::Fprs | MiscReg::Fsr => return Err(unmodeled(reg, "floating point")),
            MiscReg::Pcr | MiscReg::Pic => {
                return Err(unmodeled(reg, "performance instrumentation"));
            }
            MiscReg::Hintp => return Err(unmodeled(reg, "HINTP")),
            MiscReg::Hver => self.regs.hver(),
            _ => self.regs.read(reg)?,
        };
        if self.trace_accesses {
            trace!(reg = reg.name(), val, "misc reg read");
        }
        Ok(val)
    }

    /// Writes a register on behalf of an executing instruction.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to write.
    /// * `val` - The value to write.
    /// * `ctx` - The owning strand's execution context.
    /// * `sched` - The scheduler used to (re)arm compare timers.
    pub fn write_reg_with_effect<C, S>(
        &mut self,
        reg: MiscReg,
        val: u64,
        ctx: &mut C,
        sched: &mut S,
    ) -> Result<(), MiscRegError>
    where
        C: ExecContext + ?Sized,
        S: EventScheduler + ?Sized,
    {
        if self.trace_accesses {
            trace!(reg = reg.name(), val, "misc reg write");
        }
        if let Some(kind) = CompareKind::from_register(reg) {
            return self.write_compare(kind, val, &*ctx, sched);
        }
        match reg {
            MiscReg::Tick | MiscReg::Stick => {
                let count = ctx.instruction_count();
                self.regs.tick = (count.wrapping_sub(val) & MASK63) | (val & BIT63);
            }
            MiscReg::Cwp => {
                self.regs.write(reg, val)?;
                ctx.change_register_context(RegContext::CurrentWindow, val);
            }
            MiscReg::Gl => {
                self.regs.write(reg, val)?;
                ctx.change_register_context(RegContext::Globals, val);
            }
            MiscReg::Softint | MiscReg::SoftintSet | MiscReg::SoftintClr | MiscReg::Pil => {
                self.regs.write(reg, val)?;
                ctx.soft_interrupt_changed(self.regs.softint, self.regs.pil);
            }
            // PSTATE and TL land here too: masked store, no further effect.
            _ => self.regs.write(reg, val)?,
        }
        Ok(())
    }

    /// Effectful read by raw register index.
    ///
    /// # Returns
    ///
    /// `UnknownRegister` if `index` is outside the enumeration; otherwise as
    /// [`read_reg_with_effect`](Self::read_reg_with_effect).
    pub fn read_reg_at_with_effect<C>(&self, index: usize, ctx: &C) -> Result<u64, MiscRegError>
    where
        C: ExecContext + ?Sized,
    {
        self.read_reg_with_effect(MiscReg::from_index(index)?, ctx)
    }

    /// Effectful write by raw register index.
    ///
    /// # Returns
    ///
    /// `UnknownRegister` if `index` is outside the enumeration; otherwise as
    /// [`write_reg_with_effect`](Self::write_reg_with_effect).
    pub fn write_reg_at_with_effect<C, S>(
        &mut self,
        index: usize,
        val: u64,
        ctx: &mut C,
        sched: &mut S,
    ) -> Result<(), MiscRegError>
    where
        C: ExecContext + ?Sized,
        S: EventScheduler + ?Sized,
    {
        self.write_reg_with_effect(MiscReg::from_index(index)?, val, ctx, sched)
    }
}

/// Builds the `NotImplemented` error for an unmodeled unit and logs it.
fn unmodeled(reg: MiscReg, unit: &'static str) -> MiscRegError {
    warn!(reg = reg.name(), unit, "access to unmodeled register");
    MiscRegError::NotImplemented(unit)
}
