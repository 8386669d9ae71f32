//! Miscellaneous register storage and plain access.
//!
//! This module holds the architectural state behind every [`MiscReg`]. It provides:
//! 1. **Register Storage:** The `MiscRegs` aggregate, including per-trap-level arrays,
//!    TLB configuration sets, and the scratch pad.
//! 2. **Plain Access:** Side-effect-free `read` and masked `write` by identifier.
//! 3. **Reset:** Architectural reset values (zero except `HPSTATE`, `TICK`, and the
//!    strand status register).
//!
//! Nothing here consults machine state; the effectful layer in
//! [`crate::core::bank`] wraps these accessors.

use crate::common::constants::{
    BIT63, HPSTATE_RESET, HVER_FIELD_MASK, HVER_MAXGL_SHIFT, HVER_MAXTL_SHIFT, MAX_TL, PSTATE_MASK,
    SCRATCHPAD_SLOTS, TBA_ALIGN_MASK,
};
use crate::common::error::MiscRegError;
use crate::config::StrandConfig;
use crate::core::arch::misc_reg::{ContextClass, MiscReg, TlbKind, TsbField};
use crate::core::arch::trap_stack::TrapStack;

/// Implementation parameters that shape computed registers and reset values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrandParams {
    /// Number of register windows.
    pub n_windows: u64,
    /// Highest global register set index.
    pub max_gl: u64,
    /// Strand status register reset value.
    pub strand_status_reset: u64,
}

impl From<&StrandConfig> for StrandParams {
    fn from(cfg: &StrandConfig) -> Self {
        Self {
            n_windows: cfg.n_windows,
            max_gl: cfg.max_gl,
            strand_status_reset: cfg.strand_status_reset,
        }
    }
}

impl Default for StrandParams {
    fn default() -> Self {
        Self::from(&StrandConfig::default())
    }
}

/// One TSB configuration set (per TLB, per context class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TsbConfig {
    /// TSB base for page size 0.
    pub tsb_ps0: u64,
    /// TSB base for page size 1.
    pub tsb_ps1: u64,
    /// Configuration register.
    pub config: u64,
}

impl TsbConfig {
    /// Returns the addressed field.
    pub const fn get(&self, field: TsbField) -> u64 {
        match field {
            TsbField::TsbPs0 => self.tsb_ps0,
            TsbField::TsbPs1 => self.tsb_ps1,
            TsbField::Config => self.config,
        }
    }

    /// Returns the addressed field mutably.
    pub const fn get_mut(&mut self, field: TsbField) -> &mut u64 {
        match field {
            TsbField::TsbPs0 => &mut self.tsb_ps0,
            TsbField::TsbPs1 => &mut self.tsb_ps1,
            TsbField::Config => &mut self.config,
        }
    }
}

/// Configuration and status registers of one TLB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TlbRegs {
    /// TSB configuration sets, indexed by `ContextClass`.
    pub contexts: [TsbConfig; 2],
    /// Synchronous fault status.
    pub sfsr: u64,
    /// Tag access.
    pub tag_access: u64,
}

impl TlbRegs {
    /// Returns the TSB configuration set for a context class.
    pub const fn context(&self, class: ContextClass) -> &TsbConfig {
        &self.contexts[class as usize]
    }

    /// Returns the TSB configuration set for a context class mutably.
    pub const fn context_mut(&mut self, class: ContextClass) -> &mut TsbConfig {
        &mut self.contexts[class as usize]
    }
}

/// Architectural miscellaneous register state of one strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiscRegs {
    /// Y register.
    pub y: u64,
    /// Condition codes.
    pub ccr: u64,
    /// Address space identifier.
    pub asi: u64,
    /// Tick counter, stored re-based against the instruction count.
    pub tick: u64,
    /// Floating-point registers state.
    pub fprs: u64,
    /// Graphics status.
    pub gsr: u64,
    /// Soft interrupt bits.
    pub softint: u64,
    /// Tick compare.
    pub tick_cmpr: u64,
    /// System tick.
    pub stick: u64,
    /// System tick compare.
    pub stick_cmpr: u64,

    /// Trap program counters.
    pub tpc: TrapStack,
    /// Trap next program counters.
    pub tnpc: TrapStack,
    /// Trap states.
    pub tstate: TrapStack,
    /// Trap types.
    pub tt: TrapStack,
    /// Trap base address.
    pub tba: u64,
    /// Processor state.
    pub pstate: u64,
    /// Trap level.
    pub tl: u64,
    /// Processor interrupt level.
    pub pil: u64,
    /// Current window pointer.
    pub cwp: u64,
    /// Savable windows.
    pub cansave: u64,
    /// Restorable windows.
    pub canrestore: u64,
    /// Clean windows.
    pub cleanwin: u64,
    /// Other windows.
    pub otherwin: u64,
    /// Window state.
    pub wstate: u64,
    /// Global level.
    pub gl: u64,

    /// Hyperprivileged state.
    pub hpstate: u64,
    /// Hyperprivileged trap states.
    pub htstate: TrapStack,
    /// Hyperprivileged trap base address.
    pub htba: u64,
    /// Strand status register.
    pub strand_sts_reg: u64,
    /// Hyperprivileged system tick compare.
    pub hstick_cmpr: u64,

    /// Floating-point state.
    pub fsr: u64,

    /// Primary context.
    pub pri_context: u64,
    /// Secondary context.
    pub sec_context: u64,
    /// Partition identifier.
    pub part_id: u64,
    /// Load/store unit control.
    pub lsu_ctrl: u64,
    /// Instruction TLB registers.
    pub itlb: TlbRegs,
    /// Data TLB registers.
    pub dtlb: TlbRegs,
    /// Data TLB synchronous fault address.
    pub dtlb_sfar: u64,

    /// Hyperprivileged scratch pad.
    pub scratchpad: [u64; SCRATCHPAD_SLOTS],

    params: StrandParams,
}

impl Default for MiscRegs {
    fn default() -> Self {
        Self::new(StrandParams::default())
    }
}

impl MiscRegs {
    /// Creates register storage in its reset state.
    ///
    /// # Arguments
    ///
    /// * `params` - Implementation parameters for `HVER` and reset values.
    pub fn new(params: StrandParams) -> Self {
        let mut regs = Self::zeroed(params);
        regs.reset();
        regs
    }

    /// Returns the implementation parameters.
    pub const fn params(&self) -> StrandParams {
        self.params
    }

    /// Restores every register to its architectural reset value.
    pub fn reset(&mut self) {
        *self = Self {
            tick: BIT63,
            hpstate: HPSTATE_RESET,
            strand_sts_reg: self.params.strand_status_reset,
            ..Self::zeroed(self.params)
        };
    }

    /// All-zero storage, before reset constants are applied.
    fn zeroed(params: StrandParams) -> Self {
        Self {
            y: 0,
            ccr: 0,
            asi: 0,
            tick: 0,
            fprs: 0,
            gsr: 0,
            softint: 0,
            tick_cmpr: 0,
            stick: 0,
            stick_cmpr: 0,
            tpc: TrapStack::new(),
            tnpc: TrapStack::new(),
            tstate: TrapStack::new(),
            tt: TrapStack::new(),
            tba: 0,
            pstate: 0,
            tl: 0,
            pil: 0,
            cwp: 0,
            cansave: 0,
            canrestore: 0,
            cleanwin: 0,
            otherwin: 0,
            wstate: 0,
            gl: 0,
            hpstate: 0,
            htstate: TrapStack::new(),
            htba: 0,
            strand_sts_reg: 0,
            hstick_cmpr: 0,
            fsr: 0,
            pri_context: 0,
            sec_context: 0,
            part_id: 0,
            lsu_ctrl: 0,
            itlb: TlbRegs::default(),
            dtlb: TlbRegs::default(),
            dtlb_sfar: 0,
            scratchpad: [0; SCRATCHPAD_SLOTS],
            params,
        }
    }

    /// Computes `HVER`: window count, maximum trap level, and maximum global set.
    ///
    /// Each field occupies one byte; out-of-range parameters are truncated so
    /// they never spill into the neighbouring field.
    pub const fn hver(&self) -> u64 {
        (self.params.n_windows & HVER_FIELD_MASK)
            | (((MAX_TL as u64) & HVER_FIELD_MASK) << HVER_MAXTL_SHIFT)
            | ((self.params.max_gl & HVER_FIELD_MASK) << HVER_MAXGL_SHIFT)
    }

    const fn tlb(&self, kind: TlbKind) -> &TlbRegs {
        match kind {
            TlbKind::Instruction => &self.itlb,
            TlbKind::Data => &self.dtlb,
        }
    }

    const fn tlb_mut(&mut self, kind: TlbKind) -> &mut TlbRegs {
        match kind {
            TlbKind::Instruction => &mut self.itlb,
            TlbKind::Data => &mut self.dtlb,
        }
    }

    /// Reads one TSB configuration register.
    pub const fn tsb(&self, kind: TlbKind, class: ContextClass, field: TsbField) -> u64 {
        self.tlb(kind).context(class).get(field)
    }

    /// Writes one TSB configuration register.
    pub const fn set_tsb(&mut self, kind: TlbKind, class: ContextClass, field: TsbField, val: u64) {
        *self.tlb_mut(kind).context_mut(class).get_mut(field) = val;
    }

    /// Scratch-pad slot addressed by a scratch-pad register.
    const fn scratch_slot(reg: MiscReg) -> usize {
        reg.index() - MiscReg::ScratchpadR0.index()
    }

    /// Reads a register without side effects.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to read.
    ///
    /// # Returns
    ///
    /// The stored (or, for `HVER`, computed) value. Trap-level registers read the
    /// slot selected by `TL` and fail with `TrapLevelOutOfRange` when `TL` selects
    /// none. Unmodeled and write-only registers fail with `NotImplemented`.
    pub fn read(&self, reg: MiscReg) -> Result<u64, MiscRegError> {
        use ContextClass::{NonZero, Zero};
        use TlbKind::{Data, Instruction};
        use TsbField::{Config, TsbPs0, TsbPs1};

        Ok(match reg {
            MiscReg::Y => self.y,
            MiscReg::Ccr => self.ccr,
            MiscReg::Asi => self.asi,
            MiscReg::Tick => self.tick,
            MiscReg::Fprs => self.fprs,
            MiscReg::Pcr => return Err(MiscRegError::NotImplemented("PCR")),
            MiscReg::Pic => return Err(MiscRegError::NotImplemented("PIC")),
            MiscReg::Gsr => self.gsr,
            MiscReg::SoftintSet => return Err(MiscRegError::NotImplemented("SOFTINT_SET read")),
            MiscReg::SoftintClr => return Err(MiscRegError::NotImplemented("SOFTINT_CLR read")),
            MiscReg::Softint => self.softint,
            MiscReg::TickCmpr => self.tick_cmpr,
            MiscReg::Stick => self.stick,
            MiscReg::StickCmpr => self.stick_cmpr,

            MiscReg::Tpc => self.tpc.get(self.tl)?,
            MiscReg::Tnpc => self.tnpc.get(self.tl)?,
            MiscReg::Tstate => self.tstate.get(self.tl)?,
            MiscReg::Tt => self.tt.get(self.tl)?,
            MiscReg::Privtick => {
                return Err(MiscRegError::NotImplemented("privileged access to TICK"));
            }
            MiscReg::Tba => self.tba,
            MiscReg::Pstate => self.pstate,
            MiscReg::Tl => self.tl,
            MiscReg::Pil => self.pil,
            MiscReg::Cwp => self.cwp,
            MiscReg::Cansave => self.cansave,
            MiscReg::Canrestore => self.canrestore,
            MiscReg::Cleanwin => self.cleanwin,
            MiscReg::Otherwin => self.otherwin,
            MiscReg::Wstate => self.wstate,
            MiscReg::Gl => self.gl,

            MiscReg::Hpstate => self.hpstate,
            MiscReg::Htstate => self.htstate.get(self.tl)?,
            MiscReg::Hintp => return Err(MiscRegError::NotImplemented("HINTP")),
            MiscReg::Htba => self.htba,
            MiscReg::Hver => self.hver(),
            MiscReg::StrandStsReg => self.strand_sts_reg,
            MiscReg::HstickCmpr => self.hstick_cmpr,

            MiscReg::Fsr => self.fsr,

            MiscReg::MmuPContext => self.pri_context,
            MiscReg::MmuSContext => self.sec_context,
            MiscReg::MmuPartId => self.part_id,
            MiscReg::MmuLsuCtrl => self.lsu_ctrl,

            MiscReg::MmuItlbC0TsbPs0 => self.tsb(Instruction, Zero, TsbPs0),
            MiscReg::MmuItlbC0TsbPs1 => self.tsb(Instruction, Zero, TsbPs1),
            MiscReg::MmuItlbC0Config => self.tsb(Instruction, Zero, Config),
            MiscReg::MmuItlbCxTsbPs0 => self.tsb(Instruction, NonZero, TsbPs0),
            MiscReg::MmuItlbCxTsbPs1 => self.tsb(Instruction, NonZero, TsbPs1),
            MiscReg::MmuItlbCxConfig => self.tsb(Instruction, NonZero, Config),
            MiscReg::MmuItlbSfsr => self.itlb.sfsr,
            MiscReg::MmuItlbTagAccess => self.itlb.tag_access,

            MiscReg::MmuDtlbC0TsbPs0 => self.tsb(Data, Zero, TsbPs0),
            MiscReg::MmuDtlbC0TsbPs1 => self.tsb(Data, Zero, TsbPs1),
            MiscReg::MmuDtlbC0Config => self.tsb(Data, Zero, Config),
            MiscReg::MmuDtlbCxTsbPs0 => self.tsb(Data, NonZero, TsbPs0),
            MiscReg::MmuDtlbCxTsbPs1 => self.tsb(Data, NonZero, TsbPs1),
            MiscReg::MmuDtlbCxConfig => self.tsb(Data, NonZero, Config),
            MiscReg::MmuDtlbSfsr => self.dtlb.sfsr,
            MiscReg::MmuDtlbSfar => self.dtlb_sfar,
            MiscReg::MmuDtlbTagAccess => self.dtlb.tag_access,

            MiscReg::ScratchpadR0
            | MiscReg::ScratchpadR1
            | MiscReg::ScratchpadR2
            | MiscReg::ScratchpadR3
            | MiscReg::ScratchpadR4
            | MiscReg::ScratchpadR5
            | MiscReg::ScratchpadR6
            | MiscReg::ScratchpadR7 => self.scratchpad[Self::scratch_slot(reg)],
        })
    }

    /// Writes a register without side effects, applying its write mask.
    ///
    /// # Arguments
    ///
    /// * `reg` - The register to write.
    /// * `val` - The value to write. Bits outside the register's legal fields are
    ///   dropped silently (`TBA` low 15 bits, `PSTATE` outside `PSTATE_MASK`).
    ///
    /// `SOFTINT_SET` and `SOFTINT_CLR` set and clear bits of `SOFTINT`.
    /// Read-only and unmodeled registers fail with `NotImplemented`.
    pub fn write(&mut self, reg: MiscReg, val: u64) -> Result<(), MiscRegError> {
        use ContextClass::{NonZero, Zero};
        use TlbKind::{Data, Instruction};
        use TsbField::{Config, TsbPs0, TsbPs1};

        match reg {
            MiscReg::Y => self.y = val,
            MiscReg::Ccr => self.ccr = val,
            MiscReg::Asi => self.asi = val,
            MiscReg::Tick => self.tick = val,
            MiscReg::Fprs => self.fprs = val,
            MiscReg::Pcr => return Err(MiscRegError::NotImplemented("PCR")),
            MiscReg::Pic => return Err(MiscRegError::NotImplemented("PIC")),
            MiscReg::Gsr => self.gsr = val,
            MiscReg::SoftintSet => self.softint |= val,
            MiscReg::SoftintClr => self.softint &= !val,
            MiscReg::Softint => self.softint = val,
            MiscReg::TickCmpr => self.tick_cmpr = val,
            MiscReg::Stick => self.stick = val,
            MiscReg::StickCmpr => self.stick_cmpr = val,

            MiscReg::Tpc => self.tpc.set(self.tl, val)?,
            MiscReg::Tnpc => self.tnpc.set(self.tl, val)?,
            MiscReg::Tstate => self.tstate.set(self.tl, val)?,
            MiscReg::Tt => self.tt.set(self.tl, val)?,
            MiscReg::Privtick => {
                return Err(MiscRegError::NotImplemented("privileged access to TICK"));
            }
            MiscReg::Tba => self.tba = val & TBA_ALIGN_MASK,
            MiscReg::Pstate => self.pstate = val & PSTATE_MASK,
            MiscReg::Tl => self.tl = val,
            MiscReg::Pil => self.pil = val,
            MiscReg::Cwp => self.cwp = val,
            MiscReg::Cansave => self.cansave = val,
            MiscReg::Canrestore => self.canrestore = val,
            MiscReg::Cleanwin => self.cleanwin = val,
            MiscReg::Otherwin => self.otherwin = val,
            MiscReg::Wstate => self.wstate = val,
            MiscReg::Gl => self.gl = val,

            MiscReg::Hpstate => self.hpstate = val,
            MiscReg::Htstate => self.htstate.set(self.tl, val)?,
            MiscReg::Hintp => return Err(MiscRegError::NotImplemented("HINTP")),
            MiscReg::Htba => self.htba = val,
            MiscReg::Hver => return Err(MiscRegError::NotImplemented("HVER write")),
            MiscReg::StrandStsReg => self.strand_sts_reg = val,
            MiscReg::HstickCmpr => self.hstick_cmpr = val,

            MiscReg::Fsr => self.fsr = val,

            MiscReg::MmuPContext => self.pri_context = val,
            MiscReg::MmuSContext => self.sec_context = val,
            MiscReg::MmuPartId => self.part_id = val,
            MiscReg::MmuLsuCtrl => self.lsu_ctrl = val,

            MiscReg::MmuItlbC0TsbPs0 => self.set_tsb(Instruction, Zero, TsbPs0, val),
            MiscReg::MmuItlbC0TsbPs1 => self.set_tsb(Instruction, Zero, TsbPs1, val),
            MiscReg::MmuItlbC0Config => self.set_tsb(Instruction, Zero, Config, val),
            MiscReg::MmuItlbCxTsbPs0 => self.set_tsb(Instruction, NonZero, TsbPs0, val),
            MiscReg::MmuItlbCxTsbPs1 => self.set_tsb(Instruction, NonZero, TsbPs1, val),
            MiscReg::MmuItlbCxConfig => self.set_tsb(Instruction, NonZero, Config, val),
            MiscReg::MmuItlbSfsr => self.itlb.sfsr = val,
            MiscReg::MmuItlbTagAccess => self.itlb.tag_access = val,

            MiscReg::MmuDtlbC0TsbPs0 => self.set_tsb(Data, Zero, TsbPs0, val),
            MiscReg::MmuDtlbC0TsbPs1 => self.set_tsb(Data, Zero, TsbPs1, val),
            MiscReg::MmuDtlbC0Config => self.set_tsb(Data, Zero, Config, val),
            MiscReg::MmuDtlbCxTsbPs0 => self.set_tsb(Data, NonZero, TsbPs0, val),
            MiscReg::MmuDtlbCxTsbPs1 => self.set_tsb(Data, NonZero, TsbPs1, val),
            MiscReg::MmuDtlbCxConfig => self.set_tsb(Data, NonZero, Config, val),
            MiscReg::MmuDtlbSfsr => self.dtlb.sfsr = val,
            MiscReg::MmuDtlbSfar => self.dtlb_sfar = val,
            MiscReg::MmuDtlbTagAccess => self.dtlb.tag_access = val,

            MiscReg::ScratchpadR0
            | MiscReg::ScratchpadR1
            | MiscReg::ScratchpadR2
            | MiscReg::ScratchpadR3
            | MiscReg::ScratchpadR4
            | MiscReg::ScratchpadR5
            | MiscReg::ScratchpadR6
            | MiscReg::ScratchpadR7 => self.scratchpad[Self::scratch_slot(reg)] = val,
        }
        Ok(())
    }
}
