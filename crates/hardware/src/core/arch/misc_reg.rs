//! Miscellaneous register identifiers.
//!
//! This module defines the closed set of registers held by the register bank. It provides:
//! 1. **Identifiers:** The `MiscReg` enum, in architectural declaration order.
//! 2. **Naming:** A static, order-significant name table shared with the enumeration.
//! 3. **Index Mapping:** Conversion between raw indices (as produced by the decoder) and identifiers.
//! 4. **Grouping:** TLB, context-class, and TSB-field selectors used by the register storage.

use std::fmt;

use crate::common::error::MiscRegError;

/// Number of identifiers in [`MiscReg`].
pub const NUM_MISC_REGS: usize = MiscReg::ALL.len();

/// Miscellaneous register identifier.
///
/// The discriminant of each variant is its raw index; the order matches the
/// name table and must not be changed without updating [`MiscReg::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum MiscReg {
    // Ancillary state registers
    /// Y register (multiply/divide high word).
    Y = 0,
    /// Condition codes register.
    Ccr,
    /// Address space identifier.
    Asi,
    /// Free-running tick counter.
    Tick,
    /// Floating-point registers state.
    Fprs,
    /// Performance control register.
    Pcr,
    /// Performance instrumentation counters.
    Pic,
    /// Graphics status register.
    Gsr,
    /// Soft interrupt set (write-only alias of `SOFTINT`).
    SoftintSet,
    /// Soft interrupt clear (write-only alias of `SOFTINT`).
    SoftintClr,
    /// Soft interrupt register.
    Softint,
    /// Tick compare register.
    TickCmpr,
    /// System tick counter.
    Stick,
    /// System tick compare register.
    StickCmpr,

    // Privileged registers
    /// Trap program counter (indexed by `TL`).
    Tpc,
    /// Trap next program counter (indexed by `TL`).
    Tnpc,
    /// Trap state (indexed by `TL`).
    Tstate,
    /// Trap type (indexed by `TL`).
    Tt,
    /// Privileged view of the tick counter.
    Privtick,
    /// Trap base address.
    Tba,
    /// Processor state.
    Pstate,
    /// Trap level.
    Tl,
    /// Processor interrupt level.
    Pil,
    /// Current window pointer.
    Cwp,
    /// Savable windows.
    Cansave,
    /// Restorable windows.
    Canrestore,
    /// Clean windows.
    Cleanwin,
    /// Other windows.
    Otherwin,
    /// Window state.
    Wstate,
    /// Global register set level.
    Gl,

    // Hyperprivileged registers
    /// Hyperprivileged state.
    Hpstate,
    /// Hyperprivileged trap state (indexed by `TL`).
    Htstate,
    /// Hyperprivileged interrupt pending.
    Hintp,
    /// Hyperprivileged trap base address.
    Htba,
    /// Hyperprivileged version (computed).
    Hver,
    /// Strand status register.
    StrandStsReg,
    /// Hyperprivileged system tick compare register.
    HstickCmpr,

    // Floating point
    /// Floating-point state register.
    Fsr,

    // MMU configuration
    /// Primary context.
    MmuPContext,
    /// Secondary context.
    MmuSContext,
    /// Partition identifier.
    MmuPartId,
    /// Load/store unit control.
    MmuLsuCtrl,
    /// ITLB context-zero TSB, page size 0.
    MmuItlbC0TsbPs0,
    /// ITLB context-zero TSB, page size 1.
    MmuItlbC0TsbPs1,
    /// ITLB context-zero configuration.
    MmuItlbC0Config,
    /// ITLB context-nonzero TSB, page size 0.
    MmuItlbCxTsbPs0,
    /// ITLB context-nonzero TSB, page size 1.
    MmuItlbCxTsbPs1,
    /// ITLB context-nonzero configuration.
    MmuItlbCxConfig,
    /// ITLB synchronous fault status.
    MmuItlbSfsr,
    /// ITLB tag access.
    MmuItlbTagAccess,
    /// DTLB context-zero TSB, page size 0.
    MmuDtlbC0TsbPs0,
    /// DTLB context-zero TSB, page size 1.
    MmuDtlbC0TsbPs1,
    /// DTLB context-zero configuration.
    MmuDtlbC0Config,
    /// DTLB context-nonzero TSB, page size 0.
    MmuDtlbCxTsbPs0,
    /// DTLB context-nonzero TSB, page size 1.
    MmuDtlbCxTsbPs1,
    /// DTLB context-nonzero configuration.
    MmuDtlbCxConfig,
    /// DTLB synchronous fault status.
    MmuDtlbSfsr,
    /// DTLB synchronous fault address.
    MmuDtlbSfar,
    /// DTLB tag access.
    MmuDtlbTagAccess,

    // Scratch pad
    /// Scratch-pad slot 0.
    ScratchpadR0,
    /// Scratch-pad slot 1.
    ScratchpadR1,
    /// Scratch-pad slot 2.
    ScratchpadR2,
    /// Scratch-pad slot 3.
    ScratchpadR3,
    /// Scratch-pad slot 4.
    ScratchpadR4,
    /// Scratch-pad slot 5.
    ScratchpadR5,
    /// Scratch-pad slot 6.
    ScratchpadR6,
    /// Scratch-pad slot 7.
    ScratchpadR7,
}

/// Which TLB a configuration register belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlbKind {
    /// Instruction TLB.
    Instruction,
    /// Data TLB.
    Data,
}

/// Context class selecting a TSB configuration set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextClass {
    /// Context zero (nucleus).
    Zero = 0,
    /// Any nonzero context.
    NonZero = 1,
}

/// Register within a TSB configuration set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsbField {
    /// TSB base for page size 0.
    TsbPs0,
    /// TSB base for page size 1.
    TsbPs1,
    /// Configuration.
    Config,
}

/// Static name table, indexed by `MiscReg as usize`.
const NAMES: [&str; NUM_MISC_REGS] = [
    "y",
    "ccr",
    "asi",
    "tick",
    "fprs",
    "pcr",
    "pic",
    "gsr",
    "softint_set",
    "softint_clr",
    "softint",
    "tick_cmpr",
    "stick",
    "stick_cmpr",
    "tpc",
    "tnpc",
    "tstate",
    "tt",
    "privtick",
    "tba",
    "pstate",
    "tl",
    "pil",
    "cwp",
    "cansave",
    "canrestore",
    "cleanwin",
    "otherwin",
    "wstate",
    "gl",
    "hpstate",
    "htstate",
    "hintp",
    "htba",
    "hver",
    "strand_sts_reg",
    "hstick_cmpr",
    "fsr",
    "mmu_p_context",
    "mmu_s_context",
    "mmu_part_id",
    "mmu_lsu_ctrl",
    "mmu_itlb_c0_tsb_ps0",
    "mmu_itlb_c0_tsb_ps1",
    "mmu_itlb_c0_config",
    "mmu_itlb_cx_tsb_ps0",
    "mmu_itlb_cx_tsb_ps1",
    "mmu_itlb_cx_config",
    "mmu_itlb_sfsr",
    "mmu_itlb_tag_access",
    "mmu_dtlb_c0_tsb_ps0",
    "mmu_dtlb_c0_tsb_ps1",
    "mmu_dtlb_c0_config",
    "mmu_dtlb_cx_tsb_ps0",
    "mmu_dtlb_cx_tsb_ps1",
    "mmu_dtlb_cx_config",
    "mmu_dtlb_sfsr",
    "mmu_dtlb_sfar",
    "mmu_dtlb_tag_access",
    "scratchpad_r0",
    "scratchpad_r1",
    "scratchpad_r2",
    "scratchpad_r3",
    "scratchpad_r4",
    "scratchpad_r5",
    "scratchpad_r6",
    "scratchpad_r7",
];

impl MiscReg {
    /// Every identifier, in index order.
    pub const ALL: [Self; 67] = [
        Self::Y,
        Self::Ccr,
        Self::Asi,
        Self::Tick,
        Self::Fprs,
        Self::Pcr,
        Self::Pic,
        Self::Gsr,
        Self::SoftintSet,
        Self::SoftintClr,
        Self::Softint,
        Self::TickCmpr,
        Self::Stick,
        Self::StickCmpr,
        Self::Tpc,
        Self::Tnpc,
        Self::Tstate,
        Self::Tt,
        Self::Privtick,
        Self::Tba,
        Self::Pstate,
        Self::Tl,
        Self::Pil,
        Self::Cwp,
        Self::Cansave,
        Self::Canrestore,
        Self::Cleanwin,
        Self::Otherwin,
        Self::Wstate,
        Self::Gl,
        Self::Hpstate,
        Self::Htstate,
        Self::Hintp,
        Self::Htba,
        Self::Hver,
        Self::StrandStsReg,
        Self::HstickCmpr,
        Self::Fsr,
        Self::MmuPContext,
        Self::MmuSContext,
        Self::MmuPartId,
        Self::MmuLsuCtrl,
        Self::MmuItlbC0TsbPs0,
        Self::MmuItlbC0TsbPs1,
        Self::MmuItlbC0Config,
        Self::MmuItlbCxTsbPs0,
        Self::MmuItlbCxTsbPs1,
        Self::MmuItlbCxConfig,
        Self::MmuItlbSfsr,
        Self::MmuItlbTagAccess,
        Self::MmuDtlbC0TsbPs0,
        Self::MmuDtlbC0TsbPs1,
        Self::MmuDtlbC0Config,
        Self::MmuDtlbCxTsbPs0,
        Self::MmuDtlbCxTsbPs1,
        Self::MmuDtlbCxConfig,
        Self::MmuDtlbSfsr,
        Self::MmuDtlbSfar,
        Self::MmuDtlbTagAccess,
        Self::ScratchpadR0,
        Self::ScratchpadR1,
        Self::ScratchpadR2,
        Self::ScratchpadR3,
        Self::ScratchpadR4,
        Self::ScratchpadR5,
        Self::ScratchpadR6,
        Self::ScratchpadR7,
    ];

    /// Converts a raw register index into an identifier.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw index, as produced by the instruction decoder.
    ///
    /// # Returns
    ///
    /// The identifier, or `UnknownRegister` if `index` is outside the enumeration.
    pub fn from_index(index: usize) -> Result<Self, MiscRegError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(MiscRegError::UnknownRegister(index))
    }

    /// Returns the raw index of this register.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lower-case architectural name of this register.
    #[inline]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

impl TryFrom<usize> for MiscReg {
    type Error = MiscRegError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for MiscReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the name of the register at a raw index.
///
/// # Arguments
///
/// * `index` - The raw register index.
///
/// # Returns
///
/// The static register name, or `UnknownRegister` if `index` is out of range.
pub fn misc_reg_name(index: usize) -> Result<&'static str, MiscRegError> {
    NAMES
        .get(index)
        .copied()
        .ok_or(MiscRegError::UnknownRegister(index))
}
