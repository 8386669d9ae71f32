//! Plain register storage tests.
//!
//! Covers the side-effect-free accessors: write masks, trap-level selection,
//! computed `HVER`, unmodeled registers, and reset values.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use sparcsim_core::MiscReg;
use sparcsim_core::common::constants::{BIT63, HPSTATE_RESET, STRAND_STATUS_RESET};
use sparcsim_core::common::MiscRegError;
use sparcsim_core::core::arch::misc_reg::{ContextClass, TlbKind, TsbField};
use sparcsim_core::core::arch::regs::{MiscRegs, StrandParams};

/// Registers whose plain write stores the value unchanged.
const VERBATIM: [MiscReg; 12] = [
    MiscReg::Y,
    MiscReg::Ccr,
    MiscReg::Asi,
    MiscReg::Gsr,
    MiscReg::Softint,
    MiscReg::Htba,
    MiscReg::Hpstate,
    MiscReg::MmuPContext,
    MiscReg::MmuLsuCtrl,
    MiscReg::MmuItlbTagAccess,
    MiscReg::MmuDtlbSfar,
    MiscReg::ScratchpadR3,
];

/// The twelve TSB configuration registers, ITLB then DTLB.
const TSB_REGS: [MiscReg; 12] = [
    MiscReg::MmuItlbC0TsbPs0,
    MiscReg::MmuItlbC0TsbPs1,
    MiscReg::MmuItlbC0Config,
    MiscReg::MmuItlbCxTsbPs0,
    MiscReg::MmuItlbCxTsbPs1,
    MiscReg::MmuItlbCxConfig,
    MiscReg::MmuDtlbC0TsbPs0,
    MiscReg::MmuDtlbC0TsbPs1,
    MiscReg::MmuDtlbC0Config,
    MiscReg::MmuDtlbCxTsbPs0,
    MiscReg::MmuDtlbCxTsbPs1,
    MiscReg::MmuDtlbCxConfig,
];

#[test]
fn reset_values() {
    let regs = MiscRegs::default();
    assert_eq!(regs.tick, BIT63);
    assert_eq!(regs.hpstate, HPSTATE_RESET);
    assert_eq!(regs.strand_sts_reg, STRAND_STATUS_RESET);
    assert_eq!(regs.pstate, 0);
    assert_eq!(regs.tl, 0);
    assert_eq!(regs.scratchpad, [0; 8]);
}

#[test]
fn reset_clears_written_state() {
    let mut regs = MiscRegs::default();
    regs.write(MiscReg::Y, 7).unwrap();
    regs.write(MiscReg::Tl, 2).unwrap();
    regs.write(MiscReg::Tpc, 0x4000).unwrap();
    regs.write(MiscReg::MmuDtlbCxConfig, 3).unwrap();
    regs.reset();
    assert_eq!(regs, MiscRegs::default());
}

#[test]
fn strand_status_reset_follows_params() {
    let params = StrandParams {
        strand_status_reset: 0x1234,
        ..StrandParams::default()
    };
    let mut regs = MiscRegs::new(params);
    assert_eq!(regs.strand_sts_reg, 0x1234);
    regs.write(MiscReg::StrandStsReg, 0).unwrap();
    regs.reset();
    assert_eq!(regs.strand_sts_reg, 0x1234);
}

#[test]
fn hver_reports_implementation_limits() {
    let regs = MiscRegs::default();
    assert_eq!(regs.read(MiscReg::Hver), Ok(0x30608));
}

#[test]
fn hver_follows_params() {
    let regs = MiscRegs::new(StrandParams {
        n_windows: 4,
        max_gl: 1,
        strand_status_reset: 0,
    });
    assert_eq!(regs.hver(), 4 | (6 << 8) | (1 << 16));
}

#[rstest]
#[case(0x100, 3, 0x30600)]
#[case(8, 0x1FF, 0xFF0608)]
#[case(0x1_0000_0008, 0x1_0003, 0x30608)]
fn hver_fields_never_overlap(#[case] n_windows: u64, #[case] max_gl: u64, #[case] hver: u64) {
    let regs = MiscRegs::new(StrandParams {
        n_windows,
        max_gl,
        strand_status_reset: 0,
    });
    assert_eq!(regs.hver(), hver);
    assert_eq!((regs.hver() >> 8) & 0xFF, 6);
}

#[test]
fn hver_is_read_only() {
    let mut regs = MiscRegs::default();
    assert_eq!(
        regs.write(MiscReg::Hver, 0),
        Err(MiscRegError::NotImplemented("HVER write"))
    );
}

#[rstest]
#[case(MiscReg::Pcr)]
#[case(MiscReg::Pic)]
#[case(MiscReg::Privtick)]
#[case(MiscReg::Hintp)]
fn unmodeled_registers_fail_both_ways(#[case] reg: MiscReg) {
    let mut regs = MiscRegs::default();
    assert!(matches!(regs.read(reg), Err(MiscRegError::NotImplemented(_))));
    assert!(matches!(
        regs.write(reg, 1),
        Err(MiscRegError::NotImplemented(_))
    ));
}

#[rstest]
#[case(MiscReg::SoftintSet)]
#[case(MiscReg::SoftintClr)]
fn softint_aliases_are_write_only(#[case] reg: MiscReg) {
    let regs = MiscRegs::default();
    assert!(matches!(regs.read(reg), Err(MiscRegError::NotImplemented(_))));
}

#[test]
fn softint_set_and_clear_modify_bits() {
    let mut regs = MiscRegs::default();
    regs.write(MiscReg::Softint, 0b1000).unwrap();
    regs.write(MiscReg::SoftintSet, 0b0011).unwrap();
    assert_eq!(regs.read(MiscReg::Softint), Ok(0b1011));
    regs.write(MiscReg::SoftintClr, 0b1001).unwrap();
    assert_eq!(regs.read(MiscReg::Softint), Ok(0b0010));
}

#[test]
fn pstate_drops_illegal_bits() {
    let mut regs = MiscRegs::default();
    regs.write(MiscReg::Pstate, u64::MAX).unwrap();
    assert_eq!(regs.read(MiscReg::Pstate), Ok(0x13DE));
}

#[test]
fn tba_is_32k_aligned() {
    let mut regs = MiscRegs::default();
    regs.write(MiscReg::Tba, 0x1_2345_FFFF).unwrap();
    assert_eq!(regs.read(MiscReg::Tba), Ok(0x1_2345_8000));
}

#[rstest]
#[case(MiscReg::Tpc)]
#[case(MiscReg::Tnpc)]
#[case(MiscReg::Tstate)]
#[case(MiscReg::Tt)]
#[case(MiscReg::Htstate)]
fn trap_registers_need_a_trap_level(#[case] reg: MiscReg) {
    let mut regs = MiscRegs::default();
    let err = Err(MiscRegError::TrapLevelOutOfRange { tl: 0 });
    assert_eq!(regs.read(reg), err);
    assert_eq!(regs.write(reg, 1), err.map(|_: u64| ()));
}

#[rstest]
#[case(MiscReg::Tpc)]
#[case(MiscReg::Tnpc)]
#[case(MiscReg::Tstate)]
#[case(MiscReg::Tt)]
#[case(MiscReg::Htstate)]
fn trap_registers_are_banked_by_level(#[case] reg: MiscReg) {
    let mut regs = MiscRegs::default();
    for tl in 1..=6 {
        regs.write(MiscReg::Tl, tl).unwrap();
        regs.write(reg, 0x100 * tl).unwrap();
    }
    for tl in 1..=6 {
        regs.write(MiscReg::Tl, tl).unwrap();
        assert_eq!(regs.read(reg), Ok(0x100 * tl));
    }
}

#[test]
fn tsb_registers_are_independent() {
    let mut regs = MiscRegs::default();
    for (i, reg) in TSB_REGS.iter().enumerate() {
        regs.write(*reg, i as u64 + 1).unwrap();
    }
    for (i, reg) in TSB_REGS.iter().enumerate() {
        assert_eq!(regs.read(*reg), Ok(i as u64 + 1), "{reg}");
    }
    assert_eq!(
        regs.tsb(TlbKind::Data, ContextClass::NonZero, TsbField::Config),
        12
    );
}

#[test]
fn set_tsb_is_visible_through_read() {
    let mut regs = MiscRegs::default();
    regs.set_tsb(TlbKind::Instruction, ContextClass::NonZero, TsbField::TsbPs1, 0xAB);
    assert_eq!(regs.read(MiscReg::MmuItlbCxTsbPs1), Ok(0xAB));
    assert_eq!(regs.read(MiscReg::MmuDtlbCxTsbPs1), Ok(0));
}

#[test]
fn scratchpad_slots_are_independent() {
    let mut regs = MiscRegs::default();
    let pads = &MiscReg::ALL[MiscReg::ScratchpadR0.index()..];
    assert_eq!(pads.len(), 8);
    for (i, reg) in pads.iter().enumerate() {
        regs.write(*reg, 0xA0 + i as u64).unwrap();
    }
    assert_eq!(regs.scratchpad, [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7]);
}

proptest! {
    #[test]
    fn pstate_keeps_only_mask_bits(val: u64) {
        let mut regs = MiscRegs::default();
        regs.write(MiscReg::Pstate, val).unwrap();
        prop_assert_eq!(regs.read(MiscReg::Pstate), Ok(val & 0x13DE));
    }

    #[test]
    fn tba_low_bits_always_clear(val: u64) {
        let mut regs = MiscRegs::default();
        regs.write(MiscReg::Tba, val).unwrap();
        let tba = regs.read(MiscReg::Tba).unwrap();
        prop_assert_eq!(tba & 0x7FFF, 0);
        prop_assert_eq!(tba, val & !0x7FFF);
    }

    #[test]
    fn verbatim_registers_round_trip(idx in 0usize..12, val: u64) {
        let reg = VERBATIM[idx];
        let mut regs = MiscRegs::default();
        regs.write(reg, val).unwrap();
        prop_assert_eq!(regs.read(reg), Ok(val));
    }
}
