//! Architectural constant tests.

use sparcsim_core::common::constants::*;

#[test]
fn counter_masks_partition_the_word() {
    assert_eq!(BIT63 | MASK63, u64::MAX);
    assert_eq!(BIT63 & MASK63, 0);
    assert_eq!(COUNTER_READ_MASK & 0x3, 0);
    assert_eq!(COUNTER_READ_MASK & BIT63, 0);
}

#[test]
fn pstate_mask_keeps_only_legal_fields() {
    assert_eq!(PSTATE_MASK, 0x13DE);
}

#[test]
fn tba_alignment_is_32k() {
    assert_eq!(!TBA_ALIGN_MASK, 0x7FFF);
}

#[test]
fn t1_implementation_limits() {
    assert_eq!(MAX_TL, 6);
    assert_eq!(NWINDOWS, 8);
    assert_eq!(MAX_GL, 3);
    assert_eq!(SCRATCHPAD_SLOTS, 8);
}

#[test]
fn reset_constants() {
    assert_eq!(HPSTATE_RESET, 0x800);
    assert_eq!(STRAND_STATUS_RESET, 0x50000);
}
