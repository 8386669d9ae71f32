//! Trap-level array tests.

use proptest::prelude::*;
use sparcsim_core::common::{MAX_TL, MiscRegError};
use sparcsim_core::core::arch::trap_stack::TrapStack;

#[test]
fn new_stack_is_zeroed() {
    let stack = TrapStack::new();
    assert_eq!(stack.as_slice(), &[0; MAX_TL]);
}

#[test]
fn slice_views_follow_trap_level_order() {
    let mut stack = TrapStack::new();
    AsMut::<[u64]>::as_mut(&mut stack).copy_from_slice(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(AsRef::<[u64]>::as_ref(&stack).len(), MAX_TL);
    assert_eq!(stack.get(1), Ok(1));
    assert_eq!(stack.get(MAX_TL as u64), Ok(6));
}

#[test]
fn trap_level_zero_selects_no_slot() {
    let mut stack = TrapStack::new();
    assert_eq!(
        stack.get(0),
        Err(MiscRegError::TrapLevelOutOfRange { tl: 0 })
    );
    assert_eq!(
        stack.set(0, 1),
        Err(MiscRegError::TrapLevelOutOfRange { tl: 0 })
    );
    assert_eq!(stack, TrapStack::new());
}

#[test]
fn trap_level_above_max_is_rejected() {
    let stack = TrapStack::new();
    assert_eq!(
        stack.get(MAX_TL as u64 + 1),
        Err(MiscRegError::TrapLevelOutOfRange { tl: 7 })
    );
}

#[test]
fn level_n_maps_to_slot_n_minus_one() {
    let mut stack = TrapStack::new();
    stack.set(1, 0x11).unwrap();
    stack.set(6, 0x66).unwrap();
    assert_eq!(stack.as_slice(), &[0x11, 0, 0, 0, 0, 0x66]);
}

proptest! {
    #[test]
    fn levels_do_not_alias(tl in 1u64..=6, other in 1u64..=6, val: u64) {
        prop_assume!(tl != other);
        let mut stack = TrapStack::new();
        stack.set(tl, val).unwrap();
        prop_assert_eq!(stack.get(tl), Ok(val));
        prop_assert_eq!(stack.get(other), Ok(0));
    }
}
