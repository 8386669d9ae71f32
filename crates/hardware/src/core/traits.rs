//! Collaborator traits for the register bank.
//!
//! This module defines the seams between the register bank and the rest of the
//! simulator. It provides:
//! 1. **Execution Context:** Instruction count, system time base, register-window
//!    notification, interrupt notification, and trap delivery.
//! 2. **Event Scheduling:** One-shot scheduling of compare-timer events in simulated time.
//!
//! Both traits are implemented by the owning strand; the reference
//! [`EventQueue`](crate::sim::event_queue::EventQueue) implements the scheduler.

use crate::common::error::MiscRegError;
use crate::core::timer::{CompareEvent, CompareKind};

/// Register-file context selector changed by a miscellaneous register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegContext {
    /// Current window pointer (`CWP`) selects the visible window.
    CurrentWindow,
    /// Global level (`GL`) selects the visible global register set.
    Globals,
}

/// Execution state of the strand that owns the register bank.
pub trait ExecContext {
    /// Returns the number of instructions retired by the strand.
    ///
    /// `TICK` advances with this count rather than with wall-clock time.
    fn instruction_count(&self) -> u64;

    /// Returns the current value of the system time base backing `STICK`.
    fn system_tick(&self) -> u64;

    /// Switches the visible register-window context.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which selector changed.
    /// * `value` - The new selector value.
    fn change_register_context(&mut self, kind: RegContext, value: u64);

    /// Notifies the interrupt subsystem that `SOFTINT` or `PIL` changed.
    ///
    /// Newly pending interrupts are taken when the strand next polls for them.
    fn soft_interrupt_changed(&mut self, _softint: u64, _pil: u64) {}

    /// Delivers the trap requested by a compare-timer match.
    ///
    /// # Returns
    ///
    /// `NotImplemented` unless the integrator supplies a trap-delivery body.
    fn post_timer_trap(&mut self, kind: CompareKind) -> Result<(), MiscRegError> {
        Err(MiscRegError::NotImplemented(kind.trap_name()))
    }
}

/// Simulated-time scheduler for compare-timer events.
///
/// Implementations record the schedule on the event itself (see
/// [`CompareEvent::ticket`]) so that the bank can observe whether it is armed.
pub trait EventScheduler {
    /// Schedules `event` to fire `delay` time units from now.
    ///
    /// The event must not already be scheduled.
    fn schedule_one_shot(&mut self, event: &mut CompareEvent, delay: u64);

    /// Cancels `event` if it is scheduled; does nothing otherwise.
    fn deschedule_if_scheduled(&mut self, event: &mut CompareEvent);

    /// Returns `true` if `event` has a pending schedule.
    fn is_scheduled(&self, event: &CompareEvent) -> bool;
}
