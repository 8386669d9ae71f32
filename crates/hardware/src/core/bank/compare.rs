//! Compare-Register State Machine.
//!
//! This module arms and disarms the one-shot events behind `TICK_CMPR`,
//! `STICK_CMPR` and `HSTICK_CMPR`. It performs the following:
//! 1. **Lazy Creation:** The event for a compare register is created on its first write.
//! 2. **Rescheduling:** Any pending schedule is cancelled before a new one is made.
//! 3. **Arming:** An enabled compare value ahead of its reference counter schedules the
//!    event `delta * period` time units out.
//! 4. **Firing:** A fired event returns to `Unarmed` and requests a trap from the strand.

use tracing::debug;

use super::RegisterBank;
use crate::common::constants::{BIT63, MASK63};
use crate::common::error::MiscRegError;
use crate::core::timer::{CompareEvent, CompareKind, CompareState};
use crate::core::traits::{EventScheduler, ExecContext};

impl RegisterBank {
    /// Stores a compare value and re-arms its event.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which compare register is written.
    /// * `val` - The new compare value; bit 63 set disables the interrupt.
    /// * `ctx` - Source of the reference counters.
    /// * `sched` - Scheduler the event is (de)scheduled through.
    pub(crate) fn write_compare<C, S>(
        &mut self,
        kind: CompareKind,
        val: u64,
        ctx: &C,
        sched: &mut S,
    ) -> Result<(), MiscRegError>
    where
        C: ExecContext + ?Sized,
        S: EventScheduler + ?Sized,
    {
        self.regs.write(kind.register(), val)?;

        let (reference, period) = match kind {
            CompareKind::Tick => (
                self.tick_count(ctx.instruction_count()),
                self.timer_cfg.tick_period,
            ),
            CompareKind::Stick | CompareKind::HStick => {
                (ctx.system_tick() & MASK63, self.timer_cfg.stick_period)
            }
        };

        let event = self
            .timers
            .slot_mut(kind)
            .get_or_insert_with(|| CompareEvent::new(kind));

        if sched.is_scheduled(event) {
            debug!(?kind, "descheduling compare event");
        }
        sched.deschedule_if_scheduled(event);

        let target = val & MASK63;
        if val & BIT63 == 0 && target > reference {
            let delay = (target - reference).saturating_mul(period);
            debug!(?kind, target, reference, delay, "scheduling compare event");
            sched.schedule_one_shot(event, delay);
        }
        Ok(())
    }

    /// Handles a compare event fired by the scheduler.
    ///
    /// # Arguments
    ///
    /// * `kind` - The compare register whose event fired.
    /// * `ctx` - The strand that receives the trap request.
    ///
    /// # Returns
    ///
    /// The result of [`ExecContext::post_timer_trap`], which is `NotImplemented`
    /// unless the integrator supplies trap delivery.
    pub fn process_compare<C>(&mut self, kind: CompareKind, ctx: &mut C) -> Result<(), MiscRegError>
    where
        C: ExecContext + ?Sized,
    {
        if let Some(event) = self.timers.slot_mut(kind) {
            event.set_ticket(None);
        }
        debug!(?kind, "compare event fired");
        ctx.post_timer_trap(kind)
    }

    /// Returns whether the compare timer for `kind` is armed.
    ///
    /// A timer whose event was never created is `Unarmed`.
    pub fn compare_state<S>(&self, kind: CompareKind, sched: &S) -> CompareState
    where
        S: EventScheduler + ?Sized,
    {
        match self.timers.get(kind) {
            Some(event) if sched.is_scheduled(event) => CompareState::Armed,
            _ => CompareState::Unarmed,
        }
    }

    /// Cancels every pending compare-timer schedule.
    pub fn cancel_timers<S>(&mut self, sched: &mut S)
    where
        S: EventScheduler + ?Sized,
    {
        for kind in CompareKind::ALL {
            if let Some(event) = self.timers.slot_mut(kind) {
                sched.deschedule_if_scheduled(event);
            }
        }
    }
}
