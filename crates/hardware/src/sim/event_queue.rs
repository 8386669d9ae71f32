//! Simulated-time event queue.
//!
//! A minimal [`EventScheduler`] used to drive the compare timers outside a full
//! simulation kernel (tests, tools, and single-strand drivers). Events are
//! ordered by firing time, then by scheduling order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::error::MiscRegError;
use crate::core::bank::RegisterBank;
use crate::core::timer::{CompareEvent, CompareKind, EventTicket};
use crate::core::traits::{EventScheduler, ExecContext};

/// Queue of pending compare-timer events.
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Current simulated time.
    now: u64,
    /// Sequence number for the next schedule.
    next_seq: u64,
    /// Pending events keyed by (time, sequence).
    pending: BTreeMap<EventTicket, CompareKind>,
}

impl EventQueue {
    /// Creates an empty queue at time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current simulated time.
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Returns the number of pending events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no event is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the firing time of the earliest pending event.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.keys().next().map(|t| t.when)
    }

    /// Advances time, removing every event due at or before `when`.
    ///
    /// # Arguments
    ///
    /// * `when` - The new current time. Time never moves backwards.
    ///
    /// # Returns
    ///
    /// The kinds of the fired events, in firing order.
    pub fn advance_to(&mut self, when: u64) -> Vec<CompareKind> {
        self.now = self.now.max(when);
        let mut fired = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().when > self.now {
                break;
            }
            fired.push(entry.remove());
        }
        fired
    }

    /// Advances time and dispatches every fired event to the bank.
    ///
    /// # Arguments
    ///
    /// * `when` - The new current time.
    /// * `bank` - The register bank owning the events.
    /// * `ctx` - The strand receiving the trap requests.
    ///
    /// # Returns
    ///
    /// The number of events dispatched, or the first error raised by
    /// [`RegisterBank::process_compare`]. Events after a failing one remain fired
    /// but are not dispatched.
    pub fn service<C>(
        &mut self,
        when: u64,
        bank: &mut RegisterBank,
        ctx: &mut C,
    ) -> Result<usize, MiscRegError>
    where
        C: ExecContext + ?Sized,
    {
        let fired = self.advance_to(when);
        for kind in &fired {
            bank.process_compare(*kind, ctx)?;
        }
        Ok(fired.len())
    }
}

impl EventScheduler for EventQueue {
    fn schedule_one_shot(&mut self, event: &mut CompareEvent, delay: u64) {
        let ticket = EventTicket {
            when: self.now.saturating_add(delay),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        let _ = self.pending.insert(ticket, event.kind());
        event.set_ticket(Some(ticket));
        debug!(kind = ?event.kind(), when = ticket.when, "event scheduled");
    }

    fn deschedule_if_scheduled(&mut self, event: &mut CompareEvent) {
        if let Some(ticket) = event.ticket() {
            let _ = self.pending.remove(&ticket);
        }
        event.set_ticket(None);
    }

    fn is_scheduled(&self, event: &CompareEvent) -> bool {
        event
            .ticket()
            .is_some_and(|ticket| self.pending.contains_key(&ticket))
    }
}
