//! Compare-timer events.
//!
//! Each of `TICK_CMPR`, `STICK_CMPR` and `HSTICK_CMPR` owns one lazily created
//! one-shot event. The event carries its own schedule ticket, so a single
//! event is reused across any number of compare writes.

use crate::core::arch::misc_reg::MiscReg;

/// Which compare register an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompareKind {
    /// `TICK_CMPR`, referenced against `TICK`.
    Tick,
    /// `STICK_CMPR`, referenced against the system time base.
    Stick,
    /// `HSTICK_CMPR`, referenced against the system time base.
    HStick,
}

impl CompareKind {
    /// All compare kinds.
    pub const ALL: [Self; 3] = [Self::Tick, Self::Stick, Self::HStick];

    /// Returns the compare register this kind is driven by.
    pub const fn register(self) -> MiscReg {
        match self {
            Self::Tick => MiscReg::TickCmpr,
            Self::Stick => MiscReg::StickCmpr,
            Self::HStick => MiscReg::HstickCmpr,
        }
    }

    /// Returns the compare kind driven by `reg`, if any.
    pub const fn from_register(reg: MiscReg) -> Option<Self> {
        match reg {
            MiscReg::TickCmpr => Some(Self::Tick),
            MiscReg::StickCmpr => Some(Self::Stick),
            MiscReg::HstickCmpr => Some(Self::HStick),
            _ => None,
        }
    }

    /// Name of the trap a match of this compare register requests.
    pub const fn trap_name(self) -> &'static str {
        match self {
            Self::Tick => "tick compare trap",
            Self::Stick => "stick compare trap",
            Self::HStick => "hstick compare trap",
        }
    }
}

/// Observable state of a compare timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareState {
    /// No pending schedule (including when the event was never created).
    Unarmed,
    /// The event is scheduled to fire.
    Armed,
}

/// Position of a scheduled event in a scheduler's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventTicket {
    /// Absolute simulated time the event fires at.
    pub when: u64,
    /// Scheduler-assigned sequence number, unique per schedule.
    pub seq: u64,
}

/// One-shot compare-timer event owned by the register bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareEvent {
    kind: CompareKind,
    ticket: Option<EventTicket>,
}

impl CompareEvent {
    /// Creates an unscheduled event for `kind`.
    pub const fn new(kind: CompareKind) -> Self {
        Self { kind, ticket: None }
    }

    /// Returns the compare register kind.
    pub const fn kind(&self) -> CompareKind {
        self.kind
    }

    /// Returns the ticket of the most recent schedule, if not yet cleared.
    ///
    /// A ticket may outlive its schedule if the scheduler fired the event
    /// before the owner acknowledged it; use
    /// [`EventScheduler::is_scheduled`](crate::core::traits::EventScheduler::is_scheduled)
    /// for the authoritative answer.
    pub const fn ticket(&self) -> Option<EventTicket> {
        self.ticket
    }

    /// Records (or clears) the schedule ticket. Called by schedulers.
    pub const fn set_ticket(&mut self, ticket: Option<EventTicket>) {
        self.ticket = ticket;
    }
}
