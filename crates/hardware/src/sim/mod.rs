//! Simulation support.
//!
//! Provides checkpointing of the register bank and a reference event queue
//! for driving the compare timers.

/// Ordered checkpoint save and restore.
pub mod checkpoint;

/// Simulated-time event queue.
pub mod event_queue;
