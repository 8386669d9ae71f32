//! Reference event queue tests.

use sparcsim_core::core::timer::{CompareEvent, CompareKind};
use sparcsim_core::core::traits::EventScheduler;
use sparcsim_core::sim::event_queue::EventQueue;

#[test]
fn new_queue_is_empty() {
    let queue = EventQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.now(), 0);
    assert_eq!(queue.next_due(), None);
}

#[test]
fn schedule_records_ticket_on_event() {
    let mut queue = EventQueue::new();
    let mut event = CompareEvent::new(CompareKind::Tick);
    queue.schedule_one_shot(&mut event, 10);
    assert!(queue.is_scheduled(&event));
    assert_eq!(event.ticket().map(|t| t.when), Some(10));
    assert_eq!(queue.len(), 1);
    assert!(!queue.is_empty());
}

#[test]
fn deschedule_is_idempotent() {
    let mut queue = EventQueue::new();
    let mut event = CompareEvent::new(CompareKind::Stick);
    queue.deschedule_if_scheduled(&mut event);
    queue.schedule_one_shot(&mut event, 10);
    queue.deschedule_if_scheduled(&mut event);
    queue.deschedule_if_scheduled(&mut event);
    assert!(!queue.is_scheduled(&event));
    assert_eq!(event.ticket(), None);
    assert!(queue.is_empty());
}

#[test]
fn advance_fires_only_due_events() {
    let mut queue = EventQueue::new();
    let mut early = CompareEvent::new(CompareKind::Tick);
    let mut late = CompareEvent::new(CompareKind::Stick);
    queue.schedule_one_shot(&mut late, 20);
    queue.schedule_one_shot(&mut early, 5);
    assert_eq!(queue.advance_to(10), vec![CompareKind::Tick]);
    assert!(!queue.is_scheduled(&early));
    assert!(queue.is_scheduled(&late));
    assert_eq!(queue.next_due(), Some(20));
}

#[test]
fn simultaneous_events_fire_in_schedule_order() {
    let mut queue = EventQueue::new();
    let mut events = CompareKind::ALL.map(CompareEvent::new);
    for event in events.iter_mut().rev() {
        queue.schedule_one_shot(event, 7);
    }
    assert_eq!(
        queue.advance_to(7),
        vec![CompareKind::HStick, CompareKind::Stick, CompareKind::Tick]
    );
}

#[test]
fn time_never_moves_backwards() {
    let mut queue = EventQueue::new();
    let _ = queue.advance_to(20);
    let _ = queue.advance_to(5);
    assert_eq!(queue.now(), 20);
}

#[test]
fn delay_is_relative_to_now() {
    let mut queue = EventQueue::new();
    let _ = queue.advance_to(100);
    let mut event = CompareEvent::new(CompareKind::HStick);
    queue.schedule_one_shot(&mut event, 25);
    assert_eq!(queue.next_due(), Some(125));
}
