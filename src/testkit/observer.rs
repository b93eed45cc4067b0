//! Recording observer for asserting on loop events.

use parking_lot::Mutex;

use crate::domain::{CapacityReading, MonitorEvent, Streak, TriggerOutcome};
use crate::port::MonitorObserver;

/// Keeps every event in arrival order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<MonitorEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MonitorEvent> {
        self.events.lock().clone()
    }

    pub fn readings(&self) -> Vec<CapacityReading> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                MonitorEvent::ReadingTaken { reading, .. } => Some(reading.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn streaks(&self) -> Vec<Streak> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                MonitorEvent::ReadingTaken { streak, .. } => Some(*streak),
                _ => None,
            })
            .collect()
    }

    pub fn trigger_attempts(&self) -> usize {
        self.count(|e| matches!(e, MonitorEvent::TriggerAttempted { .. }))
    }

    pub fn trigger_outcomes(&self) -> Vec<TriggerOutcome> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                MonitorEvent::TriggerResult { outcome, .. } => Some(outcome.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn read_failures(&self) -> usize {
        self.count(|e| matches!(e, MonitorEvent::ReadFailed { .. }))
    }

    pub fn count(&self, predicate: impl Fn(&MonitorEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|e| predicate(e)).count()
    }
}

impl MonitorObserver for RecordingObserver {
    fn on_event(&self, event: &MonitorEvent) {
        self.events.lock().push(event.clone());
    }
}
