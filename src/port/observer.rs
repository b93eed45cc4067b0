use crate::domain::MonitorEvent;

/// Receives every event the monitor loop produces.
///
/// Called inline on the loop task, so implementations should return
/// quickly.
pub trait MonitorObserver: Send + Sync {
    fn on_event(&self, event: &MonitorEvent);
}
