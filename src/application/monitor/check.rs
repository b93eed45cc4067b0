use crate::domain::{CapacityReading, MonitorEvent, Streak};

use super::Monitor;

impl Monitor {
    /// Take exactly one reading.
    ///
    /// A failed read comes back as an unavailable zero reading.
    pub async fn check(&mut self) -> CapacityReading {
        let Some(reading) = self.poll(1).await else {
            return CapacityReading::unavailable(self.config.target.clone());
        };

        let mut streak = Streak::default();
        streak.record(reading.available);
        self.emit(MonitorEvent::ReadingTaken {
            iteration: 1,
            reading: reading.clone(),
            delta: None,
            streak,
        });
        reading
    }
}
