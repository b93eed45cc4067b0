use crate::domain::{Amount, MonitorEvent, Streak};

use super::{LoopExit, Monitor};

impl Monitor {
    /// Observe indefinitely without ever executing anything.
    ///
    /// Tracks availability streaks and the change against the previous
    /// successful reading; a decrease is reported as a cut.
    pub async fn monitor(&mut self) -> LoopExit {
        let mut iteration = 0;
        let mut streak = Streak::default();
        let mut previous: Option<Amount> = None;

        loop {
            if self.shutdown.is_triggered() {
                return LoopExit::Cancelled {
                    iterations: iteration,
                };
            }
            iteration += 1;

            match self.poll(iteration).await {
                Some(reading) => {
                    let delta = previous.map(|prev| reading.capacity.delta_from(prev));
                    previous = Some(reading.capacity);
                    streak.record(reading.available);
                    self.emit(MonitorEvent::ReadingTaken {
                        iteration,
                        reading,
                        delta,
                        streak,
                    });
                }
                None => streak.record(false),
            }

            if !self.shutdown.sleep(self.config.interval).await {
                return LoopExit::Cancelled {
                    iterations: iteration,
                };
            }
        }
    }
}
