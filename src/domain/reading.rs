//! Point-in-time capacity observations and availability streaks.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Amount, Target};

/// A single observation of the monitored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReading {
    pub target: Target,
    pub capacity: Amount,
    pub taken_at: DateTime<Utc>,
    /// `capacity >= threshold` when a threshold is set, otherwise `capacity > 0`.
    pub available: bool,
}

impl CapacityReading {
    /// Build a reading and derive its availability flag.
    #[must_use]
    pub fn new(target: Target, capacity: Amount, threshold: Option<Amount>) -> Self {
        Self::at(target, capacity, threshold, Utc::now())
    }

    #[must_use]
    pub fn at(
        target: Target,
        capacity: Amount,
        threshold: Option<Amount>,
        taken_at: DateTime<Utc>,
    ) -> Self {
        Self {
            target,
            capacity,
            taken_at,
            available: is_available(capacity, threshold),
        }
    }

    /// Stand-in for a read that failed: zero capacity, never available.
    #[must_use]
    pub fn unavailable(target: Target) -> Self {
        Self {
            target,
            capacity: Amount::ZERO,
            taken_at: Utc::now(),
            available: false,
        }
    }
}

/// Availability rule shared by every mode.
#[must_use]
pub fn is_available(capacity: Amount, threshold: Option<Amount>) -> bool {
    match threshold {
        Some(threshold) => capacity >= threshold,
        None => !capacity.is_zero(),
    }
}

/// Consecutive available / blocked counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub consecutive_available: u64,
    pub consecutive_blocked: u64,
}

impl Streak {
    /// Count one reading; the opposite counter resets.
    pub fn record(&mut self, available: bool) {
        if available {
            self.consecutive_available += 1;
            self.consecutive_blocked = 0;
        } else {
            self.consecutive_blocked += 1;
            self.consecutive_available = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_with_threshold_is_inclusive() {
        let threshold = Some(Amount::from_units(100));
        assert!(is_available(Amount::from_units(100), threshold));
        assert!(!is_available(Amount::from_units(99), threshold));
    }

    #[test]
    fn availability_without_threshold_means_positive() {
        assert!(is_available(Amount::from_units(1), None));
        assert!(!is_available(Amount::ZERO, None));
    }

    #[test]
    fn unavailable_reading_is_zero() {
        let reading = CapacityReading::unavailable(Target::from("30101"));
        assert!(reading.capacity.is_zero());
        assert!(!reading.available);
    }

    #[test]
    fn streak_resets_on_flip() {
        let mut streak = Streak::default();
        for _ in 0..3 {
            streak.record(true);
        }
        assert_eq!(streak.consecutive_available, 3);
        assert_eq!(streak.consecutive_blocked, 0);

        streak.record(false);
        assert_eq!(streak.consecutive_available, 0);
        assert_eq!(streak.consecutive_blocked, 1);
    }
}
