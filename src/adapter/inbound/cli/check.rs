use chrono::{DateTime, Utc};
use serde::Serialize;

use super::command::CheckArgs;
use super::output;
use crate::application::Monitor;
use crate::domain::{Amount, CapacityReading, Target, CAPACITY_DECIMALS};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::monitor::ModeOverrides;
use crate::infrastructure::config::Settings;

/// `check --json` payload.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub target: &'a Target,
    /// Smallest units.
    pub capacity: Amount,
    /// Whole tokens.
    pub capacity_tokens: String,
    pub threshold: Option<Amount>,
    pub available: bool,
    pub taken_at: DateTime<Utc>,
}

impl<'a> CheckReport<'a> {
    pub fn new(reading: &'a CapacityReading, threshold: Option<Amount>) -> Self {
        Self {
            target: &reading.target,
            capacity: reading.capacity,
            capacity_tokens: reading.capacity.display(CAPACITY_DECIMALS),
            threshold,
            available: reading.available,
            taken_at: reading.taken_at,
        }
    }
}

/// Take one reading; exit 0 if available, 1 otherwise.
pub async fn execute_check(settings: &Settings, args: CheckArgs) -> Result<i32> {
    let overrides = ModeOverrides {
        target: args.target,
        ..ModeOverrides::default()
    };
    let config = settings.read_only_config(&overrides)?;
    let reader = bootstrap::capacity_reader(settings, &config.target)?;
    let threshold = config.threshold;

    let mut monitor = Monitor::new(config, reader, bootstrap::capacity_observer());
    let reading = monitor.check().await;

    if args.json {
        let report = CheckReport::new(&reading, threshold);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::section("Capacity");
        output::field("Target", &reading.target);
        output::field(
            "Capacity",
            output::highlight(reading.capacity.display(CAPACITY_DECIMALS)),
        );
        output::field(
            "Threshold",
            output::or_unset(threshold.map(|t| t.display(CAPACITY_DECIMALS))),
        );
        if reading.available {
            output::success("Capacity available");
        } else {
            output::warning("Capacity unavailable");
        }
    }

    Ok(i32::from(!reading.available))
}
