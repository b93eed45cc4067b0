use super::command::WaitArgs;
use super::output;
use crate::application::{Monitor, WaitOutcome};
use crate::domain::CAPACITY_DECIMALS;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::monitor::ModeOverrides;
use crate::infrastructure::config::Settings;

/// Poll until capacity is available, the budget runs out, or Ctrl-C.
pub async fn execute_wait(settings: &Settings, args: WaitArgs) -> Result<i32> {
    let overrides = ModeOverrides {
        target: args.target,
        max_wait_minutes: args.max_minutes,
        ..ModeOverrides::default()
    };
    let config = settings.read_only_config(&overrides)?;
    let reader = bootstrap::capacity_reader(settings, &config.target)?;

    output::section("Waiting for capacity");
    output::field("Target", &config.target);
    output::field("Interval", format!("{}s", config.interval.as_secs()));
    output::field(
        "Max wait",
        output::or_unset(config.max_wait.map(|d| format!("{}m", d.as_secs() / 60))),
    );

    let mut monitor = Monitor::new(config, reader, bootstrap::capacity_observer())
        .with_shutdown(bootstrap::shutdown_on_ctrl_c());
    let outcome = monitor.wait().await;

    match &outcome {
        WaitOutcome::Available { reading, attempts } => output::success(&format!(
            "Capacity available: {} after {attempts} attempt(s)",
            reading.capacity.display(CAPACITY_DECIMALS)
        )),
        WaitOutcome::TimedOut { attempts } => {
            output::warning(&format!("Timed out after {attempts} attempt(s)"));
        }
        WaitOutcome::Cancelled { attempts } => {
            output::note(&format!("Interrupted after {attempts} attempt(s)"));
        }
    }

    Ok(outcome.exit_code())
}
