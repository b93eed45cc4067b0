use super::command::MonitorArgs;
use super::{output, report_exit};
use crate::application::Monitor;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::monitor::ModeOverrides;
use crate::infrastructure::config::Settings;

/// Log every reading until Ctrl-C. Never executes anything.
pub async fn execute_monitor(settings: &Settings, args: MonitorArgs) -> Result<i32> {
    let overrides = ModeOverrides {
        target: args.target,
        interval_secs: args.interval_seconds,
        ..ModeOverrides::default()
    };
    let config = settings.read_only_config(&overrides)?;
    let reader = bootstrap::capacity_reader(settings, &config.target)?;

    output::section("Monitoring capacity");
    output::field("Target", &config.target);
    output::field("Interval", format!("{}s", config.interval.as_secs()));
    output::note("Press Ctrl+C to stop");

    let mut monitor = Monitor::new(config, reader, bootstrap::capacity_observer())
        .with_shutdown(bootstrap::shutdown_on_ctrl_c());
    let exit = monitor.monitor().await;

    report_exit(&exit);
    Ok(exit.exit_code())
}
