use super::command::TriggerArgs;
use super::{output, report_exit};
use crate::application::{Monitor, TriggerAmount, TriggerPlan};
use crate::domain::{Target, CAPACITY_DECIMALS, NATIVE_DECIMALS};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::monitor::ModeOverrides;
use crate::infrastructure::config::Settings;

/// Withdraw `threshold` to the recipient for every reading at or above it.
pub async fn execute_trigger(settings: &Settings, args: TriggerArgs) -> Result<i32> {
    let overrides = ModeOverrides {
        target: args.target,
        interval_secs: args.interval,
        ..ModeOverrides::default()
    };
    // Connection settings first, so RPC_URL is the first thing reported missing.
    let target = Target::new(
        overrides
            .target
            .clone()
            .unwrap_or_else(|| settings.bridge.target.clone()),
    );
    let wiring = bootstrap::bridge_trigger(settings, &target)?;
    let config = settings.trigger_config(&overrides)?;

    output::section("Auto-trigger");
    output::field("Target", &config.target);
    output::field(
        "Threshold",
        output::or_unset(config.threshold.map(|t| t.display(CAPACITY_DECIMALS))),
    );
    output::field("Recipient", output::or_unset(config.recipient.as_ref()));
    output::field("Wallet", &wiring.wallet);
    output::field("Interval", format!("{}s", config.interval.as_secs()));
    output::field(
        "Gas floor",
        format!(
            "{} (every {} iterations)",
            wiring.safety.minimum.display(NATIVE_DECIMALS),
            wiring.safety.check_every
        ),
    );
    output::note("Press Ctrl+C to stop");

    let plan = TriggerPlan {
        amount: TriggerAmount::Threshold,
        safety: Some(wiring.safety),
    };
    let mut monitor = Monitor::new(config, wiring.reader, bootstrap::capacity_observer())
        .with_shutdown(bootstrap::shutdown_on_ctrl_c());
    let exit = monitor.auto_trigger(wiring.executor, plan).await?;

    report_exit(&exit);
    Ok(exit.exit_code())
}
