use std::sync::Arc;

use super::command::SweepArgs;
use super::{output, report_exit};
use crate::adapter::outbound::log::LogObserver;
use crate::application::{Monitor, TriggerAmount, TriggerPlan};
use crate::domain::NATIVE_DECIMALS;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::monitor::ModeOverrides;
use crate::infrastructure::config::Settings;

/// Transfer the whole token balance to the deposit address each time it
/// reaches the configured minimum.
pub async fn execute_sweep(settings: &Settings, args: SweepArgs) -> Result<i32> {
    let overrides = ModeOverrides {
        interval_secs: args.interval,
        ..ModeOverrides::default()
    };
    let wiring = bootstrap::token_sweep(settings).await?;
    let config = settings.sweep_config(wiring.wallet.clone(), wiring.decimals, &overrides)?;

    output::section("Token sweep");
    output::field("Token", &wiring.symbol);
    output::field("Wallet", &wiring.wallet);
    output::field("Deposit", output::or_unset(config.recipient.as_ref()));
    output::field(
        "Minimum",
        output::or_unset(config.threshold.map(|t| t.display(wiring.decimals))),
    );
    output::field("Interval", format!("{}s", config.interval.as_secs()));
    output::field("Gas floor", wiring.safety.minimum.display(NATIVE_DECIMALS));
    output::note("Press Ctrl+C to stop");

    let observer = Arc::new(LogObserver::new(wiring.symbol, wiring.decimals));
    let plan = TriggerPlan {
        amount: TriggerAmount::Observed,
        safety: Some(wiring.safety),
    };
    let mut monitor = Monitor::new(config, wiring.reader, observer)
        .with_shutdown(bootstrap::shutdown_on_ctrl_c());
    let exit = monitor.auto_trigger(wiring.executor, plan).await?;

    report_exit(&exit);
    Ok(exit.exit_code())
}
