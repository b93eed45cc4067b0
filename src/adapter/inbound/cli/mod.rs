//! CLI module graph and command dispatch.

pub mod check;
pub mod command;
pub mod config;
pub mod monitor;
pub mod output;
pub mod sweep;
pub mod trigger;
pub mod wait;

pub use command::{Cli, Commands};

use crate::application::LoopExit;
use crate::domain::{StopReason, NATIVE_DECIMALS};
use crate::error::Result;
use crate::infrastructure::config::Settings;

/// Load settings, initialise logging and run the selected command.
///
/// Returns the process exit code. Only startup failures surface as errors;
/// everything after the loop starts is reported through the exit code.
///
/// # Errors
///
/// Returns an error if configuration is missing or invalid.
pub async fn execute(cli: Cli) -> Result<i32> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    if cli.json_logs {
        settings.logging.format = "json".to_string();
    }
    settings.logging.init();

    match cli.command {
        Commands::Check(args) => check::execute_check(&settings, args).await,
        Commands::Wait(args) => wait::execute_wait(&settings, args).await,
        Commands::Monitor(args) => monitor::execute_monitor(&settings, args).await,
        Commands::Trigger(args) => trigger::execute_trigger(&settings, args).await,
        Commands::Sweep(args) => sweep::execute_sweep(&settings, args).await,
        Commands::Config => {
            config::execute_config(&settings, cli.config.as_deref());
            Ok(0)
        }
    }
}

/// Report how an unbounded loop ended.
pub(crate) fn report_exit(exit: &LoopExit) {
    match exit {
        LoopExit::Cancelled { iterations } => {
            output::note(&format!("Stopped after {iterations} iteration(s)"));
        }
        LoopExit::Stopped {
            iterations,
            reason: StopReason::SafetyFloorBreached { balance, minimum },
        } => {
            output::warning(&format!(
                "Gas balance {} below safety floor {} after {iterations} iteration(s)",
                balance.display(NATIVE_DECIMALS),
                minimum.display(NATIVE_DECIMALS),
            ));
        }
    }
}
