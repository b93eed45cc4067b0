use std::path::Path;

use super::output;
use crate::infrastructure::config::Settings;

/// Print the resolved configuration. The private key is always masked.
pub fn execute_config(settings: &Settings, path: Option<&Path>) {
    output::section("Configuration");
    output::field(
        "File",
        output::or_unset(path.map(|p| p.display().to_string())),
    );

    output::section("Network");
    output::field("RPC URL", output::or_unset(settings.network.rpc_url.as_ref()));

    let bridge = &settings.bridge;
    output::section("Bridge");
    output::field("Address", output::or_unset(bridge.address.as_ref()));
    output::field("Target", &bridge.target);
    output::field("Interval", format!("{}s", bridge.interval_secs));
    output::field("Max wait", format!("{}m", bridge.max_wait_minutes));
    output::field("Threshold", output::or_unset(bridge.threshold));
    output::field("Recipient", output::or_unset(bridge.recipient.as_ref()));

    output::section("Safety");
    output::field("Gas floor", settings.safety.min_gas_balance);
    output::field("Check every", settings.safety.check_every);

    let sweep = &settings.sweep;
    output::section("Sweep");
    output::field("Token", output::or_unset(sweep.token.as_ref()));
    output::field("Deposit", output::or_unset(sweep.deposit_address.as_ref()));
    output::field("Minimum", output::or_unset(sweep.min_balance));
    output::field("Interval", format!("{}s", sweep.interval_secs));

    output::section("Wallet");
    match settings.wallet.masked_key() {
        Some(key) => output::success(&format!("Private key loaded ({key})")),
        None => output::warning("WALLET_PRIVATE_KEY not set (needed by trigger and sweep)"),
    }

    output::section("Logging");
    output::field("Level", &settings.logging.level);
    output::field("Format", &settings.logging.format);
}
