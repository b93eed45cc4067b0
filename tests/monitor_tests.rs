//! End-to-end loop tests through the public API with scripted collaborators.

use std::sync::Arc;
use std::time::Duration;

use bridgewatch::application::{
    shutdown, LoopExit, Monitor, SafetyFloor, TriggerAmount, TriggerPlan, WaitOutcome,
};
use bridgewatch::domain::{Amount, MonitorEvent, Recipient, StopReason};
use bridgewatch::infrastructure::config::monitor::ModeOverrides;
use bridgewatch::infrastructure::config::Settings;
use bridgewatch::testkit::chain::{read_error, ScriptedBalance, ScriptedExecutor, ScriptedReader};
use bridgewatch::testkit::observer::RecordingObserver;
use bridgewatch::testkit::{capacity, config};

fn settings(pairs: &[(&str, &str)]) -> Settings {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Settings::from_sources(None, move |key: &str| {
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    })
    .expect("settings")
}

fn eth_milli(milli: u128) -> Amount {
    Amount::from_units(milli * 10u128.pow(15))
}

#[tokio::test(start_paused = true)]
async fn bridge_trigger_survives_failures_and_sends_threshold() {
    let (trigger, signal) = shutdown::channel();
    let reader = Arc::new(
        ScriptedReader::values([capacity(2500), capacity(1000), capacity(3000)])
            .stop_when_exhausted(trigger),
    );
    let executor = Arc::new(ScriptedExecutor::failing_on(vec![1]));
    let observer = Arc::new(RecordingObserver::new());

    let mut monitor =
        Monitor::new(config(), reader.clone(), observer.clone()).with_shutdown(signal);
    let exit = monitor
        .auto_trigger(executor.clone(), TriggerPlan::default())
        .await
        .expect("configured");

    assert_eq!(exit, LoopExit::Cancelled { iterations: 3 });
    let recipient = Recipient::from("0x000000000000000000000000000000000000dEaD");
    assert_eq!(
        executor.executions(),
        vec![
            (recipient.clone(), capacity(2000)),
            (recipient, capacity(2000)),
        ]
    );

    let outcomes = observer.trigger_outcomes();
    assert_eq!(outcomes.len(), 2);
    assert!(!outcomes[0].success);
    assert!(outcomes[1].success);
}

#[tokio::test(start_paused = true)]
async fn sweep_moves_observed_balance_until_gas_runs_low() {
    let settings = settings(&[
        ("SWEEP_MIN_BALANCE", "100"),
        ("DEPOSIT_ADDRESS", "0xdeposit"),
        ("BALANCE_CHECK_EVERY", "2"),
    ]);
    let config = settings
        .sweep_config("0xholder", 6, &ModeOverrides::default())
        .expect("sweep config");

    let reader = Arc::new(ScriptedReader::values([
        Amount::from_units(50_000_000),
        Amount::from_units(150_000_000),
        Amount::from_units(400_000_000),
    ]));
    let gas = Arc::new(ScriptedBalance::new(vec![Ok(eth_milli(10)), Ok(eth_milli(4))]));
    let executor = Arc::new(ScriptedExecutor::succeeding());
    let observer = Arc::new(RecordingObserver::new());

    let plan = TriggerPlan {
        amount: TriggerAmount::Observed,
        safety: Some(SafetyFloor::new(
            gas.clone(),
            settings.min_gas_balance().expect("gas floor"),
            settings.safety.check_every,
        )),
    };
    let mut monitor = Monitor::new(config, reader.clone(), observer.clone());
    let exit = monitor.auto_trigger(executor.clone(), plan).await.expect("run");

    assert_eq!(
        exit,
        LoopExit::Stopped {
            iterations: 3,
            reason: StopReason::SafetyFloorBreached {
                balance: eth_milli(4),
                minimum: eth_milli(5),
            },
        }
    );
    assert_eq!(reader.call_count(), 2);
    assert_eq!(gas.call_count(), 2);
    assert_eq!(
        executor.executions(),
        vec![(Recipient::from("0xdeposit"), Amount::from_units(150_000_000))]
    );
    assert!(matches!(
        observer.events().last(),
        Some(MonitorEvent::FatalStop { iteration: 3, .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn wait_budget_comes_from_settings() {
    let settings = settings(&[("THRESHOLD", "2000"), ("POLL_INTERVAL_SECS", "30")]);
    let overrides = ModeOverrides {
        max_wait_minutes: Some(1),
        ..ModeOverrides::default()
    };
    let config = settings.read_only_config(&overrides).expect("config");
    assert_eq!(config.interval, Duration::from_secs(30));

    let reader = Arc::new(ScriptedReader::new(vec![
        Ok(capacity(1999)),
        read_error("503 Service Unavailable"),
        Ok(capacity(5000)),
    ]));
    let observer = Arc::new(RecordingObserver::new());
    let mut monitor = Monitor::new(config, reader.clone(), observer.clone());

    let outcome = monitor.wait().await;

    assert_eq!(outcome, WaitOutcome::TimedOut { attempts: 2 });
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(reader.call_count(), 2);
    assert_eq!(observer.read_failures(), 1);
}
