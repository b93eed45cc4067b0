use std::fs;

use bridgewatch::domain::{Amount, Target};
use bridgewatch::error::{ConfigError, Error};
use bridgewatch::infrastructure::config::monitor::ModeOverrides;
use bridgewatch::infrastructure::config::Settings;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), contents).expect("write temp config");
    file
}

#[test]
fn loads_all_sections_from_file() {
    let file = write_temp_config(
        r#"
[network]
rpc_url = "https://rpc.example"

[bridge]
address = "0x000000000000000000000000000000000000dEaD"
target = "30184"
interval_secs = 5
max_wait_minutes = 2
threshold = "1500.5"
recipient = "0x000000000000000000000000000000000000bEEF"

[safety]
min_gas_balance = "0.01"
check_every = 3

[sweep]
token = "0x0000000000000000000000000000000000001234"
deposit_address = "0x0000000000000000000000000000000000005678"
min_balance = "250"
interval_secs = 60

[logging]
level = "debug"
format = "json"
"#,
    );

    let settings = Settings::load(Some(file.path())).expect("load");

    assert_eq!(settings.rpc_url().unwrap(), "https://rpc.example");
    assert_eq!(settings.bridge.target, "30184");
    assert_eq!(
        settings.threshold().unwrap(),
        Some(Amount::from_units(150_050_000_000))
    );
    assert_eq!(settings.safety.check_every, 3);
    assert_eq!(
        settings.sweep_min_balance(18).unwrap(),
        Amount::from_units(250 * 10u128.pow(18))
    );
    assert_eq!(settings.sweep.interval_secs, 60);
    assert_eq!(settings.logging.format, "json");

    let config = settings.read_only_config(&ModeOverrides::default()).unwrap();
    assert_eq!(config.target, Target::from("30184"));
    assert_eq!(config.max_wait, Some(std::time::Duration::from_secs(120)));
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn malformed_file_is_parse_error() {
    let file = write_temp_config("[bridge\ninterval_secs = 5\n");
    let err = Settings::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn zero_check_period_is_rejected() {
    let file = write_temp_config("[safety]\ncheck_every = 0\n");
    let err = Settings::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("BALANCE_CHECK_EVERY"));
}
