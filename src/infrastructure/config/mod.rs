//! Configuration loading and validation.
//!
//! Settings come from an optional TOML file, then environment variables
//! (a `.env` file is loaded by the binary), then CLI arguments. The
//! private key is only ever read from `WALLET_PRIVATE_KEY`.

pub mod logging;
pub mod monitor;
pub mod settings;
pub mod wallet;

pub use logging::LoggingConfig;
pub use settings::Settings;
pub use wallet::WalletConfig;
