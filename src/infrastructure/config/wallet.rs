//! Wallet configuration for signing transactions.

use serde::Deserialize;

/// Private key is loaded from `WALLET_PRIVATE_KEY` env var at runtime (never from config file).
#[derive(Clone, Default, Deserialize)]
pub struct WalletConfig {
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl WalletConfig {
    /// Key shortened for display, e.g. `0x1234...cdef`.
    ///
    /// Anything that is not a plausible ASCII hex key is hidden entirely.
    #[must_use]
    pub fn masked_key(&self) -> Option<String> {
        self.private_key.as_deref().map(|key| {
            if key.is_ascii() && key.len() >= 12 {
                format!("{}...{}", &key[..6], &key[key.len() - 4..])
            } else {
                "***".to_string()
            }
        })
    }
}

impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("private_key", &self.masked_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_long_keys() {
        let wallet = WalletConfig {
            private_key: Some(format!("0x{}", "ab".repeat(32))),
        };
        assert_eq!(wallet.masked_key().as_deref(), Some("0xabab...abab"));
        assert!(!format!("{wallet:?}").contains(&"ab".repeat(32)));
    }

    #[test]
    fn masks_short_keys_entirely() {
        let wallet = WalletConfig {
            private_key: Some("0x12".into()),
        };
        assert_eq!(wallet.masked_key().as_deref(), Some("***"));
    }

    #[test]
    fn masks_non_ascii_keys_entirely() {
        let wallet = WalletConfig {
            private_key: Some("0xabcé123456789".into()),
        };
        assert_eq!(wallet.masked_key().as_deref(), Some("***"));
        assert!(format!("{wallet:?}").contains("***"));
    }
}
