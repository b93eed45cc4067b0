//! Bridge rate-limit capacity reader.

use alloy_primitives::Address;
use alloy_provider::ProviderBuilder;
use async_trait::async_trait;

use super::contracts::IRateLimiter;
use super::rpc::{to_amount, RpcEndpoint};
use crate::domain::{Amount, Target};
use crate::error::{ConfigError, Error, Result};
use crate::port::ChainReader;

/// Reads `amountCanBeSent` for a destination endpoint id.
#[derive(Debug, Clone)]
pub struct RateLimitReader {
    rpc: RpcEndpoint,
    bridge: Address,
}

impl RateLimitReader {
    pub fn new(rpc: RpcEndpoint, bridge: Address) -> Self {
        Self { rpc, bridge }
    }

    /// Parse a target as a `uint32` endpoint id.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a non-negative 32-bit integer.
    pub fn endpoint_id(target: &Target) -> Result<u32> {
        target.as_str().trim().parse().map_err(|_| {
            ConfigError::InvalidValue {
                field: "target",
                reason: format!("'{target}' is not an endpoint id"),
            }
            .into()
        })
    }
}

#[async_trait]
impl ChainReader for RateLimitReader {
    async fn read(&self, target: &Target) -> Result<Amount> {
        let eid = Self::endpoint_id(target)?;
        let provider = ProviderBuilder::new().connect_http(self.rpc.url());
        let limiter = IRateLimiter::new(self.bridge, &provider);

        let limits = limiter
            .getAmountCanBeSent(eid)
            .call()
            .await
            .map_err(|e| Error::Read(format!("Failed to get rate limit: {e}")))?;

        to_amount(limits.amountCanBeSent)
    }

    fn name(&self) -> &'static str {
        "rate-limit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_id_parses_integers() {
        assert_eq!(RateLimitReader::endpoint_id(&Target::from("30101")).unwrap(), 30101);
    }

    #[test]
    fn endpoint_id_rejects_addresses() {
        let err = RateLimitReader::endpoint_id(&Target::from("0xabc")).unwrap_err();
        assert!(err.to_string().contains("not an endpoint id"));
    }
}
