//! Identifier types for monitored targets and transfer recipients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a reader is pointed at: a bridge endpoint id or a token holder address.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Adapters parse it into their own
/// chain-specific representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target(String);

impl Target {
    /// Create a new `Target` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the target as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Destination of a triggered transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipient(String);

impl Recipient {
    /// Create a new `Recipient` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the recipient as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Recipient {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_display_is_raw_value() {
        let target = Target::from("30101");
        assert_eq!(target.to_string(), "30101");
        assert_eq!(target.as_str(), "30101");
    }

    #[test]
    fn recipient_equality() {
        assert_eq!(Recipient::from("0xabc"), Recipient::new("0xabc".to_string()));
    }
}
