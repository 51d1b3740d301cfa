//! Solana public key (address) parsing.

use crate::error::LaunchpadError;
use std::str::FromStr;

/// Re-export the underlying Solana Pubkey type.
pub use solana_pubkey::Pubkey;

/// Extension trait for Pubkey to add launchpad error handling.
pub trait PubkeyExt {
    fn from_base58(address: &str) -> Result<Pubkey, LaunchpadError>;
    fn from_named_field(field: &str, address: &str) -> Result<Pubkey, LaunchpadError>;
}

impl PubkeyExt for Pubkey {
    /// Create a Pubkey from a base58 string.
    fn from_base58(address: &str) -> Result<Pubkey, LaunchpadError> {
        Pubkey::from_str(address)
            .map_err(|e| LaunchpadError::invalid_input(format!("Invalid base58: {}", e)))
    }

    /// Parse a base58 address, naming the offending field on failure.
    fn from_named_field(field: &str, address: &str) -> Result<Pubkey, LaunchpadError> {
        Pubkey::from_str(address)
            .map_err(|_| LaunchpadError::invalid_input(format!("Invalid {}: {}", field, address)))
    }
}
