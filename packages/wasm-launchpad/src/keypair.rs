//! Ed25519 keypairs for freshly generated mint accounts.

use crate::error::LaunchpadError;
use serde::Serialize;
use solana_signer::Signer;

/// Re-export the underlying Solana Keypair type.
pub use solana_keypair::Keypair;

/// A keypair generated during a launch, handed back to the caller.
///
/// The mint address is unrecoverable without this secret once the
/// create-mint transaction lands, so it is returned on success and failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKeypair {
    /// Public address (base58)
    pub address: String,
    /// 64-byte Solana secret key (base58), importable by wallets
    pub secret_key: String,
}

pub trait KeypairExt {
    fn from_solana_secret_key(secret_key: &[u8]) -> Result<Keypair, LaunchpadError>;
    fn from_base58_secret(secret_key: &str) -> Result<Keypair, LaunchpadError>;
    fn address(&self) -> String;
    fn to_generated(&self) -> GeneratedKeypair;
}

impl KeypairExt for Keypair {
    /// Create a keypair from a 64-byte Solana secret key (secret + public concatenated).
    fn from_solana_secret_key(secret_key: &[u8]) -> Result<Keypair, LaunchpadError> {
        if secret_key.len() != 64 {
            return Err(LaunchpadError::invalid_input(format!(
                "Solana secret key must be 64 bytes, got {}",
                secret_key.len()
            )));
        }

        Keypair::try_from(secret_key)
            .map_err(|e| LaunchpadError::invalid_input(format!("Invalid keypair: {}", e)))
    }

    fn from_base58_secret(secret_key: &str) -> Result<Keypair, LaunchpadError> {
        let bytes = solana_sdk::bs58::decode(secret_key)
            .into_vec()
            .map_err(|e| LaunchpadError::invalid_input(format!("Invalid secret key: {}", e)))?;
        Keypair::from_solana_secret_key(&bytes)
    }

    /// Get the Solana address (base58-encoded public key).
    fn address(&self) -> String {
        self.pubkey().to_string()
    }

    fn to_generated(&self) -> GeneratedKeypair {
        GeneratedKeypair {
            address: self.address(),
            secret_key: self.to_base58_string(),
        }
    }
}
