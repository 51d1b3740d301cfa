//! Solana transaction wire encoding and signer inspection.
//!
//! Transactions cross the JS boundary as wire-format bytes: the wallet
//! adapter deserializes them on its side, signs, and hands bytes back.

use crate::error::LaunchpadError;
use crate::pubkey::Pubkey;
use solana_signature::Signature;

/// Re-export the underlying Solana Transaction type.
pub use solana_transaction::Transaction;

pub trait TransactionExt {
    /// Deserialize a transaction from raw bytes (wire format).
    fn from_bytes(bytes: &[u8]) -> Result<Transaction, LaunchpadError>;

    /// Serialize transaction to bytes (wire format).
    fn to_bytes(&self) -> Result<Vec<u8>, LaunchpadError>;

    fn fee_payer(&self) -> Option<Pubkey>;

    fn num_instructions(&self) -> usize;

    /// Get the index of a pubkey in the account keys, if it's a signer.
    fn signer_index(&self, pubkey: &Pubkey) -> Option<usize>;

    /// Whether `pubkey` is a required signer and its signature slot is filled.
    fn is_signed_by(&self, pubkey: &Pubkey) -> bool;

    /// Required signers whose signature slot is still empty.
    fn missing_signers(&self) -> Vec<Pubkey>;
}

impl TransactionExt for Transaction {
    fn from_bytes(bytes: &[u8]) -> Result<Transaction, LaunchpadError> {
        bincode::deserialize(bytes).map_err(|e| {
            LaunchpadError::Serialization(format!("Failed to deserialize transaction: {}", e))
        })
    }

    fn to_bytes(&self) -> Result<Vec<u8>, LaunchpadError> {
        bincode::serialize(self).map_err(|e| {
            LaunchpadError::Serialization(format!("Failed to serialize transaction: {}", e))
        })
    }

    fn fee_payer(&self) -> Option<Pubkey> {
        self.message.account_keys.first().copied()
    }

    fn num_instructions(&self) -> usize {
        self.message.instructions.len()
    }

    fn signer_index(&self, pubkey: &Pubkey) -> Option<usize> {
        let num_signers = self.message.header.num_required_signatures as usize;
        let signed_keys = &self.message.account_keys[0..num_signers];
        signed_keys.iter().position(|x| x == pubkey)
    }

    fn is_signed_by(&self, pubkey: &Pubkey) -> bool {
        self.signer_index(pubkey)
            .and_then(|idx| self.signatures.get(idx))
            .is_some_and(|sig| *sig != Signature::default())
    }

    fn missing_signers(&self) -> Vec<Pubkey> {
        let num_signers = self.message.header.num_required_signatures as usize;
        self.message.account_keys[0..num_signers]
            .iter()
            .enumerate()
            .filter(|(idx, _)| {
                self.signatures
                    .get(*idx)
                    .map_or(true, |sig| *sig == Signature::default())
            })
            .map(|(_, key)| *key)
            .collect()
    }
}
