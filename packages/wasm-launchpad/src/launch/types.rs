//! Result types for the launch flows.
//!
//! These are serialized to JavaScript via serde; amounts are emitted as
//! decimal strings.

use crate::config::serialize_amount;
use crate::keypair::GeneratedKeypair;
use serde::Serialize;
use std::fmt;

/// One network transaction of the mint flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MintStep {
    /// Create the mint account with metadata pointer and embedded metadata
    CreateMint,
    /// Create the creator's associated token account
    CreateAssociatedAccount,
    /// Mint the initial supply into that account
    MintInitialSupply,
}

impl MintStep {
    /// Submission order; each step depends on the previous one landing.
    pub const ORDER: [MintStep; 3] = [
        MintStep::CreateMint,
        MintStep::CreateAssociatedAccount,
        MintStep::MintInitialSupply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MintStep::CreateMint => "createMint",
            MintStep::CreateAssociatedAccount => "createAssociatedAccount",
            MintStep::MintInitialSupply => "mintInitialSupply",
        }
    }
}

impl fmt::Display for MintStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted step and the signature the wallet returned for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub step: MintStep,
    pub signature: String,
}

/// Progress of a mint launch. Complete on success, partial inside
/// `LaunchpadError::MintAborted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintReport {
    /// Mint address (base58)
    pub mint: String,
    pub mint_keypair: GeneratedKeypair,
    /// Creator's associated token account, once derived
    pub associated_account: Option<String>,
    pub decimals: u8,
    #[serde(serialize_with = "serialize_amount")]
    pub supply: u64,
    pub steps: Vec<StepRecord>,
}

impl MintReport {
    pub fn is_complete(&self) -> bool {
        self.steps.iter().map(|r| r.step).eq(MintStep::ORDER)
    }

    pub fn signature_for(&self, step: MintStep) -> Option<&str> {
        self.steps
            .iter()
            .find(|r| r.step == step)
            .map(|r| r.signature.as_str())
    }
}

/// Result of the transfer flow. The flow never errors; failures land here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TransferOutcome {
    #[serde(rename_all = "camelCase")]
    Sent {
        signature: String,
        mint: String,
        associated_account: String,
        #[serde(serialize_with = "serialize_amount")]
        amount: u64,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        /// Known when the failure happened after target resolution
        associated_account: Option<String>,
        error: String,
    },
}

impl TransferOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, TransferOutcome::Sent { .. })
    }

    pub fn signature(&self) -> Option<&str> {
        match self {
            TransferOutcome::Sent { signature, .. } => Some(signature),
            TransferOutcome::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_names() {
        let names: Vec<String> = MintStep::ORDER.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            vec!["createMint", "createAssociatedAccount", "mintInitialSupply"]
        );
        assert_eq!(
            serde_json::to_value(MintStep::CreateMint).unwrap(),
            serde_json::json!("createMint")
        );
    }

    #[test]
    fn test_transfer_outcome_serialization() {
        let sent = TransferOutcome::Sent {
            signature: "sig".to_string(),
            mint: "mint".to_string(),
            associated_account: "ata".to_string(),
            amount: 1_000_000_000,
        };
        assert_eq!(
            serde_json::to_value(&sent).unwrap(),
            serde_json::json!({
                "status": "sent",
                "signature": "sig",
                "mint": "mint",
                "associatedAccount": "ata",
                "amount": "1000000000"
            })
        );

        let failed = TransferOutcome::Failed {
            associated_account: None,
            error: "boom".to_string(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "boom");
        assert!(!failed.is_sent());
        assert!(failed.signature().is_none());
    }
}
