//! Token launch orchestration.
//!
//! Two linear, non-resumable flows run against an injected wallet and
//! connection:
//!
//! - [`Launchpad::create_token`]: create mint, create ATA, mint initial supply
//! - [`Launchpad::transfer_tokens`]: mint more units of an existing token
//!
//! Neither flow retries. Re-running `create_token` always generates a new
//! mint; re-running `transfer_tokens` submits another mint instruction.

mod mint;
mod transfer;
mod types;

pub use types::{MintReport, MintStep, StepRecord, TransferOutcome};

use crate::builder::build_transaction;
use crate::config::LaunchConfig;
use crate::error::LaunchpadError;
use crate::pubkey::Pubkey;
use crate::wallet::{LedgerConnection, WalletAdapter};
use solana_sdk::instruction::Instruction;
use solana_transaction::Transaction;

pub struct Launchpad<W, C> {
    wallet: W,
    connection: C,
    config: LaunchConfig,
}

impl<W: WalletAdapter, C: LedgerConnection> Launchpad<W, C> {
    pub fn new(wallet: W, connection: C, config: LaunchConfig) -> Self {
        Launchpad {
            wallet,
            connection,
            config,
        }
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Build a transaction against a freshly fetched blockhash.
    async fn prepare(
        &self,
        instructions: Vec<Instruction>,
        fee_payer: &Pubkey,
    ) -> Result<Transaction, LaunchpadError> {
        let blockhash = self.connection.get_latest_blockhash().await?;
        Ok(build_transaction(
            instructions,
            fee_payer,
            blockhash,
            self.config.compute_unit_price,
        ))
    }
}
