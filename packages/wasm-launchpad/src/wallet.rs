//! Seams for the externally provided wallet and RPC connection.
//!
//! Both are single-owner JS handles in the browser, so the traits are not
//! `Send`. The browser implementations live in `wasm::adapter`.

use crate::error::{LaunchpadError, WalletError};
use crate::pubkey::Pubkey;
use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_signature::Signature;
use solana_transaction::Transaction;

/// The connected wallet: holds the user's key and approves transactions.
#[async_trait(?Send)]
pub trait WalletAdapter {
    /// The connected account, or `None` when the wallet is disconnected.
    fn public_key(&self) -> Option<Pubkey>;

    /// Have the wallet add its signature(s) and broadcast the transaction.
    async fn send_transaction(&self, transaction: Transaction) -> Result<Signature, WalletError>;

    /// Have the wallet sign without broadcasting.
    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, WalletError>;
}

/// The RPC connection to the ledger network.
#[async_trait(?Send)]
pub trait LedgerConnection {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, LaunchpadError>;

    async fn get_latest_blockhash(&self) -> Result<Hash, LaunchpadError>;

    /// Broadcast a fully signed transaction.
    async fn send_raw_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, LaunchpadError>;
}
