//! Transfer flow: mint more units of an existing token into a wallet's
//! associated token account.
//!
//! The connected wallet must be mint authority of the target mint; the
//! runtime rejects the transaction otherwise and that rejection surfaces as
//! a `Failed` outcome.

use super::types::TransferOutcome;
use super::Launchpad;
use crate::address::associated_token_address;
use crate::error::{LaunchpadError, WalletError};
use crate::instructions;
use crate::pubkey::Pubkey;
use crate::transaction::TransactionExt;
use crate::wallet::{LedgerConnection, WalletAdapter};
use solana_signature::Signature;
use tracing::{debug, error, info};

/// Accounts one transfer run touches.
#[derive(Debug, Clone, Copy)]
struct TransferTarget {
    /// Connected wallet: fee payer and mint authority
    authority: Pubkey,
    recipient: Pubkey,
    mint: Pubkey,
    associated_account: Pubkey,
}

impl<W: WalletAdapter, C: LedgerConnection> Launchpad<W, C> {
    /// Mint `transferAmount` units of the configured mint to the recipient.
    ///
    /// Never returns an error: every failure is logged and reported as
    /// [`TransferOutcome::Failed`].
    pub async fn transfer_tokens(&self) -> TransferOutcome {
        let target = match self.resolve_target() {
            Ok(target) => target,
            Err(e) => {
                error!(error = %e, "Token transfer failed");
                return TransferOutcome::Failed {
                    associated_account: None,
                    error: e.to_string(),
                };
            }
        };
        debug!(
            mint = %target.mint,
            recipient = %target.recipient,
            associated_account = %target.associated_account,
            "Resolved transfer target"
        );

        match self.submit_transfer(&target).await {
            Ok(signature) => {
                info!(%signature, amount = self.config.transfer_amount, "Tokens transferred");
                TransferOutcome::Sent {
                    signature: signature.to_string(),
                    mint: target.mint.to_string(),
                    associated_account: target.associated_account.to_string(),
                    amount: self.config.transfer_amount,
                }
            }
            Err(e) => {
                error!(mint = %target.mint, error = %e, "Token transfer failed");
                TransferOutcome::Failed {
                    associated_account: Some(target.associated_account.to_string()),
                    error: e.to_string(),
                }
            }
        }
    }

    fn resolve_target(&self) -> Result<TransferTarget, LaunchpadError> {
        let authority = self.wallet.public_key().ok_or(WalletError::NotConnected)?;
        let mint = self.config.transfer_mint()?;
        let recipient = self.config.recipient()?.unwrap_or(authority);
        Ok(TransferTarget {
            authority,
            recipient,
            mint,
            associated_account: associated_token_address(&recipient, &mint),
        })
    }

    async fn submit_transfer(&self, target: &TransferTarget) -> Result<Signature, LaunchpadError> {
        let mut ixs = Vec::with_capacity(2);
        if self.config.ensure_recipient_account {
            ixs.push(instructions::create_associated_account_idempotent(
                &target.authority,
                &target.recipient,
                &target.mint,
            ));
        }
        ixs.push(instructions::mint_to(
            &target.mint,
            &target.associated_account,
            &target.authority,
            self.config.transfer_amount,
        )?);

        let transaction = self.prepare(ixs, &target.authority).await?;
        let signed = self.wallet.sign_transaction(transaction).await?;

        let missing = signed.missing_signers();
        if !missing.is_empty() {
            let missing: Vec<String> = missing.iter().map(|p| p.to_string()).collect();
            return Err(LaunchpadError::Signing(format!(
                "Missing signatures for: {}",
                missing.join(", ")
            )));
        }

        self.connection.send_raw_transaction(&signed).await
    }
}
