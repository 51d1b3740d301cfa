//! Create-mint flow: three dependent transactions with per-step reporting.

use super::types::{MintReport, MintStep, StepRecord};
use super::Launchpad;
use crate::address::associated_token_address;
use crate::descriptor::{MintDescriptor, TokenForm};
use crate::error::{LaunchpadError, WalletError};
use crate::instructions;
use crate::keypair::KeypairExt;
use crate::pubkey::Pubkey;
use crate::wallet::{LedgerConnection, WalletAdapter};
use solana_signature::Signature;
use tracing::{debug, error, info};

impl<W: WalletAdapter, C: LedgerConnection> Launchpad<W, C> {
    /// Create a new Token-2022 mint with embedded metadata and mint the
    /// initial supply to the connected wallet.
    ///
    /// Steps run strictly in [`MintStep::ORDER`]; a failing step stops the
    /// flow and returns `MintAborted` with everything recorded so far. There
    /// is no rollback: a failure after `createMint` leaves the mint on chain.
    pub async fn create_token(&self, form: TokenForm) -> Result<MintReport, LaunchpadError> {
        let owner = self.wallet.public_key().ok_or(WalletError::NotConnected)?;
        let descriptor = form.into_descriptor(self.config.decimals)?;
        let mint = descriptor.mint();
        info!(
            %mint,
            name = %descriptor.name,
            symbol = %descriptor.symbol,
            "Creating token"
        );

        let mut report = MintReport {
            mint: mint.to_string(),
            mint_keypair: descriptor.keypair.to_generated(),
            associated_account: None,
            decimals: descriptor.decimals,
            supply: self.config.initial_supply,
            steps: Vec::with_capacity(MintStep::ORDER.len()),
        };

        let result = self.submit_create_mint(&descriptor, &owner).await;
        record_step(&mut report, MintStep::CreateMint, result)?;
        info!(%mint, "Token mint created");

        let associated_account = associated_token_address(&owner, &mint);
        report.associated_account = Some(associated_account.to_string());
        debug!(%associated_account, "Derived associated token account");

        let result = self.submit_create_associated_account(&owner, &mint).await;
        record_step(&mut report, MintStep::CreateAssociatedAccount, result)?;

        let result = self
            .submit_mint_initial_supply(&owner, &mint, &associated_account)
            .await;
        record_step(&mut report, MintStep::MintInitialSupply, result)?;

        info!(%mint, supply = self.config.initial_supply, "Minted");
        Ok(report)
    }

    async fn submit_create_mint(
        &self,
        descriptor: &MintDescriptor,
        owner: &Pubkey,
    ) -> Result<Signature, LaunchpadError> {
        let rent_space = descriptor.rent_space()?;
        let lamports = self
            .connection
            .get_minimum_balance_for_rent_exemption(rent_space)
            .await?;
        debug!(rent_space, lamports, "Quoted rent-exempt balance");

        let ixs = instructions::create_mint_instructions(descriptor, owner, lamports)?;
        let mut transaction = self.prepare(ixs, owner).await?;

        // The mint account signs its own creation; the wallet adds the fee payer
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&descriptor.keypair], blockhash)
            .map_err(|e| LaunchpadError::Signing(e.to_string()))?;

        Ok(self.wallet.send_transaction(transaction).await?)
    }

    async fn submit_create_associated_account(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Signature, LaunchpadError> {
        let ix = instructions::create_associated_account(owner, owner, mint);
        let transaction = self.prepare(vec![ix], owner).await?;
        Ok(self.wallet.send_transaction(transaction).await?)
    }

    async fn submit_mint_initial_supply(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
        associated_account: &Pubkey,
    ) -> Result<Signature, LaunchpadError> {
        let ix = instructions::mint_to(mint, associated_account, owner, self.config.initial_supply)?;
        let transaction = self.prepare(vec![ix], owner).await?;
        Ok(self.wallet.send_transaction(transaction).await?)
    }
}

fn record_step(
    report: &mut MintReport,
    step: MintStep,
    result: Result<Signature, LaunchpadError>,
) -> Result<(), LaunchpadError> {
    match result {
        Ok(signature) => {
            info!(%step, %signature, "Step submitted");
            report.steps.push(StepRecord {
                step,
                signature: signature.to_string(),
            });
            Ok(())
        }
        Err(source) => {
            error!(mint = %report.mint, %step, error = %source, "Token launch aborted");
            Err(LaunchpadError::MintAborted {
                step,
                source: Box::new(source),
                report: Box::new(report.clone()),
            })
        }
    }
}
