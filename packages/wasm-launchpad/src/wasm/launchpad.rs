//! WASM bindings for the launch flows.

use crate::config::LaunchConfig;
use crate::descriptor::TokenForm;
use crate::error::LaunchpadError;
use crate::launch::{Launchpad, TransferOutcome};
use crate::wasm::adapter::{BrowserConnection, BrowserWallet, JsConnection, JsWallet};
use crate::wasm::to_js_value;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Namespace for the token launch operations.
#[wasm_bindgen]
pub struct LaunchpadNamespace;

#[wasm_bindgen]
impl LaunchpadNamespace {
    /// Create a Token-2022 mint with embedded metadata and mint the initial
    /// supply to the connected wallet.
    ///
    /// # Arguments
    ///
    /// * `wallet` - Wallet shim: `{ publicKey, sendTransaction, signTransaction }`
    /// * `connection` - RPC shim: `{ getMinimumBalanceForRentExemption, getLatestBlockhash, sendRawTransaction }`
    /// * `form` - `{ name, symbol, metadataUri, initialSupply?, additionalMetadata? }`
    /// * `config` - Optional launch config; omitted fields use defaults
    ///
    /// # Returns
    ///
    /// The mint report: `{ mint, mintKeypair, associatedAccount, decimals, supply, steps }`.
    /// On a failed step the thrown `Error` carries `step` and the partial `report`.
    ///
    /// # Example
    ///
    /// ```javascript
    /// try {
    ///   const report = await LaunchpadNamespace.create_token(wallet, connection, {
    ///     name: 'Launch', symbol: 'LNCH', metadataUri: 'https://example.com/launch.json'
    ///   });
    ///   console.log(report.mint, report.steps);
    /// } catch (e) {
    ///   // e.step, e.report.mintKeypair.secretKey
    /// }
    /// ```
    #[wasm_bindgen]
    pub async fn create_token(
        wallet: JsWallet,
        connection: JsConnection,
        form: JsValue,
        config: JsValue,
    ) -> Result<JsValue, JsValue> {
        let form: TokenForm = serde_wasm_bindgen::from_value(form).map_err(|e| {
            LaunchpadError::invalid_input(format!("Failed to parse token form: {}", e))
        })?;
        let config = parse_config(config)?;

        let launchpad = Launchpad::new(
            BrowserWallet::new(wallet),
            BrowserConnection::new(connection),
            config,
        );
        let report = launchpad.create_token(form).await?;
        to_js(&report)
    }

    /// Mint `transferAmount` units of `transferMint` to the recipient's
    /// associated token account.
    ///
    /// Never throws. Resolves to `{ status: 'sent', signature, mint,
    /// associatedAccount, amount }` or `{ status: 'failed', error,
    /// associatedAccount? }`.
    #[wasm_bindgen]
    pub async fn transfer_tokens(
        wallet: JsWallet,
        connection: JsConnection,
        config: JsValue,
    ) -> JsValue {
        let outcome = match parse_config(config) {
            Ok(config) => {
                let launchpad = Launchpad::new(
                    BrowserWallet::new(wallet),
                    BrowserConnection::new(connection),
                    config,
                );
                launchpad.transfer_tokens().await
            }
            Err(e) => {
                tracing::error!(error = %e, "Token transfer failed");
                TransferOutcome::Failed {
                    associated_account: None,
                    error: e.to_string(),
                }
            }
        };
        to_js(&outcome).unwrap_or_else(|e| e)
    }
}

fn parse_config(config: JsValue) -> Result<LaunchConfig, LaunchpadError> {
    if config.is_undefined() || config.is_null() {
        return Ok(LaunchConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| LaunchpadError::invalid_input(format!("Failed to parse config: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_js_value(value).map_err(|e| LaunchpadError::Serialization(e.to_string()).into())
}
