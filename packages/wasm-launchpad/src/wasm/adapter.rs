//! Bridges host-page wallet and connection objects onto the Rust traits.
//!
//! Transactions cross the boundary as wire bytes; keys, signatures and
//! blockhashes as base58 strings.

use crate::error::{LaunchpadError, WalletError};
use crate::pubkey::{Pubkey, PubkeyExt};
use crate::transaction::TransactionExt;
use crate::wallet::{LedgerConnection, WalletAdapter};
use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_signature::Signature;
use solana_transaction::Transaction;
use std::str::FromStr;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(typescript_custom_section)]
const TS_ADAPTERS: &'static str = r#"
export interface LaunchpadWallet {
  readonly publicKey: string | null;
  sendTransaction(tx: Uint8Array): Promise<string>;
  signTransaction(tx: Uint8Array): Promise<Uint8Array>;
}

export interface LaunchpadConnection {
  getMinimumBalanceForRentExemption(dataLength: number): Promise<number>;
  getLatestBlockhash(): Promise<{ blockhash: string }>;
  sendRawTransaction(tx: Uint8Array): Promise<string>;
}
"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "LaunchpadWallet")]
    pub type JsWallet;

    #[wasm_bindgen(method, getter, js_name = publicKey)]
    fn public_key(this: &JsWallet) -> Option<String>;

    #[wasm_bindgen(method, catch, js_name = sendTransaction)]
    fn send_transaction(this: &JsWallet, tx: &[u8]) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signTransaction)]
    fn sign_transaction(this: &JsWallet, tx: &[u8]) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(typescript_type = "LaunchpadConnection")]
    pub type JsConnection;

    #[wasm_bindgen(method, catch, js_name = getMinimumBalanceForRentExemption)]
    fn get_minimum_balance_for_rent_exemption(
        this: &JsConnection,
        data_length: f64,
    ) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getLatestBlockhash)]
    fn get_latest_blockhash(this: &JsConnection) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = sendRawTransaction)]
    fn send_raw_transaction(this: &JsConnection, tx: &[u8]) -> Result<js_sys::Promise, JsValue>;
}

/// Await a promise-returning JS call, flattening sync throws and rejections.
async fn resolve(call: Result<js_sys::Promise, JsValue>) -> Result<JsValue, JsValue> {
    JsFuture::from(call?).await
}

/// Best-effort message from a thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn wallet_error(value: JsValue) -> WalletError {
    let message = js_error_message(&value);
    if message.to_lowercase().contains("reject") {
        WalletError::Rejected(message)
    } else {
        WalletError::Other(message)
    }
}

fn connection_error(value: JsValue) -> LaunchpadError {
    LaunchpadError::Connection(js_error_message(&value))
}

fn parse_signature(value: JsValue) -> Result<Signature, String> {
    let text = value
        .as_string()
        .ok_or_else(|| "Expected a base58 signature string".to_string())?;
    Signature::from_str(&text).map_err(|e| format!("Invalid signature {}: {}", text, e))
}

/// Lamports arrive as a JS number; only whole, non-negative values fit.
fn parse_lamports(value: &JsValue) -> Result<u64, LaunchpadError> {
    let lamports = value
        .as_f64()
        .ok_or_else(|| LaunchpadError::Connection("Expected a lamport amount".to_string()))?;
    lamports_from_f64(lamports)
}

fn lamports_from_f64(lamports: f64) -> Result<u64, LaunchpadError> {
    if lamports.fract() != 0.0 || lamports < 0.0 || lamports >= u64::MAX as f64 {
        return Err(LaunchpadError::Connection(format!(
            "Invalid lamport amount: {}",
            lamports
        )));
    }
    Ok(lamports as u64)
}

/// Browser wallet adapter (Phantom, Solflare, ...) behind the JS shim.
pub struct BrowserWallet {
    inner: JsWallet,
}

impl BrowserWallet {
    pub fn new(inner: JsWallet) -> Self {
        BrowserWallet { inner }
    }
}

#[async_trait(?Send)]
impl WalletAdapter for BrowserWallet {
    fn public_key(&self) -> Option<Pubkey> {
        let key = self.inner.public_key()?;
        match Pubkey::from_base58(&key) {
            Ok(pubkey) => Some(pubkey),
            Err(e) => {
                warn!(public_key = %key, error = %e, "Ignoring malformed wallet public key");
                None
            }
        }
    }

    async fn send_transaction(&self, transaction: Transaction) -> Result<Signature, WalletError> {
        let bytes = transaction
            .to_bytes()
            .map_err(|e| WalletError::Other(e.to_string()))?;
        let value = resolve(self.inner.send_transaction(&bytes))
            .await
            .map_err(wallet_error)?;
        parse_signature(value).map_err(WalletError::Other)
    }

    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, WalletError> {
        let bytes = transaction
            .to_bytes()
            .map_err(|e| WalletError::Other(e.to_string()))?;
        let value = resolve(self.inner.sign_transaction(&bytes))
            .await
            .map_err(wallet_error)?;
        let signed = js_sys::Uint8Array::new(&value).to_vec();
        Transaction::from_bytes(&signed).map_err(|e| WalletError::Other(e.to_string()))
    }
}

/// `@solana/web3.js` `Connection` (or anything shaped like it).
pub struct BrowserConnection {
    inner: JsConnection,
}

impl BrowserConnection {
    pub fn new(inner: JsConnection) -> Self {
        BrowserConnection { inner }
    }
}

#[async_trait(?Send)]
impl LedgerConnection for BrowserConnection {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, LaunchpadError> {
        let value = resolve(
            self.inner
                .get_minimum_balance_for_rent_exemption(data_len as f64),
        )
        .await
        .map_err(connection_error)?;
        parse_lamports(&value)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, LaunchpadError> {
        let value = resolve(self.inner.get_latest_blockhash())
            .await
            .map_err(connection_error)?;
        let blockhash = js_sys::Reflect::get(&value, &"blockhash".into())
            .ok()
            .and_then(|b| b.as_string())
            .ok_or_else(|| {
                LaunchpadError::Connection("getLatestBlockhash returned no blockhash".to_string())
            })?;
        Hash::from_str(&blockhash).map_err(|e| {
            LaunchpadError::Connection(format!("Invalid blockhash {}: {}", blockhash, e))
        })
    }

    async fn send_raw_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, LaunchpadError> {
        let bytes = transaction.to_bytes()?;
        let value = resolve(self.inner.send_raw_transaction(&bytes))
            .await
            .map_err(connection_error)?;
        parse_signature(value).map_err(LaunchpadError::Connection)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_rejection_is_classified() {
        let err = wallet_error(js_sys::Error::new("User rejected the request.").into());
        assert_eq!(
            err,
            WalletError::Rejected("User rejected the request.".to_string())
        );

        let err = wallet_error(JsValue::from_str("Transaction REJECTED by wallet"));
        assert!(matches!(err, WalletError::Rejected(_)));

        let err = wallet_error(js_sys::Error::new("Blockhash not found").into());
        assert_eq!(err, WalletError::Other("Blockhash not found".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_error_message_from_non_error_values() {
        assert_eq!(js_error_message(&JsValue::from_str("plain")), "plain");
        assert!(!js_error_message(&JsValue::from_f64(4.0)).is_empty());
    }

    #[wasm_bindgen_test]
    fn test_signature_parsing() {
        let signature = Signature::from([7u8; 64]);
        let parsed = parse_signature(JsValue::from_str(&signature.to_string())).unwrap();
        assert_eq!(parsed, signature);

        assert!(parse_signature(JsValue::from_f64(1.0)).is_err());
        assert!(parse_signature(JsValue::NULL).is_err());
        assert!(parse_signature(JsValue::from_str("not-a-signature")).is_err());
    }

    fn wallet_with_key(key: &JsValue) -> BrowserWallet {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"publicKey".into(), key).unwrap();
        BrowserWallet::new(obj.unchecked_into::<JsWallet>())
    }

    #[wasm_bindgen_test]
    fn test_wallet_public_key() {
        let key = "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH";
        let wallet = wallet_with_key(&JsValue::from_str(key));
        assert_eq!(wallet.public_key().map(|k| k.to_string()).as_deref(), Some(key));

        assert!(wallet_with_key(&JsValue::NULL).public_key().is_none());
        // Malformed keys are logged and treated as disconnected
        assert!(wallet_with_key(&JsValue::from_str("not-a-key"))
            .public_key()
            .is_none());
    }

    #[wasm_bindgen_test]
    fn test_lamports_from_js() {
        assert_eq!(parse_lamports(&JsValue::from_f64(2_039_280.0)).unwrap(), 2_039_280);
        assert!(parse_lamports(&JsValue::from_f64(0.25)).is_err());
        assert!(parse_lamports(&JsValue::from_str("2039280")).is_err());
    }
}
