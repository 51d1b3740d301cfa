//! Program IDs and derivations exported via WASM.
//!
//! Lets the host page display and cross-check addresses without importing
//! `@solana/web3.js` or `@solana/spl-token`.

use crate::address::{
    associated_token_address, ATA_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_2022_PROGRAM_ID,
};
use crate::config::DEFAULT_TRANSFER_MINT;
use crate::descriptor::{metadata_tlv_len, mint_account_len};
use crate::pubkey::{Pubkey, PubkeyExt};
use spl_token_metadata_interface::state::TokenMetadata;
use wasm_bindgen::prelude::*;

/// System Program ID
#[wasm_bindgen]
pub fn system_program_id() -> String {
    SYSTEM_PROGRAM_ID.to_string()
}

/// Token 2022 Program ID
#[wasm_bindgen]
pub fn token_2022_program_id() -> String {
    TOKEN_2022_PROGRAM_ID.to_string()
}

/// Associated Token Account Program ID
#[wasm_bindgen]
pub fn ata_program_id() -> String {
    ATA_PROGRAM_ID.to_string()
}

/// Mint topped up by the transfer flow unless configured otherwise
#[wasm_bindgen]
pub fn default_transfer_mint() -> String {
    DEFAULT_TRANSFER_MINT.to_string()
}

/// Derive the Token-2022 associated token account for a wallet and mint.
///
/// @param wallet_address - Owner wallet address (base58)
/// @param mint_address - Token mint address (base58)
/// @returns The derived ATA address (base58)
#[wasm_bindgen]
pub fn get_associated_token_address(
    wallet_address: &str,
    mint_address: &str,
) -> Result<String, JsValue> {
    let wallet = Pubkey::from_named_field("wallet address", wallet_address)?;
    let mint = Pubkey::from_named_field("mint address", mint_address)?;
    Ok(associated_token_address(&wallet, &mint).to_string())
}

/// Rent-covered size in bytes of a mint created with this metadata
/// (mint, metadata pointer and embedded metadata).
#[wasm_bindgen]
pub fn mint_account_space(name: &str, symbol: &str, metadata_uri: &str) -> Result<u32, JsValue> {
    let metadata = TokenMetadata {
        name: name.to_string(),
        symbol: symbol.to_string(),
        uri: metadata_uri.to_string(),
        ..TokenMetadata::default()
    };
    let space = mint_account_len()? + metadata_tlv_len(&metadata)?;
    u32::try_from(space)
        .map_err(|_| JsValue::from_str(&format!("Mint account space overflows u32: {}", space)))
}
