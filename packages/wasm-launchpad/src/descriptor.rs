//! Form input and the per-launch mint descriptor.
//!
//! The host page collects the form fields and passes them in as a
//! [`TokenForm`]; nothing here reads from the DOM.

use crate::error::LaunchpadError;
use crate::keypair::Keypair;
use crate::pubkey::Pubkey;
use serde::Deserialize;
use solana_signer::Signer;
use spl_token_2022_interface::extension::ExtensionType;
use spl_token_2022_interface::state::Mint;
use spl_token_metadata_interface::state::TokenMetadata;

/// Token-2022 extension TLV header: u16 type + u16 length.
const TYPE_SIZE: usize = 2;
const LENGTH_SIZE: usize = 2;

/// Raw values from the launch form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenForm {
    pub name: String,
    pub symbol: String,
    /// Image or metadata JSON URL
    #[serde(alias = "imageUrl")]
    pub metadata_uri: String,
    /// Collected by the form but not read; see `LaunchConfig::initial_supply`
    #[serde(default)]
    pub initial_supply: Option<String>,
    #[serde(default)]
    pub additional_metadata: Vec<(String, String)>,
}

impl TokenForm {
    pub fn new(name: &str, symbol: &str, metadata_uri: &str) -> Self {
        TokenForm {
            name: name.to_string(),
            symbol: symbol.to_string(),
            metadata_uri: metadata_uri.to_string(),
            ..TokenForm::default()
        }
    }

    /// Validate the form and pair it with a freshly generated mint keypair.
    pub fn into_descriptor(self, decimals: u8) -> Result<MintDescriptor, LaunchpadError> {
        let name = required("name", self.name)?;
        let symbol = required("symbol", self.symbol)?;
        let metadata_uri = required("metadataUri", self.metadata_uri)?;

        for (key, _) in &self.additional_metadata {
            if key.trim().is_empty() {
                return Err(LaunchpadError::invalid_input(
                    "additionalMetadata keys must not be empty",
                ));
            }
        }

        Ok(MintDescriptor {
            keypair: Keypair::new(),
            name,
            symbol,
            metadata_uri,
            decimals,
            additional_metadata: self.additional_metadata,
        })
    }
}

/// Rejects blank values; the value is kept exactly as typed.
fn required(field: &str, value: String) -> Result<String, LaunchpadError> {
    if value.trim().is_empty() {
        return Err(LaunchpadError::invalid_input(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(value)
}

/// Bytes allocated at account creation: the mint plus a metadata pointer.
pub fn mint_account_len() -> Result<usize, LaunchpadError> {
    ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::MetadataPointer])
        .map_err(|e| LaunchpadError::Instruction(format!("Failed to size mint: {}", e)))
}

/// TLV bytes `metadata` adds to the mint once initialized.
pub fn metadata_tlv_len(metadata: &TokenMetadata) -> Result<usize, LaunchpadError> {
    let packed = borsh::object_length(metadata)
        .map_err(|e| LaunchpadError::Serialization(format!("Failed to pack metadata: {}", e)))?;
    Ok(TYPE_SIZE + LENGTH_SIZE + packed)
}

/// Everything needed to create one mint. Never reused across launches.
#[derive(Debug)]
pub struct MintDescriptor {
    pub keypair: Keypair,
    pub name: String,
    pub symbol: String,
    pub metadata_uri: String,
    pub decimals: u8,
    pub additional_metadata: Vec<(String, String)>,
}

impl MintDescriptor {
    /// The mint address, i.e. the permanent asset identifier.
    pub fn mint(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Metadata as it will be embedded in the mint account.
    pub fn token_metadata(&self) -> TokenMetadata {
        TokenMetadata {
            mint: self.mint(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.metadata_uri.clone(),
            additional_metadata: self.additional_metadata.clone(),
            ..TokenMetadata::default()
        }
    }

    /// Bytes allocated at account creation: the mint plus a metadata pointer.
    pub fn mint_space(&self) -> Result<usize, LaunchpadError> {
        mint_account_len()
    }

    /// TLV bytes the embedded metadata adds once initialized.
    pub fn metadata_space(&self) -> Result<usize, LaunchpadError> {
        metadata_tlv_len(&self.token_metadata())
    }

    /// Bytes the rent-exempt balance must cover.
    ///
    /// Metadata initialization reallocates the account, so the balance is
    /// funded up front for the final size even though only `mint_space` is
    /// allocated.
    pub fn rent_space(&self) -> Result<usize, LaunchpadError> {
        Ok(self.mint_space()? + self.metadata_space()?)
    }
}
