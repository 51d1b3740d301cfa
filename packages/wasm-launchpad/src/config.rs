//! Launch configuration supplied by the host page.
//!
//! Every field is optional; missing fields fall back to the launchpad
//! defaults (9 decimals, 1,000,000,000 base units per mint).

use crate::error::LaunchpadError;
use crate::pubkey::{Pubkey, PubkeyExt};
use serde::Deserialize;

pub const DEFAULT_DECIMALS: u8 = 9;
pub const DEFAULT_MINT_AMOUNT: u64 = 1_000_000_000;
/// Existing mint the transfer flow tops up when no `transferMint` is given.
pub const DEFAULT_TRANSFER_MINT: &str = "9Pe8r9Mj5YYPuxaTaLpUTrfeukJJfMhW3t13T4aRCzqo";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchConfig {
    /// Decimals for newly created mints
    pub decimals: u8,
    /// Base units minted into the creator's account after mint creation
    #[serde(deserialize_with = "deserialize_amount")]
    pub initial_supply: u64,
    /// Base units minted by the transfer flow
    #[serde(deserialize_with = "deserialize_amount")]
    pub transfer_amount: u64,
    /// Mint topped up by the transfer flow (base58)
    pub transfer_mint: String,
    /// Recipient of the transfer flow; defaults to the connected wallet
    pub recipient: Option<String>,
    /// Prepend an idempotent ATA creation to the transfer transaction
    pub ensure_recipient_account: bool,
    /// Priority fee in micro-lamports per compute unit
    pub compute_unit_price: Option<u64>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            decimals: DEFAULT_DECIMALS,
            initial_supply: DEFAULT_MINT_AMOUNT,
            transfer_amount: DEFAULT_MINT_AMOUNT,
            transfer_mint: DEFAULT_TRANSFER_MINT.to_string(),
            recipient: None,
            ensure_recipient_account: false,
            compute_unit_price: None,
        }
    }
}

impl LaunchConfig {
    pub fn transfer_mint(&self) -> Result<Pubkey, LaunchpadError> {
        Pubkey::from_named_field("transferMint", &self.transfer_mint)
    }

    pub fn recipient(&self) -> Result<Option<Pubkey>, LaunchpadError> {
        self.recipient
            .as_deref()
            .map(|r| Pubkey::from_named_field("recipient", r))
            .transpose()
    }
}

/// Deserialize amount from either string or number (for JS BigInt compatibility)
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or number representing an amount")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(v).map_err(|_| de::Error::custom("negative amount"))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            // JS numbers arrive as f64; only whole, non-negative values are amounts
            if v.fract() != 0.0 || v < 0.0 || v >= u64::MAX as f64 {
                return Err(de::Error::custom(format!("invalid amount: {}", v)));
            }
            Ok(v as u64)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.trim().parse().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

/// Serialize amounts as decimal strings so JavaScript never loses precision.
pub(crate) fn serialize_amount<S>(amount: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&amount.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: LaunchConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config, LaunchConfig::default());
        assert_eq!(config.decimals, 9);
        assert_eq!(config.initial_supply, 1_000_000_000);
        assert_eq!(config.transfer_mint().unwrap().to_string(), DEFAULT_TRANSFER_MINT);
        assert!(config.recipient().unwrap().is_none());
    }

    #[test]
    fn test_amounts_accept_strings_and_numbers() {
        let config: LaunchConfig = serde_json::from_value(serde_json::json!({
            "initialSupply": "5000",
            "transferAmount": 42,
            "computeUnitPrice": 1000
        }))
        .unwrap();
        assert_eq!(config.initial_supply, 5000);
        assert_eq!(config.transfer_amount, 42);
        assert_eq!(config.compute_unit_price, Some(1000));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result: Result<LaunchConfig, _> =
            serde_json::from_value(serde_json::json!({ "initialSupply": -1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_float_amounts_must_fit_u64() {
        // u64::MAX as f64 rounds up to 2^64, which is out of range
        let result: Result<LaunchConfig, _> =
            serde_json::from_value(serde_json::json!({ "initialSupply": 18446744073709551616.0 }));
        assert!(result.is_err());

        let result: Result<LaunchConfig, _> =
            serde_json::from_value(serde_json::json!({ "initialSupply": 1.5 }));
        assert!(result.is_err());

        let config: LaunchConfig =
            serde_json::from_value(serde_json::json!({ "initialSupply": 9007199254740992.0 }))
                .unwrap();
        assert_eq!(config.initial_supply, 9_007_199_254_740_992);
    }

    #[test]
    fn test_invalid_recipient() {
        let config = LaunchConfig {
            recipient: Some("not-an-address".to_string()),
            ..LaunchConfig::default()
        };
        let err = config.recipient().unwrap_err();
        assert!(err.to_string().contains("recipient"));
    }
}
