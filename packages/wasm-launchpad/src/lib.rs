//! wasm-launchpad: browser token launchpad on Solana Token-2022.
//!
//! Builds token-creation and token-transfer transactions with the official
//! Solana and SPL interface crates and hands them to an injected wallet and
//! RPC connection for signing and broadcast.
//!
//! # Architecture
//!
//! 1. **Core** (`address`, `descriptor`, `instructions`, `builder`) - pure
//!    instruction and transaction construction
//! 2. **Orchestration** (`launch`) - the mint and transfer flows, generic over
//!    the [`WalletAdapter`] / [`LedgerConnection`] traits
//! 3. **WASM bindings** (`wasm/`) - JS adapters for those traits and the
//!    exported namespace
//!
//! # Usage from Rust
//!
//! ```rust,ignore
//! use wasm_launchpad::{LaunchConfig, Launchpad, TokenForm};
//!
//! let launchpad = Launchpad::new(wallet, connection, LaunchConfig::default());
//! let report = launchpad
//!     .create_token(TokenForm::new("Launch", "LNCH", "https://example.com/launch.json"))
//!     .await?;
//! println!("mint {}", report.mint);
//! ```

pub mod address;
pub mod builder;
pub mod config;
pub mod descriptor;
mod error;
pub mod instructions;
pub mod keypair;
pub mod launch;
pub mod pubkey;
pub mod transaction;
pub mod wallet;
pub mod wasm;

#[cfg(test)]
mod test_utils;

// Re-export core types at crate root
pub use config::LaunchConfig;
pub use descriptor::{MintDescriptor, TokenForm};
pub use error::{LaunchpadError, WalletError};
pub use keypair::{GeneratedKeypair, Keypair, KeypairExt};
pub use launch::{Launchpad, MintReport, MintStep, StepRecord, TransferOutcome};
pub use pubkey::{Pubkey, PubkeyExt};
pub use transaction::{Transaction, TransactionExt};
pub use wallet::{LedgerConnection, WalletAdapter};

// Re-export WASM types
pub use wasm::{init_logging, BrowserConnection, BrowserWallet, LaunchpadNamespace};
