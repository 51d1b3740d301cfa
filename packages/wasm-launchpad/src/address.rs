//! Well-known program IDs and associated token account derivation.

use crate::pubkey::Pubkey;

/// Program IDs as base58 strings
pub const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";
pub const COMPUTE_BUDGET_PROGRAM_ID: &str = "ComputeBudget111111111111111111111111111111";
// Token-2022 (Token Extensions): https://www.solana-program.com/docs/token-2022
pub const TOKEN_2022_PROGRAM_ID: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";
// Associated Token Account Program: https://www.solana-program.com/docs/associated-token-account
pub const ATA_PROGRAM_ID: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";

/// The token program every launchpad mint is created under.
pub fn token_program() -> Pubkey {
    spl_token_2022_interface::ID
}

/// Derive the Token-2022 associated token account for (owner, mint).
///
/// Pure function of its inputs: seeds `[owner, token_program, mint]` under
/// the associated token account program.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account_interface::address::get_associated_token_address_with_program_id(
        owner,
        mint,
        &token_program(),
    )
}
