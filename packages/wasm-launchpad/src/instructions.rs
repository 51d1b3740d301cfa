//! Instruction builders for the launch flows.
//!
//! Thin wrappers over the official interface crates:
//! - `solana-system-interface` for account creation
//! - `spl-token-2022-interface` for mint, metadata pointer and mint-to
//! - `spl-token-metadata-interface` for embedded metadata
//! - `spl-associated-token-account-interface` for ATA creation

use crate::address::token_program;
use crate::descriptor::MintDescriptor;
use crate::error::LaunchpadError;
use crate::pubkey::Pubkey;

pub use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::instruction::Instruction;
use solana_system_interface::instruction as system_ix;
use spl_associated_token_account_interface::instruction as ata_ix;
use spl_token_2022_interface::extension::metadata_pointer;
use spl_token_2022_interface::instruction as token_ix;
use spl_token_metadata_interface::instruction as metadata_ix;
use spl_token_metadata_interface::state::Field;

/// Instructions for the create-mint transaction, in execution order:
/// create account, init metadata pointer, init mint, init metadata, then one
/// field update per additional metadata entry.
///
/// The payer is mint authority and metadata update authority. No freeze
/// authority is set.
pub fn create_mint_instructions(
    descriptor: &MintDescriptor,
    payer: &Pubkey,
    lamports: u64,
) -> Result<Vec<Instruction>, LaunchpadError> {
    let program = token_program();
    let mint = descriptor.mint();
    let space = descriptor.mint_space()? as u64;

    let mut instructions = vec![
        system_ix::create_account(payer, &mint, lamports, space, &program),
        metadata_pointer::instruction::initialize(&program, &mint, Some(*payer), Some(mint))
            .map_err(|e| {
                LaunchpadError::Instruction(format!("initializeMetadataPointer: {}", e))
            })?,
        token_ix::initialize_mint(&program, &mint, payer, None, descriptor.decimals)
            .map_err(|e| LaunchpadError::Instruction(format!("initializeMint: {}", e)))?,
        metadata_ix::initialize(
            &program,
            &mint,
            payer,
            &mint,
            payer,
            descriptor.name.clone(),
            descriptor.symbol.clone(),
            descriptor.metadata_uri.clone(),
        ),
    ];

    for (key, value) in &descriptor.additional_metadata {
        instructions.push(metadata_ix::update_field(
            &program,
            &mint,
            payer,
            Field::Key(key.clone()),
            value.clone(),
        ));
    }

    Ok(instructions)
}

/// Create the owner's associated token account for `mint`, funded by `payer`.
pub fn create_associated_account(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    ata_ix::create_associated_token_account(payer, owner, mint, &token_program())
}

/// Same as [`create_associated_account`] but succeeds if the account exists.
pub fn create_associated_account_idempotent(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    ata_ix::create_associated_token_account_idempotent(payer, owner, mint, &token_program())
}

/// Mint `amount` base units into `destination`, signed by `authority`.
pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, LaunchpadError> {
    token_ix::mint_to(&token_program(), mint, destination, authority, &[], amount)
        .map_err(|e| LaunchpadError::Instruction(format!("mintTo: {}", e)))
}

/// Priority fee instruction, if a unit price is configured.
pub fn compute_unit_price(micro_lamports: Option<u64>) -> Option<Instruction> {
    micro_lamports.map(ComputeBudgetInstruction::set_compute_unit_price)
}
