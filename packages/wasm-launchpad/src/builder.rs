//! Transaction assembly.
//!
//! Uses the Solana SDK for message compilation so account ordering and
//! signer headers match what the runtime expects.

use crate::instructions;
use crate::pubkey::Pubkey;
use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_transaction::Transaction;

/// Build an unsigned transaction paid for by `fee_payer`.
///
/// A compute-budget price instruction is prepended when `unit_price` is set.
pub fn build_transaction(
    instructions: Vec<Instruction>,
    fee_payer: &Pubkey,
    blockhash: Hash,
    unit_price: Option<u64>,
) -> Transaction {
    let mut all_instructions = Vec::with_capacity(instructions.len() + 1);
    if let Some(price_ix) = instructions::compute_unit_price(unit_price) {
        all_instructions.push(price_ix);
    }
    all_instructions.extend(instructions);

    let message = Message::new_with_blockhash(&all_instructions, Some(fee_payer), &blockhash);
    Transaction::new_unsigned(message)
}
