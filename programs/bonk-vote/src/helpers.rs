// Bonk Vote Helper Functions
//
// Address derivation, vote economics and token CPI helpers shared by the
// instructions. Everything above the CPI section is pure.

use anchor_lang::prelude::*;
use anchor_spl::token::{Burn, Transfer, burn, transfer};

use crate::{constants::*, errors::*};

// ADDRESS DERIVATION

// Global config lives at ["global"]
pub fn find_global_state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_STATE_SEED], program_id)
}

// Pair lives at ["pair", name_a, name_b]
// Order matters: (a, b) and (b, a) are two different pairs
pub fn find_pair_address(name_a: &str, name_b: &str, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PAIR_SEED, name_a.as_bytes(), name_b.as_bytes()],
        program_id,
    )
}

// Re-derive a pair address from its stored bump
// Cheaper than find_program_address since no bump search is needed
pub fn create_pair_address(
    name_a: &str,
    name_b: &str,
    bump: u8,
    program_id: &Pubkey,
) -> Result<Pubkey> {
    Pubkey::create_program_address(
        &[PAIR_SEED, name_a.as_bytes(), name_b.as_bytes(), &[bump]],
        program_id,
    )
    .map_err(|_| error!(BonkVoteError::PairMismatch))
}

// VALIDATION HELPERS

// Percentages are summed as u16 so that e.g. 200 + 100 cannot wrap
pub fn validate_distribution(percentage_burn: u8, percentage_developer: u8) -> Result<()> {
    let total = (percentage_burn as u16)
        .checked_add(percentage_developer as u16)
        .ok_or(BonkVoteError::MathOverflow)?;

    require!(total == PERCENTAGE_TOTAL, BonkVoteError::InvalidConfiguration);
    Ok(())
}

// Names double as PDA seeds, which are capped at 32 bytes
pub fn validate_name(name: &str) -> Result<()> {
    require!(!name.is_empty(), BonkVoteError::InvalidName);
    require!(name.len() <= MAX_NAME_LEN, BonkVoteError::InvalidName);
    Ok(())
}

pub fn validate_link(link: &str) -> Result<()> {
    require!(link.len() <= MAX_LINK_LEN, BonkVoteError::InvalidLink);
    Ok(())
}

// ECONOMICS

// Split the cost of one vote into (burn_amount, developer_amount)
//
// burn_amount = bonk_per_vote * percentage_burn / 100
// developer_amount = bonk_per_vote - burn_amount
//
// The developer share is the remainder rather than its own percentage
// product, so rounding dust always lands with the developer and
// burn_amount + developer_amount == bonk_per_vote holds exactly.
pub fn split_vote_cost(bonk_per_vote: u64, percentage_burn: u8) -> Result<(u64, u64)> {
    require!(
        percentage_burn as u16 <= PERCENTAGE_TOTAL,
        BonkVoteError::InvalidConfiguration
    );

    let burn_amount = (bonk_per_vote as u128)
        .checked_mul(percentage_burn as u128)
        .ok_or(BonkVoteError::MathOverflow)?
        .checked_div(PERCENTAGE_TOTAL as u128)
        .ok_or(BonkVoteError::MathOverflow)?;
    let burn_amount = u64::try_from(burn_amount).map_err(|_| BonkVoteError::MathOverflow)?;

    let developer_amount = bonk_per_vote
        .checked_sub(burn_amount)
        .ok_or(BonkVoteError::MathOverflow)?;

    Ok((burn_amount, developer_amount))
}

// CPI HELPERS

// Transfer tokens signed by the owner of `from`
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Burn tokens signed by the owner of `from`
// The owner signs directly, so no delegate approval is needed
pub fn burn_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    burn(
        CpiContext::new(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}
