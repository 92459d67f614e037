// Update Global State Instruction
//
// Lets the config authority change the vote price, the split and the
// developer fee account. The governed mint and the authority never change.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct UpdateGlobalState<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        has_one = authority @ BonkVoteError::Unauthorized,
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(address = global_state.governed_mint @ BonkVoteError::WrongMint)]
    pub governed_mint: Account<'info, Mint>,

    #[account(token::mint = governed_mint)]
    pub developer_fee_account: Account<'info, TokenAccount>,
}

impl<'info> UpdateGlobalState<'info> {
    pub fn update_global_state(
        &mut self,
        bonk_per_vote: u64,
        percentage_burn: u8,
        percentage_developer: u8,
    ) -> Result<()> {
        // Same distribution check as initialization
        self.global_state.set_economics(
            bonk_per_vote,
            percentage_burn,
            percentage_developer,
            self.developer_fee_account.key(),
        )?;

        msg!(
            "Global state updated: {} per vote, {}% burn / {}% developer",
            bonk_per_vote,
            percentage_burn,
            percentage_developer
        );

        emit!(GlobalStateUpdated {
            developer_fee_account: self.developer_fee_account.key(),
            bonk_per_vote,
            percentage_burn,
            percentage_developer,
        });

        Ok(())
    }
}
