// Initialize Global State Instruction
//
// Creates the singleton config holding the vote price, the burn/developer
// split, the developer fee account and the governed mint.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializeGlobalState<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // init_if_needed so a second call reaches the handler and fails with
    // AlreadyInitialized instead of a bare system program error
    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + GlobalState::INIT_SPACE,
        seeds = [GLOBAL_STATE_SEED],
        bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    pub governed_mint: Account<'info, Mint>,

    #[account(
        token::mint = governed_mint,
        token::authority = authority,
    )]
    pub developer_fee_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGlobalState<'info> {
    pub fn initialize_global_state(
        &mut self,
        bonk_per_vote: u64,
        percentage_burn: u8,
        percentage_developer: u8,
        bumps: &InitializeGlobalStateBumps,
    ) -> Result<()> {
        require!(
            !self.global_state.is_initialized(),
            BonkVoteError::AlreadyInitialized
        );

        let global_state = &mut self.global_state;
        global_state.set_economics(
            bonk_per_vote,
            percentage_burn,
            percentage_developer,
            self.developer_fee_account.key(),
        )?;
        global_state.governed_mint = self.governed_mint.key();
        global_state.authority = self.authority.key();
        global_state.bump = bumps.global_state;

        msg!(
            "Global state initialized: {} per vote, {}% burn / {}% developer",
            bonk_per_vote,
            percentage_burn,
            percentage_developer
        );
        msg!("Governed mint: {}", self.governed_mint.key());

        emit!(GlobalStateInitialized {
            authority: self.authority.key(),
            governed_mint: self.governed_mint.key(),
            developer_fee_account: self.developer_fee_account.key(),
            bonk_per_vote,
            percentage_burn,
            percentage_developer,
        });

        Ok(())
    }
}
