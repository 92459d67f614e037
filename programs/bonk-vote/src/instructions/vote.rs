// Vote Instruction
//
// Charges the voter bonk_per_vote tokens, burning one share and paying the
// other to the developer fee account, then bumps the chosen tally by one.
// Any failed check aborts the whole transaction.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    // Writable because burning lowers the mint supply
    #[account(
        mut,
        address = global_state.governed_mint @ BonkVoteError::WrongMint,
    )]
    pub governed_mint: Account<'info, Mint>,

    #[account(
        mut,
        address = global_state.developer_fee_account @ BonkVoteError::WrongFeeDestination,
    )]
    pub developer_fee_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = governed_mint,
        token::authority = voter,
    )]
    pub voter_token_account: Account<'info, TokenAccount>,

    // Address is checked against the names in the handler
    #[account(mut)]
    pub pair: Account<'info, Pair>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self, name_a: String, name_b: String, choose_a: bool) -> Result<()> {
        let bonk_per_vote = self.global_state.bonk_per_vote;

        require!(
            self.voter_token_account.amount >= bonk_per_vote,
            BonkVoteError::InsufficientFunds
        );

        let expected_pair = create_pair_address(&name_a, &name_b, self.pair.bump, &crate::ID)?;
        require_keys_eq!(expected_pair, self.pair.key(), BonkVoteError::PairMismatch);

        let (burn_amount, developer_amount) = self.global_state.vote_split()?;

        if burn_amount > 0 {
            burn_tokens(
                burn_amount,
                &self.token_program.to_account_info(),
                &self.governed_mint.to_account_info(),
                &self.voter_token_account.to_account_info(),
                &self.voter.to_account_info(),
            )?;
        }

        if developer_amount > 0 {
            transfer_tokens(
                developer_amount,
                &self.token_program.to_account_info(),
                &self.voter_token_account.to_account_info(),
                &self.developer_fee_account.to_account_info(),
                &self.voter.to_account_info(),
            )?;
        }

        self.pair.record_vote(choose_a)?;

        msg!(
            "Vote for {} in {} vs {}: burned {}, developer fee {}",
            if choose_a { &name_a } else { &name_b },
            name_a,
            name_b,
            burn_amount,
            developer_amount
        );

        emit!(VoteCast {
            pair: self.pair.key(),
            voter: self.voter.key(),
            choose_a,
            burn_amount,
            developer_amount,
            vote_a: self.pair.vote_a,
            vote_b: self.pair.vote_b,
        });

        Ok(())
    }
}
