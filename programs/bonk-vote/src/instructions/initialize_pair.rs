// Initialize Pair Instruction
//
// Creates a two-option ballot at ["pair", name_a, name_b] with both
// tallies at zero. Only the global state authority can create pairs.
//
// The pair account is created here rather than with an `init` constraint:
// names are seeds, and a name over the seed limit has to be rejected with
// InvalidName before any address is derived from it.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct InitializePair<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        has_one = authority @ BonkVoteError::Unauthorized,
    )]
    pub global_state: Account<'info, GlobalState>,

    /// CHECK: address and emptiness are verified in the handler before the
    /// account is created
    #[account(mut)]
    pub pair: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePair<'info> {
    pub fn initialize_pair(
        &mut self,
        name_a: String,
        link_a: String,
        name_b: String,
        link_b: String,
    ) -> Result<()> {
        validate_name(&name_a)?;
        validate_name(&name_b)?;

        let (pair_address, bump) = find_pair_address(&name_a, &name_b, &crate::ID);
        require_keys_eq!(self.pair.key(), pair_address, BonkVoteError::PairMismatch);
        require!(self.pair.data_is_empty(), BonkVoteError::AlreadyInitialized);

        validate_link(&link_a)?;
        validate_link(&link_b)?;

        let signer_seeds: &[&[&[u8]]] = &[&[
            PAIR_SEED,
            name_a.as_bytes(),
            name_b.as_bytes(),
            &[bump],
        ]];

        let space = ANCHOR_DISCRIMINATOR + Pair::INIT_SPACE;
        let rent = Rent::get()?;
        create_account(
            CpiContext::new(
                self.system_program.to_account_info(),
                CreateAccount {
                    from: self.authority.to_account_info(),
                    to: self.pair.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            rent.minimum_balance(space),
            space as u64,
            &crate::ID,
        )?;

        msg!("Pair initialized: {} vs {}", name_a, name_b);

        emit!(PairInitialized {
            pair: pair_address,
            name_a: name_a.clone(),
            name_b: name_b.clone(),
        });

        let pair = Pair {
            name_a,
            name_b,
            link_a,
            link_b,
            vote_a: 0,
            vote_b: 0,
            bump,
        };
        let mut data = self.pair.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        pair.try_serialize(&mut writer)?;

        Ok(())
    }
}
