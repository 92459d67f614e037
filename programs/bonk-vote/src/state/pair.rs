// Pair (Ballot) State

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

/// One two-option contest, stored at `["pair", name_a, name_b]`.
///
/// The address depends on the order the names were given at creation.
/// Voting with the names swapped derives a different address, so callers
/// must always pass them in creation order.
#[account]
#[derive(InitSpace)]
pub struct Pair {
    #[max_len(MAX_NAME_LEN)]
    pub name_a: String,
    #[max_len(MAX_NAME_LEN)]
    pub name_b: String,
    #[max_len(MAX_LINK_LEN)]
    pub link_a: String,
    #[max_len(MAX_LINK_LEN)]
    pub link_b: String,
    pub vote_a: u64,
    pub vote_b: u64,
    pub bump: u8,
}

impl Pair {
    pub fn record_vote(&mut self, choose_a: bool) -> Result<()> {
        let tally = if choose_a {
            &mut self.vote_a
        } else {
            &mut self.vote_b
        };
        *tally = tally.checked_add(1).ok_or(BonkVoteError::MathOverflow)?;
        Ok(())
    }
}
