// Global Configuration State

use anchor_lang::prelude::*;

use crate::helpers::*;

// Singleton at ["global"]. Field order is the account layout clients decode.
#[account]
#[derive(InitSpace)]
pub struct GlobalState {
    pub bonk_per_vote: u64,             // Token cost of one vote
    pub percentage_burn: u8,            // Share of each vote that is burned
    pub percentage_developer: u8,       // Share of each vote paid to the developer
    pub developer_fee_account: Pubkey,  // Token account receiving the developer share
    pub governed_mint: Pubkey,          // Only mint accepted for votes
    pub authority: Pubkey,              // Signer that initialized the config
    pub bump: u8,
}

impl GlobalState {
    // A freshly allocated account is all zeroes, so an unset authority
    // means nobody has written the config yet.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn set_economics(
        &mut self,
        bonk_per_vote: u64,
        percentage_burn: u8,
        percentage_developer: u8,
        developer_fee_account: Pubkey,
    ) -> Result<()> {
        validate_distribution(percentage_burn, percentage_developer)?;

        self.bonk_per_vote = bonk_per_vote;
        self.percentage_burn = percentage_burn;
        self.percentage_developer = percentage_developer;
        self.developer_fee_account = developer_fee_account;
        Ok(())
    }

    /// Splits one vote's cost into `(burn_amount, developer_amount)`.
    pub fn vote_split(&self) -> Result<(u64, u64)> {
        split_vote_cost(self.bonk_per_vote, self.percentage_burn)
    }
}
