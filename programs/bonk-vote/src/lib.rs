// Bonk Vote Program
//
// Two-option ballots paid for in a single SPL token. Every vote costs a
// fixed amount; part of it is burned and the rest goes to a developer fee
// account.
//
// Instructions:
// - initialize_global_state: Create the singleton vote config
// - update_global_state: Change price, split or fee account (authority only)
// - initialize_pair: Create a named two-option ballot (authority only)
// - vote: Pay for and cast one vote on a pair

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use errors::*;
pub use state::*;
pub use instructions::*;

declare_id!("7PWN1wsmGZQemjTw9b9TgkHUa1VnXYWzrF98M166ugbS");

#[program]
pub mod bonk_vote {
    use super::*;

    pub fn initialize_global_state(
        ctx: Context<InitializeGlobalState>,
        bonk_per_vote: u64,
        percentage_burn: u8,
        percentage_developer: u8,
    ) -> Result<()> {
        ctx.accounts.initialize_global_state(
            bonk_per_vote,
            percentage_burn,
            percentage_developer,
            &ctx.bumps,
        )
    }

    pub fn update_global_state(
        ctx: Context<UpdateGlobalState>,
        bonk_per_vote: u64,
        percentage_burn: u8,
        percentage_developer: u8,
    ) -> Result<()> {
        ctx.accounts
            .update_global_state(bonk_per_vote, percentage_burn, percentage_developer)
    }

    // Names must be passed in this same order when voting
    pub fn initialize_pair(
        ctx: Context<InitializePair>,
        name_a: String,
        link_a: String,
        name_b: String,
        link_b: String,
    ) -> Result<()> {
        ctx.accounts.initialize_pair(name_a, link_a, name_b, link_b)
    }

    pub fn vote(
        ctx: Context<Vote>,
        name_a: String,
        name_b: String,
        choose_a: bool,
    ) -> Result<()> {
        ctx.accounts.vote(name_a, name_b, choose_a)
    }
}
