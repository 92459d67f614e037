use anchor_lang::prelude::*;

#[event]
pub struct GlobalStateInitialized {
    pub authority: Pubkey,
    pub governed_mint: Pubkey,
    pub developer_fee_account: Pubkey,
    pub bonk_per_vote: u64,
    pub percentage_burn: u8,
    pub percentage_developer: u8,
}

#[event]
pub struct GlobalStateUpdated {
    pub developer_fee_account: Pubkey,
    pub bonk_per_vote: u64,
    pub percentage_burn: u8,
    pub percentage_developer: u8,
}

#[event]
pub struct PairInitialized {
    pub pair: Pubkey,
    pub name_a: String,
    pub name_b: String,
}

#[event]
pub struct VoteCast {
    pub pair: Pubkey,
    pub voter: Pubkey,
    pub choose_a: bool,
    pub burn_amount: u64,
    pub developer_amount: u64,
    pub vote_a: u64,
    pub vote_b: u64,
}
