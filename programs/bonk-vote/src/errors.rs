use anchor_lang::prelude::*;

#[error_code]
pub enum BonkVoteError {
    // Lifecycle errors
    #[msg("Account already initialized")]
    AlreadyInitialized,

    #[msg("Burn and developer percentages must sum to 100")]
    InvalidConfiguration,

    // Vote validation errors
    #[msg("Token mint does not match the governed mint")]
    WrongMint,

    #[msg("Developer fee account does not match the configured destination")]
    WrongFeeDestination,

    #[msg("Pair names do not derive the supplied pair account")]
    PairMismatch,

    #[msg("Voter token balance is below the cost of one vote")]
    InsufficientFunds,

    // Authorization errors
    #[msg("Only the global state authority can perform this action")]
    Unauthorized,

    // Pair metadata errors
    #[msg("Pair names must be between 1 and 32 bytes")]
    InvalidName,

    #[msg("Pair links cannot exceed 200 bytes")]
    InvalidLink,

    #[msg("Math overflow occurred")]
    MathOverflow,
}
