use anchor_lang::prelude::*;

use reward_chest::authorization::RegistryError;

#[error_code]
pub enum StakingError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Insufficient staked balance")]
    InsufficientStake,

    #[msg("Staking pool is already initialized")]
    AlreadyInitialized,

    #[msg("Clock moved backwards")]
    InvalidTimestamp,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Owner cannot be the default address")]
    InvalidOwner,

    #[msg("Caller cannot be the default address")]
    InvalidCaller,

    #[msg("Maximum callers already authorized")]
    TooManyAuthorized,

    #[msg("Token account does not hold the staked mint")]
    InvalidMint,

    #[msg("Invalid stake vault")]
    InvalidVault,

    #[msg("Invalid reward chest")]
    InvalidRewardChest,

    #[msg("No rewards to claim")]
    NoRewardsToClaim,
}

impl From<RegistryError> for StakingError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Full => StakingError::TooManyAuthorized,
            RegistryError::NullAddress => StakingError::InvalidCaller,
        }
    }
}
