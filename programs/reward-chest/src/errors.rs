use anchor_lang::prelude::*;

use crate::authorization::RegistryError;

#[error_code]
pub enum ChestError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Insufficient funds in reward chest")]
    InsufficientFunds,

    #[msg("Reward chest is already initialized")]
    AlreadyInitialized,

    #[msg("Owner cannot be the default address")]
    InvalidOwner,

    #[msg("Module cannot be the default address")]
    InvalidModule,

    #[msg("Maximum modules already authorized")]
    TooManyModules,

    #[msg("Token account does not hold the chest mint")]
    InvalidMint,

    #[msg("Arithmetic overflow")]
    Overflow,
}

impl From<RegistryError> for ChestError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Full => ChestError::TooManyModules,
            RegistryError::NullAddress => ChestError::InvalidModule,
        }
    }
}
