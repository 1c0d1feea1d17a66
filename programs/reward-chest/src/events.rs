use anchor_lang::prelude::*;

/// Emitted when the chest is set up
#[event]
pub struct ChestInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub timestamp: i64,
}

/// Emitted when tokens are added to the chest
#[event]
pub struct ChestFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

/// Emitted when a module is added to or removed from the authorized set
#[event]
pub struct ModuleToggled {
    pub module: Pubkey,
    pub enabled: bool,
    pub changed: bool,
    pub timestamp: i64,
}

/// Emitted when an authorized module pulls funds
#[event]
pub struct FundsPulled {
    pub module: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
