use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub reward_chest: Pubkey,
    pub reward_rate_per_second: u64,
    pub timestamp: i64,
}

/// Emitted when a user stakes tokens
#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub pool_total_staked: u64,
    pub timestamp: i64,
}

/// Emitted when a user unstakes tokens
#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub amount: u64,
    pub remaining_stake: u64,
    pub pool_total_staked: u64,
    pub timestamp: i64,
}

/// Emitted when an authorized caller exits a user's whole position
#[event]
pub struct ForcedWithdrawal {
    pub caller: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub rewards_paid: u64,
    pub timestamp: i64,
}

/// Emitted whenever settlement pays out reward
#[event]
pub struct RewardPaid {
    pub user: Pubkey,
    pub amount: u64,
    pub pending_withdrawn: u64,
    pub timestamp: i64,
}

#[event]
pub struct AuthorizedCallerSet {
    pub caller: Pubkey,
    pub enabled: bool,
    pub changed: bool,
    pub timestamp: i64,
}

#[event]
pub struct RewardRateUpdated {
    pub old_rate: u64,
    pub new_rate: u64,
    pub acc_reward_per_share: u128,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
