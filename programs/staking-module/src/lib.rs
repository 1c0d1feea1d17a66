use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;


use instructions::*;
use state::UserInfo;

declare_id!("StakeMod11111111111111111111111111111111111");

/// Staking Module Program
///
/// Users stake a token and accrue a time-weighted share of a fixed
/// per-second emission. Rewards are pulled from the reward chest, where the
/// pool PDA must be an authorized module.
#[program]
pub mod staking_module {
    use super::*;

    /// Initialize the pool (one-time admin setup)
    pub fn initialize(
        ctx: Context<Initialize>,
        owner: Pubkey,
        reward_rate_per_second: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, owner, reward_rate_per_second)
    }

    /// Stake tokens; pays out any pending reward first
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Unstake tokens; pays out any pending reward first
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Exit a user's whole position on their behalf (authorized callers only)
    pub fn withdraw_all_for_user(ctx: Context<WithdrawAllForUser>) -> Result<()> {
        instructions::withdraw_all_for_user::handler(ctx)
    }

    /// Claim pending rewards without unstaking
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Grant or revoke forced-withdrawal rights (owner only)
    pub fn set_authorized(ctx: Context<SetAuthorized>, caller: Pubkey, enabled: bool) -> Result<()> {
        instructions::set_authorized::handler(ctx, caller, enabled)
    }

    /// Change the per-second reward rate (owner only)
    pub fn set_reward_rate(ctx: Context<SetRewardRate>, reward_rate_per_second: u64) -> Result<()> {
        instructions::set_reward_rate::handler(ctx, reward_rate_per_second)
    }

    /// Bring the reward accumulator up to date (permissionless crank)
    pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
        instructions::update_pool::handler(ctx)
    }

    /// Hand the pool to a new owner (owner only)
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    /// Read-only view of a user's stake and live pending reward
    pub fn get_current_user_info(ctx: Context<GetCurrentUserInfo>) -> Result<UserInfo> {
        instructions::get_current_user_info::handler(ctx)
    }
}
