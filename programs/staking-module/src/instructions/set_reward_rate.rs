use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::GlobalPool;

#[derive(Accounts)]
pub struct SetRewardRate<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_POOL_SEED],
        bump = global_pool.bump
    )]
    pub global_pool: Account<'info, GlobalPool>,

    /// Must be the pool owner, checked by `GlobalPool::set_reward_rate`
    pub owner: Signer<'info>,
}

/// Change the emission rate. Time already elapsed accrues at the old rate.
pub fn handler(ctx: Context<SetRewardRate>, reward_rate_per_second: u64) -> Result<()> {
    let pool = &mut ctx.accounts.global_pool;
    let clock = Clock::get()?;

    let old_rate = pool.set_reward_rate(
        &ctx.accounts.owner.key(),
        reward_rate_per_second,
        clock.unix_timestamp,
    )?;

    emit!(crate::events::RewardRateUpdated {
        old_rate,
        new_rate: reward_rate_per_second,
        acc_reward_per_share: pool.acc_reward_per_share,
        timestamp: clock.unix_timestamp,
    });

    msg!("Reward rate: {} -> {}", old_rate, reward_rate_per_second);

    Ok(())
}
