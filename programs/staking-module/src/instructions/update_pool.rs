use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::GlobalPool;

/// Permissionless instruction to bring the accumulator up to date
#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_POOL_SEED],
        bump = global_pool.bump
    )]
    pub global_pool: Account<'info, GlobalPool>,
}

pub fn handler(ctx: Context<UpdatePool>) -> Result<()> {
    let pool = &mut ctx.accounts.global_pool;
    let clock = Clock::get()?;

    pool.accrue(clock.unix_timestamp)?;

    msg!("Updated pool rewards state");
    msg!("Total staked: {}", pool.total_staked);
    msg!("Reward per share: {}", pool.acc_reward_per_share);

    Ok(())
}
