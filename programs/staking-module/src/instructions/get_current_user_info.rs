use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{GlobalPool, UserInfo, UserPosition};

#[derive(Accounts)]
pub struct GetCurrentUserInfo<'info> {
    #[account(
        seeds = [GLOBAL_POOL_SEED],
        bump = global_pool.bump
    )]
    pub global_pool: Account<'info, GlobalPool>,

    /// CHECK: Only used to derive the position address
    pub user: UncheckedAccount<'info>,

    /// Omitted when the user has never deposited
    #[account(
        seeds = [USER_POSITION_SEED, global_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_position: Option<Account<'info, UserPosition>>,
}

/// Live (staked, pending reward, rewards withdrawn) projected to the current clock.
/// Reads only; the stored accumulator stays as it is.
pub fn handler(ctx: Context<GetCurrentUserInfo>) -> Result<UserInfo> {
    let clock = Clock::get()?;

    let position = ctx.accounts.user_position.as_deref();
    let info = ctx
        .accounts
        .global_pool
        .user_info(position, clock.unix_timestamp)?;

    msg!(
        "Staked: {}, pending: {}, withdrawn: {}",
        info.staked_amount,
        info.pending_reward,
        info.pending_withdrawn
    );

    Ok(info)
}
