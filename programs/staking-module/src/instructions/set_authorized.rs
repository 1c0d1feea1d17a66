use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::GlobalPool;

#[derive(Accounts)]
pub struct SetAuthorized<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_POOL_SEED],
        bump = global_pool.bump
    )]
    pub global_pool: Account<'info, GlobalPool>,

    /// Must be the pool owner, checked by `GlobalPool::set_authorized`
    pub owner: Signer<'info>,
}

/// Grant or revoke the right to force withdrawals
pub fn handler(ctx: Context<SetAuthorized>, caller: Pubkey, enabled: bool) -> Result<()> {
    let pool = &mut ctx.accounts.global_pool;
    let clock = Clock::get()?;

    let changed = pool.set_authorized(&ctx.accounts.owner.key(), caller, enabled)?;

    emit!(crate::events::AuthorizedCallerSet {
        caller,
        enabled,
        changed,
        timestamp: clock.unix_timestamp,
    });

    msg!("Caller {} authorized: {}", caller, enabled);

    Ok(())
}
