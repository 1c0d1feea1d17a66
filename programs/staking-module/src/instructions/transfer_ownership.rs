use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::GlobalPool;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_POOL_SEED],
        bump = global_pool.bump
    )]
    pub global_pool: Account<'info, GlobalPool>,

    /// Must be the current owner, checked by `GlobalPool::transfer_ownership`
    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let pool = &mut ctx.accounts.global_pool;
    let clock = Clock::get()?;

    let previous_owner = pool.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit!(crate::events::OwnershipTransferred {
        previous_owner,
        new_owner,
        timestamp: clock.unix_timestamp,
    });

    msg!("Pool ownership transferred to {}", new_owner);

    Ok(())
}
