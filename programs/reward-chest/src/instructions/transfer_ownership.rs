use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [CHEST_SEED],
        bump = chest.bump
    )]
    pub chest: Account<'info, Chest>,

    /// Must be the current owner, checked by `Chest::transfer_ownership`
    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let chest = &mut ctx.accounts.chest;
    let clock = Clock::get()?;

    let previous_owner = chest.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit!(crate::events::OwnershipTransferred {
        previous_owner,
        new_owner,
        timestamp: clock.unix_timestamp,
    });

    msg!("Chest ownership transferred to {}", new_owner);

    Ok(())
}
