use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct ToggleModule<'info> {
    #[account(
        mut,
        seeds = [CHEST_SEED],
        bump = chest.bump
    )]
    pub chest: Account<'info, Chest>,

    /// Must be the chest owner, checked by `Chest::toggle_module`
    pub owner: Signer<'info>,
}

/// Add or remove a module from the set allowed to pull funds
pub fn handler(ctx: Context<ToggleModule>, module: Pubkey, enabled: bool) -> Result<()> {
    let chest = &mut ctx.accounts.chest;
    let clock = Clock::get()?;

    let changed = chest.toggle_module(&ctx.accounts.owner.key(), module, enabled)?;

    emit!(crate::events::ModuleToggled {
        module,
        enabled,
        changed,
        timestamp: clock.unix_timestamp,
    });

    msg!("Module {} enabled: {}", module, enabled);
    msg!("Authorized modules: {}", chest.access.member_count());

    Ok(())
}
