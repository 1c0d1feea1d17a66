use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::ChestError;
use crate::state::*;

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(
        mut,
        seeds = [CHEST_SEED],
        bump = chest.bump
    )]
    pub chest: Account<'info, Chest>,

    #[account(
        mut,
        seeds = [CHEST_VAULT_SEED, chest.key().as_ref()],
        bump = chest.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.mint == chest.mint @ ChestError::InvalidMint,
        constraint = funder_token_account.owner == funder.key() @ ChestError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Top up the chest from the funder's own token account (permissionless)
pub fn handler(ctx: Context<Fund>, amount: u64) -> Result<()> {
    require!(amount > 0, ChestError::InvalidAmount);

    let clock = Clock::get()?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let chest = &mut ctx.accounts.chest;
    chest.total_funded = chest
        .total_funded
        .checked_add(amount)
        .ok_or(ChestError::Overflow)?;

    ctx.accounts.vault.reload()?;
    let vault_balance = ctx.accounts.vault.amount;

    emit!(crate::events::ChestFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance,
        timestamp: clock.unix_timestamp,
    });

    msg!("Funded chest with {} tokens", amount);
    msg!("Vault balance: {}", vault_balance);

    Ok(())
}
