use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::ChestError;
use crate::state::*;

#[derive(Accounts)]
pub struct Pull<'info> {
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

    /// Receives the pulled funds
    #[account(
        mut,
        constraint = recipient.mint == chest.mint @ ChestError::InvalidMint
    )]
    pub recipient: Account<'info, TokenAccount>,

    /// Authorized module (usually a program PDA signing through CPI)
    pub module: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Transfer `amount` from the chest to `recipient`
pub fn handler(ctx: Context<Pull>, amount: u64) -> Result<()> {
    let module = ctx.accounts.module.key();
    ctx.accounts
        .chest
        .check_pull(&module, amount, ctx.accounts.vault.amount)?;

    let clock = Clock::get()?;

    let bump = ctx.accounts.chest.bump;
    let seeds = &[CHEST_SEED, &[bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.recipient.to_account_info(),
        authority: ctx.accounts.chest.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    ctx.accounts.chest.record_pull(amount)?;

    emit!(crate::events::FundsPulled {
        module,
        recipient: ctx.accounts.recipient.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!("Module {} pulled {} tokens", module, amount);

    Ok(())
}
