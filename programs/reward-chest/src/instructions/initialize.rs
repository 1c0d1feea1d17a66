use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::ChestError;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = Chest::SIZE,
        seeds = [CHEST_SEED],
        bump,
        constraint = !chest.initialized @ ChestError::AlreadyInitialized
    )]
    pub chest: Account<'info, Chest>,

    /// Vault holding reward funds, owned by the chest PDA
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [CHEST_VAULT_SEED, chest.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = chest,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// The reward token
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// One-time chest setup
pub fn handler(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let mint = ctx.accounts.mint.key();
    let vault = ctx.accounts.vault.key();

    let chest = &mut ctx.accounts.chest;
    chest.initialize(owner, mint, vault, ctx.bumps.chest, ctx.bumps.vault)?;

    emit!(crate::events::ChestInitialized {
        owner,
        mint: chest.mint,
        vault: chest.vault,
        timestamp: clock.unix_timestamp,
    });

    msg!("Initialized reward chest");
    msg!("Owner: {}", owner);
    msg!("Mint: {}", chest.mint);

    Ok(())
}
