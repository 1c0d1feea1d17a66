use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use reward_chest::state::Chest;

use crate::constants::*;
use crate::errors::StakingError;
use crate::state::GlobalPool;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = GlobalPool::SIZE,
        seeds = [GLOBAL_POOL_SEED],
        bump,
        constraint = !global_pool.initialized @ StakingError::AlreadyInitialized
    )]
    pub global_pool: Account<'info, GlobalPool>,

    /// Vault holding staked principal, owned by the pool PDA
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [STAKE_VAULT_SEED, global_pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = global_pool,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// The staked token (also the reward token)
    pub mint: Account<'info, Mint>,

    /// Chest the pool pays rewards from
    #[account(constraint = reward_chest.mint == mint.key() @ StakingError::InvalidRewardChest)]
    pub reward_chest: Account<'info, Chest>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// One-time pool setup
pub fn handler(ctx: Context<Initialize>, owner: Pubkey, reward_rate_per_second: u64) -> Result<()> {
    let clock = Clock::get()?;
    let mint = ctx.accounts.mint.key();
    let stake_vault = ctx.accounts.stake_vault.key();
    let reward_chest = ctx.accounts.reward_chest.key();

    let pool = &mut ctx.accounts.global_pool;
    pool.initialize(
        owner,
        mint,
        stake_vault,
        reward_chest,
        reward_rate_per_second,
        clock.unix_timestamp,
        ctx.bumps.global_pool,
        ctx.bumps.stake_vault,
    )?;

    emit!(crate::events::PoolInitialized {
        owner,
        mint: pool.mint,
        reward_chest: pool.reward_chest,
        reward_rate_per_second,
        timestamp: clock.unix_timestamp,
    });

    msg!("Initialized staking pool for mint: {}", pool.mint);
    msg!("Reward rate: {}/s", reward_rate_per_second);
    msg!("Chest module key to authorize: {}", pool.key());

    Ok(())
}
