use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use reward_chest::program::RewardChest;
use reward_chest::state::Chest;

use crate::constants::*;
use crate::errors::StakingError;
use crate::helpers::pull_reward_cpi;
use crate::state::{GlobalPool, StakeChange, UserPosition};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_POOL_SEED],
        bump = global_pool.bump
    )]
    pub global_pool: Account<'info, GlobalPool>,

    #[account(
        mut,
        seeds = [USER_POSITION_SEED, global_pool.key().as_ref(), user.key().as_ref()],
        bump = user_position.bump,
        constraint = user_position.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_position: Account<'info, UserPosition>,

    #[account(
        mut,
        constraint = user_token_account.mint == global_pool.mint @ StakingError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = global_pool.reward_chest @ StakingError::InvalidRewardChest
    )]
    pub reward_chest: Account<'info, Chest>,

    #[account(
        mut,
        address = reward_chest.vault @ StakingError::InvalidRewardChest
    )]
    pub chest_vault: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub reward_chest_program: Program<'info, RewardChest>,
    pub token_program: Program<'info, Token>,
}

/// Pay out pending reward without touching the stake
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let update = ctx.accounts.global_pool.plan(
        &ctx.accounts.user_position,
        StakeChange::Hold,
        now,
    )?;
    require!(update.payout > 0, StakingError::NoRewardsToClaim);

    let pool_bump = ctx.accounts.global_pool.bump;
    let seeds: &[&[u8]] = &[GLOBAL_POOL_SEED, &[pool_bump]];

    pull_reward_cpi(
        &ctx.accounts.reward_chest_program.to_account_info(),
        &ctx.accounts.reward_chest.to_account_info(),
        &ctx.accounts.chest_vault.to_account_info(),
        &ctx.accounts.user_token_account.to_account_info(),
        &ctx.accounts.global_pool.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        seeds,
        update.payout,
    )?;

    let position = &mut ctx.accounts.user_position;
    let pool = &mut ctx.accounts.global_pool;
    pool.commit(position, &update);

    emit!(crate::events::RewardPaid {
        user: ctx.accounts.user.key(),
        amount: update.payout,
        pending_withdrawn: position.pending_withdrawn,
        timestamp: now,
    });

    msg!("Claimed {} in rewards", update.payout);

    Ok(())
}
