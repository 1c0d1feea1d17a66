use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use reward_chest::program::RewardChest;
use reward_chest::state::Chest;

use crate::constants::*;
use crate::errors::StakingError;
use crate::helpers::{pull_reward_cpi, release_principal_cpi};
use crate::state::{GlobalPool, StakeChange, UserPosition};

/// Administrative exit: an authorized caller closes out a user's whole stake.
/// Principal and rewards go to the user, never to the caller.
#[derive(Accounts)]
pub struct WithdrawAllForUser<'info> {
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

    /// CHECK: Position owner; not a signer, only used to derive and match accounts
    pub user: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = user_token_account.mint == global_pool.mint @ StakingError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = global_pool.stake_vault @ StakingError::InvalidVault
    )]
    pub stake_vault: Account<'info, TokenAccount>,

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

    /// Must be an authorized caller, checked by `GlobalPool::forced_withdrawal_amount`
    pub caller: Signer<'info>,

    pub reward_chest_program: Program<'info, RewardChest>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawAllForUser>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let user_key = ctx.accounts.user.key();
    let amount = ctx
        .accounts
        .global_pool
        .forced_withdrawal_amount(&ctx.accounts.caller.key(), &ctx.accounts.user_position)?;

    let update = ctx.accounts.global_pool.plan(
        &ctx.accounts.user_position,
        StakeChange::Withdraw(amount),
        now,
    )?;

    let pool_bump = ctx.accounts.global_pool.bump;
    let seeds: &[&[u8]] = &[GLOBAL_POOL_SEED, &[pool_bump]];

    if update.payout > 0 {
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
    }

    release_principal_cpi(
        &ctx.accounts.stake_vault.to_account_info(),
        &ctx.accounts.user_token_account.to_account_info(),
        &ctx.accounts.global_pool.to_account_info(),
        &ctx.accounts.token_program.to_account_info(),
        seeds,
        amount,
    )?;

    let position = &mut ctx.accounts.user_position;
    let pool = &mut ctx.accounts.global_pool;
    pool.commit(position, &update);

    if update.payout > 0 {
        emit!(crate::events::RewardPaid {
            user: user_key,
            amount: update.payout,
            pending_withdrawn: position.pending_withdrawn,
            timestamp: now,
        });
    }
    emit!(crate::events::ForcedWithdrawal {
        caller: ctx.accounts.caller.key(),
        user: user_key,
        amount,
        rewards_paid: update.payout,
        timestamp: now,
    });

    msg!("Withdrew all {} tokens for {}", amount, user_key);
    msg!("Rewards paid: {}", update.payout);

    Ok(())
}
