use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use reward_chest::program::RewardChest;
use reward_chest::state::Chest;

use crate::constants::*;
use crate::errors::StakingError;
use crate::helpers::pull_reward_cpi;
use crate::state::{GlobalPool, StakeChange, UserPosition};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_POOL_SEED],
        bump = global_pool.bump
    )]
    pub global_pool: Account<'info, GlobalPool>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserPosition::SIZE,
        seeds = [USER_POSITION_SEED, global_pool.key().as_ref(), user.key().as_ref()],
        bump
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

    #[account(mut)]
    pub user: Signer<'info>,

    pub reward_chest_program: Program<'info, RewardChest>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let user_key = ctx.accounts.user.key();
    let is_new_position = ctx.accounts.user_position.is_fresh();

    // Settle before the stake changes
    let update = ctx.accounts.global_pool.plan(
        &ctx.accounts.user_position,
        StakeChange::Deposit(amount),
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

    // Transfer tokens from user to pool
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.stake_vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let position = &mut ctx.accounts.user_position;
    if is_new_position {
        position.open(user_key, ctx.bumps.user_position, now);
    }
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
    emit!(crate::events::Deposited {
        user: user_key,
        amount,
        staked_amount: position.staked_amount,
        pool_total_staked: pool.total_staked,
        timestamp: now,
    });

    msg!("Deposited {} tokens", amount);
    msg!("Staked: {}, rewards paid: {}", position.staked_amount, update.payout);

    Ok(())
}
