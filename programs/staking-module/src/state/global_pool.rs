use anchor_lang::prelude::*;
use reward_chest::authorization::AuthorizationRegistry;

use crate::errors::StakingError;
use crate::helpers::math;
use crate::state::{UserInfo, UserPosition};

/// Singleton staking pool
/// PDA: ["global-pool"]
///
/// Also the signer for the stake vault and the module key the reward chest
/// must authorize.
#[account]
#[derive(Default)]
pub struct GlobalPool {
    /// Owner and the callers allowed to force withdrawals
    pub access: AuthorizationRegistry,

    /// Token mint that can be staked
    pub mint: Pubkey,

    /// Token account holding staked principal
    /// PDA: ["stake-vault", global_pool], authority = global_pool
    pub stake_vault: Pubkey,

    /// Reward chest account rewards are pulled from
    pub reward_chest: Pubkey,

    /// Total tokens currently staked
    pub total_staked: u64,

    /// Accumulated reward per staked token (scaled by SCALE)
    pub acc_reward_per_share: u128,

    /// Last timestamp the accumulator was brought forward
    pub last_accrual_time: i64,

    /// Reward tokens distributed per second across all stakers
    pub reward_rate_per_second: u64,

    /// Total rewards paid out historically
    pub total_rewards_paid: u64,

    /// Number of positions with a non-zero stake
    pub staker_count: u32,

    /// Set once by `initialize`
    pub initialized: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed for the stake vault PDA
    pub vault_bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

/// How a settlement changes the user's stake
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakeChange {
    Deposit(u64),
    Withdraw(u64),
    Hold,
}

/// Result of settling a position at `now`. Computed without touching state;
/// applied with `GlobalPool::commit` once every transfer has gone through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionUpdate {
    pub now: i64,
    pub acc_reward_per_share: u128,
    /// Reward owed to the user, pulled from the chest
    pub payout: u64,
    pub staked_amount: u64,
    pub reward_debt: u128,
    pub pending_withdrawn: u64,
    pub total_staked: u64,
    pub total_rewards_paid: u64,
}

impl GlobalPool {
    pub const SIZE: usize = 8 + // discriminator
        AuthorizationRegistry::SIZE + // access
        32 + // mint
        32 + // stake_vault
        32 + // reward_chest
        8 +  // total_staked
        16 + // acc_reward_per_share
        8 +  // last_accrual_time
        8 +  // reward_rate_per_second
        8 +  // total_rewards_paid
        4 +  // staker_count
        1 +  // initialized
        1 +  // bump
        1 +  // vault_bump
        32;  // reserved

    /// One-time setup; a second call fails whatever mint it names
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        stake_vault: Pubkey,
        reward_chest: Pubkey,
        reward_rate_per_second: u64,
        now: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, StakingError::AlreadyInitialized);
        require_keys_neq!(owner, Pubkey::default(), StakingError::InvalidOwner);

        self.access = AuthorizationRegistry::new(owner);
        self.mint = mint;
        self.stake_vault = stake_vault;
        self.reward_chest = reward_chest;
        self.total_staked = 0;
        self.acc_reward_per_share = 0;
        self.last_accrual_time = now;
        self.reward_rate_per_second = reward_rate_per_second;
        self.total_rewards_paid = 0;
        self.staker_count = 0;
        self.initialized = true;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    /// Owner-only. Returns whether the caller set changed.
    pub fn set_authorized(&mut self, signer: &Pubkey, caller: Pubkey, enabled: bool) -> Result<bool> {
        require!(self.access.is_owner(signer), StakingError::Unauthorized);
        let changed = self
            .access
            .set_member(caller, enabled)
            .map_err(StakingError::from)?;
        Ok(changed)
    }

    /// Owner-only. Returns the previous owner.
    pub fn transfer_ownership(&mut self, signer: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require!(self.access.is_owner(signer), StakingError::Unauthorized);
        let previous = self
            .access
            .transfer_ownership(new_owner)
            .map_err(|_| StakingError::InvalidOwner)?;
        Ok(previous)
    }

    /// Owner-only. Accrues at the old rate up to `now`, then switches.
    /// Returns the old rate.
    pub fn set_reward_rate(&mut self, signer: &Pubkey, reward_rate_per_second: u64, now: i64) -> Result<u64> {
        require!(self.access.is_owner(signer), StakingError::Unauthorized);
        self.accrue(now)?;
        let old_rate = self.reward_rate_per_second;
        self.reward_rate_per_second = reward_rate_per_second;
        Ok(old_rate)
    }

    /// Amount an authorized `caller` may force out of `position`
    pub fn forced_withdrawal_amount(&self, caller: &Pubkey, position: &UserPosition) -> Result<u64> {
        require!(self.access.is_member(caller), StakingError::Unauthorized);
        Ok(position.staked_amount)
    }

    /// Accumulator projected to `now` without mutating the pool
    pub fn reward_per_share_at(&self, now: i64) -> Result<u128> {
        math::reward_per_share_at(
            self.acc_reward_per_share,
            self.last_accrual_time,
            now,
            self.reward_rate_per_second,
            self.total_staked,
        )
    }

    /// Bring the accumulator forward to `now`
    pub fn accrue(&mut self, now: i64) -> Result<()> {
        self.acc_reward_per_share = self.reward_per_share_at(now)?;
        self.last_accrual_time = now;
        Ok(())
    }

    /// Settle `position` at `now` and apply `change` to it.
    ///
    /// Every check happens here; nothing is written.
    pub fn plan(&self, position: &UserPosition, change: StakeChange, now: i64) -> Result<PositionUpdate> {
        let acc_reward_per_share = self.reward_per_share_at(now)?;
        let payout = math::pending_reward(
            position.staked_amount,
            acc_reward_per_share,
            position.reward_debt,
        )?;

        let (staked_amount, total_staked) = match change {
            StakeChange::Deposit(amount) => {
                require!(amount > 0, StakingError::InvalidAmount);
                (
                    position
                        .staked_amount
                        .checked_add(amount)
                        .ok_or(StakingError::MathOverflow)?,
                    self.total_staked
                        .checked_add(amount)
                        .ok_or(StakingError::MathOverflow)?,
                )
            }
            StakeChange::Withdraw(amount) => {
                require!(amount > 0, StakingError::InvalidAmount);
                require!(
                    amount <= position.staked_amount,
                    StakingError::InsufficientStake
                );
                (
                    position.staked_amount - amount,
                    self.total_staked
                        .checked_sub(amount)
                        .ok_or(StakingError::MathOverflow)?,
                )
            }
            StakeChange::Hold => (position.staked_amount, self.total_staked),
        };

        let reward_debt = math::accumulated_reward(staked_amount, acc_reward_per_share)?;
        let pending_withdrawn = position
            .pending_withdrawn
            .checked_add(payout)
            .ok_or(StakingError::MathOverflow)?;

        Ok(PositionUpdate {
            now,
            acc_reward_per_share,
            payout,
            staked_amount,
            reward_debt,
            pending_withdrawn,
            total_staked,
            total_rewards_paid: self.total_rewards_paid.saturating_add(payout),
        })
    }

    /// Write a plan produced by `plan` for the same position
    pub fn commit(&mut self, position: &mut UserPosition, update: &PositionUpdate) {
        let was_staked = position.staked_amount > 0;
        let is_staked = update.staked_amount > 0;
        if !was_staked && is_staked {
            self.staker_count = self.staker_count.saturating_add(1);
        } else if was_staked && !is_staked {
            self.staker_count = self.staker_count.saturating_sub(1);
        }

        self.acc_reward_per_share = update.acc_reward_per_share;
        self.last_accrual_time = update.now;
        self.total_staked = update.total_staked;
        self.total_rewards_paid = update.total_rewards_paid;

        position.staked_amount = update.staked_amount;
        position.reward_debt = update.reward_debt;
        position.pending_withdrawn = update.pending_withdrawn;
        position.last_action_at = update.now;
    }

    /// Live view of a position at `now`; a missing position reads as zero
    pub fn user_info(&self, position: Option<&UserPosition>, now: i64) -> Result<UserInfo> {
        let Some(position) = position else {
            return Ok(UserInfo::default());
        };

        let acc_reward_per_share = self.reward_per_share_at(now)?;
        let pending_reward = math::pending_reward(
            position.staked_amount,
            acc_reward_per_share,
            position.reward_debt,
        )?;

        Ok(UserInfo {
            staked_amount: position.staked_amount,
            pending_reward,
            pending_withdrawn: position.pending_withdrawn,
        })
    }
}
