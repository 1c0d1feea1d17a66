use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::SCALE;
use crate::errors::StakingError;

/// Accumulator value at `now`.
///
/// Shared by the mutating accrual path and the read-only projection:
/// acc + (now - last) * rate * SCALE / total_staked
///
/// Nothing accrues while `total_staked == 0`.
pub fn reward_per_share_at(
    acc_reward_per_share: u128,
    last_accrual_time: i64,
    now: i64,
    reward_rate_per_second: u64,
    total_staked: u64,
) -> Result<u128> {
    require!(now >= last_accrual_time, StakingError::InvalidTimestamp);

    if total_staked == 0 {
        return Ok(acc_reward_per_share);
    }

    let elapsed = (now - last_accrual_time) as u128;

    #[cfg(feature = "verbose")]
    msg!("accrue: elapsed={}, rate={}, total_staked={}", elapsed, reward_rate_per_second, total_staked);

    let increase = elapsed
        .checked_mul(reward_rate_per_second as u128)
        .and_then(|v| v.checked_mul(SCALE))
        .ok_or(StakingError::MathOverflow)?
        / (total_staked as u128);

    let acc = acc_reward_per_share
        .checked_add(increase)
        .ok_or(StakingError::MathOverflow)?;

    #[cfg(feature = "verbose")]
    msg!("accrue: acc_reward_per_share {} -> {}", acc_reward_per_share, acc);

    Ok(acc)
}

/// staked * acc / SCALE, the reward a stake has earned since inception.
///
/// `acc` grows fastest while only dust is staked, so the product is taken in
/// 256 bits and only the quotient has to fit in u128.
pub fn accumulated_reward(staked_amount: u64, acc_reward_per_share: u128) -> Result<u128> {
    let product = U256::from(staked_amount)
        .checked_mul(U256::from(acc_reward_per_share))
        .ok_or(StakingError::MathOverflow)?;
    let accumulated = product / U256::from(SCALE);
    require!(
        accumulated <= U256::from(u128::MAX),
        StakingError::MathOverflow
    );
    Ok(accumulated.as_u128())
}

/// Reward earned since the last checkpoint
pub fn pending_reward(staked_amount: u64, acc_reward_per_share: u128, reward_debt: u128) -> Result<u64> {
    let accumulated = accumulated_reward(staked_amount, acc_reward_per_share)?;
    let pending = accumulated
        .checked_sub(reward_debt)
        .ok_or(StakingError::MathOverflow)?;
    u64::try_from(pending).map_err(|_| error!(StakingError::MathOverflow))
}
