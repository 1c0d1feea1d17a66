// ══════════════════════════════════════════════════════════════════════════════
// ACCRUAL
// ══════════════════════════════════════════════════════════════════════════════

/// Fixed-point scale of `acc_reward_per_share`
pub const SCALE: u128 = 1_000_000_000_000; // 1e12

// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

pub const GLOBAL_POOL_SEED: &[u8] = b"global-pool";
pub const STAKE_VAULT_SEED: &[u8] = b"stake-vault";
pub const USER_POSITION_SEED: &[u8] = b"user-position";
