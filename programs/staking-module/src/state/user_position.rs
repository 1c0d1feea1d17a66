use anchor_lang::prelude::*;

/// Individual user's stake
/// PDA: ["user-position", global_pool, owner]
#[account]
#[derive(Default)]
pub struct UserPosition {
    /// Owner of this position
    pub owner: Pubkey,

    /// Tokens currently staked
    pub staked_amount: u64,

    /// staked_amount * acc_reward_per_share / SCALE at the last checkpoint
    pub reward_debt: u128,

    /// Cumulative rewards paid out to the owner
    pub pending_withdrawn: u64,

    /// Timestamp of the first deposit
    pub created_at: i64,

    /// Timestamp of the last settlement
    pub last_action_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 16],
}

impl UserPosition {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        8 +  // staked_amount
        16 + // reward_debt
        8 +  // pending_withdrawn
        8 +  // created_at
        8 +  // last_action_at
        1 +  // bump
        16;  // reserved

    /// A position created by `init_if_needed` that has never been set up
    pub fn is_fresh(&self) -> bool {
        self.owner == Pubkey::default()
    }

    /// Set up a lazily created position on its first deposit
    pub fn open(&mut self, owner: Pubkey, bump: u8, now: i64) {
        self.owner = owner;
        self.staked_amount = 0;
        self.reward_debt = 0;
        self.pending_withdrawn = 0;
        self.created_at = now;
        self.last_action_at = now;
        self.bump = bump;
    }
}

/// Read-only view returned by `get_current_user_info`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub staked_amount: u64,
    pub pending_reward: u64,
    pub pending_withdrawn: u64,
}
