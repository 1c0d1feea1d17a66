use anchor_lang::prelude::*;

pub mod authorization;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;


use instructions::*;

declare_id!("ChestRwd111111111111111111111111111111111111");

/// Reward Chest Program
///
/// Holds the reward token and lets only authorized modules
/// (e.g. the staking module's pool PDA) pull funds out of it.
#[program]
pub mod reward_chest {
    use super::*;

    /// One-time setup: binds the reward mint and records the owner
    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, owner)
    }

    /// Deposit reward tokens into the chest (permissionless)
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund::handler(ctx, amount)
    }

    /// Authorize or deauthorize a module (owner only)
    pub fn toggle_module(ctx: Context<ToggleModule>, module: Pubkey, enabled: bool) -> Result<()> {
        instructions::toggle_module::handler(ctx, module, enabled)
    }

    /// Pull funds to a recipient (authorized modules only)
    pub fn pull(ctx: Context<Pull>, amount: u64) -> Result<()> {
        instructions::pull::handler(ctx, amount)
    }

    /// Hand the chest to a new owner (owner only)
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }
}
