use anchor_lang::prelude::*;

use crate::authorization::AuthorizationRegistry;
use crate::errors::ChestError;

/// Reward fund pool
/// PDA: ["reward-chest"]
#[account]
#[derive(Default)]
pub struct Chest {
    /// Owner and the modules allowed to pull funds
    pub access: AuthorizationRegistry,

    /// Token held by the chest
    pub mint: Pubkey,

    /// Token account holding the funds
    /// PDA: ["chest-vault", chest], authority = chest
    pub vault: Pubkey,

    /// Total tokens deposited through `fund`
    pub total_funded: u64,

    /// Total tokens pulled by modules
    pub total_pulled: u64,

    /// Set once by `initialize`
    pub initialized: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed for the vault PDA
    pub vault_bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl Chest {
    pub const SIZE: usize = 8 + // discriminator
        AuthorizationRegistry::SIZE + // access
        32 + // mint
        32 + // vault
        8 +  // total_funded
        8 +  // total_pulled
        1 +  // initialized
        1 +  // bump
        1 +  // vault_bump
        32;  // reserved

    /// One-time setup; a second call fails whatever mint it names
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        vault: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.initialized, ChestError::AlreadyInitialized);
        require_keys_neq!(owner, Pubkey::default(), ChestError::InvalidOwner);

        self.access = AuthorizationRegistry::new(owner);
        self.mint = mint;
        self.vault = vault;
        self.total_funded = 0;
        self.total_pulled = 0;
        self.initialized = true;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    /// Owner-only. Returns whether the module set changed.
    pub fn toggle_module(&mut self, signer: &Pubkey, module: Pubkey, enabled: bool) -> Result<bool> {
        require!(self.access.is_owner(signer), ChestError::Unauthorized);
        let changed = self
            .access
            .set_member(module, enabled)
            .map_err(ChestError::from)?;
        Ok(changed)
    }

    /// Owner-only. Returns the previous owner.
    pub fn transfer_ownership(&mut self, signer: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require!(self.access.is_owner(signer), ChestError::Unauthorized);
        let previous = self
            .access
            .transfer_ownership(new_owner)
            .map_err(|_| ChestError::InvalidOwner)?;
        Ok(previous)
    }

    /// Validate a pull of `amount` by `module` against a vault holding `available`
    pub fn check_pull(&self, module: &Pubkey, amount: u64, available: u64) -> Result<()> {
        require!(self.access.is_member(module), ChestError::Unauthorized);
        require!(amount > 0, ChestError::InvalidAmount);
        require!(available >= amount, ChestError::InsufficientFunds);
        Ok(())
    }

    /// Record a completed pull
    pub fn record_pull(&mut self, amount: u64) -> Result<()> {
        self.total_pulled = self
            .total_pulled
            .checked_add(amount)
            .ok_or(ChestError::Overflow)?;
        Ok(())
    }
}

/// Seeds
pub const CHEST_SEED: &[u8] = b"reward-chest";
pub const CHEST_VAULT_SEED: &[u8] = b"chest-vault";
