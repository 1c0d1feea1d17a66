use anchor_lang::prelude::*;

/// Maximum number of members a registry can hold
pub const MAX_MEMBERS: usize = 8;

/// Owner plus a bounded set of authorized members.
///
/// Embedded in the reward chest (members = modules allowed to pull funds)
/// and in the staking pool (members = callers allowed to force withdrawals).
/// `Pubkey::default()` marks an empty slot, so the default key is never a
/// valid owner or member.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationRegistry {
    /// Administrative address, the only one allowed to mutate `members`
    pub owner: Pubkey,

    /// Authorized members ([] so the account size stays fixed)
    pub members: [Pubkey; MAX_MEMBERS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Every member slot is taken
    Full,
    /// The default key cannot be an owner or member
    NullAddress,
}

impl AuthorizationRegistry {
    pub const SIZE: usize = 32 + // owner
        32 * MAX_MEMBERS; // members

    pub fn new(owner: Pubkey) -> Self {
        Self {
            owner,
            members: [Pubkey::default(); MAX_MEMBERS],
        }
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        *key != Pubkey::default() && self.owner == *key
    }

    pub fn is_member(&self, key: &Pubkey) -> bool {
        *key != Pubkey::default() && self.members.iter().any(|m| m == key)
    }

    pub fn member_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| **m != Pubkey::default())
            .count()
    }

    /// Add or remove `member`. Returns whether membership changed; asking for
    /// the state a member is already in is not an error.
    pub fn set_member(&mut self, member: Pubkey, enabled: bool) -> std::result::Result<bool, RegistryError> {
        if member == Pubkey::default() {
            return Err(RegistryError::NullAddress);
        }

        let existing = self.members.iter().position(|m| *m == member);
        match (existing, enabled) {
            (Some(_), true) | (None, false) => Ok(false),
            (Some(idx), false) => {
                self.members[idx] = Pubkey::default();
                Ok(true)
            }
            (None, true) => {
                let free = self
                    .members
                    .iter()
                    .position(|m| *m == Pubkey::default())
                    .ok_or(RegistryError::Full)?;
                self.members[free] = member;
                Ok(true)
            }
        }
    }

    /// Hand the registry to `new_owner`, effective immediately
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> std::result::Result<Pubkey, RegistryError> {
        if new_owner == Pubkey::default() {
            return Err(RegistryError::NullAddress);
        }
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }
}
