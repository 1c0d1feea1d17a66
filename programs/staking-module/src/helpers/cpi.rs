use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

/// Pull `amount` of reward from the chest to `recipient`.
/// `global_pool` signs as the chest module via `seeds`.
#[inline(never)]
pub fn pull_reward_cpi<'info>(
    reward_chest_program: &AccountInfo<'info>,
    reward_chest: &AccountInfo<'info>,
    chest_vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    global_pool: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    seeds: &[&[u8]],
    amount: u64,
) -> Result<()> {
    let signer_seeds = &[seeds];
    let cpi_accounts = reward_chest::cpi::accounts::Pull {
        chest: reward_chest.to_account_info(),
        vault: chest_vault.to_account_info(),
        recipient: recipient.to_account_info(),
        module: global_pool.to_account_info(),
        token_program: token_program.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        reward_chest_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    reward_chest::cpi::pull(cpi_ctx, amount)
}

/// Move staked principal out of the stake vault, signed by the pool PDA
#[inline(never)]
pub fn release_principal_cpi<'info>(
    stake_vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    global_pool: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    seeds: &[&[u8]],
    amount: u64,
) -> Result<()> {
    let signer_seeds = &[seeds];
    let cpi_accounts = Transfer {
        from: stake_vault.to_account_info(),
        to: recipient.to_account_info(),
        authority: global_pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)
}
