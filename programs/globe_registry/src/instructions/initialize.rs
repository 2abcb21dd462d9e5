use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::errors::RegistryError;
use crate::fee::TOKEN_DECIMALS;
use crate::state::{Registry, VAULT_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Deposit currency - supports both Token and Token-2022
    #[account(
        constraint = token_mint.decimals == TOKEN_DECIMALS @ RegistryError::InvalidMint
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = 8 + Registry::INIT_SPACE,
        seeds = [Registry::SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// Vault holding all deposits, owned by the registry PDA
    #[account(
        init,
        payer = authority,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = registry,
        token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    fee_per_square_meter: u64,
    treasury: Pubkey,
) -> Result<()> {
    let registry_key = ctx.accounts.registry.key();
    let registry = &mut ctx.accounts.registry;

    registry.authority = ctx.accounts.authority.key();
    registry.vault_authority = registry_key;
    registry.token_mint = ctx.accounts.token_mint.key();
    registry.vault = ctx.accounts.vault.key();
    registry.treasury = treasury;
    registry.fee_per_square_meter = fee_per_square_meter;
    registry.bump = ctx.bumps.registry;
    registry.vault_bump = ctx.bumps.vault;
    // Id counters start at zero

    msg!(
        "Registry initialized with fee {} per square meter, treasury {}",
        fee_per_square_meter,
        treasury
    );
    Ok(())
}
