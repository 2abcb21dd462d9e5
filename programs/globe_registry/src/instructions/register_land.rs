use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    Mint as InterfaceMint, TokenAccount as InterfaceTokenAccount, TokenInterface,
};
use crate::collaborators::{Signers, VaultTransfer};
use crate::errors::RegistryError;
use crate::geo::LandBounds;
use crate::state::{Deposit, Land, LandCell, Registry, VAULT_SEED};

/// Every `LandCell` the parcel touches is passed writable in
/// `remaining_accounts`.
#[derive(Accounts)]
pub struct RegisterLand<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [Deposit::SEED, owner.key().as_ref()],
        bump,
    )]
    pub deposit: Option<Account<'info, Deposit>>,

    #[account(
        init,
        payer = owner,
        space = 8 + Land::INIT_SPACE,
        seeds = [Land::SEED, &registry.next_land_id.to_le_bytes()],
        bump
    )]
    pub land: Account<'info, Land>,

    /// Token mint must match the one in the registry
    #[account(
        constraint = token_mint.key() == registry.token_mint @ RegistryError::WrongMint
    )]
    pub token_mint: InterfaceAccount<'info, InterfaceMint>,

    /// Vault the fee is paid out of
    #[account(
        mut,
        seeds = [VAULT_SEED, registry.key().as_ref()],
        bump = registry.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, InterfaceTokenAccount>,

    /// Token account of the treasury, receives the fee
    #[account(
        mut,
        constraint = treasury_token_account.owner == registry.treasury @ RegistryError::InvalidTreasury,
        constraint = treasury_token_account.mint == registry.token_mint @ RegistryError::WrongMint,
    )]
    pub treasury_token_account: InterfaceAccount<'info, InterfaceTokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, RegisterLand<'info>>,
    bounds: LandBounds,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let loaders = ctx
        .remaining_accounts
        .iter()
        .map(AccountLoader::<LandCell>::try_from)
        .collect::<Result<Vec<_>>>()?;
    // Passing the same cell twice fails here on the second borrow
    let mut loaded = loaders
        .iter()
        .map(|loader| loader.load_mut())
        .collect::<Result<Vec<_>>>()?;
    let mut cells: Vec<&mut LandCell> = loaded.iter_mut().map(|cell| &mut **cell).collect();

    // Get the registry bump for PDA signing
    let bump = ctx.accounts.registry.bump;
    let seeds: &[&[u8]] = &[Registry::SEED, &[bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let mut transfer = VaultTransfer {
        token_program: ctx.accounts.token_program.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        vault_authority: ctx.accounts.registry.to_account_info(),
        destination: ctx.accounts.treasury_token_account.to_account_info(),
        destination_owner: ctx.accounts.registry.treasury,
        decimals: ctx.accounts.token_mint.decimals,
        signer_seeds,
    };

    let mut land = ctx.accounts.registry.register_land(
        &Signers::new([owner]),
        &mut transfer,
        &mut cells,
        ctx.accounts.deposit.as_deref_mut(),
        owner,
        bounds,
        now,
    )?;
    land.bump = ctx.bumps.land;
    ctx.accounts.land.set_inner(land);

    Ok(())
}
