use anchor_lang::prelude::*;
use crate::collaborators::Signers;
use crate::errors::RegistryError;
use crate::state::{AssetRecord, Land, Placement, Registry};

#[derive(Accounts)]
#[instruction(placement_id: u64)]
pub struct DeletePlacement<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [Placement::SEED, &placement_id.to_le_bytes()],
        bump,
    )]
    pub placement: Option<Account<'info, Placement>>,

    /// Parcel the placement sits on, checked against the placement
    pub land: Option<Account<'info, Land>>,

    /// Record of the placed asset, checked against the placement
    #[account(mut)]
    pub asset: Account<'info, AssetRecord>,

    /// CHECK: receives the placement rent, must be the account that paid it
    #[account(mut)]
    pub payer: UncheckedAccount<'info>,

    /// CHECK: receives the asset record rent once the last placement is gone
    #[account(
        mut,
        constraint = asset_owner.key() == asset.owner @ RegistryError::InvalidDestination
    )]
    pub asset_owner: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<DeletePlacement>, placement_id: u64) -> Result<()> {
    let signers = Signers::new([ctx.accounts.owner.key()]);
    let released = ctx.accounts.registry.delete_placement(
        &signers,
        ctx.accounts.placement.as_deref_mut(),
        ctx.accounts.land.as_deref(),
        &mut ctx.accounts.asset,
    )?;

    if let Some(placement) = &ctx.accounts.placement {
        require_keys_eq!(
            ctx.accounts.payer.key(),
            placement.payer,
            RegistryError::InvalidDestination
        );
        placement.close(ctx.accounts.payer.to_account_info())?;
    }
    if released {
        ctx.accounts
            .asset
            .close(ctx.accounts.asset_owner.to_account_info())?;
    }

    msg!("Placement {} deleted", placement_id);
    Ok(())
}
