use anchor_lang::prelude::*;
use crate::collaborators::Signers;
use crate::errors::RegistryError;
use crate::state::{AssetRecord, Land, Placement, Registry, Transform, EXTERNAL_ID_LEN};

#[derive(Accounts)]
#[instruction(land_id: u64, external_id: String)]
pub struct PlaceExternalAsset<'info> {
    /// Owner of the land, pays for the placement and asset storage
    #[account(
        mut,
        constraint = external_id.len() <= EXTERNAL_ID_LEN @ RegistryError::InvalidAssetId
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        seeds = [Land::SEED, &land_id.to_le_bytes()],
        bump,
    )]
    pub land: Option<Account<'info, Land>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + AssetRecord::INIT_SPACE,
        seeds = [AssetRecord::SEED, owner.key().as_ref(), external_id.as_bytes()],
        bump
    )]
    pub asset: Account<'info, AssetRecord>,

    #[account(
        init,
        payer = owner,
        space = 8 + Placement::INIT_SPACE,
        seeds = [Placement::SEED, &registry.next_placement_id.to_le_bytes()],
        bump
    )]
    pub placement: Account<'info, Placement>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<PlaceExternalAsset>,
    land_id: u64,
    external_id: String,
    transform: Transform,
) -> Result<()> {
    let signers = Signers::new([ctx.accounts.owner.key()]);
    let mut placement = ctx.accounts.registry.place_external_asset(
        &signers,
        ctx.accounts.land.as_deref(),
        &mut ctx.accounts.asset,
        &external_id,
        transform,
    )?;
    ctx.accounts.asset.bump = ctx.bumps.asset;
    placement.bump = ctx.bumps.placement;
    let placement_id = placement.id;
    ctx.accounts.placement.set_inner(placement);

    msg!("Placement {} of {} created on land {}", placement_id, external_id, land_id);
    Ok(())
}
