use anchor_lang::prelude::*;
use crate::collaborators::Signers;
use crate::state::{Land, Placement, Registry, Transform};

/// Moving a placement onto land of another owner needs that owner as an
/// extra signer in `remaining_accounts`.
#[derive(Accounts)]
#[instruction(placement_id: u64, new_land_id: u64)]
pub struct UpdatePlacement<'info> {
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

    /// Parcel the placement sits on now, checked against the placement
    pub current_land: Option<Account<'info, Land>>,

    #[account(
        seeds = [Land::SEED, &new_land_id.to_le_bytes()],
        bump,
    )]
    pub new_land: Option<Account<'info, Land>>,
}

pub fn handler(
    ctx: Context<UpdatePlacement>,
    placement_id: u64,
    new_land_id: u64,
    transform: Transform,
) -> Result<()> {
    let signers = Signers::from_accounts(ctx.accounts.owner.key(), ctx.remaining_accounts);
    ctx.accounts.registry.update_placement(
        &signers,
        ctx.accounts.placement.as_deref_mut(),
        ctx.accounts.current_land.as_deref(),
        ctx.accounts.new_land.as_deref(),
        transform,
    )?;

    msg!("Placement {} updated on land {}", placement_id, new_land_id);
    Ok(())
}
