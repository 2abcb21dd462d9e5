use anchor_lang::prelude::*;
use crate::state::Registry;
use crate::errors::RegistryError;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        constraint = authority.key() == registry.authority @ RegistryError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    fee_per_square_meter: Option<u64>,
    treasury: Option<Pubkey>,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    if let Some(fee) = fee_per_square_meter {
        registry.fee_per_square_meter = fee;
        msg!("Updated fee_per_square_meter to {}", fee);
    }

    if let Some(treasury) = treasury {
        registry.treasury = treasury;
        msg!("Updated treasury to {}", treasury);
    }

    Ok(())
}
