use anchor_lang::prelude::*;
use crate::state::{CellCoord, LandCell};

/// Creates one cell of the parcel index. A parcel can only be registered
/// once every cell it touches exists.
#[derive(Accounts)]
#[instruction(row: u32, col: u32)]
pub struct CreateLandCell<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = LandCell::SIZE,
        seeds = [LandCell::SEED, &row.to_le_bytes(), &col.to_le_bytes()],
        bump
    )]
    pub land_cell: AccountLoader<'info, LandCell>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateLandCell>, row: u32, col: u32) -> Result<()> {
    CellCoord::new(row, col).validate()?;

    // Entries are already zeroed from account creation
    let mut cell = ctx.accounts.land_cell.load_init()?;
    cell.row = row;
    cell.col = col;
    cell.bump = ctx.bumps.land_cell;

    msg!("LandCell ({}, {}) initialized at {}", row, col, ctx.accounts.land_cell.key());
    Ok(())
}
