use anchor_lang::prelude::*;

pub mod errors;
pub mod utils;
pub mod geo;
pub mod fee;
pub mod collaborators;
pub mod state;
pub mod instructions;

use instructions::*;
use geo::LandBounds;
use state::Transform;

declare_id!("GLoBEx5pWqT4d7uR3CmJZ9hN2sVbKfYe8aPQ6LrtHw1D");

#[program]
pub mod globe_registry {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        fee_per_square_meter: u64,
        treasury: Pubkey,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, fee_per_square_meter, treasury)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        fee_per_square_meter: Option<u64>,
        treasury: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, fee_per_square_meter, treasury)
    }

    pub fn create_land_cell(ctx: Context<CreateLandCell>, row: u32, col: u32) -> Result<()> {
        instructions::create_land_cell::handler(ctx, row, col)
    }

    pub fn open_deposit(ctx: Context<OpenDeposit>) -> Result<()> {
        instructions::open_deposit::handler(ctx)
    }

    pub fn deposit(ctx: Context<DepositTokens>, amount: u64, memo: String) -> Result<()> {
        instructions::deposit::handler(ctx, amount, memo)
    }

    pub fn close_deposit(ctx: Context<CloseDeposit>) -> Result<()> {
        instructions::close_deposit::handler(ctx)
    }

    pub fn register_land<'info>(
        ctx: Context<'_, '_, 'info, 'info, RegisterLand<'info>>,
        bounds: LandBounds,
    ) -> Result<()> {
        instructions::register_land::handler(ctx, bounds)
    }

    pub fn place_external_asset(
        ctx: Context<PlaceExternalAsset>,
        land_id: u64,
        external_id: String,
        transform: Transform,
    ) -> Result<()> {
        instructions::place_external_asset::handler(ctx, land_id, external_id, transform)
    }

    pub fn update_placement(
        ctx: Context<UpdatePlacement>,
        placement_id: u64,
        new_land_id: u64,
        transform: Transform,
    ) -> Result<()> {
        instructions::update_placement::handler(ctx, placement_id, new_land_id, transform)
    }

    pub fn delete_placement(ctx: Context<DeletePlacement>, placement_id: u64) -> Result<()> {
        instructions::delete_placement::handler(ctx, placement_id)
    }
}
