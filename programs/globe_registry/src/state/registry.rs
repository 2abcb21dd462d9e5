use anchor_lang::prelude::*;

use crate::collaborators::{Authorizer, TokenTransfer};
use crate::errors::RegistryError;
use crate::fee::registration_fee;
use crate::geo::{validate_bounds, LandBounds};
use crate::state::{
    covering_cells, deposit_of, existing_land, existing_placement, AssetRecord, Deposit, Land,
    LandCell, Placement, PlacementSource, Transform,
};

pub const VAULT_SEED: &[u8] = b"vault";

/// Registry configuration and id counters.
///
/// Rows live in their own PDAs (`Land`, `Deposit`, `AssetRecord`,
/// `Placement`) and the overlap index in zero-copy `LandCell`s. Each
/// operation runs all of its checks, including the outgoing token transfer,
/// before it mutates any of them, so a failed operation leaves every record
/// as it found it.
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Registry {
    pub authority: Pubkey,
    /// This system's own principal: the registry PDA, owner of the vault
    pub vault_authority: Pubkey,
    pub token_mint: Pubkey,
    /// Token account holding every deposit
    pub vault: Pubkey,
    /// Receives registration fees
    pub treasury: Pubkey,
    pub fee_per_square_meter: u64,
    pub next_land_id: u64,
    pub next_asset_id: u64,
    pub next_placement_id: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

fn next_id(counter: u64) -> Result<u64> {
    require!(counter < u64::MAX, RegistryError::Overflow);
    Ok(counter)
}

impl Registry {
    pub const SEED: &'static [u8] = b"registry";

    /// Register a parcel for `owner`, paying the fee from their deposit.
    /// The fee is forwarded to the treasury. `cells` must hold every cell
    /// the parcel touches; the new parcel is indexed in each of them.
    #[allow(clippy::too_many_arguments)]
    pub fn register_land(
        &mut self,
        auth: &impl Authorizer,
        transfer: &mut impl TokenTransfer,
        cells: &mut [&mut LandCell],
        deposit: Option<&mut Deposit>,
        owner: Pubkey,
        bounds: LandBounds,
        now: i64,
    ) -> Result<Land> {
        auth.require_auth(&owner)?;

        let (bounds, size) = validate_bounds(&bounds)?;
        let touched = covering_cells(cells, &bounds)?;
        if let Some(existing) = touched.iter().find_map(|&i| cells[i].find_overlap(&bounds)) {
            msg!("Candidate intersects land {}", existing);
            return err!(RegistryError::LandOverlap);
        }
        require!(
            touched.iter().all(|&i| !cells[i].is_full()),
            RegistryError::LandCellFull
        );

        let fee = registration_fee(size, self.fee_per_square_meter)?;
        let deposit = deposit_of(deposit, &owner)?;
        deposit.require_balance(fee)?;
        let land_id = next_id(self.next_land_id)?;

        if fee > 0 {
            transfer.transfer(self.vault_authority, self.treasury, fee, "")?;
        }
        deposit.debit(fee)?;
        for &i in &touched {
            cells[i].insert(land_id, &bounds)?;
        }
        self.next_land_id = land_id + 1;

        msg!(
            "Land {} registered by {} ({:.1}m x {:.1}m), fee {}",
            land_id,
            owner,
            size.north_south,
            size.east_west,
            fee
        );
        Ok(Land::new(land_id, owner, &bounds, now))
    }

    /// Put an externally hosted asset on a parcel. The land owner must sign
    /// and becomes the owner of the asset record, which is created on first
    /// use. Returns the new placement.
    pub fn place_external_asset(
        &mut self,
        auth: &impl Authorizer,
        land: Option<&Land>,
        asset: &mut AssetRecord,
        external_id: &str,
        transform: Transform,
    ) -> Result<Placement> {
        let land = existing_land(land)?;
        let owner = land.require_owner(auth)?;
        transform.validate()?;

        let creating = !asset.is_created();
        let asset_id = asset.resolve_id(&owner, external_id, next_id(self.next_asset_id)?)?;
        asset.require_room()?;
        let placement_id = next_id(self.next_placement_id)?;

        asset.add_placement(asset_id, owner, external_id, placement_id);
        if creating {
            self.next_asset_id = asset_id + 1;
        }
        self.next_placement_id = placement_id + 1;

        Ok(Placement {
            id: placement_id,
            land_id: land.id,
            composite_key: asset.key().0,
            transform,
            payer: owner,
            bump: 0,
        })
    }

    /// Move or reorient a placement. Moving it to another parcel also needs
    /// the owner of that parcel to sign.
    pub fn update_placement(
        &self,
        auth: &impl Authorizer,
        placement: Option<&mut Placement>,
        current_land: Option<&Land>,
        new_land: Option<&Land>,
        transform: Transform,
    ) -> Result<()> {
        let placement = existing_placement(placement)?;
        let current_land = existing_land(current_land)?;
        require!(current_land.id == placement.land_id, RegistryError::LandMismatch);
        current_land.require_owner(auth)?;

        let new_land = existing_land(new_land)?;
        if new_land.id != current_land.id {
            new_land.require_owner(auth)?;
        }
        transform.validate()?;

        placement.land_id = new_land.id;
        placement.transform = transform;
        Ok(())
    }

    /// Remove a placement from its asset's index. Returns true when it was
    /// the last placement using the asset, whose record is then deleted too.
    pub fn delete_placement(
        &self,
        auth: &impl Authorizer,
        placement: Option<&mut Placement>,
        land: Option<&Land>,
        asset: &mut AssetRecord,
    ) -> Result<bool> {
        let placement = existing_placement(placement)?;
        let land = existing_land(land)?;
        require!(land.id == placement.land_id, RegistryError::LandMismatch);
        land.require_owner(auth)?;
        let key = placement.key();
        require!(
            asset.is_created()
                && key.source() == Some(PlacementSource::External)
                && key.asset_id() == asset.id,
            RegistryError::AssetMismatch
        );

        Ok(asset.delete_if_unreferenced(placement.id))
    }

    /// Returns true if a new deposit was created
    pub fn open_deposit(
        &self,
        auth: &impl Authorizer,
        deposit: &mut Deposit,
        owner: Pubkey,
        bump: u8,
    ) -> Result<bool> {
        auth.require_auth(&owner)?;
        Ok(deposit.open(owner, bump))
    }

    /// Refund the whole balance to `owner`, leaving the deposit empty for the
    /// caller to delete. Returns the refunded amount.
    pub fn close_deposit(
        &self,
        auth: &impl Authorizer,
        transfer: &mut impl TokenTransfer,
        deposit: Option<&mut Deposit>,
        owner: Pubkey,
    ) -> Result<u64> {
        auth.require_auth(&owner)?;
        let deposit = deposit_of(deposit, &owner)?;
        let balance = deposit.balance;

        if balance > 0 {
            transfer.transfer(self.vault_authority, owner, balance, "")?;
        }
        deposit.balance = 0;
        Ok(balance)
    }

    /// Credit an inbound token transfer to the sender's deposit. Transfers
    /// not addressed to the registry, or sent by the registry itself, are
    /// ignored. Returns true if a deposit was credited.
    pub fn notify_incoming_transfer(
        &self,
        deposit: Option<&mut Deposit>,
        from: Pubkey,
        to: Pubkey,
        mint: Pubkey,
        amount: u64,
        memo: &str,
    ) -> Result<bool> {
        if from == self.vault_authority || to != self.vault_authority {
            return Ok(false);
        }
        require_keys_eq!(mint, self.token_mint, RegistryError::WrongMint);
        require!(amount > 0, RegistryError::NonPositiveAmount);

        let balance = deposit_of(deposit, &from)?.credit(amount)?;
        if memo.is_empty() {
            msg!("Deposit of {} credited {}, balance {}", from, amount, balance);
        } else {
            msg!("Deposit of {} credited {}, balance {}: {}", from, amount, balance, memo);
        }
        Ok(true)
    }
}
