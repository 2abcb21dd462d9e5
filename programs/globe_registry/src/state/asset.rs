use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::state::{CompositeKey, PlacementSource};

/// Length of an external asset identifier
pub const EXTERNAL_ID_LEN: usize = 11;

/// Placements one asset record can index
pub const MAX_ASSET_PLACEMENTS: usize = 64;

/// An externally hosted asset as referred to by one owner. PDA seeded by the
/// owner and the external id, so each (owner, external id) pair has exactly
/// one record.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct AssetRecord {
    pub id: u64,
    pub owner: Pubkey,
    #[max_len(11)]
    pub external_id: String,
    /// Ids of the placements carrying this asset's composite key: the
    /// composite key index entries for that key
    #[max_len(64)]
    pub placements: Vec<u64>,
    pub bump: u8,
}

pub fn validate_external_id(external_id: &str) -> Result<()> {
    require!(external_id.len() == EXTERNAL_ID_LEN, RegistryError::InvalidAssetId);
    Ok(())
}

impl AssetRecord {
    pub const SEED: &'static [u8] = b"asset";

    pub fn is_created(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn key(&self) -> CompositeKey {
        CompositeKey::pack(PlacementSource::External, self.id)
    }

    /// True while any placement carries this asset's composite key
    pub fn is_referenced(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Id `owner` refers to `external_id` by: the record's own id once it
    /// exists, `next_id` for a record about to be created. Owners never
    /// share a record, so the same external id gets a distinct id per owner.
    pub fn resolve_id(&self, owner: &Pubkey, external_id: &str, next_id: u64) -> Result<u64> {
        validate_external_id(external_id)?;
        if !self.is_created() {
            return Ok(next_id);
        }
        require!(
            self.owner == *owner && self.external_id == external_id,
            RegistryError::AssetMismatch
        );
        Ok(self.id)
    }

    pub fn require_room(&self) -> Result<()> {
        require!(
            self.placements.len() < MAX_ASSET_PLACEMENTS,
            RegistryError::AssetPlacementLimit
        );
        Ok(())
    }

    /// Index `placement_id` under this asset, filling in the record on first use.
    /// `id` comes from `resolve_id`.
    pub fn add_placement(&mut self, id: u64, owner: Pubkey, external_id: &str, placement_id: u64) {
        if !self.is_created() {
            self.id = id;
            self.owner = owner;
            self.external_id = external_id.to_string();
        }
        self.placements.push(placement_id);
    }

    /// Drop the index entry of `placement_id`. Returns true once no
    /// placement carries the key any more and the record should be deleted.
    pub fn delete_if_unreferenced(&mut self, placement_id: u64) -> bool {
        self.placements.retain(|id| *id != placement_id);
        if self.is_referenced() {
            return false;
        }
        msg!("Asset {} ({}) released", self.id, self.external_id);
        true
    }
}
