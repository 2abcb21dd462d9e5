use anchor_lang::prelude::*;

use crate::errors::RegistryError;

/// Smallest scale an object can be shown at
pub const MIN_SCALE: f64 = 0.2;

pub const FULL_TURN_DEGREES: f64 = 360.0;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Where an object sits on its parcel. Position is relative to the parcel
/// footprint: x and z run from 0 to 1 across it, y is the ground plane.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vector3,
    pub orientation: Vector3,
    pub scale: Vector3,
}

impl Transform {
    pub fn new(position: Vector3, orientation: Vector3, scale: Vector3) -> Self {
        Self { position, orientation, scale }
    }

    pub fn validate(&self) -> Result<()> {
        let p = self.position;
        require!(
            p.x > 0.0 && p.x < 1.0 && p.y == 0.0 && p.z > 0.0 && p.z < 1.0,
            RegistryError::PositionOutOfBounds
        );
        require!(
            self.orientation
                .components()
                .iter()
                .all(|angle| *angle >= 0.0 && *angle < FULL_TURN_DEGREES),
            RegistryError::OrientationOutOfBounds
        );
        require!(
            self.scale.components().iter().all(|s| *s >= MIN_SCALE),
            RegistryError::ScaleOutOfBounds
        );
        Ok(())
    }
}

/// Kind of asset a placement refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PlacementSource {
    /// Externally hosted asset, deduplicated per owner in the asset table
    External = 0,
}

impl TryFrom<u8> for PlacementSource {
    type Error = u8;

    fn try_from(tag: u8) -> std::result::Result<Self, u8> {
        match tag {
            0 => Ok(PlacementSource::External),
            other => Err(other),
        }
    }
}

/// Source tag in the high 64 bits, asset id in the low 64 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey(pub u128);

impl CompositeKey {
    pub fn pack(source: PlacementSource, asset_id: u64) -> Self {
        Self(((source as u128) << 64) | asset_id as u128)
    }

    pub fn source_tag(&self) -> u8 {
        (self.0 >> 64) as u8
    }

    pub fn source(&self) -> Option<PlacementSource> {
        PlacementSource::try_from(self.source_tag()).ok()
    }

    pub fn asset_id(&self) -> u64 {
        self.0 as u64
    }
}

/// An object placed on a parcel, one PDA per placement id
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Placement {
    pub id: u64,
    pub land_id: u64,
    /// Packed `CompositeKey`
    pub composite_key: u128,
    pub transform: Transform,
    /// Paid the rent, refunded on delete
    pub payer: Pubkey,
    pub bump: u8,
}

impl Placement {
    pub const SEED: &'static [u8] = b"placement";

    pub fn key(&self) -> CompositeKey {
        CompositeKey(self.composite_key)
    }
}

/// The placement behind an optional account, `UnknownPlacement` when it was
/// not passed
pub fn existing_placement(placement: Option<&mut Placement>) -> Result<&mut Placement> {
    placement.ok_or_else(|| error!(RegistryError::UnknownPlacement))
}
