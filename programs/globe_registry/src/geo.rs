use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::utils::{
    meters_per_degree_long, normalize_zero, widest_latitude, METERS_PER_DEGREE_LAT,
};

/// Longest side a parcel may have, in meters
pub const MAX_LAND_LENGTH_METERS: f64 = 100.0;

/// Parcels are kept clear of the poles
pub const MAX_ABS_LATITUDE: f64 = 85.0;

pub const MAX_LONGITUDE: f64 = 180.0;

/// Edges of an axis-aligned latitude/longitude box, in degrees
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct LandBounds {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

/// Physical side lengths of a box, in meters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandSize {
    pub north_south: f64,
    pub east_west: f64,
}

impl LandBounds {
    pub fn new(north: f64, east: f64, south: f64, west: f64) -> Self {
        Self { north, east, south, west }
    }

    pub fn normalized(&self) -> Self {
        Self {
            north: normalize_zero(self.north),
            east: normalize_zero(self.east),
            south: normalize_zero(self.south),
            west: normalize_zero(self.west),
        }
    }

    /// Side lengths in meters. The east-west side is measured along the
    /// widest latitude of the box.
    pub fn size(&self) -> LandSize {
        let north_south = (self.north - self.south) * METERS_PER_DEGREE_LAT;
        let east_west =
            (self.east - self.west) * meters_per_degree_long(widest_latitude(self.north, self.south));
        LandSize { north_south, east_west }
    }

    /// True when the open interiors of the two boxes intersect.
    /// Boxes that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &LandBounds) -> bool {
        !(other.east <= self.west
            || other.west >= self.east
            || other.south >= self.north
            || other.north <= self.south)
    }
}

/// Normalize and validate a candidate parcel, returning it with its size.
/// Checks run in a fixed order and the first failure is reported.
pub fn validate_bounds(bounds: &LandBounds) -> Result<(LandBounds, LandSize)> {
    let b = bounds.normalized();

    require!(b.north > b.south, RegistryError::NorthEdgeNotAboveSouth);
    // No boxes across the antimeridian
    require!(b.east > b.west, RegistryError::EastEdgeNotAboveWest);
    require!(
        b.north < MAX_ABS_LATITUDE && b.south > -MAX_ABS_LATITUDE,
        RegistryError::LatitudeOutOfRange
    );
    require!(
        b.east <= MAX_LONGITUDE
            && b.east > -MAX_LONGITUDE
            && b.west <= MAX_LONGITUDE
            && b.west > -MAX_LONGITUDE,
        RegistryError::LongitudeOutOfRange
    );

    let size = b.size();
    require!(
        size.north_south <= MAX_LAND_LENGTH_METERS && size.east_west <= MAX_LAND_LENGTH_METERS,
        RegistryError::LandTooLarge
    );

    Ok((b, size))
}
