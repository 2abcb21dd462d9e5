use anchor_lang::prelude::*;

use crate::collaborators::Authorizer;
use crate::errors::RegistryError;
use crate::geo::LandBounds;

pub const SECONDS_IN_ONE_YEAR: i64 = 60 * 60 * 24 * 365;

/// A registered parcel, one PDA per land id
#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Land {
    pub id: u64,
    pub owner: Pubkey,
    pub lat_north: f64,
    pub lat_south: f64,
    pub long_east: f64,
    pub long_west: f64,
    /// Unix timestamp the registration runs out. Recorded, not enforced.
    pub expires_at: i64,
    pub bump: u8,
}

impl Land {
    pub const SEED: &'static [u8] = b"land";

    pub fn new(id: u64, owner: Pubkey, bounds: &LandBounds, now: i64) -> Self {
        Self {
            id,
            owner,
            lat_north: bounds.north,
            lat_south: bounds.south,
            long_east: bounds.east,
            long_west: bounds.west,
            expires_at: now.saturating_add(SECONDS_IN_ONE_YEAR),
            bump: 0,
        }
    }

    /// Fails unless the caller controls the owner of this parcel
    pub fn require_owner(&self, auth: &impl Authorizer) -> Result<Pubkey> {
        auth.require_auth(&self.owner)?;
        Ok(self.owner)
    }
}

/// The parcel behind an optional account, `UnknownLand` when it was not passed
pub fn existing_land(land: Option<&Land>) -> Result<&Land> {
    land.ok_or_else(|| error!(RegistryError::UnknownLand))
}

#[cfg(test)]
impl Land {
    pub fn bounds(&self) -> LandBounds {
        LandBounds::new(self.lat_north, self.long_east, self.lat_south, self.long_west)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::Signers;
    use crate::errors::assert_error;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_new_stamps_expiry() {
        let owner = Pubkey::new_unique();
        let bounds = LandBounds::new(10.0005, 9.0005, 10.0, 9.0);
        let land = Land::new(3, owner, &bounds, NOW);

        assert_eq!(land.id, 3);
        assert_eq!(land.expires_at, NOW + SECONDS_IN_ONE_YEAR);
        assert_eq!(land.bounds(), bounds);
        assert_eq!(Land::new(0, owner, &bounds, i64::MAX).expires_at, i64::MAX);
    }

    #[test]
    fn test_unknown_land_and_owner_checks() {
        let owner = Pubkey::new_unique();
        let land = Land::new(0, owner, &LandBounds::new(10.0005, 9.0005, 10.0, 9.0), NOW);

        assert_eq!(existing_land(Some(&land)).unwrap().id, 0);
        assert_error(existing_land(None), RegistryError::UnknownLand);

        assert_eq!(land.require_owner(&Signers::new([owner])).unwrap(), owner);
        let stranger = Signers::new([Pubkey::new_unique()]);
        assert_error(land.require_owner(&stranger), RegistryError::Unauthorized);
    }
}
