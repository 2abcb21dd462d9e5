use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    // Invalid geometry
    #[msg("North edge must have greater latitude than south edge")]
    NorthEdgeNotAboveSouth,

    #[msg("East edge must have greater longitude than west edge")]
    EastEdgeNotAboveWest,

    #[msg("Latitude must be between -85 and 85 degrees")]
    LatitudeOutOfRange,

    #[msg("Longitude must be between -180 and 180 degrees")]
    LongitudeOutOfRange,

    #[msg("Land cannot exceed a length of 100 meters on either side")]
    LandTooLarge,

    #[msg("Intersecting land has already been registered")]
    LandOverlap,

    #[msg("Land Id does not exist")]
    UnknownLand,

    #[msg("Placement Id does not exist")]
    UnknownPlacement,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("User does not have a deposit opened")]
    NoDeposit,

    #[msg("User's deposit balance is too low")]
    InsufficientBalance,

    #[msg("External asset Id format is invalid")]
    InvalidAssetId,

    // Out of bounds placement
    #[msg("Asset position is not within land bounds")]
    PositionOutOfBounds,

    #[msg("Asset orientation must be within 0 and 360")]
    OrientationOutOfBounds,

    #[msg("Asset scale must be at least 0.2")]
    ScaleOutOfBounds,

    #[msg("The token mint does not match")]
    WrongMint,

    #[msg("The amount must be positive")]
    NonPositiveAmount,

    #[msg("Token mint must have 4 decimals")]
    InvalidMint,

    #[msg("Treasury token account does not belong to the treasury")]
    InvalidTreasury,

    #[msg("Transfer destination does not match")]
    InvalidDestination,

    #[msg("Land account does not match the placement")]
    LandMismatch,

    #[msg("Asset account does not match the placement")]
    AssetMismatch,

    #[msg("Asset is placed too many times")]
    AssetPlacementLimit,

    #[msg("A land cell covering the parcel is missing")]
    MissingLandCell,

    #[msg("Land cell is full")]
    LandCellFull,

    #[msg("Land cell is outside the globe")]
    InvalidLandCell,

    #[msg("Arithmetic overflow")]
    Overflow,
}

#[cfg(test)]
pub(crate) fn error_code<T: std::fmt::Debug>(result: Result<T>) -> u32 {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => e.error_code_number,
        Err(anchor_lang::error::Error::ProgramError(e)) => panic!("expected an anchor error, got {:?}", e),
        Ok(value) => panic!("expected an error, got Ok({:?})", value),
    }
}

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: RegistryError) {
    assert_eq!(error_code(result), u32::from(expected), "expected {}", expected);
}
