use anchor_lang::prelude::*;

use crate::errors::RegistryError;
use crate::geo::LandSize;

/// Decimal places of the registry token
pub const TOKEN_DECIMALS: u8 = 4;

/// Base units in one whole token
pub const TOKEN_UNIT: u64 = 10u64.pow(TOKEN_DECIMALS as u32);

pub const DEFAULT_FEE_PER_SQUARE_METER: u64 = 10;

/// Every side is billed as at least this long. Without the floor a thin,
/// nearly free sliver could block every registration crossing it.
pub const MIN_BILLABLE_SIDE_METERS: f64 = 1.0;

/// Registration fee in token base units for a parcel of the given size.
/// The whole-token fee is rounded before scaling to base units.
pub fn registration_fee(size: LandSize, fee_per_square_meter: u64) -> Result<u64> {
    let area = size.north_south.max(MIN_BILLABLE_SIDE_METERS)
        * size.east_west.max(MIN_BILLABLE_SIDE_METERS);
    let whole_tokens = (area * fee_per_square_meter as f64).round();
    require!(whole_tokens < u64::MAX as f64, RegistryError::Overflow);

    (whole_tokens as u64)
        .checked_mul(TOKEN_UNIT)
        .ok_or_else(|| error!(RegistryError::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_error;

    fn size(north_south: f64, east_west: f64) -> LandSize {
        LandSize { north_south, east_west }
    }

    #[test]
    fn test_fee_for_regular_parcel() {
        // 20m x 30m at 10 tokens per square meter
        assert_eq!(registration_fee(size(20.0, 30.0), 10).unwrap(), 6_000 * TOKEN_UNIT);
    }

    #[test]
    fn test_fee_rounds_whole_tokens() {
        // 10.04 * 10 = 100.4 -> 100 tokens, 10.06 * 10 = 100.6 -> 101 tokens
        assert_eq!(registration_fee(size(10.04, 1.0), 10).unwrap(), 100 * TOKEN_UNIT);
        assert_eq!(registration_fee(size(10.06, 1.0), 10).unwrap(), 101 * TOKEN_UNIT);
    }

    #[test]
    fn test_fee_floor_on_degenerate_sides() {
        let rate = 10;
        let floor = rate * TOKEN_UNIT;
        assert_eq!(registration_fee(size(1.0, 1.0), rate).unwrap(), floor);
        assert_eq!(registration_fee(size(0.5, 0.01), rate).unwrap(), floor);
        assert_eq!(registration_fee(size(0.0, 0.0), rate).unwrap(), floor);
        // A 100m sliver still pays for 100 square meters
        assert_eq!(registration_fee(size(100.0, 0.000_001), rate).unwrap(), 100 * floor);
    }

    #[test]
    fn test_fee_is_monotonic_in_each_side() {
        let mut previous = 0;
        for step in 0..=200 {
            let side = step as f64 * 0.5;
            let fee = registration_fee(size(side, 37.5), 10).unwrap();
            assert!(fee >= previous, "fee decreased at side {}", side);
            previous = fee;

            let swapped = registration_fee(size(37.5, side), 10).unwrap();
            assert_eq!(fee, swapped);
        }
    }

    #[test]
    fn test_zero_rate_is_free() {
        assert_eq!(registration_fee(size(50.0, 50.0), 0).unwrap(), 0);
    }

    #[test]
    fn test_fee_overflow() {
        assert_error(
            registration_fee(size(100.0, 100.0), u64::MAX / 1_000),
            RegistryError::Overflow,
        );
    }
}
