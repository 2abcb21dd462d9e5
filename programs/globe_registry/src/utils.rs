/// Length of one degree of latitude in meters, treated as constant over the globe
pub const METERS_PER_DEGREE_LAT: f64 = 111_132.954;

/// Length of one degree of longitude along the equator
pub const METERS_PER_DEGREE_LONG_AT_EQUATOR: f64 = 111_319.488;

/// Length in meters of one degree of longitude at the given latitude.
/// Shrinks with the cosine of the latitude towards the poles.
pub fn meters_per_degree_long(lat: f64) -> f64 {
    METERS_PER_DEGREE_LONG_AT_EQUATOR * lat.to_radians().cos()
}

/// Convert a north-south distance to degrees of latitude
pub fn meters_to_lat_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE_LAT
}

/// Latitude of the widest east-west cross-section of a band between two
/// latitudes. A band that straddles the equator is widest at the equator,
/// otherwise at the edge closest to it.
pub fn widest_latitude(lat_north: f64, lat_south: f64) -> f64 {
    if lat_south <= 0.0 && lat_north >= 0.0 {
        0.0
    } else {
        lat_north.abs().min(lat_south.abs())
    }
}

/// Turn `-0.0` into `0.0` so equal coordinates order identically in indices
pub fn normalize_zero(value: f64) -> f64 {
    value + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_per_degree_long_equator() {
        assert_eq!(meters_per_degree_long(0.0), METERS_PER_DEGREE_LONG_AT_EQUATOR);
    }

    #[test]
    fn test_meters_per_degree_long_shrinks_with_latitude() {
        let at_10 = meters_per_degree_long(10.0);
        let at_60 = meters_per_degree_long(60.0);
        assert!(at_10 < METERS_PER_DEGREE_LONG_AT_EQUATOR);
        assert!(at_60 < at_10);
        // cos(60) = 0.5
        assert!((at_60 - METERS_PER_DEGREE_LONG_AT_EQUATOR / 2.0).abs() < 1e-6);
        // Symmetric around the equator
        assert_eq!(meters_per_degree_long(-60.0), at_60);
    }

    #[test]
    fn test_meters_to_lat_degrees() {
        assert_eq!(meters_to_lat_degrees(METERS_PER_DEGREE_LAT), 1.0);
        assert!((meters_to_lat_degrees(100.0) - 0.000_899_82).abs() < 1e-8);
    }

    #[test]
    fn test_widest_latitude() {
        assert_eq!(widest_latitude(10.0, 9.0), 9.0);
        assert_eq!(widest_latitude(-9.0, -10.0), 9.0);
        assert_eq!(widest_latitude(0.0005, -0.0005), 0.0);
        assert_eq!(widest_latitude(0.0, -1.0), 0.0);
    }

    #[test]
    fn test_normalize_zero() {
        assert!(normalize_zero(-0.0).is_sign_positive());
        assert_eq!(normalize_zero(-1.5), -1.5);
    }
}
