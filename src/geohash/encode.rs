//! Coordinate to bit-sequence encoding by range bisection.

use super::bits::interleave;
use super::{MAX_LAT, MAX_LON};
use crate::error::{GeohashError, Result};

/// Encodes one axis value as `num_bits` bisection decisions over
/// `[-max_coord, max_coord]`.
///
/// Each bit records whether the value lies in the upper half of the current
/// interval. The upper edge itself counts as upper, so `max_coord` encodes to
/// all ones and `-max_coord` to all zeros.
pub(crate) fn encode_axis(coord: f64, max_coord: f64, num_bits: usize) -> Vec<bool> {
    let mut residual = coord + max_coord;
    let mut half = max_coord;
    (0..num_bits)
        .map(|_| {
            let upper = residual >= half;
            if upper {
                residual -= half;
            }
            half /= 2.0;
            upper
        })
        .collect()
}

/// Encodes a coordinate into `total_bits` interleaved bits.
///
/// Latitude gets `total_bits / 2` bits and longitude the rest, so on an odd
/// total the extra bit goes to longitude.
pub(crate) fn encode_bits(lat: f64, lon: f64, total_bits: usize) -> Vec<bool> {
    let lat_bits = total_bits / 2;
    let lon_bits = total_bits - lat_bits;
    interleave(
        &encode_axis(lon, MAX_LON, lon_bits),
        &encode_axis(lat, MAX_LAT, lat_bits),
    )
}

/// Rejects non-finite and out-of-range coordinates.
pub(crate) fn validate_coordinate(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !lon.is_finite() {
        log::warn!("Rejecting non-finite coordinate ({}, {})", lat, lon);
        return Err(GeohashError::InvalidInput(format!(
            "Coordinates must be finite, got: ({}, {})",
            lat, lon
        )));
    }

    if !(-MAX_LAT..=MAX_LAT).contains(&lat) {
        log::warn!("Rejecting latitude out of range: {}", lat);
        return Err(GeohashError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-MAX_LON..=MAX_LON).contains(&lon) {
        log::warn!("Rejecting longitude out of range: {}", lon);
        return Err(GeohashError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::bits::render;

    #[test]
    fn test_encode_axis_bisection() {
        assert_eq!(render(&encode_axis(0.0, 90.0, 4)), "1000");
        assert_eq!(render(&encode_axis(90.0, 90.0, 4)), "1111");
        assert_eq!(render(&encode_axis(-90.0, 90.0, 4)), "0000");
        assert_eq!(render(&encode_axis(-45.0, 90.0, 2)), "01");
        assert_eq!(render(&encode_axis(100.0, 180.0, 3)), "110");
    }

    #[test]
    fn test_encode_bits_split() {
        assert_eq!(render(&encode_bits(0.0, 0.0, 5)), "11000");
        assert_eq!(render(&encode_bits(45.0, 90.0, 4)), "1111");
        assert_eq!(encode_bits(12.0, 34.0, 7).len(), 7);
    }

    #[test]
    fn test_known_binary_geohash() {
        assert_eq!(
            render(&encode_bits(83.345326, -114.876748, 24)),
            "010111011011110001100000"
        );
    }

    #[test]
    fn test_validate_coordinate() {
        assert!(validate_coordinate(90.0, 180.0).is_ok());
        assert!(validate_coordinate(-90.0, -180.0).is_ok());
        assert!(validate_coordinate(90.5, 0.0).is_err());
        assert!(validate_coordinate(0.0, -180.01).is_err());
        assert!(validate_coordinate(f64::NAN, 0.0).is_err());
        assert!(validate_coordinate(0.0, f64::INFINITY).is_err());
    }
}
