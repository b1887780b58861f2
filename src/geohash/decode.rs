//! Bit-sequence to bounding box decoding.

use super::bits::split;
use super::{MAX_LAT, MAX_LON};
use crate::types::BoundingBox;

/// Decimal places kept in decoded output.
pub(crate) const DECODE_PRECISION: i32 = 6;

/// Replays the bisection for one axis, returning `(center, half_width)`.
pub(crate) fn decode_axis(bits: &[bool], max_coord: f64) -> (f64, f64) {
    let mut center = 0.0;
    let mut half = max_coord;
    for &bit in bits {
        half /= 2.0;
        if bit {
            center += half;
        } else {
            center -= half;
        }
    }
    (center, half)
}

/// Decodes interleaved bits into the exact (untruncated) box.
pub(crate) fn decode_bits(bits: &[bool]) -> BoundingBox {
    let (lon_bits, lat_bits) = split(bits, None);
    let (lon, half_lon) = decode_axis(&lon_bits, MAX_LON);
    let (lat, half_lat) = decode_axis(&lat_bits, MAX_LAT);
    BoundingBox::new(lat, lon, half_lat, half_lon)
}

/// Truncates toward zero to `places` decimals.
pub(crate) fn truncate_decimal(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).trunc() / scale
}

pub(crate) fn truncate_box(bbox: BoundingBox) -> BoundingBox {
    BoundingBox::new(
        truncate_decimal(bbox.lat, DECODE_PRECISION),
        truncate_decimal(bbox.lon, DECODE_PRECISION),
        truncate_decimal(bbox.half_lat, DECODE_PRECISION),
        truncate_decimal(bbox.half_lon, DECODE_PRECISION),
    )
}
