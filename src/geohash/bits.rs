//! Bit-sequence helpers shared by encode, decode and neighbor computation.

use crate::error::{GeohashError, Result};

/// Parses a `0`/`1` string into bits.
pub(crate) fn parse_binary(geohash: &str) -> Result<Vec<bool>> {
    geohash
        .chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            symbol => Err(GeohashError::InvalidSymbol { symbol, position }),
        })
        .collect()
}

pub(crate) fn render(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Interleaves longitude and latitude bits, longitude first.
///
/// A trailing longitude bit without a latitude partner is appended last.
pub(crate) fn interleave(lon: &[bool], lat: &[bool]) -> Vec<bool> {
    let mut out = Vec::with_capacity(lon.len() + lat.len());
    for (i, &bit) in lon.iter().enumerate() {
        out.push(bit);
        if let Some(&lat_bit) = lat.get(i) {
            out.push(lat_bit);
        }
    }
    out
}

/// Splits interleaved bits into `(lon, lat)`, reading at most `limit` bits.
pub(crate) fn split(bits: &[bool], limit: Option<usize>) -> (Vec<bool>, Vec<bool>) {
    let take = limit.unwrap_or(bits.len());
    let mut lon = Vec::with_capacity(take / 2 + 1);
    let mut lat = Vec::with_capacity(take / 2);
    for (i, &bit) in bits.iter().take(take).enumerate() {
        if i % 2 == 0 {
            lon.push(bit);
        } else {
            lat.push(bit);
        }
    }
    (lon, lat)
}

/// Binary increment with carry; `None` when every bit is already set.
pub(crate) fn increment(bits: &[bool]) -> Option<Vec<bool>> {
    let mut out = bits.to_vec();
    for bit in out.iter_mut().rev() {
        if *bit {
            *bit = false;
        } else {
            *bit = true;
            return Some(out);
        }
    }
    None
}

/// Binary decrement with borrow; `None` when every bit is already clear.
pub(crate) fn decrement(bits: &[bool]) -> Option<Vec<bool>> {
    let mut out = bits.to_vec();
    for bit in out.iter_mut().rev() {
        if *bit {
            *bit = false;
            return Some(out);
        } else {
            *bit = true;
        }
    }
    None
}
