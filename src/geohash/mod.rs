//! Interleaved-bit geohash engine.
//!
//! A geohash is built by bisecting the longitude range `[-180, 180]` and the
//! latitude range `[-90, 90]` and interleaving the resulting bits, longitude
//! first. The binary form is a string of `0`/`1`; the textual form packs each
//! group of `bits_per_char` bits into one alphabet symbol.
//!
//! # Examples
//!
//! ```rust
//! use geohash_any::{Alphabet, Geohasher};
//!
//! let hasher = Geohasher::default();
//! let hash = hasher.encode_text(83.345326, -114.876748, 8)?;
//! assert_eq!(hash, "Xbxg6yNP");
//!
//! let bbox = hasher.decode(&hash, false)?;
//! assert!(bbox.contains(83.345326, -114.876748));
//!
//! // Standard geohash symbols
//! let base32 = Geohasher::new(Alphabet::geohash_base32())?;
//! assert_eq!(base32.encode_text(40.7128, -74.0060, 7)?, "dr5regw");
//! # Ok::<(), geohash_any::GeohashError>(())
//! ```

mod bits;
mod decode;
mod encode;
mod neighbors;


use crate::codec::Alphabet;
use crate::error::{GeohashError, Result};
use crate::types::{BoundingBox, Direction, Neighbors};
use geo::{Point, Rect};

pub(crate) const MAX_LAT: f64 = 90.0;
pub(crate) const MAX_LON: f64 = 180.0;

/// Geohash encoder/decoder bound to one alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Geohasher<'a> {
    alphabet: &'a Alphabet,
    bits_per_char: usize,
}

impl<'a> Geohasher<'a> {
    /// Creates an engine over `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidAlphabet`] if the alphabet size is not a
    /// power of two, since every symbol must map to a whole number of bits.
    pub fn new(alphabet: &'a Alphabet) -> Result<Self> {
        let bits_per_char = alphabet.bits_per_char().ok_or_else(|| {
            GeohashError::InvalidAlphabet(format!(
                "geohash alphabets need a power-of-two size, got {}",
                alphabet.base()
            ))
        })?;
        Ok(Self {
            alphabet,
            bits_per_char,
        })
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    pub fn bits_per_char(&self) -> usize {
        self.bits_per_char
    }

    /// Encodes a coordinate as a binary geohash of `precision` bits.
    ///
    /// # Errors
    ///
    /// [`GeohashError::InvalidInput`] for coordinates outside
    /// `[-90, 90] x [-180, 180]`, non-finite values, or a zero precision.
    pub fn encode(&self, lat: f64, lon: f64, precision: usize) -> Result<String> {
        encode::validate_coordinate(lat, lon)?;
        require_nonzero(precision)?;
        Ok(bits::render(&encode::encode_bits(lat, lon, precision)))
    }

    /// Encodes a coordinate as a textual geohash of exactly `char_count` symbols.
    pub fn encode_text(&self, lat: f64, lon: f64, char_count: usize) -> Result<String> {
        encode::validate_coordinate(lat, lon)?;
        require_nonzero(char_count)?;
        let total_bits = char_count.checked_mul(self.bits_per_char).ok_or_else(|| {
            GeohashError::InvalidInput(format!("Character count too large: {}", char_count))
        })?;
        let bits = encode::encode_bits(lat, lon, total_bits);
        self.bits_to_text(&bits)
    }

    /// Encodes a `geo::Point` (x = longitude, y = latitude) as a textual geohash.
    pub fn encode_point(&self, point: &Point, char_count: usize) -> Result<String> {
        self.encode_text(point.y(), point.x(), char_count)
    }

    /// Decodes a geohash to its center and half extents, truncated to 6 decimals.
    ///
    /// # Errors
    ///
    /// * [`GeohashError::EmptyInput`] for an empty geohash
    /// * [`GeohashError::InvalidSymbol`] for characters outside `0`/`1` (binary)
    ///   or the alphabet (textual)
    pub fn decode(&self, geohash: &str, is_binary: bool) -> Result<BoundingBox> {
        let bits = self.parse(geohash, is_binary)?;
        Ok(decode::truncate_box(decode::decode_bits(&bits)))
    }

    /// Decodes a geohash to its exact cell rectangle, without truncation.
    pub fn decode_bbox(&self, geohash: &str, is_binary: bool) -> Result<Rect> {
        let bits = self.parse(geohash, is_binary)?;
        Ok(decode::decode_bits(&bits).to_rect())
    }

    /// Computes the eight neighbors of a geohash.
    ///
    /// `precision` truncates the input before the neighbors are computed; it
    /// counts bits for binary input and symbols for textual input. Neighbors
    /// are returned in the same form as the input.
    ///
    /// # Errors
    ///
    /// * [`GeohashError::PrecisionMismatch`] if `precision` exceeds the input length
    /// * [`GeohashError::InvalidInput`] if `precision` is zero
    /// * [`GeohashError::BoundaryExhausted`] if the cell sits on the grid edge
    ///   (poles or antimeridian) in any direction
    pub fn neighbors(
        &self,
        geohash: &str,
        is_binary: bool,
        precision: Option<usize>,
    ) -> Result<Neighbors> {
        let bits = self.parse(geohash, is_binary)?;
        let limit = self.bit_limit(geohash, is_binary, precision)?;
        let nbrs = neighbors::neighbors_bits(&bits, limit)?;
        if is_binary {
            Ok(nbrs)
        } else {
            nbrs.try_map(|binary| self.to_text(&binary))
        }
    }

    /// Computes the neighbor in a single direction, at full precision.
    pub fn neighbor(&self, geohash: &str, is_binary: bool, direction: Direction) -> Result<String> {
        let bits = self.parse(geohash, is_binary)?;
        let binary = neighbors::neighbor_bits(&bits, None, direction)?;
        if is_binary {
            Ok(binary)
        } else {
            self.to_text(&binary)
        }
    }

    /// Packs a binary geohash into symbols, one per `bits_per_char` bits.
    ///
    /// Leading zero bits become zero symbols, so the result always has
    /// `binary.len() / bits_per_char` symbols.
    ///
    /// # Errors
    ///
    /// * [`GeohashError::EmptyInput`] for an empty string
    /// * [`GeohashError::PrecisionMismatch`] if the bit count is not a multiple
    ///   of `bits_per_char`
    pub fn to_text(&self, binary: &str) -> Result<String> {
        self.bits_to_text(&self.parse(binary, true)?)
    }

    /// Expands a textual geohash to `len * bits_per_char` bits.
    pub fn to_binary(&self, text: &str) -> Result<String> {
        Ok(bits::render(&self.parse(text, false)?))
    }

    fn parse(&self, geohash: &str, is_binary: bool) -> Result<Vec<bool>> {
        if geohash.is_empty() {
            return Err(GeohashError::EmptyInput);
        }
        if is_binary {
            bits::parse_binary(geohash)
        } else {
            self.text_to_bits(geohash)
        }
    }

    /// Converts a user precision to a bit limit, checking it against the input.
    fn bit_limit(
        &self,
        geohash: &str,
        is_binary: bool,
        precision: Option<usize>,
    ) -> Result<Option<usize>> {
        let Some(precision) = precision else {
            return Ok(None);
        };
        require_nonzero(precision)?;

        let available = geohash.chars().count();
        if precision > available {
            return Err(GeohashError::PrecisionMismatch {
                requested: precision,
                available,
            });
        }

        Ok(Some(if is_binary {
            precision
        } else {
            precision * self.bits_per_char
        }))
    }

    fn bits_to_text(&self, bits: &[bool]) -> Result<String> {
        if bits.len() % self.bits_per_char != 0 {
            return Err(GeohashError::PrecisionMismatch {
                requested: bits.len(),
                available: bits.len() - bits.len() % self.bits_per_char,
            });
        }

        // A group of bits_per_char bits is always below the alphabet size.
        let symbols = self.alphabet.symbols();
        Ok(bits
            .chunks(self.bits_per_char)
            .map(|group| {
                let value = group
                    .iter()
                    .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
                symbols[value]
            })
            .collect())
    }

    fn text_to_bits(&self, text: &str) -> Result<Vec<bool>> {
        let mut out = Vec::with_capacity(text.len() * self.bits_per_char);
        for (position, symbol) in text.chars().enumerate() {
            let value = self
                .alphabet
                .value_of(symbol)
                .ok_or(GeohashError::InvalidSymbol { symbol, position })?;
            out.extend((0..self.bits_per_char).rev().map(|shift| (value >> shift) & 1 == 1));
        }
        Ok(out)
    }
}

impl Default for Geohasher<'static> {
    /// Engine over the base64url alphabet (6 bits per symbol).
    fn default() -> Self {
        Self {
            alphabet: Alphabet::base64url(),
            bits_per_char: 6,
        }
    }
}

fn require_nonzero(precision: usize) -> Result<()> {
    if precision == 0 {
        return Err(GeohashError::InvalidInput(
            "Precision must be at least 1".to_string(),
        ));
    }
    Ok(())
}
