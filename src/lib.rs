//! Interleaved-bit geohashing with compact, URL-safe textual geohashes.
//!
//! ```rust
//! use geohash_any::{geohash_decode, geohash_encode_text, geohash_neighbors};
//!
//! let hash = geohash_encode_text(83.345326, -114.876748, 8)?;
//! assert_eq!(hash, "Xbxg6yNP");
//!
//! let bbox = geohash_decode(&hash, false)?;
//! assert_eq!((bbox.lat, bbox.lon), (83.345326, -114.876748));
//!
//! let nbrs = geohash_neighbors(&hash, false, None)?;
//! assert_eq!(nbrs.ne, "Xbxg6yNw");
//! # Ok::<(), geohash_any::GeohashError>(())
//! ```
//!
//! The free functions use the base64url alphabet (6 bits per symbol). Build a
//! [`Geohasher`] over another [`Alphabet`] to change the textual format.

pub mod codec;
pub mod config;
pub mod error;
pub mod geohash;
pub mod types;

pub use codec::{Alphabet, BASE64URL_SYMBOLS, GEOHASH_BASE32_SYMBOLS, SIGN_MARKER};
pub use config::Config;
pub use error::{GeohashError, Result};
pub use geohash::Geohasher;
pub use types::{BoundingBox, Direction, Neighbors};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encodes an integer in the base64url alphabet.
pub fn base_n_encode(n: i128) -> String {
    Alphabet::base64url().encode(n)
}

/// Decodes a base64url string produced by [`base_n_encode`].
pub fn base_n_decode(s: &str) -> Result<i128> {
    Alphabet::base64url().decode(s)
}

/// Encodes a coordinate as a binary geohash of `precision` bits.
pub fn geohash_encode(lat: f64, lon: f64, precision: usize) -> Result<String> {
    Geohasher::default().encode(lat, lon, precision)
}

/// Encodes a coordinate as a base64url geohash of `char_count` symbols.
pub fn geohash_encode_text(lat: f64, lon: f64, char_count: usize) -> Result<String> {
    Geohasher::default().encode_text(lat, lon, char_count)
}

/// Decodes a binary or base64url geohash.
pub fn geohash_decode(geohash: &str, is_binary: bool) -> Result<BoundingBox> {
    Geohasher::default().decode(geohash, is_binary)
}

/// Computes the eight neighbors of a binary or base64url geohash.
pub fn geohash_neighbors(
    geohash: &str,
    is_binary: bool,
    precision: Option<usize>,
) -> Result<Neighbors> {
    Geohasher::default().neighbors(geohash, is_binary, precision)
}

/// Common imports
pub mod prelude {

    pub use crate::{Alphabet, Config, GeohashError, Geohasher, Result};

    pub use crate::{BoundingBox, Direction, Neighbors};

    pub use crate::{
        base_n_decode, base_n_encode, geohash_decode, geohash_encode, geohash_encode_text,
        geohash_neighbors,
    };

    pub use geo::{Point, Rect};
}
