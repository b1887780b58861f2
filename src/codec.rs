//! Integer <-> string conversion over a fixed symbol alphabet.
//!
//! An [`Alphabet`] is an ordered set of symbols where a symbol's position is
//! its digit value. Negative numbers are written with a sign marker prefix that
//! must not itself be a symbol of the alphabet.
//!
//! ```rust
//! use geohash_any::Alphabet;
//!
//! let alphabet = Alphabet::base64url();
//! assert_eq!(alphabet.encode(103063661257551), "Xbxg6yNP");
//! assert_eq!(alphabet.decode("$Xbxg6yNP")?, -103063661257551);
//! # Ok::<(), geohash_any::GeohashError>(())
//! ```

use crate::error::{GeohashError, Result};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The URL and filename safe alphabet: `A-Z`, `a-z`, `0-9`, `-`, `_`.
pub const BASE64URL_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Symbols of the classic geohash base32 encoding.
pub const GEOHASH_BASE32_SYMBOLS: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

/// Prefix marking a negative number.
pub const SIGN_MARKER: char = '$';

static BASE64URL: Lazy<Alphabet> =
    Lazy::new(|| Alphabet::from_trusted(BASE64URL_SYMBOLS, SIGN_MARKER));

static GEOHASH_BASE32: Lazy<Alphabet> =
    Lazy::new(|| Alphabet::from_trusted(GEOHASH_BASE32_SYMBOLS, SIGN_MARKER));

/// An immutable symbol table with its reverse lookup.
///
/// Built once and shared by reference; all encode/decode operations are
/// read-only, so an `Alphabet` can be used from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    reverse: FxHashMap<char, u32>,
    sign_marker: char,
}

impl Alphabet {
    /// Builds an alphabet from an ordered symbol string.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidAlphabet`] if there are fewer than two
    /// symbols, a symbol repeats, or the sign marker is one of the symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_any::Alphabet;
    ///
    /// let hex = Alphabet::new("0123456789abcdef", '-')?;
    /// assert_eq!(hex.encode(255), "ff");
    /// assert_eq!(hex.encode(-16), "-10");
    ///
    /// assert!(Alphabet::new("0120", '-').is_err());
    /// assert!(Alphabet::new("01-", '-').is_err());
    /// # Ok::<(), geohash_any::GeohashError>(())
    /// ```
    pub fn new(symbols: &str, sign_marker: char) -> Result<Self> {
        let count = symbols.chars().count();
        if count < 2 {
            return Err(GeohashError::InvalidAlphabet(format!(
                "at least 2 symbols required, got {}",
                count
            )));
        }

        let mut seen = FxHashMap::default();
        for (i, c) in symbols.chars().enumerate() {
            if let Some(first) = seen.insert(c, i) {
                return Err(GeohashError::InvalidAlphabet(format!(
                    "symbol {:?} appears at positions {} and {}",
                    c, first, i
                )));
            }
        }

        if seen.contains_key(&sign_marker) {
            return Err(GeohashError::InvalidAlphabet(format!(
                "sign marker {:?} is also an alphabet symbol",
                sign_marker
            )));
        }

        log::debug!(
            "Built alphabet of {} symbols with sign marker {:?}",
            count,
            sign_marker
        );
        Ok(Self::from_trusted(symbols, sign_marker))
    }

    /// Builds the tables without validation. Only for the built-in constants.
    fn from_trusted(symbols: &str, sign_marker: char) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let reverse = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u32))
            .collect();
        Self {
            symbols,
            reverse,
            sign_marker,
        }
    }

    /// The default base64url alphabet (6 bits per symbol).
    pub fn base64url() -> &'static Alphabet {
        &BASE64URL
    }

    /// The classic geohash base32 alphabet (5 bits per symbol).
    pub fn geohash_base32() -> &'static Alphabet {
        &GEOHASH_BASE32
    }

    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn sign_marker(&self) -> char {
        self.sign_marker
    }

    /// Symbol for digit value zero, used for left padding.
    pub fn zero_symbol(&self) -> char {
        self.symbols[0]
    }

    pub fn symbol(&self, value: usize) -> Option<char> {
        self.symbols.get(value).copied()
    }

    pub fn value_of(&self, symbol: char) -> Option<u32> {
        self.reverse.get(&symbol).copied()
    }

    /// Bits carried by one symbol, or `None` when the base is not a power of two.
    pub fn bits_per_char(&self) -> Option<usize> {
        let base = self.base();
        base.is_power_of_two()
            .then(|| base.trailing_zeros() as usize)
    }

    /// Encodes a signed integer, prefixing negatives with the sign marker.
    pub fn encode(&self, n: i128) -> String {
        let digits = self.encode_unsigned(n.unsigned_abs());
        if n < 0 {
            let mut out = String::with_capacity(digits.len() + 1);
            out.push(self.sign_marker);
            out.push_str(&digits);
            out
        } else {
            digits
        }
    }

    /// Encodes a non-negative integer, most significant digit first.
    ///
    /// Zero encodes to a single zero symbol.
    pub fn encode_unsigned(&self, mut n: u128) -> String {
        let base = self.base() as u128;
        let mut digits = Vec::new();
        loop {
            digits.push(self.symbols[(n % base) as usize]);
            n /= base;
            if n == 0 {
                break;
            }
        }
        digits.iter().rev().collect()
    }

    /// Decodes a string produced by [`Alphabet::encode`].
    ///
    /// # Errors
    ///
    /// * [`GeohashError::EmptyInput`] for `""` or a bare sign marker
    /// * [`GeohashError::InvalidSymbol`] for characters outside the alphabet
    /// * [`GeohashError::Overflow`] if the value does not fit in an `i128`
    pub fn decode(&self, s: &str) -> Result<i128> {
        match s.strip_prefix(self.sign_marker) {
            Some(digits) => {
                let magnitude = self.fold_digits(digits, 1)?;
                if magnitude > i128::MIN.unsigned_abs() {
                    return Err(GeohashError::Overflow(s.to_string()));
                }
                // 2^127 maps onto i128::MIN through the wrapping negation.
                Ok((magnitude as i128).wrapping_neg())
            }
            None => {
                let magnitude = self.fold_digits(s, 0)?;
                i128::try_from(magnitude).map_err(|_| GeohashError::Overflow(s.to_string()))
            }
        }
    }

    /// Decodes an unsigned string; a sign marker is rejected as an invalid symbol.
    pub fn decode_unsigned(&self, s: &str) -> Result<u128> {
        self.fold_digits(s, 0)
    }

    fn fold_digits(&self, digits: &str, offset: usize) -> Result<u128> {
        if digits.is_empty() {
            return Err(GeohashError::EmptyInput);
        }

        let base = self.base() as u128;
        digits
            .chars()
            .enumerate()
            .try_fold(0u128, |acc, (i, c)| {
                let value = self.value_of(c).ok_or(GeohashError::InvalidSymbol {
                    symbol: c,
                    position: i + offset,
                })?;
                acc.checked_mul(base)
                    .and_then(|acc| acc.checked_add(u128::from(value)))
                    .ok_or_else(|| GeohashError::Overflow(digits.to_string()))
            })
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::base64url().clone()
    }
}
