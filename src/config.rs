//! Alphabet configuration.
//!
//! The alphabet decides bits-per-symbol and therefore the textual format of
//! every geohash, so it is fixed when the engine is constructed. `Config`
//! lets that choice live in a JSON or TOML file instead of in code.
use crate::codec::{Alphabet, BASE64URL_SYMBOLS, GEOHASH_BASE32_SYMBOLS, SIGN_MARKER};
use crate::error::Result;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Alphabet settings for the codec and geohash engine.
///
/// # Example
///
/// ```rust
/// use geohash_any::{Config, Geohasher};
///
/// let config = Config::from_json(r#"{ "symbols": "0123456789bcdefghjkmnpqrstuvwxyz" }"#)?;
/// let alphabet = config.alphabet().unwrap();
/// let hasher = Geohasher::new(&alphabet).unwrap();
/// assert_eq!(hasher.encode_text(40.7128, -74.0060, 7).unwrap(), "dr5regw");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Ordered symbols; position is the digit value
    #[serde(default = "Config::default_symbols")]
    pub symbols: String,

    /// Prefix for negative numbers, must not be one of the symbols
    #[serde(default = "Config::default_sign_marker")]
    pub sign_marker: char,
}

impl Config {
    fn default_symbols() -> String {
        BASE64URL_SYMBOLS.to_string()
    }

    const fn default_sign_marker() -> char {
        SIGN_MARKER
    }

    /// Configuration for the classic geohash base32 symbols.
    pub fn geohash_base32() -> Self {
        Self {
            symbols: GEOHASH_BASE32_SYMBOLS.to_string(),
            ..Self::default()
        }
    }

    pub fn with_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = symbols.into();
        self
    }

    pub fn with_sign_marker(mut self, sign_marker: char) -> Self {
        self.sign_marker = sign_marker;
        self
    }

    /// Builds the alphabet described by this configuration.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(&self.symbols, self.sign_marker)
    }

    /// Checks that the alphabet is usable for geohashing.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let alphabet = self.alphabet().map_err(|e| e.to_string())?;
        if alphabet.bits_per_char().is_none() {
            return Err(format!(
                "Alphabet size must be a power of two, got {}",
                alphabet.base()
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        log::debug!("Loaded alphabet config with {} symbols", config.symbols.chars().count());
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        log::debug!("Loaded alphabet config with {} symbols", config.symbols.chars().count());
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: Self::default_symbols(),
            sign_marker: Self::default_sign_marker(),
        }
    }
}
