use std::str::FromStr;

use crate::error::{Result, SlugError};
use crate::transform::is_slug_char;

/// Default maximum slug length, in characters
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Default replacement for whitespace runs
pub const DEFAULT_SPACE_SYMBOL: &str = "_";

/// Default replacement for runs of disallowed characters
pub const DEFAULT_CHAR_SYMBOL: &str = "-";

/// Case folding applied after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Case {
    /// Leave the text as it is
    Default,
    /// Lowercase the text (the default)
    #[default]
    Lowercase,
    /// Uppercase letters fall outside the allowed set, so they end up
    /// replaced by the character symbol.
    Uppercase,
}

impl FromStr for Case {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "none" => Ok(Case::Default),
            "lower" | "lowercase" => Ok(Case::Lowercase),
            "upper" | "uppercase" => Ok(Case::Uppercase),
            _ => Err(SlugError::UnknownCase {
                value: s.to_string(),
            }),
        }
    }
}

/// Legacy numeric codes: 0 = default, 1 = lowercase, 2 = uppercase
impl TryFrom<u8> for Case {
    type Error = SlugError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Case::Default),
            1 => Ok(Case::Lowercase),
            2 => Ok(Case::Uppercase),
            other => Err(SlugError::UnknownCase {
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration for slug generation
///
/// Build non-default configurations with struct-update syntax:
///
/// ```
/// use slugline::Config;
///
/// let config = Config {
///     max_length: 15,
///     preserve_length: true,
///     ..Config::default()
/// };
/// assert_eq!(slugline::slug_with_config("F&&", &config), "f--");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Trim leading and trailing whitespace (ignored when `preserve_length` is set)
    pub trim_spaces: bool,

    /// Case folding mode
    pub case: Case,

    /// Replacement for whitespace
    pub space_symbol: String,

    /// Replacement for characters outside the allowed set
    pub char_symbol: String,

    /// Truncate the slug to this many characters (0 = unbounded)
    pub max_length: usize,

    /// Replace each offending character on its own instead of collapsing runs
    pub preserve_length: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            trim_spaces: true,
            case: Case::Lowercase,
            space_symbol: DEFAULT_SPACE_SYMBOL.to_string(),
            char_symbol: DEFAULT_CHAR_SYMBOL.to_string(),
            max_length: DEFAULT_MAX_LENGTH,
            preserve_length: false,
        }
    }

    /// Whether the leading/trailing trim stage runs for this configuration
    pub fn trims(&self) -> bool {
        self.trim_spaces && !self.preserve_length
    }

    /// Report replacement symbols that are not made of allowed characters.
    ///
    /// Slug generation never calls this. Such symbols are still used as given:
    /// a bad `space_symbol` is rewritten by the character stage and a bad
    /// `char_symbol` ends up in the output.
    pub fn check_symbols(&self) -> Result<()> {
        for (field, symbol) in [
            ("space_symbol", &self.space_symbol),
            ("char_symbol", &self.char_symbol),
        ] {
            if !symbol.chars().all(is_slug_char) {
                return Err(SlugError::UnsafeSymbol {
                    field,
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
