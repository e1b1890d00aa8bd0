use std::fmt;

/// Errors reported around slug generation.
///
/// Producing a slug never fails; these cover parsing configuration values
/// and the opt-in symbol check.
#[derive(Debug)]
pub enum SlugError {
    /// Case mode name or legacy numeric code was not recognised
    UnknownCase { value: String },

    /// A replacement symbol contains characters outside the allowed set
    UnsafeSymbol {
        field: &'static str,
        symbol: String,
    },
}

impl fmt::Display for SlugError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SlugError::UnknownCase { value } => {
                write!(
                    f,
                    "Unknown case mode '{}' (expected default, lowercase or uppercase)",
                    value
                )
            }
            SlugError::UnsafeSymbol { field, symbol } => {
                write!(
                    f,
                    "{} '{}' contains characters outside [a-z0-9._~-]",
                    field, symbol
                )
            }
        }
    }
}

impl std::error::Error for SlugError {}

pub type Result<T> = std::result::Result<T, SlugError>;
