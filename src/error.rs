use thiserror::Error;

/// Everything that can go wrong while building a code for a probability table
/// or using it.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The probability table has no entries, so there is no tree to build.
    #[error("probability table has no entries")]
    EmptyAlphabet,
    #[error("symbol {symbol:?} has invalid probability {probability}")]
    InvalidProbability { symbol: String, probability: f64 },
    /// Only raised when [`Config::normalization_tolerance`](crate::Config) is set.
    #[error("probabilities sum to {sum}, not 1 within {tolerance}")]
    NotNormalized { sum: f64, tolerance: f64 },
    /// A symbol of the encode input has no code word.
    #[error("no code word for symbol {0:?}")]
    UnknownSymbol(String),
    /// The average code length is zero (single-symbol alphabet).
    #[error("efficiency is undefined for a zero average code length")]
    UndefinedEfficiency,
}

pub type Result<T> = std::result::Result<T, Error>;
