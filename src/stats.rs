//! Information-theoretic figures of a code.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::{CodeTable, Encoded, ProbabilityTable};

/// Returns the entropy of the source in bits: the sum of `-p * log2(p)` over
/// every symbol of non-zero probability.
///
/// The probabilities are used as given, they are not required to sum to 1.
///
/// # Examples
///
/// ```
/// use huffman_coder::{entropy, ProbabilityTable};
///
/// let mut probabilities = ProbabilityTable::new();
/// probabilities.insert("a".to_string(), 0.5);
/// probabilities.insert("b".to_string(), 0.5);
/// assert_eq!(entropy(&probabilities), 1.0);
/// ```
pub fn entropy(probabilities: &ProbabilityTable) -> f64 {
    probabilities
        .values()
        .filter(|&&p| p > 0.0)
        .fold(0.0, |acc, &p| acc - p * p.log2())
}

/// Returns the expected code word length in bits per symbol.
///
/// Symbols of the code table missing from `probabilities` count as having
/// probability 0.
pub fn average_length(codes: &CodeTable, probabilities: &ProbabilityTable) -> f64 {
    codes.iter().fold(0.0, |acc, (symbol, code)| {
        acc + code.len() as f64 * probabilities.get(symbol).copied().unwrap_or(0.0)
    })
}

/// Entropy divided by average code length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Efficiency {
    Ratio(f64),
    /// The average code length is 0, which only happens for an alphabet of a
    /// single symbol.
    Undefined,
}

impl Efficiency {
    pub fn new(entropy: f64, average_length: f64) -> Self {
        if average_length == 0.0 {
            Efficiency::Undefined
        } else {
            Efficiency::Ratio(entropy / average_length)
        }
    }

    /// Returns the ratio, or [`Error::UndefinedEfficiency`].
    pub fn ratio(&self) -> Result<f64> {
        match *self {
            Efficiency::Ratio(r) => Ok(r),
            Efficiency::Undefined => Err(Error::UndefinedEfficiency),
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Efficiency::Ratio(r) => write!(f, "{:.4}", r),
            Efficiency::Undefined => write!(f, "undefined"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Bits.
    pub entropy: f64,
    /// Bits per symbol.
    pub average_length: f64,
    pub efficiency: Efficiency,
}

impl Statistics {
    pub fn new(codes: &CodeTable, probabilities: &ProbabilityTable) -> Self {
        let entropy = entropy(probabilities);
        let average_length = average_length(codes, probabilities);
        let efficiency = Efficiency::new(entropy, average_length);
        debug!(
            "Entropy {} bits, average length {} bits/symbol, efficiency {}",
            entropy, average_length, efficiency
        );
        Statistics {
            entropy,
            average_length,
            efficiency,
        }
    }
}
