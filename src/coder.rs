//! Running the whole coder over one probability table.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::stats::Statistics;
use crate::tree::{build_tree, generate_codes};
use crate::{encode, encode_lossy, to_bit_string, CodeTable, Encoded, ProbabilityTable};

/// What to do with a symbol of the encode input that has no code word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Fail with [`Error::UnknownSymbol`].
    Strict,
    /// Skip the symbol and log a warning.
    Lossy,
}

impl Default for EncodeMode {
    fn default() -> Self {
        EncodeMode::Strict
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub mode: EncodeMode,
    /// When set, reject tables whose probabilities do not sum to 1 within this
    /// tolerance.
    pub normalization_tolerance: Option<f64>,
}

impl Config {
    pub fn mode(mut self, mode: EncodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn normalization_tolerance(mut self, tolerance: f64) -> Self {
        self.normalization_tolerance = Some(tolerance);
        self
    }
}

/// Everything computed for one probability table.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub codes: CodeTable,
    pub statistics: Statistics,
    /// The encoded input, if one was given.
    pub encoded: Option<Encoded>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes = self.codes.iter().collect::<Vec<_>>();
        codes.sort_by(|a, b| a.0.cmp(b.0));

        writeln!(f, "Huffman Codes:")?;
        for (symbol, code) in codes {
            writeln!(f, "{}: {}", symbol, to_bit_string(code))?;
        }
        if let Some(encoded) = &self.encoded {
            writeln!(f, "Encoded Text: {}", to_bit_string(encoded))?;
        }
        writeln!(f, "Entropy: {:.4} bit", self.statistics.entropy)?;
        writeln!(
            f,
            "Average Length of the code: {:.4}",
            self.statistics.average_length
        )?;
        write!(f, "Efficiency of the code: {}", self.statistics.efficiency)
    }
}

/// Builds the Huffman code of a probability table, measures it and optionally
/// encodes some input with it.
///
/// # Examples
///
/// ```
/// use huffman_coder::{Coder, Efficiency, ProbabilityTable};
///
/// let mut probabilities = ProbabilityTable::new();
/// probabilities.insert("A".to_string(), 0.5);
/// probabilities.insert("B".to_string(), 0.25);
/// probabilities.insert("C".to_string(), 0.25);
///
/// let report = Coder::default().run(&probabilities, Some("ABCA")).unwrap();
/// assert_eq!(report.statistics.entropy, 1.5);
/// assert_eq!(report.statistics.average_length, 1.5);
/// assert_eq!(report.statistics.efficiency, Efficiency::Ratio(1.0));
/// assert_eq!(report.encoded.unwrap().len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Coder {
    config: Config,
}

impl Coder {
    pub fn new(config: Config) -> Self {
        Coder { config }
    }

    /// # Errors
    ///
    /// Fails if the table is empty, holds an invalid probability, is not
    /// normalized while a tolerance is configured, or if `input` holds a
    /// symbol without a code word in [`EncodeMode::Strict`].
    pub fn run(&self, probabilities: &ProbabilityTable, input: Option<&str>) -> Result<Report> {
        if let Some(tolerance) = self.config.normalization_tolerance {
            let sum: f64 = probabilities.values().sum();
            if (sum - 1.0).abs() > tolerance {
                return Err(Error::NotNormalized { sum, tolerance });
            }
        }

        let codes = generate_codes(&build_tree(probabilities)?);
        let statistics = Statistics::new(&codes, probabilities);
        let encoded = match input {
            Some(s) => Some(match self.config.mode {
                EncodeMode::Strict => encode(s, &codes)?,
                EncodeMode::Lossy => encode_lossy(s, &codes),
            }),
            None => None,
        };
        debug!(
            "Coded {} symbols{}",
            codes.len(),
            encoded
                .as_ref()
                .map(|e| format!(", encoded input into {} bits", e.len()))
                .unwrap_or_default()
        );

        Ok(Report {
            codes,
            statistics,
            encoded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Efficiency;
    use bitvec::prelude::*;

    fn table(entries: &[(&str, f64)]) -> ProbabilityTable {
        entries.iter().map(|&(s, p)| (s.to_string(), p)).collect()
    }

    #[test]
    fn single_symbol() {
        let report = Coder::default()
            .run(&table(&[("A", 1.0)]), Some("AAA"))
            .unwrap();
        let mut expected = CodeTable::new();
        expected.insert("A".to_string(), Encoded::new());
        assert_eq!(report.codes, expected);
        assert_eq!(report.statistics.entropy, 0.0);
        assert_eq!(report.statistics.average_length, 0.0);
        assert_eq!(report.statistics.efficiency, Efficiency::Undefined);
        assert_eq!(report.encoded, Some(Encoded::new()));
    }

    #[test]
    fn without_input() {
        let report = Coder::default()
            .run(&table(&[("A", 0.5), ("B", 0.5)]), None)
            .unwrap();
        assert_eq!(report.encoded, None);
        assert_eq!(report.statistics.efficiency, Efficiency::Ratio(1.0));
    }

    #[test]
    fn modes() {
        let probabilities = table(&[("A", 0.65), ("B", 0.15), ("C", 0.06), ("D", 0.14)]);
        assert_eq!(
            Coder::default().run(&probabilities, Some("ABE")),
            Err(Error::UnknownSymbol("E".to_string()))
        );
        let report = Coder::new(Config::default().mode(EncodeMode::Lossy))
            .run(&probabilities, Some("ABE"))
            .unwrap();
        assert_eq!(report.encoded, Some(bitvec![1, 0, 0]));
    }

    #[test]
    fn normalization() {
        let probabilities = table(&[("A", 0.5), ("B", 0.4)]);
        // Unchecked by default.
        assert!(Coder::default().run(&probabilities, None).is_ok());

        let strict = Coder::new(Config::default().normalization_tolerance(1e-9));
        match strict.run(&probabilities, None) {
            Err(Error::NotNormalized { sum, tolerance }) => {
                assert!((sum - 0.9).abs() < 1e-12);
                assert_eq!(tolerance, 1e-9);
            }
            other => panic!("expected NotNormalized, got {:?}", other),
        }
        assert!(strict
            .run(&table(&[("A", 0.65), ("B", 0.15), ("C", 0.06), ("D", 0.14)]), None)
            .is_ok());
    }

    #[test]
    fn empty() {
        assert_eq!(
            Coder::default().run(&ProbabilityTable::new(), Some("")),
            Err(Error::EmptyAlphabet)
        );
    }

    #[test]
    fn display() {
        let report = Coder::default()
            .run(
                &table(&[("A", 0.65), ("B", 0.15), ("C", 0.06), ("D", 0.14)]),
                Some("ACBA"),
            )
            .unwrap();
        assert_eq!(
            report.to_string(),
            "Huffman Codes:\n\
             A: 1\n\
             B: 00\n\
             C: 010\n\
             D: 011\n\
             Encoded Text: 1010001\n\
             Entropy: 1.4552 bit\n\
             Average Length of the code: 1.5500\n\
             Efficiency of the code: 0.9388"
        );

        let single = Coder::default().run(&table(&[("A", 1.0)]), None).unwrap();
        assert_eq!(
            single.to_string(),
            "Huffman Codes:\n\
             A: \n\
             Entropy: 0.0000 bit\n\
             Average Length of the code: 0.0000\n\
             Efficiency of the code: undefined"
        );
    }
}
