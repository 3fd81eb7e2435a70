//! # Huffman coder
//!
//! `huffman-coder` builds minimum-redundancy codes for an alphabet of symbols
//! with known probabilities, using the
//! [Huffman coding](https://en.wikipedia.org/wiki/Huffman_coding) algorithm,
//! and measures how close the code comes to the entropy of the source.
//!
//! ```
//! use huffman_coder::*;
//!
//! let probabilities = probabilities("ACBABAAAADDAADBAADAADBAAAAAADA");
//! let report = Coder::default().run(&probabilities, Some("ACBA")).unwrap();
//! assert_eq!(report.codes.len(), 4);
//! assert!(report.statistics.efficiency.ratio().unwrap() <= 1.0);
//! println!("{}", report);
//! ```
//!
//! ## References
//!
//! * _Huffman, D.A., 1952. A method for the construction of minimum-redundancy codes. Proceedings of the IRE, 40(9), pp.1098-1101._
//! * _Shannon, C.E., 1948. A mathematical theory of communication. The Bell System Technical Journal, 27(3), pp.379-423._

use bitvec::prelude::*;
use log::warn;

mod coder;
mod error;
mod stats;
mod tree;

pub use coder::{Coder, Config, EncodeMode, Report};
pub use error::{Error, Result};
pub use stats::{average_length, entropy, Efficiency, Statistics};
pub use tree::{build_tree, generate_codes, MergeNode};

/// An encoded symbol is represented as
/// a [`bitvec::vec::BitVec`](https://docs.rs/bitvec/1.0.1/bitvec/vec/struct.BitVec.html), a contiguous
/// array of bits.
pub type Encoded = BitVec;
/// Probability of each symbol of the alphabet. The probabilities are not
/// required to sum to 1.
pub type ProbabilityTable = std::collections::HashMap<String, f64>;
/// The code word of each symbol of the alphabet.
pub type CodeTable = std::collections::HashMap<String, Encoded>;

/// Counts the characters of a sample text, most frequent first. Characters
/// that occur equally often are ordered by code point.
///
/// # Examples
///
/// ```
/// let freqs = huffman_coder::frequencies("ACBABAAAADDAADBAADAADBAAAAAADA");
/// assert_eq!(freqs, vec![('A', 19), ('D', 6), ('B', 4), ('C', 1)]);
/// ```
pub fn frequencies(s: &str) -> Vec<(char, usize)> {
    let mut counts = ::std::collections::HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let mut freqs = counts.into_iter().collect::<Vec<(char, usize)>>();
    freqs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    freqs
}

/// Estimates the probability of each character of a sample text from its
/// relative frequency.
///
/// ```
/// let probabilities = huffman_coder::probabilities("aaab");
/// assert_eq!(probabilities["a"], 0.75);
/// assert_eq!(probabilities["b"], 0.25);
/// ```
pub fn probabilities(s: &str) -> ProbabilityTable {
    let freqs = frequencies(s);
    let total = freqs.iter().map(|f| f.1).sum::<usize>() as f64;
    freqs
        .into_iter()
        .map(|(c, n)| (c.to_string(), n as f64 / total))
        .collect()
}

/// Encodes an input string with a code table, one character at a time.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use huffman_coder::*;
///
/// let mut codes = CodeTable::new();
/// codes.insert("a".to_string(), bitvec![0]);
/// codes.insert("b".to_string(), bitvec![1]);
/// assert_eq!(encode("baba", &codes).unwrap(), bitvec![1, 0, 1, 0]);
/// ```
///
/// # Errors
///
/// Returns an [`Error::UnknownSymbol`] with the first character of the input
/// that has no code word.
///
/// ```
/// use bitvec::prelude::*;
/// use huffman_coder::*;
///
/// let mut codes = CodeTable::new();
/// codes.insert("a".to_string(), bitvec![0]);
/// assert_eq!(encode("abc", &codes), Err(Error::UnknownSymbol("b".to_string())));
/// ```
pub fn encode(s: &str, codes: &CodeTable) -> Result<Encoded> {
    let mut encoded = Encoded::new();
    let mut buf = [0; 4];
    for c in s.chars() {
        match codes.get(&*c.encode_utf8(&mut buf)) {
            Some(code) => encoded.extend_from_bitslice(code.as_bitslice()),
            None => return Err(Error::UnknownSymbol(c.to_string())),
        }
    }
    Ok(encoded)
}

/// Like [`encode`], but characters without a code word are skipped.
pub fn encode_lossy(s: &str, codes: &CodeTable) -> Encoded {
    let mut encoded = Encoded::new();
    let mut buf = [0; 4];
    for c in s.chars() {
        match codes.get(&*c.encode_utf8(&mut buf)) {
            Some(code) => encoded.extend_from_bitslice(code.as_bitslice()),
            None => warn!("Skipping symbol {:?} with no code word", c),
        }
    }
    encoded
}

/// Renders bits as a string of `0` and `1`.
///
/// ```
/// use bitvec::prelude::*;
///
/// assert_eq!(huffman_coder::to_bit_string(&bitvec![0, 1, 1]), "011");
/// assert_eq!(huffman_coder::to_bit_string(&huffman_coder::Encoded::new()), "");
/// ```
pub fn to_bit_string(bits: &BitSlice) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}
