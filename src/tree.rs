//! The two steps of Huffman's algorithm.
//!
//! [`build_tree`] is the forward step: it repeatedly combines the two lightest
//! nodes into one node whose weight is the sum of its parts, until a single
//! root remains. [`generate_codes`] is the backward step: it unfolds the tree
//! from the root, prefixing `0` to everything on the left and `1` to
//! everything on the right.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{CodeTable, Encoded, ProbabilityTable};

const ZERO: bool = false;
const ONE: bool = true;

/// A node of the merge tree.
///
/// Leaves carry one symbol of the alphabet and its probability. Internal nodes
/// own their two children and weigh as much as both of them together.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeNode {
    Leaf {
        symbol: String,
        weight: f64,
    },
    Internal {
        weight: f64,
        left: Box<MergeNode>,
        right: Box<MergeNode>,
    },
}

impl MergeNode {
    pub fn weight(&self) -> f64 {
        match self {
            MergeNode::Leaf { weight, .. } | MergeNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MergeNode::Leaf { .. })
    }
}

// A node waiting to be merged. `order` is the sequence number in which it
// entered the working collection.
#[derive(Debug)]
struct Pending {
    node: MergeNode,
    order: usize,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped so that the max-heap pops the lightest node first, and the
        // oldest one among equally heavy nodes.
        other
            .node
            .weight()
            .total_cmp(&self.node.weight())
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Builds the merge tree for a table of symbol probabilities.
///
/// Leaves enter the working collection in ascending symbol order and every
/// merged node is appended after them, so when two nodes weigh the same the
/// one that entered first is merged first and becomes the left child. The
/// resulting tree does not depend on the iteration order of the table.
///
/// # Examples
///
/// ```
/// use huffman_coder::{build_tree, MergeNode, ProbabilityTable};
///
/// let mut probabilities = ProbabilityTable::new();
/// probabilities.insert("a".to_string(), 0.75);
/// probabilities.insert("b".to_string(), 0.25);
///
/// let root = build_tree(&probabilities).unwrap();
/// assert_eq!(root.weight(), 1.0);
/// assert!(!root.is_leaf());
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyAlphabet`] for an empty table and
/// [`Error::InvalidProbability`] if a probability is negative or not finite.
pub fn build_tree(probabilities: &ProbabilityTable) -> Result<MergeNode> {
    if probabilities.is_empty() {
        return Err(Error::EmptyAlphabet);
    }
    let mut symbols = probabilities.iter().collect::<Vec<(&String, &f64)>>();
    symbols.sort_by(|a, b| a.0.cmp(b.0));

    let mut heap = BinaryHeap::with_capacity(symbols.len());
    for (order, (symbol, &weight)) in symbols.into_iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidProbability {
                symbol: symbol.clone(),
                probability: weight,
            });
        }
        heap.push(Pending {
            node: MergeNode::Leaf {
                symbol: symbol.clone(),
                weight,
            },
            order,
        });
    }
    debug!("Building merge tree over {} symbols", heap.len());

    let mut order = heap.len();
    while let Some(left) = heap.pop() {
        let right = match heap.pop() {
            Some(right) => right,
            None => return Ok(left.node),
        };
        let weight = left.node.weight() + right.node.weight();
        trace!(
            "Merging nodes {} ({}) and {} ({}) into {} ({})",
            left.order,
            left.node.weight(),
            right.order,
            right.node.weight(),
            order,
            weight
        );
        heap.push(Pending {
            node: MergeNode::Internal {
                weight,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
            order,
        });
        order += 1;
    }
    Err(Error::EmptyAlphabet)
}

fn split(node: &MergeNode, prefix: &Encoded, codes: &mut CodeTable) {
    match node {
        MergeNode::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), prefix.clone());
        }
        MergeNode::Internal { left, right, .. } => {
            let mut lprefix = prefix.clone();
            lprefix.push(ZERO);
            split(left, &lprefix, codes);
            let mut rprefix = prefix.clone();
            rprefix.push(ONE);
            split(right, &rprefix, codes);
        }
    }
}

/// Derives the code word of every leaf of the tree.
///
/// A tree made of a single leaf gives that leaf the empty code word.
pub fn generate_codes(root: &MergeNode) -> CodeTable {
    let mut codes = CodeTable::new();
    split(root, &Encoded::new(), &mut codes);
    codes
}
