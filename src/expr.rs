// Boolmatch Expression Tree
// Boolean/proximity node hierarchy and leaf pattern encoding

use crate::normalize::{is_word_char, BOUNDARY};
use crate::types::MatchData;
use std::fmt;

/// Index of a leaf in the matcher's leaf table.
///
/// The automaton's output sets and the per-leaf hit table are both keyed by
/// this id, so the automaton never holds references into the tree.
pub type LeafId = usize;

/// An encoded leaf pattern ready for automaton insertion
#[derive(Debug, Clone)]
pub struct Leaf {
    /// Code-point sequence with interleaved boundary sentinels
    pub pattern: Vec<char>,

    /// Count of real pattern characters; used to derive match positions
    pub size: usize,
}

impl Leaf {
    /// Encode a normalized phrase into an automaton pattern.
    ///
    /// A `*` at either end suppresses the word-edge sentinel on that side
    /// (and is stripped); otherwise the pattern is anchored with `BOUNDARY`.
    /// A sentinel is also inserted at every interior word/non-word category
    /// transition, so a quoted phrase like `hello world` only matches where
    /// its whitespace really separates the two words. Interior `*` is not a
    /// wildcard and encodes as itself.
    ///
    /// `size` counts the pattern characters above `0x20` that are not
    /// sentinels; it is subtracted from the automaton's end position to
    /// recover the match start.
    pub fn encode(phrase: &str) -> Self {
        let chars: Vec<char> = phrase.chars().collect();
        let mut term = &chars[..];

        let mut pattern = Vec::with_capacity(chars.len() + 2);
        if term.first() == Some(&'*') {
            term = &term[1..];
        } else {
            pattern.push(BOUNDARY);
        }
        let trailing = if term.last() == Some(&'*') {
            term = &term[..term.len() - 1];
            false
        } else {
            true
        };

        let mut prev_is_word = false;
        for (i, &c) in term.iter().enumerate() {
            let is_word = is_word_char(c);
            if i > 0 && is_word != prev_is_word {
                pattern.push(BOUNDARY);
            }
            prev_is_word = is_word;
            pattern.push(c);
        }
        if trailing {
            pattern.push(BOUNDARY);
        }

        let size = pattern
            .iter()
            .filter(|&&c| c as u32 > 0x20 && c != BOUNDARY)
            .count();

        Self { pattern, size }
    }
}

/// A node of the compiled boolean expression tree.
///
/// The tree owns its children; leaves are referenced by `LeafId` into the
/// matcher's leaf table, and all evaluation reads the per-leaf hit table
/// filled in by the scanner.
#[derive(Debug)]
pub enum Expr {
    /// A phrase leaf; `raw` keeps the normalized source text for display
    Term { leaf: LeafId, raw: String },
    /// Both sides must match
    And { left: Box<Expr>, right: Box<Expr> },
    /// Either side may match
    Or { left: Box<Expr>, right: Box<Expr> },
    /// Left must match while right matches nowhere
    AndNot { left: Box<Expr>, right: Box<Expr> },
    /// Word-distance proximity; `ONEAR` fixes `left_distance` to zero
    Near {
        left: Box<Expr>,
        right: Box<Expr>,
        left_distance: usize,
        right_distance: usize,
    },
}

impl Expr {
    /// Evaluate the node against the scanned hit table
    pub fn eval(&self, hits: &[Vec<MatchData>]) -> bool {
        match self {
            Expr::Term { leaf, .. } => !hits[*leaf].is_empty(),
            Expr::And { left, right } => left.eval(hits) && right.eval(hits),
            Expr::Or { left, right } => left.eval(hits) || right.eval(hits),
            Expr::AndNot { left, right } => !right.eval(hits) && left.eval(hits),
            Expr::Near { .. } => !self.matches(hits).is_empty(),
        }
    }

    /// Aggregate the match records contributing to this node.
    ///
    /// Concatenation order is left before right and no deduplication is
    /// performed; `Near` pushes both sides of every qualifying pair, so a
    /// match shared by several pairs appears several times.
    pub fn matches(&self, hits: &[Vec<MatchData>]) -> Vec<MatchData> {
        match self {
            Expr::Term { leaf, .. } => hits[*leaf].clone(),
            Expr::And { left, right } => {
                let mut left_matches = left.matches(hits);
                if left_matches.is_empty() {
                    return Vec::new();
                }
                let right_matches = right.matches(hits);
                if right_matches.is_empty() {
                    return Vec::new();
                }
                left_matches.extend(right_matches);
                left_matches
            }
            Expr::Or { left, right } => {
                let mut all = left.matches(hits);
                all.extend(right.matches(hits));
                all
            }
            Expr::AndNot { left, right } => {
                if right.eval(hits) {
                    Vec::new()
                } else {
                    left.matches(hits)
                }
            }
            Expr::Near {
                left,
                right,
                left_distance,
                right_distance,
            } => {
                let left_matches = left.matches(hits);
                let mut result = Vec::new();
                if !left_matches.is_empty() {
                    let right_matches = right.matches(hits);
                    for lm in &left_matches {
                        let lo = lm.word_index.saturating_sub(*left_distance);
                        let hi = lm.word_index + *right_distance;
                        for rm in &right_matches {
                            if rm.word_index >= lo && rm.word_index <= hi {
                                result.push(*lm);
                                result.push(*rm);
                            }
                        }
                    }
                }
                result
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Canonical parenthesized form, e.g. `((a OR b) AND c)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Term { raw, .. } => {
                if raw.contains(char::is_whitespace) || raw.is_empty() {
                    write!(f, "\"{}\"", raw)
                } else {
                    write!(f, "{}", raw)
                }
            }
            Expr::And { left, right } => write!(f, "({} AND {})", left, right),
            Expr::Or { left, right } => write!(f, "({} OR {})", left, right),
            Expr::AndNot { left, right } => write!(f, "({} NOT {})", left, right),
            Expr::Near {
                left,
                right,
                left_distance,
                ..
            } => {
                let op = if *left_distance == 0 { "ONEAR" } else { "NEAR" };
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}
