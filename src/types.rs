// Boolmatch Type Definitions
// Core types for query compilation and match reporting

use thiserror::Error;

/// A single recorded occurrence of a leaf pattern in the scanned text.
///
/// Positions are code-point offsets into the normalized input; `word_index`
/// is the 1-based ordinal of the word in which the pattern ended, which is
/// what the proximity operators compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchData {
    /// Code-point offset of the match in the normalized input
    pub pos: usize,

    /// Code-point length of the matched pattern (sentinels excluded)
    pub len: usize,

    /// 1-based ordinal of the word the match ended in
    pub word_index: usize,
}

impl MatchData {
    /// Create a new match record
    pub fn new(pos: usize, len: usize, word_index: usize) -> Self {
        Self {
            pos,
            len,
            word_index,
        }
    }
}

/// Expression compilation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Two operators with no term between them, e.g. `a AND OR b`
    #[error("Invalid expression: missing term between operators")]
    MissingTerm,

    /// A parenthesis without a matching partner
    #[error("Invalid expression: mismatched parentheses")]
    MismatchedParentheses,

    /// An operator was left without enough operands, e.g. `NOT hello`
    #[error("Invalid expression: operator is missing an operand")]
    StackUnderflow,

    /// The expression is empty or whitespace-only
    #[error("Invalid expression: no terms")]
    NoTokens,

    /// More than one root remained after reduction
    #[error("Invalid expression: multiple expression roots")]
    MultipleRoots,
}
