//! # Boolmatch: Boolean Text Matching Engine
//!
//! Evaluates boolean search expressions against free-form Unicode text and
//! reports whether a document matches, with optional match positions and a
//! contextual snippet. Built for filtering and alerting pipelines where one
//! user-supplied query runs against many documents.
//!
//! ## Query Language
//!
//! Terms are joined by the uppercase operators `AND`, `OR`, `NOT`, `NEAR`
//! and `ONEAR`, grouped with parentheses:
//!
//! - `apple AND orange` - both words must appear
//! - `war OR peace` - either word suffices; two adjacent terms imply `OR`
//! - `one NOT (two OR three)` - left matches while right does not
//! - `happy NEAR human` - within four words in either direction
//! - `beautiful ONEAR Martian` - within four words, right side after left
//! - `"hello world"` - quoted phrase, matched as adjacent words
//! - `hello*`, `*ello`, `*ello*` - prefix, suffix and substring wildcards
//!
//! Matching is case-insensitive and Unicode-normalized on both sides; bare
//! terms match whole words only.
//!
//! ## Example Usage
//!
//! ```
//! use boolmatch::Matcher;
//!
//! let mut matcher = Matcher::new("happy NEAR human")?;
//!
//! assert!(matcher.is_match("There is a happy human drinking coffee"));
//! assert!(!matcher.is_match("There is a sad human in the room"));
//!
//! let result = matcher.search("A happy, friendly human waved at us");
//! assert!(result.has_match());
//! println!("{}", result.hit_sentence());
//! # Ok::<(), boolmatch::ParseError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Tokenizer/Parser** - compiles the expression into a boolean tree
//!   whose leaves are encoded phrase patterns
//! - **Aho-Corasick Automaton** - locates every leaf pattern in one pass
//!   over the normalized input
//! - **Scanner Driver** - emits word-boundary sentinels and tracks
//!   code-point and word positions
//! - **Evaluator** - folds per-leaf match sets through the operators and
//!   extracts snippets

pub mod automaton;
pub mod expr;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod scanner;
pub mod tokenize;
pub mod types;

// Re-export main types and functions for convenience
pub use expr::{Expr, Leaf, LeafId};
pub use matcher::{Matcher, SearchResult};
pub use normalize::{is_word_char, normalize, BOUNDARY};
pub use parser::{parse, ParsedExpression};
pub use tokenize::{tokenize, Token};
pub use types::{MatchData, ParseError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
