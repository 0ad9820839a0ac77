// Boolmatch Matching Engine
// Public API tying the parser, automaton and scanner together

use crate::automaton::Automaton;
use crate::expr::{Expr, Leaf};
use crate::normalize::normalize;
use crate::parser::parse;
use crate::scanner::Scanner;
use crate::types::{MatchData, ParseError};
use std::fmt;

/// A compiled, reusable boolean search query.
///
/// Compiles the expression once, then evaluates it against any number of
/// documents. The automaton over all leaf patterns is built lazily on the
/// first scan; every scan starts by clearing the previous hits, so repeated
/// calls are independent.
///
/// Matching takes `&mut self` because the matcher owns the per-scan hit
/// table; to scan in parallel, compile one `Matcher` per thread.
///
/// # Examples
/// ```
/// # use boolmatch::Matcher;
/// let mut m = Matcher::new("apple AND orange")?;
/// assert!(m.is_match("I've got an apple and an orange"));
/// assert!(!m.is_match("I've only got an apple"));
/// # Ok::<(), boolmatch::ParseError>(())
/// ```
pub struct Matcher {
    expr: Expr,
    leaves: Vec<Leaf>,
    automaton: Option<Automaton>,
    /// Per-leaf match lists, indexed by `LeafId`
    hits: Vec<Vec<MatchData>>,
}

impl Matcher {
    /// Compile a search expression.
    ///
    /// # Arguments
    /// * `expression` - Query text, e.g. `"happy NEAR (human OR \"the cat\")"`
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the malformed expression.
    pub fn new(expression: &str) -> Result<Self, ParseError> {
        let parsed = parse(expression)?;
        let hits = vec![Vec::new(); parsed.leaves.len()];
        Ok(Self {
            expr: parsed.root,
            leaves: parsed.leaves,
            automaton: None,
            hits,
        })
    }

    /// Returns true if the document satisfies the expression
    pub fn is_match(&mut self, text: &str) -> bool {
        self.scan(text);
        self.expr.eval(&self.hits)
    }

    /// Scan the document and return the full match set.
    ///
    /// # Examples
    /// ```
    /// # use boolmatch::Matcher;
    /// let mut m = Matcher::new("world")?;
    /// let result = m.search("Hello world!");
    /// assert!(result.has_match());
    /// # Ok::<(), boolmatch::ParseError>(())
    /// ```
    pub fn search(&mut self, text: &str) -> SearchResult {
        let input = self.scan(text);
        SearchResult {
            matches: self.expr.matches(&self.hits),
            input,
        }
    }

    /// Number of leaf terms in the compiled expression
    pub fn term_count(&self) -> usize {
        self.leaves.len()
    }

    /// Normalize the document and stream it through the automaton,
    /// building the automaton first if this is the first scan
    fn scan(&mut self, text: &str) -> Vec<char> {
        self.prepare();
        let input: Vec<char> = normalize(text).chars().collect();
        if let Some(automaton) = &self.automaton {
            let mut scanner = Scanner::new(automaton, &self.leaves);
            scanner.scan(&input, &mut self.hits);
        }
        input
    }

    fn prepare(&mut self) {
        if self.automaton.is_none() {
            let mut automaton = Automaton::new();
            for (id, leaf) in self.leaves.iter().enumerate() {
                automaton.insert(&leaf.pattern, id);
            }
            automaton.build();
            self.automaton = Some(automaton);
        }
        for leaf_hits in &mut self.hits {
            leaf_hits.clear();
        }
    }
}

impl fmt::Display for Matcher {
    /// Canonical parenthesized form of the compiled expression
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}

/// Outcome of [`Matcher::search`]: the normalized input and every match
/// record the expression aggregated over it.
#[derive(Debug, Clone)]
pub struct SearchResult {
    input: Vec<char>,
    matches: Vec<MatchData>,
}

impl SearchResult {
    /// True if the match list is non-empty
    pub fn has_match(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Aggregated match records, in evaluation order
    pub fn matches(&self) -> &[MatchData] {
        &self.matches
    }

    /// The normalized input the positions refer to
    pub fn input(&self) -> &[char] {
        &self.input
    }

    /// A human-readable excerpt around the first match.
    ///
    /// The window around the match is widened twice to the nearest space on
    /// each side, then re-encoded as UTF-8 with ellipses marking truncated
    /// edges. Empty when there is no match.
    pub fn hit_sentence(&self) -> String {
        let first = match self.matches.first() {
            Some(m) => m,
            None => return String::new(),
        };

        let len = self.input.len();
        let mut i0 = first.pos.min(len);
        let mut i1 = (first.pos + first.len).min(len);

        for _ in 0..2 {
            if i0 > 0 {
                i0 = self.input[..i0]
                    .iter()
                    .rposition(|&c| c == ' ')
                    .unwrap_or(0);
            }
            if i1 < len {
                i1 = self.input[i1 + 1..]
                    .iter()
                    .position(|&c| c == ' ')
                    .map(|p| i1 + 1 + p)
                    .unwrap_or(len);
            }
        }

        let mut sentence: String = self.input[i0..i1].iter().collect();
        if i0 > 0 {
            sentence.insert_str(0, "… ");
        }
        if i1 < len {
            sentence.push_str(" …");
        }
        sentence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_surfaces() {
        assert!(Matcher::new("a AND OR b").is_err());
        assert!(Matcher::new("hello").is_ok());
    }

    #[test]
    fn test_term_count() {
        let m = Matcher::new("a AND (b OR \"c d\")").unwrap();
        assert_eq!(m.term_count(), 3);
    }

    #[test]
    fn test_display_round_trip() {
        let m = Matcher::new("one NOT (two OR three)").unwrap();
        assert_eq!(m.to_string(), "(one NOT (two OR three))");
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let mut m = Matcher::new("apple AND orange").unwrap();
        let text = "an apple and an orange";
        assert!(m.is_match(text));
        assert!(m.is_match(text));
        assert!(!m.is_match("only an apple"));
        assert!(m.is_match(text));
    }

    #[test]
    fn test_search_after_match_sees_fresh_hits() {
        let mut m = Matcher::new("apple").unwrap();
        assert!(m.is_match("apple apple"));
        let result = m.search("one apple here");
        assert_eq!(result.matches().len(), 1);
    }

    #[test]
    fn test_empty_search_result() {
        let mut m = Matcher::new("missing").unwrap();
        let result = m.search("nothing to see");
        assert!(!result.has_match());
        assert!(result.matches().is_empty());
        assert_eq!(result.hit_sentence(), "");
    }

    #[test]
    fn test_hit_sentence_middle_of_text() {
        let mut m = Matcher::new("fox").unwrap();
        let result = m.search("the quick brown fox jumps over the lazy dog today");
        let sentence = result.hit_sentence();
        assert!(sentence.contains("fox"));
        assert!(sentence.starts_with("… "));
        assert!(sentence.ends_with(" …"));
    }

    #[test]
    fn test_hit_sentence_at_text_start() {
        let mut m = Matcher::new("alpha").unwrap();
        let result = m.search("alpha beta gamma delta epsilon zeta");
        let sentence = result.hit_sentence();
        assert!(sentence.starts_with("alpha"));
        assert!(sentence.ends_with(" …"));
    }

    #[test]
    fn test_hit_sentence_short_input() {
        let mut m = Matcher::new("x").unwrap();
        let result = m.search("x");
        assert!(result.has_match());
        // the whole input fits, no ellipses
        let sentence = result.hit_sentence();
        assert!(!sentence.contains('…'));
    }

    #[test]
    fn test_snippet_is_substring_of_normalized_input() {
        let mut m = Matcher::new("brown").unwrap();
        let result = m.search("The QUICK brown fox jumps over the lazy dog indeed");
        let normalized: String = result.input().iter().collect();
        let sentence = result.hit_sentence();
        let core = sentence
            .trim_start_matches("… ")
            .trim_end_matches(" …");
        assert!(normalized.contains(core));
    }
}
