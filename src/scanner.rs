// Boolmatch Scanner Driver
// Streams normalized text through the automaton with word tracking

use crate::automaton::{Automaton, StateId, ROOT};
use crate::expr::Leaf;
use crate::normalize::{is_word_char, BOUNDARY};
use crate::types::MatchData;

/// Single-pass driver feeding one document to the automaton.
///
/// Emits a `BOUNDARY` sentinel at every word-category transition (plus a
/// trailing one after word-final input) so word-edge anchoring happens
/// inside the automaton, counts words 1-based, and records hits into the
/// per-leaf hit table. Created fresh for every scan, which is what resets
/// the scanner state between documents.
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    leaves: &'a [Leaf],
    state: StateId,
    /// Code points consumed, sentinels excluded
    pos: usize,
    /// 1-based index of the current word
    word: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(automaton: &'a Automaton, leaves: &'a [Leaf]) -> Self {
        Self {
            automaton,
            leaves,
            state: ROOT,
            pos: 0,
            word: 0,
        }
    }

    /// Scan one normalized document, appending hits to `hits` (indexed by
    /// `LeafId`, parallel to the leaf table).
    pub fn scan(&mut self, input: &[char], hits: &mut [Vec<MatchData>]) {
        let mut prev_is_word = false;
        for &c in input {
            let is_word = is_word_char(c);
            if is_word != prev_is_word {
                if is_word {
                    self.word += 1;
                }
                self.feed(BOUNDARY, hits);
            }
            prev_is_word = is_word;
            self.feed(c, hits);
        }
        if prev_is_word {
            self.feed(BOUNDARY, hits);
        }
    }

    /// Feed a single code point (real or sentinel) to the automaton
    fn feed(&mut self, c: char, hits: &mut [Vec<MatchData>]) {
        let pos = self.pos;
        if c != BOUNDARY {
            self.pos += 1;
        }

        match self.automaton.step(self.state, c) {
            Some(next) => {
                self.state = next;
                for &leaf in self.automaton.output(next) {
                    let size = self.leaves[leaf].size;
                    hits[leaf].push(MatchData::new(pos + 1 - size, size, self.word));
                }
            }
            None => self.state = ROOT,
        }
    }
}
