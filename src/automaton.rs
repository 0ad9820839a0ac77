// Boolmatch Aho-Corasick Automaton
// Shared multi-pattern trie with failure links and leaf output sets

use crate::expr::LeafId;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Index of a state in the automaton arena
pub type StateId = usize;

/// The root state
pub const ROOT: StateId = 0;

#[derive(Debug, Default)]
struct State {
    transitions: FxHashMap<char, StateId>,
    failure: StateId,
    output: FxHashSet<LeafId>,
}

/// Aho-Corasick automaton over all leaf patterns of one compiled query.
///
/// States live in an arena indexed by `StateId`; output sets hold `LeafId`
/// handles into the matcher's leaf table rather than references into the
/// expression tree. After `build()`, `output(s)` contains every leaf whose
/// pattern is a suffix of the path to `s`.
#[derive(Debug)]
pub struct Automaton {
    states: Vec<State>,
}

impl Automaton {
    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
        }
    }

    /// Insert one leaf pattern, extending the trie as needed.
    ///
    /// The empty pattern lands its output on the root, which the streaming
    /// step never reports; such leaves simply never match.
    pub fn insert(&mut self, pattern: &[char], leaf: LeafId) {
        let mut current = ROOT;
        for &c in pattern {
            current = match self.states[current].transitions.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.states.len();
                    self.states.push(State::default());
                    self.states[current].transitions.insert(c, next);
                    next
                }
            };
        }
        self.states[current].output.insert(leaf);
    }

    /// Compute failure links and chained outputs, breadth-first.
    ///
    /// Must run after every pattern is inserted; the links assume the trie
    /// is complete.
    pub fn build(&mut self) {
        let mut queue = VecDeque::new();

        let root_children: Vec<StateId> = self.states[ROOT].transitions.values().copied().collect();
        for child in root_children {
            self.states[child].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(state) = queue.pop_front() {
            let transitions: Vec<(char, StateId)> = self.states[state]
                .transitions
                .iter()
                .map(|(&c, &t)| (c, t))
                .collect();

            for (c, child) in transitions {
                // walk the parent's failure chain for the deepest proper
                // suffix state that can consume c
                let mut fail = self.states[state].failure;
                let target = loop {
                    if let Some(&next) = self.states[fail].transitions.get(&c) {
                        break next;
                    }
                    if fail == ROOT {
                        break ROOT;
                    }
                    fail = self.states[fail].failure;
                };
                self.states[child].failure = target;

                let inherited: Vec<LeafId> = self.states[target].output.iter().copied().collect();
                self.states[child].output.extend(inherited);

                queue.push_back(child);
            }
        }
    }

    /// One streaming step: follow failure links from `from` until a state
    /// with a transition on `c` is found. Returns the target, or `None`
    /// when the walk reaches the root without consuming `c` (the caller
    /// stays at the root and nothing is reported).
    pub fn step(&self, from: StateId, c: char) -> Option<StateId> {
        let mut state = from;
        loop {
            if let Some(&next) = self.states[state].transitions.get(&c) {
                return Some(next);
            }
            if state == ROOT {
                return None;
            }
            state = self.states[state].failure;
        }
    }

    /// Leaves whose patterns end at any path-suffix of `state`
    pub fn output(&self, state: StateId) -> &FxHashSet<LeafId> {
        &self.states[state].output
    }

    /// Number of states including the root
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}
