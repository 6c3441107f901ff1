//! Backward suffix automaton.
//!
//! A [`SuffixTable`] is a trie over reversed suffixes, unrolled into two flat
//! arrays: `transitions[state][symbol]` gives the next state when reading one
//! more character from the end of the word, and `accepts[state]` says which
//! suffix (if any) has been fully read on reaching `state`. The root is state
//! `0`; since no transition ever points back to it, `0` doubles as "no
//! transition".
//!
//! Walking a word from its last character keeps the deepest accepting state
//! seen, so the longest suffix always wins.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// `a`..=`z` plus the apostrophe.
pub const ALPHABET_SIZE: usize = 27;

const ROOT: u16 = 0;
const NO_TRANSITION: u16 = ROOT;

/// Column index for `c`, or `None` for characters no suffix can contain.
pub fn symbol(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        '\'' => Some(26),
        _ => None,
    }
}

/// A suffix that is complete at some state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accept {
    /// Length of the matched suffix in characters.
    pub len: usize,
    /// Position of the suffix in the list the table was built from.
    pub rule: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixTable {
    transitions: Vec<[u16; ALPHABET_SIZE]>,
    accepts: Vec<Option<Accept>>,
}

impl SuffixTable {
    /// Build a table from a list of suffixes. The index of each suffix in
    /// the list becomes its [`Accept::rule`].
    pub fn build<I, S>(suffixes: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self {
            transitions: vec![[NO_TRANSITION; ALPHABET_SIZE]],
            accepts: vec![None],
        };

        for (rule, suffix) in suffixes.into_iter().enumerate() {
            table.insert(suffix.as_ref(), rule)?;
        }

        Ok(table)
    }

    fn insert(&mut self, suffix: &str, rule: usize) -> Result<(), TableError> {
        if suffix.is_empty() {
            return Err(TableError::EmptySuffix);
        }

        let mut state = ROOT as usize;
        let mut len = 0;
        for c in suffix.chars().rev() {
            let sym = symbol(c).ok_or_else(|| TableError::UnsupportedChar {
                suffix: suffix.to_string(),
                ch: c,
            })?;
            len += 1;

            let next = self.transitions[state][sym];
            state = if next == NO_TRANSITION {
                let new_state = self.add_state()?;
                self.transitions[state][sym] = new_state as u16;
                new_state
            } else {
                next as usize
            };
        }

        if self.accepts[state].is_some() {
            return Err(TableError::DuplicateSuffix(suffix.to_string()));
        }
        self.accepts[state] = Some(Accept { len, rule });
        Ok(())
    }

    fn add_state(&mut self) -> Result<usize, TableError> {
        let id = self.transitions.len();
        if id > u16::MAX as usize {
            return Err(TableError::TooManyStates(id + 1));
        }
        self.transitions.push([NO_TRANSITION; ALPHABET_SIZE]);
        self.accepts.push(None);
        Ok(id)
    }

    /// Longest suffix of `word` present in the table.
    pub fn longest_match(&self, word: &[char]) -> Option<Accept> {
        let mut state = ROOT as usize;
        let mut best = None;

        for &c in word.iter().rev() {
            let Some(sym) = symbol(c) else { break };
            let next = self.transitions[state][sym];
            if next == NO_TRANSITION {
                break;
            }
            state = next as usize;
            if let Some(accept) = self.accepts[state] {
                best = Some(accept);
            }
        }

        best
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Outgoing `(char, state)` edges of `state`, in alphabet order.
    pub fn edges(&self, state: usize) -> impl Iterator<Item = (char, usize)> + '_ {
        self.transitions[state]
            .iter()
            .enumerate()
            .filter(|(_, next)| **next != NO_TRANSITION)
            .map(|(sym, next)| (symbol_char(sym), *next as usize))
    }

    pub fn accept(&self, state: usize) -> Option<Accept> {
        self.accepts[state]
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn symbol_char(sym: usize) -> char {
    if sym == 26 { '\'' } else { (b'a' + sym as u8) as char }
}
