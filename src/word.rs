//! The mutable word buffer every stage works on.
//!
//! Stages only ever touch the tail of the buffer: they truncate a matched
//! suffix, append a short replacement, or overwrite the last character.
//! The head is never rewritten, which is what keeps the region offsets
//! computed after normalization valid for the whole pipeline.

use std::fmt;

use crate::classify::is_vowel;

/// Marks a `y` that acts as a consonant (word-initial or after a vowel).
pub const CONSONANT_Y: char = 'Y';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    chars: Vec<char>,
}

impl Word {
    /// Lowercased copy of `text`, with no other normalization applied.
    pub fn lowercase(text: &str) -> Self {
        Self {
            chars: text.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    /// Drop a leading apostrophe, then mark consonant `y`s with [`CONSONANT_Y`].
    pub fn normalize(&mut self) {
        if self.chars.first() == Some(&'\'') {
            self.chars.remove(0);
        }

        if let Some(first) = self.chars.first_mut() {
            if *first == 'y' {
                *first = CONSONANT_Y;
            }
        }

        for i in 1..self.chars.len() {
            if self.chars[i] == 'y' && is_vowel(self.chars[i - 1]) {
                self.chars[i] = CONSONANT_Y;
            }
        }
    }

    /// Turn every marked `Y` back into a plain `y`.
    pub fn postlude(&mut self) {
        for c in self.chars.iter_mut() {
            if *c == CONSONANT_Y {
                *c = 'y';
            }
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Character `n` positions before the last one (`0` is the last character).
    pub fn from_end(&self, n: usize) -> Option<char> {
        self.chars.len().checked_sub(n + 1).map(|i| self.chars[i])
    }

    /// Remove the last `n` characters.
    pub fn truncate_suffix(&mut self, n: usize) {
        let keep = self.chars.len().saturating_sub(n);
        self.chars.truncate(keep);
    }

    pub fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.chars.extend(s.chars());
    }

    pub fn set_last(&mut self, c: char) {
        if let Some(last) = self.chars.last_mut() {
            *last = c;
        }
    }

    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.chars.into_iter().collect()
    }
}
