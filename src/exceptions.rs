//! Whole-word exception tables.
//!
//! `overrides` is consulted before any stage runs and replaces the word
//! outright. `invariants` is consulted right after step 1a and stops the
//! pipeline so the word comes out as it is.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::word::Word;

/// Last letters a word must end with to be looked up in the override table.
const OVERRIDE_ENDINGS: [char; 4] = ['s', 'g', 'y', 'e'];
const OVERRIDE_MAX_LEN: usize = 6;

/// Last letters a word must end with to be looked up in the invariant table.
const INVARIANT_ENDINGS: [char; 2] = ['g', 'd'];
const INVARIANT_LENS: [usize; 2] = [6, 7];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExceptionTables {
    pub overrides: HashMap<String, String>,
    pub invariants: HashSet<String>,
}

static TABLES: Lazy<ExceptionTables> = Lazy::new(|| {
    let data = include_str!("../data/exceptions.json");
    serde_json::from_str(data).expect("Failed to parse exceptions.json")
});

pub fn tables() -> &'static ExceptionTables {
    &TABLES
}

impl ExceptionTables {
    /// Literal replacement for an irregular word, if it has one.
    pub fn lookup_override(&self, word: &Word) -> Option<&str> {
        if word.len() > OVERRIDE_MAX_LEN
            || !word.last().is_some_and(|c| OVERRIDE_ENDINGS.contains(&c))
        {
            return None;
        }
        self.overrides.get(&word.to_string()).map(String::as_str)
    }

    /// Whether the word must leave the pipeline unchanged after step 1a.
    pub fn is_invariant(&self, word: &Word) -> bool {
        if !INVARIANT_LENS.contains(&word.len())
            || !word.last().is_some_and(|c| INVARIANT_ENDINGS.contains(&c))
        {
            return false;
        }
        self.invariants.contains(&word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let cases = [
            ("skis", "ski"),
            ("skies", "sky"),
            ("dying", "die"),
            ("lying", "lie"),
            ("tying", "tie"),
            ("idly", "idl"),
            ("gently", "gentl"),
            ("ugly", "ugli"),
            ("early", "earli"),
            ("only", "onli"),
            ("singly", "singl"),
            ("sky", "sky"),
            ("news", "news"),
            ("howe", "howe"),
            ("atlas", "atlas"),
            ("cosmos", "cosmos"),
            ("bias", "bias"),
            ("andes", "andes"),
        ];

        assert_eq!(tables().overrides.len(), cases.len());
        for (word, expected) in cases {
            assert_eq!(
                tables().lookup_override(&Word::lowercase(word)),
                Some(expected),
                "override for '{}'",
                word
            );
        }
    }

    #[test]
    fn test_override_misses() {
        assert_eq!(tables().lookup_override(&Word::lowercase("skiing")), None);
        assert_eq!(tables().lookup_override(&Word::lowercase("newsy")), None);
        assert_eq!(tables().lookup_override(&Word::lowercase("'skis")), None);
    }

    #[test]
    fn test_invariants() {
        let words = [
            "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
        ];
        for word in words {
            let w = Word::lowercase(word);
            assert!(tables().is_invariant(&w), "'{}' should be invariant", word);
        }
        assert_eq!(tables().invariants.len(), 8);

        for word in ["innings", "outings", "ceed", "exceeded", "running"] {
            let w = Word::lowercase(word);
            assert!(!tables().is_invariant(&w), "'{}' should not be invariant", word);
        }
    }
}
