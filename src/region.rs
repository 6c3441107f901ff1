//! R1 / R2 region boundaries.
//!
//! R1 is the region after the first non-vowel following a vowel, or the null
//! region at the end of the word if there is no such non-vowel. R2 is the same
//! thing computed inside R1. Words starting with `gener`, `commun` or `arsen`
//! have R1 fixed right after that prefix.
//!
//! Offsets are computed once on the normalized word. Later stages only shorten
//! or rewrite the tail, so a suffix of length `m` lies in a region when
//! `len - offset >= m` for the current (possibly shorter) length.

use serde::{Deserialize, Serialize};

use crate::classify::is_vowel;

const FIXED_R1_PREFIXES: [&str; 3] = ["gener", "commun", "arsen"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

/// Which region, if any, a matched suffix has to fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    None,
    R1,
    R2,
}

impl Regions {
    pub fn locate(chars: &[char]) -> Self {
        let r1 = fixed_prefix_len(chars).unwrap_or_else(|| region_start(chars));
        let r2 = r1 + region_start(&chars[r1..]);
        Self { r1, r2 }
    }

    /// Whether a suffix of `suffix_len` characters at the end of a word of
    /// `word_len` characters lies entirely inside the gated region.
    pub fn admits(&self, gate: Gate, word_len: usize, suffix_len: usize) -> bool {
        let offset = match gate {
            Gate::None => return true,
            Gate::R1 => self.r1,
            Gate::R2 => self.r2,
        };
        word_len.saturating_sub(offset) >= suffix_len
    }
}

fn fixed_prefix_len(chars: &[char]) -> Option<usize> {
    FIXED_R1_PREFIXES
        .iter()
        .find(|prefix| {
            let n = prefix.len();
            chars.len() >= n && chars[..n].iter().copied().eq(prefix.chars())
        })
        .map(|prefix| prefix.len())
}

fn region_start(chars: &[char]) -> usize {
    chars
        .windows(2)
        .position(|pair| is_vowel(pair[0]) && !is_vowel(pair[1]))
        .map_or(chars.len(), |i| i + 2)
}
