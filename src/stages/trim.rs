//! Steps 1c and 5, which only look at the last couple of characters.

use tracing::trace;

use crate::classify::{is_short_syllable, is_vowel};
use crate::region::{Gate, Regions};
use crate::word::{CONSONANT_Y, Word};

/// Step 1c: a final `y` or `Y` becomes `i` when preceded by a non-vowel
/// that is not the first letter (`cry` -> `cri`, `by` -> `by`, `say` -> `say`).
pub fn step1c(word: &mut Word) -> bool {
    if word.len() <= 2 || !matches!(word.last(), Some('y' | CONSONANT_Y)) {
        return false;
    }
    if word.from_end(1).is_some_and(is_vowel) {
        return false;
    }

    word.set_last('i');
    trace!(stage = "step1c", word = %word, "replaced final y");
    true
}

/// Step 5: delete a final `e` if it is in R2, or in R1 and not preceded by
/// a short syllable; delete a final `l` if it is in R2 and preceded by `l`.
pub fn step5(word: &mut Word, regions: Regions) -> bool {
    let len = word.len();
    let delete = match word.last() {
        Some('e') => {
            regions.admits(Gate::R2, len, 1)
                || (regions.admits(Gate::R1, len, 1)
                    && !is_short_syllable(&word.as_chars()[..len - 1]))
        }
        Some('l') => regions.admits(Gate::R2, len, 1) && word.from_end(1) == Some('l'),
        _ => false,
    };

    if delete {
        word.pop();
        trace!(stage = "step5", word = %word, "trimmed final letter");
    }
    delete
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step1c() {
        let cases = [
            ("cry", "cri"),
            ("by", "by"),
            ("say", "say"),
            ("happy", "happi"),
            ("apology", "apologi"),
            ("flY", "fli"),
            ("saY", "saY"),
        ];

        for (input, expected) in cases {
            let mut word = Word::lowercase(input);
            if input.ends_with(CONSONANT_Y) {
                word.set_last(CONSONANT_Y);
            }
            step1c(&mut word);
            assert_eq!(word.to_string(), expected, "step1c on '{}'", input);
        }
    }

    #[test]
    fn test_step5() {
        let cases = [
            ("probate", "probat"),
            ("rate", "rate"),
            ("cease", "ceas"),
            ("controll", "control"),
            ("roll", "roll"),
        ];

        for (input, expected) in cases {
            let mut word = Word::lowercase(input);
            let regions = Regions::locate(word.as_chars());
            step5(&mut word, regions);
            assert_eq!(word.to_string(), expected, "step5 on '{}'", input);
        }
    }

    #[test]
    fn test_step5_uses_precomputed_regions() {
        // Regions of a longer word: the final `e` now sits before R1.
        let mut word = Word::lowercase("hope");
        assert!(!step5(&mut word, Regions { r1: 5, r2: 7 }));
        assert_eq!(word.to_string(), "hope");
    }
}
