//! Letter and syllable predicates shared by several stages.

use crate::word::CONSONANT_Y;

/// `a e i o u y`. The marked `Y` is deliberately not a vowel.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

pub fn has_vowel(chars: &[char]) -> bool {
    chars.iter().any(|&c| is_vowel(c))
}

/// A short syllable is either
///  (a) a vowel followed by a non-vowel other than `w`, `x` or `Y` and preceded by a non-vowel, or
///  (b) a vowel at the beginning of the word followed by a non-vowel.
///
/// Only the end of `chars` is inspected.
pub fn is_short_syllable(chars: &[char]) -> bool {
    match chars {
        [] | [_] => false,
        [first, second] => is_vowel(*first) && !is_vowel(*second),
        [.., a, b, c] => {
            !is_vowel(*a) && is_vowel(*b) && !is_vowel(*c) && !matches!(*c, 'w' | 'x' | CONSONANT_Y)
        }
    }
}

/// A word is short if R1 is null and it ends in a short syllable.
pub fn is_short_word(chars: &[char], r1: usize) -> bool {
    r1 >= chars.len() && is_short_syllable(chars)
}
