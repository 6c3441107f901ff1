//! Rule data for the table-driven steps.

use super::Guard::{Always, InR1, InR2, PrecededBy, StemHasVowel, VowelBeforePreceding};
use super::Rewrite::{Delete, DeleteThen, Keep, Replace};
use super::Rule;
use crate::classify::is_short_word;
use crate::region::Regions;
use crate::word::Word;

/// Letters that may precede a deletable `li` in step 2.
const LI_ENDINGS: &str = "cdeghkmnrt";

/// Doubled letters that step 1b undoubles (`hopp` -> `hop`, but `fall` stays).
const UNDOUBLED: &str = "bdfgmnprt";

pub static STEP0: &[Rule] = &[
    Rule::new("'", Always, Delete),
    Rule::new("'s", Always, Delete),
    Rule::new("'s'", Always, Delete),
];

pub static STEP1A: &[Rule] = &[
    Rule::new("sses", Always, Replace("ss")),
    Rule::new("ied", Always, DeleteThen(restore_i)),
    Rule::new("ies", Always, DeleteThen(restore_i)),
    Rule::new("s", VowelBeforePreceding, Delete),
    Rule::new("us", Always, Keep),
    Rule::new("ss", Always, Keep),
];

pub static STEP1B: &[Rule] = &[
    Rule::new("eedly", InR1, Replace("ee")),
    Rule::new("eed", InR1, Replace("ee")),
    Rule::new("ingly", StemHasVowel, DeleteThen(repair_ending)),
    Rule::new("edly", StemHasVowel, DeleteThen(repair_ending)),
    Rule::new("ing", StemHasVowel, DeleteThen(repair_ending)),
    Rule::new("ed", StemHasVowel, DeleteThen(repair_ending)),
];

pub static STEP2: &[Rule] = &[
    Rule::new("tional", Always, Replace("tion")),
    Rule::new("enci", Always, Replace("ence")),
    Rule::new("anci", Always, Replace("ance")),
    Rule::new("abli", Always, Replace("able")),
    Rule::new("entli", Always, Replace("ent")),
    Rule::new("izer", Always, Replace("ize")),
    Rule::new("ization", Always, Replace("ize")),
    Rule::new("ational", Always, Replace("ate")),
    Rule::new("ation", Always, Replace("ate")),
    Rule::new("ator", Always, Replace("ate")),
    Rule::new("alism", Always, Replace("al")),
    Rule::new("aliti", Always, Replace("al")),
    Rule::new("alli", Always, Replace("al")),
    Rule::new("fulness", Always, Replace("ful")),
    Rule::new("ousli", Always, Replace("ous")),
    Rule::new("ousness", Always, Replace("ous")),
    Rule::new("iveness", Always, Replace("ive")),
    Rule::new("iviti", Always, Replace("ive")),
    Rule::new("biliti", Always, Replace("ble")),
    Rule::new("bli", Always, Replace("ble")),
    Rule::new("ogi", PrecededBy("l"), Replace("og")),
    Rule::new("fulli", Always, Replace("ful")),
    Rule::new("lessli", Always, Replace("less")),
    Rule::new("li", PrecededBy(LI_ENDINGS), Delete),
];

pub static STEP3: &[Rule] = &[
    Rule::new("tional", Always, Replace("tion")),
    Rule::new("ational", Always, Replace("ate")),
    Rule::new("alize", Always, Replace("al")),
    Rule::new("icate", Always, Replace("ic")),
    Rule::new("iciti", Always, Replace("ic")),
    Rule::new("ical", Always, Replace("ic")),
    Rule::new("ful", Always, Delete),
    Rule::new("ness", Always, Delete),
    Rule::new("ative", InR2, Delete),
];

pub static STEP4: &[Rule] = &[
    Rule::new("al", Always, Delete),
    Rule::new("ance", Always, Delete),
    Rule::new("ence", Always, Delete),
    Rule::new("er", Always, Delete),
    Rule::new("ic", Always, Delete),
    Rule::new("able", Always, Delete),
    Rule::new("ible", Always, Delete),
    Rule::new("ant", Always, Delete),
    Rule::new("ement", Always, Delete),
    Rule::new("ment", Always, Delete),
    Rule::new("ent", Always, Delete),
    Rule::new("ism", Always, Delete),
    Rule::new("ate", Always, Delete),
    Rule::new("iti", Always, Delete),
    Rule::new("ous", Always, Delete),
    Rule::new("ive", Always, Delete),
    Rule::new("ize", Always, Delete),
    Rule::new("ion", PrecededBy("st"), Delete),
];

/// `ied`/`ies` become `i` after a stem of two or more letters, `ie`
/// otherwise (`cries` -> `cri`, `ties` -> `tie`).
fn restore_i(word: &mut Word, _regions: Regions) {
    if word.len() > 1 {
        word.push('i');
    } else {
        word.push_str("ie");
    }
}

/// After `ed`/`ing` and friends are removed: add `e` after `at`, `bl` or
/// `iz`; otherwise undouble a final double consonant; otherwise add `e` if
/// the word is now short.
fn repair_ending(word: &mut Word, regions: Regions) {
    if word.len() > 2 {
        if let (Some(prev), Some(last)) = (word.from_end(1), word.last()) {
            if matches!((prev, last), ('a', 't') | ('b', 'l') | ('i', 'z')) {
                word.push('e');
                return;
            }
            if prev == last && UNDOUBLED.contains(last) {
                word.pop();
                return;
            }
        }
    }

    if is_short_word(word.as_chars(), regions.r1) {
        word.push('e');
    }
}
