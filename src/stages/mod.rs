//! The suffix-rewriting stages of the pipeline.
//!
//! Steps 0, 1a, 1b, 2, 3 and 4 are table-driven: each is a list of [`Rule`]s
//! compiled into a [`SuffixTable`] and applied by [`Stage::apply`]. Steps 1c
//! and 5 only look at the last one or two characters and live in [`trim`].

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::automaton::SuffixTable;
use crate::classify::has_vowel;
use crate::error::TableError;
use crate::region::{Gate, Regions};
use crate::word::Word;

pub mod rules;
pub mod trim;

/// Extra condition a matched rule must satisfy before it rewrites the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// The suffix lies in R1.
    InR1,
    /// The suffix lies in R2.
    InR2,
    /// The character right before the suffix is one of these.
    PrecededBy(&'static str),
    /// The part before the suffix contains a vowel.
    StemHasVowel,
    /// The part before the suffix, minus its last character, contains a vowel.
    VowelBeforePreceding,
}

/// What a rule does to the word once it fires.
#[derive(Debug, Clone, Copy)]
pub enum Rewrite {
    /// Leave the word as it is, but still count as the match.
    Keep,
    Delete,
    /// Delete the suffix and append this.
    Replace(&'static str),
    /// Delete the suffix and hand the rest to a repair hook.
    DeleteThen(fn(&mut Word, Regions)),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub suffix: &'static str,
    pub guard: Guard,
    pub rewrite: Rewrite,
}

impl Rule {
    pub const fn new(suffix: &'static str, guard: Guard, rewrite: Rewrite) -> Self {
        Self { suffix, guard, rewrite }
    }

    fn admits(&self, word: &Word, regions: Regions, suffix_len: usize) -> bool {
        let len = word.len();
        let stem = &word.as_chars()[..len - suffix_len];
        match self.guard {
            Guard::Always => true,
            Guard::InR1 => regions.admits(Gate::R1, len, suffix_len),
            Guard::InR2 => regions.admits(Gate::R2, len, suffix_len),
            Guard::PrecededBy(set) => stem.last().is_some_and(|c| set.contains(*c)),
            Guard::StemHasVowel => has_vowel(stem),
            Guard::VowelBeforePreceding => stem.len() > 1 && has_vowel(&stem[..stem.len() - 1]),
        }
    }

    fn fire(&self, word: &mut Word, regions: Regions, suffix_len: usize) {
        match self.rewrite {
            Rewrite::Keep => {}
            Rewrite::Delete => word.truncate_suffix(suffix_len),
            Rewrite::Replace(with) => {
                word.truncate_suffix(suffix_len);
                word.push_str(with);
            }
            Rewrite::DeleteThen(repair) => {
                word.truncate_suffix(suffix_len);
                repair(word, regions);
            }
        }
    }
}

/// One table-driven stage: its rules, the automaton matching their
/// suffixes, and the region the longest match has to fall in.
#[derive(Debug, Clone)]
pub struct Stage {
    name: &'static str,
    gate: Gate,
    rules: &'static [Rule],
    table: SuffixTable,
}

impl Stage {
    pub fn new(name: &'static str, gate: Gate, rules: &'static [Rule]) -> Result<Self, TableError> {
        let table = SuffixTable::build(rules.iter().map(|r| r.suffix))?;
        debug!(
            stage = name,
            states = table.state_count(),
            rules = rules.len(),
            "built suffix table"
        );
        Ok(Self { name, gate, rules, table })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Find the longest matching suffix and apply its rule.
    ///
    /// Only the longest match is considered: if it falls outside the
    /// stage's region or its guard fails, the stage does nothing, even when
    /// a shorter suffix would have qualified. Returns whether the word
    /// changed.
    pub fn apply(&self, word: &mut Word, regions: Regions) -> bool {
        let Some(m) = self.table.longest_match(word.as_chars()) else {
            return false;
        };

        if !regions.admits(self.gate, word.len(), m.len) {
            return false;
        }

        let rule = &self.rules[m.rule];
        if !rule.admits(word, regions, m.len) {
            return false;
        }

        let before = word.len();
        rule.fire(word, regions, m.len);
        let changed = !matches!(rule.rewrite, Rewrite::Keep);
        if changed {
            trace!(stage = self.name, suffix = rule.suffix, before, word = %word, "rewrote suffix");
        }
        changed
    }
}

/// Every table-driven stage, built once and shared by all callers.
#[derive(Debug, Clone)]
pub struct Stages {
    pub step0: Stage,
    pub step1a: Stage,
    pub step1b: Stage,
    pub step2: Stage,
    pub step3: Stage,
    pub step4: Stage,
}

impl Stages {
    pub fn build() -> Result<Self, TableError> {
        Ok(Self {
            step0: Stage::new("step0", Gate::None, rules::STEP0)?,
            step1a: Stage::new("step1a", Gate::None, rules::STEP1A)?,
            step1b: Stage::new("step1b", Gate::None, rules::STEP1B)?,
            step2: Stage::new("step2", Gate::R1, rules::STEP2)?,
            step3: Stage::new("step3", Gate::R1, rules::STEP3)?,
            step4: Stage::new("step4", Gate::R2, rules::STEP4)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        [
            &self.step0,
            &self.step1a,
            &self.step1b,
            &self.step2,
            &self.step3,
            &self.step4,
        ]
        .into_iter()
    }
}

static STAGES: Lazy<Stages> =
    Lazy::new(|| Stages::build().expect("Failed to build built-in suffix tables"));

pub fn stages() -> &'static Stages {
    &STAGES
}
