use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StemError};
use crate::exceptions::{self, ExceptionTables};
use crate::region::Regions;
use crate::stages::{self, Stages, trim};
use crate::word::Word;

/// Anything that can reduce a single word to its stem.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// Where the pipeline stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Two characters or fewer; returned verbatim.
    TooShort,
    /// Replaced by the override table before any stage ran.
    Override,
    /// Matched the post-1a invariant table.
    Invariant,
    /// Went through every stage.
    Stemmed,
}

/// The result of one stemming call plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemTrace {
    pub stem: String,
    pub outcome: Outcome,
    /// `None` when the pipeline stopped before regions were computed.
    pub regions: Option<Regions>,
    /// Stages that changed the word, in order.
    pub changed_by: Vec<&'static str>,
}

/// The English Porter2 stemmer. Cheap to copy; every instance shares the
/// same immutable stage and exception tables.
#[derive(Debug, Clone, Copy)]
pub struct Porter2 {
    stages: &'static Stages,
    exceptions: &'static ExceptionTables,
}

impl Default for Porter2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Porter2 {
    pub fn new() -> Self {
        Self {
            stages: stages::stages(),
            exceptions: exceptions::tables(),
        }
    }

    pub fn stem(&self, word: &str) -> Result<String> {
        self.stem_traced(word).map(|trace| trace.stem)
    }

    /// Stem `word` and report which stages touched it.
    pub fn stem_traced(&self, word: &str) -> Result<StemTrace> {
        if word.is_empty() {
            return Err(StemError::InvalidInput);
        }

        if word.chars().count() <= 2 {
            return Ok(StemTrace {
                stem: word.to_string(),
                outcome: Outcome::TooShort,
                regions: None,
                changed_by: Vec::new(),
            });
        }

        let mut w = Word::lowercase(word);

        if let Some(replacement) = self.exceptions.lookup_override(&w) {
            debug!(word, stem = replacement, "override exception");
            return Ok(StemTrace {
                stem: replacement.to_string(),
                outcome: Outcome::Override,
                regions: None,
                changed_by: Vec::new(),
            });
        }

        w.normalize();
        let regions = Regions::locate(w.as_chars());
        let mut changed_by = Vec::new();
        let outcome = self.run_stages(&mut w, regions, |stage, changed, _| {
            if changed {
                changed_by.push(stage);
            }
        });

        w.postlude();
        Ok(StemTrace {
            stem: w.into(),
            outcome,
            regions: Some(regions),
            changed_by,
        })
    }

    /// Steps 0 through 5 on a normalized word. `observe` is called after
    /// every stage with its name, whether it changed the word, and the word.
    fn run_stages<F>(&self, w: &mut Word, regions: Regions, mut observe: F) -> Outcome
    where
        F: FnMut(&'static str, bool, &Word),
    {
        let s = self.stages;
        for stage in [&s.step0, &s.step1a] {
            let changed = stage.apply(w, regions);
            observe(stage.name(), changed, w);
        }

        if self.exceptions.is_invariant(w) {
            debug!(word = %w, "invariant exception after step1a");
            return Outcome::Invariant;
        }

        let changed = s.step1b.apply(w, regions);
        observe(s.step1b.name(), changed, w);
        let changed = trim::step1c(w);
        observe("step1c", changed, w);
        for stage in [&s.step2, &s.step3, &s.step4] {
            let changed = stage.apply(w, regions);
            observe(stage.name(), changed, w);
        }
        let changed = trim::step5(w, regions);
        observe("step5", changed, w);

        Outcome::Stemmed
    }
}

impl Stemmer for Porter2 {
    fn stem(&self, word: &str) -> Result<String> {
        Porter2::stem(self, word)
    }

    fn name(&self) -> &'static str {
        "porter2"
    }
}

/// Stem one English word with the shared [`Porter2`] stemmer.
pub fn stem(word: &str) -> Result<String> {
    Porter2::new().stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(stem(""), Err(StemError::InvalidInput));
    }

    #[test]
    fn test_short_words_are_verbatim() {
        assert_eq!(stem("a").unwrap(), "a");
        assert_eq!(stem("Is").unwrap(), "Is");
        assert_eq!(stem("'s").unwrap(), "'s");
        assert_eq!(stem("Abc").unwrap(), "abc");
    }

    #[test]
    fn test_common_words() {
        let cases = [
            ("skis", "ski"),
            ("sky", "sky"),
            ("news", "news"),
            ("inning", "inning"),
            ("succeed", "succeed"),
            ("caresses", "caress"),
            ("hopping", "hop"),
            ("falling", "fall"),
            ("sized", "size"),
            ("generalization", "general"),
            ("national", "nation"),
            ("knightly", "knight"),
        ];
        for (word, expected) in cases {
            assert_eq!(stem(word).unwrap(), expected, "stem of '{}'", word);
        }
    }

    #[test]
    fn test_marked_y_never_leaks() {
        assert_eq!(stem("Youth").unwrap(), "youth");
        assert_eq!(stem("enjoy").unwrap(), "enjoy");
        assert_eq!(stem("player").unwrap(), "player");
        assert_eq!(stem("sayings").unwrap(), "say");
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(stem("Dog's").unwrap(), "dog");
        assert_eq!(stem("ocean's'").unwrap(), "ocean");
        assert_eq!(stem("'tis").unwrap(), "tis");
    }

    #[test]
    fn test_trace_outcomes() {
        let p = Porter2::new();

        let t = p.stem_traced("at").unwrap();
        assert_eq!(t.outcome, Outcome::TooShort);

        let t = p.stem_traced("Skies").unwrap();
        assert_eq!((t.stem.as_str(), t.outcome), ("sky", Outcome::Override));
        assert_eq!(t.regions, None);

        let t = p.stem_traced("exceed").unwrap();
        assert_eq!(t.outcome, Outcome::Invariant);
        assert!(t.changed_by.is_empty());

        let t = p.stem_traced("generalization").unwrap();
        assert_eq!(t.outcome, Outcome::Stemmed);
        assert_eq!(t.regions, Some(Regions { r1: 5, r2: 7 }));
        assert_eq!(t.changed_by, vec!["step2", "step3"]);
    }

    #[test]
    fn test_stages_only_rewrite_the_tail() {
        let stemmer = Porter2::new();
        for word in include_str!("../data/vocabulary.txt").lines() {
            let mut w = Word::lowercase(word);
            if w.len() <= 2 || stemmer.exceptions.lookup_override(&w).is_some() {
                continue;
            }
            w.normalize();
            let normalized = w.clone();
            let regions = Regions::locate(normalized.as_chars());
            assert!(regions.r1 <= regions.r2 && regions.r2 <= normalized.len());

            stemmer.run_stages(&mut w, regions, |stage, _, after| {
                // Step 1c may still turn the character just before R1 into `i`.
                let head = regions.r1.min(after.len()).saturating_sub(1);
                assert_eq!(
                    &after.as_chars()[..head],
                    &normalized.as_chars()[..head],
                    "{} rewrote the head of '{}' into '{}'",
                    stage,
                    word,
                    after
                );
                assert!(
                    after.len() <= normalized.len(),
                    "{} grew '{}' into '{}'",
                    stage,
                    word,
                    after
                );
            });
        }
    }

    #[test]
    fn test_trait_object() {
        let stemmer: Box<dyn Stemmer> = Box::new(Porter2::default());
        assert_eq!(stemmer.name(), "porter2");
        assert_eq!(stemmer.stem("running").unwrap(), "run");
    }
}
