//! Weighted vocabulary used as dictionary evidence by both segmenters.
//!
//! A [`Lexicon`] is built exactly once through [`LexiconBuilder`] and is
//! read-only afterwards, so one instance can be shared by any number of
//! threads without locking.
//!
//! # Merge rules
//!
//! * Generic sources are applied in the order they were added. The first
//!   accepted occurrence of a word wins; later sources never overwrite it.
//! * The curated override list runs last. An override is inserted when the
//!   word is absent and replaces an existing weight only when it is strictly
//!   greater.
//!
//! # Ingestion filter
//!
//! An entry from a generic source is accepted only when the lowercased word
//! is purely alphabetic, its character count lies inside the source's length
//! bounds, and it contains at least one Russian letter. Rejected and
//! malformed entries are skipped silently (counted in [`BuildStats`]).
//! Overrides are curated and bypass the filter.

pub mod curated;
pub mod source;

use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;
use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::debug;

use crate::script::has_russian_letter;
use source::{Entry, WordSource};

/// Errors raised while reading a source as a whole.
///
/// Individual malformed entries never produce an error.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read word source `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("word source `{name}` is not valid JSON: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Counters collected while a lexicon is built.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub accepted: usize,
    pub duplicates: usize,
    pub filtered: usize,
    pub malformed: usize,
    pub overrides_applied: usize,
}

/// Immutable map from normalized word to positive weight.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    words: HashMap<String, u64>,
}

impl Lexicon {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Weight of `word`. The caller lowercases first.
    #[inline]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(w, &f)| (w.as_str(), f))
    }
}

/// Collects word sources and overrides, then merges them into a [`Lexicon`].
#[derive(Default)]
pub struct LexiconBuilder {
    sources: Vec<Box<dyn WordSource>>,
    overrides: Vec<(String, u64)>,
}

impl LexiconBuilder {
    /// Append a generic source. Earlier sources take precedence.
    pub fn source<S: WordSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Append curated overrides.
    pub fn overrides<I, W>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, u64)>,
        W: Into<String>,
    {
        self.overrides
            .extend(entries.into_iter().map(|(w, f)| (w.into(), f)));
        self
    }

    /// Append the built-in marketplace vocabulary from [`curated::CURATED`].
    pub fn curated(self) -> Self {
        self.overrides(curated::entries())
    }

    pub fn build(self) -> Lexicon {
        self.build_with_stats().0
    }

    pub fn build_with_stats(self) -> (Lexicon, BuildStats) {
        let mut words: HashMap<String, u64> = HashMap::new();
        let mut stats = BuildStats::default();

        for source in &self.sources {
            let bounds = source.len_bounds();
            for entry in source.entries() {
                let (word, weight) = match entry {
                    Entry::Weighted { word, weight } => (word.as_str(), *weight),
                    Entry::Malformed { .. } => {
                        stats.malformed += 1;
                        continue;
                    }
                };
                let word = normalize_word(word);
                if !passes_filter(&word, &bounds) {
                    stats.filtered += 1;
                    continue;
                }
                match words.entry(word) {
                    MapEntry::Occupied(_) => stats.duplicates += 1,
                    MapEntry::Vacant(slot) => {
                        slot.insert(weight);
                        stats.accepted += 1;
                    }
                }
            }
            debug!(source = source.name(), total = words.len(), "merged word source");
        }

        for (word, weight) in self.overrides {
            let word = normalize_word(&word);
            if word.is_empty() || weight == 0 {
                stats.malformed += 1;
                continue;
            }
            match words.entry(word) {
                MapEntry::Occupied(mut slot) => {
                    if *slot.get() < weight {
                        slot.insert(weight);
                        stats.overrides_applied += 1;
                    }
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(weight);
                    stats.overrides_applied += 1;
                }
            }
        }

        debug!(
            words = words.len(),
            accepted = stats.accepted,
            duplicates = stats.duplicates,
            filtered = stats.filtered,
            malformed = stats.malformed,
            overrides = stats.overrides_applied,
            "lexicon built"
        );

        (Lexicon { words }, stats)
    }
}

#[inline]
fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

fn passes_filter(word: &str, bounds: &RangeInclusive<usize>) -> bool {
    let len = word.chars().count();
    bounds.contains(&len) && word.chars().all(char::is_alphabetic) && has_russian_letter(word)
}

#[cfg(test)]
mod tests {
    use super::source::MemorySource;
    use super::*;

    fn mem(entries: &[(&str, u64)]) -> MemorySource {
        MemorySource::new("test", entries.iter().map(|&(w, f)| (w, f)))
    }

    #[test]
    fn first_generic_source_wins() {
        let lex = Lexicon::builder()
            .source(mem(&[("дом", 10)]))
            .source(mem(&[("дом", 99), ("кот", 5)]))
            .build();
        assert_eq!(lex.get("дом"), Some(10));
        assert_eq!(lex.get("кот"), Some(5));
    }

    #[test]
    fn duplicate_inside_one_source_keeps_first() {
        let (lex, stats) = Lexicon::builder()
            .source(mem(&[("дом", 10), ("дом", 20)]))
            .build_with_stats();
        assert_eq!(lex.get("дом"), Some(10));
        assert_eq!(stats.duplicates, 1);
    }

    #[test]
    fn override_only_raises_weight() {
        let lex = Lexicon::builder()
            .source(mem(&[("дом", 100), ("кот", 50_000)]))
            .overrides([("дом", 45_000), ("кот", 10)])
            .build();
        assert_eq!(lex.get("дом"), Some(45_000));
        assert_eq!(lex.get("кот"), Some(50_000));
    }

    #[test]
    fn override_equal_weight_is_not_counted() {
        let (_, stats) = Lexicon::builder()
            .source(mem(&[("дом", 100)]))
            .overrides([("дом", 100)])
            .build_with_stats();
        assert_eq!(stats.overrides_applied, 0);
    }

    #[test]
    fn overrides_bypass_ingestion_filter() {
        let lex = Lexicon::builder()
            .overrides([("iphone", 40_000), ("10", 12_000)])
            .build();
        assert!(lex.contains("iphone"));
        assert!(lex.contains("10"));
    }

    #[test]
    fn ingestion_filter_drops_silently() {
        let (lex, stats) = Lexicon::builder()
            .source(mem(&[
                ("hello", 5),
                ("дом5", 5),
                ("мама-папа", 5),
                ("оченьоченьдлинноеслово", 5),
                ("Кот", 7),
            ]))
            .build_with_stats();
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.get("кот"), Some(7));
        assert_eq!(stats.filtered, 4);
    }

    #[test]
    fn memory_source_length_bounds_are_caller_chosen() {
        let source = mem(&[("я", 5), ("стол", 5), ("кресло", 5)]).with_len_bounds(3..=5);
        let (lex, stats) = Lexicon::builder().source(source).build_with_stats();
        assert_eq!(stats.filtered, 2);
        assert_eq!(stats.accepted, 1);
        assert_eq!(lex.get("стол"), Some(5));
        assert!(!lex.contains("я"));
        assert!(!lex.contains("кресло"));
    }

    #[test]
    fn keys_are_lowercased_and_trimmed() {
        let lex = Lexicon::builder().source(mem(&[("  МОСКВА ", 3)])).build();
        assert_eq!(lex.get("москва"), Some(3));
        assert_eq!(lex.get("МОСКВА"), None);
    }

    #[test]
    fn curated_vocabulary_is_loaded() {
        let lex = Lexicon::builder().curated().build();
        assert_eq!(lex.get("куплю"), Some(60_000));
        assert_eq!(lex.get("квартиру"), Some(60_000));
        assert_eq!(lex.get("и"), Some(150_000));
        assert_eq!(lex.get("iphone"), Some(40_000));

        let listed: Vec<(&str, u64)> = lex.iter().collect();
        assert_eq!(listed.len(), curated::CURATED.len());
        assert!(listed.iter().all(|&(w, f)| lex.get(w) == Some(f)));
    }
}
