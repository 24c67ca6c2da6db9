//! Readers for weighted word lists.
//!
//! A source only parses; it never filters. Every line or item becomes an
//! [`Entry`], either weighted or malformed, and [`LexiconBuilder`] decides
//! what survives.
//!
//! [`LexiconBuilder`]: super::LexiconBuilder

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::RangeInclusive;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::LexiconError;

/// Longest word a frequency list may contribute.
pub const MAX_SOURCE_WORD_LEN: usize = 20;

/// Lines read from a frequency list before the rest is ignored.
pub const DEFAULT_MAX_ENTRIES: usize = 1_000_000;

/// Weight given to JSON entries that carry no usable count.
pub const DEFAULT_JSON_WEIGHT: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Weighted { word: String, weight: u64 },
    Malformed { position: usize, reason: &'static str },
}

impl Entry {
    fn weighted(word: impl Into<String>, weight: u64) -> Self {
        Entry::Weighted {
            word: word.into(),
            weight,
        }
    }
}

/// A named, ordered collection of raw entries plus the word-length bounds
/// the ingestion filter applies to it.
pub trait WordSource: Send + Sync {
    fn name(&self) -> &str;

    fn len_bounds(&self) -> RangeInclusive<usize>;

    fn entries(&self) -> &[Entry];
}

fn parse_weight(raw: &str) -> Result<u64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(w) if w > 0 => Ok(w as u64),
        Ok(_) => Err("non-positive weight"),
        Err(_) => Err("non-numeric weight"),
    }
}

fn open(path: &Path) -> Result<File, LexiconError> {
    File::open(path).map_err(|source| LexiconError::Io {
        name: path.display().to_string(),
        source,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tab-separated frequency list
// ─────────────────────────────────────────────────────────────────────────────

/// `word<TAB>count` lines, one word per line, most frequent first.
#[derive(Debug, Clone)]
pub struct FrequencyList {
    name: String,
    entries: Vec<Entry>,
}

impl FrequencyList {
    pub fn from_path(path: impl AsRef<Path>, max_entries: usize) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = open(path)?;
        Self::from_reader(path.display().to_string(), BufReader::new(file), max_entries)
    }

    pub fn from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        max_entries: usize,
    ) -> Result<Self, LexiconError> {
        let name = name.into();
        let mut entries = Vec::new();
        let mut truncated = false;

        for (idx, line) in reader.lines().enumerate() {
            if idx >= max_entries {
                truncated = true;
                break;
            }
            let line = line.map_err(|source| LexiconError::Io {
                name: name.clone(),
                source,
            })?;
            entries.push(parse_tsv_line(idx + 1, &line));
        }

        debug!(source = %name, lines = entries.len(), truncated, "read frequency list");
        Ok(Self { name, entries })
    }
}

fn parse_tsv_line(position: usize, line: &str) -> Entry {
    let mut fields = line.trim().split('\t');
    let (Some(word), Some(count)) = (fields.next(), fields.next()) else {
        return Entry::Malformed {
            position,
            reason: "expected word and count",
        };
    };
    match parse_weight(count) {
        Ok(weight) => Entry::weighted(word, weight),
        Err(reason) => Entry::Malformed { position, reason },
    }
}

impl WordSource for FrequencyList {
    fn name(&self) -> &str {
        &self.name
    }

    fn len_bounds(&self) -> RangeInclusive<usize> {
        1..=MAX_SOURCE_WORD_LEN
    }

    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON dictionary
// ─────────────────────────────────────────────────────────────────────────────

/// A JSON object `{ "word": weight }` or a JSON array of words.
///
/// | value in object          | weight                  |
/// |--------------------------|-------------------------|
/// | positive integer         | that integer            |
/// | numeric string           | the parsed integer      |
/// | non-numeric string       | malformed               |
/// | zero or negative integer | malformed               |
/// | `true`                   | 1                       |
/// | `false`                  | malformed               |
/// | anything else            | [`DEFAULT_JSON_WEIGHT`] |
///
/// Array items that are strings get [`DEFAULT_JSON_WEIGHT`]; other items are
/// malformed. Any other top-level value yields an empty source.
#[derive(Debug, Clone)]
pub struct JsonDictionary {
    name: String,
    entries: Vec<Entry>,
}

impl JsonDictionary {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = open(path)?;
        Self::from_reader(path.display().to_string(), BufReader::new(file))
    }

    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self, LexiconError> {
        let name = name.into();
        let value: Value = serde_json::from_reader(reader).map_err(|source| LexiconError::Json {
            name: name.clone(),
            source,
        })?;
        Ok(Self::from_value(name, value))
    }

    pub fn from_value(name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        let entries: Vec<Entry> = match value {
            Value::Object(map) => map
                .into_iter()
                .enumerate()
                .map(|(position, (word, weight))| json_object_entry(position, word, &weight))
                .collect(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(position, item)| match item {
                    Value::String(word) => Entry::weighted(word, DEFAULT_JSON_WEIGHT),
                    _ => Entry::Malformed {
                        position,
                        reason: "array item is not a string",
                    },
                })
                .collect(),
            _ => Vec::new(),
        };
        debug!(source = %name, items = entries.len(), "read json dictionary");
        Self { name, entries }
    }
}

fn json_object_entry(position: usize, word: String, weight: &Value) -> Entry {
    let weight = match weight {
        Value::Number(n) => match n.as_u64() {
            Some(0) => Err("non-positive weight"),
            Some(w) => Ok(w),
            None if n.is_i64() => Err("non-positive weight"),
            None => Ok(DEFAULT_JSON_WEIGHT),
        },
        Value::String(s) => parse_weight(s),
        Value::Bool(true) => Ok(1),
        Value::Bool(false) => Err("non-positive weight"),
        _ => Ok(DEFAULT_JSON_WEIGHT),
    };
    match weight {
        Ok(weight) => Entry::weighted(word, weight),
        Err(reason) => Entry::Malformed { position, reason },
    }
}

impl WordSource for JsonDictionary {
    fn name(&self) -> &str {
        &self.name
    }

    fn len_bounds(&self) -> RangeInclusive<usize> {
        2..=usize::MAX
    }

    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory pairs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    bounds: RangeInclusive<usize>,
    entries: Vec<Entry>,
}

impl MemorySource {
    pub fn new<I, W>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, u64)>,
        W: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(position, (word, weight))| {
                if weight == 0 {
                    Entry::Malformed {
                        position,
                        reason: "non-positive weight",
                    }
                } else {
                    Entry::weighted(word, weight)
                }
            })
            .collect();
        Self {
            name: name.into(),
            bounds: 1..=MAX_SOURCE_WORD_LEN,
            entries,
        }
    }

    pub fn with_len_bounds(mut self, bounds: RangeInclusive<usize>) -> Self {
        self.bounds = bounds;
        self
    }
}

impl WordSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn len_bounds(&self) -> RangeInclusive<usize> {
        self.bounds.clone()
    }

    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
