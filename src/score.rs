//! Candidate scoring.
//!
//! There are three independent scores and they are deliberately not unified:
//!
//! * [`optimal_score`] drives [`OptimalSegmenter`]: log weight plus a steep
//!   length bonus for known words, a milder reward for plausible unknown
//!   spans, and penalties for everything else.
//! * [`greedy_score`] drives [`GreedySegmenter`]: a much flatter score that
//!   only ranks lengths starting at one cursor.
//! * [`word_score`] is a standalone quality estimate for a single word. No
//!   segmenter calls it.
//!
//! All of them are relative: values are only comparable within one run of
//! the same strategy.
//!
//! [`OptimalSegmenter`]: crate::segment::optimal::OptimalSegmenter
//! [`GreedySegmenter`]: crate::segment::greedy::GreedySegmenter

use crate::lexicon::Lexicon;
use crate::script::{ending_bonus, has_russian_letter, looks_like_word};

/// Known-word bonus for lengths 0..=6 (index = length). Index 0 is unused.
pub static KNOWN_LENGTH_BONUS: [f64; 7] = [0.0, -30.0, 0.0, 5.0, 10.0, 15.0, 20.0];

/// Unknown plausible word bonus for lengths 0..=6. Lengths below 3 never
/// reach this table.
pub static UNKNOWN_LENGTH_BONUS: [f64; 7] = [0.0, 0.0, 0.0, 0.0, 2.0, 4.0, 6.0];

/// Unknown plausible spans longer than this lose points per extra character.
pub const UNKNOWN_SOFT_LIMIT: usize = 12;

/// Base score of a plausible unknown span in the optimal segmenter.
pub const UNKNOWN_BASE: f64 = 8.0;

/// Base score of a plausible unknown span in the greedy segmenter.
pub const GREEDY_UNKNOWN_BASE: f64 = 3.0;

/// Per-character reward for known words in the greedy segmenter.
pub const GREEDY_LENGTH_WEIGHT: f64 = 0.5;

/// Shortest span either segmenter treats as a plausible unknown word.
pub const MIN_UNKNOWN_LEN: usize = 3;

pub fn known_length_bonus(len: usize) -> f64 {
    match KNOWN_LENGTH_BONUS.get(len) {
        Some(&bonus) => bonus,
        None => 25.0 + 3.0 * (len - 7) as f64,
    }
}

pub fn unknown_length_bonus(len: usize) -> f64 {
    let bonus = match UNKNOWN_LENGTH_BONUS.get(len) {
        Some(&bonus) => bonus,
        None => 8.0 + 1.5 * (len - 7) as f64,
    };
    if len > UNKNOWN_SOFT_LIMIT {
        bonus - 2.0 * (len - UNKNOWN_SOFT_LIMIT) as f64
    } else {
        bonus
    }
}

/// Score of a span that is neither known nor plausible.
pub fn implausible_penalty(len: usize) -> f64 {
    match len {
        0 | 1 => -35.0,
        2 => -25.0,
        _ => -15.0 - 3.0 * len as f64,
    }
}

/// Score of `span` (already lowercased, `len` characters) as one word of an
/// optimal segmentation.
pub fn optimal_score(span: &str, len: usize, lexicon: &Lexicon) -> f64 {
    if let Some(weight) = lexicon.get(span) {
        return (weight as f64 + 1.0).ln() + known_length_bonus(len);
    }
    if len >= MIN_UNKNOWN_LEN && looks_like_word(span) {
        return UNKNOWN_BASE + ending_bonus(span) + unknown_length_bonus(len);
    }
    implausible_penalty(len)
}

/// Score of `span` as the next word of a greedy pass, or `None` when the
/// span does not qualify at all.
pub fn greedy_score(
    span: &str,
    len: usize,
    max_unknown_len: usize,
    lexicon: &Lexicon,
) -> Option<f64> {
    match lexicon.get(span) {
        Some(weight) if len >= 2 => {
            Some((weight as f64 + 1.0).ln() + GREEDY_LENGTH_WEIGHT * len as f64)
        }
        Some(_) => None,
        None if len >= MIN_UNKNOWN_LEN && len <= max_unknown_len && looks_like_word(span) => {
            Some(GREEDY_UNKNOWN_BASE + ending_bonus(span))
        }
        None => None,
    }
}

const QUALITY_ENDINGS: &[&str] = &["ость", "ение", "ание", "ция", "сть"];
const QUALITY_PREFIXES: &[&str] = &["пре", "про", "под", "над", "сверх"];

/// Standalone quality estimate of a single word. Higher is better, capped at
/// `10_000`.
///
/// Starts from the word's weight clipped to `1_000` (or `1` when unknown),
/// then scales by length, script, digits and common affixes.
pub fn word_score(word: &str, lexicon: &Lexicon) -> f64 {
    if word.is_empty() {
        return 0.0;
    }
    let lower = word.trim().to_lowercase();

    let mut score = match lexicon.get(&lower) {
        Some(weight) => (weight as f64).min(1000.0),
        None => 1.0,
    };

    let len = word.chars().count();
    score *= match len {
        1 => 0.01,
        2 => 0.1,
        3 => 0.5,
        4 | 5 => 1.0,
        _ => 1.3,
    };

    let has_cyrillic = has_russian_letter(&lower);
    let has_latin = lower.chars().any(|c| c.is_ascii_lowercase());
    let has_digits = lower.chars().any(char::is_numeric);

    if has_cyrillic {
        score *= 1.2;
    }
    if has_cyrillic && has_latin && len < 6 {
        score *= 0.3;
    }
    if has_digits {
        if word.chars().all(char::is_numeric) {
            score = score.max(100.0);
        } else {
            score *= 0.8;
        }
    }

    if QUALITY_ENDINGS.iter().any(|e| lower.ends_with(e)) {
        score *= 1.1;
    }
    if QUALITY_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        score *= 1.05;
    }

    score.min(10_000.0)
}
