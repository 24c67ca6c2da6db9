//! Strategy selection and boundary clean-up.
//!
//! The optimal segmentation is the default. Its quality is judged by the
//! share of low-confidence words it produces; when that share exceeds the
//! threshold the greedy pass is tried as well and wins only with a strictly
//! smaller share. The chosen list is then filtered so no two boundaries are
//! closer than `min_gap`.

use tracing::trace;

use crate::config::SegmentConfig;
use crate::lexicon::Lexicon;
use crate::segment::{CharText, GreedySegmenter, OptimalSegmenter, Segmenter};

/// Unknown words at most this long are low-confidence.
pub const SHORT_WORD_MAX: usize = 2;

/// Unknown words longer than this are low-confidence.
pub const LONG_WORD_MAX: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Optimal,
    Greedy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub strategy: Strategy,
    /// Bad ratio of the chosen segmentation, before filtering.
    pub bad_ratio: f64,
    /// Filtered boundary list.
    pub boundaries: Vec<usize>,
}

/// Very short or very long words absent from the lexicon.
#[inline]
pub fn is_low_confidence(word: &str, lexicon: &Lexicon) -> bool {
    let len = word.chars().count();
    (len <= SHORT_WORD_MAX || len > LONG_WORD_MAX) && !lexicon.contains(word)
}

/// Share of low-confidence words; `0.0` when there are no words.
pub fn bad_ratio(words: &[&str], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let bad = words
        .iter()
        .filter(|w| is_low_confidence(w, lexicon))
        .count();
    bad as f64 / words.len() as f64
}

/// Sort, drop boundaries outside `(0, len)`, and drop any boundary closer
/// than `min_gap` to the previously kept one.
pub fn filter_boundaries(boundaries: &[usize], len: usize, min_gap: usize) -> Vec<usize> {
    let mut sorted = boundaries.to_vec();
    sorted.sort_unstable();

    let mut kept: Vec<usize> = Vec::with_capacity(sorted.len());
    for pos in sorted {
        if pos == 0 || pos >= len {
            continue;
        }
        if let Some(&last) = kept.last()
            && pos - last < min_gap
        {
            continue;
        }
        kept.push(pos);
    }
    kept
}

#[derive(Debug, Clone, Copy)]
pub struct Selector {
    optimal: OptimalSegmenter,
    greedy: GreedySegmenter,
    threshold: f64,
    min_gap: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(&SegmentConfig::default())
    }
}

impl Selector {
    pub fn new(config: &SegmentConfig) -> Self {
        Self {
            optimal: OptimalSegmenter::new(config.max_word_len),
            greedy: GreedySegmenter::new(config.max_word_len, config.max_unknown_greedy_len),
            threshold: config.bad_ratio_threshold,
            min_gap: config.min_gap,
        }
    }

    pub fn select(&self, text: &CharText<'_>, lexicon: &Lexicon) -> Selection {
        let optimal = self.optimal.segment(text, lexicon);
        let optimal_ratio = bad_ratio(&text.words(&optimal), lexicon);

        let (strategy, ratio, chosen) = if optimal_ratio > self.threshold {
            let greedy = self.greedy.segment(text, lexicon);
            let greedy_ratio = bad_ratio(&text.words(&greedy), lexicon);
            trace!(
                optimal = optimal_ratio,
                greedy = greedy_ratio,
                "optimal segmentation over threshold"
            );
            if greedy_ratio < optimal_ratio {
                trace!(segmenter = self.greedy.name(), "switching strategy");
                (Strategy::Greedy, greedy_ratio, greedy)
            } else {
                (Strategy::Optimal, optimal_ratio, optimal)
            }
        } else {
            (Strategy::Optimal, optimal_ratio, optimal)
        };

        Selection {
            strategy,
            bad_ratio: ratio,
            boundaries: filter_boundaries(&chosen, text.len(), self.min_gap),
        }
    }
}
