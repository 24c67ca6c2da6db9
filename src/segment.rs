//! Segmentation strategies.
//!
//! A [`Segmenter`] turns a run of characters into a boundary list: strictly
//! increasing character offsets `p` with `0 < p < len`, each marking where a
//! separator belongs. Segmenters never change the characters themselves.
//!
//! Two strategies exist:
//!
//! | Strategy             | Search                         | Cost        |
//! |----------------------|--------------------------------|-------------|
//! | [`OptimalSegmenter`] | max-total-score partition (DP) | `O(n · W)`  |
//! | [`GreedySegmenter`]  | left-to-right local best       | `O(n · W)`  |
//!
//! `W` is the candidate window (longest word considered), 20 by default, so
//! both always finish in time linear in the input.

pub mod greedy;
pub mod optimal;

pub use greedy::GreedySegmenter;
pub use optimal::OptimalSegmenter;

use crate::lexicon::Lexicon;

/// Longest candidate word either segmenter considers.
pub const DEFAULT_MAX_WORD_LEN: usize = 20;

/// Character-indexed view over a `&str`.
///
/// Candidate spans are addressed in characters, but the lexicon is keyed by
/// `str`, so slicing must map character offsets to byte offsets in O(1).
#[derive(Debug, Clone)]
pub struct CharText<'a> {
    text: &'a str,
    offsets: Vec<usize>,
}

impl<'a> CharText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Characters `start..end`.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    /// Cut the text at `boundaries` and return the non-blank pieces,
    /// trimmed.
    pub fn words(&self, boundaries: &[usize]) -> Vec<&'a str> {
        let n = self.len();
        let mut cuts = Vec::with_capacity(boundaries.len() + 2);
        cuts.push(0);
        cuts.extend(boundaries.iter().copied().filter(|&p| p <= n));
        cuts.sort_unstable();
        cuts.push(n);

        cuts.windows(2)
            .map(|w| self.slice(w[0], w[1]).trim())
            .filter(|w| !w.is_empty())
            .collect()
    }
}

/// A boundary-producing strategy. Implementations are stateless between
/// calls and safe to share across threads.
pub trait Segmenter: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Boundary list for `text`, which must already be normalized.
    fn segment(&self, text: &CharText<'_>, lexicon: &Lexicon) -> Vec<usize>;
}
