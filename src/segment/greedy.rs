use crate::lexicon::Lexicon;
use crate::score::greedy_score;
use crate::segment::{CharText, DEFAULT_MAX_WORD_LEN, Segmenter};

/// Longest unknown span the greedy pass accepts as a word.
pub const DEFAULT_MAX_UNKNOWN_LEN: usize = 12;

/// Single left-to-right pass choosing the locally best word length.
///
/// At each cursor every length `1..=min(W, remaining)` is scored with
/// [`greedy_score`]; lengths are scanned upwards and only a strictly better
/// score replaces the current choice, so the shortest of equally good
/// lengths wins. When nothing qualifies the cursor advances by one
/// character.
#[derive(Debug, Clone, Copy)]
pub struct GreedySegmenter {
    max_word_len: usize,
    max_unknown_len: usize,
}

impl Default for GreedySegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORD_LEN, DEFAULT_MAX_UNKNOWN_LEN)
    }
}

impl GreedySegmenter {
    pub fn new(max_word_len: usize, max_unknown_len: usize) -> Self {
        Self {
            max_word_len: max_word_len.max(1),
            max_unknown_len,
        }
    }
}

impl Segmenter for GreedySegmenter {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn segment(&self, text: &CharText<'_>, lexicon: &Lexicon) -> Vec<usize> {
        let n = text.len();
        let mut boundaries = Vec::new();
        let mut cursor = 0;

        while cursor < n {
            let mut chosen = 1;
            let mut best = f64::NEG_INFINITY;

            for len in 1..=self.max_word_len.min(n - cursor) {
                let span = text.slice(cursor, cursor + len);
                if let Some(score) = greedy_score(span, len, self.max_unknown_len, lexicon)
                    && score > best
                {
                    best = score;
                    chosen = len;
                }
            }

            cursor += chosen;
            if cursor < n {
                boundaries.push(cursor);
            }
        }

        boundaries
    }
}
