use crate::segment::DEFAULT_MAX_WORD_LEN;
use crate::segment::greedy::DEFAULT_MAX_UNKNOWN_LEN;

/// Tunables for one [`SpaceRestorer`](crate::SpaceRestorer).
///
/// The defaults reproduce the reference behaviour; change them only when
/// evaluating alternatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentConfig {
    /// Longest candidate word either segmenter considers.
    pub max_word_len: usize,
    /// Longest unknown span the greedy pass accepts.
    pub max_unknown_greedy_len: usize,
    /// Share of low-confidence words above which the greedy result is tried.
    pub bad_ratio_threshold: f64,
    /// Smallest distance between two kept boundaries.
    pub min_gap: usize,
    /// Character inserted by `restore_spaces`.
    pub separator: char,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_unknown_greedy_len: DEFAULT_MAX_UNKNOWN_LEN,
            bad_ratio_threshold: 0.3,
            min_gap: 2,
            separator: ' ',
        }
    }
}
