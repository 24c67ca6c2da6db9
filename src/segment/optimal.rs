use crate::lexicon::Lexicon;
use crate::score::optimal_score;
use crate::segment::{CharText, DEFAULT_MAX_WORD_LEN, Segmenter};

/// Penalty for the orphan-character fallback when a position has no
/// candidate at all.
pub const ORPHAN_PENALTY: f64 = 40.0;

/// Maximum-total-score segmentation by dynamic programming.
///
/// `best[i]` is the best score of any partition of the first `i`
/// characters and `back[i]` the start of the last word in that partition.
/// For every end `i`, starts are scanned in ascending order over the window
/// `[i - W, i)` and a later start replaces the current best only on strict
/// improvement, so among equal totals the longest final word wins.
///
/// The tables are scratch state allocated per call.
#[derive(Debug, Clone, Copy)]
pub struct OptimalSegmenter {
    max_word_len: usize,
}

impl Default for OptimalSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORD_LEN)
    }
}

impl OptimalSegmenter {
    pub fn new(max_word_len: usize) -> Self {
        Self {
            max_word_len: max_word_len.max(1),
        }
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

impl Segmenter for OptimalSegmenter {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn segment(&self, text: &CharText<'_>, lexicon: &Lexicon) -> Vec<usize> {
        let n = text.len();
        if n == 0 {
            return Vec::new();
        }

        let mut best = vec![f64::NEG_INFINITY; n + 1];
        let mut back: Vec<Option<usize>> = vec![None; n + 1];
        best[0] = 0.0;

        for end in 1..=n {
            let mut best_total = f64::NEG_INFINITY;
            let mut best_start = None;

            for start in end.saturating_sub(self.max_word_len)..end {
                let score = optimal_score(text.slice(start, end), end - start, lexicon);
                let total = best[start] + score;
                if total > best_total {
                    best_total = total;
                    best_start = Some(start);
                }
            }

            match best_start {
                Some(start) => {
                    best[end] = best_total;
                    back[end] = Some(start);
                }
                None => {
                    best[end] = best[end - 1] - ORPHAN_PENALTY;
                    back[end] = Some(end - 1);
                }
            }
        }

        let mut boundaries = Vec::new();
        let mut pos = n;
        while let Some(start) = back[pos] {
            if start > 0 {
                boundaries.push(start);
            }
            pos = start;
        }
        boundaries.reverse();
        boundaries
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn lex(words: &[(&str, u64)]) -> Lexicon {
        Lexicon::builder()
            .overrides(words.iter().map(|&(w, f)| (w, f)))
            .build()
    }

    fn run(text: &str, lexicon: &Lexicon) -> Vec<usize> {
        OptimalSegmenter::default().segment(&CharText::new(text), lexicon)
    }

    #[test]
    fn splits_two_known_words() {
        let lexicon = lex(&[("куплю", 60000), ("квартиру", 60000)]);
        assert_eq!(run("куплюквартиру", &lexicon), vec![5]);
    }

    #[test]
    fn splits_known_brand_from_digit_tail() {
        let lexicon = lex(&[("iphone", 40000)]);
        assert_eq!(run("iphone5s", &lexicon), vec![6]);
    }

    #[test]
    fn short_plausible_unknown_stays_whole() {
        // any split leaves a 1 or 2 character implausible fragment
        assert!(run("малин", &Lexicon::default()).is_empty());
        assert!(run("лодка", &Lexicon::default()).is_empty());
    }

    #[test]
    fn long_plausible_unknown_splits_into_plausible_halves() {
        // "мал" + "инока" (9.5 + 12) beats the whole span (17.5) and the
        // other two-way cuts (20)
        assert_eq!(run("малинока", &Lexicon::default()), vec![3]);
    }

    #[test]
    fn unsplittable_plausible_span_stays_whole() {
        // every proper prefix is vowels only and scores as noise
        assert!(run("аааааааб", &Lexicon::default()).is_empty());
    }

    #[test]
    fn implausible_noise_stays_whole_inside_window() {
        assert!(run("qwrtpsdfgh", &Lexicon::default()).is_empty());
    }

    #[test]
    fn ties_keep_the_longest_final_word() {
        // 30 noise characters need two pieces; every cut in 10..=20 totals
        // exactly -120, and the earliest start (10) is scanned first.
        let text = "x".repeat(30);
        assert_eq!(run(&text, &Lexicon::default()), vec![10]);
    }

    #[test]
    fn frequent_pair_beats_rare_whole_word() {
        let lexicon = lex(&[("ба", 1000), ("баба", 1)]);
        assert_eq!(run("баба", &lexicon), vec![2]);
    }

    #[test]
    fn window_bounds_candidate_length() {
        let lexicon = lex(&[("ааааааааааааааааааааааб", 1_000_000)]);
        let seg = OptimalSegmenter::new(20);
        assert_eq!(seg.max_word_len(), 20);
        assert_eq!(OptimalSegmenter::new(0).max_word_len(), 1);
        let got = seg.segment(&CharText::new("ааааааааааааааааааааааб"), &lexicon);
        assert!(!got.is_empty());
    }
}
