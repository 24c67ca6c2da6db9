use std::borrow::Cow;

use crate::config::SegmentConfig;
use crate::lexicon::source::WordSource;
use crate::lexicon::{Lexicon, LexiconBuilder};
use crate::normalize::Normalized;
use crate::segment::CharText;
use crate::select::{Selection, Selector};

/// Word-boundary restoration engine.
///
/// Owns an immutable [`Lexicon`] and the segmentation settings. Every call
/// allocates its own scratch tables, so one instance can serve any number of
/// threads through a shared reference.
///
/// ```
/// use probel::SpaceRestorer;
///
/// let restorer = SpaceRestorer::builder()
///     .overrides([("куплю", 60_000), ("квартиру", 60_000)])
///     .build();
///
/// assert_eq!(restorer.predict_space_positions("куплюквартиру"), vec![5]);
/// assert_eq!(restorer.restore_spaces("куплюквартиру"), "куплю квартиру");
/// ```
#[derive(Debug, Clone)]
pub struct SpaceRestorer {
    lexicon: Lexicon,
    config: SegmentConfig,
    selector: Selector,
}

impl SpaceRestorer {
    pub fn builder() -> SpaceRestorerBuilder {
        SpaceRestorerBuilder::default()
    }

    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, SegmentConfig::default())
    }

    pub fn with_config(lexicon: Lexicon, config: SegmentConfig) -> Self {
        Self {
            selector: Selector::new(&config),
            lexicon,
            config,
        }
    }

    #[inline]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Separator insertion points as character offsets into the trimmed,
    /// lowercased `text`. Ascending, distinct and strictly interior.
    pub fn predict_space_positions(&self, text: &str) -> Vec<usize> {
        self.select(&Normalized::new(text))
            .map(|s| s.boundaries)
            .unwrap_or_default()
    }

    /// `text` with the separator inserted at every predicted position.
    ///
    /// Borrows the input when there is nothing to insert. Positions are
    /// mapped back to the caller's characters, so surrounding whitespace and
    /// original casing are preserved.
    pub fn restore_spaces<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let normalized = Normalized::new(text);
        let Some(selection) = self.select(&normalized) else {
            return Cow::Borrowed(text);
        };
        if selection.boundaries.is_empty() {
            return Cow::Borrowed(text);
        }

        let first = normalized.origin_of(0);
        let last = normalized.origin_of(normalized.char_len());
        let mut cuts: Vec<usize> = selection
            .boundaries
            .iter()
            .map(|&p| normalized.origin_of(p))
            .filter(|&p| p > first && p < last)
            .collect();
        cuts.dedup();

        let mut out = String::with_capacity(text.len() + cuts.len() * self.config.separator.len_utf8());
        let mut pending = cuts.iter().copied().peekable();
        for (idx, c) in text.chars().enumerate() {
            if pending.next_if_eq(&idx).is_some() {
                out.push(self.config.separator);
            }
            out.push(c);
        }
        Cow::Owned(out)
    }

    fn select(&self, normalized: &Normalized<'_>) -> Option<Selection> {
        let text = CharText::new(normalized.as_str());
        if text.len() < 2 {
            return None;
        }
        let mut selection = self.selector.select(&text, &self.lexicon);
        selection.boundaries.retain(|&p| p > 0 && p < text.len());
        selection.boundaries.sort_unstable();
        selection.boundaries.dedup();
        Some(selection)
    }
}

/// Builder for [`SpaceRestorer`].
///
/// Sources and overrides are forwarded to a [`LexiconBuilder`]; a prebuilt
/// lexicon passed with [`lexicon`](Self::lexicon) replaces them.
#[derive(Default)]
pub struct SpaceRestorerBuilder {
    words: LexiconBuilder,
    lexicon: Option<Lexicon>,
    config: SegmentConfig,
}

impl SpaceRestorerBuilder {
    pub fn source<S: WordSource + 'static>(mut self, source: S) -> Self {
        self.words = self.words.source(source);
        self
    }

    pub fn overrides<I, W>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, u64)>,
        W: Into<String>,
    {
        self.words = self.words.overrides(entries);
        self
    }

    pub fn curated(mut self) -> Self {
        self.words = self.words.curated();
        self
    }

    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn config(mut self, config: SegmentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_word_len(mut self, len: usize) -> Self {
        self.config.max_word_len = len;
        self
    }

    pub fn max_unknown_greedy_len(mut self, len: usize) -> Self {
        self.config.max_unknown_greedy_len = len;
        self
    }

    pub fn bad_ratio_threshold(mut self, threshold: f64) -> Self {
        self.config.bad_ratio_threshold = threshold;
        self
    }

    pub fn min_gap(mut self, gap: usize) -> Self {
        self.config.min_gap = gap;
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    pub fn build(self) -> SpaceRestorer {
        let lexicon = match self.lexicon {
            Some(lexicon) => lexicon,
            None => self.words.build(),
        };
        SpaceRestorer::with_config(lexicon, self.config)
    }
}
