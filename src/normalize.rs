//! Input normalization: trim, then lowercase.
//!
//! Both steps are zero-copy when nothing changes. Because segmentation runs
//! on the normalized text but separators are inserted into the caller's
//! original string, [`Normalized`] also records which original character
//! produced every normalized character.

use std::borrow::Cow;

/// Normalized text plus the map back to original character indices.
#[derive(Debug, Clone)]
pub struct Normalized<'a> {
    text: Cow<'a, str>,
    /// `origin[k]` is the original character index of normalized character
    /// `k`; the final slot holds the original index just past the trimmed
    /// text.
    origin: Vec<usize>,
}

impl<'a> Normalized<'a> {
    pub fn new(text: &'a str) -> Self {
        let trimmed = text.trim();
        let lead = text[..text.len() - text.trim_start().len()].chars().count();

        if !needs_lower_case(trimmed) {
            let len = trimmed.chars().count();
            return Self {
                text: Cow::Borrowed(trimmed),
                origin: (lead..=lead + len).collect(),
            };
        }

        let mut out = String::with_capacity(trimmed.len());
        let mut origin = Vec::with_capacity(trimmed.len() + 1);
        let mut consumed = 0;
        for (idx, c) in trimmed.chars().enumerate() {
            // per-character mapping: no final-sigma context, irrelevant for Cyrillic
            for lower in c.to_lowercase() {
                out.push(lower);
                origin.push(lead + idx);
            }
            consumed = idx + 1;
        }
        origin.push(lead + consumed);

        Self {
            text: Cow::Owned(out),
            origin,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.origin.len() - 1
    }

    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.text, Cow::Borrowed(_))
    }

    /// Original character index for normalized boundary `pos`.
    #[inline]
    pub fn origin_of(&self, pos: usize) -> usize {
        self.origin[pos.min(self.char_len())]
    }
}

#[inline]
fn needs_lower_case(text: &str) -> bool {
    if text.is_ascii() {
        return text.bytes().any(|b| b.is_ascii_uppercase());
    }
    text.chars().any(|c| {
        let mut lower = c.to_lowercase();
        lower.next() != Some(c) || lower.next().is_some()
    })
}
