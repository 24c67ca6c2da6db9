//! Orthographic tables and predicates for the Russian Cyrillic alphabet.
//!
//! Everything here is a pure function over characters or short spans. Nothing
//! consults the lexicon: these predicates only judge whether a span *looks*
//! like a Russian word, which is how the segmenters give unknown words a
//! chance against dictionary evidence.

/// Longest run of consecutive consonants a plausible word may contain.
pub const MAX_CONSONANT_RUN: usize = 4;

/// Shortest span [`looks_like_word`] will ever accept.
pub const MIN_PLAUSIBLE_LEN: usize = 2;

#[inline(always)]
pub const fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'а' | 'е' | 'ё' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я'
    )
}

#[inline(always)]
pub const fn is_consonant(c: char) -> bool {
    matches!(
        c,
        'б' | 'в'
            | 'г'
            | 'д'
            | 'ж'
            | 'з'
            | 'й'
            | 'к'
            | 'л'
            | 'м'
            | 'н'
            | 'п'
            | 'р'
            | 'с'
            | 'т'
            | 'ф'
            | 'х'
            | 'ц'
            | 'ч'
            | 'ш'
            | 'щ'
    )
}

/// One of the 33 lowercase letters of the Russian alphabet.
///
/// `ъ` and `ь` are letters but neither vowels nor consonants.
#[inline(always)]
pub const fn is_russian_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c) || matches!(c, 'ъ' | 'ь')
}

/// Alphabetic character from the Cyrillic block (U+0400..=U+04FF).
#[inline(always)]
pub fn is_cyrillic_alpha(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x04FF) && c.is_alphabetic()
}

/// True when the word contains at least one lowercase Russian letter.
///
/// Used by the lexicon ingestion filter; callers lowercase first.
#[inline]
pub fn has_russian_letter(word: &str) -> bool {
    word.chars().any(is_russian_letter)
}

#[inline(always)]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Orthographic plausibility check for spans absent from the lexicon.
///
/// A span is plausible when it is at least two characters long, made only of
/// Cyrillic letters, has at least one vowel and one consonant, and never
/// strings together more than [`MAX_CONSONANT_RUN`] consonants.
pub fn looks_like_word(span: &str) -> bool {
    let mut len = 0usize;
    let mut vowels = 0usize;
    let mut consonants = 0usize;
    let mut run = 0usize;

    for c in span.chars() {
        len += 1;
        if !is_cyrillic_alpha(c) {
            return false;
        }
        let c = fold(c);
        if is_consonant(c) {
            consonants += 1;
            run += 1;
            if run > MAX_CONSONANT_RUN {
                return false;
            }
        } else {
            if is_vowel(c) {
                vowels += 1;
            }
            run = 0;
        }
    }

    len >= MIN_PLAUSIBLE_LEN && vowels > 0 && consonants > 0
}

/// Common Russian inflectional endings and the bonus each earns.
///
/// Order matters: [`ending_bonus`] returns the first match.
pub static ENDINGS: &[(&str, f64)] = &[
    // nouns
    ("ом", 2.0),
    ("ой", 2.0),
    ("ий", 2.0),
    ("ая", 2.0),
    ("ое", 2.0),
    ("ые", 2.0),
    ("ам", 1.5),
    ("ах", 1.5),
    ("ми", 1.5),
    ("ов", 1.5),
    ("ев", 1.5),
    ("ей", 1.5),
    ("ку", 1.8),
    ("ту", 1.8),
    ("ну", 1.8),
    ("ру", 1.8),
    ("лю", 1.8),
    ("шу", 1.8),
    ("ие", 1.5),
    ("ее", 1.5),
    ("ём", 1.5),
    ("их", 1.5),
    ("им", 1.8),
    ("ую", 1.8),
    // verbs
    ("ть", 3.0),
    ("ся", 2.5),
    ("ет", 2.0),
    ("ит", 2.0),
    ("ат", 2.0),
    ("ят", 2.0),
    ("ем", 1.8),
    ("ют", 1.8),
    ("ут", 1.8),
    ("ал", 1.5),
    ("ил", 1.5),
    // adjectives
    ("ый", 2.0),
    ("ых", 1.5),
    ("ым", 1.5),
    ("ому", 1.8),
    ("ему", 1.8),
    ("юю", 1.8),
];

/// Bonus for a recognised ending, or `0.0`. Words shorter than three
/// characters never earn one.
pub fn ending_bonus(word: &str) -> f64 {
    if word.chars().count() < 3 {
        return 0.0;
    }
    ENDINGS
        .iter()
        .find(|(ending, _)| word.ends_with(ending))
        .map_or(0.0, |&(_, bonus)| bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_and_consonant_sets_are_disjoint() {
        for c in 'а'..='я' {
            assert!(!(is_vowel(c) && is_consonant(c)), "{c}");
        }
        assert!(is_vowel('ё'));
        assert!(!is_vowel('ь') && !is_consonant('ь'));
        assert!(!is_vowel('ъ') && !is_consonant('ъ'));
    }

    #[test]
    fn every_lowercase_letter_is_russian() {
        let count = ('а'..='я').filter(|&c| is_russian_letter(c)).count();
        assert_eq!(count, 32);
        assert!(is_russian_letter('ё'));
        assert!(!is_russian_letter('і'));
    }

    #[test]
    fn plausible_words() {
        for w in ["мама", "дом", "квартиру", "ок", "подъезд", "ПРОДАМ"] {
            assert!(looks_like_word(w), "{w}");
        }
    }

    #[test]
    fn implausible_words() {
        for w in [
            "",
            "д",
            "ааа",
            "ббб",
            "встрвка",
            "iphone",
            "дом5",
            "мама папа",
            "кот-пёс",
        ] {
            assert!(!looks_like_word(w), "{w}");
        }
    }

    #[test]
    fn consonant_run_of_four_is_allowed() {
        assert!(looks_like_word("австра"));
        assert!(!looks_like_word("австрба"));
    }

    #[test]
    fn soft_sign_breaks_consonant_run() {
        assert!(looks_like_word("аббьбба"));
        assert!(looks_like_word("ельтстк"));
        assert!(!looks_like_word("елтстк"));
    }

    #[test]
    fn endings() {
        assert_eq!(ending_bonus("купить"), 3.0);
        assert_eq!(ending_bonus("учиться"), 2.5);
        assert_eq!(ending_bonus("новому"), 1.8);
        assert_eq!(ending_bonus("хорошую"), 1.8);
        assert_eq!(ending_bonus("большим"), 1.8);
        assert_eq!(ending_bonus("стол"), 0.0);
        assert_eq!(ending_bonus("ть"), 0.0);
    }
}
