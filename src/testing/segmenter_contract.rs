use crate::lexicon::Lexicon;
use crate::segment::{CharText, Segmenter};

/// Assert that a segmenter satisfies the universal boundary contracts.
///
/// 1. `boundaries_are_interior_and_increasing`: every boundary `p` has
///    `0 < p < len` and the list is strictly increasing
/// 2. `pieces_reconstruct_input`: cutting at the boundaries loses nothing
/// 3. `handles_empty_and_single_char`: no boundaries for length < 2
/// 4. `segmentation_is_deterministic`: same input, same boundaries
/// 5. `no_panic_on_mixed_scripts`: survives pathological real-world input
/// 6. `long_input_stays_valid`: inputs far beyond the candidate window
#[macro_export]
macro_rules! assert_segmenter_contract {
    ($segmenter:expr) => {
        $crate::testing::segmenter_contract::boundaries_are_interior_and_increasing(&$segmenter);
        $crate::testing::segmenter_contract::pieces_reconstruct_input(&$segmenter);
        $crate::testing::segmenter_contract::handles_empty_and_single_char(&$segmenter);
        $crate::testing::segmenter_contract::segmentation_is_deterministic(&$segmenter);
        $crate::testing::segmenter_contract::no_panic_on_mixed_scripts(&$segmenter);
        $crate::testing::segmenter_contract::long_input_stays_valid(&$segmenter);
    };
}

const SAMPLES: &[&str] = &[
    "куплюквартиру",
    "iphone5s",
    "продаюдиванвхорошемсостоянии",
    "ищуработувмоскве",
    "снимуквартирунадолгийсрок",
    "малинока",
    "qwertyuiop",
    "ааааааааааааааааб",
    "дом кот",
    "ok",
];

const MIXED: &[&str] = &[
    "купитьiPhone15proмаксвмоскве",
    "самсунгgalaxyс23ультра",
    "цена1000000рублей",
    "テスト日本語куплю",
    "😀😀😀квартира😀",
    "\u{0301}\u{0301}ё\u{200d}ж",
    "  \t\n  ",
    "i\u{307}stanbul",
];

fn lexicon() -> Lexicon {
    Lexicon::builder().curated().build()
}

fn check(text: &str, boundaries: &[usize]) {
    let len = text.chars().count();
    for &p in boundaries {
        assert!(
            p > 0 && p < len,
            "boundary {p} not interior for `{text}` (len {len}): {boundaries:?}"
        );
    }
    assert!(
        boundaries.windows(2).all(|w| w[0] < w[1]),
        "boundaries not strictly increasing for `{text}`: {boundaries:?}"
    );
}

pub fn boundaries_are_interior_and_increasing<S: Segmenter>(segmenter: &S) {
    let lexicon = lexicon();
    for &sample in SAMPLES {
        let boundaries = segmenter.segment(&CharText::new(sample), &lexicon);
        check(sample, &boundaries);
    }
}

pub fn pieces_reconstruct_input<S: Segmenter>(segmenter: &S) {
    let lexicon = lexicon();
    for &sample in SAMPLES {
        let text = CharText::new(sample);
        let boundaries = segmenter.segment(&text, &lexicon);

        let mut cuts = vec![0];
        cuts.extend(&boundaries);
        cuts.push(text.len());
        let rebuilt: String = cuts.windows(2).map(|w| text.slice(w[0], w[1])).collect();
        assert_eq!(rebuilt, sample, "{} lost characters", segmenter.name());
    }
}

pub fn handles_empty_and_single_char<S: Segmenter>(segmenter: &S) {
    let lexicon = lexicon();
    for sample in ["", "я", "x", "5", "ё", "😀"] {
        assert!(
            segmenter.segment(&CharText::new(sample), &lexicon).is_empty(),
            "{} split `{sample}`",
            segmenter.name()
        );
    }
}

pub fn segmentation_is_deterministic<S: Segmenter>(segmenter: &S) {
    let lexicon = lexicon();
    for &sample in SAMPLES.iter().chain(MIXED) {
        let text = CharText::new(sample);
        assert_eq!(
            segmenter.segment(&text, &lexicon),
            segmenter.segment(&text, &lexicon),
            "{} not deterministic on `{sample}`",
            segmenter.name()
        );
    }
}

pub fn no_panic_on_mixed_scripts<S: Segmenter>(segmenter: &S) {
    let lexicon = lexicon();
    for &sample in MIXED {
        let boundaries = segmenter.segment(&CharText::new(sample), &lexicon);
        check(sample, &boundaries);
    }
}

pub fn long_input_stays_valid<S: Segmenter>(segmenter: &S) {
    let lexicon = lexicon();
    let long = "куплюквартирувмосквенедорого".repeat(200);
    let boundaries = segmenter.segment(&CharText::new(&long), &lexicon);
    check(&long, &boundaries);
    assert!(!boundaries.is_empty());

    let noise = "щ".repeat(5000);
    check(&noise, &segmenter.segment(&CharText::new(&noise), &lexicon));
}
