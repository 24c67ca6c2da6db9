mod prop_tests {
    use crate::normalize::Normalized;
    use crate::segment::CharText;
    use crate::select::bad_ratio;
    use crate::{Lexicon, SpaceRestorer};
    use proptest::prelude::*;
    use std::borrow::Cow;
    use std::sync::OnceLock;

    fn restorer() -> &'static SpaceRestorer {
        static RESTORER: OnceLock<SpaceRestorer> = OnceLock::new();
        RESTORER.get_or_init(|| SpaceRestorer::builder().curated().build())
    }

    proptest! {
        #[test]
        fn positions_are_interior(s in ".{0,80}") {
            let len = Normalized::new(&s).char_len();
            for p in restorer().predict_space_positions(&s) {
                prop_assert!(p > 0 && p < len);
            }
        }

        #[test]
        fn positions_strictly_increase_with_min_gap(s in "[а-яёa-z0-9]{0,120}") {
            let positions = restorer().predict_space_positions(&s);
            prop_assert!(positions.windows(2).all(|w| w[1] >= w[0] + 2));
        }

        #[test]
        fn pieces_rebuild_normalized_text(s in "[а-яА-ЯёЁa-z0-9]{0,100}") {
            let normalized = Normalized::new(&s);
            let text = CharText::new(normalized.as_str());
            let positions = restorer().predict_space_positions(&s);

            let mut cuts = vec![0];
            cuts.extend(&positions);
            cuts.push(text.len());
            let rebuilt: String = cuts.windows(2).map(|w| text.slice(w[0], w[1])).collect();
            prop_assert_eq!(rebuilt.as_str(), normalized.as_str());
        }

        #[test]
        fn restore_only_adds_separators(s in "[а-яА-Яa-zA-Z0-9]{0,100}") {
            let restored = restorer().restore_spaces(&s);
            let positions = restorer().predict_space_positions(&s);
            prop_assert_eq!(restored.chars().filter(|&c| c == ' ').count(), positions.len());
            prop_assert_eq!(restored.replace(' ', ""), s);
        }

        #[test]
        fn short_input_has_no_positions(c in any::<char>()) {
            prop_assert!(restorer().predict_space_positions("").is_empty());
            prop_assert!(restorer().predict_space_positions(&c.to_string()).is_empty());
        }

        #[test]
        fn restore_borrows_when_no_positions(s in ".{0,60}") {
            if restorer().predict_space_positions(&s).is_empty() {
                let out = restorer().restore_spaces(&s);
                prop_assert!(matches!(out, Cow::Borrowed(b) if b.as_ptr() == s.as_ptr()));
            }
        }

        #[test]
        fn bad_ratio_is_a_fraction(words in prop::collection::vec("[а-я]{1,20}", 0..20)) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let ratio = bad_ratio(&refs, &Lexicon::default());
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }
}
