//! Property-based tests for registry lookups, composition and sorting

use proptest::prelude::*;
use textsmith::combinators::{compose, pipe, remove_duplicates_sorted};
use textsmith::traits::{TextTransform, Transform};
use textsmith::transforms::{lookup, BuiltinTransform};

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z \t\n.]{0,40}"
}

fn builtin_strategy() -> impl Strategy<Value = BuiltinTransform> {
    prop::sample::select(BuiltinTransform::ALL.to_vec())
}

proptest! {
    #[test]
    fn strip_is_idempotent(text in text_strategy()) {
        let strip = [lookup("strip")];
        let once = pipe(&text, &strip);
        prop_assert_eq!(pipe(&once, &strip), once);
    }

    #[test]
    fn unknown_names_resolve_to_identity(text in text_strategy(), name in "zz[a-z]{1,8}") {
        prop_assert_eq!(lookup(&name).transform(&text), text);
    }

    #[test]
    fn compose_applies_left_to_right(
        text in text_strategy(),
        f in builtin_strategy(),
        g in builtin_strategy(),
    ) {
        let steps: Vec<Transform> = vec![lookup(f.id()), lookup(g.id())];
        let composed = compose(steps);
        prop_assert_eq!(composed.transform(&text), g.transform(&f.transform(&text)));
    }

    #[test]
    fn dedupe_has_no_case_insensitive_duplicates(text in text_strategy()) {
        let words = remove_duplicates_sorted(&text);
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let mut unique = lowered.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), lowered.len());

        for pair in words.windows(2) {
            let a = (pair[0].chars().count(), pair[0].to_lowercase());
            let b = (pair[1].chars().count(), pair[1].to_lowercase());
            prop_assert!(a <= b);
        }
    }
}
