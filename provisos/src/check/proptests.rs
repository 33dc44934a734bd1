//! Property-based tests for the predicate library.

use super::{parse_mode, Comparison};
use proptest::prelude::*;

fn comparison_strategy() -> impl Strategy<Value = Comparison> {
    prop_oneof![
        Just(Comparison::Eq),
        Just(Comparison::Ne),
        Just(Comparison::Gt),
        Just(Comparison::Ge),
        Just(Comparison::Lt),
        Just(Comparison::Le),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Any mode up to 0o7777 survives formatting as octal and parsing back
    #[test]
    fn parse_mode_accepts_all_octal_forms(mode in 0u32..=0o7777) {
        prop_assert_eq!(parse_mode(&format!("{mode:o}")).unwrap(), mode);
        prop_assert_eq!(parse_mode(&format!("0{mode:o}")).unwrap(), mode);
        prop_assert_eq!(parse_mode(&format!("0o{mode:o}")).unwrap(), mode);
    }

    // Modes above the setuid/setgid/sticky range are rejected
    #[test]
    fn parse_mode_rejects_large_modes(mode in 0o10000u32..0o7777777) {
        let text = format!("{mode:o}");
        prop_assert!(parse_mode(&text).is_err());
    }

    // Eq/Ne, Gt/Le and Lt/Ge are complements
    #[test]
    fn comparisons_complement(actual in any::<u64>(), limit in any::<u64>()) {
        prop_assert_ne!(Comparison::Eq.holds(actual, limit), Comparison::Ne.holds(actual, limit));
        prop_assert_ne!(Comparison::Gt.holds(actual, limit), Comparison::Le.holds(actual, limit));
        prop_assert_ne!(Comparison::Lt.holds(actual, limit), Comparison::Ge.holds(actual, limit));
    }

    // Every comparison holds or fails deterministically for equal operands
    #[test]
    fn comparison_on_equal_values(value in any::<u64>(), cmp in comparison_strategy()) {
        let expected = matches!(cmp, Comparison::Eq | Comparison::Ge | Comparison::Le);
        prop_assert_eq!(cmp.holds(value, value), expected);
    }
}
