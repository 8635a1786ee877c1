//! Property tests for env var filtering.

use proptest::prelude::*;

use optionscope_deploy::domain::value_objects::{is_pushable_value, PLACEHOLDER_VALUE};
use optionscope_deploy::EnvVars;

fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just(PLACEHOLDER_VALUE.to_string()),
        "[A-Za-z0-9_]{1,24}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Blank and placeholder values are never pushed; everything else is.
    #[test]
    fn property_pushable_excludes_blank_and_placeholder(
        entries in prop::collection::btree_map("[A-Z_]{1,12}", value(), 0..10),
    ) {
        let mut vars = EnvVars::new();
        for (k, v) in &entries {
            vars.set(k.as_str(), v.as_str());
        }

        let pushed: Vec<(&str, &str)> = vars.pushable().collect();
        for (_, v) in &pushed {
            prop_assert!(!v.trim().is_empty());
            prop_assert_ne!(*v, PLACEHOLDER_VALUE);
        }

        let expected = entries.values().filter(|v| is_pushable_value(v)).count();
        prop_assert_eq!(pushed.len(), expected);
        prop_assert_eq!(pushed.len() + vars.skipped_keys().len(), vars.len());
    }

    /// PROPERTY: Optional values are stored trimmed, or not at all when blank.
    #[test]
    fn property_set_optional_trims(raw in "[ ]{0,2}[a-z0-9]{0,8}[ ]{0,2}") {
        let mut vars = EnvVars::new();
        let stored = vars.set_optional("IEX_API_KEY", &raw);
        prop_assert_eq!(stored, !raw.trim().is_empty());
        if stored {
            prop_assert_eq!(vars.get("IEX_API_KEY"), Some(raw.trim()));
        } else {
            prop_assert!(vars.is_empty());
        }
    }
}
