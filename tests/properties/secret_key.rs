//! Property tests for generated secret keys.

use std::collections::HashSet;

use proptest::prelude::*;

use optionscope_deploy::generate_secret_key;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Keys are 43 URL-safe characters and do not repeat.
    #[test]
    fn property_secret_keys_are_url_safe_and_unique(count in 2usize..16) {
        let keys: Vec<String> = (0..count).map(|_| generate_secret_key()).collect();
        for key in &keys {
            prop_assert_eq!(key.len(), 43);
            prop_assert!(key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
        let unique: HashSet<&String> = keys.iter().collect();
        prop_assert_eq!(unique.len(), keys.len());
    }
}
