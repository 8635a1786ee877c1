//! Property tests for platform name and menu parsing.

use proptest::prelude::*;

use optionscope_deploy::Platform;

fn any_platform() -> impl Strategy<Value = Platform> {
    prop::sample::select(Platform::ALL.to_vec())
}

/// Randomly upper-case each character
fn mixed_case(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Names parse regardless of case and surrounding whitespace.
    #[test]
    fn property_name_parsing_ignores_case_and_padding(
        platform in any_platform(),
        mask in prop::collection::vec(any::<bool>(), 1..8),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let input = format!("{}{}{}", left, mixed_case(platform.name(), &mask), right);
        prop_assert_eq!(input.parse::<Platform>().ok(), Some(platform));
    }

    /// PROPERTY: Anything that is not one of the four names is rejected and echoed back.
    #[test]
    fn property_unknown_names_rejected(name in "[a-z]{1,12}") {
        prop_assume!(Platform::ALL.iter().all(|p| p.name() != name));
        let err = name.parse::<Platform>().unwrap_err();
        let message = err.to_string();
        prop_assert!(message.contains(&name));
        prop_assert!(message.contains("vercel, heroku, railway, render"));
    }

    /// PROPERTY: Menu answers never fail; only exact "1".."4" pick a non-default.
    #[test]
    fn property_menu_choice_total(choice in "\\PC{0,6}") {
        let platform = Platform::from_menu_choice(&choice);
        match choice.trim() {
            "2" => prop_assert_eq!(platform, Platform::Heroku),
            "3" => prop_assert_eq!(platform, Platform::Railway),
            "4" => prop_assert_eq!(platform, Platform::Render),
            _ => prop_assert_eq!(platform, Platform::Vercel),
        }
    }
}
