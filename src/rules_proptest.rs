//! Property-based tests for the line rewrite rules.
//!
//! The rule set must be idempotent: rewriting already rebranded text changes
//! nothing. These tests throw generated documentation-like text at it.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{BrandConfig, RuleOptions};
    use crate::rules::{brand_token, RuleSet};
    use proptest::prelude::*;

    fn default_rules() -> RuleSet {
        RuleSet::new(&BrandConfig::default(), &RuleOptions::default()).unwrap()
    }

    /// Fragments that exercise every rule, mixed with arbitrary filler
    fn doc_fragment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("singleid".to_string()),
            Just("SingleID".to_string()),
            Just(".".to_string()),
            Just("(#".to_string()),
            Just(")".to_string()),
            Just("(https://login.singleid.jp/)".to_string()),
            Just("singleid.jp".to_string()),
            Just("\n".to_string()),
            "[a-zA-Z0-9 #()./_-]{0,8}",
        ]
    }

    fn doc_text() -> impl Strategy<Value = String> {
        prop::collection::vec(doc_fragment(), 0..24).prop_map(|parts| parts.concat())
    }

    // ============================================================================
    // RuleSet property tests
    // ============================================================================

    proptest! {
        /// Property: applying the default rules twice equals applying them once
        #[test]
        fn rules_are_idempotent(text in doc_text()) {
            let rules = default_rules();
            let once = rules.apply_text(&text);
            let twice = rules.apply_text(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: idempotence holds for arbitrary unicode lines too
        #[test]
        fn rules_are_idempotent_on_any_line(line in ".*") {
            let rules = default_rules();
            let once = rules.apply_line(&line);
            prop_assert_eq!(rules.apply_line(&once), once);
        }

        /// Property: line structure is preserved
        #[test]
        fn rules_preserve_line_count(text in doc_text()) {
            let rules = default_rules();
            let out = rules.apply_text(&text);
            prop_assert_eq!(out.matches('\n').count(), text.matches('\n').count());
            prop_assert_eq!(out.ends_with('\n'), text.ends_with('\n'));
        }

        /// Property: the capitalized brand name never survives
        #[test]
        fn rules_remove_brand_name(text in doc_text()) {
            let out = default_rules().apply_text(&text);
            prop_assert!(!out.contains("SingleID"));
        }

        /// Property: the parenthesized login URL never survives
        #[test]
        fn rules_remove_login_url(text in doc_text()) {
            let out = default_rules().apply_text(&text);
            prop_assert!(!out.contains("(https://login.singleid.jp/)"));
        }

        /// Property: image rewriting stays idempotent on simple references
        #[test]
        fn image_rules_are_idempotent(
            name in "[a-z0-9_-]{1,10}\\.(png|svg)",
            attr in "(src|href)",
        ) {
            let options = RuleOptions {
                enable_image_path_rewrite: true,
                ..RuleOptions::default()
            };
            let rules = RuleSet::new(&BrandConfig::default(), &options).unwrap();
            let line = format!("![x](/images/{}) <img {}=\"/images/{}\">", name, attr, name);

            let once = rules.apply_line(&line);
            prop_assert_eq!(rules.apply_line(&once), once.clone());
            prop_assert!(!once.contains("\"/images/"));
            prop_assert!(!once.contains("(/images/"));
        }

        /// Property: a prefix that would re-trigger the image rule is rejected
        #[test]
        fn image_prefix_under_images_is_rejected(sub in "[a-z0-9_-]{0,10}/?") {
            let options = RuleOptions {
                enable_image_path_rewrite: true,
                image_prefix: format!("/images/{}", sub),
            };
            prop_assert!(RuleSet::new(&BrandConfig::default(), &options).is_err());
        }
    }

    // ============================================================================
    // brand_token property tests
    // ============================================================================

    proptest! {
        /// Property: a token with no adjacent dot is always replaced
        #[test]
        fn brand_token_replaces_unguarded(
            prefix in "[a-z ]{0,6}",
            suffix in "[a-z ]{0,6}",
        ) {
            let line = format!("{} singleid {}", prefix, suffix);
            let out = brand_token::apply("singleid", "pioid", &line);
            prop_assert!(!out.contains("singleid"));
        }

        /// Property: dot-adjacent tokens are never touched
        #[test]
        fn brand_token_keeps_dot_adjacent(host in "[a-z]{1,6}", tld in "[a-z]{2,3}") {
            let before = format!("{}.singleid", host);
            let after = format!("singleid.{}", tld);
            prop_assert_eq!(brand_token::apply("singleid", "pioid", &before), before.clone());
            prop_assert_eq!(brand_token::apply("singleid", "pioid", &after), after.clone());
        }
    }
}
