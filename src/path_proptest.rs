//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::config::BrandConfig;
    use crate::path::{glob_match, rename_tokens, replace_tokens};
    use proptest::prelude::*;

    // ============================================================================
    // replace_tokens property tests
    // ============================================================================

    proptest! {
        /// Property: a renamed path never contains a source token with separator
        #[test]
        fn replace_tokens_removes_all_source_tokens(
            segments in prop::collection::vec(
                prop_oneof!["singleid-[a-z]{0,6}", "singleid_[a-z]{0,6}", "[a-z_.-]{1,10}"],
                1..6,
            ),
        ) {
            let tokens = rename_tokens(&BrandConfig::default());
            let path = segments.join("/");

            let renamed = replace_tokens(&path, &tokens).unwrap_or_else(|| path.clone());
            prop_assert!(!renamed.contains("singleid-"), "left token in {}", renamed);
            prop_assert!(!renamed.contains("singleid_"), "left token in {}", renamed);
        }

        /// Property: renaming an already renamed path is a no-op
        #[test]
        fn replace_tokens_is_idempotent(path in "[a-z_/.-]{0,12}(singleid[-_])?[a-z_/.-]{0,12}") {
            let tokens = rename_tokens(&BrandConfig::default());

            let once = replace_tokens(&path, &tokens).unwrap_or_else(|| path.clone());
            prop_assert_eq!(replace_tokens(&once, &tokens), None);
        }

        /// Property: paths without any token are reported as unchanged
        #[test]
        fn replace_tokens_ignores_clean_paths(path in "[a-hj-z0-9_/.-]{1,30}") {
            // No 'i' means "singleid" can never occur
            let tokens = rename_tokens(&BrandConfig::default());
            prop_assert_eq!(replace_tokens(&path, &tokens), None);
        }

        /// Property: segment count is preserved by renaming
        #[test]
        fn replace_tokens_preserves_depth(path in "(singleid-|[a-z]{1,4}/){1,6}[a-z]{1,4}") {
            let tokens = rename_tokens(&BrandConfig::default());
            let renamed = replace_tokens(&path, &tokens).unwrap_or_else(|| path.clone());
            prop_assert_eq!(renamed.matches('/').count(), path.matches('/').count());
        }
    }

    // ============================================================================
    // glob_match property tests
    // ============================================================================

    proptest! {
        /// Property: the default document pattern matches any Markdown path
        #[test]
        fn glob_default_documents_match_markdown(path in "([a-z0-9_-]{1,8}/){0,4}[a-z0-9_-]{1,8}") {
            let doc = format!("{}.md", path);
            prop_assert!(glob_match("**/*.md", &doc).unwrap(), "should match '{}'", doc);
        }

        /// Property: the default document pattern rejects other extensions
        #[test]
        fn glob_default_documents_reject_assets(
            path in "([a-z0-9_-]{1,8}/){0,4}[a-z0-9_-]{1,8}",
            ext in "(png|css|yml|html|svg)",
        ) {
            let asset = format!("{}.{}", path, ext);
            prop_assert!(!glob_match("**/*.md", &asset).unwrap());
        }

        /// Property: exact pattern matches only identical path
        #[test]
        fn glob_exact_match_works(path in "[a-zA-Z0-9_]{1,20}") {
            let result = glob_match(&path, &path);
            prop_assert!(result.is_ok());
            prop_assert!(result.unwrap(), "Exact pattern '{}' should match itself", path);
        }
    }
}
