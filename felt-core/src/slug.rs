//! Slug derivation for products and blog posts.

/// Derive a URL-safe slug from a display string.
///
/// Lower-cases ASCII letters, collapses every run of characters outside
/// `[a-z0-9]` to a single hyphen, and strips leading/trailing hyphens.
/// Idempotent: deriving from an existing slug returns it unchanged.
///
/// No uniqueness suffix is appended. A duplicate slug is rejected by the
/// database unique constraint at insert time, not pre-checked here.
pub fn derive_slug(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut pending_hyphen = false;
    for c in source.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn punctuation_collapses_to_single_hyphen() {
        assert_eq!(derive_slug("Pool Table #9!!"), "pool-table-9");
    }

    #[test]
    fn plain_names_lowercase() {
        assert_eq!(derive_slug("Brunswick Gold Crown VI"), "brunswick-gold-crown-vi");
    }

    #[test]
    fn leading_and_trailing_separators_are_stripped() {
        assert_eq!(derive_slug("  --Felt & Slate--  "), "felt-slate");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty_slug() {
        assert_eq!(derive_slug(""), "");
        assert_eq!(derive_slug("!!!"), "");
    }

    #[test]
    fn non_ascii_characters_become_separators() {
        assert_eq!(derive_slug("café billard"), "caf-billard");
    }

    proptest! {
        #[test]
        fn derivation_is_idempotent(source in ".{0,80}") {
            let once = derive_slug(&source);
            prop_assert_eq!(derive_slug(&once), once);
        }

        #[test]
        fn output_is_always_url_safe(source in ".{0,80}") {
            let slug = derive_slug(&source);
            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }
    }
}
