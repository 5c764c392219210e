use proptest::prelude::*;
use vigil_engine::ResultCache;

proptest! {
    #[test]
    fn cache_key_is_stable(content in ".{0,200}", language in "[a-z]{1,10}") {
        let first = ResultCache::cache_key(&content, &language);
        let second = ResultCache::cache_key(&content, &language);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn different_content_gets_a_different_key(
        a in ".{0,100}",
        b in ".{0,100}",
        language in "[a-z]{1,10}",
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(
            ResultCache::cache_key(&a, &language),
            ResultCache::cache_key(&b, &language)
        );
    }

    #[test]
    fn language_separates_otherwise_equal_keys(content in ".{0,100}") {
        prop_assert_ne!(
            ResultCache::cache_key(&content, "sql"),
            ResultCache::cache_key(&content, "python")
        );
    }

    // The key derivation feeds a separator between language and content, so
    // shifting bytes across the boundary cannot produce the same key.
    #[test]
    fn boundary_shifts_do_not_collide(prefix in "[a-z]{1,5}", rest in "[a-z]{1,20}") {
        let joined = format!("{prefix}{rest}");
        prop_assert_ne!(
            ResultCache::cache_key(&rest, &prefix),
            ResultCache::cache_key(&joined, "")
        );
    }
}
