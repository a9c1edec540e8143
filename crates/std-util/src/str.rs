/// Asserts that `needle` occurs in `haystack`, printing both on failure.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr $(,)?) => {{
        let (haystack, needle) = (&$haystack, &$needle);
        let haystack: &str = ::std::convert::AsRef::<str>::as_ref(haystack);
        let needle: &str = ::std::convert::AsRef::<str>::as_ref(needle);
        assert!(
            haystack.contains(needle),
            "expected `{}` to contain {:?}\n--- actual ---\n{}",
            stringify!($haystack),
            needle,
            haystack,
        );
    }};
}

/// Asserts that `needle` does not occur in `haystack`.
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr $(,)?) => {{
        let (haystack, needle) = (&$haystack, &$needle);
        let haystack: &str = ::std::convert::AsRef::<str>::as_ref(haystack);
        let needle: &str = ::std::convert::AsRef::<str>::as_ref(needle);
        assert!(
            !haystack.contains(needle),
            "expected `{}` not to contain {:?}\n--- actual ---\n{}",
            stringify!($haystack),
            needle,
            haystack,
        );
    }};
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
