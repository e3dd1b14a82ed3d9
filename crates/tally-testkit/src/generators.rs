//! Proptest generators for property-based testing.

use proptest::prelude::*;

/// Generate a single name token: printable, no whitespace.
pub fn name_token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,10}".prop_map(String::from)
}

/// Generate a token list forming a one-to-three word name.
pub fn name_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name_token(), 1..=3)
}

/// Generate a score delta within a comfortable range.
pub fn delta() -> impl Strategy<Value = i64> {
    -10_000i64..=10_000
}

/// Generate a set of `(name, score)` entries with distinct names.
pub fn entries(max: usize) -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::btree_map(name_token(), delta(), 0..=max)
        .prop_map(|map| map.into_iter().collect())
}
