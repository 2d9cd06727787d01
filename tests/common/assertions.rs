//! Domain-specific assertion macros for sift harnesses.

/// Assert that `$subset` is `$all` with some elements removed and the rest in
/// their original relative order. Elements are compared by address, so both
/// sides must borrow from the same collection.
///
/// ```rust
/// assert_order_preserving_subset!(hits, items);
/// ```
#[macro_export]
macro_rules! assert_order_preserving_subset {
    ($subset:expr, $all:expr) => {{
        let subset: &[&serde_json::Value] = &$subset;
        let all: &[serde_json::Value] = &$all;
        let mut remaining = all.iter();
        for (i, item) in subset.iter().enumerate() {
            if !remaining.any(|candidate| std::ptr::eq(candidate, *item)) {
                panic!(
                    "assert_order_preserving_subset! failed at result {}: {} is missing from the input or out of order",
                    i, item
                );
            }
        }
    }};
}

/// Assert that every marker pair in a highlighted string is balanced.
#[macro_export]
macro_rules! assert_balanced_markers {
    ($text:expr, $markers:expr) => {{
        let text: &str = &$text;
        let markers: sift_core::MarkerPair = $markers;
        let opens = text.matches(markers.open).count();
        let closes = text.matches(markers.close).count();
        if opens != closes {
            panic!(
                "assert_balanced_markers! failed: {} opening vs {} closing markers in {:?}",
                opens, closes, text
            );
        }
    }};
}
