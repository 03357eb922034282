//! Property-based tests for Try IntoIterator implementation.

#![cfg(feature = "control")]

use proptest::prelude::*;
use tentative::control::Try;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_try_i32() -> impl Strategy<Value = Try<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Try::success),
        Just(Try::Success(None)),
        "[a-z]{1,10}".prop_map(Try::failure),
    ]
}

// =============================================================================
// Iterator Law Tests
// =============================================================================

proptest! {
    /// size_hint must be accurate for Try iterators.
    /// For Try, size_hint is always exact (0 or 1).
    #[test]
    fn prop_size_hint_matches_count(outcome in arb_try_i32()) {
        let iterator = outcome.clone().into_iter();
        let (lower, upper) = iterator.size_hint();
        let count = outcome.into_iter().count();

        prop_assert!(lower <= count);
        prop_assert!(upper == Some(count));
    }

    /// ExactSizeIterator::len must match count.
    #[test]
    fn prop_len_matches_count(outcome in arb_try_i32()) {
        let iterator = outcome.clone().into_iter();
        let len = iterator.len();
        let count = outcome.into_iter().count();

        prop_assert_eq!(len, count);
    }

    /// collect().len() must match count.
    #[test]
    fn prop_collect_len_matches_count(outcome in arb_try_i32()) {
        let collected: Vec<_> = outcome.clone().into_iter().collect();
        let count = outcome.into_iter().count();

        prop_assert_eq!(collected.len(), count);
    }

    /// The sequence view agrees with value() for every state.
    #[test]
    fn prop_into_iter_matches_value(outcome in arb_try_i32()) {
        let expected: Vec<i32> = outcome.clone().value().into_iter().collect();
        let collected: Vec<i32> = outcome.into_iter().collect();

        prop_assert_eq!(collected, expected);
    }
}

// =============================================================================
// Payload Presence Tests
// =============================================================================

proptest! {
    /// success(x).into_iter().collect() == vec![x]
    #[test]
    fn prop_present_success_yields_value(value: i32) {
        let outcome: Try<i32, String> = Try::success(value);
        let collected: Vec<i32> = outcome.into_iter().collect();

        prop_assert_eq!(collected, vec![value]);
    }

    /// success_opt(payload).into_iter() yields exactly the present payload.
    #[test]
    fn prop_success_opt_yields_payload(payload in any::<Option<i32>>()) {
        let outcome: Try<i32, String> = Try::success_opt(payload);
        let collected: Vec<i32> = outcome.into_iter().collect();
        let expected: Vec<i32> = payload.into_iter().collect();

        prop_assert_eq!(collected, expected);
    }

    /// failure(e).into_iter().collect() == vec![]
    #[test]
    fn prop_failure_yields_nothing(error in "[a-z]{1,10}") {
        let outcome: Try<i32, String> = Try::failure(error);
        let collected: Vec<i32> = outcome.into_iter().collect();

        prop_assert_eq!(collected, Vec::<i32>::new());
    }

    /// success(x).into_iter().next() == Some(x)
    #[test]
    fn prop_present_success_next_is_some(value: i32) {
        let outcome: Try<i32, String> = Try::success(value);
        let next = outcome.into_iter().next();

        prop_assert_eq!(next, Some(value));
    }

    /// failure(e).into_iter().next() == None
    #[test]
    fn prop_failure_next_is_none(error in "[a-z]{1,10}") {
        let outcome: Try<i32, String> = Try::failure(error);
        let next = outcome.into_iter().next();

        prop_assert_eq!(next, None);
    }
}

// =============================================================================
// Reference Iterator Tests
// =============================================================================

proptest! {
    /// &success(x).into_iter().collect() == vec![&x]
    #[test]
    fn prop_success_ref_yields_reference(value: i32) {
        let outcome: Try<i32, String> = Try::success(value);
        let collected: Vec<&i32> = (&outcome).into_iter().collect();

        prop_assert_eq!(collected, vec![&value]);
        // outcome should still be usable
        prop_assert!(outcome.is_success());
    }

    /// &failure(e).into_iter().collect() == vec![]
    #[test]
    fn prop_failure_ref_yields_nothing(error in "[a-z]{1,10}") {
        let outcome: Try<i32, String> = Try::failure(error.clone());
        let collected: Vec<&i32> = (&outcome).into_iter().collect();

        prop_assert_eq!(collected, Vec::<&i32>::new());
        // outcome should still be usable
        prop_assert!(outcome.is_failure());
    }

    /// iter() and (&outcome).into_iter() visit the same items.
    #[test]
    fn prop_iter_matches_ref_into_iter(outcome in arb_try_i32()) {
        let from_iter: Vec<&i32> = outcome.iter().collect();
        let from_ref: Vec<&i32> = (&outcome).into_iter().collect();

        prop_assert_eq!(from_iter, from_ref);
    }

    /// iter() can restart any number of times without consuming the Try.
    #[test]
    fn prop_iter_is_restartable(outcome in arb_try_i32()) {
        let first: Vec<&i32> = outcome.iter().collect();
        let second: Vec<&i32> = outcome.iter().collect();

        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// FusedIterator Tests
// =============================================================================

proptest! {
    /// FusedIterator: after returning None, always returns None.
    #[test]
    fn prop_fused_iterator(outcome in arb_try_i32()) {
        let mut iterator = outcome.into_iter();

        // Exhaust the iterator
        while iterator.next().is_some() {}

        // FusedIterator guarantees continued None
        prop_assert!(iterator.next().is_none());
        prop_assert!(iterator.next().is_none());
        prop_assert!(iterator.next().is_none());
    }
}

// =============================================================================
// DoubleEndedIterator Tests
// =============================================================================

proptest! {
    /// DoubleEndedIterator: next_back on a present success returns the value.
    #[test]
    fn prop_double_ended_success(value: i32) {
        let outcome: Try<i32, String> = Try::success(value);
        let mut iterator = outcome.into_iter();

        prop_assert_eq!(iterator.next_back(), Some(value));
        prop_assert_eq!(iterator.next_back(), None);
    }

    /// DoubleEndedIterator: next_back on a failure returns None.
    #[test]
    fn prop_double_ended_failure(error in "[a-z]{1,10}") {
        let outcome: Try<i32, String> = Try::failure(error);
        let mut iterator = outcome.into_iter();

        prop_assert_eq!(iterator.next_back(), None);
    }
}
