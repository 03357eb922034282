#![cfg(feature = "control")]
//! Integration tests for the type class hierarchy.
//!
//! These tests verify that `Functor`, `Applicative`, and `Monad` present one
//! coherent surface across `Option`, `Result`, and `Try`, including code that
//! is generic over the abstraction rather than a concrete container.

use rstest::rstest;
use tentative::control::Try;
use tentative::typeclass::{Applicative, Functor, Monad};

// =============================================================================
// Generic Helpers
// =============================================================================

/// Maps the payload to its decimal rendering, whatever the container.
fn stringify<M>(container: M) -> M::WithType<String>
where
    M: Functor<Inner = i32>,
{
    container.fmap(|n| n.to_string())
}

/// Combines two containers of the same shape with addition.
fn add_inside<M>(left: M, right: M::WithType<i32>) -> M::WithType<i32>
where
    M: Applicative<Inner = i32>,
{
    left.map2(right, |a, b| a.wrapping_add(b))
}

/// Doubles the payload by binding a pure continuation.
fn double_inside<M>(container: M) -> M::WithType<i32>
where
    M: Monad<Inner = i32>,
{
    container.flat_map(|n| M::pure(n.wrapping_mul(2)))
}

// =============================================================================
// Trait Hierarchy Tests
// =============================================================================

#[test]
fn monad_instances_exist_for_all_containers() {
    fn assert_monad<M: Monad>() {}

    let _ = assert_monad::<Option<i32>>;
    let _ = assert_monad::<Result<i32, String>>;
    let _ = assert_monad::<Try<i32, String>>;
}

#[test]
fn monad_implies_applicative_and_functor() {
    fn assert_functor<M: Functor>() {}
    fn assert_applicative<M: Applicative>() {}

    let _ = assert_functor::<Try<i32, String>>;
    let _ = assert_applicative::<Try<i32, String>>;
}

// =============================================================================
// Generic Function Tests
// =============================================================================

mod generic_functions {
    use super::*;

    #[rstest]
    fn stringify_works_for_every_container() {
        assert_eq!(stringify(Some(42)), Some("42".to_string()));
        assert_eq!(
            stringify(Ok::<i32, String>(42)),
            Ok::<String, String>("42".to_string())
        );
        assert_eq!(
            stringify(Try::<i32, String>::success(42)),
            Try::success("42".to_string())
        );
    }

    #[rstest]
    fn stringify_preserves_empty_shapes() {
        let none: Option<i32> = None;
        assert_eq!(stringify(none), None);

        let absent: Try<i32, String> = Try::success_opt(None);
        assert_eq!(stringify(absent), Try::Success(None));

        let failed: Try<i32, String> = Try::failure("boom".to_string());
        assert_eq!(stringify(failed), Try::failure("boom".to_string()));
    }

    #[rstest]
    fn add_inside_combines_every_container() {
        assert_eq!(add_inside(Some(1), Some(2)), Some(3));
        assert_eq!(
            add_inside(Ok::<i32, String>(1), Ok::<i32, String>(2)),
            Ok(3)
        );
        assert_eq!(
            add_inside(
                Try::<i32, String>::success(1),
                Try::<i32, String>::success(2)
            ),
            Try::success(3)
        );
    }

    #[rstest]
    fn add_inside_propagates_failure() {
        let failed: Try<i32, String> = Try::failure("boom".to_string());
        let other: Try<i32, String> = Try::success(2);
        assert_eq!(add_inside(failed, other), Try::failure("boom".to_string()));
    }

    #[rstest]
    fn double_inside_binds_every_container() {
        assert_eq!(double_inside(Some(21)), Some(42));
        assert_eq!(double_inside(Ok::<i32, String>(21)), Ok(42));
        assert_eq!(
            double_inside(Try::<i32, String>::success(21)),
            Try::success(42)
        );
    }

    #[rstest]
    fn double_inside_passes_absent_payload_through() {
        let absent: Try<i32, String> = Try::success_opt(None);
        assert_eq!(double_inside(absent), Try::Success(None));
    }
}

// =============================================================================
// Try Functor Tests
// =============================================================================

mod try_functor {
    use super::*;

    #[rstest]
    fn fmap_transforms_present_payload() {
        let outcome: Try<i32, String> = Try::success(5);
        let result: Try<String, String> = outcome.fmap(|n| n.to_string());
        assert_eq!(result, Try::success("5".to_string()));
    }

    #[rstest]
    fn fmap_skips_absent_payload() {
        let outcome: Try<i32, String> = Try::success_opt(None);
        let result: Try<String, String> = outcome.fmap(|n| n.to_string());
        assert_eq!(result, Try::Success(None));
    }

    #[rstest]
    fn fmap_short_circuits_failure() {
        let outcome: Try<i32, String> = Try::failure("boom".to_string());
        let result: Try<String, String> = outcome.fmap(|n| n.to_string());
        assert_eq!(result, Try::failure("boom".to_string()));
    }

    #[rstest]
    fn fmap_ref_transforms_without_consuming() {
        let outcome: Try<String, String> = Try::success("hello".to_string());
        let result: Try<usize, String> = outcome.fmap_ref(|s| s.len());
        assert!(outcome.is_success());
        assert_eq!(result, Try::success(5));
    }

    #[rstest]
    fn fmap_ref_clones_failure() {
        let outcome: Try<String, String> = Try::failure("boom".to_string());
        let result: Try<usize, String> = outcome.fmap_ref(|s| s.len());
        assert!(outcome.is_failure());
        assert_eq!(result, Try::failure("boom".to_string()));
    }

    #[rstest]
    fn replace_swaps_present_payload_only() {
        let present: Try<i32, String> = Try::success(5);
        assert_eq!(present.replace("swapped"), Try::success("swapped"));

        let absent: Try<i32, String> = Try::success_opt(None);
        assert_eq!(absent.replace("swapped"), Try::Success(None));
    }

    #[rstest]
    fn void_discards_payload() {
        let present: Try<i32, String> = Try::success(5);
        assert_eq!(present.void(), Try::success(()));

        let failed: Try<i32, String> = Try::failure("boom".to_string());
        assert_eq!(failed.void(), Try::failure("boom".to_string()));
    }
}

// =============================================================================
// Try Applicative Tests
// =============================================================================

mod try_applicative {
    use super::*;

    #[rstest]
    fn pure_lifts_into_present_success() {
        let outcome: Try<i32, String> = <Try<(), String>>::pure(42);
        assert_eq!(outcome, Try::success(42));
    }

    #[rstest]
    fn map2_combines_two_present_payloads() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<i32, String> = Try::success(2);
        assert_eq!(a.map2(b, |x, y| x + y), Try::success(3));
    }

    #[rstest]
    fn map2_reports_leftmost_failure() {
        let a: Try<i32, String> = Try::failure("first".to_string());
        let b: Try<i32, String> = Try::failure("second".to_string());
        assert_eq!(a.map2(b, |x, y| x + y), Try::failure("first".to_string()));
    }

    #[rstest]
    fn map2_left_absent_wins_over_right_failure() {
        let a: Try<i32, String> = Try::success_opt(None);
        let b: Try<i32, String> = Try::failure("late".to_string());
        assert_eq!(a.map2(b, |x, y| x + y), Try::Success(None));
    }

    #[rstest]
    fn map2_right_failure_after_present_left() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<i32, String> = Try::failure("late".to_string());
        assert_eq!(a.map2(b, |x, y| x + y), Try::failure("late".to_string()));
    }

    #[rstest]
    fn map2_right_absent_after_present_left() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<i32, String> = Try::success_opt(None);
        assert_eq!(a.map2(b, |x, y| x + y), Try::Success(None));
    }

    #[rstest]
    fn map3_reports_first_failure_in_order() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<i32, String> = Try::failure("middle".to_string());
        let c: Try<i32, String> = Try::failure("last".to_string());
        assert_eq!(
            a.map3(b, c, |x, y, z| x + y + z),
            Try::failure("middle".to_string())
        );
    }

    #[rstest]
    fn map3_combines_three_present_payloads() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<i32, String> = Try::success(2);
        let c: Try<i32, String> = Try::success(3);
        assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Try::success(6));
    }

    #[rstest]
    fn product_pairs_present_payloads() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<&str, String> = Try::success("hello");
        assert_eq!(a.product(b), Try::success((1, "hello")));
    }

    #[rstest]
    fn product_left_keeps_left_payload() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<i32, String> = Try::success(2);
        assert_eq!(a.product_left(b), Try::success(1));
    }

    #[rstest]
    fn product_right_keeps_right_payload() {
        let a: Try<i32, String> = Try::success(1);
        let b: Try<i32, String> = Try::success(2);
        assert_eq!(a.product_right(b), Try::success(2));
    }

    #[rstest]
    fn apply_applies_wrapped_function() {
        let function: Try<fn(i32) -> i32, String> = Try::success(|x| x + 1);
        let value: Try<i32, String> = Try::success(5);
        assert_eq!(function.apply(value), Try::success(6));
    }

    #[rstest]
    fn apply_propagates_failed_function() {
        let function: Try<fn(i32) -> i32, String> = Try::failure("boom".to_string());
        let value: Try<i32, String> = Try::success(5);
        assert_eq!(function.apply(value), Try::failure("boom".to_string()));
    }
}

// =============================================================================
// Try Monad Tests
// =============================================================================

mod try_monad {
    use super::*;

    #[rstest]
    fn flat_map_chains_present_payload() {
        let outcome: Try<i32, String> = Try::success(5);
        let result = Monad::flat_map(outcome, |n| Try::success(n * 2));
        assert_eq!(result, Try::success(10));
    }

    #[rstest]
    fn flat_map_can_introduce_failure() {
        let outcome: Try<i32, String> = Try::success(5);
        let result: Try<i32, String> =
            Monad::flat_map(outcome, |_| Try::failure("rejected".to_string()));
        assert_eq!(result, Try::failure("rejected".to_string()));
    }

    #[rstest]
    fn flat_map_passes_absent_payload_through() {
        let outcome: Try<i32, String> = Try::success_opt(None);
        let result = Monad::flat_map(outcome, |n| Try::success(n * 2));
        assert_eq!(result, Try::Success(None));
    }

    #[rstest]
    fn and_then_aliases_flat_map() {
        let outcome: Try<i32, String> = Try::success(5);
        let result = Monad::and_then(outcome, |n| Try::success(n * 2));
        assert_eq!(result, Try::success(10));
    }

    #[rstest]
    fn then_discards_first_payload() {
        let first: Try<i32, String> = Try::success(5);
        let second: Try<&str, String> = Try::success("hello");
        assert_eq!(first.then(second), Try::success("hello"));
    }

    #[rstest]
    fn then_propagates_failure() {
        let first: Try<i32, String> = Try::failure("boom".to_string());
        let second: Try<&str, String> = Try::success("hello");
        assert_eq!(first.then(second), Try::failure("boom".to_string()));
    }
}
