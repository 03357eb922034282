//! Try type - the captured outcome of a fallible computation.
//!
//! This module provides the `Try<T, E>` type, which represents a computation
//! that either completed with a value (`Success`) or failed with a typed
//! error (`Failure`). This is commonly used in functional programming for:
//!
//! - Turning early-return error handling into value-level composition
//! - Chaining fallible steps with short-circuit semantics
//! - Deferring the decision between propagating and recovering from an error
//!
//! A `Success` may hold an absent payload: `Success(None)` is still a
//! success, distinct from any `Failure`. Combinators that need a payload
//! pass the absent state through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use tentative::control::Try;
//!
//! fn parse_port(text: &str) -> Try<u16, std::num::ParseIntError> {
//!     Try::attempt(|| text.parse())
//! }
//!
//! // Successful computations compose.
//! let port = parse_port("8080").map(|port| port + 1);
//! assert_eq!(port, Try::success(8081));
//!
//! // Failed computations short-circuit until recovered.
//! let port = parse_port("not a port")
//!     .map(|port| port + 1)
//!     .fallback(80);
//! assert_eq!(port, Try::success(80));
//!
//! // Pattern matching covers all states.
//! match parse_port("8080") {
//!     Try::Success(Some(port)) => println!("listening on {}", port),
//!     Try::Success(None) => println!("no port configured"),
//!     Try::Failure(error) => println!("bad configuration: {}", error),
//! }
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::option::IntoIter as OptionIntoIter;

/// The captured outcome of a fallible computation.
///
/// `Try<T, E>` is a closed two-variant sum type: every value is either
/// `Success` or `Failure` for its entire lifetime, and every combinator
/// produces a new value instead of mutating in place.
///
/// - `Success` holds an `Option<T>` payload. An absent payload is a valid
///   success state: `Success(None)` never collapses into a failure.
/// - `Failure` holds the error value by itself; an absent error is not
///   representable.
///
/// The error parameter `E` is the declared failure-signal domain: the only
/// errors a `Try` can ever hold are the ones the wrapped operations produce
/// as `Err` values. Panics are outside that domain and are never captured
/// (see [`Try::attempt`]).
///
/// # Type Parameters
///
/// * `T` - The type of the success payload
/// * `E` - The type of the captured error
///
/// # Examples
///
/// ```rust
/// use tentative::control::Try;
///
/// let success: Try<i32, String> = Try::success(42);
/// let failure: Try<i32, String> = Try::failure("out of range".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Try::success(84));
/// assert_eq!(failure.recover(|error| error.len() as i32), Some(12));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Try<T, E> {
    /// A computation that completed normally, holding its possibly absent payload.
    Success(Option<T>),
    /// A computation that failed, holding the captured error.
    Failure(E),
}

impl<T, E> Try<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success` holding a present payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.value_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(Some(value))
    }

    /// Creates a `Success` from a possibly absent payload.
    ///
    /// `Success(None)` is a success: the variant alone signals that the
    /// computation completed, independent of whether it produced a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success_opt(None);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.value_ref(), None);
    /// ```
    #[inline]
    pub const fn success_opt(value: Option<T>) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` holding the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::failure("division by zero".to_string());
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.error_ref(), Some(&"division by zero".to_string()));
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs a fallible operation and captures its outcome.
    ///
    /// The operation is executed exactly once, eagerly, on the calling
    /// thread. `Ok(value)` becomes `Success`, and `Err(error)` becomes
    /// `Failure` without propagating to the caller.
    ///
    /// Only errors in the declared domain `E` are captured. A panic raised
    /// inside the operation is outside that domain and unwinds through this
    /// call untouched: `attempt` is not a panic barrier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let parsed: Try<i32, std::num::ParseIntError> = Try::attempt(|| "42".parse());
    /// assert_eq!(parsed, Try::success(42));
    ///
    /// let failed: Try<i32, std::num::ParseIntError> = Try::attempt(|| "oops".parse());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn attempt<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match operation() {
            Ok(value) => Self::Success(Some(value)),
            Err(error) => Self::Failure(error),
        }
    }

    /// Runs a fallible operation whose success payload may be absent.
    ///
    /// Like [`Try::attempt`], but `Ok(None)` is captured as `Success(None)`
    /// rather than requiring a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let settings = [("port", "8080")];
    /// let lookup = |key: &str| -> Result<Option<&str>, String> {
    ///     Ok(settings.iter().find(|(k, _)| *k == key).map(|(_, v)| *v))
    /// };
    ///
    /// let missing: Try<&str, String> = Try::attempt_opt(|| lookup("host"));
    /// assert_eq!(missing, Try::success_opt(None));
    /// ```
    #[inline]
    pub fn attempt_opt<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<Option<T>, E>,
    {
        match operation() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// An absent payload does not matter here: `Success(None)` is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert!(outcome.is_success());
    ///
    /// let empty: Try<i32, String> = Try::success_opt(None);
    /// assert!(empty.is_success());
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert!(!failed.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert!(failed.is_failure());
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert!(!outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Try` into an `Option<T>` over its payload, consuming it.
    ///
    /// Returns `Some(value)` only for a `Success` with a present payload;
    /// both `Success(None)` and `Failure` yield `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.value(), Some(42));
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => None,
        }
    }

    /// Converts the `Try` into an `Option<E>` over its error, consuming it.
    ///
    /// Returns `Some(error)` for a `Failure`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.error(), Some("boom".to_string()));
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.error(), None);
    /// ```
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the payload if this is a `Success` holding one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.value_ref(), Some(&42));
    ///
    /// let empty: Try<i32, String> = Try::success_opt(None);
    /// assert_eq!(empty.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(Some(value)) => Some(value),
            Self::Success(None) | Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.error_ref(), Some(&"boom".to_string()));
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.error_ref(), None);
    /// ```
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to a present payload, eagerly.
    ///
    /// `Success(Some(value))` becomes `Success(Some(function(value)))`.
    /// `Success(None)` stays an absent `Success` and `Failure` stays the
    /// same `Failure`; in both cases the function is never invoked.
    ///
    /// The function must not fail; if it panics, the panic propagates.
    /// Use [`Try::map_try`] for transformations that can fail in the
    /// declared error domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(21);
    /// assert_eq!(outcome.map(|x| x * 2), Try::success(42));
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.map(|x| x * 2), Try::failure("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Try<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Try::Success(value.map(function)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a fallible function to a present payload.
    ///
    /// Behaves like a nested [`Try::attempt`]: `Ok` re-wraps as a new
    /// `Success`, and `Err` is captured as a new `Failure`. An absent
    /// payload or an existing `Failure` passes through unchanged without
    /// invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let raw: Try<String, std::num::ParseIntError> = Try::success("42".to_string());
    /// let parsed = raw.map_try(|text| text.parse::<i32>());
    /// assert_eq!(parsed, Try::success(42));
    ///
    /// let raw: Try<String, std::num::ParseIntError> = Try::success("oops".to_string());
    /// assert!(raw.map_try(|text| text.parse::<i32>()).is_failure());
    /// ```
    #[inline]
    pub fn map_try<R, F>(self, function: F) -> Try<R, E>
    where
        F: FnOnce(T) -> Result<R, E>,
    {
        match self {
            Self::Success(Some(value)) => Try::attempt(|| function(value)),
            Self::Success(None) => Try::Success(None),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a `Try`-producing function to a present payload and returns
    /// its result directly.
    ///
    /// This is monadic bind: whatever the function returns is the result,
    /// with no re-wrapping. `Success(None)` and `Failure` short-circuit
    /// without invoking the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// fn half(value: i32) -> Try<i32, String> {
    ///     if value % 2 == 0 {
    ///         Try::success(value / 2)
    ///     } else {
    ///         Try::failure(format!("{} is odd", value))
    ///     }
    /// }
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.flat_map(half), Try::success(21));
    ///
    /// let outcome: Try<i32, String> = Try::success(21);
    /// assert_eq!(outcome.flat_map(half), Try::failure("21 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Try<R, E>
    where
        F: FnOnce(T) -> Try<R, E>,
    {
        match self {
            Self::Success(Some(value)) => function(value),
            Self::Success(None) => Try::Success(None),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a fallible `Try`-producing function to a present payload.
    ///
    /// Like [`Try::flat_map`], but the function itself may fail in the
    /// declared error domain: an `Err` it returns is captured as a new
    /// `Failure` instead of propagating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// fn lookup(key: i32) -> Result<Try<i32, String>, String> {
    ///     if key < 0 {
    ///         Err("negative key".to_string())
    ///     } else {
    ///         Ok(Try::success(key * 10))
    ///     }
    /// }
    ///
    /// let outcome: Try<i32, String> = Try::success(4);
    /// assert_eq!(outcome.flat_map_try(lookup), Try::success(40));
    ///
    /// let outcome: Try<i32, String> = Try::success(-1);
    /// assert_eq!(outcome.flat_map_try(lookup), Try::failure("negative key".to_string()));
    /// ```
    #[inline]
    pub fn flat_map_try<R, F>(self, function: F) -> Try<R, E>
    where
        F: FnOnce(T) -> Result<Try<R, E>, E>,
    {
        match self {
            Self::Success(Some(value)) => match function(value) {
                Ok(outcome) => outcome,
                Err(error) => Try::Failure(error),
            },
            Self::Success(None) => Try::Success(None),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Transforms the error of a `Failure`, leaving a `Success` untouched.
    ///
    /// This re-types the error channel from `E` to `E2` without affecting
    /// the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, i32> = Try::failure(404);
    /// let described: Try<i32, String> = failed.map_failure(|code| format!("status {}", code));
    /// assert_eq!(described, Try::failure("status 404".to_string()));
    ///
    /// let outcome: Try<i32, i32> = Try::success(42);
    /// let described: Try<i32, String> = outcome.map_failure(|code| format!("status {}", code));
    /// assert_eq!(described, Try::success(42));
    /// ```
    #[inline]
    pub fn map_failure<E2, F>(self, function: F) -> Try<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(function(error)),
        }
    }

    // =========================================================================
    // Fallback Operations
    // =========================================================================

    /// Replaces a `Failure` with a `Success` holding the given value.
    ///
    /// A `Success` is returned unchanged; fallbacks only engage on
    /// `Failure`, and the captured error is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.fallback(7), Try::success(7));
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.fallback(7), Try::success(42));
    /// ```
    #[inline]
    pub fn fallback(self, value: T) -> Self {
        match self {
            Self::Success(current) => Self::Success(current),
            Self::Failure(_) => Self::Success(Some(value)),
        }
    }

    /// Replaces a `Failure` with a `Success` computed by the supplier.
    ///
    /// The supplier runs only on `Failure`; a `Success` is returned
    /// unchanged without invoking it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.fallback_with(|| 7), Try::success(7));
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.fallback_with(|| 7), Try::success(42));
    /// ```
    #[inline]
    pub fn fallback_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => Self::Success(Some(supplier())),
        }
    }

    /// Replaces a `Failure` by re-running attempt semantics on a new
    /// operation, re-typing the error domain.
    ///
    /// On `Failure`, the operation runs and its outcome is captured under
    /// the new error parameter `E2`; the original error is discarded. On
    /// `Success`, the payload is preserved and only the error parameter
    /// changes. This is the one combinator that can change the error type
    /// in the middle of a chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("cache miss".to_string());
    /// let reloaded: Try<i32, std::num::ParseIntError> =
    ///     failed.fallback_attempt(|| "7".parse());
    /// assert_eq!(reloaded, Try::success(7));
    ///
    /// let failed: Try<i32, String> = Try::failure("cache miss".to_string());
    /// let reloaded: Try<i32, std::num::ParseIntError> =
    ///     failed.fallback_attempt(|| "oops".parse());
    /// assert!(reloaded.is_failure());
    /// ```
    #[inline]
    pub fn fallback_attempt<E2, F>(self, operation: F) -> Try<T, E2>
    where
        F: FnOnce() -> Result<T, E2>,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(_) => Try::attempt(operation),
        }
    }

    // =========================================================================
    // Recovery and Fold
    // =========================================================================

    /// Collapses the `Try` into a plain payload, turning an error into a
    /// value.
    ///
    /// A `Failure` invokes the function on its error and yields the result;
    /// a `Success` yields its payload unchanged and never invokes the
    /// function. The result is absent only for `Success(None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.recover(|error| error.len() as i32), Some(4));
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.recover(|_| -1), Some(42));
    ///
    /// let empty: Try<i32, String> = Try::success_opt(None);
    /// assert_eq!(empty.recover(|_| -1), None);
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> Option<T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => Some(function(error)),
        }
    }

    /// Eliminates the `Try` by applying one of two functions.
    ///
    /// The failure function receives the error; the success function
    /// receives the possibly absent payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// let text = outcome.fold(|error| error, |value| format!("{:?}", value));
    /// assert_eq!(text, "Some(42)");
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// let text = failed.fold(|error| error, |value| format!("{:?}", value));
    /// assert_eq!(text, "boom");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, failure_function: F, success_function: G) -> U
    where
        F: FnOnce(E) -> U,
        G: FnOnce(Option<T>) -> U,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Converts into a `Result`, surfacing the captured error unchanged.
    ///
    /// This is the identity-preserving way to re-raise: the error value
    /// travels out exactly as it was captured, so `?` propagates the
    /// original cause to downstream handlers.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the captured error if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// fn read_number(text: &str) -> Result<Option<i32>, std::num::ParseIntError> {
    ///     let parsed: Try<i32, std::num::ParseIntError> = Try::attempt(|| text.parse());
    ///     let value = parsed.into_result()?;
    ///     Ok(value)
    /// }
    ///
    /// assert_eq!(read_number("7"), Ok(Some(7)));
    /// assert!(read_number("oops").is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the payload, consuming the `Try`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// assert_eq!(outcome.unwrap_success(), Some(42));
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> Option<T> {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Try::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the error, consuming the `Try`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.unwrap_failure(), "boom".to_string());
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Try::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Sequence Bridge
    // =========================================================================

    /// Returns a lazy iterator over the payload: one element for a present
    /// payload, none otherwise.
    ///
    /// Each call produces a fresh, independent iterator, so iteration is
    /// restartable. `Failure` and `Success(None)` both iterate as empty,
    /// mirroring [`Try::value_ref`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(5);
    /// let collected: Vec<&i32> = outcome.iter().collect();
    /// assert_eq!(collected, vec![&5]);
    ///
    /// // Restartable: a second call yields the element again.
    /// assert_eq!(outcome.iter().count(), 1);
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> TryIterator<'_, T> {
        TryIterator {
            inner: self.value_ref().into_iter(),
        }
    }
}

// =============================================================================
// Iterator Implementation
//
// Both iterator types delegate to the standard library's option iterator,
// which already provides the exact 0-or-1 semantics the payload needs.
// =============================================================================

/// An iterator over the payload of a borrowed [`Try`].
///
/// Created by [`Try::iter`]. Yields exactly one reference for a `Success`
/// with a present payload and nothing otherwise.
#[derive(Clone, Debug)]
pub struct TryIterator<'a, T> {
    inner: OptionIntoIter<&'a T>,
}

impl<'a, T> Iterator for TryIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for TryIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for TryIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for TryIterator<'_, T> {}

/// An owning iterator over the payload of a [`Try`].
///
/// Created by the [`IntoIterator`] impl for [`Try`]. Yields exactly one
/// value for a `Success` with a present payload and nothing otherwise.
#[derive(Clone, Debug)]
pub struct TryIntoIterator<T> {
    inner: OptionIntoIter<T>,
}

impl<T> Iterator for TryIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for TryIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for TryIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for TryIntoIterator<T> {}

impl<T, E> IntoIterator for Try<T, E> {
    type Item = T;
    type IntoIter = TryIntoIterator<T>;

    /// Consumes the `Try` into an iterator over its payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(5);
    /// let collected: Vec<i32> = outcome.into_iter().collect();
    /// assert_eq!(collected, vec![5]);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        TryIntoIterator {
            inner: self.value().into_iter(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Try<T, E> {
    type Item = &'a T;
    type IntoIter = TryIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T, E> {
    /// Converts a `Result` to a `Try`.
    ///
    /// `Ok(value)` becomes `Success` with a present payload, and
    /// `Err(error)` becomes `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Try<i32, String> = ok.into();
    /// assert_eq!(outcome, Try::success(42));
    ///
    /// let err: Result<i32, String> = Err("boom".to_string());
    /// let outcome: Try<i32, String> = err.into();
    /// assert_eq!(outcome, Try::failure("boom".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(Some(value)),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<Option<T>, E> {
    /// Converts a `Try` to a `Result` over its possibly absent payload.
    ///
    /// `Success(payload)` becomes `Ok(payload)`, and `Failure(error)`
    /// becomes `Err(error)` with the original error value intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::control::Try;
    ///
    /// let outcome: Try<i32, String> = Try::success(42);
    /// let result: Result<Option<i32>, String> = outcome.into();
    /// assert_eq!(result, Ok(Some(42)));
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// let result: Result<Option<i32>, String> = failed.into();
    /// assert_eq!(result, Err("boom".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Try<T, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Typeclass Instances
//
// Try is a functor and monad over its present payload. The error channel and
// the absent-payload state are both part of the structure: they pass through
// every operation untouched, so chains stop at the first failure. The
// reference-taking and pairing operations need E: Clone to rebuild the
// failure side, matching the Result instances.
// =============================================================================

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

impl<T, E> TypeConstructor for Try<T, E> {
    type Inner = T;
    type WithType<B> = Try<B, E>;
}

impl<T, E: Clone> Functor for Try<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Try<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(value.as_ref().map(function)),
            Self::Failure(error) => Try::Failure(error.clone()),
        }
    }
}

impl<T, E: Clone> Applicative for Try<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Try<B, E> {
        Try::success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Try<B, E>, function: F) -> Try<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Try::Success(Some(a)), Try::Success(Some(b))) => Try::success(function(a, b)),
            (Try::Failure(error), _) => Try::Failure(error),
            (Try::Success(None), _) => Try::Success(None),
            (_, Try::Failure(error)) => Try::Failure(error),
            (_, Try::Success(None)) => Try::Success(None),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Try<B, E>, third: Try<C, E>, function: F) -> Try<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Try::Success(Some(a)), Try::Success(Some(b)), Try::Success(Some(c))) => {
                Try::success(function(a, b, c))
            }
            (Try::Failure(error), _, _) => Try::Failure(error),
            (Try::Success(None), _, _) => Try::Success(None),
            (_, Try::Failure(error), _) => Try::Failure(error),
            (_, Try::Success(None), _) => Try::Success(None),
            (_, _, Try::Failure(error)) => Try::Failure(error),
            (_, _, Try::Success(None)) => Try::Success(None),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Try<B, E>) -> Try<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Try::Success(Some(function)), Try::Success(Some(b))) => Try::success(function(b)),
            (Try::Failure(error), _) => Try::Failure(error),
            (Try::Success(None), _) => Try::Success(None),
            (_, Try::Failure(error)) => Try::Failure(error),
            (_, Try::Success(None)) => Try::Success(None),
        }
    }
}

impl<T, E: Clone> Monad for Try<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        // Delegate to Try's inherent flat_map
        Try::flat_map(self, function)
    }
}

// =============================================================================
// Thread-safety Assertions
//
// A constructed Try is immutable, so it is freely shareable across threads
// whenever its payload and error are.
// =============================================================================

static_assertions::assert_impl_all!(Try<String, std::io::Error>: Send, Sync);
static_assertions::assert_impl_all!(Try<i32, String>: Send, Sync, Unpin);
