//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! A `Monad` is one of the most powerful abstractions in functional programming,
//! often described as a "programmable semicolon" because it controls how
//! computations are sequenced. For fallible containers the sequencing is
//! short-circuiting: the first failing step ends the chain.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the function:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tentative::typeclass::Monad;
//!
//! // Using flat_map to chain Option computations
//! let x = Some(5);
//! let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(y, Some(10));
//!
//! // Chain of computations with potential failure
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
/// This enables powerful control flow patterns within the monad context.
///
/// # Laws
///
/// ## Left Identity Law
///
/// Applying `pure` then `flat_map` with a function equals applying the function directly:
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// Binding with `pure` returns the original monad:
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// Binding operations can be reassociated:
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use tentative::typeclass::Monad;
///
/// let x = Some(5);
/// let y = x.flat_map(|n| Some(n * 2));
/// assert_eq!(y, Some(10));
///
/// // Chaining with potential failure
/// let z = Some(10).flat_map(|n| {
///     if n > 0 {
///         Some(n / 2)
///     } else {
///         None
///     }
/// });
/// assert_eq!(z, Some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class. It takes a
    /// function that returns a new monad and "flattens" the nested result.
    ///
    /// In Haskell, this is `>>=` (bind). In Rust's standard library, this is
    /// similar to `and_then` on `Option` and `Result`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// A new monad with the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// let y = x.flat_map(|n| Some(n * 2));
    /// assert_eq!(y, Some(10));
    ///
    /// let z = Some(5);
    /// let w = z.flat_map(|n| if n > 10 { Some(n) } else { None });
    /// assert_eq!(w, None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// This method is provided for familiarity with Rust's `Option::and_then`
    /// and `Result::and_then` methods.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// A new monad with the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// let y = x.and_then(|n| Some(n * 2));
    /// assert_eq!(y, Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// This evaluates `self`, ignores its value, and returns `next`.
    /// In Haskell, this is the `>>` operator.
    ///
    /// Note: If `self` represents a failure (e.g., `None` or `Err`),
    /// the failure propagates and `next` is not returned.
    ///
    /// # Arguments
    ///
    /// * `next` - The monad to return after evaluating `self`
    ///
    /// # Returns
    ///
    /// The `next` monad if `self` succeeds, otherwise propagates failure
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// let y = x.then(Some("hello"));
    /// assert_eq!(y, Some("hello"));
    ///
    /// let z: Option<i32> = None;
    /// let w = z.then(Some("hello"));
    /// assert_eq!(w, None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        // Delegate to Option's built-in and_then
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        // Delegate to Result's built-in and_then
        Self::and_then(self, function)
    }
}
