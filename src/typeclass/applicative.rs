//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine multiple applicative values using a function (`map2`, `map3`)
//! - Create tuples of applicative values (`product`)
//!
//! `Applicative` is more powerful than `Functor` because it allows combining
//! multiple independent computations within the same context. For fallible
//! containers the combination is left-biased: the first failing computation
//! decides the outcome.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Applying the identity function wrapped in `pure` should return the original value:
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! Applying a pure function to a pure value equals pure of the function applied to the value:
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! The order of application can be swapped with appropriate wrapping:
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! Function composition inside contexts works correctly:
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tentative::typeclass::Applicative;
//!
//! // Lifting a pure value into Option context
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! // Combining two Option values
//! let a = Some(1);
//! let b = Some(2);
//! let c = a.map2(b, |x, y| x + y);
//! assert_eq!(c, Some(3));
//!
//! // Creating a tuple of values
//! let x = Some(1);
//! let y = Some("hello");
//! assert_eq!(x.product(y), Some((1, "hello")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// `Applicative` extends `Functor` with the ability to:
///
/// - Lift any value into the context using `pure`
/// - Combine multiple values in the context using `map2`
///
/// # Laws
///
/// ## Identity Law
///
/// Applying identity through pure returns the original value:
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// Pure preserves function application:
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// ## Interchange Law
///
/// Application order can be swapped:
///
/// ```text
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
///
/// ## Composition Law
///
/// Composition is preserved:
///
/// ```text
/// pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
/// ```
///
/// # Examples
///
/// ```rust
/// use tentative::typeclass::Applicative;
///
/// // Pure lifts a value into the context
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// // map2 combines two values
/// let a = Some(3);
/// let b = Some(4);
/// let sum = a.map2(b, |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// This is the fundamental operation that allows creating an applicative
    /// value from any regular value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to lift into the context
    ///
    /// # Returns
    ///
    /// The value wrapped in the applicative context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// This is the primary way to combine multiple independent computations
    /// within an applicative context. If either computation fails (in the
    /// sense appropriate to the specific applicative), the result fails,
    /// with the leftmost failure taking precedence.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    ///
    /// # Returns
    ///
    /// An applicative containing the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some(2);
    /// let sum = a.map2(b, |x, y| x + y);
    /// assert_eq!(sum, Some(3));
    ///
    /// let a = Some(1);
    /// let b: Option<i32> = None;
    /// let sum = a.map2(b, |x, y| x + y);
    /// assert_eq!(sum, None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// This is a convenience method built on top of `map2`.
    ///
    /// # Arguments
    ///
    /// * `second` - The second applicative value
    /// * `third` - The third applicative value
    /// * `function` - A function that takes all three inner values
    ///
    /// # Returns
    ///
    /// An applicative containing the result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some(2);
    /// let c = Some(3);
    /// let sum = a.map3(b, c, |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    ///
    /// # Returns
    ///
    /// An applicative containing a tuple of both values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some("hello");
    /// assert_eq!(a.product(b), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    ///
    /// Both applicatives are evaluated, but only the left value is returned.
    /// This is useful when the right computation has an effect that must be
    /// accounted for, but its value is not needed.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative (evaluated but its value is discarded)
    ///
    /// # Returns
    ///
    /// An applicative containing the left value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some(2);
    /// assert_eq!(a.product_left(b), Some(1));
    ///
    /// let a = Some(1);
    /// let b: Option<i32> = None;
    /// assert_eq!(a.product_left(b), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    ///
    /// Both applicatives are evaluated, but only the right value is returned.
    /// This is useful when the left computation has an effect that must be
    /// accounted for, but its value is not needed.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative (its value is returned)
    ///
    /// # Returns
    ///
    /// An applicative containing the right value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Applicative;
    ///
    /// let a = Some(1);
    /// let b = Some(2);
    /// assert_eq!(a.product_right(b), Some(2));
    ///
    /// let a: Option<i32> = None;
    /// let b = Some(2);
    /// assert_eq!(a.product_right(b), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type. It applies
    /// the contained function to the value in `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - An applicative containing the value to apply the function to
    ///
    /// # Returns
    ///
    /// An applicative containing the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tentative::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// let value = Some(5);
    /// let result = function.apply(value);
    /// assert_eq!(result, Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) => Err(error),
            (_, Err(error), _) => Err(error),
            (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        }
    }
}
