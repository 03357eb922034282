//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that form
//! the foundation of functional programming in Rust:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Monad
//! in a generic way.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//!
//! The standard `Option` and `Result` containers implement every trait in
//! this module, and so does the crate's own `Try` container when the
//! `control` feature is enabled.
//!
//! # Examples
//!
//! ## Using Functor
//!
//! ```rust
//! use tentative::typeclass::Functor;
//!
//! let value: Option<i32> = Some(21);
//! assert_eq!(value.fmap(|n| n * 2), Some(42));
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use tentative::typeclass::Applicative;
//!
//! // Lifting a pure value
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! // Combining two Option values
//! let a = Some(1);
//! let b = Some(2);
//! let sum = a.map2(b, |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```
//!
//! ## Using Monad
//!
//! ```rust
//! use tentative::typeclass::Monad;
//!
//! let halved = Some(42).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(21));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
