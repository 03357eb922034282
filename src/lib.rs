//! # tentative
//!
//! A Try monad for Rust: fallible computations captured as composable
//! Success/Failure values.
//!
//! ## Overview
//!
//! This library turns error handling into value-level composition. Instead
//! of returning early, a fallible operation is captured as a [`control::Try`]
//! value that carries either its payload or its typed error, and further
//! steps chain onto it:
//!
//! - **Try Container**: `Success`/`Failure` outcomes with mapping, chaining,
//!   fallback, and recovery combinators
//! - **Type Classes**: Functor, Applicative, and Monad traits implemented
//!   for `Try`, `Option`, and `Result`
//! - **Sequence Bridge**: lazy 0-or-1-element iterators over a payload
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: The Try container (implies `typeclass`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tentative::prelude::*;
//!
//! let parsed: Try<i32, std::num::ParseIntError> = Try::attempt(|| "21".parse());
//! let outcome = parsed.map(|n| n * 2).fallback(0);
//! assert_eq!(outcome, Try::success(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use tentative::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
