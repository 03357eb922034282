//! Control structures for fallible computation.
//!
//! This module provides control structures that turn error handling into
//! value-level composition:
//!
//! - [`Try`]: The captured outcome of a fallible computation
//! - [`TryIterator`], [`TryIntoIterator`]: Lazy 0-or-1-element views of a payload
//!
//! # Examples
//!
//! ## Capturing and Chaining
//!
//! ```rust
//! use tentative::control::Try;
//!
//! let outcome: Try<i32, std::num::ParseIntError> = Try::attempt(|| "21".parse());
//! let doubled = outcome.map(|value| value * 2);
//! assert_eq!(doubled, Try::success(42));
//! ```
//!
//! ## Recovering from Failure
//!
//! ```rust
//! use tentative::control::Try;
//!
//! let failed: Try<u16, String> = Try::failure("config missing".to_string());
//! let port = failed.recover(|_| 8080);
//! assert_eq!(port, Some(8080));
//! ```

mod attempt;

pub use attempt::{Try, TryIntoIterator, TryIterator};
