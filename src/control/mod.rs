//! Core algebraic containers.
//!
//! This module provides the immutable value types the rest of the crate is
//! built on:
//!
//! - [`Maybe`]: a value that is present (`Some`) or absent (`None`)
//! - [`Either`]: exactly one of two alternatives, right-biased
//! - [`Try`]: a success value or a captured [`Failure`]
//!
//! All of them are plain enums. Eliminating one requires handling every
//! branch, either with a `match` or through `fold`.
//!
//! # Examples
//!
//! ## Maybe
//!
//! ```rust
//! use funk::control::Maybe;
//!
//! let result = Maybe::some(10).map(|x| x * 2).fold(|v| v, || -1);
//! assert_eq!(result, 20);
//! ```
//!
//! ## Either
//!
//! ```rust
//! use funk::control::Either;
//!
//! let value: Either<String, i32> = Either::Right(5);
//! assert_eq!(value.swap().swap(), Either::Right(5));
//! ```
//!
//! ## Try
//!
//! ```rust
//! use funk::control::Try;
//!
//! let parsed = Try::success("7").try_map(|s| s.parse::<u8>());
//! assert_eq!(parsed, Try::success(7));
//! ```

mod attempt;
mod diagnostics;
mod either;
mod error;
mod maybe;

pub use attempt::Try;
pub use either::Either;
pub use error::{BoxError, Cancelled, Failure, Panicked};
pub use maybe::{Maybe, ToMaybe};

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Try<String>: Send, Sync);
static_assertions::assert_impl_all!(Failure: Send, Sync, Clone);
