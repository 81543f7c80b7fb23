//! # funk
//!
//! Immutable algebraic containers for modelling absence, alternatives and
//! failure as plain values instead of sentinels or panics.
//!
//! ## Overview
//!
//! - **Control**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`Try`](control::Try)
//! - **Collections**: [`NonEmptyList`](collection::NonEmptyList) and
//!   order-preserving helpers over sequences of `Maybe`/`Either`
//! - **Type Classes**: Functor, Applicative, Monad, Bifunctor, Semigroup
//! - **Function Composition**: `compose!`, `pipe!`, `Compose`
//!
//! Every container is an enum or an owned sequence: construction happens
//! once, nothing is mutated afterwards, and all values are `Send + Sync`
//! whenever their payloads are.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `async`: `Try::map_async`
//! - `tracing`: debug events when `Try` captures a failure or propagates a cancellation
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funk::prelude::*;
//!
//! let shouted = Either::<i32, &str>::Right("test")
//!     .map(str::to_uppercase)
//!     .fold(|_| "L".to_string(), |r| r);
//! assert_eq!(shouted, "TEST");
//!
//! let lefts: Vec<i32> = unwrap_left(vec![
//!     Either::<i32, &str>::Left(4),
//!     Either::Left(2),
//!     Either::Right("test"),
//! ])
//! .collect();
//! assert_eq!(lefts, vec![4, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// ```rust
/// use funk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod collection;
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;
