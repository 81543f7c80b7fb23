//! Type class traits over the crate's containers.
//!
//! - [`Functor`]: mapping over a contained value
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Bifunctor`]: mapping over both sides of an [`Either`](crate::control::Either)
//! - [`Semigroup`]: associative combination, including
//!   [`NonEmptyList`](crate::collection::NonEmptyList) concatenation
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same container with a different inner
//! type", which is all `Functor` and `Monad` need.
//!
//! | Type | `Functor` / `Applicative` / `Monad` | `Bifunctor` | `Semigroup` |
//! |---|---|---|---|
//! | `Maybe<A>` | yes | | when `A: Semigroup` |
//! | `Either<L, R>` | right-biased, `L: Clone` | yes | |
//! | `Try<T>` | yes, panics captured | | |
//! | `NonEmptyList<T>` | | | yes |
//!
//! # Examples
//!
//! ```rust
//! use funk::control::{Either, Maybe};
//! use funk::typeclass::{Functor, Monad};
//!
//! let value = Maybe::some(3).fmap(|x| x + 1).flat_map(|x| Maybe::some(x * 10));
//! assert_eq!(value, Maybe::some(40));
//!
//! let stopped: Either<&str, i32> = Either::Left("stop");
//! assert_eq!(stopped.flat_map(|x| Either::Right(x + 1)), Either::Left("stop"));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::{Semigroup, combine_non_empty};
