//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funk::control::Maybe;
//! use funk::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from_nullable(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! ```

use super::applicative::Applicative;
use crate::control::{Either, Maybe, Try};

/// A type class for applicatives whose next step can depend on the previous value.
pub trait Monad: Applicative {
    /// Feeds the inner value to `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the inner value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind(function)
    }
}

impl<T> Monad for Try<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(T) -> Try<B>,
    {
        self.bind(function)
    }
}
