//! Applicative type class - lifting values and combining independent contexts.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the context, and `map2`, which combines two independent values in
//! the same context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(x).map2(fb, |_, b| b) == fb
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funk::control::Maybe;
//! use funk::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::some(42));
//!
//! let sum = Maybe::some(1).map2(Maybe::some(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::some(3));
//! ```

use super::functor::Functor;
use crate::control::{Either, Maybe, Try};

/// A type class for functors that can lift values and combine two contexts.
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the same context with `function`.
    ///
    /// The result is absent or failed when either input is; the first
    /// absent or failed input wins.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the same context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |first, second| (first, second))
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(first), Maybe::Some(second)) => Maybe::Some(function(first, second)),
            _ => Maybe::None,
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<T> Applicative for Try<T> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(first), Try::Success(second)) => {
                Try::success(first).map(|first| function(first, second))
            }
            (Self::Failure(failure), _) | (Self::Success(_), Try::Failure(failure)) => {
                Try::Failure(failure)
            }
        }
    }
}
