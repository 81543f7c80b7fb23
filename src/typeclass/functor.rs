//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value inside a container without
//! changing the container's shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funk::control::{Either, Maybe};
//! use funk::typeclass::Functor;
//!
//! assert_eq!(Maybe::some(5).fmap(|n| n.to_string()), Maybe::some("5".to_string()));
//!
//! let left: Either<&str, i32> = Either::Left("error");
//! assert_eq!(left.fmap(|n| n + 1), Either::Left("error"));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Either, Maybe, Try};

/// A type class for containers that can have a function mapped over their value.
///
/// See module-level documentation for laws.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the inner value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the inner value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the inner value with `value`, keeping the shape.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<T> Functor for Try<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Try<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_fmap_ref_keeps_original() {
        let original = Maybe::some("hello".to_string());
        let length = original.fmap_ref(String::len);
        assert_eq!(length, Maybe::some(5));
        assert_eq!(original, Maybe::some("hello".to_string()));
    }

    #[rstest]
    fn maybe_replace_none() {
        assert_eq!(Maybe::<i32>::none().replace("replaced"), Maybe::none());
    }

    #[rstest]
    fn either_void_right() {
        let value: Either<String, i32> = Either::Right(5);
        assert_eq!(value.void(), Either::Right(()));
    }

    #[rstest]
    fn either_fmap_ref_clones_left() {
        let value: Either<String, i32> = Either::Left("error".to_string());
        assert_eq!(value.fmap_ref(|n| n * 2), Either::Left("error".to_string()));
    }

    #[rstest]
    fn try_fmap_ref_success() {
        let value = Try::success(vec![1, 2, 3]);
        assert_eq!(value.fmap_ref(Vec::len), Try::success(3));
    }

    #[rstest]
    fn try_fmap_ref_failure_shares_error() {
        let value: Try<i32> = Try::failure("broken");
        let mapped = value.fmap_ref(|n| n + 1);
        assert_eq!(mapped.failure_ref(), value.failure_ref());
    }
}
