//! Either type - a value that is exactly one of two alternatives.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. `Either` is right-biased:
//! [`Either::map`] and [`Either::bind`] act on `Right` (conventionally the
//! success branch) and pass `Left` through untouched.
//!
//! There is no implicit conversion from a bare value into an `Either`. When
//! `L` and `R` are the same type such a conversion would be ambiguous, so the
//! branch is always tagged explicitly with `Either::Left` or `Either::Right`.
//!
//! # Examples
//!
//! ```rust
//! use funk::control::Either;
//!
//! let shouted = Either::<i32, &str>::Right("test")
//!     .map(str::to_uppercase)
//!     .fold(|_| "L".to_string(), |r| r);
//! assert_eq!(shouted, "TEST");
//!
//! // Reduce converges both branches to the Left type
//! let length = Either::<usize, &str>::Right("four").reduce(str::len);
//! assert_eq!(length, 4);
//! ```

use std::fmt;

use super::Maybe;

/// A value that is exactly one of two alternatives.
///
/// By convention:
/// - `Left` represents an error or the alternative outcome
/// - `Right` represents success
///
/// Equality, ordering and hashing are structural over (branch, payload).
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use funk::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let failure: Either<String, i32> = Either::Left("error".to_string());
/// assert_eq!(failure.clone().map(|x| x * 2), failure);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the alternative.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into a `Maybe<L>`, discarding a `Right` payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Maybe::some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Converts into a `Maybe<R>`, discarding a `Left` payload.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Borrows the left payload if present.
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Borrows the right payload if present.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the `Right` payload; a `Left` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(10);
    /// assert_eq!(left.map(|s| s.to_uppercase()), Either::Left(10));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the `Left` payload; a `Right` passes through untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever branch is populated, changing both type parameters.
    ///
    /// # Laws
    ///
    /// ```text
    /// e.bimap(|l| l, |r| r) == e
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Either;
    ///
    /// let right: Either<i32, f64> = Either::Right(4.0);
    /// assert_eq!(right.bimap(|l| l.to_string(), |r| r as i64), Either::Right(4));
    /// ```
    #[inline]
    pub fn bimap<LT, RT, F, G>(self, left_function: F, right_function: G) -> Either<LT, RT>
    where
        F: FnOnce(L) -> LT,
        G: FnOnce(R) -> RT,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Sequences a computation on the `Right` payload.
    ///
    /// A `Left` short-circuits without invoking `function`.
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either` by invoking exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"));
    /// assert_eq!(result, "String: hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Collapses to the `Left` type.
    ///
    /// A `Left` payload is returned as-is; a `Right` payload is converted with
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Either;
    ///
    /// let left: Either<i32, Vec<i32>> = Either::Left(-10);
    /// assert_eq!(left.reduce(|r| r.iter().sum()), -10);
    ///
    /// let right: Either<i32, Vec<i32>> = Either::Right(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(right.reduce(|r| r.iter().sum()), 15);
    /// ```
    #[inline]
    pub fn reduce<F>(self, function: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => function(value),
        }
    }

    /// Exchanges the branches without touching either payload.
    ///
    /// `e.swap().swap() == e` for every `e`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the `Right` payload, or `fallback` for a `Left`.
    #[inline]
    pub fn if_left(self, fallback: R) -> R {
        match self {
            Self::Left(_) => fallback,
            Self::Right(value) => value,
        }
    }

    /// Returns the `Right` payload, or the value produced by `provider` for a `Left`.
    ///
    /// `provider` is only invoked for a `Left`.
    #[inline]
    pub fn if_left_with<F>(self, provider: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => provider(),
            Self::Right(value) => value,
        }
    }

    /// Returns the `Left` payload, or `fallback` for a `Right`.
    #[inline]
    pub fn if_right(self, fallback: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => fallback,
        }
    }

    /// Returns the `Left` payload, or the value produced by `provider` for a `Right`.
    #[inline]
    pub fn if_right_with<F>(self, provider: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => provider(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Result`, mapping `Right` to `Ok` and `Left` to `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
