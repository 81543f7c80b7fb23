//! Maybe type - a value that is either present or absent.
//!
//! This module provides the `Maybe<T>` type, which represents a value that is
//! either `Some(T)` or `None`. It mirrors `std::option::Option` but keeps the
//! elimination surface explicit: a payload can only be read through
//! [`Maybe::fold`], [`Maybe::if_none`] or a conversion that acknowledges the
//! absent case.
//!
//! # Examples
//!
//! ```rust
//! use funk::control::Maybe;
//!
//! let doubled = Maybe::some(10).map(|x| x * 2).fold(|x| x, || -1);
//! assert_eq!(doubled, 20);
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.map(|x| x * 2).if_none(-1), -1);
//! ```
//!
//! # Absence boundary
//!
//! There is no null inside a Rust value, so `Maybe::some` cannot receive an
//! "absent" payload. Absence enters only through [`Maybe::from_nullable`]
//! (or `From<Option<T>>`), which maps `None` to `Maybe::None`.

use std::fmt;

use super::Either;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `Maybe<T>` is an immutable value type: every transformation returns a new
/// instance and equality is structural.
///
/// # Examples
///
/// ```rust
/// use funk::control::{Either, Maybe};
///
/// let present = Maybe::some("hello");
/// let either: Either<&str, &str> = present.to_either(|| "missing");
/// assert_eq!(either, Either::Right("hello"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The absent variant.
    None,
    /// The present variant, always carrying a payload.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Maybe::Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Maybe;
    ///
    /// assert!(Maybe::some(42).is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts a standard `Option` into a `Maybe`.
    ///
    /// This is the single boundary where an absent value from outside the
    /// crate becomes `Maybe::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Maybe;
    ///
    /// let missing: Option<i32> = None;
    /// assert!(Maybe::from_nullable(missing).is_none());
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::some(1));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the payload if present.
    ///
    /// `None` is returned unchanged and `function` is never invoked.
    ///
    /// # Laws
    ///
    /// ```text
    /// m.map(|x| x) == m
    /// m.map(f).map(g) == m.map(|x| g(f(x)))
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).map(|x| x + 1), Maybe::some(5));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x + 1), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Sequences a computation that may itself produce an absent value.
    ///
    /// If `None`, short-circuits without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Maybe;
    ///
    /// let parse = |s: &str| Maybe::from_nullable(s.parse::<i32>().ok());
    /// assert_eq!(Maybe::some("42").bind(parse), Maybe::some(42));
    /// assert_eq!(Maybe::some("nope").bind(parse), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the payload only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Maybe` by invoking exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|n| format!("got {n}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::some(3)), "got 3");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Returns the payload, or `default` when absent.
    #[inline]
    pub fn if_none(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the payload, or the value produced by `provider` when absent.
    ///
    /// `provider` is never invoked when a value is present.
    #[inline]
    pub fn if_none_with<F>(self, provider: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => provider(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an `Either`, building the `Left` lazily.
    ///
    /// `Some(v)` becomes `Right(v)`. `None` becomes `Left(left_supplier())`;
    /// the supplier runs exactly once in that case and never otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::{Either, Maybe};
    ///
    /// let missing: Maybe<i32> = Maybe::none();
    /// assert_eq!(missing.to_either(|| "absent"), Either::Left("absent"));
    /// ```
    #[inline]
    pub fn to_either<L, F>(self, left_supplier: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left_supplier()),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

/// Extension trait turning a standard `Option` into a [`Maybe`].
///
/// # Examples
///
/// ```rust
/// use funk::control::{Maybe, ToMaybe};
///
/// let value: Option<bool> = Some(true);
/// assert!(value.to_maybe().is_some());
/// ```
pub trait ToMaybe<T> {
    /// Converts `self` into a `Maybe`, mapping absence to `Maybe::None`.
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> ToMaybe<T> for Option<T> {
    #[inline]
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from_nullable(self)
    }
}
