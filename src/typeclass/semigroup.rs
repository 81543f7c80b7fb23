//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! A [`NonEmptyList`] of semigroup values can always be collapsed, because
//! there is at least one element to start from; see [`combine_non_empty`].
//!
//! # Examples
//!
//! ```rust
//! use funk::collection::NonEmptyList;
//! use funk::typeclass::Semigroup;
//!
//! let joined = NonEmptyList::new(1, [2]).combine(NonEmptyList::singleton(3));
//! assert_eq!(joined, NonEmptyList::new(1, [2, 3]));
//! ```

use crate::collection::NonEmptyList;
use crate::control::Maybe;

/// A type class for types with an associative `combine` operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every element of `iterator`, or returns `None` when it is empty.
    fn reduce_all<I>(iterator: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        Maybe::from_nullable(
            iterator
                .into_iter()
                .reduce(|accumulator, element| accumulator.combine(element)),
        )
    }
}

/// Collapses a non-empty list of semigroup values into one.
///
/// # Examples
///
/// ```rust
/// use funk::collection::NonEmptyList;
/// use funk::typeclass::combine_non_empty;
///
/// let words = NonEmptyList::new("a".to_string(), ["b".to_string(), "c".to_string()]);
/// assert_eq!(combine_non_empty(words), "abc");
/// ```
pub fn combine_non_empty<S: Semigroup>(list: NonEmptyList<S>) -> S {
    list.reduce(S::combine)
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Semigroup for NonEmptyList<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.append(other)
    }
}

/// Present values are combined; an absent side is ignored.
impl<T: Semigroup> Semigroup for Maybe<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(first), Self::Some(second)) => Self::Some(first.combine(second)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}
