//! Sequence-level helpers over the core containers.
//!
//! Every function here is built from the public operations of [`Maybe`],
//! [`Either`] and [`NonEmptyList`]. The filters are lazy and preserve source
//! order.
//!
//! # Examples
//!
//! ```rust
//! use funk::collection::{unwrap, unwrap_left};
//! use funk::control::{Either, Maybe};
//!
//! let present: Vec<i32> = unwrap(vec![Maybe::some(1), Maybe::none(), Maybe::some(3)]).collect();
//! assert_eq!(present, vec![1, 3]);
//!
//! let lefts: Vec<i32> = unwrap_left(vec![
//!     Either::<i32, &str>::Left(4),
//!     Either::Left(2),
//!     Either::Right("test"),
//! ])
//! .collect();
//! assert_eq!(lefts, vec![4, 2]);
//! ```

use super::NonEmptyList;
use crate::control::{Either, Maybe};

/// Yields the payloads of the present entries, dropping absent ones.
pub fn unwrap<I, T>(items: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    items.into_iter().filter_map(Maybe::into_option)
}

/// Yields the payloads of the `Left` entries, dropping `Right` ones.
pub fn unwrap_left<I, L, R>(items: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    items
        .into_iter()
        .filter_map(|either| either.left().into_option())
}

/// Yields the payloads of the `Right` entries, dropping `Left` ones.
pub fn unwrap_right<I, L, R>(items: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    items
        .into_iter()
        .filter_map(|either| either.right().into_option())
}

/// Converts a possibly absent, possibly empty sequence into a `Maybe<NonEmptyList>`.
///
/// `None` and empty sequences become `Maybe::None`. The source is consumed
/// exactly once.
///
/// # Examples
///
/// ```rust
/// use funk::collection::to_non_empty_option;
///
/// assert!(to_non_empty_option(None::<Vec<i32>>).is_none());
/// assert!(to_non_empty_option(Some(Vec::<i32>::new())).is_none());
///
/// let single = to_non_empty_option(Some(vec![1]));
/// assert_eq!(single.map(|list| list.len()).if_none(0), 1);
/// ```
pub fn to_non_empty_option<I, T>(items: Option<I>) -> Maybe<NonEmptyList<T>>
where
    I: IntoIterator<Item = T>,
{
    Maybe::from_nullable(items).bind(|items| Maybe::from_nullable(NonEmptyList::create(items).ok()))
}

/// Extension trait converting a possibly absent sequence into a `Maybe<NonEmptyList>`.
///
/// Implemented for `Option<I>` only, so the method form always agrees with
/// [`to_non_empty_option`]. A sequence that is known to be present goes
/// through [`NonEmptyList::create`] instead.
///
/// # Examples
///
/// ```rust
/// use funk::collection::ToNonEmptyOption;
///
/// assert!(None::<Vec<u8>>.to_non_empty_option().is_none());
/// assert!(Some(Vec::<u8>::new()).to_non_empty_option().is_none());
/// assert!(Some(vec![1, 2, 3]).to_non_empty_option().is_some());
/// ```
pub trait ToNonEmptyOption<T> {
    /// Returns `Maybe::None` for an absent or empty sequence, otherwise the list.
    fn to_non_empty_option(self) -> Maybe<NonEmptyList<T>>;
}

impl<I, T> ToNonEmptyOption<T> for Option<I>
where
    I: IntoIterator<Item = T>,
{
    fn to_non_empty_option(self) -> Maybe<NonEmptyList<T>> {
        to_non_empty_option(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn unwrap_is_lazy() {
        let pulled = Cell::new(0);
        let source = (0..10).map(|n| {
            pulled.set(pulled.get() + 1);
            if n % 2 == 0 { Maybe::some(n) } else { Maybe::none() }
        });
        let mut present = unwrap(source);
        assert_eq!(pulled.get(), 0);
        assert_eq!(present.next(), Some(0));
        assert_eq!(pulled.get(), 1);
    }

    #[rstest]
    fn unwrap_right_preserves_order() {
        let items = vec![
            Either::<&str, i32>::Right(9),
            Either::Left("test"),
            Either::Right(3),
        ];
        assert_eq!(unwrap_right(items).collect::<Vec<_>>(), vec![9, 3]);
    }

    #[rstest]
    fn to_non_empty_option_consumes_source_once() {
        let pulled = Cell::new(0);
        let source = (1..=3).map(|n| {
            pulled.set(pulled.get() + 1);
            n
        });
        let list = to_non_empty_option(Some(source));
        assert_eq!(pulled.get(), 3);
        assert_eq!(list, Maybe::some(NonEmptyList::new(1, [2, 3])));
    }
}
