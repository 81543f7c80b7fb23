//! Non-empty list - an immutable sequence with at least one element.
//!
//! `NonEmptyList<T>` keeps its first element apart from the rest, so its
//! length is never zero. It can be built infallibly from a head and a tail, or fallibly from
//! an arbitrary sequence via [`NonEmptyList::create`].
//!
//! # Examples
//!
//! ```rust
//! use funk::collection::NonEmptyList;
//! use funk::non_empty_list;
//!
//! let list = NonEmptyList::create(vec![1, 2, 3]).unwrap();
//! assert_eq!(list.tail(), &[2, 3]);
//!
//! let list = non_empty_list![1, 2, 3, 4];
//! assert_eq!(*list.head(), 1);
//! assert_eq!(list.len(), 4);
//! ```

use std::fmt;
use std::iter;
use std::num::NonZeroUsize;
use std::ops::Index;

use crate::control::Maybe;

/// Reasons a sequence cannot become a [`NonEmptyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NonEmptyError {
    /// No sequence was supplied at all.
    #[error("a non-empty list requires a sequence, but none was supplied")]
    Missing,
    /// The supplied sequence had no elements.
    #[error("a non-empty list must contain at least one element")]
    Empty,
}

/// An immutable sequence guaranteed to hold at least one element.
///
/// The head is stored apart from the tail, so a list without a first element
/// cannot be represented. Equality, ordering and hashing are computed over the
/// full ordered element sequence.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyList<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyList<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a list from a mandatory head and any number of tail elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::collection::NonEmptyList;
    ///
    /// let list = NonEmptyList::new(1, [2, 3, 4]);
    /// assert_eq!(*list.head(), 1);
    /// assert_eq!(list.tail(), &[2, 3, 4]);
    /// ```
    pub fn new<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            head,
            tail: tail.into_iter().collect(),
        }
    }

    /// Creates a single-element list.
    pub const fn singleton(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Creates a list from an arbitrary sequence, consuming it once.
    ///
    /// # Errors
    ///
    /// Returns [`NonEmptyError::Empty`] if `items` yields no element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::collection::{NonEmptyError, NonEmptyList};
    ///
    /// assert_eq!(NonEmptyList::create(Vec::<i32>::new()), Err(NonEmptyError::Empty));
    /// assert_eq!(NonEmptyList::create(1..=3).map(|list| list.len()), Ok(3));
    /// ```
    pub fn create<I>(items: I) -> Result<Self, NonEmptyError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        items
            .next()
            .map(|head| Self::new(head, items))
            .ok_or(NonEmptyError::Empty)
    }

    /// Creates a list from a sequence that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NonEmptyError::Missing`] for `None` and
    /// [`NonEmptyError::Empty`] for an empty sequence.
    pub fn create_from_nullable<I>(items: Option<I>) -> Result<Self, NonEmptyError>
    where
        I: IntoIterator<Item = T>,
    {
        items.map_or(Err(NonEmptyError::Missing), Self::create)
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the first element.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns every element but the first; empty for a single-element list.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Maybe<&T> {
        match index {
            0 => Maybe::Some(&self.head),
            _ => Maybe::from_nullable(self.tail.get(index - 1)),
        }
    }

    /// Returns the number of elements, always at least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Returns the number of elements as a `NonZeroUsize`.
    #[inline]
    pub fn len_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.tail.len())
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> NonEmptyIter<'_, T> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to every element, preserving length and order.
    pub fn map<U, F>(self, mut function: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> U,
    {
        let head = function(self.head);
        NonEmptyList {
            head,
            tail: self.tail.into_iter().map(function).collect(),
        }
    }

    /// Folds the elements left to right, starting from the head.
    ///
    /// Unlike `Iterator::reduce` the result is never absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::collection::NonEmptyList;
    ///
    /// assert_eq!(NonEmptyList::new(1, [2, 3]).reduce(|a, b| a + b), 6);
    /// assert_eq!(NonEmptyList::singleton(9).reduce(|a, b| a + b), 9);
    /// ```
    pub fn reduce<F>(self, function: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.tail.into_iter().fold(self.head, function)
    }

    /// Returns a new list with the elements of `other` after those of `self`.
    pub fn append(self, other: Self) -> Self {
        let mut tail = self.tail;
        tail.reserve(other.len());
        tail.push(other.head);
        tail.extend(other.tail);
        Self {
            head: self.head,
            tail,
        }
    }

    /// Converts into a `Vec` holding every element in order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

/// Borrowing iterator over a [`NonEmptyList`].
pub type NonEmptyIter<'a, T> = iter::Chain<iter::Once<&'a T>, std::slice::Iter<'a, T>>;

/// Owning iterator over a [`NonEmptyList`].
pub type NonEmptyIntoIter<T> = iter::Chain<iter::Once<T>, std::vec::IntoIter<T>>;

impl<T> Index<usize> for NonEmptyList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.head,
            _ => &self.tail[index - 1],
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = NonEmptyError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::create(elements)
    }
}

impl<T> From<NonEmptyList<T>> for Vec<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.into_vec()
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = NonEmptyIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = NonEmptyIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a [`NonEmptyList`](crate::collection::NonEmptyList) from one or more elements.
///
/// An empty invocation does not compile.
///
/// # Examples
///
/// ```rust
/// use funk::non_empty_list;
///
/// let list = non_empty_list!["x", "y", "z"];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! non_empty_list {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::collection::NonEmptyList::new($head, [$($tail),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn singleton_has_empty_tail() {
        let list = NonEmptyList::singleton("only");
        assert_eq!(list.len(), 1);
        assert_eq!(*list.head(), "only");
        assert!(list.tail().is_empty());
        assert_eq!(list.head(), list.last());
    }

    #[rstest]
    fn create_from_nullable_distinguishes_missing_and_empty() {
        assert_eq!(
            NonEmptyList::<i32>::create_from_nullable(None::<Vec<i32>>),
            Err(NonEmptyError::Missing)
        );
        assert_eq!(
            NonEmptyList::<i32>::create_from_nullable(Some(Vec::new())),
            Err(NonEmptyError::Empty)
        );
        assert_eq!(
            NonEmptyList::create_from_nullable(Some(vec![7])),
            Ok(NonEmptyList::singleton(7))
        );
    }

    #[rstest]
    fn create_copies_source() {
        let mut source = vec![1, 2, 3];
        let list = NonEmptyList::create(source.clone()).unwrap();
        source.push(4);
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    #[case(0, Maybe::Some(&100))]
    #[case(2, Maybe::Some(&300))]
    #[case(3, Maybe::None)]
    fn get_is_bounds_checked(#[case] index: usize, #[case] expected: Maybe<&i32>) {
        let list = NonEmptyList::new(100, [200, 300]);
        assert_eq!(list.get(index), expected);
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_bounds_panics() {
        let list = NonEmptyList::singleton(1);
        let _ = list[1];
    }

    #[rstest]
    fn index_reads_head_and_tail() {
        let list = NonEmptyList::new('a', ['b', 'c']);
        assert_eq!((list[0], list[1], list[2]), ('a', 'b', 'c'));
    }

    #[rstest]
    #[case(NonEmptyList::singleton(5), 5)]
    #[case(NonEmptyList::new(5, [1, 2]), 2)]
    fn last_falls_back_to_head(#[case] list: NonEmptyList<i32>, #[case] expected: i32) {
        assert_eq!(*list.last(), expected);
    }

    #[rstest]
    fn reduce_on_singleton_returns_head_without_calling_function() {
        let list = NonEmptyList::singleton(String::from("only"));
        let reduced = list.reduce(|_, _| unreachable!("no pair to combine"));
        assert_eq!(reduced, "only");
    }

    #[rstest]
    fn append_keeps_order_across_heads() {
        let list = NonEmptyList::new(1, [2]).append(NonEmptyList::new(3, [4]));
        assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn len_non_zero_matches_len() {
        let list = NonEmptyList::new('a', ['b', 'c']);
        assert_eq!(list.len_non_zero().get(), 3);
    }

    #[rstest]
    fn try_from_empty_vec_fails() {
        assert_eq!(
            NonEmptyList::try_from(Vec::<u8>::new()),
            Err(NonEmptyError::Empty)
        );
    }

    #[rstest]
    fn debug_formats_as_list() {
        assert_eq!(format!("{:?}", NonEmptyList::new(1, [2])), "[1, 2]");
    }

    #[rstest]
    fn error_messages_differ() {
        assert_ne!(
            NonEmptyError::Missing.to_string(),
            NonEmptyError::Empty.to_string()
        );
    }
}
