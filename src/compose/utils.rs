//! Combinators for composing plain functions.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`Compose`]: chains two unary functions, left to right

/// Returns its argument unchanged.
///
/// # Examples
///
/// ```
/// use funk::compose::identity;
/// use funk::control::Maybe;
///
/// assert_eq!(Maybe::some(3).map(identity), Maybe::some(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Method-style composition for unary functions.
///
/// `inner.compose(outer)` runs `inner` first and feeds its output to
/// `outer`, i.e. `|x| outer(inner(x))`.
///
/// # Examples
///
/// ```
/// use funk::compose::Compose;
///
/// let add_one = |a: i32| a + 1;
/// let times_two = |a: i32| a * 2;
/// let composed = add_one.compose(times_two);
/// assert_eq!(composed(3), 8);
/// ```
pub trait Compose<A, B>: Fn(A) -> B + Sized {
    /// Returns `|x| outer(self(x))`.
    fn compose<C, G>(self, outer: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |input| outer(self(input))
    }
}

impl<A, B, F> Compose<A, B> for F where F: Fn(A) -> B {}
