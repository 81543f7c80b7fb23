//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the inner type and lets a trait swap it for
//! another one, which is what `Functor` and `Monad` need to describe
//! `Maybe<A> -> Maybe<B>`.
//!
//! # Example
//!
//! ```rust
//! use funk::control::Maybe;
//! use funk::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = emptied(Maybe::some(42));
//! assert_eq!(absent, Maybe::none());
//! ```

use crate::control::{Either, Maybe, Try};

/// A type with one "hole" that can be refilled with another type.
///
/// For `Maybe<A>`, `Inner = A` and `WithType<B> = Maybe<B>`. Two-parameter
/// types fix every parameter but the right-most one, so for `Either<L, R>`
/// `WithType<B> = Either<L, B>`.
pub trait TypeConstructor {
    /// The type currently in the hole.
    type Inner;

    /// The same constructor with `B` in the hole.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<T> TypeConstructor for Try<T> {
    type Inner = T;
    type WithType<B> = Try<B>;
}
