//! Collections built on the core containers.
//!
//! - [`NonEmptyList`]: an immutable sequence with at least one element
//! - [`unwrap`], [`unwrap_left`], [`unwrap_right`]: order-preserving filters
//!   over sequences of [`Maybe`](crate::control::Maybe) and
//!   [`Either`](crate::control::Either)
//! - [`to_non_empty_option`] / [`ToNonEmptyOption`]: fold a sequence into a
//!   `Maybe<NonEmptyList<T>>`

mod extensions;
mod non_empty_list;

pub use extensions::{ToNonEmptyOption, to_non_empty_option, unwrap, unwrap_left, unwrap_right};
pub use non_empty_list::{NonEmptyError, NonEmptyIntoIter, NonEmptyIter, NonEmptyList};

static_assertions::assert_impl_all!(NonEmptyList<String>: Send, Sync);
