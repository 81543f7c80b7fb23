//! Plain function composition.
//!
//! Everything here is a thin layer over closures; nothing depends on the
//! container types, but the helpers read naturally inside `map`/`bind`
//! chains.
//!
//! - [`compose!`]: compose functions right to left (`f(g(x))`)
//! - [`pipe!`]: feed a value through functions left to right
//! - [`Compose::compose`]: method form, left to right (`inner` first)
//! - [`identity`], [`constant`], [`flip`]: basic combinators
//!
//! # Examples
//!
//! ```
//! use funk::compose::Compose;
//! use funk::control::Maybe;
//!
//! let add_one = |x: i32| x + 1;
//! let times_two = |x: i32| x * 2;
//!
//! // (x + 1) * 2
//! let pipeline = add_one.compose(times_two);
//! assert_eq!(Maybe::some(4).map(pipeline), Maybe::some(10));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Double flip**: `flip(flip(f)) == f`

mod macros;
mod utils;

pub use utils::{Compose, constant, flip, identity};

pub use crate::compose;
pub use crate::pipe;
