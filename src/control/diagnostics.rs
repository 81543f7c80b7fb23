//! Diagnostic hooks for `Try` capture points.
//!
//! With the `tracing` feature these emit `debug` events; without it they are
//! empty and inlined away.

use super::Failure;

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn captured(operation: &'static str, failure: &Failure) {
    tracing::debug!(operation, error = %failure, "captured mapper failure");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) const fn captured(_operation: &'static str, _failure: &Failure) {}

#[cfg(all(feature = "tracing", feature = "async"))]
#[inline]
pub(crate) fn cancelled(operation: &'static str) {
    tracing::debug!(operation, "propagating cancellation to caller");
}

#[cfg(all(not(feature = "tracing"), feature = "async"))]
#[inline]
pub(crate) const fn cancelled(_operation: &'static str) {}
