//! Try type - the result of a computation that may fail.
//!
//! `Try<T>` is either `Success(T)` or `Failure(Failure)`. Mapping never lets
//! an error escape: a mapper that panics, or a fallible mapper that returns
//! `Err`, turns the result into a `Failure` value.
//!
//! The asynchronous [`Try::map_async`] follows the same rule with one
//! exception: a [`Cancelled`] error raised by the mapper is returned to the
//! caller as `Err(Cancelled)` instead of being captured, so cancellation keeps
//! propagating upstream.
//!
//! # Examples
//!
//! ```rust
//! use funk::control::{Panicked, Try};
//!
//! let doubled = Try::success(5).map(|x| x * 2);
//! assert_eq!(doubled, Try::success(10));
//!
//! let exploded = Try::success(10).map(|x: i32| -> i32 { panic!("mapping failed: {x}") });
//! assert!(exploded.fold(|_| false, |failure| failure.is::<Panicked>()));
//! ```

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::diagnostics;
use super::error::{BoxError, Failure, Panicked};
use super::Maybe;

#[cfg(feature = "async")]
use super::error::Cancelled;
#[cfg(feature = "async")]
use futures::FutureExt;
#[cfg(feature = "async")]
use std::future::Future;

/// A success value or a captured failure.
///
/// A `Failure` always owns a [`Failure`] error and a `Success` never does.
/// Equality compares success payloads structurally and failures by identity
/// of the captured error.
///
/// # Examples
///
/// ```rust
/// use funk::control::Try;
///
/// let parsed: Try<i32> = Try::success("42").try_map(|s| s.parse::<i32>());
/// assert_eq!(parsed.or_default(0), 42);
///
/// let broken: Try<i32> = Try::success("forty-two").try_map(|s| s.parse::<i32>());
/// assert_eq!(broken.or_default(0), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with the captured error.
    Failure(Failure),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Try`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed `Try` capturing `error`.
    ///
    /// Any error type, `String` or `&str` is accepted. Passing an existing
    /// [`Failure`] reuses it rather than wrapping it again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Try;
    ///
    /// let failed: Try<i32> = Try::failure("test failure");
    /// assert_eq!(failed.fold(|_| String::new(), |f| f.message()), "test failure");
    /// ```
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Failure(Failure::from_boxed(error.into()))
    }

    /// Runs `computation`, capturing a panic as a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Try;
    ///
    /// assert_eq!(Try::from_fn(|| 1 + 1), Try::success(2));
    /// assert!(Try::<i32>::from_fn(|| panic!("boom")).is_failure());
    /// ```
    pub fn from_fn<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(capture_panic("from_fn", &*payload)),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success payload, producing a `Try<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Try<&T> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(failure) => Try::Failure(failure.clone()),
        }
    }

    /// Borrows the captured failure, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Maybe<&Failure> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(failure) => Maybe::Some(failure),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Try` by invoking exactly one of the two functions.
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Failure) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Returns the success payload, or `default` for a failure.
    #[inline]
    pub fn or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or the value produced by `provider` for a failure.
    ///
    /// `provider` is only invoked for a failure.
    #[inline]
    pub fn or_default_with<F>(self, provider: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => provider(),
        }
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if this is a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success payload.
    ///
    /// If `function` panics, the panic is captured as a [`Panicked`] failure.
    /// A `Failure` is carried forward unchanged and `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Try;
    ///
    /// let failed: Try<i32> = Try::failure("original");
    /// assert_eq!(failed.clone().map(|x| x * 2), failed);
    /// ```
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(move || function(value))) {
                Ok(mapped) => Try::Success(mapped),
                Err(payload) => Try::Failure(capture_panic("map", &*payload)),
            },
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Applies a fallible `function` to the success payload.
    ///
    /// An `Err` returned by `function` becomes the failure; a panic is
    /// captured as in [`Try::map`].
    pub fn try_map<U, E, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        match self {
            Self::Success(value) => match catch_unwind(AssertUnwindSafe(move || function(value))) {
                Ok(Ok(mapped)) => Try::Success(mapped),
                Ok(Err(error)) => Try::Failure(capture_error("try_map", error.into())),
                Err(payload) => Try::Failure(capture_panic("try_map", &*payload)),
            },
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Sequences a computation that produces its own `Try`.
    ///
    /// A panic inside `function` is captured as in [`Try::map`].
    pub fn bind<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => catch_unwind(AssertUnwindSafe(move || function(value)))
                .unwrap_or_else(|payload| Try::Failure(capture_panic("bind", &*payload))),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Asynchronously applies a fallible `function` to the success payload.
    ///
    /// The only suspension point is the await of the future returned by
    /// `function`, which runs to completion before a result is produced.
    ///
    /// - `Ok(value)` from the mapper becomes `Ok(Try::Success(value))`.
    /// - Any error other than [`Cancelled`], or a panic, becomes
    ///   `Ok(Try::Failure(..))`.
    /// - A [`Cancelled`] error (directly or wrapped in a [`Failure`]) is
    ///   returned as `Err(Cancelled)` and never captured.
    ///
    /// A `Failure` input resolves immediately to `Ok` with the same failure.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] when the mapper reports cancellation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::{Cancelled, Try};
    ///
    /// # futures::executor::block_on(async {
    /// let squared = Try::success(4)
    ///     .map_async(|x| async move { Ok::<_, Cancelled>(x * x) })
    ///     .await;
    /// assert_eq!(squared, Ok(Try::success(16)));
    ///
    /// let aborted = Try::success(4)
    ///     .map_async(|_| async { Cancelled::check(true).map(|()| 0) })
    ///     .await;
    /// assert_eq!(aborted, Err(Cancelled));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn map_async<U, E, F, Fut>(self, function: F) -> Result<Try<U>, Cancelled>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        E: Into<BoxError>,
    {
        let value = match self {
            Self::Success(value) => value,
            Self::Failure(failure) => return Ok(Try::Failure(failure)),
        };

        let outcome = AssertUnwindSafe(async move { function(value).await })
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(mapped)) => Ok(Try::Success(mapped)),
            Ok(Err(error)) => classify(error.into()).map(|failure| {
                diagnostics::captured("map_async", &failure);
                Try::Failure(failure)
            }),
            Err(payload) => Ok(Try::Failure(capture_panic("map_async", &*payload))),
        }
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<BoxError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

fn capture_error(operation: &'static str, error: BoxError) -> Failure {
    let failure = Failure::from_boxed(error);
    diagnostics::captured(operation, &failure);
    failure
}

fn capture_panic(operation: &'static str, payload: &(dyn Any + Send)) -> Failure {
    let failure = Failure::new(Panicked::from_payload(payload));
    diagnostics::captured(operation, &failure);
    failure
}

/// Splits a mapper error into a capturable failure or a cancellation.
#[cfg(feature = "async")]
fn classify(error: BoxError) -> Result<Failure, Cancelled> {
    let failure = match error.downcast::<Cancelled>() {
        Ok(_) => None,
        Err(error) => Some(Failure::from_boxed(error)),
    };
    match failure {
        Some(failure) if !failure.is::<Cancelled>() => Ok(failure),
        _ => {
            diagnostics::cancelled("map_async");
            Err(Cancelled)
        }
    }
}
