//! Error types produced by [`Try`](super::Try).
//!
//! - [`Failure`]: a captured, type-erased error stored in `Try::Failure`
//! - [`Panicked`]: the error captured when a mapper panics
//! - [`Cancelled`]: the cancellation signal that `Try::map_async` re-raises
//!   instead of capturing

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Boxed error type accepted at every capture point.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A captured error, as stored in `Try::Failure`.
///
/// `Failure` is cheap to clone: clones share the same underlying error.
/// Two failures compare equal only when they share that error, which keeps
/// `Try::failure(e).map(f) == Try::failure(e)` meaningful without requiring
/// `PartialEq` on arbitrary error types.
///
/// # Examples
///
/// ```rust
/// use funk::control::{Failure, Panicked};
///
/// let failure = Failure::new(Panicked::new("boom"));
/// assert!(failure.is::<Panicked>());
/// assert_eq!(failure.to_string(), "mapper panicked: boom");
/// assert_eq!(failure.clone(), failure);
/// ```
#[derive(Clone, thiserror::Error)]
#[error(transparent)]
pub struct Failure {
    error: Arc<dyn Error + Send + Sync + 'static>,
}

impl Failure {
    /// Captures `error`.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Captures an already boxed error.
    ///
    /// A boxed `Failure` is unwrapped rather than nested.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<Self>() {
            Ok(failure) => *failure,
            Err(error) => Self {
                error: Arc::from(error),
            },
        }
    }

    /// Returns `true` if the captured error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.error.is::<E>()
    }

    /// Borrows the captured error as `E` if it has that type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    /// Borrows the captured error.
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    /// Returns the display message of the captured error.
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Returns `true` if both failures share the same captured error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.error, &other.error)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Failure").field(&self.error).finish()
    }
}

/// The error captured when a mapper panics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mapper panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Creates a `Panicked` error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a panic payload.
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything else
    /// is reported as an opaque payload.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "opaque panic payload".to_string());
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Signals that the caller aborted an operation.
///
/// Unlike every other error, a `Cancelled` returned by a `Try::map_async`
/// mapper is never captured into a `Failure`: it is handed back to the caller
/// so that cancellation keeps propagating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("operation was cancelled")]
pub struct Cancelled;

impl Cancelled {
    /// Returns `Err(Cancelled)` when `cancelled` is set.
    ///
    /// Convenient inside mappers that poll a caller-owned cancellation flag.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if `cancelled` is `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funk::control::Cancelled;
    ///
    /// assert_eq!(Cancelled::check(false), Ok(()));
    /// assert_eq!(Cancelled::check(true), Err(Cancelled));
    /// ```
    pub const fn check(cancelled: bool) -> Result<(), Self> {
        if cancelled { Err(Self) } else { Ok(()) }
    }
}
