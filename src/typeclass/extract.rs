//! Scoped extraction of a monad's payload.
//!
//! Success variants (`Identity`, `Just`, `Right`) hand their payload to the
//! caller; failure variants (`Nothing`, `Left`) refuse with an
//! [`ExtractError`] that carries the offending value. [`Extract::scoped`] runs
//! a closure with the payload, the Rust counterpart of entering the value as
//! a scoped resource. Panics raised inside the closure are never caught.

use thiserror::Error;

use super::higher::TypeConstructor;

/// Error returned when extracting from a failure variant.
///
/// # Examples
///
/// ```rust
/// use monads::control::{Maybe, Nothing};
/// use monads::typeclass::Extract;
///
/// let missing: Maybe<i32> = Nothing;
/// let error = missing.extract().unwrap_err();
/// assert_eq!(error.to_string(), "cannot extract value from Nothing");
/// assert_eq!(error.into_monad(), Nothing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot extract value from {monad:?}")]
pub struct ExtractError<M> {
    monad: M,
}

impl<M> ExtractError<M> {
    /// Creates an error for the given failure value.
    #[inline]
    pub const fn new(monad: M) -> Self {
        Self { monad }
    }

    /// Returns the value that could not be extracted from.
    #[inline]
    pub const fn monad(&self) -> &M {
        &self.monad
    }

    /// Consumes the error and returns the value that could not be extracted from.
    #[inline]
    pub fn into_monad(self) -> M {
        self.monad
    }
}

/// Monads whose payload can be taken out for the duration of a scope.
pub trait Extract: TypeConstructor + Sized {
    /// Returns the payload of a success variant.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] holding `self` when `self` is a failure variant.
    fn extract(self) -> Result<Self::Inner, ExtractError<Self>>;

    /// Runs `body` with the payload of a success variant.
    ///
    /// `body` is not invoked for a failure variant.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] holding `self` when `self` is a failure variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Either, Just};
    /// use monads::typeclass::Extract;
    ///
    /// assert_eq!(Just(20).scoped(|n| n + 1), Ok(21));
    ///
    /// let failed: Either<&str, i32> = Either::Left("no");
    /// assert!(failed.scoped(|n| n + 1).is_err());
    /// ```
    #[inline]
    fn scoped<R, F>(self, body: F) -> Result<R, ExtractError<Self>>
    where
        F: FnOnce(Self::Inner) -> R,
    {
        self.extract().map(body)
    }
}
