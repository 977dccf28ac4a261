//! The `Either` monad - computations that succeed with `Right` or fail with `Left`.
//!
//! Unlike `Nothing`, a `Left` carries a payload, typically the reason for the
//! failure. `bind` feeds the payload of a `Right` to the next step and passes
//! a `Left` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use monads::compose::monadic;
//! use monads::control::Either;
//!
//! let saving = 100;
//! let spend = |cost: i32| {
//!     if cost > saving {
//!         Either::Left("I am broke")
//!     } else {
//!         Either::Right(saving - cost)
//!     }
//! };
//! assert_eq!(spend(90), Either::Right(10));
//! assert_eq!(spend(120), Either::Left("I am broke"));
//!
//! let increment = monadic(|n: i32| Either::<&str, i32>::Right(n + 1));
//! assert_eq!(Either::Right(0) >> increment.clone() >> increment, Either::Right(2));
//! ```
//!
//! # Ordering
//!
//! Every `Left` is less than every `Right`; values of the same variant
//! compare by payload. Comparing with anything that is not an `Either` of the
//! same types does not compile:
//!
//! ```rust,compile_fail
//! use monads::control::Either;
//!
//! let right: Either<i32, i32> = Either::Right(1);
//! let _ = right < 1;
//! ```
//!
//! `Either` itself has no constructor other than its two variants, so there
//! is no way to build a value that is neither.

use std::fmt;
use std::ops::{Shl, Shr};

use crate::compose::Monadic;
use crate::typeclass::{
    Applicative, Extract, ExtractError, Functor, Monad, Nested, Truthy, TypeConstructor,
    map_by_bind,
};

/// A value that is either a failure `Left(L)` or a success `Right(R)`.
///
/// The variant order makes the derived ordering put every `Left` first.
///
/// # Examples
///
/// ```rust
/// use monads::control::Either;
///
/// let failure: Either<i32, i32> = Either::Left(100);
/// let success: Either<i32, i32> = Either::Right(0);
/// assert!(failure < success);
/// assert!(Either::<i32, i32>::Right(-2) < Either::Right(-1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the payload of either variant.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping and case analysis
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// `fmap` covers the right side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// This is case analysis as a function; see also
    /// [`adapters::either`](crate::adapters::either) for a reusable version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> Truthy for Either<L, R> {
    /// `Right` is truthy, `Left` is falsy.
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_right()
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: 'static, R: 'static> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B + 'static,
        B: Clone + 'static,
    {
        map_by_bind(self, function)
    }
}

impl<L: 'static, R: 'static> Applicative for Either<L, R> {
    /// Lifts into `Right`.
    #[inline]
    fn unit<B>(value: B) -> Either<L, B>
    where
        B: Clone + 'static,
    {
        Either::Right(value)
    }
}

impl<L: 'static, R: 'static> Monad for Either<L, R> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Either<L, B>
    where
        F: FnMut(R) -> Either<L, B> + 'static,
        B: Clone + 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Nested<Either<L, R>> for Either<L, R> {
    #[inline]
    fn into_outer(self) -> Either<L, R> {
        self
    }
}

impl<L, R> Extract for Either<L, R> {
    fn extract(self) -> Result<R, ExtractError<Self>> {
        match self {
            Self::Right(value) => Ok(value),
            left @ Self::Left(_) => Err(ExtractError::new(left)),
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<L, A, B> Shr<Monadic<A, Either<L, B>>> for Either<L, A>
where
    L: 'static,
    A: 'static,
    B: Clone + 'static,
{
    type Output = Either<L, B>;

    #[inline]
    fn shr(self, arrow: Monadic<A, Either<L, B>>) -> Self::Output {
        self.bind(move |value| arrow.call(value))
    }
}

impl<L, A, B, F> Shr<F> for Either<L, A>
where
    L: 'static,
    A: 'static,
    B: Clone + 'static,
    F: FnMut(A) -> Either<L, B> + 'static,
{
    type Output = Either<L, B>;

    #[inline]
    fn shr(self, function: F) -> Self::Output {
        self.bind(function)
    }
}

impl<L, A, B> Shl<Either<L, A>> for Monadic<A, Either<L, B>>
where
    L: 'static,
    A: 'static,
    B: Clone + 'static,
{
    type Output = Either<L, B>;

    #[inline]
    fn shl(self, monad: Either<L, A>) -> Self::Output {
        monad >> self
    }
}
