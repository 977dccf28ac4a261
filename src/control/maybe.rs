//! The `Maybe` monad - computations that may produce nothing.
//!
//! A [`Maybe<A>`] is either `Just(value)` or `Nothing`. `bind` feeds the
//! payload of a `Just` to the next step and short-circuits on `Nothing`
//! without calling it.
//!
//! # Examples
//!
//! ```rust
//! use monads::compose::monadic;
//! use monads::control::{Just, Maybe, Nothing};
//!
//! let saving = 100;
//! let spend = |cost: i32| if cost > saving { Nothing } else { Just(saving - cost) };
//! assert_eq!(spend(90), Just(10));
//! assert_eq!(spend(120), Nothing);
//!
//! let increment = monadic(|n: i32| Just(n + 1));
//! assert_eq!(Just(0) >> increment.clone() >> increment, Just(2));
//! ```
//!
//! # Ordering
//!
//! `Nothing` is less than every `Just`; two `Just`s compare by payload.
//!
//! ```rust
//! use monads::control::{Just, Maybe, Nothing};
//!
//! let nothing: Maybe<i32> = Nothing;
//! assert!(nothing < Just(i32::MIN));
//! assert!(Just(1) < Just(2));
//! ```

use std::fmt;
use std::ops::{Add, Shl, Shr};

use crate::compose::Monadic;
use crate::typeclass::{
    Applicative, Extract, ExtractError, Functor, Monad, MonadPlus, Nested, Truthy,
    TypeConstructor, map_by_bind,
};

/// A value that may be absent.
///
/// The variant order makes the derived ordering put `Nothing` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    #[default]
    Nothing,
    /// A present value.
    Just(A),
}

pub use Maybe::{Just, Nothing};

impl<A> Maybe<A> {
    /// Wraps `value` in `Just` when it is truthy, otherwise returns `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Just, Maybe, Nothing};
    ///
    /// assert_eq!(Maybe::from_value(3), Just(3));
    /// assert_eq!(Maybe::from_value(0), Nothing);
    /// assert_eq!(Maybe::from_value(String::new()), Nothing);
    /// ```
    pub fn from_value(value: A) -> Self
    where
        A: Truthy,
    {
        if value.is_truthy() { Just(value) } else { Nothing }
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Returns the payload, or `default` for `Nothing`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    /// Iterates over the payload: one item for `Just`, none for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Just, Maybe, Nothing};
    ///
    /// assert_eq!(Just(5).iter().copied().sum::<i32>(), 5);
    /// assert_eq!(Maybe::<i32>::Nothing.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        Option::<&A>::from(self.as_ref()).into_iter()
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.map_or(Nothing, Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<A>::from(self).into_iter()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(value) => write!(formatter, "Just({value})"),
            Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<A> Truthy for Maybe<A> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_just()
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A: 'static> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(A) -> B + 'static,
        B: Clone + 'static,
    {
        map_by_bind(self, function)
    }
}

impl<A: 'static> Applicative for Maybe<A> {
    #[inline]
    fn unit<B>(value: B) -> Maybe<B>
    where
        B: Clone + 'static,
    {
        Just(value)
    }
}

impl<A: 'static> Monad for Maybe<A> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B> + 'static,
        B: Clone + 'static,
    {
        match self {
            Just(value) => function(value),
            Nothing => Nothing,
        }
    }
}

impl<A> Nested<Maybe<A>> for Maybe<A> {
    #[inline]
    fn into_outer(self) -> Maybe<A> {
        self
    }
}

impl<A: 'static> MonadPlus for Maybe<A> {
    #[inline]
    fn zero() -> Self {
        Nothing
    }

    /// Left-biased choice: `self` when it is a `Just`, otherwise `other`.
    #[inline]
    fn combine(self, other: Self) -> Self {
        match self {
            Just(_) => self,
            Nothing => other,
        }
    }
}

impl<A> Extract for Maybe<A> {
    fn extract(self) -> Result<A, ExtractError<Self>> {
        match self {
            Just(value) => Ok(value),
            Nothing => Err(ExtractError::new(Nothing)),
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<A: 'static, B: Clone + 'static> Shr<Monadic<A, Maybe<B>>> for Maybe<A> {
    type Output = Maybe<B>;

    #[inline]
    fn shr(self, arrow: Monadic<A, Maybe<B>>) -> Self::Output {
        self.bind(move |value| arrow.call(value))
    }
}

impl<A, B, F> Shr<F> for Maybe<A>
where
    A: 'static,
    B: Clone + 'static,
    F: FnMut(A) -> Maybe<B> + 'static,
{
    type Output = Maybe<B>;

    #[inline]
    fn shr(self, function: F) -> Self::Output {
        self.bind(function)
    }
}

impl<A: 'static, B: Clone + 'static> Shl<Maybe<A>> for Monadic<A, Maybe<B>> {
    type Output = Maybe<B>;

    #[inline]
    fn shl(self, monad: Maybe<A>) -> Self::Output {
        monad >> self
    }
}

impl<A: 'static> Add for Maybe<A> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}
