//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! `bind`: the payload of one computation decides which computation runs next.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a value and binding a function is the same as applying the function:
//!
//! ```text
//! Self::unit(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `unit` returns the original monad:
//!
//! ```text
//! m.bind(Self::unit) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(|x| k(x).bind(h)) == m.bind(k).bind(h)
//! ```
//!
//! # Deriving operations
//!
//! `bind`, `fmap` and `join` are inter-definable:
//!
//! ```text
//! bind(f) == fmap(f).join()
//! fmap(f) == bind(|x| unit(f(x)))
//! join()  == bind(|x| x)
//! ```
//!
//! `join` is a default method derived from `bind`, and [`map_by_bind`] is the
//! shared `fmap` for types that only want to write `bind`. Types with a
//! cheaper `fmap` and `join` (the lazy `List`) override those and derive
//! `bind` from them instead.
//!
//! # Examples
//!
//! ```rust
//! use monads::typeclass::{Identity, Monad};
//!
//! let result = Identity::new(5)
//!     .bind(|n| Identity::new(n * 2))
//!     .bind(|n| Identity::new(n + 1));
//! assert_eq!(result, Identity::new(11));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use monads::typeclass::{Identity, Monad};
///
/// let nested = Identity::new(Identity::new(3));
/// let flat: Identity<i32> = Monad::join(nested);
/// assert_eq!(flat, Identity::new(3));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the payload and flattens the result.
    ///
    /// Failure variants (`Nothing`, `Left`, the empty `List`) short-circuit
    /// and never invoke `function`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the payload and returns a new monad
    ///
    /// # Returns
    ///
    /// The monad produced by `function`, or the short-circuited failure
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B> + 'static,
        B: Clone + 'static;

    /// Removes one level of nesting: `M<M<B>>` becomes `M<B>`.
    ///
    /// Defaults to `bind` with the identity function. Only a payload of the
    /// same monad kind can be flattened; see [`Nested`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::{Identity, Monad};
    ///
    /// let flat: Identity<&str> = Monad::join(Identity::new(Identity::new("x")));
    /// assert_eq!(flat.into_inner(), "x");
    /// ```
    ///
    /// A payload that is not itself a monad does not type-check:
    ///
    /// ```rust,compile_fail
    /// use monads::typeclass::{Identity, Monad};
    ///
    /// let flat: Identity<i32> = Monad::join(Identity::new(5));
    /// ```
    #[inline]
    fn join<B>(self) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: Nested<Self::WithType<B>>,
        B: Clone + 'static,
    {
        self.bind::<B, _>(<Self::Inner as Nested<Self::WithType<B>>>::into_outer)
    }

    /// Sequences two computations, discarding the payload of the first.
    ///
    /// A failure in `self` propagates and `next` is dropped. A `List` repeats
    /// `next` once per element of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::{Identity, Monad};
    ///
    /// assert_eq!(Identity::new(1).then(Identity::new("next")), Identity::new("next"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: Clone + 'static,
    {
        self.bind(move |_| next.clone())
    }
}

/// A payload that is itself a value of the monad `M`.
///
/// Each monad implements this for itself only, so [`Monad::join`] accepts
/// `Maybe<Maybe<A>>` but not `Maybe<Option<A>>` or `Identity<i32>`.
pub trait Nested<M> {
    /// Returns the payload as the outer monad.
    fn into_outer(self) -> M;
}

/// Implements `fmap` in terms of `bind` and `unit`.
///
/// Monads whose `bind` is the primitive operation use this as their
/// `Functor::fmap` body.
///
/// # Examples
///
/// ```rust
/// use monads::typeclass::{Identity, map_by_bind};
///
/// assert_eq!(map_by_bind(Identity::new(4), |n| n * n), Identity::new(16));
/// ```
#[inline]
pub fn map_by_bind<M, B, F>(monad: M, mut function: F) -> M::WithType<B>
where
    M: Monad,
    F: FnMut(M::Inner) -> B + 'static,
    B: Clone + 'static,
{
    monad.bind(move |value| M::unit(function(value)))
}
