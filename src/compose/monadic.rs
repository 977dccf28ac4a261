//! The monadic function wrapper and Kleisli composition.
//!
//! [`Monadic`] wraps a function that returns a monad (a Kleisli arrow) and
//! adds the bind and Kleisli operators:
//!
//! - `m >> k` binds the monad `m` to the arrow `k`
//! - `k << m` is the same bind written right to left
//! - `k1 >> k2` calls `k1` and binds its result to `k2`
//! - `k2 << k1` is the same composition written right to left
//!
//! Operators chain left-associatively, so `m >> k1 >> k2` and
//! `k2 << k1 << m` both compute `(m >> k1) >> k2`.
//!
//! The right-hand side of `>>` may also be a plain closure returning a
//! monad, as in `Identity::new(1) >> |n: i32| Identity::new(n + 1)`.
//! Closures on the right of `<<` must be wrapped with [`monadic`]. A plain
//! value is rejected at compile time:
//!
//! ```rust,compile_fail
//! use monads::compose::monadic;
//! use monads::typeclass::Identity;
//!
//! let arrow = monadic(|n: i32| Identity::new(n));
//! let _ = arrow >> 1;
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monads::compose::monadic;
//! use monads::typeclass::Identity;
//!
//! let add_one = monadic(|n: i32| Identity::new(n + 1));
//! let double = monadic(|n: i32| Identity::new(n * 2));
//!
//! let action = add_one.clone() >> double.clone();
//! assert_eq!(Identity::new(4) >> action, Identity::new(10));
//! assert_eq!(double << add_one << Identity::new(4), Identity::new(10));
//! ```

use std::fmt;
use std::ops::{Mul, Shl, Shr};

use super::Function;
use crate::typeclass::{Identity, Monad, TypeConstructor};

/// A function `A -> M` where `M` is a monad.
pub struct Monadic<A, M> {
    function: Function<A, M>,
}

impl<A, M> Clone for Monadic<A, M> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

impl<A, M> fmt::Debug for Monadic<A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Monadic").finish_non_exhaustive()
    }
}

impl<A: 'static, M: 'static> Monadic<A, M> {
    /// Wraps a closure returning a monad.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> M + 'static,
    {
        Self {
            function: Function::new(function),
        }
    }

    /// Calls the wrapped function.
    #[inline]
    pub fn call(&self, input: A) -> M {
        self.function.call(input)
    }

    /// Borrows the underlying [`Function`].
    #[inline]
    pub const fn as_function(&self) -> &Function<A, M> {
        &self.function
    }

    /// Consumes the wrapper and returns the underlying [`Function`].
    #[inline]
    pub fn into_function(self) -> Function<A, M> {
        self.function
    }

    /// Left-to-right Kleisli composition: calls `self`, then binds the
    /// resulting monad to `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::compose::monadic;
    /// use monads::control::{Just, Maybe, Nothing};
    ///
    /// let half = monadic(|n: i32| if n % 2 == 0 { Just(n / 2) } else { Nothing });
    /// let quarter = half.clone().compose_forward(half);
    /// assert_eq!(quarter.call(12), Just(3));
    /// assert_eq!(quarter.call(6), Nothing);
    /// ```
    #[must_use]
    pub fn compose_forward<B, N>(self, next: Monadic<B, N>) -> Monadic<A, N>
    where
        M: Monad<Inner = B, WithType<N::Inner> = N>,
        B: 'static,
        N: TypeConstructor + 'static,
        N::Inner: Clone + 'static,
    {
        Monadic::new(move |input| {
            let next = next.clone();
            self.call(input)
                .bind::<N::Inner, _>(move |value| next.call(value))
        })
    }

    /// Right-to-left Kleisli composition: the result calls `first`, then
    /// binds its monad to `self`.
    #[must_use]
    pub fn compose_backward<Z, L>(self, first: Monadic<Z, L>) -> Monadic<Z, M>
    where
        Z: 'static,
        L: Monad<Inner = A, WithType<M::Inner> = M>,
        M: TypeConstructor,
        M::Inner: Clone + 'static,
    {
        first.compose_forward(self)
    }
}

/// Wraps a closure returning a monad in a [`Monadic`].
#[inline]
pub fn monadic<A: 'static, M: 'static, F>(function: F) -> Monadic<A, M>
where
    F: Fn(A) -> M + 'static,
{
    Monadic::new(function)
}

// =============================================================================
// Kleisli operators
// =============================================================================

impl<A, B, M, N> Shr<Monadic<B, N>> for Monadic<A, M>
where
    A: 'static,
    B: 'static,
    M: Monad<Inner = B, WithType<N::Inner> = N>,
    N: TypeConstructor + 'static,
    N::Inner: Clone + 'static,
{
    type Output = Monadic<A, N>;

    #[inline]
    fn shr(self, next: Monadic<B, N>) -> Self::Output {
        self.compose_forward(next)
    }
}

impl<Z, A, L, M> Shl<Monadic<Z, L>> for Monadic<A, M>
where
    Z: 'static,
    A: 'static,
    L: Monad<Inner = A, WithType<M::Inner> = M>,
    M: TypeConstructor + 'static,
    M::Inner: Clone + 'static,
{
    type Output = Monadic<Z, M>;

    #[inline]
    fn shl(self, first: Monadic<Z, L>) -> Self::Output {
        self.compose_backward(first)
    }
}

/// `k >> closure` is Kleisli composition with an unwrapped arrow.
impl<A, M, N, F> Shr<F> for Monadic<A, M>
where
    A: 'static,
    M: Monad<WithType<N::Inner> = N>,
    M::Inner: 'static,
    N: TypeConstructor + 'static,
    N::Inner: Clone + 'static,
    F: Fn(M::Inner) -> N + 'static,
{
    type Output = Monadic<A, N>;

    #[inline]
    fn shr(self, next: F) -> Self::Output {
        self.compose_forward::<M::Inner, N>(Monadic::new(next))
    }
}

/// `k * f` feeds the output of the plain function `f` into the arrow `k`.
impl<Z: 'static, A: 'static, M: 'static> Mul<Function<Z, A>> for Monadic<A, M> {
    type Output = Monadic<Z, M>;

    #[inline]
    fn mul(self, inner: Function<Z, A>) -> Self::Output {
        Monadic {
            function: self.function.compose(inner),
        }
    }
}

// =============================================================================
// Bind operators for Identity
// =============================================================================

impl<A: 'static, B: Clone + 'static> Shr<Monadic<A, Identity<B>>> for Identity<A> {
    type Output = Identity<B>;

    #[inline]
    fn shr(self, arrow: Monadic<A, Identity<B>>) -> Self::Output {
        self.bind(move |value| arrow.call(value))
    }
}

impl<A, B, F> Shr<F> for Identity<A>
where
    A: 'static,
    B: Clone + 'static,
    F: FnMut(A) -> Identity<B> + 'static,
{
    type Output = Identity<B>;

    #[inline]
    fn shr(self, function: F) -> Self::Output {
        self.bind(function)
    }
}

impl<A: 'static, B: Clone + 'static> Shl<Identity<A>> for Monadic<A, Identity<B>> {
    type Output = Identity<B>;

    #[inline]
    fn shl(self, monad: Identity<A>) -> Self::Output {
        monad >> self
    }
}
