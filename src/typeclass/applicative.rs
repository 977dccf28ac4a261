//! Applicative type class - lifting values into a context.
//!
//! `Applicative` extends [`Functor`] with `unit` (also known as `pure` or
//! `return`), which lifts a bare value into the container. `unit` is an
//! associated function, so it is invoked on the type rather than on an
//! existing instance:
//!
//! ```rust
//! use monads::typeclass::{Applicative, Identity};
//!
//! let lifted: Identity<i32> = <Identity<()>>::unit(42);
//! assert_eq!(lifted, Identity::new(42));
//! ```
//!
//! # Laws
//!
//! `unit` must be the left and right identity of `bind` (see
//! [`Monad`](super::Monad)) and must commute with `fmap`:
//!
//! ```text
//! Self::unit(a).fmap(f) == Self::unit(f(a))
//! ```

use super::functor::Functor;

/// A type class for functors with a constructor that lifts plain values.
///
/// # Examples
///
/// ```rust
/// use monads::typeclass::{Applicative, Functor, Identity};
///
/// let lifted: Identity<i32> = <Identity<()>>::unit(3);
/// assert_eq!(lifted.fmap(|n| n + 1), <Identity<()>>::unit(4));
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to lift
    ///
    /// # Returns
    ///
    /// The value wrapped in this type constructor
    fn unit<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;
}
