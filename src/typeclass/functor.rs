//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the payload of a container and returns a
//! container of the same kind holding the result.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monads::typeclass::{Functor, Identity};
//!
//! let wrapped = Identity::new(5);
//! assert_eq!(wrapped.fmap(|n| n.to_string()), Identity::new("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that can have a function mapped over their payload.
///
/// Mapping functions are `FnMut + 'static`: single-valued containers call them
/// at most once, while the lazy `List` stores them and calls them once per
/// element as elements are demanded.
///
/// There is no abstract fallback for `fmap`; a type that does not implement it
/// is simply not a `Functor`, so calling it cannot compile:
///
/// ```rust,compile_fail
/// use monads::typeclass::Functor;
///
/// struct Opaque(i32);
/// let _ = Opaque(1).fmap(|n: i32| n + 1);
/// ```
///
/// # Examples
///
/// ```rust
/// use monads::typeclass::{Functor, Identity};
///
/// let x = Identity::new(5);
/// let y: Identity<i32> = x.fmap(|n| n * 2);
/// assert_eq!(y, Identity::new(10));
/// ```
pub trait Functor: TypeConstructor + 'static {
    /// Applies a function to the payload of the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the payload
    ///
    /// # Returns
    ///
    /// A functor of the same kind holding the transformed payload(s)
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> B + 'static,
        B: Clone + 'static;

    /// Replaces the payload with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(5).replace("replaced"), Identity::new("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the payload, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(5).void(), Identity::new(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
