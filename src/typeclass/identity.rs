//! Identity wrapper type - the identity monad.
//!
//! `Identity` wraps a value and adds no behavior: `bind` simply applies the
//! function to the payload. It has no failure states, which makes it the
//! reference model for the type class laws.

use std::fmt;

use super::{
    Applicative, Extract, ExtractError, Functor, Monad, Nested, TypeConstructor, map_by_bind,
};

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use monads::typeclass::{Identity, Monad};
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.bind(|n| Identity::new(n + 1)).into_inner(), 43);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A: 'static> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnMut(A) -> B + 'static,
        B: Clone + 'static,
    {
        map_by_bind(self, function)
    }
}

impl<A: 'static> Applicative for Identity<A> {
    #[inline]
    fn unit<B>(value: B) -> Identity<B>
    where
        B: Clone + 'static,
    {
        Identity(value)
    }
}

impl<A: 'static> Monad for Identity<A> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B> + 'static,
        B: Clone + 'static,
    {
        function(self.0)
    }
}

impl<A> Nested<Identity<A>> for Identity<A> {
    #[inline]
    fn into_outer(self) -> Identity<A> {
        self
    }
}

impl<A> Extract for Identity<A> {
    /// Always succeeds.
    #[inline]
    fn extract(self) -> Result<A, ExtractError<Self>> {
        Ok(self.0)
    }
}
