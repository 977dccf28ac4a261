//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the payload type a container is currently applied
//! to (`Inner`) and the same container re-applied to another payload
//! (`WithType<B>`). Every other trait in this crate is built on it.
//!
//! # Example
//!
//! ```rust
//! use monads::typeclass::{Identity, TypeConstructor};
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let rewrapped: Identity<String> = rewrap(Identity::new(42));
//! assert_eq!(rewrapped, Identity::new(String::new()));
//! ```

/// A trait representing a type constructor applied to one payload type.
///
/// # Associated Types
///
/// - `Inner`: the payload type this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
///
/// Multi-parameter containers fix every parameter but the last one:
/// `Either<L, R>` has `Inner = R` and `WithType<B> = Either<L, B>`.
pub trait TypeConstructor {
    /// The payload type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different payload type `B`.
    ///
    /// The `TypeConstructor<Inner = B>` constraint keeps the result a valid
    /// constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
