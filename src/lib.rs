//! # monads
//!
//! Functor, Applicative, Monad and `MonadPlus` for a small family of
//! concrete monads, with Kleisli composition written as operators.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   [`MonadPlus`](typeclass::MonadPlus) and scoped extraction through
//!   [`Extract`](typeclass::Extract)
//! - **Function Composition**: [`Function`](compose::Function) (`*`, `|`) and
//!   [`Monadic`](compose::Monadic) (`>>`, `<<`)
//! - **Concrete Monads**: `Identity`, `Maybe`, `Either` and a lazily realized
//!   `List` backed by [`LazySequence`](control::LazySequence)
//! - **Adapters**: lifting `Result`-returning functions into monadic ones
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and `Identity`
//! - `compose`: `Function`, `Monadic` and `compose!`
//! - `control`: `Maybe`, `Either`, `List`, `LazySequence`
//! - `adapters`: `maybe`, `failsafe`, `producer` and friends
//! - `serde`: `Serialize`/`Deserialize` for the concrete monads
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monads::prelude::*;
//!
//! let half = monadic(|n: i32| if n % 2 == 0 { Just(n / 2) } else { Nothing });
//! let quarter = half.clone() >> half;
//!
//! assert_eq!(quarter.call(12), Just(3));
//! assert_eq!(Just(6) >> quarter, Nothing);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monads::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "adapters")]
    pub use crate::adapters::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "adapters")]
pub mod adapters;
