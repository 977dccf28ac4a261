//! Type class traits for monadic programming.
//!
//! This module provides the capability hierarchy every concrete monad in the
//! crate implements, each level strictly extending the previous one:
//!
//! - [`Functor`]: mapping over the payload (`fmap`)
//! - [`Applicative`]: lifting a bare value into the container (`unit`)
//! - [`Monad`]: sequencing dependent computations (`bind`, `join`)
//! - [`MonadPlus`]: an associative `combine` with a neutral `zero`
//!
//! Alongside the hierarchy:
//!
//! - [`Extract`]: taking the payload out of a success variant, with [`ExtractError`]
//!   for failure variants
//! - [`Truthy`]: boolean coercion of values
//! - [`Identity`]: the trivial monad
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so the traits above can speak about "the same container holding `B`".
//!
//! # Examples
//!
//! ```rust
//! use monads::typeclass::{Applicative, Functor, Identity, Monad};
//!
//! let lifted: Identity<i32> = <Identity<()>>::unit(20);
//! let result = lifted
//!     .fmap(|n| n + 1)
//!     .bind(|n| Identity::new(n * 2));
//! assert_eq!(result, Identity::new(42));
//! ```

mod applicative;
mod extract;
mod functor;
mod higher;
mod identity;
mod monad;
mod monad_plus;
mod truthy;

pub use applicative::Applicative;
pub use extract::{Extract, ExtractError};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, Nested, map_by_bind};
pub use monad_plus::MonadPlus;
pub use truthy::Truthy;
