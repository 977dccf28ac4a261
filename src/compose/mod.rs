//! Function composition.
//!
//! # Overview
//!
//! - [`Function`]: a shareable unary function composed with `*` (after) and
//!   `|` (then)
//! - [`Monadic`]: a function returning a monad, composed with the Kleisli
//!   operators `>>` and `<<`
//! - [`compose!`]: right-to-left composition of any number of functions
//!
//! # Helper Functions
//!
//! - [`identity`]: the identity function, unit of composition
//! - [`compose`](fn@compose): composes two plain closures
//! - [`constant`]: a function that always returns the same value
//!
//! # Examples
//!
//! ```
//! use monads::compose::{Function, function};
//!
//! let add_one = function(|x: i32| x + 1);
//! let double = function(|x: i32| x * 2);
//!
//! // (f * g)(x) = f(g(x))
//! assert_eq!((add_one.clone() * double.clone()).call(5), 11);
//! // (g | f)(x) = f(g(x))
//! assert_eq!((double | add_one).call(5), 11);
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! Kleisli composition does the same for arrows `f: A -> M<B>` and
//! `g: B -> M<C>`, threading the intermediate monad through `bind`:
//!
//! ```text
//! (f >=> g)(x) = f(x) >>= g
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f * (g * h) == (f * g) * h`
//! - **Left Identity**: `Function::identity() * f == f`
//! - **Right Identity**: `f * Function::identity() == f`

mod compose_macro;
mod function;
mod monadic;
mod utils;

pub use function::{Function, function};
pub use monadic::{Monadic, monadic};
pub use utils::{compose, constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
