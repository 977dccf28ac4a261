//! Adapters between plain Rust functions and the monads in
//! [`control`](crate::control).
//!
//! # Overview
//!
//! - [`maybe`], [`failsafe`], [`producer`]: lift a function returning
//!   `Result` into one returning `Maybe`, `Either` or `List`
//! - [`either`]: case analysis over `Either` as a [`Function`](crate::compose::Function)
//! - [`tryout`]: the first truthy result of several functions
//! - [`first`], [`first_where`]: lazy first-match search
//!
//! # Examples
//!
//! ```rust
//! use monads::adapters::{first, maybe};
//! use monads::control::{Just, Nothing};
//!
//! let parse = maybe(|text: &str| text.parse::<u8>()).into_monadic();
//! let parsed = ["x", "300", "7", "8"].map(|text| parse.call(text));
//! assert_eq!(first(parsed, Nothing), Just(7));
//! ```

mod actions;
mod safe;

pub use actions::{either, first, first_where, tryout};
pub use safe::{FailsafeCall, Failure, Producer, SafeCall, failsafe, maybe, producer};
