//! Concrete monads.
//!
//! - [`Maybe`]: a value that may be absent (`Just` / `Nothing`)
//! - [`Either`]: a value of one of two types, right-biased (`Left` / `Right`)
//! - [`List`]: nondeterministic results backed by a [`LazySequence`]
//! - [`LazySequence`]: a memoizing, shareable view over an iterator
//!
//! # Examples
//!
//! ## Short-circuiting
//!
//! ```rust
//! use monads::compose::monadic;
//! use monads::control::{Just, Nothing};
//!
//! let half = monadic(|n: i32| if n % 2 == 0 { Just(n / 2) } else { Nothing });
//! assert_eq!(Just(8) >> half.clone() >> half.clone(), Just(2));
//! assert_eq!(Just(6) >> half.clone() >> half, Nothing);
//! ```
//!
//! ## Nondeterminism
//!
//! ```rust
//! use monads::compose::monadic;
//! use monads::list;
//!
//! let neighbours = monadic(|n: i32| list![n - 1, n + 1]);
//! assert_eq!(list![10] >> neighbours.clone() >> neighbours, list![8, 10, 10, 12]);
//! ```

mod either;
mod lazy_sequence;
mod list;
mod maybe;

pub use either::Either;
pub use lazy_sequence::{Iter, LazySequence, LazySequenceError};
pub use list::List;
pub use maybe::{Just, Maybe, Nothing};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::list;
