//! The composable function wrapper.
//!
//! [`Function`] wraps a unary closure behind a shared pointer so it can be
//! cloned cheaply and combined with operators:
//!
//! - `f * g` is `f` after `g`: `(f * g).call(x) == f.call(g.call(x))`
//! - `g | f` is `g` then `f`, the pipe-style spelling of the same composition
//!
//! The right-hand side of `|` may also be a plain closure. For `*` both
//! operands must be `Function`s: the input type of a bare closure on the
//! right cannot be named by the impl, so promote it with [`function`] or
//! `Function::from`. Anything that is not a function is rejected at compile
//! time:
//!
//! ```rust,compile_fail
//! use monads::compose::function;
//!
//! let add_one = function(|n: i32| n + 1);
//! let _ = add_one * 1;
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f * (g * h) == (f * g) * h`
//! - **Left Identity**: `Function::identity() * f == f`
//! - **Right Identity**: `f * Function::identity() == f`
//!
//! # Examples
//!
//! ```rust
//! use monads::compose::{Function, function};
//!
//! let parse = function(|text: &'static str| text.parse::<i32>().unwrap_or_default());
//! let add_one = function(|n: i32| n + 1);
//! let show = function(|n: i32| n.to_string());
//!
//! let forward = show.clone() * add_one.clone() * parse.clone();
//! let piped = parse | add_one | show;
//! assert_eq!(forward.call("42"), "43");
//! assert_eq!(piped.call("42"), "43");
//! ```

use std::fmt;
use std::ops::{BitOr, Mul};
use std::rc::Rc;

/// A shareable, composable unary function.
pub struct Function<A, B> {
    function: Rc<dyn Fn(A) -> B>,
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Function").finish_non_exhaustive()
    }
}

impl<A: 'static, B: 'static> Function<A, B> {
    /// Wraps a closure.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Calls the wrapped function.
    #[inline]
    pub fn call(&self, input: A) -> B {
        (self.function)(input)
    }

    /// Returns `self` after `inner`: the result calls `inner` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::compose::function;
    ///
    /// let add_one = function(|n: i32| n + 1);
    /// let double = function(|n: i32| n * 2);
    /// assert_eq!(add_one.compose(double).call(5), 11);
    /// ```
    #[must_use]
    pub fn compose<Z: 'static>(self, inner: Function<Z, A>) -> Function<Z, B> {
        Function::new(move |input| self.call(inner.call(input)))
    }

    /// Returns `self` then `next`: the result calls `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::compose::function;
    ///
    /// let add_one = function(|n: i32| n + 1);
    /// let double = function(|n: i32| n * 2);
    /// assert_eq!(add_one.pipe(double).call(5), 12);
    /// ```
    #[must_use]
    pub fn pipe<C: 'static>(self, next: Function<B, C>) -> Function<A, C> {
        next.compose(self)
    }
}

impl<A: 'static> Function<A, A> {
    /// The identity function, the unit of composition.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(super::identity)
    }
}

impl<A: 'static, B: 'static, F> From<F> for Function<A, B>
where
    F: Fn(A) -> B + 'static,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

/// Wraps a closure in a [`Function`].
#[inline]
pub fn function<A: 'static, B: 'static, F>(function: F) -> Function<A, B>
where
    F: Fn(A) -> B + 'static,
{
    Function::new(function)
}

// =============================================================================
// Operators
// =============================================================================

impl<Z: 'static, A: 'static, B: 'static> Mul<Function<Z, A>> for Function<A, B> {
    type Output = Function<Z, B>;

    #[inline]
    fn mul(self, inner: Function<Z, A>) -> Self::Output {
        self.compose(inner)
    }
}

impl<A: 'static, B: 'static, C: 'static> BitOr<Function<B, C>> for Function<A, B> {
    type Output = Function<A, C>;

    #[inline]
    fn bitor(self, next: Function<B, C>) -> Self::Output {
        self.pipe(next)
    }
}

/// `f | closure` pipes into a plain closure without wrapping it first.
impl<A, B, C, F> BitOr<F> for Function<A, B>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(B) -> C + 'static,
{
    type Output = Function<A, C>;

    #[inline]
    fn bitor(self, next: F) -> Self::Output {
        self.pipe(Function::new(next))
    }
}
