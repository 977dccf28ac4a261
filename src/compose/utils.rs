//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: the unit of composition
//! - [`compose`]: right-to-left composition of two plain closures
//! - [`constant`]: a function that ignores its input

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use monads::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// The result is a plain closure; wrap it in
/// [`Function`](super::Function) to keep composing with operators.
///
/// # Examples
///
/// ```
/// use monads::compose::compose;
///
/// let shout = compose(|text: String| text.to_uppercase(), |name: &str| format!("hi {name}"));
/// assert_eq!(shout("ann"), "HI ANN");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use monads::compose::constant;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
