//! The `compose!` macro for function composition.

/// Composes functions from right to left into a [`Function`](crate::compose::Function).
///
/// `compose!(f, g, h).call(x)` is equivalent to `f(g(h(x)))`. Each argument
/// may be a closure, a function item or an existing `Function`.
///
/// # Syntax
///
/// - `compose!(f)` - Wraps `f`
/// - `compose!(f, g)` - `f` after `g`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use monads::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.call(3), 19);
/// ```
///
/// ## Type conversion
///
/// ```
/// use monads::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(get_length, to_string);
/// assert_eq!(composed.call(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $crate::compose::Function::from($function)
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::Function::from($outer_function)
            .compose($crate::compose!($($remaining_functions),+))
    };
}
