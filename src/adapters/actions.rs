//! Small monadic actions: case analysis, fallbacks and first-match search.

use crate::compose::Function;
use crate::control::{Either, Maybe};
use crate::typeclass::Truthy;

/// Case analysis for [`Either`] as a reusable [`Function`].
///
/// # Examples
///
/// ```rust
/// use monads::adapters::either;
/// use monads::control::Either;
///
/// let describe = either(|error: String| format!("failed: {error}"), |n: i32| format!("got {n}"));
/// assert_eq!(describe.call(Either::Right(1)), "got 1");
/// assert_eq!(describe.call(Either::Left("oops".into())), "failed: oops");
/// ```
pub fn either<L, R, T, F, G>(left_function: F, right_function: G) -> Function<Either<L, R>, T>
where
    L: 'static,
    R: 'static,
    T: 'static,
    F: Fn(L) -> T + 'static,
    G: Fn(R) -> T + 'static,
{
    Function::new(move |value: Either<L, R>| value.fold(&left_function, &right_function))
}

/// Tries `functions` in order and returns the first truthy result.
///
/// When no result is truthy the last one is returned, and with no functions
/// at all the result is `T::default()`.
///
/// # Examples
///
/// ```rust
/// use monads::adapters::tryout;
/// use monads::compose::function;
///
/// let zero = function(|n: i32| if n == 0 { "zero" } else { "" });
/// let odd = function(|n: i32| if n % 2 != 0 { "odd" } else { "" });
/// let even = function(|n: i32| if n % 2 == 0 { "even" } else { "" });
///
/// let test = tryout([zero, odd, even]);
/// assert_eq!(test.call(0), "zero");
/// assert_eq!(test.call(1), "odd");
/// assert_eq!(test.call(2), "even");
/// ```
pub fn tryout<A, T, I>(functions: I) -> Function<A, T>
where
    A: Clone + 'static,
    T: Truthy + Default + 'static,
    I: IntoIterator<Item = Function<A, T>>,
{
    let functions: Vec<Function<A, T>> = functions.into_iter().collect();
    Function::new(move |input: A| {
        let mut last = T::default();
        for function in &functions {
            last = function.call(input.clone());
            if last.is_truthy() {
                break;
            }
        }
        last
    })
}

/// Returns the first `Just` in `items`, or `default` when there is none.
///
/// Stops reading `items` at the first `Just`, so infinite sources are fine
/// as long as one exists.
///
/// # Examples
///
/// ```rust
/// use monads::adapters::first;
/// use monads::control::{Just, Nothing};
///
/// assert_eq!(first([Nothing, Nothing, Just(42), Nothing], Nothing), Just(42));
/// assert_eq!(first([Just(42), Just(43)], Nothing), Just(42));
/// assert_eq!(first([Nothing, Nothing], Just(2)), Just(2));
/// ```
pub fn first<A, I>(items: I, default: Maybe<A>) -> Maybe<A>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    items.into_iter().find(Maybe::is_just).unwrap_or(default)
}

/// Returns the first item satisfying `predicate`, wrapped in `Just`.
///
/// # Examples
///
/// ```rust
/// use monads::adapters::first_where;
/// use monads::control::{Just, Nothing};
///
/// assert_eq!(first_where(0.., |x| *x > 40 && x % 2 == 0), Just(42));
/// assert_eq!(first_where(0..100, |x| *x > 100), Nothing);
/// ```
pub fn first_where<I, P>(items: I, predicate: P) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().find(predicate).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::function;
    use crate::control::{Just, Nothing};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[rstest]
    fn either_applies_matching_handler() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let act = either(
            move |value: i32| {
                sink.borrow_mut().push(value);
                None
            },
            |value: i32| Some(value + 1),
        );
        let inputs = [
            Either::Left(0),
            Either::Right(1),
            Either::Left(2),
            Either::Right(3),
        ];
        let results: Vec<Option<i32>> = inputs.into_iter().map(|value| act.call(value)).collect();
        assert_eq!(results, vec![None, Some(2), None, Some(4)]);
        assert_eq!(*log.borrow(), vec![0, 2]);
    }

    #[rstest]
    #[case(4, "small")]
    #[case(12, "12")]
    fn tryout_returns_first_truthy(#[case] input: i32, #[case] expected: &str) {
        let small = function(|n: i32| if n < 10 { "small".to_string() } else { String::new() });
        let digits = function(|n: i32| n.to_string());
        assert_eq!(tryout([small, digits]).call(input), expected);
    }

    #[rstest]
    fn tryout_returns_last_result_when_nothing_is_truthy() {
        let zero = function(|_: i32| 0);
        let also_zero = function(|n: i32| n - n);
        assert_eq!(tryout([zero, also_zero]).call(5), 0);
    }

    #[rstest]
    fn tryout_stops_at_first_truthy() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let counted = function(move |n: i32| {
            *counter.borrow_mut() += 1;
            n
        });
        let test = tryout([function(|n: i32| n * 2), counted]);
        assert_eq!(test.call(3), 6);
        assert_eq!(*calls.borrow(), 0);
    }

    #[rstest]
    fn tryout_without_functions_returns_default() {
        let empty: Vec<Function<i32, bool>> = Vec::new();
        assert!(!tryout(empty).call(1));
    }

    #[rstest]
    #[case(vec![Nothing, Nothing, Nothing], Nothing)]
    #[case(vec![], Nothing)]
    #[case(vec![Nothing, Just(1)], Just(1))]
    fn first_finds_just(#[case] items: Vec<Maybe<i32>>, #[case] expected: Maybe<i32>) {
        assert_eq!(first(items, Nothing), expected);
    }

    #[rstest]
    fn first_stops_on_infinite_source() {
        let items = (0..).map(|n| if n == 7 { Just(n) } else { Nothing });
        assert_eq!(first(items, Nothing), Just(7));
    }

    #[rstest]
    fn first_where_with_truthiness() {
        assert_eq!(first_where([0, 0, 3], Truthy::is_truthy), Just(3));
        assert_eq!(first_where(["", ""], Truthy::is_truthy), Nothing);
    }
}
