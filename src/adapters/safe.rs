//! Lifting fallible functions into monadic ones.
//!
//! Each adapter wraps a function returning `Result` and decides which
//! outcomes count as failure:
//!
//! - [`maybe`]: failures become `Nothing`
//! - [`failsafe`]: failures become `Left`, carrying a [`Failure`]
//! - [`producer`]: the result is iterated lazily into a [`List`]; failures
//!   become the empty list
//!
//! `call` propagates errors that the configured filter does not accept;
//! `into_monadic` builds a [`Monadic`] arrow in which every error is turned
//! into the failure variant.

use std::fmt;
use std::rc::Rc;

use crate::compose::Monadic;
use crate::control::{Either, Just, List, Maybe, Nothing};
use crate::typeclass::MonadPlus;

type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

fn accept_all<E: 'static>() -> Predicate<E> {
    Rc::new(|_: &E| true)
}

// =============================================================================
// maybe
// =============================================================================

/// A function whose failures become `Nothing`. Built by [`maybe`].
pub struct SafeCall<A, T, E> {
    function: Rc<dyn Fn(A) -> Result<T, E>>,
    predicate: Option<Predicate<T>>,
    rejected_value: Option<T>,
    error_filter: Predicate<E>,
}

impl<A, T: Clone, E> Clone for SafeCall<A, T, E> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            predicate: self.predicate.clone(),
            rejected_value: self.rejected_value.clone(),
            error_filter: Rc::clone(&self.error_filter),
        }
    }
}

impl<A, T: fmt::Debug, E> fmt::Debug for SafeCall<A, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SafeCall")
            .field("has_predicate", &self.predicate.is_some())
            .field("rejected_value", &self.rejected_value)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so that its results come back as [`Maybe`].
///
/// With no further configuration every `Ok` becomes `Just` and every error
/// becomes `Nothing`.
///
/// # Examples
///
/// ```rust
/// use monads::adapters::maybe;
/// use monads::control::{Just, Nothing};
///
/// let parse_int = maybe(|text: &str| text.parse::<i32>());
/// assert_eq!(parse_int.call("42"), Ok(Just(42)));
/// assert_eq!(parse_int.call("invalid"), Ok(Nothing));
///
/// let parse_positive = maybe(|text: &str| text.parse::<i32>()).predicate(|n| *n > 0);
/// assert_eq!(parse_positive.call("-42"), Ok(Nothing));
///
/// let parse_nonzero = maybe(|text: &str| text.parse::<i32>()).nothing_on_value(0);
/// assert_eq!(parse_nonzero.call("0"), Ok(Nothing));
/// ```
pub fn maybe<A, T, E, F>(function: F) -> SafeCall<A, T, E>
where
    F: Fn(A) -> Result<T, E> + 'static,
    E: 'static,
{
    SafeCall {
        function: Rc::new(function),
        predicate: None,
        rejected_value: None,
        error_filter: accept_all(),
    }
}

impl<A, T, E> SafeCall<A, T, E> {
    /// Results for which `predicate` returns `false` become `Nothing`.
    #[must_use]
    pub fn predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.predicate = Some(Rc::new(predicate));
        self
    }

    /// A result equal to `value` becomes `Nothing`.
    #[must_use]
    pub fn nothing_on_value(mut self, value: T) -> Self {
        self.rejected_value = Some(value);
        self
    }

    /// Only errors accepted by `filter` become `Nothing`; the rest are
    /// returned from [`call`](Self::call).
    ///
    /// The filter applies to `call` only. [`into_monadic`](Self::into_monadic)
    /// has no error channel and turns every error into `Nothing`.
    #[must_use]
    pub fn nothing_on_error<P>(mut self, filter: P) -> Self
    where
        P: Fn(&E) -> bool + 'static,
    {
        self.error_filter = Rc::new(filter);
        self
    }
}

impl<A, T: PartialEq, E: fmt::Debug> SafeCall<A, T, E> {
    /// Calls the wrapped function.
    ///
    /// # Errors
    ///
    /// Returns the function's error when the configured filter does not
    /// accept it.
    pub fn call(&self, input: A) -> Result<Maybe<T>, E> {
        match (self.function)(input) {
            Ok(value) => Ok(self.judge(value)),
            Err(error) if (self.error_filter)(&error) => {
                tracing::debug!(error = ?error, "error converted to Nothing");
                Ok(Nothing)
            }
            Err(error) => Err(error),
        }
    }

    fn judge(&self, value: T) -> Maybe<T> {
        let rejected = self.rejected_value.as_ref() == Some(&value)
            || self.predicate.as_ref().is_some_and(|accept| !accept(&value));
        if rejected { Nothing } else { Just(value) }
    }
}

impl<A: 'static, T: PartialEq + 'static, E: fmt::Debug + 'static> SafeCall<A, T, E> {
    /// A monadic arrow in which every error becomes `Nothing`.
    ///
    /// Errors rejected by [`nothing_on_error`](Self::nothing_on_error) are
    /// logged at debug level and still become `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::adapters::maybe;
    /// use monads::control::{Just, Nothing};
    ///
    /// let reciprocal = maybe(|n: i32| 100_i32.checked_div(n).ok_or("division by zero"))
    ///     .into_monadic();
    /// assert_eq!(Just(4) >> reciprocal.clone(), Just(25));
    /// assert_eq!(Just(0) >> reciprocal, Nothing);
    /// ```
    pub fn into_monadic(self) -> Monadic<A, Maybe<T>> {
        Monadic::new(move |input| {
            self.call(input).unwrap_or_else(|error| {
                tracing::debug!(error = ?error, "unfiltered error converted to Nothing");
                Nothing
            })
        })
    }
}

// =============================================================================
// failsafe
// =============================================================================

/// Why a [`FailsafeCall`] produced `Left`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure<T, E> {
    /// The function succeeded but its result was rejected.
    Rejected(T),
    /// The function failed.
    Error(E),
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Failure<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(value) => write!(formatter, "rejected value {value}"),
            Self::Error(error) => write!(formatter, "{error}"),
        }
    }
}

/// A function whose failures become `Left`. Built by [`failsafe`].
pub struct FailsafeCall<A, T, E> {
    function: Rc<dyn Fn(A) -> Result<T, E>>,
    predicate: Option<Predicate<T>>,
    rejected_value: Option<T>,
    error_filter: Predicate<E>,
}

impl<A, T: Clone, E> Clone for FailsafeCall<A, T, E> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            predicate: self.predicate.clone(),
            rejected_value: self.rejected_value.clone(),
            error_filter: Rc::clone(&self.error_filter),
        }
    }
}

impl<A, T: fmt::Debug, E> fmt::Debug for FailsafeCall<A, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FailsafeCall")
            .field("has_predicate", &self.predicate.is_some())
            .field("rejected_value", &self.rejected_value)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so that its results come back as [`Either`].
///
/// Successful, accepted results are `Right`. Rejected results are
/// `Left(Failure::Rejected(value))` and errors are
/// `Left(Failure::Error(error))`.
///
/// # Examples
///
/// ```rust
/// use monads::adapters::{Failure, failsafe};
/// use monads::control::Either;
///
/// let parse_positive = failsafe(|text: &str| text.parse::<i32>()).predicate(|n| *n > 0);
/// assert_eq!(parse_positive.call("42"), Ok(Either::Right(42)));
/// assert_eq!(parse_positive.call("-42"), Ok(Either::Left(Failure::Rejected(-42))));
/// assert!(parse_positive.call("invalid").unwrap().is_left());
/// ```
pub fn failsafe<A, T, E, F>(function: F) -> FailsafeCall<A, T, E>
where
    F: Fn(A) -> Result<T, E> + 'static,
    E: 'static,
{
    FailsafeCall {
        function: Rc::new(function),
        predicate: None,
        rejected_value: None,
        error_filter: accept_all(),
    }
}

impl<A, T, E> FailsafeCall<A, T, E> {
    /// Results for which `predicate` returns `false` become `Left`.
    #[must_use]
    pub fn predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.predicate = Some(Rc::new(predicate));
        self
    }

    /// A result equal to `value` becomes `Left`.
    #[must_use]
    pub fn left_on_value(mut self, value: T) -> Self {
        self.rejected_value = Some(value);
        self
    }

    /// Only errors accepted by `filter` become `Left`; the rest are returned
    /// from [`call`](Self::call).
    ///
    /// The filter applies to `call` only. [`into_monadic`](Self::into_monadic)
    /// turns every error into `Left(Failure::Error(_))`.
    #[must_use]
    pub fn left_on_error<P>(mut self, filter: P) -> Self
    where
        P: Fn(&E) -> bool + 'static,
    {
        self.error_filter = Rc::new(filter);
        self
    }
}

impl<A, T: PartialEq, E: fmt::Debug> FailsafeCall<A, T, E> {
    /// Calls the wrapped function.
    ///
    /// # Errors
    ///
    /// Returns the function's error when the configured filter does not
    /// accept it.
    pub fn call(&self, input: A) -> Result<Either<Failure<T, E>, T>, E> {
        match (self.function)(input) {
            Ok(value) => Ok(self.judge(value)),
            Err(error) if (self.error_filter)(&error) => {
                tracing::debug!(error = ?error, "error converted to Left");
                Ok(Either::Left(Failure::Error(error)))
            }
            Err(error) => Err(error),
        }
    }

    fn judge(&self, value: T) -> Either<Failure<T, E>, T> {
        let rejected = self.rejected_value.as_ref() == Some(&value)
            || self.predicate.as_ref().is_some_and(|accept| !accept(&value));
        if rejected {
            Either::Left(Failure::Rejected(value))
        } else {
            Either::Right(value)
        }
    }
}

impl<A: 'static, T: PartialEq + 'static, E: fmt::Debug + 'static> FailsafeCall<A, T, E> {
    /// A monadic arrow in which every error becomes `Left`, whatever
    /// [`left_on_error`](Self::left_on_error) accepts.
    pub fn into_monadic(self) -> Monadic<A, Either<Failure<T, E>, T>> {
        Monadic::new(move |input| {
            self.call(input)
                .unwrap_or_else(|error| Either::Left(Failure::Error(error)))
        })
    }
}

// =============================================================================
// producer
// =============================================================================

/// A function whose iterable result is read lazily into a [`List`]. Built by
/// [`producer`].
pub struct Producer<A, I, E> {
    function: Rc<dyn Fn(A) -> Result<I, E>>,
    error_filter: Predicate<E>,
}

impl<A, I, E> Clone for Producer<A, I, E> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            error_filter: Rc::clone(&self.error_filter),
        }
    }
}

impl<A, I, E> fmt::Debug for Producer<A, I, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Producer").finish_non_exhaustive()
    }
}

/// Wraps `function` so that its iterable result comes back as a lazy
/// [`List`].
///
/// Unlike [`maybe`] and [`failsafe`], no error is converted unless
/// [`empty_on_error`](Producer::empty_on_error) says so.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
///
/// use monads::adapters::producer;
/// use monads::list;
///
/// let times = producer(|a: i32| {
///     Ok::<_, Infallible>((1..=3).map(move |b| format!("{a}x{b}={}", a * b)))
/// })
/// .into_monadic();
///
/// assert_eq!(
///     (list![1, 2] >> times).to_string(),
///     "List(1x1=1, 1x2=2, 1x3=3, 2x1=2, 2x2=4, 2x3=6)"
/// );
/// ```
pub fn producer<A, I, E, F>(function: F) -> Producer<A, I, E>
where
    F: Fn(A) -> Result<I, E> + 'static,
    E: 'static,
{
    Producer {
        function: Rc::new(function),
        error_filter: Rc::new(|_: &E| false),
    }
}

impl<A, I, E> Producer<A, I, E> {
    /// Errors accepted by `filter` become the empty list.
    ///
    /// The filter applies to `call` only. [`into_monadic`](Self::into_monadic)
    /// turns every error into the empty list.
    #[must_use]
    pub fn empty_on_error<P>(mut self, filter: P) -> Self
    where
        P: Fn(&E) -> bool + 'static,
    {
        self.error_filter = Rc::new(filter);
        self
    }
}

impl<A, I, E> Producer<A, I, E>
where
    I: IntoIterator,
    I::Item: 'static,
    I::IntoIter: 'static,
    E: fmt::Debug,
{
    /// Calls the wrapped function. The returned list is not read until it is
    /// demanded.
    ///
    /// # Errors
    ///
    /// Returns the function's error unless the configured filter accepts it.
    pub fn call(&self, input: A) -> Result<List<I::Item>, E> {
        match (self.function)(input) {
            Ok(items) => Ok(List::from_iterable(items)),
            Err(error) if (self.error_filter)(&error) => {
                tracing::debug!(error = ?error, "error converted to an empty List");
                Ok(List::default())
            }
            Err(error) => Err(error),
        }
    }
}

impl<A, I, E> Producer<A, I, E>
where
    A: 'static,
    I: IntoIterator + 'static,
    I::Item: Clone + 'static,
    I::IntoIter: 'static,
    E: fmt::Debug + 'static,
{
    /// A monadic arrow in which every error becomes the empty list, whatever
    /// [`empty_on_error`](Self::empty_on_error) accepts.
    pub fn into_monadic(self) -> Monadic<A, List<I::Item>> {
        Monadic::new(move |input| {
            self.call(input).unwrap_or_else(|error| {
                tracing::debug!(error = ?error, "unfiltered error converted to an empty List");
                List::zero()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use rstest::rstest;
    use std::cell::Cell;
    use std::num::ParseIntError;

    fn parse_int() -> SafeCall<&'static str, i32, ParseIntError> {
        maybe(|text: &str| text.parse::<i32>())
    }

    // =========================================================================
    // maybe
    // =========================================================================

    #[rstest]
    #[case("42", Just(42))]
    #[case("-7", Just(-7))]
    #[case("invalid", Nothing)]
    fn maybe_converts_errors_by_default(#[case] text: &'static str, #[case] expected: Maybe<i32>) {
        assert_eq!(parse_int().call(text), Ok(expected));
    }

    #[rstest]
    #[case("42", Just(42))]
    #[case("-42", Nothing)]
    fn maybe_with_predicate(#[case] text: &'static str, #[case] expected: Maybe<i32>) {
        let parse_positive = parse_int().predicate(|n| *n > 0);
        assert_eq!(parse_positive.call(text), Ok(expected));
    }

    #[rstest]
    fn maybe_with_rejected_value() {
        let parse_nonzero = parse_int().nothing_on_value(0);
        assert_eq!(parse_nonzero.call("42"), Ok(Just(42)));
        assert_eq!(parse_nonzero.call("0"), Ok(Nothing));
    }

    #[rstest]
    fn maybe_propagates_unfiltered_errors() {
        let safe_div = maybe(|(a, b): (i32, i32)| a.checked_div(b).ok_or("division by zero"))
            .nothing_on_error(|error: &&str| error.contains("zero"));
        assert_eq!(safe_div.call((42, 2)), Ok(Just(21)));
        assert_eq!(safe_div.call((42, 0)), Ok(Nothing));

        let strict = parse_int().nothing_on_error(|_| false);
        assert!(strict.call("invalid").is_err());
    }

    #[rstest]
    fn maybe_into_monadic_is_total() {
        let strict = parse_int().nothing_on_error(|_| false).into_monadic();
        assert_eq!(strict.call("invalid"), Nothing);
        assert_eq!(Just("5") >> strict, Just(5));
    }

    // =========================================================================
    // failsafe
    // =========================================================================

    #[rstest]
    fn failsafe_wraps_success_in_right() {
        let parse = failsafe(|text: &str| text.parse::<i32>());
        assert_eq!(parse.call("42"), Ok(Either::Right(42)));
    }

    #[rstest]
    fn failsafe_wraps_error_in_left() {
        let parse = failsafe(|text: &str| text.parse::<i32>());
        let expected = "invalid".parse::<i32>().unwrap_err();
        assert_eq!(parse.call("invalid"), Ok(Either::Left(Failure::Error(expected))));
    }

    #[rstest]
    fn failsafe_rejected_values() {
        let parse = failsafe(|text: &str| text.parse::<i32>()).left_on_value(0);
        assert_eq!(parse.call("0"), Ok(Either::Left(Failure::Rejected(0))));
        assert_eq!(parse.call("1"), Ok(Either::Right(1)));
    }

    #[rstest]
    fn failsafe_left_on_error_filters() {
        let parse = failsafe(|text: &str| text.parse::<i32>()).left_on_error(|_| false);
        assert!(parse.call("x").is_err());
        assert!(parse.into_monadic().call("x").is_left());
    }

    #[rstest]
    fn failure_display() {
        let rejected: Failure<i32, String> = Failure::Rejected(3);
        assert_eq!(rejected.to_string(), "rejected value 3");
        let error: Failure<i32, String> = Failure::Error("boom".to_string());
        assert_eq!(error.to_string(), "boom");
    }

    // =========================================================================
    // producer
    // =========================================================================

    #[rstest]
    fn producer_repeats_through_bind() {
        let double = producer(|a: i32| Ok::<_, String>([a, a])).into_monadic();
        assert_eq!(list![42] >> double, list![42, 42]);
    }

    #[rstest]
    fn producer_is_lazy() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let naturals = producer(move |start: u32| {
            let counter = Rc::clone(&counter);
            Ok::<_, String>((start..).inspect(move |_| counter.set(counter.get() + 1)))
        });
        let list = naturals.call(10).unwrap();
        assert_eq!(pulled.get(), 0);
        assert_eq!(list.get(2), Ok(12));
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    fn producer_errors_propagate_by_default() {
        let failing = producer(|_: i32| Err::<Vec<i32>, _>("boom"));
        assert_eq!(failing.call(1).unwrap_err(), "boom");
        let tolerant = failing.empty_on_error(|_| true);
        assert_eq!(tolerant.call(1), Ok(List::zero()));
    }

    #[rstest]
    fn into_monadic_ignores_error_filters() {
        let strict = producer(|n: i32| if n > 0 { Ok(vec![n]) } else { Err("negative") })
            .empty_on_error(|_| false);
        assert_eq!(strict.call(-1), Err("negative"));
        assert_eq!(list![2, -1, 3] >> strict.into_monadic(), list![2, 3]);

        let parse = failsafe(|text: &str| text.parse::<i32>()).left_on_error(|_| false);
        assert!(parse.call("x").is_err());
        let arrow = parse.into_monadic();
        assert!(matches!(arrow.call("x"), Either::Left(Failure::Error(_))));
        assert_eq!(arrow.call("8"), Either::Right(8));

        let safe = parse_int().nothing_on_error(|_| false).into_monadic();
        assert_eq!(safe.call("1"), Just(1));
        assert_eq!(safe.call("x"), Nothing);
    }
}
