//! `MonadPlus` type class - monoid structure on monads.
//!
//! This module provides the `MonadPlus` trait, which extends `Monad` with:
//!
//! - A neutral element (`zero`)
//! - An associative choice or accumulation operation (`combine`)
//! - Folding many alternatives into one (`combine_all`)
//! - Filtering inside monadic pipelines (`guard`)
//!
//! # Laws
//!
//! ## Monoid Laws
//!
//! ```text
//! zero().combine(m) == m
//! m.combine(zero()) == m
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! ## Left Zero Law
//!
//! ```text
//! zero().bind(f) == zero()
//! ```
//!
//! `f` is never invoked on a zero.
//!
//! There is no agreed-upon set of further laws. `Maybe` implements a
//! left-biased choice where the first `Just` wins. `List` concatenates.
//!
//! Combining two different concrete types is not expressible: `combine` takes
//! `Self`, so the mismatch is rejected at compile time.
//!
//! ```rust,compile_fail
//! use monads::control::{Just, List};
//! use monads::typeclass::MonadPlus;
//!
//! let _ = Just(1).combine(List::from_iterable(vec![1]));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monads::control::{Just, Maybe, Nothing};
//! use monads::typeclass::MonadPlus;
//!
//! let missing: Maybe<i32> = Nothing;
//! assert_eq!(missing.combine(Just(2)), Just(2));
//! assert_eq!(Just(1).combine(Just(2)), Just(1));
//! ```

use super::monad::Monad;

/// A type class for monads with an associative `combine` and a neutral `zero`.
pub trait MonadPlus: Monad + Sized {
    /// Returns the neutral element of `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Maybe, Nothing};
    /// use monads::typeclass::MonadPlus;
    ///
    /// assert_eq!(Maybe::<i32>::zero(), Nothing);
    /// ```
    fn zero() -> Self;

    /// Combines two values of the same monad.
    ///
    /// # Arguments
    ///
    /// * `other` - The right-hand operand
    ///
    /// # Returns
    ///
    /// The combination of `self` and `other`
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Folds every item with `combine`, starting from `zero`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Just, Maybe, Nothing};
    /// use monads::typeclass::MonadPlus;
    ///
    /// let found = Maybe::combine_all(vec![Nothing, Just(3), Just(4)]);
    /// assert_eq!(found, Just(3));
    /// ```
    #[must_use]
    fn combine_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::zero(), Self::combine)
    }

    /// Succeeds with `()` when `condition` holds, otherwise returns `zero`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{Just, Maybe, Nothing};
    /// use monads::typeclass::{Monad, MonadPlus};
    ///
    /// fn positive(n: i32) -> Maybe<i32> {
    ///     Maybe::<i32>::guard(n > 0).bind(move |()| Just(n))
    /// }
    ///
    /// assert_eq!(positive(5), Just(5));
    /// assert_eq!(positive(-5), Nothing);
    /// ```
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self::WithType<()>: MonadPlus,
    {
        if condition {
            Self::unit(())
        } else {
            <Self::WithType<()> as MonadPlus>::zero()
        }
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Just, List, Maybe, Nothing};
    use rstest::rstest;

    // =========================================================================
    // Maybe<A> Tests
    // =========================================================================

    #[rstest]
    #[case(Nothing, Nothing, Nothing)]
    #[case(Just(1), Nothing, Just(1))]
    #[case(Nothing, Just(2), Just(2))]
    #[case(Just(1), Just(2), Just(1))]
    fn maybe_combine_is_left_biased(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn maybe_zero_bind_never_calls_function() {
        let zero = Maybe::<i32>::zero();
        let result: Maybe<i32> = zero.bind(|_| panic!("must not be called"));
        assert_eq!(result, Maybe::zero());
    }

    #[rstest]
    fn maybe_combine_all_empty_is_zero() {
        assert_eq!(Maybe::<u8>::combine_all(Vec::new()), Nothing);
    }

    #[rstest]
    #[case(true, Just(()))]
    #[case(false, Nothing)]
    fn maybe_guard(#[case] condition: bool, #[case] expected: Maybe<()>) {
        assert_eq!(Maybe::<i32>::guard(condition), expected);
    }

    // =========================================================================
    // List<A> Tests
    // =========================================================================

    #[rstest]
    fn list_combine_concatenates() {
        let combined = crate::list![1, 2].combine(crate::list![3]);
        assert_eq!(combined, crate::list![1, 2, 3]);
    }

    #[rstest]
    fn list_combine_all_concatenates_in_order() {
        let all = List::combine_all(vec![crate::list![1], List::zero(), crate::list![2, 3]]);
        assert_eq!(all, crate::list![1, 2, 3]);
    }

    #[rstest]
    fn list_guard_filters_in_bind() {
        let evens = crate::list![1, 2, 3, 4]
            .bind(|n: i32| List::<i32>::guard(n % 2 == 0).bind(move |()| crate::list![n]));
        assert_eq!(evens, crate::list![2, 4]);
    }

    #[rstest]
    fn list_zero_bind_never_calls_function() {
        let zero = List::<i32>::zero();
        let result: List<i32> = zero.bind(|_| panic!("must not be called"));
        assert_eq!(result, List::zero());
    }
}
