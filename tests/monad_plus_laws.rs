//! Property-based tests for `MonadPlus` laws.
//!
//! - **Left Zero**: `zero().combine(m) == m`
//! - **Right Zero**: `m.combine(zero()) == m`
//! - **Associativity**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
//! - **Zero Annihilation**: `zero().bind(f) == zero()` without calling `f`
//!
//! `Maybe` combines left-biased, `List` concatenates.

use std::cell::Cell;
use std::rc::Rc;

use monads::control::{Just, List, Maybe, Nothing};
use monads::typeclass::{Monad, MonadPlus};
use proptest::prelude::*;
use rstest::rstest;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..10)
}

// =============================================================================
// Maybe<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_zero(monad in maybe_strategy()) {
        prop_assert_eq!(Maybe::zero().combine(monad), monad);
    }

    #[test]
    fn prop_maybe_right_zero(monad in maybe_strategy()) {
        prop_assert_eq!(monad.combine(Maybe::zero()), monad);
    }

    #[test]
    fn prop_maybe_associativity(
        first in maybe_strategy(),
        second in maybe_strategy(),
        third in maybe_strategy(),
    ) {
        prop_assert_eq!(
            first.combine(second).combine(third),
            first.combine(second.combine(third))
        );
    }

    #[test]
    fn prop_maybe_combine_is_left_biased(first in any::<i32>(), second in maybe_strategy()) {
        prop_assert_eq!(Just(first).combine(second), Just(first));
    }

    #[test]
    fn prop_maybe_combine_all_picks_first_just(monads in prop::collection::vec(maybe_strategy(), 0..10)) {
        let expected = monads.iter().copied().find(Maybe::is_just).unwrap_or(Nothing);
        prop_assert_eq!(Maybe::combine_all(monads), expected);
    }
}

// =============================================================================
// List<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_list_left_zero(items in elements()) {
        let monad = List::from(items);
        prop_assert_eq!(List::zero().combine(monad.clone()), monad);
    }

    #[test]
    fn prop_list_right_zero(items in elements()) {
        let monad = List::from(items);
        prop_assert_eq!(monad.clone().combine(List::zero()), monad);
    }

    #[test]
    fn prop_list_associativity(first in elements(), second in elements(), third in elements()) {
        let (first, second, third) = (List::from(first), List::from(second), List::from(third));
        prop_assert_eq!(
            first.clone().combine(second.clone()).combine(third.clone()),
            first.combine(second.combine(third))
        );
    }

    #[test]
    fn prop_list_combine_concatenates(first in elements(), second in elements()) {
        let expected: Vec<i32> = first.iter().chain(&second).copied().collect();
        let combined = List::from(first).combine(List::from(second));
        prop_assert_eq!(combined, List::from(expected));
    }
}

// =============================================================================
// Zero annihilation
// =============================================================================

#[rstest]
fn maybe_zero_bind_never_calls_function() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let result = Maybe::<i32>::zero().bind(move |n| {
        counter.set(counter.get() + 1);
        Just(n)
    });
    assert_eq!(result, Nothing);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn list_zero_bind_never_calls_function() {
    let result = List::<i32>::zero().bind(|_| -> List<i32> { panic!("zero must not call the function") });
    assert_eq!(result, List::zero());
}
