//! The `List` monad - nondeterministic computations over lazy sequences.
//!
//! A [`List<A>`] holds every possible result of a computation. `bind` runs
//! the next step once per element and concatenates the results in order.
//! Storage is a [`LazySequence`], so lists may be infinite and nothing is
//! computed before it is demanded.
//!
//! # Examples
//!
//! ```rust
//! use monads::compose::monadic;
//! use monads::control::List;
//! use monads::list;
//!
//! let spawn = monadic(|cell: String| list![cell.clone(), cell]);
//! let grow = monadic(|cell: String| list![format!("{cell}~")]);
//!
//! let first = list!["o".to_string()];
//! assert_eq!((first.clone() >> grow.clone() >> grow.clone()).to_string(), "List(o~~)");
//!
//! let generation = monadic(move |cell: String| {
//!     grow.call(cell.clone()) + spawn.call(cell)
//! });
//! assert_eq!((first >> generation).to_string(), "List(o~, o, o)");
//! ```
//!
//! ## Laziness
//!
//! ```rust
//! use monads::control::List;
//!
//! let naturals = List::from_iterable(0_u64..);
//! assert_eq!(naturals.slice(520..524).to_string(), "List(520, 521, 522, 523)");
//! assert_eq!(naturals.slice(1000..1002).iter().collect::<Vec<_>>(), vec![1000, 1001]);
//! ```

use std::fmt;
use std::ops::{Add, RangeBounds, Shl, Shr};

use super::lazy_sequence::{Iter, LazySequence, LazySequenceError};
use crate::compose::Monadic;
use crate::typeclass::{
    Applicative, Functor, Monad, MonadPlus, Nested, Truthy, TypeConstructor,
};

/// A lazily produced list of results.
///
/// Clones share the realized elements. Equality and ordering force both
/// operands and compare element by element; `Debug` shows only what has been
/// realized, while `Display` forces the whole list.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct List<A> {
    items: LazySequence<A>,
}

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

impl<A> Clone for List<A> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

/// Creates a [`List`] from its elements.
///
/// # Examples
///
/// ```rust
/// use monads::list;
///
/// let numbers = list![1, 2, 3];
/// assert_eq!(numbers.len(), 3);
/// assert_eq!(numbers.to_string(), "List(1, 2, 3)");
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::control::List::from(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::control::List::from(::std::vec![$($element),+])
    };
}

impl<A: 'static> List<A> {
    /// Wraps an iteration source without consuming any of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::List;
    ///
    /// let evens = List::from_iterable((1..=3).filter(|n| n % 2 == 0));
    /// assert_eq!(evens.to_string(), "List(2)");
    /// ```
    pub fn from_iterable<I>(source: I) -> Self
    where
        I: IntoIterator<Item = A>,
        I::IntoIter: 'static,
    {
        Self {
            items: LazySequence::new(source),
        }
    }
}

impl<A> List<A> {
    /// The underlying lazy sequence.
    pub const fn as_sequence(&self) -> &LazySequence<A> {
        &self.items
    }

    /// Number of elements. Forces the whole list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no elements. Pulls at most one element.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Realizes every element. Idempotent.
    pub fn force(&self) -> &Self {
        self.items.force();
        self
    }

    /// Whether the list is known to be empty without pulling anything.
    fn is_known_empty(&self) -> bool {
        self.items.is_exhausted() && self.items.realized_len() == 0
    }
}

impl<A: Clone> List<A> {
    /// Returns the element at `index`; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Fails with [`LazySequenceError`] as [`LazySequence::get`] does.
    pub fn get(&self, index: isize) -> Result<A, LazySequenceError> {
        self.items.get(index)
    }

    /// Iterates over clones of the elements, realizing them on demand.
    pub fn iter(&self) -> Iter<A> {
        self.items.iter()
    }
}

impl<A: Clone + 'static> List<A> {
    /// A lazy list of the elements whose positions fall in `range`.
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        Self {
            items: self.items.slice(range),
        }
    }

    /// Like [`slice`](Self::slice), keeping every `step`-th element.
    ///
    /// # Errors
    ///
    /// Returns [`LazySequenceError::ZeroStep`] when `step` is zero.
    pub fn step_slice<R>(&self, range: R, step: usize) -> Result<Self, LazySequenceError>
    where
        R: RangeBounds<usize>,
    {
        self.items.step_slice(range, step).map(|items| Self { items })
    }
}

impl<A: Clone + 'static> List<List<A>> {
    /// Flattens a list of lists lazily, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::list;
    ///
    /// let nested = list![list![1, 2], list![], list![3]];
    /// assert_eq!(nested.concat(), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat(self) -> List<A> {
        List::from_iterable(self.into_iter().flatten())
    }
}

impl<A: 'static> Default for List<A> {
    fn default() -> Self {
        Self {
            items: LazySequence::empty(),
        }
    }
}

impl<A: 'static> From<Vec<A>> for List<A> {
    fn from(items: Vec<A>) -> Self {
        Self {
            items: LazySequence::from(items),
        }
    }
}

impl<A: 'static> FromIterator<A> for List<A> {
    /// Collects eagerly; use [`List::from_iterable`] to stay lazy.
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<A: Clone> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Iter<A> {
        self.items.into_iter()
    }
}

impl<A: Clone> IntoIterator for &List<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Iter<A> {
        self.items.iter()
    }
}

impl<A: Clone + fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("List(")?;
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{item}")?;
        }
        formatter.write_str(")")
    }
}

impl<A> Truthy for List<A> {
    /// Non-empty lists are truthy.
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A> TypeConstructor for List<A> {
    type Inner = A;
    type WithType<B> = List<B>;
}

impl<A: Clone + 'static> Functor for List<A> {
    /// Maps lazily: `function` runs once per element, when that element is
    /// first demanded.
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> B + 'static,
        B: Clone + 'static,
    {
        List::from_iterable(self.into_iter().map(function))
    }
}

impl<A: Clone + 'static> Applicative for List<A> {
    /// A single-element list.
    fn unit<B>(value: B) -> List<B>
    where
        B: Clone + 'static,
    {
        List::from(vec![value])
    }
}

impl<A: Clone + 'static> Monad for List<A> {
    /// `fmap` followed by `concat`. An empty list is returned as is and
    /// `function` is never called.
    fn bind<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> List<B> + 'static,
        B: Clone + 'static,
    {
        if self.is_known_empty() {
            return List::zero();
        }
        self.fmap(function).concat()
    }

    fn join<B>(self) -> List<B>
    where
        A: Nested<List<B>>,
        B: Clone + 'static,
    {
        self.fmap(<A as Nested<List<B>>>::into_outer).concat()
    }
}

impl<A> Nested<List<A>> for List<A> {
    #[inline]
    fn into_outer(self) -> List<A> {
        self
    }
}

impl<A: Clone + 'static> MonadPlus for List<A> {
    fn zero() -> Self {
        Self::default()
    }

    /// Lazy concatenation: every element of `self`, then every element of `other`.
    fn combine(self, other: Self) -> Self {
        Self::from_iterable(self.into_iter().chain(other))
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<A: Clone + 'static, B: Clone + 'static> Shr<Monadic<A, List<B>>> for List<A> {
    type Output = List<B>;

    fn shr(self, arrow: Monadic<A, List<B>>) -> Self::Output {
        self.bind(move |value| arrow.call(value))
    }
}

impl<A, B, F> Shr<F> for List<A>
where
    A: Clone + 'static,
    B: Clone + 'static,
    F: FnMut(A) -> List<B> + 'static,
{
    type Output = List<B>;

    fn shr(self, function: F) -> Self::Output {
        self.bind(function)
    }
}

impl<A: Clone + 'static, B: Clone + 'static> Shl<List<A>> for Monadic<A, List<B>> {
    type Output = List<B>;

    fn shl(self, monad: List<A>) -> Self::Output {
        monad >> self
    }
}

impl<A: Clone + 'static> Add for List<A> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: Clone + serde::Serialize> serde::Serialize for List<A> {
    /// Serializes as a sequence, forcing the list.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for List<A>
where
    A: serde::Deserialize<'de> + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<A>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::monadic;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn spawn() -> Monadic<char, List<char>> {
        monadic(|cell: char| list![cell, cell])
    }

    // =========================================================================
    // Construction and access
    // =========================================================================

    #[rstest]
    fn list_macro_builds_realized_list() {
        let numbers = list![1, 2, 3];
        assert!(numbers.as_sequence().is_exhausted());
        assert_eq!(numbers.get(1), Ok(2));
        assert_eq!(numbers.get(-1), Ok(3));
    }

    #[rstest]
    fn empty_list_macro() {
        let empty: List<i32> = list![];
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "List()");
    }

    #[rstest]
    fn from_iterable_is_lazy() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let list = List::from_iterable((0..).inspect(move |_| counter.set(counter.get() + 1)));
        assert_eq!(pulls.get(), 0);
        assert_eq!(list.slice(..5), list![0, 1, 2, 3, 4]);
        assert_eq!(pulls.get(), 5);
    }

    #[rstest]
    fn step_slice_keeps_every_step() {
        let naturals = List::from_iterable(0..);
        assert_eq!(naturals.step_slice(..10, 3).unwrap(), list![0, 3, 6, 9]);
        assert!(naturals.step_slice(.., 0).is_err());
    }

    #[rstest]
    fn nested_lists_display() {
        let nested = list![list![2]];
        assert_eq!(nested.to_string(), "List(List(2))");
    }

    #[rstest]
    fn into_iterator_for_reference_does_not_consume() {
        let letters = list!['a', 'b'];
        let collected: String = (&letters).into_iter().collect();
        assert_eq!(collected, "ab");
        assert_eq!(letters.len(), 2);
    }

    #[rstest]
    fn collect_builds_list() {
        let squares: List<i32> = (1..=3).map(|n| n * n).collect();
        assert_eq!(squares, list![1, 4, 9]);
    }

    // =========================================================================
    // Monad behavior
    // =========================================================================

    #[rstest]
    fn bind_concatenates_in_order() {
        assert_eq!(list!['c'] >> spawn() >> spawn(), list!['c', 'c', 'c', 'c']);
    }

    #[rstest]
    fn bind_on_zero_never_calls_function() {
        let exploding = monadic(|_: i32| -> List<i32> { panic!("must not be called") });
        assert_eq!(List::<i32>::zero() >> exploding, List::zero());
    }

    #[rstest]
    fn bind_is_lazy_on_infinite_lists() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let pairs = List::from_iterable(0_u32..).bind(move |n| {
            counter.set(counter.get() + 1);
            list![n, n]
        });
        assert_eq!(pairs.get(5), Ok(2));
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn join_flattens_one_level() {
        let nested = list![list![1], list![2, 3]];
        let flat: List<i32> = Monad::join(nested);
        assert_eq!(flat, list![1, 2, 3]);
    }

    #[rstest]
    fn bind_accepts_plain_closure() {
        let spread = list![1, 2] >> (|n: i32| list![n, n * 10]);
        assert_eq!(spread, list![1, 10, 2, 20]);

        let dropped = list![1, 2, 3] >> (|n: i32| if n == 2 { List::zero() } else { list![n] });
        assert_eq!(dropped, list![1, 3]);
    }

    #[rstest]
    fn add_concatenates() {
        assert_eq!(list![1] + list![2, 3], list![1, 2, 3]);
        assert_eq!(List::zero() + list![4], list![4]);
    }

    #[rstest]
    fn combine_is_lazy() {
        let infinite = List::from_iterable(0..) + list![-1];
        assert_eq!(infinite.get(3), Ok(3));
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    #[rstest]
    fn equality_compares_forced_elements() {
        assert_eq!(List::from_iterable(1..4), list![1, 2, 3]);
        assert_ne!(list![1, 2], list![1, 2, 3]);
    }

    #[rstest]
    fn ordering_is_lexicographic() {
        assert!(list![1, 2] < list![1, 3]);
        assert!(list![1] < list![1, 0]);
    }

    #[rstest]
    fn truthiness_follows_emptiness() {
        assert!(list![0].is_truthy());
        assert!(!List::<i32>::zero().is_truthy());
    }
}
