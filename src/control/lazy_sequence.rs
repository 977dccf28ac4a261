//! Indexable sequences with lazy, memoizing evaluation.
//!
//! [`LazySequence`] wraps a one-shot iterator and a growing buffer of the
//! elements pulled from it so far. Elements are pulled only when an index
//! beyond the buffer is requested and are never pulled twice, so infinite
//! sources are fine as long as nobody asks for their end.
//!
//! # Examples
//!
//! ```rust
//! use monads::control::LazySequence;
//!
//! let naturals = LazySequence::new(0_u64..);
//! assert_eq!(naturals.get(1), Ok(1));
//! assert_eq!(naturals.slice(3..5).iter().collect::<Vec<_>>(), vec![3, 4]);
//! let evens = naturals.step_slice(..20, 2).unwrap();
//! assert_eq!(evens.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::rc::Rc;

use thiserror::Error;

/// Errors raised when reading from a [`LazySequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LazySequenceError {
    /// The source was exhausted before reaching `index`.
    #[error("index {index} out of range for lazy sequence of length {length}")]
    OutOfRange {
        /// The requested index.
        index: isize,
        /// The final length of the sequence.
        length: usize,
    },
    /// A slice was requested with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
    /// The source is in use further up the call stack, or panicked earlier.
    #[error("lazy sequence source is unavailable while reading index {index}")]
    SourceUnavailable {
        /// The requested index.
        index: isize,
    },
}

/// Where the next element comes from.
enum Source<A> {
    /// Elements may remain.
    Pending(Box<dyn Iterator<Item = A>>),
    /// Taken out for a `next()` call, or lost to a panic inside one.
    Detached,
    /// Everything has been realized.
    Exhausted,
}

struct State<A> {
    source: Source<A>,
    items: Vec<A>,
}

/// A lazily realized, memoizing sequence.
///
/// Clones share the same buffer and source: realizing an element through one
/// handle makes it available to every other handle.
///
/// `LazySequence` is single-threaded; it is neither `Send` nor `Sync`.
pub struct LazySequence<A> {
    state: Rc<RefCell<State<A>>>,
}

static_assertions::assert_not_impl_any!(LazySequence<i32>: Send, Sync);

impl<A> Clone for LazySequence<A> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A: 'static> LazySequence<A> {
    /// Wraps an iteration source without consuming any of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::LazySequence;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let pulled = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&pulled);
    /// let sequence = LazySequence::new((0..).inspect(move |_| counter.set(counter.get() + 1)));
    /// assert_eq!(pulled.get(), 0);
    ///
    /// assert_eq!(sequence.get(2), Ok(2));
    /// assert_eq!(pulled.get(), 3);
    /// ```
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = A>,
        I::IntoIter: 'static,
    {
        Self::with_state(Source::Pending(Box::new(source.into_iter())), Vec::new())
    }

    /// A sequence with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_state(Source::Exhausted, Vec::new())
    }

    fn with_state(source: Source<A>, items: Vec<A>) -> Self {
        Self {
            state: Rc::new(RefCell::new(State { source, items })),
        }
    }
}

impl<A> LazySequence<A> {
    /// Pulls from the source until `wanted` elements are realized, or until
    /// the source is exhausted when `wanted` is `None`.
    fn realize(&self, wanted: Option<usize>, index: isize) -> Result<(), LazySequenceError> {
        loop {
            let mut state = self.state.borrow_mut();
            if wanted.is_some_and(|wanted| state.items.len() >= wanted) {
                return Ok(());
            }
            let mut iterator = match std::mem::replace(&mut state.source, Source::Detached) {
                Source::Pending(iterator) => iterator,
                Source::Exhausted => {
                    state.source = Source::Exhausted;
                    return Ok(());
                }
                Source::Detached => {
                    tracing::trace!(index, "lazy sequence source is unavailable");
                    return Err(LazySequenceError::SourceUnavailable { index });
                }
            };
            drop(state);

            let next = iterator.next();

            let mut state = self.state.borrow_mut();
            if let Some(item) = next {
                state.items.push(item);
                state.source = Source::Pending(iterator);
            } else {
                state.source = Source::Exhausted;
                tracing::trace!(length = state.items.len(), "lazy sequence source exhausted");
                drop(state);
                drop(iterator);
                return Ok(());
            }
        }
    }

    /// Realizes every remaining element. Idempotent.
    ///
    /// When the source is unavailable (the sequence is being read from inside
    /// its own source, or the source panicked) forcing stops at the elements
    /// realized so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::LazySequence;
    ///
    /// let sequence = LazySequence::new(vec![1, 2, 3]);
    /// assert_eq!(sequence.realized_len(), 0);
    /// assert_eq!(sequence.force().realized_len(), 3);
    /// assert!(sequence.is_exhausted());
    /// ```
    pub fn force(&self) -> &Self {
        if self.is_exhausted() {
            return self;
        }
        match self.realize(None, -1) {
            Ok(()) => tracing::debug!(length = self.realized_len(), "lazy sequence forced"),
            Err(error) => tracing::debug!(%error, "lazy sequence partially forced"),
        }
        self
    }

    /// Number of elements realized so far. Never pulls from the source.
    pub fn realized_len(&self) -> usize {
        self.state.borrow().items.len()
    }

    /// Whether the source has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state.borrow().source, Source::Exhausted)
    }

    /// Total number of elements. Forces the whole sequence.
    pub fn len(&self) -> usize {
        self.force().realized_len()
    }

    /// Whether the sequence has no elements. Pulls at most one element.
    pub fn is_empty(&self) -> bool {
        if self.realize(Some(1), 0).is_err() {
            tracing::trace!("emptiness decided from realized elements only");
        }
        self.realized_len() == 0
    }

    /// Whether two handles share the same buffer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<A: Clone> LazySequence<A> {
    /// Returns the element at `index`, pulling from the source as needed.
    ///
    /// Negative indices count from the end and therefore realize the whole
    /// source first.
    ///
    /// # Errors
    ///
    /// - [`LazySequenceError::OutOfRange`] when the sequence is shorter than
    ///   the index requires
    /// - [`LazySequenceError::SourceUnavailable`] when an element must be
    ///   pulled while the source is in use or has panicked
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::{LazySequence, LazySequenceError};
    ///
    /// let sequence = LazySequence::new("abc".chars());
    /// assert_eq!(sequence.get(-1), Ok('c'));
    /// assert_eq!(
    ///     sequence.get(3),
    ///     Err(LazySequenceError::OutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn get(&self, index: isize) -> Result<A, LazySequenceError> {
        if let Ok(position) = usize::try_from(index) {
            return self
                .fetch(position, index)?
                .ok_or_else(|| LazySequenceError::OutOfRange {
                    index,
                    length: self.realized_len(),
                });
        }

        self.realize(None, index)?;
        let state = self.state.borrow();
        state
            .items
            .len()
            .checked_sub(index.unsigned_abs())
            .and_then(|position| state.items.get(position))
            .cloned()
            .ok_or(LazySequenceError::OutOfRange {
                index,
                length: state.items.len(),
            })
    }

    fn fetch(&self, position: usize, index: isize) -> Result<Option<A>, LazySequenceError> {
        self.realize(Some(position.saturating_add(1)), index)?;
        Ok(self.state.borrow().items.get(position).cloned())
    }

    /// Iterates over clones of the elements, realizing them on demand.
    ///
    /// Several iterators may interleave over the same sequence.
    pub fn iter(&self) -> Iter<A> {
        Iter {
            sequence: self.clone(),
            position: 0,
        }
    }

    /// Copies out the realized elements without pulling.
    pub fn realized(&self) -> Vec<A> {
        self.state.borrow().items.clone()
    }
}

impl<A: Clone + 'static> LazySequence<A> {
    /// A lazy view of the elements whose positions fall in `range`.
    ///
    /// Nothing is pulled until the slice itself is read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monads::control::LazySequence;
    ///
    /// let naturals = LazySequence::new(0..);
    /// let window = naturals.slice(10..13);
    /// assert_eq!(naturals.realized_len(), 0);
    /// assert_eq!(window.iter().collect::<Vec<_>>(), vec![10, 11, 12]);
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = resolve_range(&range);
        let skipped = self.iter().skip(start);
        match end {
            Some(end) => Self::new(skipped.take(end.saturating_sub(start))),
            None => Self::new(skipped),
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
        if step == 0 {
            return Err(LazySequenceError::ZeroStep);
        }
        let (start, end) = resolve_range(&range);
        let skipped = self.iter().skip(start);
        Ok(match end {
            Some(end) => Self::new(skipped.take(end.saturating_sub(start)).step_by(step)),
            None => Self::new(skipped.step_by(step)),
        })
    }
}

fn resolve_range<R: RangeBounds<usize>>(range: &R) -> (usize, Option<usize>) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => Some(end.saturating_add(1)),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => None,
    };
    (start, end)
}

impl<A: 'static> Default for LazySequence<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: 'static> From<Vec<A>> for LazySequence<A> {
    /// An already realized sequence.
    fn from(items: Vec<A>) -> Self {
        Self::with_state(Source::Exhausted, items)
    }
}

impl<A: 'static> FromIterator<A> for LazySequence<A> {
    /// Collects eagerly: the iterator may borrow, so it cannot be stored.
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator over a [`LazySequence`], created by [`LazySequence::iter`].
pub struct Iter<A> {
    sequence: LazySequence<A>,
    position: usize,
}

impl<A: Clone> Iterator for Iter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let index = isize::try_from(self.position).unwrap_or(isize::MAX);
        match self.sequence.fetch(self.position, index) {
            Ok(Some(item)) => {
                self.position += 1;
                Some(item)
            }
            Ok(None) => None,
            Err(error) => {
                tracing::trace!(%error, "lazy sequence iteration stopped");
                None
            }
        }
    }

    fn nth(&mut self, n: usize) -> Option<A> {
        self.position = self.position.saturating_add(n);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.realized_len().saturating_sub(self.position);
        if self.sequence.is_exhausted() {
            (remaining, Some(remaining))
        } else {
            (remaining, None)
        }
    }
}

impl<A: Clone> IntoIterator for LazySequence<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Iter<A> {
        Iter {
            sequence: self,
            position: 0,
        }
    }
}

impl<A: Clone> IntoIterator for &LazySequence<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Iter<A> {
        self.iter()
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<A: PartialEq> PartialEq for LazySequence<A> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.force();
        other.force();
        self.state.borrow().items == other.state.borrow().items
    }
}

impl<A: Eq> Eq for LazySequence<A> {}

impl<A: PartialOrd> PartialOrd for LazySequence<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.ptr_eq(other) {
            return Some(Ordering::Equal);
        }
        self.force();
        other.force();
        self.state
            .borrow()
            .items
            .partial_cmp(&other.state.borrow().items)
    }
}

impl<A: Ord> Ord for LazySequence<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.force();
        other.force();
        self.state.borrow().items.cmp(&other.state.borrow().items)
    }
}

impl<A: fmt::Debug> fmt::Debug for LazySequence<A> {
    /// Shows the realized elements only.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => formatter
                .debug_struct("LazySequence")
                .field("realized", &state.items)
                .field("exhausted", &matches!(state.source, Source::Exhausted))
                .finish(),
            Err(_) => formatter.debug_struct("LazySequence").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counting(limit: Option<u32>) -> (LazySequence<u32>, Rc<Cell<u32>>) {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let source = (0..).take_while(move |&n| limit.is_none_or(|limit| n < limit));
        let sequence = LazySequence::new(source.inspect(move |_| counter.set(counter.get() + 1)));
        (sequence, pulls)
    }

    // =========================================================================
    // Laziness
    // =========================================================================

    #[rstest]
    fn new_does_not_pull() {
        let (sequence, pulls) = counting(None);
        assert_eq!(pulls.get(), 0);
        assert_eq!(sequence.realized_len(), 0);
    }

    #[rstest]
    fn get_pulls_only_up_to_index() {
        let (sequence, pulls) = counting(None);
        assert_eq!(sequence.get(4), Ok(4));
        assert_eq!(pulls.get(), 5);
    }

    #[rstest]
    fn realized_elements_are_never_pulled_again() {
        let (sequence, pulls) = counting(None);
        assert_eq!(sequence.get(9), Ok(9));
        assert_eq!(sequence.get(3), Ok(3));
        assert_eq!(sequence.get(9), Ok(9));
        assert_eq!(pulls.get(), 10);
    }

    #[rstest]
    fn clones_share_realized_elements() {
        let (sequence, pulls) = counting(None);
        let other = sequence.clone();
        assert_eq!(sequence.get(2), Ok(2));
        assert_eq!(other.realized_len(), 3);
        assert_eq!(other.get(1), Ok(1));
        assert_eq!(pulls.get(), 3);
    }

    #[rstest]
    fn iterating_infinite_source_stops_early() {
        let (sequence, pulls) = counting(None);
        let first: Vec<u32> = sequence.iter().take(3).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert!(!sequence.is_exhausted());
        assert_eq!(pulls.get(), 3);
    }

    #[rstest]
    fn interleaved_iterators_share_one_buffer() {
        let (sequence, pulls) = counting(Some(4));
        let mut first = sequence.iter();
        let mut second = sequence.iter();
        assert_eq!(first.next(), Some(0));
        assert_eq!(second.next(), Some(0));
        assert_eq!(second.next(), Some(1));
        assert_eq!(first.next(), Some(1));
        assert_eq!(pulls.get(), 2);
    }

    // =========================================================================
    // Index access
    // =========================================================================

    #[rstest]
    #[case(0, Ok(0))]
    #[case(2, Ok(2))]
    #[case(3, Err(LazySequenceError::OutOfRange { index: 3, length: 3 }))]
    #[case(-1, Ok(2))]
    #[case(-3, Ok(0))]
    #[case(-4, Err(LazySequenceError::OutOfRange { index: -4, length: 3 }))]
    fn get_on_finite_source(#[case] index: isize, #[case] expected: Result<u32, LazySequenceError>) {
        let (sequence, _) = counting(Some(3));
        assert_eq!(sequence.get(index), expected);
    }

    #[rstest]
    fn negative_index_exhausts_source() {
        let (sequence, _) = counting(Some(5));
        assert_eq!(sequence.get(-2), Ok(3));
        assert!(sequence.is_exhausted());
    }

    #[rstest]
    fn reentrant_read_reports_unavailable_source() {
        let slot: Rc<RefCell<Option<LazySequence<isize>>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let source = (0..3).map(move |n| {
            let seen = inner
                .borrow()
                .as_ref()
                .map(|sequence| sequence.get(10));
            match seen {
                Some(Err(LazySequenceError::SourceUnavailable { index: 10 })) => -1,
                _ => n,
            }
        });
        let sequence = LazySequence::new(source);
        *slot.borrow_mut() = Some(sequence.clone());

        assert_eq!(sequence.get(0), Ok(-1));
        slot.borrow_mut().take();
    }

    #[rstest]
    fn reentrant_read_of_realized_element_succeeds() {
        let slot: Rc<RefCell<Option<LazySequence<u64>>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        // Each element is the previous one plus its position.
        let source = (0_u64..).map(move |position| {
            let previous = isize::try_from(position).ok().and_then(|index| {
                inner
                    .borrow()
                    .as_ref()
                    .and_then(|sequence| sequence.get(index - 1).ok())
            });
            previous.map_or(0, |previous| previous + position)
        });
        let sequence = LazySequence::new(source);
        *slot.borrow_mut() = Some(sequence.clone());

        let triangular: Vec<u64> = sequence.iter().take(5).collect();
        assert_eq!(triangular, vec![0, 1, 3, 6, 10]);
        slot.borrow_mut().take();
    }

    #[rstest]
    fn panicking_source_becomes_unavailable() {
        let sequence = LazySequence::new((0..3).map(|n| if n == 1 { panic!("boom") } else { n }));
        assert_eq!(sequence.get(0), Ok(0));
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sequence.get(1)));
        assert!(outcome.is_err());
        assert_eq!(
            sequence.get(1),
            Err(LazySequenceError::SourceUnavailable { index: 1 })
        );
        assert_eq!(sequence.get(0), Ok(0));
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    #[rstest]
    fn slice_is_lazy() {
        let (sequence, pulls) = counting(None);
        let window = sequence.slice(3..5);
        assert_eq!(pulls.get(), 0);
        assert_eq!(window.get(0), Ok(3));
        assert_eq!(pulls.get(), 4);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[rstest]
    #[case(..20, 2, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18])]
    #[case(..5, 1, vec![0, 1, 2, 3, 4])]
    #[case(..5, 10, vec![0])]
    fn step_slice_from_start(
        #[case] range: std::ops::RangeTo<usize>,
        #[case] step: usize,
        #[case] expected: Vec<u32>,
    ) {
        let (sequence, _) = counting(None);
        let stepped = sequence.step_slice(range, step).unwrap();
        assert_eq!(stepped.iter().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn step_slice_rejects_zero_step() {
        let (sequence, _) = counting(None);
        assert_eq!(sequence.step_slice(.., 0).err(), Some(LazySequenceError::ZeroStep));
    }

    #[rstest]
    fn slice_past_end_is_empty() {
        let (sequence, _) = counting(Some(3));
        assert!(sequence.slice(5..).is_empty());
        assert_eq!(sequence.slice(1..=10).len(), 2);
    }

    // =========================================================================
    // Forcing, length and comparison
    // =========================================================================

    #[rstest]
    fn force_is_idempotent() {
        let (sequence, pulls) = counting(Some(4));
        sequence.force();
        sequence.force();
        assert_eq!(sequence.realized_len(), 4);
        assert_eq!(pulls.get(), 4);
    }

    #[rstest]
    fn is_empty_pulls_at_most_one() {
        let (sequence, pulls) = counting(None);
        assert!(!sequence.is_empty());
        assert_eq!(pulls.get(), 1);
        assert!(LazySequence::<u8>::empty().is_empty());
    }

    #[rstest]
    fn equality_forces_both_sides() {
        let left = LazySequence::new(vec![1, 2, 3]);
        let right = LazySequence::new(1..4);
        assert_eq!(left, right);
        assert!(left.is_exhausted());
        assert!(right.is_exhausted());
        assert_ne!(left, LazySequence::new(1..3));
    }

    #[rstest]
    fn equality_with_itself_does_not_force() {
        let (sequence, pulls) = counting(None);
        assert_eq!(sequence, sequence.clone());
        assert_eq!(pulls.get(), 0);
    }

    #[rstest]
    fn ordering_compares_realized_buffers() {
        let shorter = LazySequence::new(vec![1, 2]);
        let longer = LazySequence::new(vec![1, 2, 0]);
        let bigger = LazySequence::new(vec![2]);
        assert!(shorter < longer);
        assert!(longer < bigger);
        assert_eq!(shorter.cmp(&shorter.clone()), Ordering::Equal);
    }

    #[rstest]
    fn debug_shows_only_realized_elements() {
        let (sequence, pulls) = counting(None);
        assert_eq!(sequence.get(1), Ok(1));
        let shown = format!("{sequence:?}");
        assert_eq!(shown, "LazySequence { realized: [0, 1], exhausted: false }");
        assert_eq!(pulls.get(), 2);
    }

    #[rstest]
    fn from_vec_is_already_realized() {
        let sequence = LazySequence::from(vec!['a', 'b']);
        assert!(sequence.is_exhausted());
        assert_eq!(sequence.realized(), vec!['a', 'b']);
    }

    #[rstest]
    fn size_hint_is_exact_once_exhausted() {
        let sequence = LazySequence::new(vec![1, 2, 3]);
        sequence.force();
        let mut iter = sequence.iter();
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }
}
