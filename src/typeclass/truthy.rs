//! Boolean coercion of values.
//!
//! [`Truthy`] decides whether a value counts as present or successful:
//! `false`, zero, empty strings and collections, `None`, `Nothing`, `Left` and
//! the empty `List` are falsy, everything else is truthy. It drives
//! `Maybe::from_value` and the `tryout` and `first_where` helpers.
//!
//! # Examples
//!
//! ```rust
//! use monads::typeclass::Truthy;
//!
//! assert!(1.is_truthy());
//! assert!(!0.0_f64.is_truthy());
//! assert!(!"".is_truthy());
//! assert!(vec![()].is_truthy());
//! ```

/// Types with a notion of truthiness.
pub trait Truthy {
    /// Returns `true` when the value is truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_floats {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                /// `NaN` is truthy; only positive and negative zero are falsy.
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
