use std::ops::{Range, RangeFrom};

use super::{Cursor, Sequence};

/// Integer types whose ranges are [`Sequence`]s.
///
/// This trait is sealed and implemented for the primitive integer types.
#[allow(private_bounds)]
pub trait Step: Copy + PartialOrd + Sealed {
    #[doc(hidden)]
    fn successor(self) -> Option<Self>;
}

trait Sealed {}

macro_rules! impl_step {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}

            impl Step for $ty {
                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A [`Cursor`] counting up from a start value, optionally up to an exclusive end.
///
/// A cursor over an unbounded [`Count`] never ends on its own, except when the
/// integer type has no successor left.
#[derive(Debug, Clone)]
pub struct RangeCursor<T> {
    start: T,
    end: Option<T>,
    current: Option<T>,
    exhausted: bool,
}

impl<T> RangeCursor<T> {
    fn new(start: T, end: Option<T>) -> Self {
        Self {
            start,
            end,
            current: None,
            exhausted: false,
        }
    }
}

impl<T: Step> Cursor for RangeCursor<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        let next = match self.current {
            None => Some(self.start),
            Some(value) => value.successor(),
        }
        .filter(|&next| self.end.is_none_or(|end| next < end));

        self.current = next;
        self.exhausted = next.is_none();
        !self.exhausted
    }

    #[inline]
    fn current(&self) -> Option<T> {
        self.current
    }

    #[inline]
    fn reset(&mut self) {
        self.current = None;
        self.exhausted = false;
    }
}

/// A [`Sequence`] of consecutive integers.
///
/// Created by [`range()`] and [`count_from()`]. A `Count` is a separate type rather
/// than a `Sequence` impl on [`Range`] because ranges are already iterators,
/// and the adapter method names would be ambiguous on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count<T> {
    start: T,
    end: Option<T>,
}

/// Creates a [`Sequence`] over the integers in `range`.
///
/// # Examples
///
/// ```
/// use lazy_seq::{prelude::*, sequence::range};
///
/// assert_eq!(range(2..5).to_list(), [2, 3, 4]);
/// ```
pub fn range<T: Step>(range: Range<T>) -> Count<T> {
    Count {
        start: range.start,
        end: Some(range.end),
    }
}

/// Creates an unbounded [`Sequence`] counting up from `start`.
///
/// The sequence only ends when the integer type has no successor left,
/// so it must be consumed lazily.
///
/// # Examples
///
/// ```
/// use lazy_seq::{prelude::*, sequence::count_from};
///
/// let squares = count_from(1_u64).map(|x| x * x);
/// let first: Vec<_> = squares.values().take(4).collect();
///
/// assert_eq!(first, [1, 4, 9, 16]);
/// ```
pub fn count_from<T: Step>(start: T) -> Count<T> {
    Count { start, end: None }
}

impl<T: Step> From<Range<T>> for Count<T> {
    fn from(value: Range<T>) -> Self {
        range(value)
    }
}

impl<T: Step> From<RangeFrom<T>> for Count<T> {
    fn from(value: RangeFrom<T>) -> Self {
        count_from(value.start)
    }
}

impl<T: Step> Sequence for Count<T> {
    type Item = T;

    type Cursor<'a>
        = RangeCursor<T>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        RangeCursor::new(self.start, self.end)
    }
}
