use super::{Cloned, Cursor, Position, Sequence};

/// A [`Cursor`] over a borrowed slice, reading elements by reference.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    position: Position,
}

impl<'a, T> SliceCursor<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self {
            slice,
            position: Position::default(),
        }
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            position: self.position,
        }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn advance(&mut self) -> bool {
        self.position.advance(self.slice.len())
    }

    #[inline]
    fn current(&self) -> Option<&'a T> {
        self.position
            .index()
            .and_then(|index| self.slice.get(index))
    }

    #[inline]
    fn reset(&mut self) {
        self.position.reset();
    }
}

impl<'s, T> Sequence for &'s [T] {
    type Item = &'s T;

    type Cursor<'a>
        = SliceCursor<'s, T>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(*self)
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    type Cursor<'a>
        = Cloned<SliceCursor<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self).cloned()
    }
}

/// Arrays have an inherent `map` that takes precedence over [`Sequence::map()`]
/// and returns an array eagerly. Go through [`by_ref()`](Sequence::by_ref) or
/// `as_slice()` to build a lazy [`Map`](crate::adapters::Map).
impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    type Cursor<'a>
        = Cloned<SliceCursor<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self).cloned()
    }
}
