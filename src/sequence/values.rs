use std::iter::FusedIterator;

use super::Cursor;

/// An [`Iterator`] over the elements of a [`Cursor`].
///
/// Each call to [`next()`](Iterator::next) advances the cursor, then reads it.
///
/// This `struct` is created by [`Cursor::values()`] and
/// [`Sequence::values()`](super::Sequence::values).
#[derive(Debug, Clone)]
pub struct Values<C> {
    cursor: C,
}

impl<C> Values<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the underlying cursor, positioned on the last element yielded.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Values<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.current()
        } else {
            None
        }
    }
}

impl<C: Cursor> FusedIterator for Values<C> {}
