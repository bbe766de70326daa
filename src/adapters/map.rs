use std::fmt::Debug;

use crate::sequence::{Cursor, Sequence};

/// A [`Sequence`] that calls a closure on each element of its upstream.
///
/// This `struct` is created by [`Sequence::map()`]. See its documentation for more.
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;

    type Cursor<'a>
        = MapCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            cursor: self.source.cursor(),
            f: &self.f,
        }
    }
}

impl<S: Debug, F> Debug for Map<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .finish()
    }
}

/// The [`Cursor`] of [`Map`].
///
/// Advancing only advances the upstream. The closure runs on every
/// [`current()`](Cursor::current) read.
pub struct MapCursor<'a, C, F> {
    cursor: C,
    f: &'a F,
}

impl<C, F, R> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    #[inline]
    fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    #[inline]
    fn current(&self) -> Option<R> {
        self.cursor.current().map(self.f)
    }

    #[inline]
    fn reset(&mut self) {
        self.cursor.reset();
    }
}

impl<C: Clone, F> Clone for MapCursor<'_, C, F> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            f: self.f,
        }
    }
}

impl<C: Debug, F> Debug for MapCursor<'_, C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapCursor")
            .field("cursor", &self.cursor)
            .finish()
    }
}
