use super::Cursor;

/// A [`Cursor`] that clones the elements of an underlying cursor over references.
///
/// This `struct` is created by [`Cursor::cloned()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Cloned<C>(C);

impl<C> Cloned<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self(cursor)
    }
}

impl<'a, C, T> Cursor for Cloned<C>
where
    C: Cursor<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    #[inline]
    fn advance(&mut self) -> bool {
        self.0.advance()
    }

    #[inline]
    fn current(&self) -> Option<T> {
        self.0.current().cloned()
    }

    #[inline]
    fn reset(&mut self) {
        self.0.reset()
    }
}
