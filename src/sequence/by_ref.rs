use super::Sequence;

/// A [`Sequence`] that borrows its upstream instead of owning it.
///
/// This `struct` is created by [`Sequence::by_ref()`]. See its documentation for more.
#[derive(Debug)]
pub struct ByRef<'a, S: ?Sized>(&'a S);

impl<'a, S: ?Sized> ByRef<'a, S> {
    pub(crate) fn new(sequence: &'a S) -> Self {
        Self(sequence)
    }
}

impl<S: ?Sized> Clone for ByRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for ByRef<'_, S> {}

impl<'s, S> Sequence for ByRef<'s, S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    type Cursor<'a>
        = S::Cursor<'s>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.0.cursor()
    }
}
