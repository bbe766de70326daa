use std::fmt::Debug;

use crate::sequence::{Cursor, Sequence};

/// A [`Sequence`] of the upstream elements that satisfy a predicate.
///
/// This `struct` is created by [`Sequence::filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    pred: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, pred: P) -> Self {
        Self { source, pred }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    type Cursor<'a>
        = FilterCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            cursor: self.source.cursor(),
            pred: &self.pred,
        }
    }
}

impl<S: Debug, P> Debug for Filter<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .finish()
    }
}

/// The [`Cursor`] of [`Filter`].
///
/// Every step advances the upstream first and only then tests its element,
/// so no candidate is skipped and none is tested before it exists.
pub struct FilterCursor<'a, C, P> {
    cursor: C,
    pred: &'a P,
}

impl<C, P> Cursor for FilterCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        while self.cursor.advance() {
            if let Some(item) = self.cursor.current()
                && (self.pred)(&item)
            {
                return true;
            }
        }

        false
    }

    #[inline]
    fn current(&self) -> Option<C::Item> {
        self.cursor.current()
    }

    #[inline]
    fn reset(&mut self) {
        self.cursor.reset();
    }
}

impl<C: Clone, P> Clone for FilterCursor<'_, C, P> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            pred: self.pred,
        }
    }
}

impl<C: Debug, P> Debug for FilterCursor<'_, C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterCursor")
            .field("cursor", &self.cursor)
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::test_utils::test_sequence;

    proptest! {
        #[test]
        fn matches_iterator_filter(nums in propvec(any::<i8>(), ..=12), modulus in 1..4_i8) {
            let pred = |x: &i8| x.rem_euclid(modulus) == 0;
            let expected: Vec<_> = nums.iter().copied().filter(pred).collect();
            test_sequence(&nums.by_ref().filter(pred), &expected)?;
        }
    }
}
