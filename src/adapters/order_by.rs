use std::fmt::Debug;

use crate::{
    SortOrder,
    sequence::{BufferCursor, Sequence},
    sort::quicksort_by_key,
};

/// A [`Sequence`] of the upstream elements, sorted by a key.
///
/// This `struct` is created by [`Sequence::order_by()`] and
/// [`Sequence::order_by_descending()`]. See their documentation for more.
///
/// Every call to [`cursor()`](Sequence::cursor) drains the upstream into a fresh
/// buffer of `(key, element)` pairs and sorts it. The keys are dropped once sorted.
#[derive(Clone)]
pub struct OrderBy<S, F> {
    source: S,
    key: F,
    order: SortOrder,
}

impl<S, F> OrderBy<S, F> {
    pub(crate) fn new(source: S, key: F, order: SortOrder) -> Self {
        Self { source, key, order }
    }

    /// The direction this adapter sorts in.
    #[inline]
    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl<S, F, K> Sequence for OrderBy<S, F>
where
    S: Sequence,
    S::Item: Clone,
    F: Fn(&S::Item) -> K,
    K: PartialOrd,
{
    type Item = S::Item;

    type Cursor<'a>
        = BufferCursor<S::Item>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let mut buffer: Vec<_> = self
            .source
            .values()
            .map(|item| ((self.key)(&item), item))
            .collect();

        quicksort_by_key(&mut buffer, self.order);
        tracing::trace!(len = buffer.len(), order = ?self.order, "ordered sequence materialized");

        BufferCursor::new(buffer.into_iter().map(|(_, item)| item).collect())
    }
}

impl<S: Debug, F> Debug for OrderBy<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBy")
            .field("source", &self.source)
            .field("order", &self.order)
            .finish()
    }
}
