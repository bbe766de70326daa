use crate::sequence::{Cloned, Cursor, Sequence, SliceCursor};

/// A key and the elements that mapped to it, in their original relative order.
///
/// Groupings are produced by [`group_by()`](Sequence::group_by) and handed out
/// behind an [`Rc`](std::rc::Rc), so they are read-only once the caller sees them.
///
/// A grouping is itself a [`Sequence`] over its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, V> {
    key: K,
    values: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    pub(crate) fn new(key: K, first: V) -> Self {
        Self {
            key,
            values: vec![first],
        }
    }

    pub(crate) fn push(&mut self, value: V) {
        self.values.push(value);
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The elements of this group.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for groupings built by [`group_by()`](Sequence::group_by),
    /// since a group only exists once an element has been seen for its key.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V: Clone> Sequence for Grouping<K, V> {
    type Item = V;

    type Cursor<'a>
        = Cloned<SliceCursor<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(&self.values).cloned()
    }
}
