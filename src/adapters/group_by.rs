use std::{
    collections::{HashMap, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
    rc::Rc,
};

use crate::{
    Grouping,
    sequence::{BufferCursor, Sequence},
};

/// A [`Sequence`] of [`Grouping`]s, one per distinct key, in first-seen key order.
///
/// This `struct` is created by [`Sequence::group_by()`]. See its documentation for more.
///
/// Every call to [`cursor()`](Sequence::cursor) drains the upstream and rebuilds
/// all groups. The key selector runs there, so a panicking key selector panics
/// out of `cursor()` rather than out of the first [`advance()`](crate::sequence::Cursor::advance).
#[derive(Clone)]
pub struct GroupBy<S, F> {
    source: S,
    key: F,
}

impl<S, F> GroupBy<S, F> {
    pub(crate) fn new(source: S, key: F) -> Self {
        Self { source, key }
    }
}

impl<S, F, K> Sequence for GroupBy<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Eq + Hash + Clone,
{
    type Item = Rc<Grouping<K, S::Item>>;

    type Cursor<'a>
        = BufferCursor<Rc<Grouping<K, S::Item>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<Grouping<K, S::Item>> = Vec::new();
        let mut len = 0_usize;

        for item in self.source.values() {
            len += 1;
            match slots.entry((self.key)(&item)) {
                Entry::Occupied(slot) => groups[*slot.get()].push(item),
                Entry::Vacant(slot) => {
                    groups.push(Grouping::new(slot.key().clone(), item));
                    slot.insert(groups.len() - 1);
                }
            }
        }

        tracing::trace!(len, groups = groups.len(), "grouped sequence materialized");
        BufferCursor::new(groups.into_iter().map(Rc::new).collect())
    }
}

impl<S: Debug, F> Debug for GroupBy<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupBy")
            .field("source", &self.source)
            .finish()
    }
}
