use std::{collections::HashMap, hash::Hash};

use crate::{
    Result, SortOrder,
    adapters::{Filter, GroupBy, Map, OrderBy},
    materialize,
};

use super::{ByRef, Cursor, Values, assert_sequence};

/// A producer of [`Cursor`]s over values of one type.
///
/// A sequence holds no position. Every call to [`cursor()`](Sequence::cursor)
/// returns an independent cursor starting before the first element.
///
/// The adapter methods take the upstream by value, like [`Iterator`] adapters do.
/// Use [`by_ref()`](Sequence::by_ref) to build an adapter over a borrowed sequence instead.
pub trait Sequence {
    /// The type of the elements.
    type Item;

    /// The cursor this sequence produces.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Creates a new cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Creates a [`Sequence`] that calls a closure on each element.
    ///
    /// The closure runs when an element is *read*, not when the cursor advances.
    /// Reading the same position twice runs it twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::prelude::*;
    ///
    /// let lengths = vec!["a", "bcd", "ef"].map(|s| s.len());
    ///
    /// assert_eq!(lengths.to_list(), [1, 3, 2]);
    /// ```
    #[inline]
    fn map<F, R>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R,
    {
        assert_sequence(Map::new(self, f))
    }

    /// Creates a [`Sequence`] of only the elements that satisfy `pred`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::prelude::*;
    ///
    /// let evens = vec![1, 2, 3, 4, 6].filter(|&x| x % 2 == 0);
    ///
    /// assert_eq!(evens.to_list(), [2, 4, 6]);
    /// ```
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        assert_sequence(Filter::new(self, pred))
    }

    /// Creates a [`Sequence`] of [`Grouping`](crate::Grouping)s, one per distinct key,
    /// in the order each key was first seen.
    ///
    /// Nothing happens until a cursor is requested. Each new cursor drains the
    /// upstream again and rebuilds the groups from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::prelude::*;
    ///
    /// let groups = vec![1, 2, 1, 3, 2].group_by(|&x| x).to_list();
    ///
    /// let keys: Vec<_> = groups.iter().map(|group| *group.key()).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// assert_eq!(groups[0].as_slice(), [1, 1]);
    /// assert_eq!(groups[2].as_slice(), [3]);
    /// ```
    #[inline]
    fn group_by<F, K>(self, key: F) -> GroupBy<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash + Clone,
    {
        assert_sequence(GroupBy::new(self, key))
    }

    /// Creates a [`Sequence`] of the same elements, ordered by the key `key` extracts.
    ///
    /// The sort is a deterministic quicksort and is **not** stable: elements with
    /// equal keys may come out in a different relative order than they went in.
    ///
    /// Nothing happens until a cursor is requested. Each new cursor drains the
    /// upstream again and sorts from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{prelude::*, SortOrder};
    ///
    /// let words = vec!["ccc", "a", "bb"];
    ///
    /// assert_eq!(
    ///     words.by_ref().order_by(|s| s.len(), SortOrder::Ascending).to_list(),
    ///     ["a", "bb", "ccc"],
    /// );
    /// assert_eq!(
    ///     words.order_by(|s| s.len(), SortOrder::Descending).to_list(),
    ///     ["ccc", "bb", "a"],
    /// );
    /// ```
    #[inline]
    fn order_by<F, K>(self, key: F, order: SortOrder) -> OrderBy<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        assert_sequence(OrderBy::new(self, key, order))
    }

    /// Shorthand for [`order_by(key, SortOrder::Descending)`](Sequence::order_by).
    #[inline]
    fn order_by_descending<F, K>(self, key: F) -> OrderBy<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        self.order_by(key, SortOrder::Descending)
    }

    /// Borrows the sequence so that adapters can be built over it without moving it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::prelude::*;
    ///
    /// let nums = vec![1, 2, 3];
    /// let doubled = nums.by_ref().map(|x| x * 2);
    ///
    /// assert_eq!(doubled.to_list(), [2, 4, 6]);
    /// assert_eq!(nums, [1, 2, 3]);
    /// ```
    #[inline]
    fn by_ref(&self) -> ByRef<'_, Self> {
        assert_sequence(ByRef::new(self))
    }

    /// Returns an [`Iterator`] over a fresh cursor.
    #[inline]
    fn values(&self) -> Values<Self::Cursor<'_>> {
        self.cursor().values()
    }

    /// Drains a fresh cursor into a [`Vec`], preserving order.
    #[inline]
    fn to_list(&self) -> Vec<Self::Item> {
        materialize::to_list(self)
    }

    /// Drains a fresh cursor into a [`HashMap`] keyed by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`](crate::Error::DuplicateKey) as soon as two
    /// elements produce the same key. No partial map is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::{prelude::*, Error};
    ///
    /// let pairs = vec![("a", 1), ("b", 2)];
    /// let map = pairs.to_dictionary(|&(name, _)| name).unwrap();
    /// assert_eq!(map["b"], ("b", 2));
    ///
    /// let pairs = vec![("a", 1), ("a", 2)];
    /// assert_eq!(
    ///     pairs.to_dictionary(|&(name, _)| name),
    ///     Err(Error::DuplicateKey { index: 1 }),
    /// );
    /// ```
    #[inline]
    fn to_dictionary<F, K>(&self, key: F) -> Result<HashMap<K, Self::Item>>
    where
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        materialize::to_dictionary(self, key)
    }
}
