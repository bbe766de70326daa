//! The in-place key sort behind [`order_by()`](crate::sequence::Sequence::order_by).

/// Direction of an [`order_by()`](crate::sequence::Sequence::order_by).
///
/// The direction belongs to one adapter. Two orderings over the same types
/// with different directions never affect each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortOrder {
    #[inline]
    pub const fn is_descending(self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    /// Returns the opposite direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::SortOrder;
    ///
    /// assert_eq!(SortOrder::Ascending.reverse(), SortOrder::Descending);
    /// assert_eq!(SortOrder::default().reverse().reverse(), SortOrder::Ascending);
    /// ```
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Whether `key` belongs in the low partition relative to `pivot`.
    ///
    /// This comparison is the only thing the direction changes.
    /// Keys that do not compare (`partial_cmp` is `None`) never do.
    #[inline]
    fn goes_before<K: PartialOrd + ?Sized>(self, key: &K, pivot: &K) -> bool {
        match self {
            SortOrder::Ascending => key <= pivot,
            SortOrder::Descending => key >= pivot,
        }
    }
}

/// Sorts `(key, value)` pairs in place by key.
///
/// Quicksort with the last element of each range as pivot and a single
/// left-to-right partition scan. Not stable, and quadratic on already sorted
/// input. The smaller side is sorted recursively and the larger one in a loop,
/// which bounds the stack depth without changing the resulting order.
pub(crate) fn quicksort_by_key<K, V>(mut buffer: &mut [(K, V)], order: SortOrder)
where
    K: PartialOrd,
{
    while buffer.len() > 1 {
        let pivot = partition(buffer, order);
        let (low, rest) = std::mem::take(&mut buffer).split_at_mut(pivot);
        let high = &mut rest[1..];

        if low.len() < high.len() {
            quicksort_by_key(low, order);
            buffer = high;
        } else {
            quicksort_by_key(high, order);
            buffer = low;
        }
    }
}

/// Returns the final index of the pivot.
fn partition<K, V>(buffer: &mut [(K, V)], order: SortOrder) -> usize
where
    K: PartialOrd,
{
    let last = buffer.len() - 1;
    let mut store = 0;

    for index in 0..last {
        if order.goes_before(&buffer[index].0, &buffer[last].0) {
            buffer.swap(index, store);
            store += 1;
        }
    }

    buffer.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::{SortOrder, partition, quicksort_by_key};

    fn keyed<V: Copy>(pairs: &[(i32, V)]) -> Vec<(i32, V)> {
        pairs.to_vec()
    }

    #[test]
    fn partition_places_pivot() {
        let mut buffer = keyed(&[(5, ()), (1, ()), (4, ()), (2, ()), (3, ())]);
        let pivot = partition(&mut buffer, SortOrder::Ascending);

        assert_eq!(pivot, 2);
        assert_eq!(buffer[pivot].0, 3);
        assert!(buffer[..pivot].iter().all(|&(key, _)| key <= 3));
        assert!(buffer[pivot + 1..].iter().all(|&(key, _)| key > 3));
    }

    #[test]
    fn last_element_pivot_is_deterministic_and_unstable() {
        let mut buffer = keyed(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        quicksort_by_key(&mut buffer, SortOrder::Ascending);

        let values: String = buffer.iter().map(|&(_, value)| value).collect();
        assert_eq!(values, "bdca");
    }

    #[test]
    fn descending_flips_only_the_comparison() {
        let mut buffer = keyed(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        quicksort_by_key(&mut buffer, SortOrder::Descending);

        let values: String = buffer.iter().map(|&(_, value)| value).collect();
        assert_eq!(values, "acbd");
    }

    #[test]
    fn sorted_input_does_not_overflow_the_stack() {
        let mut buffer: Vec<_> = (0..10_000).map(|key| (key, ())).collect();
        quicksort_by_key(&mut buffer, SortOrder::Ascending);
        assert!(buffer.is_sorted_by_key(|&(key, _)| key));

        quicksort_by_key(&mut buffer, SortOrder::Descending);
        assert!(buffer.is_sorted_by_key(|&(key, _)| std::cmp::Reverse(key)));
    }

    #[test]
    fn tiny() {
        let mut empty: Vec<(u8, ())> = vec![];
        quicksort_by_key(&mut empty, SortOrder::Ascending);

        let mut single = keyed(&[(7, ())]);
        quicksort_by_key(&mut single, SortOrder::Descending);
        assert_eq!(single, [(7, ())]);
    }

    #[test]
    fn incomparable_keys_stay_out_of_the_low_partition() {
        let mut buffer = vec![(f64::NAN, 0), (1.0, 1), (0.5, 2)];
        let pivot = partition(&mut buffer, SortOrder::Ascending);

        assert_eq!(pivot, 0);
        assert_eq!(buffer[0].1, 2);
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use super::{SortOrder, quicksort_by_key};

    proptest! {
        #[test]
        fn orders_keys_and_keeps_multiset(
            keys in propvec(-8..8_i32, ..=40),
            descending in any::<bool>(),
        ) {
            orders_keys_and_keeps_multiset_impl(keys, descending)?;
        }
    }

    fn orders_keys_and_keeps_multiset_impl(keys: Vec<i32>, descending: bool) -> TestCaseResult {
        let order = if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        let mut buffer: Vec<_> = keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect();
        quicksort_by_key(&mut buffer, order);

        let sorted_keys = buffer.iter().map(|&(key, _)| key);
        if order.is_descending() {
            prop_assert!(sorted_keys.tuple_windows().all(|(a, b)| a >= b));
        } else {
            prop_assert!(sorted_keys.tuple_windows().all(|(a, b)| a <= b));
        }

        let origins = buffer.iter().map(|&(_, origin)| origin).sorted().collect_vec();
        prop_assert_eq!(origins, (0..keys.len()).collect_vec());
        prop_assert!(buffer.iter().all(|&(key, origin)| keys[origin] == key));

        Ok(())
    }
}
