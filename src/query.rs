//! Checked entry points for callers whose arguments may be absent.
//!
//! Every function here takes its required arguments as [`Option`]s and fails with
//! [`Error::MissingArgument`] when one is [`None`]. The check happens right away,
//! before any adapter is built and before any closure can run.
//! The source is checked first, then the closure.
//!
//! When the arguments are known to be present, the [`Sequence`] methods do the same
//! thing without the [`Result`].
//!
//! # Examples
//!
//! ```
//! use lazy_seq::{prelude::*, query, Error};
//!
//! let doubled = query::select(Some(vec![1, 2]), Some(|x: i32| x * 2)).unwrap();
//! assert_eq!(doubled.to_list(), [2, 4]);
//!
//! let missing = query::select(None::<Vec<i32>>, Some(|x: i32| x * 2));
//! assert_eq!(missing.unwrap_err(), Error::MissingArgument { name: "source" });
//! ```

use std::{collections::HashMap, hash::Hash};

use crate::{
    Error, Result, SortOrder,
    adapters::{Filter, GroupBy, Map, OrderBy},
    sequence::Sequence,
};

fn required<T>(argument: Option<T>, name: &'static str) -> Result<T> {
    argument.ok_or_else(|| Error::missing(name))
}

/// Checked [`Sequence::map()`].
pub fn select<S, F, R>(source: Option<S>, selector: Option<F>) -> Result<Map<S, F>>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    let source = required(source, "source")?;
    let selector = required(selector, "selector")?;
    Ok(source.map(selector))
}

/// Checked [`Sequence::filter()`].
pub fn filter<S, P>(source: Option<S>, predicate: Option<P>) -> Result<Filter<S, P>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let source = required(source, "source")?;
    let predicate = required(predicate, "predicate")?;
    Ok(source.filter(predicate))
}

/// Checked [`Sequence::group_by()`].
pub fn group_by<S, F, K>(source: Option<S>, key_selector: Option<F>) -> Result<GroupBy<S, F>>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Eq + Hash + Clone,
{
    let source = required(source, "source")?;
    let key_selector = required(key_selector, "key_selector")?;
    Ok(source.group_by(key_selector))
}

/// Checked [`Sequence::order_by()`].
pub fn order_by<S, F, K>(
    source: Option<S>,
    key_selector: Option<F>,
    order: SortOrder,
) -> Result<OrderBy<S, F>>
where
    S: Sequence,
    S::Item: Clone,
    F: Fn(&S::Item) -> K,
    K: PartialOrd,
{
    let source = required(source, "source")?;
    let key_selector = required(key_selector, "key_selector")?;
    Ok(source.order_by(key_selector, order))
}

/// Checked [`Sequence::to_list()`].
pub fn to_list<S>(source: Option<&S>) -> Result<Vec<S::Item>>
where
    S: Sequence + ?Sized,
{
    Ok(required(source, "source")?.to_list())
}

/// Checked [`Sequence::to_dictionary()`].
pub fn to_dictionary<S, F, K>(
    source: Option<&S>,
    key_selector: Option<F>,
) -> Result<HashMap<K, S::Item>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> K,
    K: Eq + Hash,
{
    let source = required(source, "source")?;
    let key_selector = required(key_selector, "key_selector")?;
    source.to_dictionary(key_selector)
}

#[cfg(test)]
mod tests {
    use crate::{Error, SortOrder, prelude::*, test_utils::CallCounter};

    use super::*;

    fn missing(name: &'static str) -> Error {
        Error::MissingArgument { name }
    }

    #[test]
    fn missing_source_never_runs_the_closure() {
        let counter = CallCounter::default();
        let bump = |x: i32| {
            counter.bump();
            x
        };

        assert_eq!(select(None::<Vec<i32>>, Some(bump)).unwrap_err(), missing("source"));
        assert_eq!(
            filter(None::<Vec<i32>>, Some(|_: &i32| {
                counter.bump();
                true
            }))
            .unwrap_err(),
            missing("source")
        );
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn source_is_checked_before_the_closure() {
        assert_eq!(
            group_by(None::<Vec<i32>>, None::<fn(&i32) -> i32>).unwrap_err(),
            missing("source")
        );
    }

    #[test]
    fn missing_closures() {
        let nums = vec![1, 2];

        assert_eq!(
            select(Some(nums.by_ref()), None::<fn(i32) -> i32>).unwrap_err(),
            missing("selector")
        );
        assert_eq!(
            filter(Some(nums.by_ref()), None::<fn(&i32) -> bool>).unwrap_err(),
            missing("predicate")
        );
        assert_eq!(
            group_by(Some(nums.by_ref()), None::<fn(&i32) -> i32>).unwrap_err(),
            missing("key_selector")
        );
        assert_eq!(
            order_by(Some(nums.by_ref()), None::<fn(&i32) -> i32>, SortOrder::Ascending)
                .unwrap_err(),
            missing("key_selector")
        );
        assert_eq!(
            to_dictionary(Some(&nums), None::<fn(&i32) -> i32>).unwrap_err(),
            missing("key_selector")
        );
    }

    #[test]
    fn materializers() {
        let nums = vec![3, 1];

        assert_eq!(to_list(Some(&nums)).unwrap(), [3, 1]);
        assert_eq!(to_list(None::<&Vec<i32>>).unwrap_err(), missing("source"));
        assert_eq!(
            to_dictionary(None::<&Vec<i32>>, Some(|&x: &i32| x)).unwrap_err(),
            missing("source")
        );
        assert_eq!(
            to_dictionary(Some(&vec![('a', 1), ('a', 2)]), Some(|&(k, _): &(char, i32)| k)),
            Err(Error::DuplicateKey { index: 1 })
        );
    }

    #[test]
    fn present_arguments_build_the_same_pipeline() {
        let nums = vec![5, 2, 8, 1];

        let checked = order_by(
            Some(filter(Some(nums.by_ref()), Some(|&x: &i32| x > 1)).unwrap()),
            Some(|&x: &i32| x),
            SortOrder::Descending,
        )
        .unwrap();
        let unchecked = nums.by_ref().filter(|&x| x > 1).order_by_descending(|&x| x);

        assert_eq!(checked.to_list(), unchecked.to_list());
        assert_eq!(checked.to_list(), [8, 5, 2]);
    }
}
