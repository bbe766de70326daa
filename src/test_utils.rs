use std::{cell::Cell, fmt::Debug};

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::prelude::*;

/// Checks that every way of reading `sequence` yields `expected`:
/// a manual cursor loop, the same cursor after [`reset()`](Cursor::reset),
/// a second independent cursor, [`values()`](Sequence::values)
/// and [`to_list()`](Sequence::to_list).
pub fn test_sequence<S>(sequence: &S, expected: &[S::Item]) -> TestCaseResult
where
    S: Sequence + ?Sized,
    S::Item: PartialEq + Debug,
{
    let mut cursor = sequence.cursor();
    prop_assert_eq!(cursor.current(), None, "cursor readable before `advance()`");

    let first = drain(&mut cursor)?;
    prop_assert_eq!(&first, expected, "cursor loop mismatched");

    cursor.reset();
    prop_assert_eq!(cursor.current(), None, "cursor readable right after `reset()`");
    prop_assert_eq!(&drain(&mut cursor)?, expected, "`reset()` didn't restart");

    let mut other = sequence.cursor();
    prop_assert_eq!(&drain(&mut other)?, expected, "second cursor mismatched");

    prop_assert_eq!(
        &sequence.values().collect::<Vec<_>>(),
        expected,
        "`values()` mismatched"
    );
    prop_assert_eq!(&sequence.to_list(), expected, "`to_list()` mismatched");

    Ok(())
}

/// Advances to the end, reading every position twice to make sure reads are repeatable.
fn drain<C>(cursor: &mut C) -> Result<Vec<C::Item>, TestCaseError>
where
    C: Cursor,
    C::Item: PartialEq + Debug,
{
    let mut items = vec![];
    while cursor.advance() {
        let item = cursor.current();
        prop_assert_eq!(&item, &cursor.current(), "`current()` not repeatable");
        match item {
            Some(item) => items.push(item),
            None => prop_assert!(false, "`advance()` returned true but nothing to read"),
        }
    }

    prop_assert_eq!(cursor.current(), None, "cursor readable after exhaustion");
    prop_assert!(!cursor.advance(), "cursor resumed after exhaustion");
    Ok(items)
}

/// Counts closure invocations from inside `Fn` closures.
#[derive(Debug, Default)]
pub struct CallCounter(Cell<usize>);

impl CallCounter {
    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
