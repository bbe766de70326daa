//! Lazy, composable sequence operators.
//!
//! A [`Sequence`](sequence::Sequence) is anything that can hand out fresh
//! [`Cursor`](sequence::Cursor)s over its elements. Adapters such as
//! [`map()`](sequence::Sequence::map), [`filter()`](sequence::Sequence::filter),
//! [`group_by()`](sequence::Sequence::group_by) and
//! [`order_by()`](sequence::Sequence::order_by) wrap one upstream sequence and are
//! sequences themselves, so they nest freely.
//!
//! # Laziness
//!
//! Building a chain does nothing. Work starts when a cursor is requested from the
//! outermost adapter, and each step pulls from upstream only what it needs:
//!
//! ```
//! use lazy_seq::{prelude::*, sequence::count_from};
//!
//! // An unbounded source is fine as long as it is consumed lazily.
//! let odd_squares = count_from(1_u32)
//!     .map(|x| x * x)
//!     .filter(|x| x % 2 == 1);
//!
//! let first: Vec<_> = odd_squares.values().take(3).collect();
//! assert_eq!(first, [1, 9, 25]);
//! ```
//!
//! [`group_by()`](sequence::Sequence::group_by) and
//! [`order_by()`](sequence::Sequence::order_by) have to see every element before
//! yielding the first one. They drain their upstream when a cursor is requested,
//! again for every new cursor. Nothing is cached between cursors.
//!
//! # Materializing
//!
//! [`to_list()`](sequence::Sequence::to_list) and
//! [`to_dictionary()`](sequence::Sequence::to_dictionary) drain a sequence into a
//! [`Vec`] or a [`HashMap`](std::collections::HashMap):
//!
//! ```
//! use lazy_seq::{prelude::*, SortOrder};
//!
//! let scores = vec![("ann", 7), ("bob", 9), ("cid", 7), ("dee", 3)];
//!
//! let by_score = scores.by_ref().group_by(|&(_, score)| score).to_list();
//! assert_eq!(by_score.len(), 3);
//! assert_eq!(by_score[0].as_slice(), [("ann", 7), ("cid", 7)]);
//!
//! let best_first = scores
//!     .by_ref()
//!     .order_by(|&(_, score)| score, SortOrder::Descending)
//!     .map(|(name, _)| name);
//! assert_eq!(best_first.to_list()[0], "bob");
//!
//! let by_name = scores.to_dictionary(|&(name, _)| name).unwrap();
//! assert_eq!(by_name["dee"].1, 3);
//! ```
//!
//! # Checked entry points
//!
//! The [`query`] module offers the same operators for arguments that may be
//! absent, failing with [`Error::MissingArgument`] before anything runs.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapters;
mod error;
mod grouping;
mod materialize;
pub mod prelude;
pub mod query;
pub mod sequence;
mod sort;
#[cfg(test)]
mod test_utils;

pub use error::*;
pub use grouping::*;
pub use sort::SortOrder;
