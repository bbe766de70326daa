//! Module contains traits and `struct`s for sequences and their cursors.
//!
//! A [`Sequence`] does not hold a position of its own. It only knows how to
//! produce a fresh [`Cursor`], and every cursor walks the sequence independently.
//!
//! # Cursor protocol
//!
//! A cursor starts positioned *before* the first element.
//! [`current()`](Cursor::current) is only meaningful after a call to
//! [`advance()`](Cursor::advance) has returned `true`; before that, and after
//! the cursor is exhausted, it returns [`None`].
//! Once `advance()` returns `false` it keeps returning `false`
//! until the cursor is [`reset()`](Cursor::reset).
//!
//! # Laziness
//!
//! Building a chain of adapters performs no iteration. Work only happens when a
//! cursor is requested from the outermost adapter, and it is pulled upstream on
//! demand. The only eager steps are the ones that cannot be avoided:
//! [`group_by()`](Sequence::group_by) and [`order_by()`](Sequence::order_by)
//! drain their upstream in full inside [`cursor()`](Sequence::cursor),
//! and they do it again for every new cursor.
//!
//! # Example
//!
//! ```
//! use lazy_seq::prelude::*;
//!
//! let words = vec!["pear", "fig", "apple", "kiwi"];
//!
//! let shouted = words
//!     .by_ref()
//!     .filter(|word| word.len() > 3)
//!     .map(|word| word.to_uppercase());
//!
//! let mut cursor = shouted.cursor();
//!
//! assert_eq!(cursor.current(), None);
//! assert!(cursor.advance());
//! assert_eq!(cursor.current().as_deref(), Some("PEAR"));
//! assert!(cursor.advance());
//! assert!(cursor.advance());
//! assert_eq!(cursor.current().as_deref(), Some("KIWI"));
//! assert!(!cursor.advance());
//! assert_eq!(cursor.current(), None);
//! ```

mod buffer;
mod by_ref;
mod cloned;
#[allow(clippy::module_inception)]
mod cursor;
mod position;
mod range;
#[allow(clippy::module_inception)]
mod sequence;
mod slice;
mod values;

pub use buffer::*;
pub use by_ref::*;
pub use cloned::*;
pub use cursor::*;
pub use range::*;
pub use sequence::*;
pub use slice::*;
pub use values::*;

pub(crate) use position::Position;

#[inline(always)]
pub(crate) const fn assert_sequence<S>(sequence: S) -> S
where
    S: Sequence,
{
    sequence
}
