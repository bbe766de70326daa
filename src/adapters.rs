//! The lazy adapters built by the [`Sequence`](crate::sequence::Sequence) methods.
//!
//! Each adapter owns its upstream (which may be a [`ByRef`](crate::sequence::ByRef))
//! and its closure, and each implements [`Sequence`](crate::sequence::Sequence)
//! on its own. None of them does any work before a cursor is requested.

mod filter;
mod group_by;
mod map;
mod order_by;

pub use filter::*;
pub use group_by::*;
pub use map::*;
pub use order_by::*;
