//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the [`Sequence`] and [`Cursor`] traits, whose methods
//! build every adapter.
//!
//! # Example
//!
//! ```
//! use lazy_seq::prelude::*;
//! ```

pub use crate::sequence::{Cursor, Sequence};
