use super::{Cursor, Position};

/// A [`Cursor`] over a buffer it owns.
///
/// Produced by the adapters that materialize their upstream before yielding,
/// namely [`GroupBy`](crate::adapters::GroupBy) and
/// [`OrderBy`](crate::adapters::OrderBy). The buffer is dropped with the cursor.
/// Elements are handed out by clone.
#[derive(Debug, Clone)]
pub struct BufferCursor<T> {
    buffer: Vec<T>,
    position: Position,
}

impl<T> BufferCursor<T> {
    pub(crate) fn new(buffer: Vec<T>) -> Self {
        Self {
            buffer,
            position: Position::default(),
        }
    }

    /// Number of elements in the materialized buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl<T: Clone> Cursor for BufferCursor<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> bool {
        self.position.advance(self.buffer.len())
    }

    #[inline]
    fn current(&self) -> Option<T> {
        self.position
            .index()
            .and_then(|index| self.buffer.get(index))
            .cloned()
    }

    #[inline]
    fn reset(&mut self) {
        self.position.reset();
    }
}
