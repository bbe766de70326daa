/// Position of a cursor over an indexable buffer.
///
/// `None` means "before the first element". The index saturates at the buffer
/// length once the cursor is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Position(Option<usize>);

impl Position {
    #[inline]
    pub(crate) fn advance(&mut self, len: usize) -> bool {
        let next = self.0.map_or(0, |index| (index + 1).min(len));
        self.0 = Some(next);
        next < len
    }

    /// The index to read, if the cursor has been advanced at least once.
    /// May equal the buffer length after exhaustion.
    #[inline]
    pub(crate) fn index(self) -> Option<usize> {
        self.0
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        self.0 = None;
    }
}
