use super::{Cloned, Values};

/// A single-pass, stateful position inside a [`Sequence`](super::Sequence).
///
/// See the [module-level documentation](super) for the protocol every cursor follows.
pub trait Cursor {
    /// The type of the elements the cursor reads.
    type Item;

    /// Moves to the next element.
    ///
    /// Returns `false` if there is no next element. After that, every further call
    /// returns `false` and [`current()`](Cursor::current) returns [`None`].
    fn advance(&mut self) -> bool;

    /// Reads the element at the current position.
    ///
    /// Returns [`None`] before the first [`advance()`](Cursor::advance)
    /// and after the cursor is exhausted.
    ///
    /// Reading is not cached. A cursor that derives its elements (e.g. from
    /// [`map()`](super::Sequence::map)) recomputes them on every read, so
    /// reading the same position twice calls the transform twice.
    fn current(&self) -> Option<Self::Item>;

    /// Moves the cursor back before the first element.
    ///
    /// Afterwards the cursor behaves exactly like a freshly created one.
    fn reset(&mut self);

    /// Turns the cursor into an [`Iterator`] that advances, then reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::prelude::*;
    ///
    /// let nums = [3, 1, 2];
    /// let doubled: Vec<_> = nums.cursor().values().map(|x| x * 2).collect();
    ///
    /// assert_eq!(doubled, [6, 2, 4]);
    /// ```
    #[inline]
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }

    /// Creates a cursor that clones every element it reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_seq::prelude::*;
    ///
    /// let words = [String::from("a"), String::from("b")];
    /// let mut cursor = words.as_slice().cursor().cloned();
    ///
    /// assert!(cursor.advance());
    /// assert_eq!(cursor.current(), Some(String::from("a")));
    /// ```
    #[inline]
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Cursor<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn by_mut_ref_shares_position() {
        let nums = vec![1, 2, 3];
        let mut cursor = nums.as_slice().cursor();

        assert!((&mut cursor).advance());
        assert_eq!(cursor.current(), Some(&1));

        let rest: Vec<_> = (&mut cursor).values().collect();
        assert_eq!(rest, [&2, &3]);
        assert!(!cursor.advance());
    }

    #[test]
    fn boxed_dyn() {
        let nums = vec![1, 2];
        let mut cursor: Box<dyn Cursor<Item = &i32>> = Box::new(nums.as_slice().cursor());

        assert!(cursor.advance());
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Some(&2));
        cursor.reset();
        assert_eq!(cursor.current(), None);
    }
}
