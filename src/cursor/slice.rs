use std::fmt;
use std::ptr;

use super::{position_sentinel, Cursor, Sequence};

/// Cursor into a borrowed slice.
///
/// Two slice cursors are equal when they point into the same slice at the
/// same offset; element values are never compared.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor on the first element of `slice`.
    pub fn new(slice: &'a [T]) -> Self {
        Self::at(slice, 0)
    }

    /// Cursor at `position` (which may equal `slice.len()` for the end).
    pub fn at(slice: &'a [T], position: usize) -> Self {
        debug_assert!(position <= slice.len(), "cursor offset past slice end");
        Self { slice, position }
    }

    /// Offset from the start of the slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor sits on the physical end of the slice.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position >= self.slice.len()
    }

    /// Copy of this cursor moved `n` positions forward.
    pub fn advanced_by(mut self, n: usize) -> Self {
        self.position += n;
        debug_assert!(self.position <= self.slice.len(), "cursor offset past slice end");
        self
    }

    /// Elements from the cursor to the end of the slice.
    pub fn remainder(&self) -> &'a [T] {
        &self.slice[self.position.min(self.slice.len())..]
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.position == other.position
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("position", &self.position)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.position]
    }

    #[inline]
    fn advance(&mut self) {
        self.position += 1;
    }
}

position_sentinel!(['a, T] SliceCursor<'a, T>);

impl<T> Sequence for [T] {
    type Cursor<'a> = SliceCursor<'a, T> where T: 'a;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self)
    }

    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::at(self, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_slice() {
        let data = [10, 20, 30];
        let mut cursor = data.begin();
        let end = data.end();

        let mut seen = Vec::new();
        while cursor != end {
            seen.push(*cursor.get());
            cursor.advance();
        }

        assert_eq!(seen, vec![10, 20, 30]);
        assert!(cursor.is_end());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_equality_is_positional() {
        let a = [1, 1, 1];
        let b = [1, 1, 1];

        assert_eq!(a.begin().advanced_by(1), SliceCursor::at(&a, 1));
        // Same values, different storage.
        assert_ne!(a.begin(), b.begin());
    }

    #[test]
    fn test_vec_derefs_to_sequence() {
        let v = vec!['x', 'y'];
        assert_eq!(v.end().position(), 2);
        assert_eq!(v.begin().remainder(), &['x', 'y']);
    }

    #[test]
    #[should_panic]
    fn test_dereferencing_end_panics() {
        let data = [1u8];
        let _ = data.end().get();
    }
}
