//! Begin-cursor / sentinel pairs
//!
//! [`Bounds`] packages a start cursor with the sentinel that ends it, so a
//! bounded region can be passed around as one value and scanned repeatedly.
//! It also bridges into `std` iterators through [`IntoIterator`].

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::scan;
use crate::sentinel::{BoundedSentinel, Sentinel};
use crate::Result;

/// A start cursor and the sentinel that ends the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<C, S> {
    begin: C,
    end: S,
}

/// Pair `begin` with `end`.
pub fn bounds<C, S>(begin: C, end: S) -> Bounds<C, S> {
    Bounds::new(begin, end)
}

impl<C, S> Bounds<C, S> {
    /// Pair `begin` with `end`.
    pub fn new(begin: C, end: S) -> Self {
        Self { begin, end }
    }

    /// Start cursor.
    pub fn begin(&self) -> &C {
        &self.begin
    }

    /// Ending sentinel.
    pub fn end(&self) -> &S {
        &self.end
    }

    /// Split into start cursor and sentinel.
    pub fn into_parts(self) -> (C, S) {
        (self.begin, self.end)
    }
}

impl<C, S> Bounds<C, S>
where
    C: Cursor,
    S: BoundedSentinel<C>,
{
    /// Whether the sentinel is reached at the start.
    pub fn is_empty(&self) -> bool {
        self.end.reached(&self.begin)
    }

    /// See [`scan::locate`].
    pub fn locate<V>(&self, value: &V) -> C
    where
        C::Item: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        scan::locate(self.begin.clone(), &self.end, value)
    }

    /// See [`scan::locate_if`].
    pub fn locate_if<P>(&self, pred: P) -> C
    where
        P: FnMut(C::Item) -> bool,
    {
        scan::locate_if(self.begin.clone(), &self.end, pred)
    }

    /// See [`scan::count`].
    pub fn count<V>(&self, value: &V) -> usize
    where
        C::Item: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        scan::count(self.begin.clone(), &self.end, value)
    }

    /// See [`scan::count_if`].
    pub fn count_if<P>(&self, pred: P) -> usize
    where
        P: FnMut(C::Item) -> bool,
    {
        scan::count_if(self.begin.clone(), &self.end, pred)
    }

    /// See [`scan::for_each`].
    pub fn for_each<F>(&self, visitor: F) -> F
    where
        F: FnMut(C::Item),
    {
        scan::for_each(self.begin.clone(), &self.end, visitor)
    }

    /// See [`scan::distance`].
    pub fn distance(&self) -> usize {
        scan::distance(self.begin.clone(), &self.end)
    }

    /// See [`scan::locate_max_by`].
    pub fn locate_max_by<F>(&self, compare: F) -> Result<C>
    where
        F: FnMut(C::Item, C::Item) -> Ordering,
    {
        scan::locate_max_by(self.begin.clone(), &self.end, compare)
    }

    /// See [`scan::locate_min_by`].
    pub fn locate_min_by<F>(&self, compare: F) -> Result<C>
    where
        F: FnMut(C::Item, C::Item) -> Ordering,
    {
        scan::locate_min_by(self.begin.clone(), &self.end, compare)
    }

    /// Borrowing iterator over the items before the stop.
    pub fn iter(&self) -> BoundedIter<C, &S> {
        BoundedIter::new(self.begin.clone(), &self.end)
    }
}

impl<C, S> IntoIterator for Bounds<C, S>
where
    C: Cursor,
    S: BoundedSentinel<C>,
{
    type Item = C::Item;
    type IntoIter = BoundedIter<C, S>;

    fn into_iter(self) -> BoundedIter<C, S> {
        BoundedIter::new(self.begin, self.end)
    }
}

/// Iterator yielding items until the sentinel is reached.
#[derive(Debug, Clone)]
pub struct BoundedIter<C, S> {
    cursor: C,
    end: S,
    done: bool,
}

impl<C, S> BoundedIter<C, S> {
    fn new(cursor: C, end: S) -> Self {
        Self {
            cursor,
            end,
            done: false,
        }
    }

    /// Current cursor: the stopping position once the iterator is exhausted.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }
}

impl<C, S> Iterator for BoundedIter<C, S>
where
    C: Cursor,
    S: BoundedSentinel<C>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.done || self.end.reached(&self.cursor) {
            self.done = true;
            return None;
        }
        let item = self.cursor.get();
        self.cursor.advance();
        Some(item)
    }
}

impl<C, S> FusedIterator for BoundedIter<C, S>
where
    C: Cursor,
    S: BoundedSentinel<C>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Sequence;
    use crate::sentinel::{until_value, Node};

    #[test]
    fn test_bounds_forward_to_scans() {
        let v = [1, 2, 3, 4, 5];
        let region = bounds(v.begin(), until_value(4).or(v.end()));

        assert_eq!(region.distance(), 3);
        assert_eq!(region.count(&2), 1);
        assert_eq!(region.locate(&5), v.begin().advanced_by(3));
        assert!(!region.is_empty());
    }

    #[test]
    fn test_iterator_stops_at_sentinel() {
        let v = [1, 2, 3, 4, 5];
        let region = bounds(v.begin(), until_value(3).or(v.end()));

        let collected: Vec<i32> = region.iter().copied().collect();
        assert_eq!(collected, vec![1, 2]);

        let mut iter = region.into_iter();
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.cursor().position(), 2);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_parts_round_trip() {
        let v = [0u8; 4];
        let (begin, end) = bounds(v.begin(), v.end()).into_parts();
        assert_eq!(scan::distance(begin, end), 4);
    }
}
