use crate::cursor::{position_sentinel, Cursor, Sequence};
use crate::range::Bounds;

/// Items that have a first and a second component.
pub trait Pair {
    /// First component (a map key).
    type First;
    /// Second component (a map value).
    type Second;

    /// Project the first component.
    fn into_first(self) -> Self::First;

    /// Project the second component.
    fn into_second(self) -> Self::Second;
}

impl<'a, A, B> Pair for (&'a A, &'a B) {
    type First = &'a A;
    type Second = &'a B;

    #[inline]
    fn into_first(self) -> &'a A {
        self.0
    }

    #[inline]
    fn into_second(self) -> &'a B {
        self.1
    }
}

impl<'a, A, B> Pair for &'a (A, B) {
    type First = &'a A;
    type Second = &'a B;

    #[inline]
    fn into_first(self) -> &'a A {
        &self.0
    }

    #[inline]
    fn into_second(self) -> &'a B {
        &self.1
    }
}

/// Cursor exposing only the first component of each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keys<C> {
    inner: C,
}

impl<C> Keys<C> {
    /// Wrap a pair-valued cursor.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped cursor.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> Cursor for Keys<C>
where
    C: Cursor,
    C::Item: Pair,
{
    type Item = <C::Item as Pair>::First;

    #[inline]
    fn get(&self) -> Self::Item {
        self.inner.get().into_first()
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }
}

position_sentinel!([C] Keys<C> where C: Cursor, C::Item: Pair);

/// Cursor exposing only the second component of each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Values<C> {
    inner: C,
}

impl<C> Values<C> {
    /// Wrap a pair-valued cursor.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped cursor.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> Cursor for Values<C>
where
    C: Cursor,
    C::Item: Pair,
{
    type Item = <C::Item as Pair>::Second;

    #[inline]
    fn get(&self) -> Self::Item {
        self.inner.get().into_second()
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }
}

position_sentinel!([C] Values<C> where C: Cursor, C::Item: Pair);

/// The keys of a pair-valued sequence, as a begin/end pair.
pub fn keys<'a, S>(seq: &'a S) -> Bounds<Keys<S::Cursor<'a>>, Keys<S::Cursor<'a>>>
where
    S: Sequence + ?Sized,
    <S::Cursor<'a> as Cursor>::Item: Pair,
{
    Bounds::new(Keys::new(seq.begin()), Keys::new(seq.end()))
}

/// The values of a pair-valued sequence, as a begin/end pair.
pub fn values<'a, S>(seq: &'a S) -> Bounds<Values<S::Cursor<'a>>, Values<S::Cursor<'a>>>
where
    S: Sequence + ?Sized,
    <S::Cursor<'a> as Cursor>::Item: Pair,
{
    Bounds::new(Values::new(seq.begin()), Values::new(seq.end()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::scan;

    #[test]
    fn test_keys_of_empty_map_is_empty() {
        let map: BTreeMap<i32, i32> = BTreeMap::new();
        assert!(keys(&map).is_empty());
    }

    #[test]
    fn test_keys_and_values_project_map_entries() {
        let map: BTreeMap<&str, u32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();

        let ks: Vec<&str> = keys(&map).into_iter().copied().collect();
        let vs: Vec<u32> = values(&map).into_iter().copied().collect();

        assert_eq!(ks, vec!["a", "b", "c"]);
        assert_eq!(vs, vec![1, 2, 3]);
    }

    #[test]
    fn test_projection_over_slice_of_tuples() {
        let pairs = [(1, 'x'), (2, 'y'), (3, 'z')];
        let (begin, end) = values(&pairs[..]).into_parts();
        let pos = scan::locate(begin, end, &'y');
        assert_eq!(pos.inner().position(), 1);
    }
}
