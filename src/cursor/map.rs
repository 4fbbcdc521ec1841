use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ptr;

use super::{position_sentinel, Cursor, Sequence};

/// Cursor over the entries of a [`BTreeMap`], in key order.
///
/// Dereferences to a `(&K, &V)` pair; use
/// [`Keys`](crate::adaptor::Keys) / [`Values`](crate::adaptor::Values) to
/// project one side.
pub struct MapCursor<'a, K, V> {
    map: &'a BTreeMap<K, V>,
    rest: btree_map::Iter<'a, K, V>,
    current: Option<(&'a K, &'a V)>,
    position: usize,
}

impl<'a, K, V> MapCursor<'a, K, V> {
    /// Cursor on the smallest key.
    pub fn new(map: &'a BTreeMap<K, V>) -> Self {
        let mut rest = map.iter();
        let current = rest.next();
        Self {
            map,
            rest,
            current,
            position: 0,
        }
    }

    /// Cursor one past the largest key.
    pub fn end(map: &'a BTreeMap<K, V>) -> Self {
        Self {
            map,
            rest: map.iter(),
            current: None,
            position: map.len(),
        }
    }

    /// Number of entries before the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<K, V> Clone for MapCursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            rest: self.rest.clone(),
            current: self.current,
            position: self.position,
        }
    }
}

impl<K, V> PartialEq for MapCursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.map, other.map) && self.position == other.position
    }
}

impl<K, V> Eq for MapCursor<'_, K, V> {}

impl<K, V> fmt::Debug for MapCursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCursor")
            .field("position", &self.position)
            .field("len", &self.map.len())
            .finish()
    }
}

impl<'a, K, V> Cursor for MapCursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn get(&self) -> (&'a K, &'a V) {
        match self.current {
            Some(entry) => entry,
            None => panic!("map cursor dereferenced past the last entry"),
        }
    }

    fn advance(&mut self) {
        if self.current.take().is_some() {
            self.current = self.rest.next();
        }
        self.position += 1;
    }
}

position_sentinel!(['a, K, V] MapCursor<'a, K, V>);

impl<K, V> Sequence for BTreeMap<K, V> {
    type Cursor<'a> = MapCursor<'a, K, V> where K: 'a, V: 'a;

    fn begin(&self) -> MapCursor<'_, K, V> {
        MapCursor::new(self)
    }

    fn end(&self) -> MapCursor<'_, K, V> {
        MapCursor::end(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_cursor_visits_in_key_order() {
        let map: BTreeMap<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        let mut cursor = map.begin();
        let end = map.end();

        let mut keys = Vec::new();
        while cursor != end {
            keys.push(*cursor.get().0);
            cursor.advance();
        }

        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_map_begin_equals_end() {
        let map: BTreeMap<u8, u8> = BTreeMap::new();
        assert_eq!(map.begin(), map.end());
    }
}
