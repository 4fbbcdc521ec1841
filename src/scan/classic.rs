//! Homogeneous scans over a `[first, last)` cursor pair
//!
//! These loop on `first != last` exactly like the textbook algorithms. The
//! sentinel-based scans in the parent module must produce the same cursor
//! and the same counts when handed `last` as their sentinel.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::item_eq;
use crate::cursor::Cursor;
use crate::{Result, ScanError};

/// First cursor in `[first, last)` whose item equals `value`, or `last`.
pub fn locate<C, V>(mut first: C, last: C, value: &V) -> C
where
    C: Cursor,
    C::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    while first != last {
        if item_eq(first.get(), value) {
            return first;
        }
        first.advance();
    }
    first
}

/// First cursor in `[first, last)` whose item satisfies `pred`, or `last`.
pub fn locate_if<C, P>(mut first: C, last: C, mut pred: P) -> C
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    while first != last {
        if pred(first.get()) {
            return first;
        }
        first.advance();
    }
    first
}

/// First cursor in `[first, last)` whose item fails `pred`, or `last`.
pub fn locate_if_not<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    locate_if(first, last, |item| !pred(item))
}

/// Whether every item in `[first, last)` satisfies `pred`.
pub fn all_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    locate_if_not(first, last.clone(), pred) == last
}

/// Whether some item in `[first, last)` satisfies `pred`.
pub fn any_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    locate_if(first, last.clone(), pred) != last
}

/// Whether no item in `[first, last)` satisfies `pred`.
pub fn none_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    locate_if(first, last.clone(), pred) == last
}

/// Apply `visitor` to every item in `[first, last)`.
pub fn for_each<C, F>(mut first: C, last: C, mut visitor: F) -> F
where
    C: Cursor,
    F: FnMut(C::Item),
{
    while first != last {
        visitor(first.get());
        first.advance();
    }
    visitor
}

/// Number of items in `[first, last)` equal to `value`.
pub fn count<C, V>(first: C, last: C, value: &V) -> usize
where
    C: Cursor,
    C::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    count_if(first, last, |item| item_eq(item, value))
}

/// Number of items in `[first, last)` satisfying `pred`.
pub fn count_if<C, P>(mut first: C, last: C, mut pred: P) -> usize
where
    C: Cursor,
    P: FnMut(C::Item) -> bool,
{
    let mut matches = 0;
    while first != last {
        if pred(first.get()) {
            matches += 1;
        }
        first.advance();
    }
    matches
}

/// Number of advances from `first` to `last`.
pub fn distance<C: Cursor>(mut first: C, last: C) -> usize {
    let mut steps = 0;
    while first != last {
        first.advance();
        steps += 1;
    }
    steps
}

/// Cursor to the largest item of a non-empty `[first, last)`; first one wins
/// ties.
pub fn locate_max<C>(first: C, last: C) -> Result<C>
where
    C: Cursor,
    C::Item: Ord,
{
    locate_max_by(first, last, |a, b| a.cmp(&b))
}

/// [`locate_max`] with an explicit ordering.
pub fn locate_max_by<C, F>(mut first: C, last: C, mut compare: F) -> Result<C>
where
    C: Cursor,
    F: FnMut(C::Item, C::Item) -> Ordering,
{
    if first == last {
        return Err(ScanError::EmptyRange {
            algorithm: "classic::locate_max",
        });
    }
    let mut best = first.clone();
    first.advance();
    while first != last {
        if compare(best.get(), first.get()) == Ordering::Less {
            best = first.clone();
        }
        first.advance();
    }
    Ok(best)
}

/// Cursor to the smallest item of a non-empty `[first, last)`; first one
/// wins ties.
pub fn locate_min<C>(first: C, last: C) -> Result<C>
where
    C: Cursor,
    C::Item: Ord,
{
    locate_min_by(first, last, |a, b| a.cmp(&b))
}

/// [`locate_min`] with an explicit ordering.
pub fn locate_min_by<C, F>(mut first: C, last: C, mut compare: F) -> Result<C>
where
    C: Cursor,
    F: FnMut(C::Item, C::Item) -> Ordering,
{
    if first == last {
        return Err(ScanError::EmptyRange {
            algorithm: "classic::locate_min",
        });
    }
    let mut best = first.clone();
    first.advance();
    while first != last {
        if compare(first.get(), best.get()) == Ordering::Less {
            best = first.clone();
        }
        first.advance();
    }
    Ok(best)
}
