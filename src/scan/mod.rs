//! Bounded scans
//!
//! Ports of the non-modifying sequence operations where the end of the range
//! is a [`BoundedSentinel`] instead of a cursor of the same type as the
//! start. Each scan:
//!
//! - asks `last.reached(&first)` before every dereference,
//! - never advances past a position the sentinel reports as reached,
//! - reports "not found" as the reached cursor, never as an error.
//!
//! The homogeneous two-cursor versions live in [`classic`]; every cursor is
//! also a bounded sentinel for its own type, so both agree on the same input.

pub mod classic;
mod extent;

use std::borrow::Borrow;

use tracing::trace;

use crate::cursor::Cursor;
use crate::sentinel::BoundedSentinel;

pub use extent::{locate_max, locate_max_by, locate_min, locate_min_by};

/// Terminal state of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// A value or predicate matched before the sentinel.
    Found,
    /// The sentinel was reached first.
    Bounded,
}

#[inline]
pub(crate) fn finish(algorithm: &'static str, steps: usize, outcome: Outcome) {
    trace!(algorithm, steps, ?outcome, "scan finished");
}

#[inline]
pub(crate) fn item_eq<I, V>(item: I, value: &V) -> bool
where
    I: Borrow<V>,
    V: PartialEq + ?Sized,
{
    <I as Borrow<V>>::borrow(&item) == value
}

/// First cursor whose item equals `value`, or the reached cursor.
pub fn locate<C, S, V>(mut first: C, last: S, value: &V) -> C
where
    C: Cursor,
    S: BoundedSentinel<C>,
    C::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    let mut steps = 0;
    while !last.reached(&first) {
        if item_eq(first.get(), value) {
            finish("locate", steps, Outcome::Found);
            return first;
        }
        first.advance();
        steps += 1;
    }
    finish("locate", steps, Outcome::Bounded);
    first
}

/// First cursor whose item satisfies `pred`, or the reached cursor.
pub fn locate_if<C, S, P>(mut first: C, last: S, mut pred: P) -> C
where
    C: Cursor,
    S: BoundedSentinel<C>,
    P: FnMut(C::Item) -> bool,
{
    let mut steps = 0;
    while !last.reached(&first) {
        if pred(first.get()) {
            finish("locate_if", steps, Outcome::Found);
            return first;
        }
        first.advance();
        steps += 1;
    }
    finish("locate_if", steps, Outcome::Bounded);
    first
}

/// First cursor whose item does not satisfy `pred`, or the reached cursor.
pub fn locate_if_not<C, S, P>(mut first: C, last: S, mut pred: P) -> C
where
    C: Cursor,
    S: BoundedSentinel<C>,
    P: FnMut(C::Item) -> bool,
{
    let mut steps = 0;
    while !last.reached(&first) {
        if !pred(first.get()) {
            finish("locate_if_not", steps, Outcome::Found);
            return first;
        }
        first.advance();
        steps += 1;
    }
    finish("locate_if_not", steps, Outcome::Bounded);
    first
}

/// Whether every item before the stop satisfies `pred`. True on an empty
/// range.
pub fn all_of<C, S, P>(first: C, last: S, pred: P) -> bool
where
    C: Cursor,
    S: BoundedSentinel<C>,
    P: FnMut(C::Item) -> bool,
{
    let pos = locate_if_not(first, &last, pred);
    last.reached(&pos)
}

/// Whether some item before the stop satisfies `pred`.
pub fn any_of<C, S, P>(first: C, last: S, pred: P) -> bool
where
    C: Cursor,
    S: BoundedSentinel<C>,
    P: FnMut(C::Item) -> bool,
{
    let pos = locate_if(first, &last, pred);
    !last.reached(&pos)
}

/// Whether no item before the stop satisfies `pred`.
pub fn none_of<C, S, P>(first: C, last: S, pred: P) -> bool
where
    C: Cursor,
    S: BoundedSentinel<C>,
    P: FnMut(C::Item) -> bool,
{
    let pos = locate_if(first, &last, pred);
    last.reached(&pos)
}

/// Apply `visitor` to every item before the stop, in order, and hand the
/// visitor back.
pub fn for_each<C, S, F>(mut first: C, last: S, mut visitor: F) -> F
where
    C: Cursor,
    S: BoundedSentinel<C>,
    F: FnMut(C::Item),
{
    let mut steps = 0;
    while !last.reached(&first) {
        visitor(first.get());
        first.advance();
        steps += 1;
    }
    finish("for_each", steps, Outcome::Bounded);
    visitor
}

/// Number of items equal to `value` before the stop.
pub fn count<C, S, V>(mut first: C, last: S, value: &V) -> usize
where
    C: Cursor,
    S: BoundedSentinel<C>,
    C::Item: Borrow<V>,
    V: PartialEq + ?Sized,
{
    let mut steps = 0;
    let mut matches = 0;
    while !last.reached(&first) {
        if item_eq(first.get(), value) {
            matches += 1;
        }
        first.advance();
        steps += 1;
    }
    finish("count", steps, Outcome::Bounded);
    matches
}

/// Number of items satisfying `pred` before the stop.
pub fn count_if<C, S, P>(mut first: C, last: S, mut pred: P) -> usize
where
    C: Cursor,
    S: BoundedSentinel<C>,
    P: FnMut(C::Item) -> bool,
{
    let mut steps = 0;
    let mut matches = 0;
    while !last.reached(&first) {
        if pred(first.get()) {
            matches += 1;
        }
        first.advance();
        steps += 1;
    }
    finish("count_if", steps, Outcome::Bounded);
    matches
}

/// Number of advances from `first` until the sentinel is reached.
///
/// Never dereferences unless the sentinel itself does.
pub fn distance<C, S>(mut first: C, last: S) -> usize
where
    C: Cursor,
    S: BoundedSentinel<C>,
{
    let mut steps = 0;
    while !last.reached(&first) {
        first.advance();
        steps += 1;
    }
    finish("distance", steps, Outcome::Bounded);
    steps
}
