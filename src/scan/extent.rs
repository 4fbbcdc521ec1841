//! Extreme-element locators
//!
//! Single left-to-right pass that keeps the best cursor seen so far. The
//! best cursor is only replaced on a strict improvement, so the first of
//! several equal extremes is returned.

use std::cmp::Ordering;

use tracing::debug;

use super::{finish, Outcome};
use crate::cursor::Cursor;
use crate::sentinel::BoundedSentinel;
use crate::{Result, ScanError};

/// Cursor to the largest item before the stop.
///
/// # Errors
///
/// [`ScanError::EmptyRange`] if the sentinel is reached at `first`.
pub fn locate_max<C, S>(first: C, last: S) -> Result<C>
where
    C: Cursor,
    C::Item: Ord,
    S: BoundedSentinel<C>,
{
    extreme("locate_max", first, last, |best, candidate| {
        best.cmp(&candidate) == Ordering::Less
    })
}

/// Cursor to the largest item before the stop under `compare`.
///
/// # Errors
///
/// [`ScanError::EmptyRange`] if the sentinel is reached at `first`.
pub fn locate_max_by<C, S, F>(first: C, last: S, mut compare: F) -> Result<C>
where
    C: Cursor,
    S: BoundedSentinel<C>,
    F: FnMut(C::Item, C::Item) -> Ordering,
{
    extreme("locate_max_by", first, last, |best, candidate| {
        compare(best, candidate) == Ordering::Less
    })
}

/// Cursor to the smallest item before the stop.
///
/// # Errors
///
/// [`ScanError::EmptyRange`] if the sentinel is reached at `first`.
pub fn locate_min<C, S>(first: C, last: S) -> Result<C>
where
    C: Cursor,
    C::Item: Ord,
    S: BoundedSentinel<C>,
{
    extreme("locate_min", first, last, |best, candidate| {
        candidate.cmp(&best) == Ordering::Less
    })
}

/// Cursor to the smallest item before the stop under `compare`.
///
/// # Errors
///
/// [`ScanError::EmptyRange`] if the sentinel is reached at `first`.
pub fn locate_min_by<C, S, F>(first: C, last: S, mut compare: F) -> Result<C>
where
    C: Cursor,
    S: BoundedSentinel<C>,
    F: FnMut(C::Item, C::Item) -> Ordering,
{
    extreme("locate_min_by", first, last, |best, candidate| {
        compare(candidate, best) == Ordering::Less
    })
}

/// `replaces(best, candidate)` decides whether `candidate` strictly beats
/// the current best.
fn extreme<C, S, F>(algorithm: &'static str, mut first: C, last: S, mut replaces: F) -> Result<C>
where
    C: Cursor,
    S: BoundedSentinel<C>,
    F: FnMut(C::Item, C::Item) -> bool,
{
    if last.reached(&first) {
        debug!(algorithm, "rejected empty range");
        return Err(ScanError::EmptyRange { algorithm });
    }

    let mut best = first.clone();
    let mut steps = 1;
    first.advance();
    while !last.reached(&first) {
        if replaces(best.get(), first.get()) {
            best = first.clone();
        }
        first.advance();
        steps += 1;
    }

    finish(algorithm, steps, Outcome::Found);
    Ok(best)
}
