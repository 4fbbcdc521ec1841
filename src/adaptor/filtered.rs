use std::fmt;

use crate::cursor::{position_sentinel, Cursor};
use crate::range::Bounds;
use crate::sentinel::{sentinel_node, Bounded, BoundedSentinel, Sentinel};

/// Cursor that only stops on items satisfying a predicate.
///
/// On construction and after every advance it skips forward while the
/// predicate fails, so it always denotes either a satisfying item or the
/// position where its end sentinel is reached.
pub struct Filtered<C, E, P> {
    inner: C,
    end: E,
    predicate: P,
}

impl<C, E, P> Filtered<C, E, P>
where
    C: Cursor,
    E: BoundedSentinel<C>,
    P: Fn(C::Item) -> bool,
{
    /// Wrap `inner`, bounded by `end`, keeping items that satisfy `predicate`.
    pub fn new(inner: C, end: E, predicate: P) -> Self {
        let mut cursor = Self {
            inner,
            end,
            predicate,
        };
        cursor.settle();
        cursor
    }

    /// Whether the underlying end sentinel is reached.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.end.reached(&self.inner)
    }

    fn settle(&mut self) {
        while !self.end.reached(&self.inner) && !(self.predicate)(self.inner.get()) {
            self.inner.advance();
        }
    }
}

impl<C, E, P> Filtered<C, E, P> {
    /// The wrapped cursor.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clone, E: Clone, P: Clone> Clone for Filtered<C, E, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            end: self.end.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<C: PartialEq, E, P> PartialEq for Filtered<C, E, P> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: fmt::Debug, E, P> fmt::Debug for Filtered<C, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<C, E, P> Cursor for Filtered<C, E, P>
where
    C: Cursor,
    E: BoundedSentinel<C> + Clone,
    P: Fn(C::Item) -> bool + Clone,
{
    type Item = C::Item;

    #[inline]
    fn get(&self) -> C::Item {
        self.inner.get()
    }

    fn advance(&mut self) {
        self.inner.advance();
        self.settle();
    }
}

position_sentinel!(
    [C, E, P] Filtered<C, E, P>
    where
        C: Cursor,
        E: BoundedSentinel<C> + Clone,
        P: Fn(C::Item) -> bool + Clone
);

/// End of a filtered view: reached when the wrapped cursor reaches the end
/// sentinel it was built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilteredEnd;

impl<C, E, P> Sentinel<Filtered<C, E, P>> for FilteredEnd
where
    C: Cursor,
    E: BoundedSentinel<C>,
    P: Fn(C::Item) -> bool,
{
    type Termination = Bounded;

    #[inline]
    fn reached(&self, cursor: &Filtered<C, E, P>) -> bool {
        cursor.is_exhausted()
    }

    #[inline]
    fn bound_reached(&self, cursor: &Filtered<C, E, P>) -> bool {
        cursor.is_exhausted()
    }
}

sentinel_node!([] FilteredEnd);

/// Filtered view of `[begin, end)` keeping items that satisfy `predicate`.
pub fn filtered<C, E, P>(begin: C, end: E, predicate: P) -> Bounds<Filtered<C, E, P>, FilteredEnd>
where
    C: Cursor,
    E: BoundedSentinel<C>,
    P: Fn(C::Item) -> bool,
{
    Bounds::new(Filtered::new(begin, end, predicate), FilteredEnd)
}
