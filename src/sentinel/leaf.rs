use std::borrow::Borrow;
use std::fmt;

use super::{sentinel_node, Bounded, Sentinel, Unbounded};
use crate::cursor::Cursor;

/// Position-mode leaf: reached when the cursor equals the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct At<C> {
    position: C,
}

impl<C> At<C> {
    /// Wrap a cursor as a sentinel leaf.
    pub fn new(position: C) -> Self {
        Self { position }
    }

    /// The stored position.
    pub fn position(&self) -> &C {
        &self.position
    }

    /// Unwrap the stored position.
    pub fn into_inner(self) -> C {
        self.position
    }
}

impl<C: PartialEq> Sentinel<C> for At<C> {
    type Termination = Bounded;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        *cursor == self.position
    }

    #[inline]
    fn bound_reached(&self, cursor: &C) -> bool {
        *cursor == self.position
    }
}

sentinel_node!([C] At<C>);

/// Value-mode leaf: reached when the predicate holds for the dereferenced
/// cursor.
#[derive(Clone, Copy)]
pub struct Until<P> {
    predicate: P,
}

impl<P> Until<P> {
    /// Wrap a unary predicate.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P> fmt::Debug for Until<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Until").finish_non_exhaustive()
    }
}

impl<C, P> Sentinel<C> for Until<P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool,
{
    type Termination = Unbounded;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        (self.predicate)(cursor.get())
    }
}

sentinel_node!([P] Until<P>);

/// Value-mode leaf: reached when the dereferenced cursor equals a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UntilValue<V> {
    value: V,
}

impl<C, V> Sentinel<C> for UntilValue<V>
where
    C: Cursor,
    C::Item: Borrow<V>,
    V: PartialEq,
{
    type Termination = Unbounded;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        let item = cursor.get();
        <C::Item as Borrow<V>>::borrow(&item) == &self.value
    }
}

sentinel_node!([V] UntilValue<V>);

/// Value-mode leaf: reached when the dereferenced cursor equals any of `N`
/// values, tested in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UntilAnyValue<V, const N: usize> {
    values: [V; N],
}

impl<C, V, const N: usize> Sentinel<C> for UntilAnyValue<V, N>
where
    C: Cursor,
    C::Item: Borrow<V>,
    V: PartialEq,
{
    type Termination = Unbounded;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        let item = cursor.get();
        let item = <C::Item as Borrow<V>>::borrow(&item);
        self.values.iter().any(|value| item == value)
    }
}

sentinel_node!([V, const N: usize] UntilAnyValue<V, N>);

/// Value-mode leaf over a tuple of predicates: reached when any of them
/// holds. Predicates are tried left to right and stop at the first hit.
#[derive(Clone, Copy)]
pub struct UntilAnyOf<T> {
    predicates: T,
}

impl<T> fmt::Debug for UntilAnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UntilAnyOf").finish_non_exhaustive()
    }
}

macro_rules! any_of_tuple {
    ($($pred:ident $binding:ident),+) => {
        impl<Cur, $($pred),+> Sentinel<Cur> for UntilAnyOf<($($pred,)+)>
        where
            Cur: Cursor,
            $($pred: Fn(Cur::Item) -> bool,)+
        {
            type Termination = Unbounded;

            #[inline]
            fn reached(&self, cursor: &Cur) -> bool {
                let ($($binding,)+) = &self.predicates;
                $($binding(cursor.get()))||+
            }
        }
    };
}

any_of_tuple!(P1 p1);
any_of_tuple!(P1 p1, P2 p2);
any_of_tuple!(P1 p1, P2 p2, P3 p3);
any_of_tuple!(P1 p1, P2 p2, P3 p3, P4 p4);
any_of_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5);
any_of_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6);
any_of_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7);
any_of_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8);

sentinel_node!([T] UntilAnyOf<T>);

/// Position-mode leaf at `position`.
pub fn at<C>(position: C) -> At<C> {
    At::new(position)
}

/// Value-mode leaf testing `predicate` against each dereferenced value.
///
/// The predicate's argument type must be written out (`|x: &i32| ..`),
/// since the cursor type is not known until the sentinel is used.
pub fn until<P>(predicate: P) -> Until<P> {
    Until::new(predicate)
}

/// Value-mode leaf reached at the first element equal to `value`.
pub fn until_value<V>(value: V) -> UntilValue<V> {
    UntilValue { value }
}

/// Value-mode leaf reached at the first element equal to any of `values`.
pub fn until_any_value<V, const N: usize>(values: [V; N]) -> UntilAnyValue<V, N> {
    UntilAnyValue { values }
}

/// Value-mode leaf reached when any predicate in the tuple holds
/// (one to eight predicates).
pub fn until_any_of<T>(predicates: T) -> UntilAnyOf<T> {
    UntilAnyOf { predicates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Sequence;

    #[test]
    fn test_until_value_borrows_through_references() {
        let words = ["alpha", "beta"];
        let stop = until_value("beta");
        assert!(!stop.reached(&words.begin()));
        assert!(stop.reached(&words.begin().advanced_by(1)));
    }

    #[test]
    fn test_until_any_value_tests_every_value() {
        let v = [7, 8, 9];
        let stop = until_any_value([9, 8]);
        assert!(!stop.reached(&v.begin()));
        assert!(stop.reached(&v.begin().advanced_by(1)));
        assert!(stop.reached(&v.begin().advanced_by(2)));
    }

    #[test]
    fn test_until_any_of_short_circuits() {
        use std::cell::Cell;

        let v = [1];
        let second_calls = Cell::new(0);
        let stop = until_any_of((
            |_: &i32| true,
            |_: &i32| {
                second_calls.set(second_calls.get() + 1);
                false
            },
        ));

        assert!(stop.reached(&v.begin()));
        assert_eq!(second_calls.get(), 0);
    }

    #[test]
    fn test_at_compares_positions() {
        let v = [0, 0, 0];
        let stop = at(v.begin().advanced_by(2));
        assert!(!stop.reached(&v.begin()));
        assert!(stop.reached(&v.begin().advanced_by(2)));
        assert_eq!(stop.into_inner().position(), 2);
    }
}
