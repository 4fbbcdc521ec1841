use super::{sentinel_node, Either, IntoNode, Sentinel, Unbounded};

/// `left OR right`, short-circuiting on `left`.
///
/// Both sides' position checks run before either side's value leaves, so
/// `until(p).or(end)` and `or(end, until(p))` stop at the same place without
/// calling `p` on the end cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Combine two nodes.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<C, L, R> Sentinel<C> for Or<L, R>
where
    L: Sentinel<C>,
    R: Sentinel<C>,
    L::Termination: Either<R::Termination>,
{
    type Termination = <L::Termination as Either<R::Termination>>::Output;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        self.bound_reached(cursor) || self.left.reached(cursor) || self.right.reached(cursor)
    }

    #[inline]
    fn bound_reached(&self, cursor: &C) -> bool {
        self.left.bound_reached(cursor) || self.right.bound_reached(cursor)
    }
}

sentinel_node!([L, R] Or<L, R>);

/// `left AND right`, short-circuiting on `left`.
///
/// Never bounded on its own: both sides may be true at different positions
/// and never at the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Combine two nodes.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<C, L, R> Sentinel<C> for And<L, R>
where
    L: Sentinel<C>,
    R: Sentinel<C>,
{
    type Termination = Unbounded;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        self.left.reached(cursor) && self.right.reached(cursor)
    }

    #[inline]
    fn bound_reached(&self, cursor: &C) -> bool {
        self.left.bound_reached(cursor) && self.right.bound_reached(cursor)
    }
}

sentinel_node!([L, R] And<L, R>);

/// Negation of a node. Never bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<S> {
    inner: S,
}

impl<S> Not<S> {
    /// Negate a node.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<C, S> Sentinel<C> for Not<S>
where
    S: Sentinel<C>,
{
    type Termination = Unbounded;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        !self.inner.reached(cursor)
    }
}

sentinel_node!([S] Not<S>);

/// `left OR right`; either operand may be a node or a cursor.
pub fn or<L: IntoNode, R: IntoNode>(left: L, right: R) -> Or<L::Node, R::Node> {
    Or::new(left.into_node(), right.into_node())
}

/// `left AND right`; either operand may be a node or a cursor.
pub fn and<L: IntoNode, R: IntoNode>(left: L, right: R) -> And<L::Node, R::Node> {
    And::new(left.into_node(), right.into_node())
}

/// Negation; the operand may be a node or a cursor.
pub fn negate<S: IntoNode>(inner: S) -> Not<S::Node> {
    Not::new(inner.into_node())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::cursor::Sequence;
    use crate::sentinel::{until, until_value, Node};

    #[test]
    fn test_or_short_circuits_right_branch() {
        let v = [1, 2];
        let right_calls = Cell::new(0);
        let stop = until(|_: &i32| true).or(until(|_: &i32| {
            right_calls.set(right_calls.get() + 1);
            true
        }));

        assert!(stop.reached(&v.begin()));
        assert_eq!(right_calls.get(), 0);
    }

    #[test]
    fn test_or_checks_end_before_left_predicate() {
        let v = [1, 2];
        let left_calls = Cell::new(0);
        let stop = until(|_: &i32| {
            left_calls.set(left_calls.get() + 1);
            false
        })
        .or(v.end());

        // Dereferencing `v.end()` would panic.
        assert!(stop.reached(&v.end()));
        assert!(stop.bound_reached(&v.end()));
        assert_eq!(left_calls.get(), 0);

        assert!(!stop.reached(&v.begin()));
        assert_eq!(left_calls.get(), 1);
    }

    #[test]
    fn test_nested_or_finds_end_on_any_branch() {
        let v = [1, 2, 3];
        let stop = until_value(7).or(until_value(8)).or(until_value(9).or(v.end()));

        assert!(stop.reached(&v.end()));
        assert!(!stop.bound_reached(&v.begin()));
        assert!(!stop.reached(&v.begin()));
    }

    #[test]
    fn test_value_leaves_have_no_bound() {
        let v = [1];
        assert!(until_value(1).reached(&v.begin()));
        assert!(!until_value(1).bound_reached(&v.begin()));
        assert!(!until_value(1).and(v.begin()).bound_reached(&v.begin()));
    }

    #[test]
    fn test_and_short_circuits_right_branch() {
        let v = [1, 2];
        let right_calls = Cell::new(0);
        let stop = until(|_: &i32| false).and(until(|_: &i32| {
            right_calls.set(right_calls.get() + 1);
            true
        }));

        assert!(!stop.reached(&v.begin()));
        assert_eq!(right_calls.get(), 0);
    }

    #[test]
    fn test_and_requires_both() {
        let v = [4, 6, 7];
        let even_and_big = until(|i: &i32| i % 2 == 0).and(until(|i: &i32| *i > 5));

        assert!(!even_and_big.reached(&v.begin()));
        assert!(even_and_big.reached(&v.begin().advanced_by(1)));
        assert!(!even_and_big.reached(&v.begin().advanced_by(2)));
    }

    #[test]
    fn test_negate_inverts() {
        let v = [3];
        assert!(!until_value(3).negate().reached(&v.begin()));
        assert!(negate(until_value(4)).reached(&v.begin()));
    }

    #[test]
    fn test_free_or_accepts_cursor_on_the_left() {
        let v = [1, 2, 3];
        let stop = or(v.begin().advanced_by(2), until_value(9));
        assert!(stop.reached(&v.begin().advanced_by(2)));
        assert!(!stop.reached(&v.begin()));
    }

    #[test]
    fn test_composition_leaves_operands_untouched() {
        let v = [1, 2, 3];
        let left = until_value(1);
        let composed = left.or(until_value(3));
        // `left` is `Copy`; the composite holds its own copy.
        assert!(left.reached(&v.begin()));
        assert!(composed.reached(&v.begin().advanced_by(2)));
        assert!(!left.reached(&v.begin().advanced_by(2)));
    }
}
