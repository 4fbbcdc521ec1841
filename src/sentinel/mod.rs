//! Sentinels: composable stop conditions
//!
//! A sentinel answers one question about a cursor: "is this where the scan
//! stops?". Leaves answer it in one of two fixed ways, chosen by the leaf's
//! type when it is built:
//!
//! - **Position mode** ([`At`], or any cursor used directly): the cursor is
//!   compared with a stored position. The cursor is never dereferenced.
//! - **Value mode** ([`Until`], [`UntilValue`], [`UntilAnyValue`],
//!   [`UntilAnyOf`]): the cursor is dereferenced and the value tested.
//!
//! Composites ([`Or`], [`And`], [`Not`]) combine sentinels by value and
//! evaluate left to right with short-circuit.
//!
//! ```
//! use sentinel_scan::prelude::*;
//!
//! let data = [1, 2, 3, 4, 5];
//! let stop = until(|x: &i32| *x == 4).or(data.end());
//! let pos = scan::locate(data.begin(), stop, &9);
//! assert_eq!(*pos.get(), 4);
//! ```

mod leaf;
mod node;
mod termination;

pub use leaf::{at, until, until_any_of, until_any_value, until_value};
pub use leaf::{At, Until, UntilAnyOf, UntilAnyValue, UntilValue};
pub use node::{and, negate, or, And, Not, Or};
pub use termination::{Bounded, Either, Termination, Unbounded};

/// The `reached` capability: decides whether a cursor of type `C` is the
/// stopping position.
///
/// Implementations must be pure with respect to the cursor: calling
/// `reached` twice on the same position gives the same answer.
///
/// A [`Bounded`] sentinel can be asked about the end cursor itself: its
/// position checks run before any value leaf, so the end is never
/// dereferenced.
pub trait Sentinel<C> {
    /// Whether this sentinel is guaranteed to stop a scan over `C`.
    type Termination: Termination;

    /// Whether `cursor` is the stopping position.
    fn reached(&self, cursor: &C) -> bool;

    /// Position-only part of [`reached`](Sentinel::reached).
    ///
    /// Never dereferences `cursor`, and implies `reached`. For a bounded
    /// sentinel it holds no later than the physical end. Value leaves keep
    /// the default `false`.
    #[inline]
    fn bound_reached(&self, _cursor: &C) -> bool {
        false
    }
}

/// A sentinel that is guaranteed to be reached no later than the physical
/// end of the sequence. Every scan requires one.
///
/// A predicate on its own could run past the end, so it is rejected:
///
/// ```compile_fail
/// use sentinel_scan::prelude::*;
///
/// let v = vec![1, 2, 3];
/// scan::count(v.begin(), until(|i: &i32| *i == 4), &1);
/// ```
///
/// So are `and` and `negate`, even with an end cursor inside them:
///
/// ```compile_fail
/// use sentinel_scan::prelude::*;
///
/// let v = vec![1, 2, 3];
/// scan::count(v.begin(), until_value(1).and(v.end()), &1);
/// ```
///
/// ```compile_fail
/// use sentinel_scan::prelude::*;
///
/// let v = vec![1, 2, 3];
/// scan::count(v.begin(), negate(v.end()), &1);
/// ```
///
/// A byte slice may hold no NUL, so the terminator alone does not bound it:
///
/// ```compile_fail
/// use sentinel_scan::prelude::*;
///
/// let buf: &[u8] = b"abc";
/// scan::distance(buf.begin(), NulTerminator);
/// ```
///
/// OR-ing any of them with a real end makes the scan legal:
///
/// ```
/// use sentinel_scan::prelude::*;
///
/// let v = vec![1, 2, 3];
/// assert_eq!(scan::count(v.begin(), until(|i: &i32| *i == 4).or(v.end()), &1), 1);
/// assert_eq!(scan::count(v.begin(), until_value(1).and(v.end()).or(v.end()), &1), 1);
/// assert_eq!(scan::count(v.begin(), negate(v.end()).or(v.end()), &1), 0);
///
/// let buf: &[u8] = b"abc";
/// assert_eq!(scan::distance(buf.begin(), NulTerminator.or(buf.end())), 3);
/// ```
pub trait BoundedSentinel<C>: Sentinel<C, Termination = Bounded> {}

impl<C, S> BoundedSentinel<C> for S where S: Sentinel<C, Termination = Bounded> + ?Sized {}

impl<C, S> Sentinel<C> for &S
where
    S: Sentinel<C> + ?Sized,
{
    type Termination = S::Termination;

    #[inline]
    fn reached(&self, cursor: &C) -> bool {
        (**self).reached(cursor)
    }

    #[inline]
    fn bound_reached(&self, cursor: &C) -> bool {
        (**self).bound_reached(cursor)
    }
}

/// Sentinel tree node. Provides the combinators; none of them need to know
/// the cursor type, so sentinels can be built before the sequence exists.
pub trait Node: Sized {
    /// `self OR rhs`.
    ///
    /// Position checks anywhere in the combined tree run first, so an end
    /// cursor on either side stops the scan before a predicate sees it. Value
    /// leaves then run left to right, and `rhs` is only evaluated when `self`
    /// is not reached.
    fn or<R: IntoNode>(self, rhs: R) -> Or<Self, R::Node> {
        Or::new(self, rhs.into_node())
    }

    /// `self AND rhs`. `rhs` is only evaluated when `self` is reached.
    fn and<R: IntoNode>(self, rhs: R) -> And<Self, R::Node> {
        And::new(self, rhs.into_node())
    }

    /// Logical negation.
    fn negate(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Conversion into a sentinel tree node.
///
/// Nodes convert to themselves; cursors convert to an [`At`] leaf, which is
/// how a real end cursor joins a predicate-built sentinel.
pub trait IntoNode {
    /// Node produced.
    type Node: Node;

    /// Perform the conversion.
    fn into_node(self) -> Self::Node;
}

/// Implements [`Node`] and the identity [`IntoNode`] for a sentinel type.
macro_rules! sentinel_node {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> $crate::sentinel::Node for $ty {}

        impl<$($gen)*> $crate::sentinel::IntoNode for $ty {
            type Node = Self;

            #[inline]
            fn into_node(self) -> Self {
                self
            }
        }
    };
}

pub(crate) use sentinel_node;

/// Builds a sentinel reached when any of the given value predicates holds.
///
/// `until_any!(p1, p2, p3)` is `until(p1).or(until(p2).or(until(p3)))`.
#[macro_export]
macro_rules! until_any {
    ($p:expr $(,)?) => {
        $crate::sentinel::until($p)
    };
    ($p:expr, $($rest:expr),+ $(,)?) => {
        $crate::sentinel::or($crate::sentinel::until($p), $crate::until_any!($($rest),+))
    };
}
