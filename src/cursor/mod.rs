//! Cursors into sequences
//!
//! A cursor is a positional handle: it can be dereferenced to the value it
//! currently denotes, advanced to the next position, and compared with
//! another cursor of the *same* type. Cursors never know where the sequence
//! ends; that knowledge lives in a [`Sentinel`](crate::sentinel::Sentinel).

/// Implements the position-mode capabilities for a cursor type: a cursor is
/// a bounded sentinel for its own type, and composes into sentinel trees as
/// an [`At`](crate::sentinel::At) leaf.
macro_rules! position_sentinel {
    ([$($gen:tt)*] $ty:ty $(where $($bound:tt)*)?) => {
        impl<$($gen)*> $crate::sentinel::Sentinel<$ty> for $ty
        $(where $($bound)*)?
        {
            type Termination = $crate::sentinel::Bounded;

            #[inline]
            fn reached(&self, cursor: &$ty) -> bool {
                self == cursor
            }

            #[inline]
            fn bound_reached(&self, cursor: &$ty) -> bool {
                self == cursor
            }
        }

        impl<$($gen)*> $crate::sentinel::IntoNode for $ty
        $(where $($bound)*)?
        {
            type Node = $crate::sentinel::At<$ty>;

            #[inline]
            fn into_node(self) -> Self::Node {
                $crate::sentinel::At::new(self)
            }
        }
    };
}

pub(crate) use position_sentinel;

mod cstr;
mod map;
mod slice;

pub use cstr::{CStrCursor, NulTerminator};
pub use map::MapCursor;
pub use slice::SliceCursor;

/// Positional handle into a sequence.
///
/// Dereferencing a cursor that sits on the physical end of its sequence is a
/// caller contract violation and panics, the same way out-of-bounds slice
/// indexing does. The scan algorithms only dereference while their sentinel
/// reports "not reached", so they never trigger it.
pub trait Cursor: Clone + PartialEq {
    /// Value produced by dereferencing the cursor.
    type Item;

    /// Dereference the current position.
    fn get(&self) -> Self::Item;

    /// Move to the next position.
    fn advance(&mut self);
}

/// A sequence that can hand out a begin and an end cursor.
///
/// Implemented for slices (and therefore `Vec` through deref), ordered maps
/// and NUL-terminated strings.
pub trait Sequence {
    /// Cursor type borrowing from the sequence.
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Cursor on the first element.
    fn begin(&self) -> Self::Cursor<'_>;

    /// Cursor one past the last element.
    fn end(&self) -> Self::Cursor<'_>;
}
