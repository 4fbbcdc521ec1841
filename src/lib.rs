//! # Sentinel-bounded scans
//!
//! Linear scans that stop at a composed logical condition instead of a
//! same-typed end cursor: "stop when predicate A holds, or predicate B holds,
//! or we reach position P". No virtual dispatch, no allocation.
//!
//! ## Pieces
//!
//! 1. **Cursors** ([`cursor`]): dereference, advance, compare to the same type
//! 2. **Sentinels** ([`sentinel`]): the `reached(&cursor)` capability, as
//!    position-mode or value-mode leaves combined with OR / AND / NOT
//! 3. **Scans** ([`scan`]): `locate`, `count`, `for_each`, `locate_max`, ...
//!    driven by a start cursor and a sentinel
//! 4. **Adaptors** ([`adaptor`]): key/value projections and filtered views
//!
//! Every scan requires a [`BoundedSentinel`](sentinel::BoundedSentinel), so a
//! predicate-only stop condition has to be OR-ed with a real end before it can
//! run. Forgetting the end is a compile error, not a read past the buffer.
//!
//! ## Usage Example
//!
//! ```
//! use sentinel_scan::prelude::*;
//!
//! let v = vec![1, 1, 3, 4, 1, 1];
//!
//! // Count the 1s before the first 4, without running past the end if there
//! // is no 4.
//! let stop = until(|i: &i32| *i == 4).or(v.end());
//! assert_eq!(scan::count(v.begin(), stop, &1), 2);
//!
//! // Same-typed end cursors still work and behave like the classic scans.
//! assert_eq!(scan::count(v.begin(), v.end(), &1), 4);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod adaptor; // Key/value projections and filtered views
pub mod cursor; // Cursor contract and sequence cursors
pub mod range; // Begin/sentinel pairs and the iterator bridge
pub mod scan; // Bounded scans
pub mod sentinel; // Stop conditions

pub use cursor::{CStrCursor, Cursor, MapCursor, NulTerminator, Sequence, SliceCursor};
pub use range::{bounds, BoundedIter, Bounds};
pub use sentinel::{at, until, until_any_of, until_any_value, until_value};
pub use sentinel::{BoundedSentinel, IntoNode, Node, Sentinel};

use thiserror::Error;

/// Everything needed to build sentinels and run scans.
pub mod prelude {
    pub use crate::adaptor::{filtered, keys, values};
    pub use crate::cursor::{Cursor, NulTerminator, Sequence};
    pub use crate::range::{bounds, Bounds};
    pub use crate::scan;
    pub use crate::sentinel::{and, at, negate, or};
    pub use crate::sentinel::{until, until_any_of, until_any_value, until_value};
    pub use crate::sentinel::{BoundedSentinel, IntoNode, Node, Sentinel};
    pub use crate::until_any;
}

/// Errors reported by scans and cursor constructors.
///
/// "Not found" is never an error: scans return the reached cursor instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// An extreme-element locator was given a region with no elements.
    #[error("{algorithm} requires a non-empty bounded region")]
    EmptyRange {
        /// Name of the scan that rejected the region.
        algorithm: &'static str,
    },

    /// A byte buffer meant to be NUL-terminated contains no NUL.
    #[error("buffer of {len} bytes has no NUL terminator")]
    MissingTerminator {
        /// Length of the rejected buffer.
        len: usize,
    },
}

/// Result alias for fallible scans.
pub type Result<T> = std::result::Result<T, ScanError>;
