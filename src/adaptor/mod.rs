//! Cursor adaptors
//!
//! Views built by wrapping an existing cursor: key/value projections over
//! pair-valued sequences and a filtered view that skips items failing a
//! predicate. They exist to show that wrapped cursors compose with
//! sentinels and scans like any other cursor.

mod filtered;
mod map;

pub use filtered::{filtered, Filtered, FilteredEnd};
pub use map::{keys, values, Keys, Pair, Values};
