//! NUL-terminated buffers
//!
//! The end of a C string is not a position but a value: the first NUL byte.
//! [`NulTerminator`] is the sentinel that compares by dereferencing, so a
//! scan over a C string costs one pass instead of `strlen` plus a pass.

use std::ffi::CStr;
use std::fmt;
use std::ptr;

use super::{position_sentinel, Cursor, Sequence, SliceCursor};
use crate::sentinel::{Bounded, IntoNode, Sentinel, Unbounded};
use crate::{Result, ScanError};

/// Cursor over the bytes of a NUL-terminated string.
///
/// The terminator itself is dereferenceable, which is what lets
/// [`NulTerminator`] test for it without knowing the length up front.
#[derive(Clone, Copy)]
pub struct CStrCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> CStrCursor<'a> {
    /// Cursor on the first byte of `s`.
    pub fn new(s: &'a CStr) -> Self {
        Self {
            bytes: s.to_bytes_with_nul(),
            position: 0,
        }
    }

    /// Cursor over `bytes` up to and including the first NUL.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        CStr::from_bytes_until_nul(bytes)
            .map(Self::new)
            .map_err(|_| ScanError::MissingTerminator { len: bytes.len() })
    }

    /// Offset from the start of the string.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl PartialEq for CStrCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.bytes.as_ptr(), other.bytes.as_ptr()) && self.position == other.position
    }
}

impl Eq for CStrCursor<'_> {}

impl fmt::Debug for CStrCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CStrCursor")
            .field("position", &self.position)
            .finish()
    }
}

impl Cursor for CStrCursor<'_> {
    type Item = u8;

    #[inline]
    fn get(&self) -> u8 {
        self.bytes[self.position]
    }

    #[inline]
    fn advance(&mut self) {
        self.position += 1;
    }
}

position_sentinel!(['a] CStrCursor<'a>);

impl Sequence for CStr {
    type Cursor<'a> = CStrCursor<'a>;

    fn begin(&self) -> CStrCursor<'_> {
        CStrCursor::new(self)
    }

    /// Cursor on the terminator. Computing it is O(n); prefer
    /// [`NulTerminator`] when only the scan result is needed.
    fn end(&self) -> CStrCursor<'_> {
        let mut end = CStrCursor::new(self);
        end.position = self.to_bytes().len();
        end
    }
}

/// Sentinel reached when the cursor denotes a NUL byte.
///
/// Over a [`CStrCursor`] the terminator is guaranteed to exist, so the
/// sentinel is [`Bounded`]. Over a plain byte slice it is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NulTerminator;

impl Sentinel<CStrCursor<'_>> for NulTerminator {
    type Termination = Bounded;

    #[inline]
    fn reached(&self, cursor: &CStrCursor<'_>) -> bool {
        cursor.get() == 0
    }

    // The terminator is part of the buffer, so reading it is always in bounds.
    #[inline]
    fn bound_reached(&self, cursor: &CStrCursor<'_>) -> bool {
        cursor.get() == 0
    }
}

impl Sentinel<SliceCursor<'_, u8>> for NulTerminator {
    type Termination = Unbounded;

    #[inline]
    fn reached(&self, cursor: &SliceCursor<'_, u8>) -> bool {
        *cursor.get() == 0
    }
}

impl IntoNode for NulTerminator {
    type Node = Self;

    fn into_node(self) -> Self {
        self
    }
}

impl crate::sentinel::Node for NulTerminator {}
