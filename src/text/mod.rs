//! Selections and span arithmetic over UTF-16 buffers.
//!
//! Hosts report selections in UTF-16 code units, so every offset in this
//! crate is a UTF-16 offset. The [`span`] helpers work directly on the
//! encoded `u16` units.

pub mod span;

use serde::Serialize;
use thiserror::Error;

/// A caret or highlighted range, in UTF-16 code units.
///
/// `start == end` is a caret with nothing selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

/// Why a host-supplied selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection start {start} is after selection end {end}")]
    Inverted { start: usize, end: usize },
    #[error("selection end {end} is past the end of the buffer ({len} UTF-16 units)")]
    OutOfBounds { end: usize, len: usize },
}

impl Selection {
    /// Create a selection.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`Selection::checked`] for untrusted input.
    pub const fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "selection start is after selection end");
        Self { start, end }
    }

    /// A collapsed selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Validate a selection against `text` instead of panicking.
    pub fn checked(text: &str, start: usize, end: usize) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::Inverted { start, end });
        }
        let len = text.encode_utf16().count();
        if end > len {
            return Err(SelectionError::OutOfBounds { end, len });
        }
        Ok(Self { start, end })
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}
