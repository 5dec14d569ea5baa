//! Error types for note panel transitions.

use super::{HighlightId, ScreenshotId};
use thiserror::Error;

/// Errors returned by note panel transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteError {
    /// A highlight range is inverted or zero-length.
    #[error("highlight range {start}..{end} is not a forward range")]
    InvalidHighlightRange {
        /// Range start byte offset.
        start: usize,
        /// Range end byte offset.
        end: usize,
    },

    /// A highlight range extends past the end of the content.
    #[error("highlight range {start}..{end} exceeds content length {len}")]
    HighlightOutOfBounds {
        /// Range start byte offset.
        start: usize,
        /// Range end byte offset.
        end: usize,
        /// Current content length in bytes.
        len: usize,
    },

    /// No highlight has the given id.
    #[error("unknown highlight: {0}")]
    UnknownHighlight(HighlightId),

    /// A capture with identical content already exists.
    #[error("duplicate screenshot capture: {0}")]
    DuplicateScreenshot(String),

    /// No screenshot has the given id.
    #[error("unknown screenshot: {0}")]
    UnknownScreenshot(ScreenshotId),

    /// An insertion position is past the end of the content or splits a
    /// character.
    #[error("cursor position {position} is not a valid offset in content of length {len}")]
    InvalidCursor {
        /// Requested byte offset.
        position: usize,
        /// Current content length in bytes.
        len: usize,
    },

    /// A macro name is empty after trimming.
    #[error("macro name must not be empty")]
    EmptyMacroName,

    /// No macro has the given name.
    #[error("unknown macro: {0}")]
    UnknownMacro(String),
}
